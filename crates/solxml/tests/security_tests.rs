#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use solxml::xml::reader::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE};
use solxml::{from_str, from_str_with_config, read_value, Config, ErrorKind};

fn nested(depth: usize) -> String {
    let mut doc = "<n>".repeat(depth);
    doc.push_str(&"</n>".repeat(depth));
    doc
}

#[test]
fn test_max_input_size() {
    let padding = " ".repeat(DEFAULT_MAX_SIZE);
    let input = format!("<a/>{padding}");

    let result = from_str(&input);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(
            e.kind(),
            &ErrorKind::MaxSizeExceeded {
                max: DEFAULT_MAX_SIZE
            }
        );
    }
}

#[test]
fn test_nesting_at_the_limit_is_accepted() {
    let depth = usize::from(DEFAULT_MAX_DEPTH);
    assert!(from_str(&nested(depth)).is_ok());
}

#[test]
fn test_stack_overflow_prevention() {
    let depth = usize::from(DEFAULT_MAX_DEPTH) + 1;
    let result = from_str(&nested(depth));
    assert!(
        result.is_err(),
        "nesting past {DEFAULT_MAX_DEPTH} levels should be rejected"
    );
    if let Err(e) = result {
        assert_eq!(
            e.kind(),
            &ErrorKind::MaxDepthExceeded {
                max: DEFAULT_MAX_DEPTH
            }
        );
    }
}

#[test]
fn test_very_deep_input_fails_fast() {
    let result = read_value(&"<n>".repeat(200_000));
    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ErrorKind::MaxDepthExceeded { .. })
    ));
}

#[test]
fn test_unlimited_config() {
    let input = nested(usize::from(DEFAULT_MAX_DEPTH) + 50);
    assert!(from_str_with_config(&input, Config::unlimited()).is_ok());
}

#[test]
fn test_truncated_documents_do_not_panic() {
    let doc = r#"<root a="1"><child b="two">text</child><empty/></root>"#;
    for end in 0..doc.len() {
        let result = from_str(&doc[..end]);
        assert!(result.is_err(), "prefix {:?} should fail", &doc[..end]);
    }
    assert!(from_str(doc).is_ok());
}
