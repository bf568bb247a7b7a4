#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::as_conversions)]

use proptest::collection::vec;
use proptest::prelude::*;
use solxml::{
    from_bytes, from_str, read_value, to_string, to_xml_string, Attribute, Element, Value,
};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_.:-]{0,8}"
}

// any text without a quote, markup included
fn attribute_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>/=.,!?&-]{0,16}"
}

// at least one visible character and no '<'
fn body_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,2}[a-zA-Z0-9>&=/.,!?-]{1,12}( [a-zA-Z0-9]{1,6}){0,2}[ \n]{0,2}"
}

fn attributes_strategy() -> impl Strategy<Value = Vec<Attribute>> {
    vec(
        (name_strategy(), attribute_value_strategy())
            .prop_map(|(name, value)| Attribute { name, value }),
        0..4,
    )
}

fn element_strategy() -> impl Strategy<Value = Element> {
    let leaf = (
        name_strategy(),
        attributes_strategy(),
        prop_oneof![Just(String::new()), body_strategy()],
    )
        .prop_map(|(name, attributes, body)| Element {
            name,
            body,
            attributes,
            children: Vec::new(),
        });

    leaf.prop_recursive(4, 48, 4, |inner| {
        (name_strategy(), attributes_strategy(), vec(inner, 1..4)).prop_map(
            |(name, attributes, children)| Element {
                name,
                body: String::new(),
                attributes,
                children,
            },
        )
    })
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e9..1.0e9f64).prop_map(Value::Double),
        any::<i32>().prop_map(|n| Value::Signed(i64::from(n))),
        "[a-zA-Z]".prop_map(|s| Value::Char(s.chars().next().unwrap())),
        "[a-zA-Z0-9 <>.-]{0,12}".prop_map(Value::String),
    ]
}

// integers come back as doubles
fn normalized(value: &Value) -> Value {
    match value {
        Value::Signed(n) => Value::Double(*n as f64),
        Value::Unsigned(n) => Value::Double(*n as f64),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn test_element_tree_roundtrip(element in element_strategy()) {
        let text = to_string(&element).unwrap();
        let parsed = from_str(&text).unwrap();
        prop_assert_eq!(parsed, element);
    }

    #[test]
    fn test_written_text_is_stable(element in element_strategy()) {
        let first = to_string(&element).unwrap();
        let second = to_string(&from_str(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored(
        element in element_strategy(),
        before in "[ \t\r\n]{0,4}",
        after in "[ \t\r\n]{0,4}",
    ) {
        let text = format!("{before}{}{after}", to_string(&element).unwrap());
        prop_assert_eq!(from_str(&text).unwrap(), element);
    }

    #[test]
    fn test_scalar_array_roundtrip(items in vec(scalar_strategy(), 1..10)) {
        let value = Value::from(items.clone());
        let xml = to_xml_string(&value).unwrap();
        let back = read_value(&xml).unwrap();

        let expected: Vec<Value> = items.iter().map(normalized).collect();
        prop_assert_eq!(back, Value::from(expected));
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(bytes in vec(any::<u8>(), 0..256)) {
        let _ = from_bytes(&bytes);
    }

    #[test]
    fn test_markup_like_input_never_panics(input in "[<>/=\" a-c\n]{0,64}") {
        if let Ok(root) = from_str(&input) {
            prop_assert!(!root.name.is_empty());
        }
        let _ = read_value(&input);
    }
}
