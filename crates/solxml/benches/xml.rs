use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use solxml::{from_str, to_string};

const SIMPLE_XML: &str = "<root><child>text</child></root>";
const ATTR_XML: &str = r#"<root id="1" name="test"><item value="42"/></root>"#;

fn wide_document(entries: usize) -> String {
    let mut doc = String::from("<list>");
    for i in 0..entries {
        doc.push_str(&format!(r#"<entry id="{i}" label="item {i}">body {i}</entry>"#));
    }
    doc.push_str("</list>");
    doc
}

fn bench_simple(c: &mut Criterion) {
    c.bench_function("solxml_read_simple", |b| {
        b.iter(|| from_str(black_box(SIMPLE_XML)))
    });
}

fn bench_attr(c: &mut Criterion) {
    c.bench_function("solxml_read_attr", |b| {
        b.iter(|| from_str(black_box(ATTR_XML)))
    });
}

fn bench_wide(c: &mut Criterion) {
    let doc = wide_document(1_000);
    c.bench_function("solxml_read_wide", |b| b.iter(|| from_str(black_box(&doc))));

    if let Ok(tree) = from_str(&doc) {
        c.bench_function("solxml_write_wide", |b| {
            b.iter(|| to_string(black_box(&tree)))
        });
    }
}

criterion_group!(benches, bench_simple, bench_attr, bench_wide);
criterion_main!(benches);
