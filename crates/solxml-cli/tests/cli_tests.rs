use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn solxml() -> Command {
    Command::cargo_bin("solxml").unwrap()
}

#[test]
fn test_stdin_to_json_value() {
    solxml()
        .write_stdin(r#"<point x="1" y="-2"><label>origin</label></point>"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""x": 1.0"#))
        .stdout(predicate::str::contains(r#""y": -2.0"#))
        .stdout(predicate::str::contains(r#""label": "origin""#));
}

#[test]
fn test_repeated_children_print_as_json_array() {
    solxml()
        .write_stdin("<list><n>1</n><n>true</n></list>")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_file_to_xml_uses_input_root() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.xml");
    fs::write(&input, "<list>\n  <n>1</n>\n  <n>2</n>\n</list>\n").unwrap();

    solxml()
        .arg(&input)
        .args(["--to", "xml"])
        .assert()
        .success()
        .stdout(predicate::eq(concat!(
            "<list>",
            r#"<solaire_array_element type="number" value="1"/>"#,
            r#"<solaire_array_element type="number" value="2"/>"#,
            "</list>\n"
        )));
}

#[test]
fn test_root_override() {
    solxml()
        .args(["-t", "xml", "--root", "settings"])
        .write_stdin(r#"<config debug="true"/>"#)
        .assert()
        .success()
        .stdout(predicate::eq("<settings debug=\"true\"/>\n"));
}

#[test]
fn test_tree_output_to_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.xml");

    solxml()
        .args(["--to", "tree", "-o"])
        .arg(&output)
        .write_stdin("<a>\n  <b k=\"v\">  text </b>\n  <c></c>\n</a>")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "<a><b k=\"v\">  text </b><c/></a>\n");
}

#[test]
fn test_malformed_input_fails() {
    solxml()
        .write_stdin("<a></b>")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to parse input"))
        .stderr(predicate::str::contains("mismatched"));
}

#[test]
fn test_scalar_root_cannot_be_written_as_xml() {
    solxml()
        .args(["--to", "xml"])
        .write_stdin("<n>42</n>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write value"));
}

#[test]
fn test_max_depth_flag() {
    solxml()
        .args(["--max-depth", "2"])
        .write_stdin("<a><b><c/></b></a>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("depth"));

    solxml()
        .args(["--max-depth", "0"])
        .write_stdin("<a><b><c/></b></a>")
        .assert()
        .success();
}

#[test]
fn test_empty_stdin_fails() {
    solxml()
        .write_stdin("  \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input provided on stdin"));
}

#[test]
fn test_missing_input_file_fails() {
    solxml()
        .arg("does-not-exist.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));
}
