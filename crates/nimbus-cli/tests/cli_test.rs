use assert_cmd::prelude::*;
use std::fs;
use std::io::Write as _;
use std::process::Command;

const DOC: &str = "rust rust rust cloud cloud spiral the of and";

fn write_doc(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("doc.txt");
    fs::write(&path, DOC).expect("write fixture");
    path
}

#[test]
fn words_prints_the_filtered_frequency_table() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(&tmp);

    let exe = assert_cmd::cargo_bin!("nimbus-cli");
    let output = Command::new(exe)
        .args(["words", doc.to_string_lossy().as_ref()])
        .output()
        .expect("run words");
    assert!(output.status.success());

    let counts: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let arr = counts.as_array().expect("array");
    assert_eq!(arr.len(), 3, "stopwords must be filtered out");
    assert_eq!(arr[0]["text"], "rust");
    assert_eq!(arr[0]["count"], 3);
}

#[test]
fn layout_prints_placed_tags_as_json() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(&tmp);

    let exe = assert_cmd::cargo_bin!("nimbus-cli");
    let output = Command::new(exe)
        .args(["layout", "--pretty", doc.to_string_lossy().as_ref()])
        .output()
        .expect("run layout");
    assert!(output.status.success());

    let layout: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let tags = layout["tags"].as_array().expect("tags array");
    assert_eq!(tags.len(), 3);
    assert_eq!(tags[0]["text"], "rust");
    assert!(layout["bounds"].is_object());
}

#[test]
fn render_writes_svg_to_stdout_by_default() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(&tmp);

    let exe = assert_cmd::cargo_bin!("nimbus-cli");
    let output = Command::new(exe)
        .args(["render", doc.to_string_lossy().as_ref()])
        .output()
        .expect("run render");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf8 svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">rust</text>"));
}

#[test]
fn render_png_writes_next_to_the_input_by_default() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(&tmp);

    let exe = assert_cmd::cargo_bin!("nimbus-cli");
    Command::new(exe)
        .args(["render", "--format", "png", doc.to_string_lossy().as_ref()])
        .assert()
        .success();

    let out = doc.with_extension("png");
    let bytes = fs::read(&out).expect("default png output");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "output is not a PNG");
}

#[test]
fn render_svg_respects_out_flag() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(&tmp);
    let out = tmp.path().join("cloud.svg");

    let exe = assert_cmd::cargo_bin!("nimbus-cli");
    Command::new(exe)
        .args([
            "render",
            "--id",
            "cli-cloud",
            "--out",
            out.to_string_lossy().as_ref(),
            doc.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("svg file");
    assert!(svg.starts_with("<svg id=\"cli-cloud\""));
}

#[test]
fn custom_stopword_file_is_applied() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(&tmp);

    let stops = tmp.path().join("stops.txt");
    let mut f = fs::File::create(&stops).expect("stops file");
    writeln!(f, "rust").expect("write");

    let exe = assert_cmd::cargo_bin!("nimbus-cli");
    let output = Command::new(exe)
        .args([
            "words",
            "--stopwords",
            stops.to_string_lossy().as_ref(),
            doc.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("run words");
    assert!(output.status.success());

    let counts: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let texts: Vec<&str> = counts
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["text"].as_str().expect("text"))
        .collect();
    assert!(!texts.contains(&"rust"), "custom stoplist must drop 'rust'");
    // The built-in English list is replaced, not merged.
    assert!(texts.contains(&"the"));
}

#[test]
fn unknown_flag_exits_with_usage_error() {
    let exe = assert_cmd::cargo_bin!("nimbus-cli");
    Command::new(exe)
        .args(["words", "--definitely-not-a-flag"])
        .assert()
        .code(2);
}

#[test]
fn unsupported_input_format_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let doc = tmp.path().join("doc.docx");
    fs::write(&doc, DOC).expect("write fixture");

    let exe = assert_cmd::cargo_bin!("nimbus-cli");
    Command::new(exe)
        .args(["words", doc.to_string_lossy().as_ref()])
        .assert()
        .code(1);
}
