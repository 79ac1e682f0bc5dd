//! End-to-end CLI tests for the tagspan binary.

// `Command::cargo_bin` is deprecated in assert_cmd >=2.0.17 in favor of
// `cargo::cargo_bin_cmd!` macro. Suppressed until migration to the new API.
#![allow(deprecated)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a command isolated from the user's config directory.
fn tagspan(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tagspan").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home).env_remove("RUST_LOG");
    cmd
}

fn write_tagspan_config(config_home: &Path, contents: &str) {
    let config_dir = config_home.join("tagspan");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_extract_writes_csv_to_stdout() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("abstract.txt");
    std::fs::write(&input, "The <><>ABA</> pathway</>\n\nin <>Maize</>\n").unwrap();

    tagspan(temp.path())
        .args(["extract", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Entities\naba pathway\naba\nmaize\n");
}

#[test]
fn test_extract_writes_json_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("abstract.txt");
    let output = temp.path().join("spans.json");
    std::fs::write(&input, "<><>X</> Y</>").unwrap();

    tagspan(temp.path())
        .args([
            "-q",
            "extract",
            input.to_str().unwrap(),
            "--format",
            "json",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value[0]["text"], "x y");
    assert_eq!(value[0]["depth"], 0);
    assert_eq!(value[1]["text"], "x");
    assert_eq!(value[1]["depth"], 1);
}

#[test]
fn test_extract_strict_rejects_unbalanced_input() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("broken.txt");
    std::fs::write(&input, "<>unclosed span").unwrap();

    tagspan(temp.path())
        .args(["extract", input.to_str().unwrap(), "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed input"));
}

#[test]
fn test_extract_permissive_drops_unclosed_span() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("broken.txt");
    std::fs::write(&input, "<>kept</> <>unclosed").unwrap();

    tagspan(temp.path())
        .args(["-q", "extract", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Entities\nkept\n");
}

#[test]
fn test_extract_trace_logs_span_ranges_and_depths() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("abstract.txt");
    std::fs::write(&input, "<><>X</> Y</>").unwrap();

    tagspan(temp.path())
        .args(["-vv", "extract", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Entities\nx y\nx\n")
        .stderr(predicate::str::contains("0..13"))
        .stderr(predicate::str::contains("0..6"))
        .stderr(predicate::str::contains("[0] x y"))
        .stderr(predicate::str::contains("[1] x"));
}

#[test]
fn test_compare_quotes_span_containing_tab() {
    let temp = TempDir::new().unwrap();
    let alice = temp.path().join("alice.txt");
    let bob = temp.path().join("bob.txt");
    std::fs::write(&alice, "<>Salt\tstress</> in <>rice</>").unwrap();
    std::fs::write(&bob, "<>rice</>").unwrap();

    tagspan(temp.path())
        .args(["-q", "compare", alice.to_str().unwrap(), bob.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Entity\talice\tbob\n\"salt\tstress\"\t1\t0\nrice\t1\t1\n");
}

#[test]
fn test_extract_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.txt");

    tagspan(temp.path())
        .args(["extract", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_extract_uses_config_tags() {
    let temp = TempDir::new().unwrap();
    write_tagspan_config(temp.path(), "begin_tag = \"<ent>\"\nend_tag = \"</ent>\"\n");
    let input = temp.path().join("abstract.txt");
    std::fs::write(&input, "<ent>Root <ent>hair</ent></ent>").unwrap();

    tagspan(temp.path())
        .args(["-q", "extract", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Entities\nroot hair\nhair\n");
}

#[test]
fn test_invalid_config_reports_path() {
    let temp = TempDir::new().unwrap();
    write_tagspan_config(temp.path(), "strict = \"yes\"\n");

    tagspan(temp.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_compare_writes_tsv_report() {
    let temp = TempDir::new().unwrap();
    let alice = temp.path().join("alice.txt");
    let bob = temp.path().join("bob.txt");
    std::fs::write(&alice, "<><>Salt</> stress</> in <>rice</>").unwrap();
    std::fs::write(&bob, "<>Salt</> stress in <>rice</>").unwrap();

    tagspan(temp.path())
        .args(["-q", "compare", alice.to_str().unwrap(), bob.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Entity\talice\tbob\nsalt stress\t1\t0\nsalt\t1\t1\nrice\t1\t1\n");
}

#[test]
fn test_compare_custom_names_and_output_file() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.txt");
    let second = temp.path().join("b.txt");
    let output = temp.path().join("report.tsv");
    std::fs::write(&first, "<>x</>").unwrap();
    std::fs::write(&second, "<>y</>").unwrap();

    tagspan(temp.path())
        .args([
            "-q",
            "compare",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
            "--names",
            "Source1,Source2",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert_eq!(report, "Entity\tSource1\tSource2\nx\t1\t0\ny\t0\t1\n");
}

#[test]
fn test_compare_name_count_mismatch_fails() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.txt");
    std::fs::write(&first, "<>x</>").unwrap();

    tagspan(temp.path())
        .args(["compare", first.to_str().unwrap(), "--names", "one,two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass one name per file"));
}

#[test]
fn test_config_show_defaults() {
    let temp = TempDir::new().unwrap();

    tagspan(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config_file = not found (using defaults)"))
        .stdout(predicate::str::contains("begin_tag = <>"))
        .stdout(predicate::str::contains("end_tag = </>"))
        .stdout(predicate::str::contains("mode = permissive"))
        .stdout(predicate::str::contains("format = csv"));
}

#[test]
fn test_config_show_loaded_file() {
    let temp = TempDir::new().unwrap();
    write_tagspan_config(temp.path(), "strict = true\nformat = \"json\"\n");

    tagspan(temp.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config_file = loaded"))
        .stdout(predicate::str::contains("mode = strict"))
        .stdout(predicate::str::contains("format = json"));
}
