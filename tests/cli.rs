use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn parse_argument_to_json() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("<사이즈+색상>S+빨강=5,M+노랑=3");

    let output_pred = predicate::str::contains("\"version\": 0.3")
        .and(predicate::str::contains("\"색상\": \"노랑\""))
        .and(predicate::str::contains("\"stock\": 3"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn parse_stdin_to_tag() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("--format")
        .arg("tag")
        .write_stdin("<옵션>\n85\n90\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<document version=\"0.3\">"))
        .stdout(predicate::str::contains("<option>90</option>"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("json")
            .and(predicate::str::contains("yaml"))
            .and(predicate::str::contains("tag")),
    );
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("85").arg("--format").arg("xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'xml' not found"));
}

#[test]
fn diagnostics_go_to_stderr() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("--diagnostics").arg("<a+b>x+y,z=many");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("row 1: stock 'many' is not a number"))
        .stderr(predicate::str::contains("row 1: expected 2 values, found 1"));
}

#[test]
fn check_fails_on_misaligned_rows() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("--check").arg("<a+b>x+y,z+w+v");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("row 1: expected 2 values, found 3"));
}

#[test]
fn check_passes_on_aligned_rows() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("--check").arg("<a+b>x+y,z+w");

    cmd.assert().success();
}

#[test]
fn check_accepts_schema_row_without_values() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("--check").arg("--diagnostics").arg("<a+b>,x+y");

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn list_formats_ignores_broken_config() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("--list-formats")
        .arg("--config")
        .arg("/nonexistent/opnote.toml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("json"));
}

#[test]
fn broken_config_fails_parsing() {
    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("--config").arg("/nonexistent/opnote.toml").arg("85");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_file_sets_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(
        file,
        "[parser]\ndefault_label_name = \"Option\"\n\n[output]\nformat = \"json\"\npretty = false"
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("opnote");
    cmd.arg("--config").arg(file.path()).arg("85,90");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("{\"version\":0.3,\"labels\":[{\"name\":\"Option\""));
}
