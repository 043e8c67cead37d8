use std::fs::{create_dir_all, write};
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The binary with logging kept on the console and no user configuration
fn xml2ptx(scratch: &Path) -> Command {
    let mut command = Command::cargo_bin("xml2ptx").unwrap();
    command
        .arg("--log-file")
        .arg("")
        .arg("--config")
        .arg(scratch.join("absent").join("xml2ptx.yaml"));
    command
}

fn source(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    create_dir_all(path.parent().unwrap()).unwrap();
    write(path, content).unwrap();
}

#[test]
fn test_successful_batch_exits_zero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("xml");
    let output = dir.path().join("pretext");
    source(&input, "ch/intro.xml", "<document><title>Hi</title></document>");

    xml2ptx(dir.path())
        .arg("transform")
        .arg("--xml")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .arg("--stylesheet")
        .arg(fixture("section.xsl"))
        .assert()
        .success()
        .stderr(predicate::str::contains("intro.xml"));

    assert!(output.join("ch/intro.ptx").is_file());
}

#[test]
fn test_failed_file_exits_one() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("xml");
    let output = dir.path().join("out");
    source(&input, "intro.xml", "<document><title>Hi</title></document>");
    source(&input, "broken.xml", "<document><title>");

    xml2ptx(dir.path())
        .arg("transform")
        .arg("--xml")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .arg("--stylesheet")
        .arg(fixture("section.xsl"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("broken.xml"));

    assert!(output.join("intro.ptx").is_file());
    assert!(!output.join("broken.ptx").exists());
}

#[test]
fn test_missing_stylesheet_exits_two() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("xml");
    source(&input, "intro.xml", "<document><title>Hi</title></document>");

    xml2ptx(dir.path())
        .arg("transform")
        .arg("--xml")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("out"))
        .arg("--stylesheet")
        .arg(dir.path().join("nowhere.xsl"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nowhere.xsl"));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_empty_input_exits_zero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("xml");
    create_dir_all(&input).unwrap();

    xml2ptx(dir.path())
        .arg("transform")
        .arg("--xml")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("out"))
        .arg("--stylesheet")
        .arg(fixture("section.xsl"))
        .assert()
        .success();
}

#[test]
fn test_dry_run_lists_plan_without_writing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("xml");
    let output = dir.path().join("out");
    source(&input, "a/b/doc.xml", "<document><title>Hi</title></document>");

    xml2ptx(dir.path())
        .arg("transform")
        .arg("--xml")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .arg("--stylesheet")
        .arg(fixture("section.xsl"))
        .arg("--dry")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.ptx"));

    assert!(!output.exists());
}

#[test]
fn test_configuration_file_sets_target_extension() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("xml");
    let output = dir.path().join("out");
    source(&input, "intro.xml", "<document><title>Hi</title></document>");
    let config = dir.path().join("xml2ptx.yaml");
    write(
        &config,
        format!(
            "stylesheet: {}\ntarget_extension: html\n",
            fixture("section.xsl").display()
        ),
    )
    .unwrap();

    Command::cargo_bin("xml2ptx")
        .unwrap()
        .arg("--log-file")
        .arg("")
        .arg("--config")
        .arg(&config)
        .arg("transform")
        .arg("--xml")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .assert()
        .success();

    assert!(output.join("intro.html").is_file());
}

#[test]
fn test_invalid_configuration_exits_two() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("xml2ptx.yaml");
    write(&config, "target_extension: .ptx\n").unwrap();

    Command::cargo_bin("xml2ptx")
        .unwrap()
        .arg("--log-file")
        .arg("")
        .arg("--config")
        .arg(&config)
        .arg("transform")
        .arg("--xml")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("target_extension"));
}

#[test]
fn test_missing_xml_option_is_a_usage_error() {
    Command::cargo_bin("xml2ptx")
        .unwrap()
        .arg("transform")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--xml"));
}

#[test]
fn test_relative_input_roots() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("xml");
    let elsewhere = dir.path().join("elsewhere");
    create_dir_all(&elsewhere).unwrap();
    source(&input, "a/d.xml", "<document><title>Hi</title></document>");

    let cases = [
        (input.clone(), "."),
        (input.clone(), "./"),
        (dir.path().to_path_buf(), "./xml"),
        (elsewhere.clone(), "../xml"),
    ];
    for (index, (cwd, root)) in cases.iter().enumerate() {
        let output = dir.path().join(format!("out{index}"));

        xml2ptx(dir.path())
            .current_dir(cwd)
            .arg("transform")
            .arg("--xml")
            .arg(root)
            .arg("--out")
            .arg(&output)
            .arg("--stylesheet")
            .arg(fixture("section.xsl"))
            .assert()
            .success();

        assert!(output.join("a/d.ptx").is_file(), "--xml {root}");
    }
}
