use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", contents)?;
    Ok(tmp)
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("inikv-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn normalizes_document() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file("; c\norphan=1\n[S]\n  k  =  v\nk=dup\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("inikv-cli"))
        .args(["--line-ending", "lf"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("[S]\nk=v\n");
    Ok(())
}

#[test]
fn strict_reports_line_number() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file("[S]\nk=1\nk=2\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("inikv-cli"))
        .arg("--strict")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
    Ok(())
}

#[test]
fn json_output_keeps_order() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file("[B]\ny=2\nx=1\n[A]\n")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("inikv-cli"))
        .arg("--json")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert_eq!(out.trim(), r#"{"B":{"y":"2","x":"1"},"A":{}}"#);
    let v: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(v["B"]["x"], "1");
    Ok(())
}

#[test]
fn get_prints_value_or_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file("[server]\nhost = example.org\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("inikv-cli"))
        .args(["--get", "server", "host"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("example.org\n");

    Command::new(assert_cmd::cargo::cargo_bin!("inikv-cli"))
        .args(["--get", "server", "port"])
        .arg(tmp.path())
        .assert()
        .failure();
    Ok(())
}

#[test]
fn reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("inikv-cli"))
        .args(["--line-ending", "crlf"])
        .write_stdin("[S]\na=1\n")
        .assert()
        .success()
        .stdout("[S]\r\na=1\r\n");
    Ok(())
}

#[test]
fn leading_byte_order_mark_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(b"\xEF\xBB\xBF[S]\nk=v\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("inikv-cli"))
        .args(["--line-ending", "lf"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("[S]\nk=v\n");

    Command::new(assert_cmd::cargo::cargo_bin!("inikv-cli"))
        .arg("--strict")
        .args(["--get", "S", "k"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("v\n");
    Ok(())
}
