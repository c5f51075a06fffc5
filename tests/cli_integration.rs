use assert_cmd::Command;
use predicates::prelude::*;

fn formz(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("formz").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn add_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    formz(temp_dir.path())
        .args(["add", "text", "--label", "Your Name", "--required"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Field added (1): Your Name"));

    formz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Name"))
        .stdout(predicate::str::contains("required"));
}

#[test]
fn unknown_field_type_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    formz(temp_dir.path())
        .args(["add", "hologram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field type: hologram"));
}

#[test]
fn template_load_and_export() {
    let temp_dir = tempfile::tempdir().unwrap();

    formz(temp_dir.path())
        .args(["template", "contact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template loaded: Contact Form"));

    formz(temp_dir.path())
        .args(["export", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": \"1.0.0\""))
        .stdout(predicate::str::contains("\"formFields\""))
        .stdout(predicate::str::contains("Contact Us"));
}

#[test]
fn export_import_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let exported = temp_dir.path().join("exported.json");

    formz(temp_dir.path())
        .args(["template", "survey"])
        .assert()
        .success();
    formz(temp_dir.path())
        .args(["export", "--output"])
        .arg(&exported)
        .assert()
        .success();

    // load the exported snapshot into a fresh document
    formz(temp_dir.path())
        .args(["--file", "other.json", "import"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Form loaded (5 fields)."));

    formz(temp_dir.path())
        .args(["--file", "other.json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Satisfaction Survey"));
}

#[test]
fn remove_and_clear() {
    let temp_dir = tempfile::tempdir().unwrap();

    formz(temp_dir.path()).args(["add", "text"]).assert().success();
    formz(temp_dir.path()).args(["add", "email"]).assert().success();

    formz(temp_dir.path())
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Field removed (1): Text Field"));

    formz(temp_dir.path()).arg("clear").assert().success();
    formz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No fields yet."));
}

#[test]
fn check_reports_required_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    formz(temp_dir.path())
        .args(["add", "text", "--required"])
        .assert()
        .success();

    formz(temp_dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("This field is required"));

    formz(temp_dir.path())
        .args(["check", "1=hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passed validation"));
}

#[test]
fn submit_prints_the_payload() {
    let temp_dir = tempfile::tempdir().unwrap();

    formz(temp_dir.path())
        .args(["add", "text", "--label", "Name", "--required"])
        .assert()
        .success();

    formz(temp_dir.path())
        .args(["submit", "1=Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Form submitted successfully!"))
        .stdout(predicate::str::contains("\"Ada\""));
}

#[test]
fn types_lists_the_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();

    formz(temp_dir.path())
        .args(["types", "--category", "layout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("heading"))
        .stdout(predicate::str::contains("spacer"))
        .stdout(predicate::str::contains("Section divider"));
}
