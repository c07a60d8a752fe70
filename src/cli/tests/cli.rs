use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::io::Write;

fn exlog() -> Command {
    let mut cmd = Command::cargo_bin("exlog").unwrap();
    for key in [
        "RUST_LOG",
        "EXLOG_CONFIG",
        "EXLOG_ENDPOINT",
        "EXLOG_API_KEY",
        "EXLOG_DRY_RUN",
        "EXLOG_LOG_DIR",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

fn json_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn report_dry_run() {
    exlog()
        .args([
            "--dry-run",
            "report",
            "--message",
            "x is undefined",
            "--name",
            "TypeError",
            "--high",
            "--object-type",
            "Account",
        ])
        .assert()
        .success()
        .stdout(contains("High native error report dispatched"))
        .stderr(contains("\"apiName\":\"Custom_Exception_Log__e\""))
        .stderr(contains("\"Full_Message__c\":\"x is undefined\""))
        .stderr(contains("\"Context_Type__c\":\"TypeError\""))
        .stderr(contains("\"Severity_Level__c\":\"High\""));
}

#[test]
fn report_without_endpoint_fails() {
    exlog()
        .args(["report", "--message", "boom"])
        .assert()
        .failure()
        .stderr(contains("No log endpoint configured"));
}

#[test]
fn report_json_response_error() {
    let file = json_file(
        r#"{"status":500,"statusText":"Server Error","body":{"message":"m","stackTrace":"t","output":{"k":"v"}}}"#,
    );

    exlog()
        .args([
            "report-json",
            "--file",
            file.path().to_str().unwrap(),
            "--context-type",
            "accountList",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("Med response error report dispatched"))
        .stderr(contains(
            "\"Context_Type__c\":\"Lightning Component: accountList\"",
        ))
        .stderr(contains("\"Stack_Trace__c\":\"t\""));
}

#[test]
fn report_json_from_stdin() {
    exlog()
        .args(["--dry-run", "report-json", "--file", "-"])
        .write_stdin(r#"{"name":"RangeError","message":"out of range","stack":"at f (a.js:1)"}"#)
        .assert()
        .success()
        .stderr(contains("\"Context_Type__c\":\"RangeError\""))
        .stderr(contains("\"Object_Type__c\":null"));
}

#[test]
fn report_json_rejects_unknown_shape() {
    let file = json_file(r#"{"status":404}"#);

    exlog()
        .args(["--dry-run", "report-json", "--file", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Unrecognized error shape"));
}

#[test]
fn config_shows_file_and_masks_key() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "endpoint = \"https://logs.example.test/api\"\napi_key = \"secret-key\"\n\n[fields]\nstack_trace = \"Trace__c\""
    )
    .unwrap();

    exlog()
        .args(["--config", file.path().to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(contains("https://logs.example.test/api"))
        .stdout(contains("Trace__c"))
        .stdout(contains("\"api_key\": \"***\""))
        .stdout(contains("secret-key").not());
}
