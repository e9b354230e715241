//! Exit-code behavior around credential loading.
//!
//! Each test runs the binary in an empty temp directory so a developer's
//! real `.env` can never leak into the assertions.

use assert_cmd::Command;
use predicates::prelude::*;

fn bare_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("dd-log-verify").expect("binary");
    cmd.current_dir(dir);
    cmd.env_remove("DD_API_KEY");
    cmd.env_remove("DD_APP_KEY");
    cmd.env_remove("DD_API_URL");
    cmd
}

#[test]
fn missing_credentials_exits_one_with_diagnostic() {
    let dir = tempfile::tempdir().expect("tempdir");

    bare_cmd(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DD_API_KEY"))
        .stderr(predicate::str::contains("DD_APP_KEY"));
}

#[test]
fn missing_app_key_alone_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");

    bare_cmd(dir.path())
        .env("DD_API_KEY", "test-api-key")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be set"));
}

#[test]
fn env_file_in_working_directory_is_honored() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join(".env"),
        "DD_API_KEY=file-api-key\nDD_APP_KEY=file-app-key\n",
    )
    .expect("write .env");

    // Credentials resolve from the file; the unreachable endpoint makes
    // every search fail, which degrades to NO_LOGS rather than aborting.
    bare_cmd(dir.path())
        .env("DD_API_URL", "http://127.0.0.1:9")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "❌ No API functions found with expected data in logs",
        ));
}

#[test]
fn transport_failures_degrade_to_no_logs_for_all_functions() {
    let dir = tempfile::tempdir().expect("tempdir");

    bare_cmd(dir.path())
        .env("DD_API_KEY", "test-api-key")
        .env("DD_APP_KEY", "test-app-key")
        .env("DD_API_URL", "http://127.0.0.1:9")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("NO LOGS FOUND for 'GetDeliveryOrder'"))
        .stdout(predicate::str::contains(
            "NO LOGS FOUND for 'GetDeliveryDriverByID'",
        ))
        .stdout(predicate::str::contains(
            "❌ No API functions found with expected data in logs",
        ));
}
