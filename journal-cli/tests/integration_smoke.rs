//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn journal() -> Command {
    let mut cmd = Command::cargo_bin("journal").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("JOURNAL_BIND")
        .env_remove("JOURNAL_SSL_MODE");
    cmd
}

#[test]
fn test_help_lists_serve() {
    journal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_version() {
    journal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_serve_help() {
    journal()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_serve_without_database_url_fails() {
    // Empty directory so no stray .env is picked up
    let dir = tempfile::tempdir().unwrap();

    journal()
        .current_dir(dir.path())
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_unknown_ssl_mode() {
    journal()
        .arg("serve")
        .arg("--ssl-mode")
        .arg("sometimes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--ssl-mode"));
}

#[test]
fn test_serve_reads_database_url_from_dotenv() {
    // An unparseable URL from .env proves it was read: startup fails on it
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "DATABASE_URL=\"not a url\"\n").unwrap();

    journal()
        .current_dir(dir.path())
        .arg("serve")
        .arg("--bind")
        .arg("127.0.0.1:0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid database url"));
}
