use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;
use std::fs;

mod common;
use common::test_helpers::*;

fn npm_stats(ctx: &TestContext, registry_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("npm-stats").unwrap();
    cmd.env("NPM_STATS_QUERY_FILE", &ctx.query_file)
        .env("NPM_STATS_REGISTRY_URL", registry_url)
        .env("NPM_STATS_LOG", "off")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_without_stored_query_shows_manual() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let any_request = server.mock("GET", Matcher::Any).expect(0).create();

    npm_stats(&ctx, &server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("No stored config found."));

    any_request.assert();
}

#[test]
fn test_help_prints_stored_query() {
    let ctx = TestContext::new();
    fs::write(&ctx.query_file, "{\n    \"users\": [],\n    \"packages\": [\n        \"react\"\n    ]\n}").unwrap();

    npm_stats(&ctx, "http://127.0.0.1:9")
        .arg("-?")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored config:"))
        .stdout(predicate::str::contains("\"react\""));
}

#[test]
fn test_unstore_removes_stored_query() {
    let ctx = TestContext::new();
    fs::write(&ctx.query_file, "{}").unwrap();

    npm_stats(&ctx, "http://127.0.0.1:9")
        .arg("--unstore")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed stored config."));

    assert!(!ctx.query_file.exists());
}

#[test]
fn test_unstore_without_stored_query() {
    let ctx = TestContext::new();

    npm_stats(&ctx, "http://127.0.0.1:9")
        .arg("--unstore")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored config found."));

    assert!(!ctx.query_file.exists());
}

#[test]
fn test_store_then_rerun_from_stored_query() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let user = server
        .mock("GET", "/~alice")
        .with_status(200)
        .with_body(user_page(&["alice-lib"]))
        .expect(2)
        .create();
    let lib = server
        .mock("GET", "/package/alice-lib")
        .with_status(200)
        .with_body(package_page("5", "35", "150"))
        .expect(2)
        .create();
    let pad = server
        .mock("GET", "/package/left-pad")
        .with_status(200)
        .with_body(package_page("100", "700", "3000"))
        .expect(2)
        .create();

    npm_stats(&ctx, &server.url())
        .args(["--user=alice", "left-pad", "--store"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored query."))
        .stdout(predicate::str::contains("alice-lib"))
        .stdout(predicate::str::contains("3000"));

    let stored = fs::read_to_string(&ctx.query_file).unwrap();
    assert!(stored.contains("\n    \"users\": [\n        \"alice\"\n    ]"));

    // The stored query still names the user, so the profile page is fetched again.
    npm_stats(&ctx, &server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded stored config"))
        .stdout(predicate::str::contains("Package name"))
        .stdout(predicate::str::contains("left-pad"));

    user.assert();
    lib.assert();
    pad.assert();
}

#[test]
fn test_unwritable_store_fails() {
    let ctx = TestContext::new();
    let missing_dir = ctx.temp_dir.path().join("missing").join("stored-query.json");

    let mut cmd = Command::cargo_bin("npm-stats").unwrap();
    cmd.env("NPM_STATS_QUERY_FILE", &missing_dir)
        .env("NPM_STATS_REGISTRY_URL", "http://127.0.0.1:9")
        .env("NPM_STATS_LOG", "off")
        .args(["left-pad", "--store"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ConfigWrite"));
}
