//! End-to-end tests for the `messenger` binary.
//!
//! These run the real binary with `assert_cmd` against a wiremock MMP
//! server, exercising the HTTP engine adapter and the process exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command for running messenger with a clean environment.
fn messenger() -> Command {
    let mut cmd = Command::cargo_bin("messenger").unwrap();
    cmd.env_remove("MMP_URL")
        .env_remove("MMP_MSISDN")
        .env_remove("MMP_PWD");
    cmd
}

#[test]
fn no_arguments_prints_general_usage() {
    messenger()
        .assert()
        .success()
        .stdout(contains("Usage:"))
        .stdout(contains("--init -h"));
}

#[test]
fn help_flag_prints_send_usage() {
    messenger()
        .arg("-h")
        .assert()
        .success()
        .stdout(contains("-m MESSAGE"));
}

#[test]
fn help_with_init_prints_register_usage() {
    messenger()
        .args(["--init", "-h"])
        .assert()
        .success()
        .stdout(contains("-e USER_EMAIL"));
}

#[test]
fn register_flow_prints_the_password() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/registrations"))
            .and(body_json(serde_json::json!({
                "msisdn": "user",
                "email": "email",
            })))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/registrations/verify"))
            .and(body_json(serde_json::json!({
                "msisdn": "user",
                "pincode": "1234",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"password": "password"})),
            )
            .mount(&server)
            .await;
        server
    });

    messenger()
        .args(["--init", "-u", "user", "-s", &server.uri(), "-e", "email"])
        .write_stdin("1234\n")
        .assert()
        .success()
        .stdout(contains("Password to be used for sending messages: password"));
}

#[test]
fn send_success_prints_the_message_id() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"messageId": "abc123"})),
            )
            .mount(&server)
            .await;
        server
    });

    messenger()
        .args(["-u", "me", "-p", "pwd", "-m", "hello", "-t", "+321,+322", "-s", &server.uri()])
        .assert()
        .success()
        .stdout(contains("Send message succeeded. Message id: abc123"));
}

#[test]
fn send_failure_prints_the_engine_error_and_exits_1() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": "E100",
                "message": "invalid recipient",
            })))
            .mount(&server)
            .await;
        server
    });

    messenger()
        .args(["-u", "me", "-p", "pwd", "-m", "hello", "-t", "+321", "-s", &server.uri()])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Error during sending message: E100 - invalid recipient"))
        .stdout(contains("succeeded").not());
}

#[test]
fn status_renders_the_report_table() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/statusreports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "statusReports": [{
                    "messageId": "msgId",
                    "recipients": [{
                        "msisdn": "to",
                        "statusId": "statusId",
                        "status": "status",
                    }],
                }],
            })))
            .mount(&server)
            .await;
        server
    });

    messenger()
        .args(["--status", "-u", "me", "-p", "pwd", "-id", "msgId", "-s", &server.uri()])
        .assert()
        .success()
        .stdout(contains("Found 1 message(s) according the given id(s)."))
        .stdout(contains(format!(
            "{:<15}{:<15}{:<15}{}",
            "msgId", "to", "statusId", "status"
        )));
}

#[test]
fn unreachable_server_maps_to_a_network_error() {
    // Nothing listens on this port; reqwest fails at connect time.
    messenger()
        .args(["-u", "me", "-p", "pwd", "-m", "hi", "-t", "+321", "-s", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Error during sending message: NETWORK - "));
}

#[test]
fn undecodable_error_body_falls_back_to_the_status_code() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        server
    });

    messenger()
        .args(["-u", "me", "-p", "pwd", "-m", "hi", "-t", "+321", "-s", &server.uri()])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Error during sending message: 500 - unknown engine error"));
}
