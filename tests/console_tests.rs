mod common;

use common::RecordingGateway;
use momo_checkout::application::checkout::CheckoutEngine;
use momo_checkout::domain::form::{MSG_CONFIRM, MSG_INVALID_PHONE, MSG_PROCESSING};
use momo_checkout::interfaces::console::session::ConsoleSession;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

fn session_with(
    gateway: &RecordingGateway,
    input: tokio::io::DuplexStream,
) -> ConsoleSession<tokio::io::DuplexStream, Vec<u8>> {
    let engine = Arc::new(CheckoutEngine::new(
        Box::new(gateway.clone()),
        "merchant-1".to_string(),
    ));
    ConsoleSession::new(engine, input, Vec::new())
}

async fn run_to_completion(
    mut session: ConsoleSession<tokio::io::DuplexStream, Vec<u8>>,
) -> String {
    session.run().await.unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

#[tokio::test]
async fn test_happy_path_renders_confirmation() {
    let gateway = RecordingGateway::succeeding();
    let (mut client, server) = tokio::io::duplex(256);
    let session = session_with(&gateway, server);

    tokio::spawn(async move {
        client.write_all(b"612345678\npayer\n").await.unwrap();
        // dropping the writer ends the session after the call settles
    });

    let output = run_to_completion(session).await;
    assert!(output.contains(MSG_PROCESSING));
    assert!(output.contains(MSG_CONFIRM));
    assert_eq!(gateway.calls(), 1);

    let body = serde_json::to_value(&gateway.requests()[0]).unwrap();
    assert_eq!(body["customer_phone"], "237612345678");
    assert_eq!(body["operator"], "ORANGE");
}

#[tokio::test]
async fn test_method_switch_is_reflected_in_the_request() {
    let gateway = RecordingGateway::succeeding();
    let (mut client, server) = tokio::io::duplex(256);
    let session = session_with(&gateway, server);

    tokio::spawn(async move {
        client.write_all(b"momo\n612345678\npayer\n").await.unwrap();
    });

    let output = run_to_completion(session).await;
    assert!(output.contains("(x) Mobile Money"));

    let body = serde_json::to_value(&gateway.requests()[0]).unwrap();
    assert_eq!(body["operator"], "MTN");
}

#[tokio::test]
async fn test_invalid_phone_raises_alert_and_skips_the_gateway() {
    let gateway = RecordingGateway::succeeding();
    let (mut client, server) = tokio::io::duplex(256);
    let session = session_with(&gateway, server);

    tokio::spawn(async move {
        client.write_all(b"12ab\npayer\n").await.unwrap();
    });

    let output = run_to_completion(session).await;
    assert!(output.contains(MSG_INVALID_PHONE));
    assert!(!output.contains(MSG_PROCESSING));
    assert!(!output.contains(MSG_CONFIRM));
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn test_double_submission_is_stopped_by_the_guard() {
    let gateway = RecordingGateway::gated();
    let (mut client, server) = tokio::io::duplex(256);
    let session = session_with(&gateway, server);

    let release = gateway.clone();
    tokio::spawn(async move {
        client
            .write_all(b"612345678\npayer\npayer\n")
            .await
            .unwrap();
        // Give the session time to process both submits before the first
        // call is allowed to settle.
        tokio::time::sleep(Duration::from_millis(200)).await;
        release.release();
    });

    let output = run_to_completion(session).await;
    assert_eq!(gateway.calls(), 1);
    assert!(output.contains(MSG_CONFIRM));
}

#[tokio::test]
async fn test_quit_mid_flight_aborts_the_submission() {
    let gateway = RecordingGateway::gated();
    let (mut client, server) = tokio::io::duplex(256);
    let session = session_with(&gateway, server);

    tokio::spawn(async move {
        client
            .write_all(b"612345678\npayer\nquitter\n")
            .await
            .unwrap();
        // keep the writer open so EOF cannot race the explicit quit
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let output = run_to_completion(session).await;
    assert_eq!(gateway.calls(), 1);
    assert!(output.contains(MSG_PROCESSING));
    assert!(!output.contains(MSG_CONFIRM));
}

#[tokio::test]
async fn test_editing_while_pending_keeps_the_loading_state() {
    let gateway = RecordingGateway::gated();
    let (mut client, server) = tokio::io::duplex(256);
    let session = session_with(&gateway, server);

    let release = gateway.clone();
    tokio::spawn(async move {
        client
            .write_all(b"612345678\npayer\n699000000\n")
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        release.release();
    });

    let output = run_to_completion(session).await;
    // The edit landed while the call was in flight, the card re-rendered
    // with the new suffix, and the submission still settled normally.
    assert!(output.contains("+237 699000000"));
    assert!(output.contains(MSG_CONFIRM));
    assert_eq!(gateway.calls(), 1);
}
