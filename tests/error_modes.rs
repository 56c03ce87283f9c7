//! End-to-end tests: a real server on a loopback port driven by the real client.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use grpc_errors::client::{ClientConfig, ErrorTestClient};
use grpc_errors::common::{Data, HarnessError};
use grpc_errors::server::service::{SIMULATED_ERROR, UNIMPLEMENTED_MODE};
use grpc_errors::server::{ErrorTestServer, ServerConfig};
use tokio::net::TcpListener;
use tonic::Code;

async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = ErrorTestServer::new(ServerConfig {
        port: addr.port(),
        ..ServerConfig::default()
    });
    tokio::spawn(server.serve_with_listener(listener));

    addr
}

async fn connect(addr: SocketAddr, timeout_secs: u64) -> ErrorTestClient {
    let config = ClientConfig {
        server_addr: addr.to_string(),
        timeout_secs,
        ..ClientConfig::default()
    };
    ErrorTestClient::connect(&config).await.unwrap()
}

fn status_of(err: HarnessError) -> tonic::Status {
    match err {
        HarnessError::Rpc(status) => status,
        other => panic!("expected an rpc status, got: {other}"),
    }
}

// ========== UNARY ==========

#[tokio::test]
async fn test_unary_mode_one_fails_immediately() {
    let mut client = connect(start_server().await, 10).await;

    let start = Instant::now();
    let status = status_of(client.simple_rpc(Data::new(1, 0)).await.unwrap_err());

    assert!(status.message().contains(SIMULATED_ERROR));
    assert_eq!(status.code(), Code::Unknown);
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_unary_mode_one_fails_after_param_seconds() {
    let mut client = connect(start_server().await, 10).await;

    let start = Instant::now();
    let status = status_of(client.simple_rpc(Data::new(1, 1)).await.unwrap_err());

    assert_eq!(status.message(), SIMULATED_ERROR);
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_unary_mode_two_echoes_after_param_seconds() {
    let mut client = connect(start_server().await, 10).await;

    let start = Instant::now();
    let reply = client.simple_rpc(Data::new(2, 2)).await.unwrap();

    assert_eq!(reply, Data::new(2, 2));
    assert!(start.elapsed() >= Duration::from_secs(2));
}

#[tokio::test]
async fn test_unary_unknown_mode_is_unimplemented_without_delay() {
    let mut client = connect(start_server().await, 10).await;

    for data in [Data::new(5, 0), Data::new(0, 30), Data::new(-3, 30)] {
        let start = Instant::now();
        let status = status_of(client.simple_rpc(data).await.unwrap_err());

        assert_eq!(status.code(), Code::Unimplemented);
        assert_eq!(status.message(), UNIMPLEMENTED_MODE);
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}

#[tokio::test]
async fn test_unary_delay_longer_than_timeout() {
    let mut client = connect(start_server().await, 1).await;

    let err = client.simple_rpc(Data::new(2, 3)).await.unwrap_err();
    assert!(matches!(err, HarnessError::Timeout(d) if d == Duration::from_secs(1)));
}

#[tokio::test]
async fn test_slow_call_does_not_block_others() {
    let addr = start_server().await;
    let mut slow = connect(addr, 10).await;
    let mut fast = connect(addr, 10).await;

    let slow_call = tokio::spawn(async move { slow.simple_rpc(Data::new(2, 2)).await });

    let start = Instant::now();
    let reply = fast.simple_rpc(Data::new(2, 0)).await.unwrap();
    assert_eq!(reply, Data::new(2, 0));
    assert!(start.elapsed() < Duration::from_secs(1));

    assert_eq!(slow_call.await.unwrap().unwrap(), Data::new(2, 2));
}

// ========== SERVER STREAMING ==========

#[tokio::test]
async fn test_server_stream_sends_exactly_one_message() {
    let mut client = connect(start_server().await, 10).await;

    let replies = client.stream_response(Data::new(2, 0)).await.unwrap();
    assert_eq!(replies, vec![Data::new(2, 0)]);
}

#[tokio::test]
async fn test_server_stream_mode_two_sends_after_param_seconds() {
    let mut client = connect(start_server().await, 10).await;

    let start = Instant::now();
    let replies = client.stream_response(Data::new(2, 1)).await.unwrap();

    assert_eq!(replies, vec![Data::new(2, 1)]);
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_server_stream_mode_one_aborts() {
    let mut client = connect(start_server().await, 10).await;

    let status = status_of(client.stream_response(Data::new(1, 0)).await.unwrap_err());
    assert_eq!(status.message(), SIMULATED_ERROR);
}

#[tokio::test]
async fn test_server_stream_unknown_mode() {
    let mut client = connect(start_server().await, 10).await;

    let status = status_of(client.stream_response(Data::new(9, 0)).await.unwrap_err());
    assert_eq!(status.code(), Code::Unimplemented);
}

// ========== CLIENT STREAMING ==========

#[tokio::test]
async fn test_client_stream_echoes_first_message() {
    let mut client = connect(start_server().await, 10).await;

    let reply = client
        .stream_request(vec![Data::new(2, 0), Data::new(1, 0)])
        .await
        .unwrap();
    assert_eq!(reply, Some(Data::new(2, 0)));
}

#[tokio::test]
async fn test_client_stream_mode_two_replies_after_param_seconds() {
    let mut client = connect(start_server().await, 10).await;

    let start = Instant::now();
    let reply = client.stream_request(vec![Data::new(2, 1)]).await.unwrap();

    assert_eq!(reply, Some(Data::new(2, 1)));
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_client_stream_empty_completes_without_reply() {
    let mut client = connect(start_server().await, 10).await;

    let reply = client.stream_request(Vec::new()).await.unwrap();
    assert_eq!(reply, None);
}

#[tokio::test]
async fn test_client_stream_mode_one_fails_after_delay() {
    let mut client = connect(start_server().await, 10).await;

    let start = Instant::now();
    let status = status_of(client.stream_request(vec![Data::new(1, 1)]).await.unwrap_err());

    assert_eq!(status.message(), SIMULATED_ERROR);
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_client_stream_unknown_mode() {
    let mut client = connect(start_server().await, 10).await;

    let status = status_of(client.stream_request(vec![Data::new(7, 0)]).await.unwrap_err());
    assert_eq!(status.code(), Code::Unimplemented);
}

// ========== BIDIRECTIONAL ==========

#[tokio::test]
async fn test_bidi_replies_once() {
    let mut client = connect(start_server().await, 10).await;

    let replies = client
        .stream_request_response(vec![Data::new(2, 0), Data::new(2, 0)])
        .await
        .unwrap();
    assert_eq!(replies, vec![Data::new(2, 0)]);
}

#[tokio::test]
async fn test_bidi_mode_two_replies_after_param_seconds() {
    let mut client = connect(start_server().await, 10).await;

    let start = Instant::now();
    let replies = client
        .stream_request_response(vec![Data::new(2, 1)])
        .await
        .unwrap();

    assert_eq!(replies, vec![Data::new(2, 1)]);
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_bidi_empty_completes_without_reply() {
    let mut client = connect(start_server().await, 10).await;

    let replies = client.stream_request_response(Vec::new()).await.unwrap();
    assert!(replies.is_empty());
}

#[tokio::test]
async fn test_bidi_mode_one_fails() {
    let mut client = connect(start_server().await, 10).await;

    let status = status_of(
        client
            .stream_request_response(vec![Data::new(1, 0)])
            .await
            .unwrap_err(),
    );
    assert_eq!(status.message(), SIMULATED_ERROR);
}

#[tokio::test]
async fn test_bidi_unknown_mode() {
    let mut client = connect(start_server().await, 10).await;

    let status = status_of(
        client
            .stream_request_response(vec![Data::new(0, 0)])
            .await
            .unwrap_err(),
    );
    assert_eq!(status.code(), Code::Unimplemented);
}

// ========== SETUP FAILURES ==========

#[tokio::test]
async fn test_dial_failure() {
    // Bind then drop to get a port nobody is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig {
        server_addr: addr.to_string(),
        ..ClientConfig::default()
    };
    let err = ErrorTestClient::connect(&config).await.err().unwrap();
    assert!(matches!(err, HarnessError::Transport(_)));
}

#[tokio::test]
async fn test_listen_failure() {
    let taken = TcpListener::bind("0.0.0.0:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();

    let err = ErrorTestServer::new(ServerConfig {
        port,
        ..ServerConfig::default()
    })
    .run()
    .await
    .unwrap_err();
    assert!(matches!(err, HarnessError::Bind { .. }));
}
