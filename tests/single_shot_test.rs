//! Single-shot integration tests against local mock servers

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use webprof::{run_single, ClientConfig, HttpClient, Scheme};

/// Start a server that answers every connection with `response` and closes it
async fn mock_server(response: &'static [u8]) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to read mock server address");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 1024];
                let _ = socket.read(&mut request).await;
                let _ = socket.write_all(response).await;
            });
        }
    });

    addr
}

fn client() -> HttpClient {
    HttpClient::new(Scheme::Http, Arc::new(ClientConfig::default())).expect("Failed to create client")
}

#[tokio::test]
async fn test_not_found_prints_error_only() {
    let addr = mock_server(b"HTTP/1.0 404 Not Found\r\n\r\n").await;

    let mut out = Vec::new();
    let code = run_single(&client(), &format!("http://{}/missing", addr), &mut out)
        .await
        .expect("Writing to a Vec cannot fail");

    let text = String::from_utf8(out).unwrap();
    assert_eq!(code, 404);
    assert!(text.contains("404"));
    assert_eq!(text, "Error! HTTP return code: 404\n");
}

#[tokio::test]
async fn test_not_found_with_body_hides_body() {
    let addr = mock_server(b"HTTP/1.0 404 Not Found\r\nContent-Type: text/html\r\n\r\n<h1>gone</h1>").await;

    let mut out = Vec::new();
    run_single(&client(), &format!("{}/", addr), &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("404"));
    assert!(!text.contains("gone"));
}

#[tokio::test]
async fn test_ok_prints_raw_body() {
    let addr = mock_server(b"HTTP/1.0 200 OK\r\nServer: mock\r\n\r\nline one\nline two\n").await;

    let mut out = Vec::new();
    let code = run_single(&client(), &format!("http://{}/", addr), &mut out).await.unwrap();

    assert_eq!(code, 200);
    assert_eq!(out, b"line one\nline two\n");
}

#[tokio::test]
async fn test_unreachable_host_reports_sentinel() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let mut out = Vec::new();
    let code = run_single(&client(), &format!("http://{}/", addr), &mut out).await.unwrap();

    assert_eq!(code, 400);
    assert_eq!(String::from_utf8(out).unwrap(), "Error! HTTP return code: 400\n");
}

#[tokio::test]
async fn test_empty_response_reports_sentinel() {
    let addr = mock_server(b"").await;

    let mut out = Vec::new();
    let code = run_single(&client(), &format!("http://{}/", addr), &mut out).await.unwrap();

    assert_eq!(code, 400);
}
