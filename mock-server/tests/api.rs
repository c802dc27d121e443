//! Verify each script behaves as advertised, using a raw tokio client.

use std::time::{Duration, Instant};

use mock_server::{serve_once, Script};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const REQUEST: &[u8] = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n";

async fn listener() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").await.unwrap()
}

#[tokio::test]
async fn respond_sends_bytes_then_clean_close() {
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        serve_once(&listener, Script::Respond(b"HTTP/1.1 200 OK\r\n\r\n".to_vec())).await
    });

    let mut client = TcpStream::connect(addr).await.unwrap();
    client.write_all(REQUEST).await.unwrap();

    let mut received = Vec::new();
    client.read_to_end(&mut received).await.unwrap();
    assert_eq!(received, b"HTTP/1.1 200 OK\r\n\r\n");

    let head = server.await.unwrap().unwrap();
    assert_eq!(head, REQUEST);
}

#[tokio::test]
async fn captured_head_stops_at_blank_line() {
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        serve_once(&listener, Script::CloseWithoutResponse).await
    });

    let mut client = TcpStream::connect(addr).await.unwrap();
    // Bytes after the blank line must not end up in the captured head.
    client
        .write_all(b"GET / HTTP/1.1\r\nHost: x\r\n\r\ntrailing")
        .await
        .unwrap();

    let mut received = Vec::new();
    client.read_to_end(&mut received).await.unwrap();
    assert!(received.is_empty());

    let head = server.await.unwrap().unwrap();
    assert_eq!(head, b"GET / HTTP/1.1\r\nHost: x\r\n\r\n");
}

#[tokio::test]
async fn close_without_response_is_clean_eof() {
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        serve_once(&listener, Script::CloseWithoutResponse).await
    });

    let mut client = TcpStream::connect(addr).await.unwrap();
    client.write_all(REQUEST).await.unwrap();

    let mut received = Vec::new();
    // Clean eof: read_to_end succeeds with nothing read.
    client.read_to_end(&mut received).await.unwrap();
    assert!(received.is_empty());

    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn reset_aborts_the_connection() {
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move { serve_once(&listener, Script::Reset).await });

    let mut client = TcpStream::connect(addr).await.unwrap();
    let _ = client.write_all(REQUEST).await;

    let mut received = Vec::new();
    let result = client.read_to_end(&mut received).await;
    assert!(result.is_err(), "expected reset, got {received:?}");

    let head = server.await.unwrap().unwrap();
    assert!(head.is_empty());
}

#[tokio::test]
async fn stall_holds_the_connection_before_closing() {
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        serve_once(&listener, Script::Stall(Duration::from_millis(200))).await
    });

    let mut client = TcpStream::connect(addr).await.unwrap();
    client.write_all(REQUEST).await.unwrap();

    let start = Instant::now();
    let mut received = Vec::new();
    client.read_to_end(&mut received).await.unwrap();
    assert!(received.is_empty());
    assert!(start.elapsed() >= Duration::from_millis(200));

    server.await.unwrap().unwrap();
}
