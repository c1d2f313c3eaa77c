//! Common test utilities for integration tests
//!
//! A one-shot HTTP server on a loopback port: it accepts a single
//! connection, captures the request and answers with a canned response.

#![allow(dead_code)]

use okex_rest::{ClientConfig, Credentials, OkexRestClient};
use std::collections::HashMap;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// API key used by every test client
pub const API_KEY: &str = "abc";
/// Secret key used by every test client
pub const SECRET_KEY: &str = "secret";

/// Sample `userinfo.do` response
pub const USER_INFO_RESPONSE: &str = r#"{
    "info": {
        "funds": {
            "free": {"btc": "0.5", "usd": "1200.25", "ltc": "0"},
            "freezed": {"btc": "0.1", "usd": "0", "ltc": "0"},
            "borrow": {"btc": "0", "usd": "100", "ltc": "0"}
        }
    },
    "result": true
}"#;

/// Sample `order_info.do` response
pub const ORDER_INFO_RESPONSE: &str = r#"{
    "result": true,
    "orders": [{
        "amount": 0.1,
        "avg_price": 0,
        "create_date": 1418008467000,
        "deal_amount": 0,
        "order_id": 10000591,
        "orders_id": 10000591,
        "price": 500,
        "status": 0,
        "symbol": "btc_usd",
        "type": "sell"
    }]
}"#;

/// Sample `order_history.do` response
pub const ORDER_HISTORY_RESPONSE: &str = r#"{
    "result": true,
    "total": 3,
    "currency_page": 1,
    "page_length": 2,
    "orders": [
        {
            "amount": 0.2,
            "avg_price": 101.5,
            "create_date": 1418008467000,
            "deal_amount": 0.2,
            "order_id": 11,
            "orders_id": 11,
            "price": 101.5,
            "status": 2,
            "symbol": "btc_usd",
            "type": "buy"
        },
        {
            "amount": 1,
            "avg_price": 99,
            "create_date": 1418008468000,
            "deal_amount": 1,
            "order_id": 12,
            "orders_id": 12,
            "price": 99,
            "status": 2,
            "symbol": "btc_usd",
            "type": "sell"
        }
    ]
}"#;

/// A request as seen by the fixture server
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl CapturedRequest {
    /// Decoded form fields of the body
    pub fn form(&self) -> HashMap<String, String> {
        serde_urlencoded::from_str(&self.body).expect("form-encoded body")
    }

    /// Header value by lower-case name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// A one-shot HTTP server
pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl MockServer {
    /// Answer the next request with `status` and a JSON `body`
    pub async fn respond(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason(status),
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            let _ = socket.shutdown().await;

            request
        });

        Self {
            base_url: format!("http://{}/api/v1/", addr),
            handle,
        }
    }

    /// Answer with `status` and a body cut short of its `Content-Length`
    pub async fn truncated(status: u16, partial_body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let partial_body = partial_body.to_string();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason(status),
                partial_body.len() + 64,
                partial_body
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            let _ = socket.shutdown().await;

            request
        });

        Self {
            base_url: format!("http://{}/api/v1/", addr),
            handle,
        }
    }

    /// Accept the next request and never answer it
    pub async fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
            request
        });

        Self {
            base_url: format!("http://{}/api/v1/", addr),
            handle,
        }
    }

    /// Wait for the captured request
    pub async fn request(self) -> CapturedRequest {
        self.handle.await.expect("fixture task")
    }
}

/// A base URL with nothing listening behind it
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/api/v1/", addr)
}

/// Client signed with the test credentials, pointed at `base_url`
pub fn client_for(base_url: &str) -> OkexRestClient {
    client_with_timeout(base_url, Duration::from_secs(5))
}

/// Client signed with custom credentials, pointed at `base_url`
pub fn client_with_credentials(base_url: &str, credentials: Credentials) -> OkexRestClient {
    OkexRestClient::with_config(ClientConfig::new(credentials).with_base_url(base_url))
        .expect("client")
}

/// Same as [`client_for`] with a custom timeout
pub fn client_with_timeout(base_url: &str, timeout: Duration) -> OkexRestClient {
    let creds = Credentials::new(API_KEY, SECRET_KEY).expect("test credentials");
    let config = ClientConfig::new(creds)
        .with_base_url(base_url)
        .with_timeout(timeout);
    OkexRestClient::with_config(config).expect("client")
}

async fn read_request(socket: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.expect("read");
        assert!(n > 0, "connection closed before request headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.expect("read body");
        assert!(n > 0, "connection closed before request body");
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

    CapturedRequest {
        method,
        path,
        headers,
        body,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}
