//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use pelabuhan_gateway::{GatewayConfig, HttpServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request as seen by the mock upstream.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct UpstreamRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
}

#[allow(dead_code)]
impl UpstreamRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Requests received by a recording upstream.
pub type RequestLog = Arc<Mutex<Vec<UpstreamRequest>>>;

/// Start a mock upstream that always returns 200 with `body`.
#[allow(dead_code)]
pub async fn start_mock_upstream(body: &'static str) -> SocketAddr {
    start_programmable_upstream(move |_| async move { (200, body.to_string()) }).await
}

/// Start a mock upstream returning `(status, body)` and recording requests.
#[allow(dead_code)]
pub async fn start_recording_upstream(status: u16, body: &'static str) -> (SocketAddr, RequestLog) {
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let recorder = log.clone();
    let addr = start_programmable_upstream(move |req| {
        recorder.lock().unwrap().push(req);
        async move { (status, body.to_string()) }
    })
    .await;
    (addr, log)
}

/// Start a programmable mock upstream on an ephemeral port.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(UpstreamRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        let (status, body) = f(request).await;

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Upstream base URL for a mock listening on `addr`.
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}/api/v1", addr)
}

/// Start the gateway against `upstream` and return its address.
#[allow(dead_code)]
pub async fn start_gateway(upstream: SocketAddr) -> (SocketAddr, Shutdown) {
    start_gateway_with(|config| config.upstream.base_url = base_url(upstream)).await
}

/// Start the gateway with a customised configuration.
#[allow(dead_code)]
pub async fn start_gateway_with<F>(configure: F) -> (SocketAddr, Shutdown)
where
    F: FnOnce(&mut GatewayConfig),
{
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.observability.metrics_enabled = false;
    configure(&mut config);

    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

async fn read_request(socket: &mut TcpStream) -> Option<UpstreamRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let text = String::from_utf8_lossy(&buf).into_owned();
    let mut lines = text.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();
    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    Some(UpstreamRequest {
        method,
        target,
        headers,
    })
}

fn status_line(status: u16) -> String {
    let reason = match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    };
    format!("{} {}", status, reason)
}
