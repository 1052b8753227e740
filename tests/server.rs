use std::net::SocketAddr;
use std::time::Duration;

use greeter::{Error, Server, app};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;

struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), Error>>,
}

impl TestServer {
    async fn start() -> Self {
        let server = Server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = server.local_addr();
        let (shutdown, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_with_shutdown(app(), async {
            let _ = rx.await;
        }));
        Self { addr, shutdown, handle }
    }

    /// Sends one request with `Connection: close` and returns the raw response.
    async fn raw(&self, method: &str, target: &str) -> String {
        let mut stream = TcpStream::connect(self.addr).await.unwrap();
        let request =
            format!("{method} {target} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8(buf).unwrap()
    }

    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

fn split(raw: &str) -> (&str, String, &str) {
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let (status_line, headers) = head.split_once("\r\n").unwrap_or((head, ""));
    (status_line, headers.to_ascii_lowercase(), body)
}

#[tokio::test]
async fn serves_the_scenarios_over_tcp() {
    let server = TestServer::start().await;

    let raw = server.raw("GET", "/").await;
    let (status, _, body) = split(&raw);
    assert_eq!(status, "HTTP/1.1 200 OK");
    assert_eq!(body, "Hi there");

    let raw = server.raw("GET", "/health").await;
    let (status, _, body) = split(&raw);
    assert_eq!(status, "HTTP/1.1 200 OK");
    assert_eq!(body, "OK");

    let raw = server.raw("GET", "/greet?name=Daniel").await;
    let (status, _, body) = split(&raw);
    assert_eq!(status, "HTTP/1.1 200 OK");
    assert_eq!(body, "Hello, Daniel!");

    let raw = server.raw("GET", "/greet").await;
    let (status, _, body) = split(&raw);
    assert_eq!(status, "HTTP/1.1 400 Bad Request");
    assert_eq!(body, "Name query parameter is required");

    let raw = server.raw("GET", "/nope").await;
    assert!(raw.starts_with("HTTP/1.1 404 Not Found"));

    let raw = server.raw("POST", "/").await;
    assert!(raw.starts_with("HTTP/1.1 404 Not Found"));

    server.stop().await;
}

#[tokio::test]
async fn ready_over_tcp_is_json() {
    let server = TestServer::start().await;

    let raw = server.raw("GET", "/ready").await;
    let (status, headers, body) = split(&raw);
    assert_eq!(status, "HTTP/1.1 200 OK");
    assert!(headers.contains("content-type: application/json"));
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["status"], "ready");

    server.stop().await;
}

#[tokio::test]
async fn head_health_over_tcp_has_headers_and_no_body() {
    let server = TestServer::start().await;

    let raw = server.raw("HEAD", "/health").await;
    let (status, headers, body) = split(&raw);
    assert_eq!(status, "HTTP/1.1 200 OK");
    assert!(headers.contains("content-type: text/plain; charset=utf-8"));
    assert!(body.is_empty());

    server.stop().await;
}

#[tokio::test]
async fn shutdown_returns_ok_with_no_traffic() {
    let server = TestServer::start().await;
    server.stop().await;
}

#[tokio::test]
async fn shutdown_closes_idle_keep_alive_connections() {
    let server = TestServer::start().await;

    let mut stream = TcpStream::connect(server.addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();

    let mut buf = Vec::new();
    let mut chunk = [0u8; 512];
    while !buf.ends_with(b"\r\n\r\nOK") {
        let n = stream.read(&mut chunk).await.unwrap();
        assert_ne!(n, 0, "connection closed before the response arrived");
        buf.extend_from_slice(&chunk[..n]);
    }

    // The connection stays open and idle while the server shuts down.
    timeout(Duration::from_secs(3), server.stop())
        .await
        .expect("server did not return with an idle keep-alive connection open");

    let n = timeout(Duration::from_secs(3), stream.read(&mut chunk))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(n, 0, "server should close the idle connection");
}
