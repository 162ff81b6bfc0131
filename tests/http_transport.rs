use std::time::Duration;

use genius_songs::{ArtistId, Config, Error, Genius, HttpTransport, Transport};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

fn config(base_url: &str) -> Config {
    Config::builder()
        .token("secret")
        .base_url(base_url)
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap()
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Answer a single request with `response`, returning the request head
async fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request_head(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });
    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn returns_body_and_sends_token() {
    let body = r#"{"response": {"songs": []}}"#;
    let (base_url, server) = serve_once(http_response("200 OK", body)).await;
    let transport = HttpTransport::new(&config(&base_url)).unwrap();

    let received = transport
        .get("artists/10/songs", &[("page", "1".to_string())])
        .await
        .unwrap();
    assert_eq!(received, body);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /artists/10/songs?page=1 HTTP/1.1"));
    assert!(request
        .to_lowercase()
        .contains("authorization: bearer secret"));
}

#[tokio::test]
async fn error_status_is_classified() {
    let (base_url, _server) = serve_once(http_response("404 Not Found", "{}")).await;
    let transport = HttpTransport::new(&config(&base_url)).unwrap();

    let result = transport.get("search", &[("q", "x".to_string())]).await;
    assert!(matches!(result, Err(Error::HttpStatus(404))));
}

#[tokio::test]
async fn refused_connection_is_classified() {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let transport = HttpTransport::new(&config(&format!("http://{addr}"))).unwrap();

    let result = transport.get("search", &[("q", "x".to_string())]).await;
    assert!(matches!(result, Err(Error::Connection(_))));
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request_head(&mut socket).await;
        tokio::time::sleep(Duration::from_secs(10)).await;
    });
    let transport = HttpTransport::new(&config(&format!("http://{addr}"))).unwrap();

    let result = transport.get("search", &[("q", "x".to_string())]).await;
    assert!(matches!(result, Err(Error::Timeout)));
}

#[tokio::test]
async fn search_over_http() {
    let body = r#"{"response": {"hits": [{"result": {"primary_artist": {"name": "Artist", "id": 10}}}]}}"#;
    let (base_url, server) = serve_once(http_response("200 OK", body)).await;
    let genius = Genius::new(&config(&base_url)).unwrap();

    let artist = genius.find_artist("artist").await.unwrap().unwrap();
    assert_eq!(artist.id, ArtistId::from(10));

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /search?q=artist HTTP/1.1"));
}
