use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use tile_words::lexicon::{LookupError, WordValidator, WordnikClient};

/// Serve one canned HTTP response and report the request line.
async fn serve_once(status: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let text = String::from_utf8_lossy(&request).into_owned();
        let line = text.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(line);

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
    });

    (format!("http://{}/v4", addr), rx)
}

fn client(base: &str) -> WordnikClient {
    WordnikClient::new(base, "test-key", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn known_word_is_accepted() {
    let body = serde_json::json!([
        {"word": "tile", "text": "A thin slab of baked clay."},
        {"word": "tile", "text": "A piece in a game."}
    ])
    .to_string();
    let (base, request_line) = serve_once("200 OK", body).await;

    assert!(client(&base).validate("tile").await);

    let line = request_line.await.unwrap();
    assert!(line.starts_with("GET /v4/word.json/tile/definitions?limit=200"));
    assert!(line.contains("useCanonical=false"));
    assert!(line.contains("api_key=test-key"));
}

#[tokio::test]
async fn canonical_answer_is_rejected() {
    let body = serde_json::json!([{"word": "run", "text": "To move swiftly."}]).to_string();
    let (base, _) = serve_once("200 OK", body).await;
    assert!(!client(&base).validate("ran").await);
}

#[tokio::test]
async fn not_found_is_a_clean_miss() {
    let body = serde_json::json!({"statusCode": 404, "error": "Not Found"}).to_string();
    let (base, _) = serve_once("404 Not Found", body).await;
    assert!(!client(&base).lookup("zzxq").await.unwrap());
}

#[tokio::test]
async fn server_error_is_reported_and_rejected() {
    let (base, _) = serve_once("500 Internal Server Error", "{}".to_string()).await;
    let err = client(&base).lookup("cat").await.unwrap_err();
    assert!(matches!(err, LookupError::Status { status: 500 }));

    let (base, _) = serve_once("503 Service Unavailable", "{}".to_string()).await;
    assert!(!client(&base).validate("cat").await);
}

#[tokio::test]
async fn garbage_body_is_malformed() {
    let (base, _) = serve_once("200 OK", "<html>nope</html>".to_string()).await;
    let err = client(&base).lookup("cat").await.unwrap_err();
    assert!(matches!(err, LookupError::Malformed(_)));
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let client =
        WordnikClient::new(format!("http://{}/v4", addr), "k", Duration::from_millis(100)).unwrap();
    let err = client.lookup("cat").await.unwrap_err();
    assert!(matches!(err, LookupError::Timeout { timeout_ms: 100 }));
}

#[tokio::test]
async fn transport_errors_do_not_carry_the_api_key() {
    // Nothing listens on a port freed right after binding.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = format!("http://{}/v4", addr);
    let client = WordnikClient::new(base, "SUPERSECRETKEY", Duration::from_secs(2)).unwrap();
    let err = client.lookup("cat").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
    assert!(!err.to_string().contains("SUPERSECRETKEY"), "{err}");
    assert!(!format!("{err:?}").contains("SUPERSECRETKEY"), "{err:?}");
    assert!(!client.validate("cat").await);
}
