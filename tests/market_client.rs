//! Runs the HTTP provider against an in-process stub of the market service.

use std::sync::{Arc, Mutex};

use arb_board::{FetchError, HttpMarketProvider, MarketDataProvider, TradingPair};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

const SAMPLE: &str = r#"{"markets":[{"exchange":"binance","last_traded_price":"100","best_buy_price":"99","best_sell_price":"101","volume_24hr":"5","timestamp":{"seconds":"1700000000"}}]}"#;

/// What the stub saw of the last request.
#[derive(Debug, Default, Clone)]
struct Captured {
    request_line: String,
    content_type: Option<String>,
    body: String,
}

/// Serves `status` + `body` to every connection. Returns the endpoint URL.
async fn serve(status: &'static str, body: &'static str) -> (String, Arc<Mutex<Captured>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Captured::default()));
    let seen = captured.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let request = read_request(&mut socket).await;
            *seen.lock().unwrap() = request;

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}/market"), captured)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Captured {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return Captured::default();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let mut content_type = None;
    let mut content_length = 0usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_ascii_lowercase().as_str() {
                "content-type" => content_type = Some(value.trim().to_string()),
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                _ => {}
            }
        }
    }

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Captured {
        request_line,
        content_type,
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    }
}

fn ada() -> TradingPair {
    TradingPair::new("ADA/USDT").unwrap()
}

#[tokio::test]
async fn posts_pair_as_json_and_decodes_sample() {
    let (url, captured) = serve("200 OK", SAMPLE).await;
    let provider = HttpMarketProvider::new(url, 2_000).unwrap();

    let quotes = provider.fetch_market_data(&ada()).await.unwrap();

    let seen = captured.lock().unwrap().clone();
    assert_eq!(seen.request_line, "POST /market HTTP/1.1");
    assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(body, serde_json::json!({ "trading_pair": "ADA/USDT" }));

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].exchange, "binance");
    assert_eq!(quotes[0].best_sell_price.as_str(), "101");
    assert_eq!(quotes[0].timestamp_ms(), 1_700_000_000_000);
}

#[tokio::test]
async fn empty_markets_is_an_empty_list() {
    let (url, _) = serve("200 OK", r#"{"markets":[]}"#).await;
    let provider = HttpMarketProvider::new(url, 2_000).unwrap();

    assert!(provider.fetch_market_data(&ada()).await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let (url, _) = serve("503 Service Unavailable", "upstream down").await;
    let provider = HttpMarketProvider::new(url, 2_000).unwrap();

    match provider.fetch_market_data(&ada()).await {
        Err(FetchError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (url, _) = serve("200 OK", r#"{"markets":[{"exchange":"binance"#).await;
    let provider = HttpMarketProvider::new(url, 2_000).unwrap();

    let err = provider.fetch_market_data(&ada()).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let provider = HttpMarketProvider::new(format!("http://{addr}/market"), 2_000).unwrap();

    let err = provider.fetch_market_data(&ada()).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}
