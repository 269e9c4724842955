use resolver_guard::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Readiness Waiter Tests
/// Uses a raw TCP listener speaking just enough HTTP to drive the probe loop

async fn spawn_http_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    status_line
                );
                let _ = stream.write_all(response.as_bytes()).await;
            });
        }
    });

    format!("http://{}/", addr)
}

/// Bind and immediately release a port so probes get connection refused.
async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

fn fast_config(target_url: String) -> ReadinessConfig {
    ReadinessConfig {
        target_url,
        attempt_timeout: Duration::from_millis(250),
        poll_interval: Duration::from_millis(50),
        deadline: Duration::from_millis(400),
    }
}

#[tokio::test]
async fn test_returns_within_one_attempt_when_service_up() {
    let _ = env_logger::builder().is_test(true).try_init();
    let url = spawn_http_server("200 OK").await;

    let waiter = ReadinessWaiter::new(fast_config(url)).unwrap();
    let start = Instant::now();

    waiter.wait_until_ready().await.unwrap();
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_error_status_still_counts_as_ready() {
    let url = spawn_http_server("500 Internal Server Error").await;

    let waiter = ReadinessWaiter::new(fast_config(url)).unwrap();
    assert!(waiter.wait_until_ready().await.is_ok());
}

#[tokio::test]
async fn test_deadline_exceeded_when_never_reachable() {
    let url = unreachable_url().await;

    let retries = Arc::new(AtomicUsize::new(0));
    let retries_clone = retries.clone();
    let handler: RetryHandler = Box::new(move |_attempts, _elapsed| {
        retries_clone.fetch_add(1, Ordering::SeqCst);
    });

    let waiter = ReadinessWaiter::new(fast_config(url.clone())).unwrap();
    let result = waiter.wait_with_handler(Some(handler)).await;

    match result {
        Err(ReadinessError::DeadlineExceeded { url: failed_url, elapsed, .. }) => {
            assert_eq!(failed_url, url);
            assert!(elapsed >= Duration::from_millis(400));
        }
        other => panic!("Expected DeadlineExceeded error, got: {:?}", other),
    }

    // Progress was reported at the poll interval before the deadline hit
    assert!(retries.load(Ordering::SeqCst) >= 2);
}

#[tokio::test]
async fn test_deadline_error_carries_connection_source() {
    use std::error::Error as _;

    let waiter = ReadinessWaiter::new(fast_config(unreachable_url().await)).unwrap();
    let error = waiter.wait_until_ready().await.unwrap_err();

    assert!(error.source().is_some());
}

#[tokio::test]
async fn test_invalid_config_rejected_up_front() {
    let mut config = fast_config("http://localhost:5000/".to_string());
    config.deadline = Duration::from_secs(0);

    match ReadinessWaiter::new(config) {
        Err(ReadinessError::InvalidConfig(message)) => {
            assert!(message.contains("deadline"));
        }
        other => panic!(
            "Expected InvalidConfig error, got: {:?}",
            other.map(|waiter| waiter.target_url().to_string())
        ),
    }
}
