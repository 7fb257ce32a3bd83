//! Integration tests for BackendSession against an in-process mock backend.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tokio::time::timeout;

use ringside_backend::{BackendConfig, BackendSession};

/// Shared health flag the tests flip to simulate outages.
type Health = Arc<AtomicBool>;

async fn sign_in() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "player_id": 42 }))
}

async fn health(State(healthy): State<Health>) -> StatusCode {
    if healthy.load(Ordering::SeqCst) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Spawns a mock backend and returns its address.
async fn spawn_backend(healthy: Health) -> SocketAddr {
    let app = Router::new()
        .route("/auth/anonymous", post(sign_in))
        .route("/health", get(health))
        .with_state(healthy);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend died");
    });
    addr
}

fn config_for(addr: SocketAddr, ping_interval: Duration) -> BackendConfig {
    BackendConfig::new(
        format!("http://{}", addr),
        ping_interval,
        Duration::from_secs(2),
    )
}

#[tokio::test]
async fn test_open_signs_in_and_reports_identity() {
    let healthy = Arc::new(AtomicBool::new(true));
    let addr = spawn_backend(healthy).await;

    let session = BackendSession::open(&config_for(addr, Duration::from_secs(30)))
        .await
        .expect("Open against healthy backend failed");

    assert_eq!(session.player_id(), 42);
    assert!(session.has_connectivity(), "Fresh session should be online");
    assert!(
        *session.watch_connectivity().borrow(),
        "Subscription should see the connected seed value"
    );

    session.stop().await;
}

#[tokio::test]
async fn test_connectivity_follows_health_endpoint() {
    let healthy = Arc::new(AtomicBool::new(true));
    let addr = spawn_backend(healthy.clone()).await;

    let session = BackendSession::open(&config_for(addr, Duration::from_millis(50)))
        .await
        .expect("Open against healthy backend failed");
    let mut connectivity = session.watch_connectivity();
    assert!(*connectivity.borrow());

    healthy.store(false, Ordering::SeqCst);
    timeout(Duration::from_secs(2), connectivity.changed())
        .await
        .expect("No connectivity notification after outage")
        .expect("Connectivity channel closed");
    assert!(
        !*connectivity.borrow_and_update(),
        "Outage should flip connectivity off"
    );

    healthy.store(true, Ordering::SeqCst);
    timeout(Duration::from_secs(2), connectivity.changed())
        .await
        .expect("No connectivity notification after recovery")
        .expect("Connectivity channel closed");
    assert!(
        *connectivity.borrow_and_update(),
        "Recovery should flip connectivity back on"
    );

    session.stop().await;
}

#[tokio::test]
async fn test_open_fails_against_unreachable_backend() {
    // Bind and immediately drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    let config = BackendConfig::new(
        format!("http://{}", addr),
        Duration::from_secs(30),
        Duration::from_millis(500),
    );

    let result = BackendSession::open(&config).await;
    let err = result.err().expect("Open against closed port should fail");
    assert!(
        !err.message.is_empty(),
        "Bring-up failure should carry a descriptive message"
    );
}

#[tokio::test]
async fn test_open_fails_on_rejected_sign_in() {
    // A backend with no /auth route answers 404, which open must reject.
    let app = Router::new().route("/health", get(|| async { StatusCode::OK }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend died");
    });

    let result = BackendSession::open(&config_for(addr, Duration::from_secs(30))).await;
    let err = result.err().expect("Sign-in rejection should fail open");
    assert!(
        err.message.contains("Sign-in failed"),
        "Unexpected message: {}",
        err.message
    );
}
