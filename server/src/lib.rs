//! Documentation of a minimal voting service.
//!
//!
//!
//! # General Infrastructure
//! - Single axum process fronting a Redis store
//! - Frontend talks to the backend over plain JSON, two endpoints total
//! - `GET /api/votes` returns the tally mapping for every option
//! - `POST /api/vote` records one vote for an allow-listed option
//! - Options are seeded once at startup, votes only ever increment
//!
//!
//!
//! # Notes
//!
//! ## Identity
//! Login is a display name typed into the client, nothing more. The server
//! keeps no per-user record, so "has this user already voted" lives only in
//! client-local state. A forged client can vote repeatedly.
//!
//! ## Environment
//! - `RUST_PORT`: listening port, default `3001`
//! - `REDIS_URL`: store connection URI, default `redis://127.0.0.1:6379`
//! - `ALLOWED_ORIGINS`: comma-separated CORS origins, `*` for any
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod options;
pub mod routes;
pub mod seed;
pub mod state;

use routes::{vote_handler, votes_handler};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let app = Router::new()
        .route("/api/votes", get(votes_handler))
        .route("/api/vote", post(vote_handler))
        .layer(cors_layer(&state.config.allowed_origins))
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let origin = if allowed_origins.trim() == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .split(',')
                .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(origin)
        .max_age(Duration::from_secs(60 * 60))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
