//! Integration tests for Full Stock.
//!
//! The tests boot the real storefront router on an ephemeral local port and
//! drive it over HTTP with `reqwest`. No external services are required; the
//! catalog is a fixture file under `tests/fixtures/`.
//!
//! Run with: `cargo test -p full-stock-integration-tests`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use full_stock_storefront::app;
use full_stock_storefront::config::StorefrontConfig;
use full_stock_storefront::state::AppState;

/// A storefront instance bound to an ephemeral local port.
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Spawn the storefront against the given catalog document.
    ///
    /// # Panics
    ///
    /// Panics when the listener cannot be bound.
    pub async fn spawn(catalog_path: impl Into<PathBuf>) -> Self {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().expect("loopback address"),
            port: 0,
            catalog_path: catalog_path.into(),
            static_dir: PathBuf::from("static"),
        };
        let state = AppState::new(config);
        let app = app(state);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener has a local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self { addr }
    }

    /// Absolute URL for a path on the running server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// Path to a fixture file within this crate.
#[must_use]
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
