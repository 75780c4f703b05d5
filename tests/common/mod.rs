//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates a temp storage root, default
//! config, and full [`AppContext`]. The [`TestHarness::with_server`]
//! constructor starts Axum on a random port for HTTP-level testing.

use std::net::SocketAddr;
use std::sync::Arc;

use reelserve::catalog::AssetStore;
use reelserve::config::Config;
use reelserve::server::{create_router, AppContext};

/// Test harness wrapping a fully-constructed [`AppContext`] backed by a
/// temporary storage root.
pub struct TestHarness {
    pub ctx: AppContext,
    pub dir: tempfile::TempDir,
}

impl TestHarness {
    /// Create a new harness with default configuration and an empty temp
    /// storage root.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new harness with a custom configuration. The storage root is
    /// always replaced with the harness temp directory.
    pub fn with_config(mut config: Config) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp storage root");
        config.storage.root = dir.path().to_path_buf();

        let store = AssetStore::new(dir.path()).expect("failed to open storage root");
        let ctx = AppContext {
            config: Arc::new(config),
            store: Arc::new(store),
        };

        Self { ctx, dir }
    }

    /// Write a media file into the storage root.
    pub fn write_asset(&self, name: &str, data: &[u8]) {
        std::fs::write(self.dir.path().join(name), data).expect("failed to write asset");
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        Self::serve(Self::new()).await
    }

    /// Start an Axum server with custom config on a random port.
    pub async fn with_server_config(config: Config) -> (Self, SocketAddr) {
        Self::serve(Self::with_config(config)).await
    }

    async fn serve(harness: Self) -> (Self, SocketAddr) {
        let app = create_router(harness.ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}
