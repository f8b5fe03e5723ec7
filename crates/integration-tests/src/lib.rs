//! Integration tests for the Songbird site.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p songbird-integration-tests
//! ```
//!
//! Each test boots the real router (full middleware stack) on an ephemeral
//! localhost port via [`TestServer::start`] and talks to it over HTTP. The
//! server shares its store with the test so effects can be checked directly.
//!
//! # Test Categories
//!
//! - `content_api` - Content listing endpoints
//! - `contact_api` - Contact form submission

use std::net::SocketAddr;
use std::sync::Arc;

use songbird_site::config::SiteConfig;
use songbird_site::state::AppState;
use songbird_site::store::MemStorage;
use tokio::task::JoinHandle;

/// A running site bound to `127.0.0.1` on a random port.
pub struct TestServer {
    pub base_url: String,
    pub storage: Arc<MemStorage>,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by a seeded store.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        Self::with_storage(MemStorage::new()).await
    }

    /// Start a server backed by `storage`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn with_storage(storage: MemStorage) -> Self {
        let storage = Arc::new(storage);
        let state = AppState::new(SiteConfig::default(), storage.clone());
        let app = songbird_site::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let handle = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            storage,
            client: reqwest::Client::new(),
            handle,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
