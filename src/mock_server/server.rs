//! Mock Omie API server.
//!
//! Provides an axum-based HTTP server that simulates the Omie API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;
use crate::{Company, Product, Resource, SalesOrder};

/// A mock Omie API server for testing.
///
/// The server runs in the background and answers the same envelopes as
/// Omie, including its fault bodies.
pub struct MockServer {
    /// The base URL, including the `/api` prefix.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Router::new()
            .nest("/api", Self::create_router(shared_state.clone()))
            .route("/health", get(health_check));

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}/api", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Pass it to `OmieClient::new` in place of the Omie URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for company in scenario.companies {
            state.companies.insert(company);
        }
        for product in scenario.products {
            state.products.insert(product);
        }
        for order in scenario.orders {
            state.orders.insert(order);
        }

        state
    }

    /// Resource routes, mounted under `/api`.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            .route(&route::<Company>(), post(handlers::companies))
            .route(&route::<Product>(), post(handlers::products))
            .route(&route::<SalesOrder>(), post(handlers::orders))
            .with_state(state)
    }
}

/// Absolute route for a resource path.
fn route<R: Resource>() -> String {
    format!("/{}", R::PATH)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
