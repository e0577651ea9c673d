//! Mock Omie API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Omie
//! call-dispatch endpoints for integration and end-to-end testing. Unlike
//! wiremock which mocks at the HTTP level per-test, this server maintains
//! state across requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use omie::mock_server::MockServer;
//! use omie::{Company, Find, OmieClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = OmieClient::new("key", "secret", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let params = serde_json::json!({"codigo_cliente_integracao": "CLI-001"});
//!     let company = Company::find(&client, &params).await.unwrap();
//!     assert!(company.is_some());
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{MockState, Store};
