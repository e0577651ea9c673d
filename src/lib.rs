//! Omie ERP API client library.
//!
//! A Rust library for the [Omie](https://app.omie.com.br/api/) HTTP API
//! using a trait-based architecture where each operation (Create, Update,
//! Find, List, ...) is defined as a trait that resource types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use omie::{Company, Find, List, ListOptions, OmieClient, Save};
//!
//! #[tokio::main]
//! async fn main() -> omie::Result<()> {
//!     // Create client from environment variables
//!     let client = OmieClient::from_env()?;
//!
//!     // List the first page of companies
//!     let companies = Company::list(&client, &ListOptions::default()).await?;
//!     println!("Found {} companies", companies.len());
//!
//!     // Look up one by its Omie id
//!     let params = serde_json::json!({"codigo_cliente_omie": 8898});
//!     if let Some(company) = Company::find(&client, &params).await? {
//!         println!("Company: {:?}", company.razao_social);
//!     }
//!
//!     // Create or update a local record
//!     let mut company = Company::default();
//!     company.codigo_cliente_integracao = Some("CLI-001".to_string());
//!     company.razao_social = Some("Acme Ltda".to_string());
//!     company.add_tag("Cliente");
//!     company.save(&client).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Every Omie call is a JSON POST of `{app_key, app_secret, call, param}`
//! to a per-resource path. [`OmieClient::request`] builds that envelope and
//! classifies failures into [`OmieError`]. Resources ([`Company`],
//! [`Product`], [`SalesOrder`]) describe their path, call identifiers and
//! id fields through [`Resource`], and implement the operation traits
//! their call table supports:
//!
//! - [`Create`], [`Update`], [`Upsert`], [`Delete`] - write calls
//! - [`Find`] - single lookups, `None` when Omie rejects the call
//! - [`List`] - paginated collections, empty when Omie rejects the call
//! - [`Associate`] - link Omie ids to integration codes
//! - [`Save`] - create-or-update from a local record
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `OMIE_APP_KEY` (required) - Your application key
//! - `OMIE_APP_SECRET` (required) - Your application secret
//! - `OMIE_API_URL` (optional) - Base URL (defaults to `https://app.omie.com.br/api`)

pub mod cli;
mod client;
mod error;
#[cfg(feature = "test-server")]
pub mod mock_server;
mod models;
pub mod output;
mod pagination;
mod resource;
mod traits;

// Re-export core types
pub use client::OmieClient;
pub use error::{OmieError, Result};
pub use pagination::{ListOptions, Page, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use resource::{Attributed, Attributes, CallTable, Operation, Resource};

// Re-export traits
pub use traits::{Associate, Create, Delete, Find, List, Save, Update, Upsert};

// Re-export output formatting
pub use output::PrettyPrint;

// Re-export models
pub use models::{Company, Product, SalesOrder, Tag, TaxRecommendation};
