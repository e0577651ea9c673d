//! Update trait for modifying entities.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::OmieClient;
use crate::error::Result;
use crate::resource::{Operation, Resource};

/// Update an existing entity.
///
/// Omie locates the record through the integration code or the remote id
/// embedded in `params` and changes only the attributes present there.
///
/// # Example
///
/// ```ignore
/// use omie::{OmieClient, Product, Update};
///
/// let client = OmieClient::from_env()?;
/// let updated = Product::update(&client, &serde_json::json!({
///     "codigo_produto_integracao": "PRD-001",
///     "valor_unitario": 250.0,
/// })).await?;
/// ```
#[async_trait]
pub trait Update: Resource {
    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns [`OmieError::Request`](crate::OmieError::Request) when the
    /// record is not found or fails validation.
    async fn update<P>(client: &OmieClient, params: &P) -> Result<Self>
    where
        P: Serialize + ?Sized + Sync,
    {
        super::write_call(client, Operation::Update, params).await
    }
}
