//! Create trait for recording new entities.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::OmieClient;
use crate::error::Result;
use crate::resource::{Operation, Resource};

/// Record a new entity.
///
/// # Example
///
/// ```ignore
/// use omie::{Company, Create, OmieClient};
///
/// let client = OmieClient::from_env()?;
/// let company = Company::create(&client, &serde_json::json!({
///     "codigo_cliente_integracao": "CLI-001",
///     "razao_social": "Acme Ltda",
///     "cnpj_cpf": "23.301.943/0001-50",
/// })).await?;
/// ```
#[async_trait]
pub trait Create: Resource {
    /// Create the entity and return Omie's view of it.
    ///
    /// # Errors
    ///
    /// Returns [`OmieError::Request`](crate::OmieError::Request) when Omie
    /// rejects the data, or any other error the request produced.
    async fn create<P>(client: &OmieClient, params: &P) -> Result<Self>
    where
        P: Serialize + ?Sized + Sync,
    {
        super::write_call(client, Operation::Create, params).await
    }
}
