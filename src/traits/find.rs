//! Find trait for fetching single entities.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::client::OmieClient;
use crate::error::Result;
use crate::resource::{Operation, Resource};

/// Look up a single entity.
///
/// A classified rejection from Omie (which is how it reports "not found")
/// yields `Ok(None)`. Missing credentials, unclassified responses and
/// transport failures are still returned as errors.
///
/// # Example
///
/// ```ignore
/// use omie::{Company, Find, OmieClient};
///
/// let client = OmieClient::from_env()?;
/// let company = Company::find(&client, &serde_json::json!({"codigo_cliente_omie": 8898})).await?;
/// ```
#[async_trait]
pub trait Find: Resource {
    /// Fetch the entity matching `params`.
    #[tracing::instrument(skip_all, fields(entity = Self::ENTITY))]
    async fn find<P>(client: &OmieClient, params: &P) -> Result<Option<Self>>
    where
        P: Serialize + ?Sized + Sync,
    {
        let call = Self::call(Operation::Find)?;

        let mut response = match client.request(Self::PATH, call, params).await {
            Ok(response) => response,
            Err(err) if err.is_request_error() => {
                tracing::warn!(entity = Self::ENTITY, error = %err, "find returned no record");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        if let Some(key) = Self::FIND_KEY {
            response = response.get_mut(key).map(Value::take).unwrap_or(Value::Null);
        }

        if response.is_null() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_value(response)?))
    }
}
