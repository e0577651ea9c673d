//! Associate trait for linking Omie records to integration codes.

use async_trait::async_trait;

use crate::client::OmieClient;
use crate::error::Result;
use crate::resource::{Attributes, Operation, Resource};

/// Link an Omie record to a caller-assigned integration code.
#[async_trait]
pub trait Associate: Resource {
    /// Associate `remote_id` with `integration_code`.
    ///
    /// Returns `Ok(false)` when Omie rejects the call.
    #[tracing::instrument(skip(client), fields(entity = Self::ENTITY))]
    async fn associate(client: &OmieClient, remote_id: i64, integration_code: &str) -> Result<bool> {
        let call = Self::call(Operation::Associate)?;

        let mut params = Attributes::new();
        params.insert(Self::REMOTE_ID_FIELD.to_string(), remote_id.into());
        params.insert(
            Self::INTEGRATION_CODE_FIELD.to_string(),
            integration_code.into(),
        );

        match client.request(Self::PATH, call, &params).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_request_error() => {
                tracing::warn!(entity = Self::ENTITY, error = %err, "association rejected");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Associate this record's own ids.
    ///
    /// Returns `Ok(false)` without calling Omie if either id is missing.
    #[tracing::instrument(skip_all, fields(entity = Self::ENTITY))]
    async fn associate_entry(&self, client: &OmieClient) -> Result<bool> {
        match (self.remote_id(), self.integration_code()) {
            (Some(remote_id), Some(code)) => Self::associate(client, remote_id, code).await,
            _ => Ok(false),
        }
    }
}
