//! Save trait.

use async_trait::async_trait;

use crate::client::OmieClient;
use crate::error::Result;
use crate::traits::{Create, Update};

/// Persist a locally built record.
#[async_trait]
pub trait Save: Create + Update {
    /// Create the record when it has no remote id, update it otherwise.
    ///
    /// The record's own set fields are the payload. On success the remote
    /// id from Omie's answer is copied onto `self` and the answer returned.
    #[tracing::instrument(skip_all, fields(entity = Self::ENTITY))]
    async fn save(&mut self, client: &OmieClient) -> Result<Self> {
        let saved = if self.is_saved() {
            Self::update(client, &*self).await?
        } else {
            Self::create(client, &*self).await?
        };

        if let Some(id) = saved.remote_id() {
            self.set_remote_id(id);
        }

        Ok(saved)
    }
}
