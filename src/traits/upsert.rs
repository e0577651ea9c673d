//! Upsert trait.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::OmieClient;
use crate::error::Result;
use crate::resource::{Operation, Resource};

/// Create the entity, or update it when its integration code already exists.
#[async_trait]
pub trait Upsert: Resource {
    async fn upsert<P>(client: &OmieClient, params: &P) -> Result<Self>
    where
        P: Serialize + ?Sized + Sync,
    {
        super::write_call(client, Operation::Upsert, params).await
    }
}
