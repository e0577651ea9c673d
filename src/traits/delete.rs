//! Delete trait.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::OmieClient;
use crate::error::Result;
use crate::resource::{Operation, Resource};

/// Remove an entity.
///
/// Omie answers with the ids of the removed record and a status
/// description; those are returned as the resource type.
#[async_trait]
pub trait Delete: Resource {
    async fn delete<P>(client: &OmieClient, params: &P) -> Result<Self>
    where
        P: Serialize + ?Sized + Sync,
    {
        super::write_call(client, Operation::Delete, params).await
    }
}
