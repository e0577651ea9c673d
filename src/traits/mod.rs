//! Trait definitions for Omie operations.
//!
//! Each resource implements the traits its call table supports. The
//! provided methods do the work; an `impl Create for Company {}` is all a
//! resource needs.

mod associate;
mod create;
mod delete;
mod find;
mod list;
mod save;
mod update;
mod upsert;

pub use associate::Associate;
pub use create::Create;
pub use delete::Delete;
pub use find::Find;
pub use list::List;
pub use save::Save;
pub use update::Update;
pub use upsert::Upsert;

use serde::Serialize;

use crate::client::OmieClient;
use crate::error::Result;
use crate::resource::{Operation, Resource};

/// Run a write call and build the resource from its response.
#[tracing::instrument(skip_all, fields(entity = R::ENTITY, operation = %operation))]
async fn write_call<R, P>(client: &OmieClient, operation: Operation, params: &P) -> Result<R>
where
    R: Resource,
    P: Serialize + ?Sized + Sync,
{
    let call = R::call(operation)?;
    tracing::debug!(call, "write call");
    client.request_as(R::PATH, call, params).await
}
