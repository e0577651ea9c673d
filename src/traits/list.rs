//! List trait for fetching collections of entities.

use async_trait::async_trait;
use serde_json::Value;

use crate::client::OmieClient;
use crate::error::Result;
use crate::models::lenient;
use crate::pagination::{ListOptions, Page};
use crate::resource::{Operation, Resource};

/// Maximum pages fetched by one `list_all` call (safety limit).
const MAX_PAGES: u32 = 1000;

/// List entities with pagination support.
///
/// Omie reports an empty result set as a classified rejection, so any
/// [`OmieError::Request`](crate::OmieError::Request) yields an empty page.
/// Every other error is returned.
///
/// # Example
///
/// ```ignore
/// use omie::{Company, List, ListOptions, OmieClient};
///
/// let client = OmieClient::from_env()?;
///
/// // First page with default size
/// let companies = Company::list(&client, &ListOptions::default()).await?;
///
/// // Every page
/// let all = Company::list_all(&client, &ListOptions::default()).await?;
/// ```
#[async_trait]
pub trait List: Resource {
    /// Fetch one page, keeping Omie's pagination counters.
    #[tracing::instrument(skip_all, fields(entity = Self::ENTITY, page = options.page()))]
    async fn list_page(client: &OmieClient, options: &ListOptions) -> Result<Page<Self>> {
        let call = Self::call(Operation::List)?;
        let params = options.merged_with(Self::default_list_filter());

        let mut response = match client.request(Self::PATH, call, &params).await {
            Ok(response) => response,
            Err(err) if err.is_request_error() => {
                tracing::warn!(entity = Self::ENTITY, error = %err, "list returned no records");
                return Ok(Page::empty(options.page()));
            }
            Err(err) => return Err(err),
        };

        let items: Vec<Self> = match response.get_mut(Self::LIST_KEY).map(Value::take) {
            Some(Value::Null) | None => Vec::new(),
            Some(collection) => serde_json::from_value(collection)?,
        };

        let counter = |key: &str| {
            response
                .get(key)
                .and_then(|value| lenient::parse_id(value).ok().flatten())
                .and_then(|n| u64::try_from(n).ok())
        };
        let page = counter("pagina")
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or_else(|| options.page());
        let total_pages = counter("total_de_paginas").and_then(|p| u32::try_from(p).ok());
        let total = counter("total_de_registros");

        Ok(Page::new(items, page, total_pages, total))
    }

    /// Fetch one page of entities.
    async fn list(client: &OmieClient, options: &ListOptions) -> Result<Vec<Self>> {
        Ok(Self::list_page(client, options).await?.items)
    }

    /// Fetch every page, starting at the page named in `options`.
    #[tracing::instrument(skip_all, fields(entity = Self::ENTITY))]
    async fn list_all(client: &OmieClient, options: &ListOptions) -> Result<Vec<Self>> {
        let mut all_items = Vec::new();
        let mut options = options.clone();
        let mut page = options.page();
        let mut fetched = 0;

        loop {
            options.pagina = Some(page);
            let result = Self::list_page(client, &options).await?;
            let has_more = result.has_more && !result.is_empty();
            all_items.extend(result.items);
            fetched += 1;

            if !has_more {
                break;
            }

            // Safety limit to prevent infinite loops
            if fetched >= MAX_PAGES {
                tracing::warn!("Reached pagination limit of {} pages, stopping", MAX_PAGES);
                break;
            }
            page += 1;
        }

        Ok(all_items)
    }
}
