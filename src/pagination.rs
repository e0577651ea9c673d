//! Pagination utilities for Omie list calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resource::Attributes;

/// Default page number for list calls (1-indexed).
pub const DEFAULT_PAGE: u32 = 1;

/// Default and maximum page size accepted by Omie.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// A page of results from an Omie list call.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Total number of pages, when Omie reports it.
    pub total_pages: Option<u32>,
    /// Total number of records across all pages, when Omie reports it.
    pub total: Option<u64>,
    /// Whether there are more pages.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Create a new page from items and pagination info.
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, total_pages: Option<u32>, total: Option<u64>) -> Self {
        let has_more = total_pages.map_or(false, |pages| page < pages);
        Self {
            items,
            page,
            total_pages,
            total,
            has_more,
        }
    }

    /// An empty final page.
    #[must_use]
    pub fn empty(page: u32) -> Self {
        Self::new(Vec::new(), page, None, None)
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total: self.total,
            has_more: self.has_more,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Caller options for list calls.
///
/// Anything set here overrides the defaults (`pagina = 1`,
/// `registros_por_pagina = 50` and the resource's default filter).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagina: Option<u32>,
    /// Number of items per page (max 50).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registros_por_pagina: Option<u32>,
    /// Additional Omie filters, passed through as-is.
    #[serde(flatten)]
    pub filters: Attributes,
}

impl ListOptions {
    /// Options for a specific page.
    #[must_use]
    pub fn for_page(page: u32, per_page: u32) -> Self {
        Self {
            pagina: Some(page),
            registros_por_pagina: Some(per_page),
            filters: Attributes::new(),
        }
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.filters.insert(key.to_string(), value.into());
        self
    }

    /// Page number this request targets.
    pub fn page(&self) -> u32 {
        self.pagina.unwrap_or(DEFAULT_PAGE)
    }

    /// Merge these options over the defaults and the given resource filter.
    pub fn merged_with(&self, default_filter: Attributes) -> Attributes {
        let mut params = Attributes::new();
        params.insert("pagina".to_string(), DEFAULT_PAGE.into());
        params.insert(
            "registros_por_pagina".to_string(),
            DEFAULT_PAGE_SIZE.into(),
        );
        params.extend(default_filter);

        if let Some(page) = self.pagina {
            params.insert("pagina".to_string(), page.into());
        }
        if let Some(per_page) = self.registros_por_pagina {
            params.insert("registros_por_pagina".to_string(), per_page.into());
        }
        params.extend(self.filters.clone());
        params
    }
}
