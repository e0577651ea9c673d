//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Omie API server.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Company, Product, Resource, SalesOrder};

/// Records of one resource type, keyed by Omie id.
#[derive(Debug)]
pub struct Store<R> {
    records: BTreeMap<i64, R>,
    next_id: i64,
}

impl<R> Default for Store<R> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1000,
        }
    }
}

impl<R: Resource + Clone> Store<R> {
    /// Insert a record under a fresh Omie id.
    pub fn insert(&mut self, mut record: R) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        record.set_remote_id(id);
        self.records.insert(id, record);
        id
    }

    /// Find the id of the stored record the probe refers to.
    ///
    /// The Omie id wins over the integration code, as in Omie.
    pub fn locate(&self, probe: &R) -> Option<i64> {
        if let Some(id) = probe.remote_id() {
            return self.records.contains_key(&id).then_some(id);
        }
        let code = probe.integration_code()?;
        self.records
            .iter()
            .find(|(_, record)| record.integration_code() == Some(code))
            .map(|(id, _)| *id)
    }

    pub fn get(&self, id: i64) -> Option<&R> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut R> {
        self.records.get_mut(&id)
    }

    pub fn remove(&mut self, id: i64) -> Option<R> {
        self.records.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One page of records in id order (1-indexed).
    pub fn page(&self, page: usize, per_page: usize) -> Vec<R> {
        self.records
            .values()
            .skip(page.saturating_sub(1) * per_page)
            .take(per_page)
            .cloned()
            .collect()
    }
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    pub companies: Store<Company>,
    pub products: Store<Product>,
    pub orders: Store<SalesOrder>,

    /// Optional credentials. If set, requests must carry exactly these.
    pub required_credentials: Option<(String, String)>,

    /// Call identifiers received, in order.
    pub calls: Vec<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a company to the state.
    pub fn with_company(mut self, company: Company) -> Self {
        self.companies.insert(company);
        self
    }

    /// Add a product to the state.
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product);
        self
    }

    /// Add a sales order to the state.
    pub fn with_order(mut self, order: SalesOrder) -> Self {
        self.orders.insert(order);
        self
    }

    /// Set the required credentials.
    pub fn with_required_credentials(mut self, app_key: &str, app_secret: &str) -> Self {
        self.required_credentials = Some((app_key.to_string(), app_secret.to_string()));
        self
    }

    /// Whether a request with these credentials is accepted.
    pub fn accepts(&self, app_key: &str, app_secret: &str) -> bool {
        match &self.required_credentials {
            Some((key, secret)) => key == app_key && secret == app_secret,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(code: &str) -> Company {
        Company {
            codigo_cliente_integracao: Some(code.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_assigns_ids() {
        let mut store = Store::default();
        let first = store.insert(company("A"));
        let second = store.insert(company("B"));

        assert_ne!(first, second);
        assert_eq!(store.get(first).unwrap().codigo_cliente_omie, Some(first));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_locate_by_id_or_code() {
        let mut store = Store::default();
        let id = store.insert(company("A"));

        let mut by_id = Company::default();
        by_id.codigo_cliente_omie = Some(id);
        assert_eq!(store.locate(&by_id), Some(id));

        assert_eq!(store.locate(&company("A")), Some(id));
        assert_eq!(store.locate(&company("missing")), None);

        by_id.codigo_cliente_omie = Some(id + 100);
        assert_eq!(store.locate(&by_id), None);
    }

    #[test]
    fn test_page() {
        let mut store = Store::default();
        for code in ["A", "B", "C"] {
            store.insert(company(code));
        }

        assert_eq!(store.page(1, 2).len(), 2);
        assert_eq!(store.page(2, 2).len(), 1);
        assert!(store.page(3, 2).is_empty());
    }

    #[test]
    fn test_credentials() {
        let state = MockState::new().with_required_credentials("key", "secret");
        assert!(state.accepts("key", "secret"));
        assert!(!state.accepts("key", "wrong"));
        assert!(MockState::new().accepts("", ""));
    }
}
