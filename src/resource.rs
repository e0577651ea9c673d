//! Resource metadata and attribute mapping.
//!
//! Every Omie resource is a struct of optional fields named after Omie's
//! JSON keys. Mass assignment goes through serde: keys the type does not
//! declare are dropped, and keys naming a nested resource build that type.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{OmieError, Result};

/// A JSON object of attribute names to raw values.
pub type Attributes = Map<String, Value>;

/// Logical operations a resource may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Find,
    Delete,
    Upsert,
    Associate,
    ChangeStatus,
    Status,
}

impl Operation {
    /// Lowercase name used in errors and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Find => "find",
            Operation::Delete => "delete",
            Operation::Upsert => "upsert",
            Operation::Associate => "associate",
            Operation::ChangeStatus => "change_status",
            Operation::Status => "status",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable mapping from [`Operation`] to the Omie call identifier.
#[derive(Debug, Clone, Copy)]
pub struct CallTable(&'static [(Operation, &'static str)]);

impl CallTable {
    /// Build a table from static entries.
    pub const fn new(entries: &'static [(Operation, &'static str)]) -> Self {
        Self(entries)
    }

    /// Look up the call identifier for an operation.
    pub fn get(&self, operation: Operation) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(op, _)| *op == operation)
            .map(|(_, call)| *call)
    }

    /// Iterate over all registered operations.
    pub fn iter(&self) -> impl Iterator<Item = (Operation, &'static str)> + '_ {
        self.0.iter().copied()
    }
}

/// Attribute mapping for plain data shapes.
///
/// Implemented by every model, including embedded ones like
/// [`TaxRecommendation`](crate::TaxRecommendation) that have no endpoint.
pub trait Attributed: Serialize + DeserializeOwned + Default {
    /// Build a value from a JSON object, ignoring unknown keys.
    ///
    /// # Errors
    ///
    /// Returns [`OmieError::ParseError`] when a known key holds a value its
    /// field cannot read, such as a non-numeric id or a scalar where a
    /// nested model is expected.
    fn from_attributes(attributes: Attributes) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(attributes))?)
    }

    /// Assign the given attributes, keeping fields that are not mentioned.
    fn update_attributes(&mut self, attributes: Attributes) -> Result<()> {
        let mut current = self.to_attributes()?;
        current.extend(attributes);
        *self = Self::from_attributes(current)?;
        Ok(())
    }

    /// The set fields as a JSON object.
    fn to_attributes(&self) -> Result<Attributes> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Attributes::new()),
            other => Err(OmieError::ParseError(serde::ser::Error::custom(format!(
                "expected an object, found {other}"
            )))),
        }
    }
}

/// An Omie resource reachable through its own endpoint.
pub trait Resource: Attributed + Send + Sync + 'static {
    /// Human-readable name used in errors and logs.
    const ENTITY: &'static str;

    /// Endpoint path relative to the API base URL.
    const PATH: &'static str;

    /// Call identifiers for the operations this resource supports.
    const CALLS: CallTable;

    /// Collection key in list responses.
    const LIST_KEY: &'static str;

    /// Key wrapping the record in find responses, if any.
    const FIND_KEY: Option<&'static str> = None;

    /// Field holding the Omie-assigned id.
    const REMOTE_ID_FIELD: &'static str;

    /// Field holding the caller-assigned integration code.
    const INTEGRATION_CODE_FIELD: &'static str;

    /// The Omie-assigned id, if this record exists remotely.
    fn remote_id(&self) -> Option<i64>;

    /// Record the Omie-assigned id.
    fn set_remote_id(&mut self, id: i64);

    /// The caller-assigned integration code.
    fn integration_code(&self) -> Option<&str>;

    /// Filters merged into every list request before the caller's options.
    fn default_list_filter() -> Attributes {
        Attributes::new()
    }

    /// Whether this record has a counterpart in Omie.
    fn is_saved(&self) -> bool {
        self.remote_id().is_some()
    }

    /// Resolve the call identifier for an operation.
    fn call(operation: Operation) -> Result<&'static str> {
        Self::CALLS
            .get(operation)
            .ok_or(OmieError::UnsupportedOperation {
                entity_type: Self::ENTITY,
                operation: operation.as_str(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Sample {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        foo: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bar: Option<i64>,
    }

    impl Attributed for Sample {}

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_from_attributes() {
        let entry = Sample::from_attributes(attrs(json!({"bar": 1, "foo": 2}))).unwrap();
        assert_eq!(entry.foo, Some(2));
        assert_eq!(entry.bar, Some(1));
    }

    #[test]
    fn test_update_attributes_keeps_other_fields() {
        let mut entry = Sample::from_attributes(attrs(json!({"bar": 1, "foo": 2}))).unwrap();
        entry.update_attributes(attrs(json!({"bar": 4}))).unwrap();
        assert_eq!(entry.foo, Some(2));
        assert_eq!(entry.bar, Some(4));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let entry =
            Sample::from_attributes(attrs(json!({"foo": 1, "baz": "ignored"}))).unwrap();
        assert_eq!(entry.foo, Some(1));
        assert_eq!(entry.to_attributes().unwrap(), attrs(json!({"foo": 1})));
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        let result = Sample::from_attributes(attrs(json!({"foo": "not a number"})));
        assert!(matches!(result, Err(OmieError::ParseError(_))));
    }

    #[test]
    fn test_call_table_lookup() {
        const CALLS: CallTable = CallTable::new(&[
            (Operation::List, "ListarCoisas"),
            (Operation::Create, "IncluirCoisa"),
        ]);
        assert_eq!(CALLS.get(Operation::List), Some("ListarCoisas"));
        assert_eq!(CALLS.get(Operation::Delete), None);
        assert_eq!(CALLS.iter().count(), 2);
    }
}
