//! Tolerant field adapters for Omie payloads.
//!
//! Omie is loose about scalar types: the same field arrives as a number in
//! one call and as a string in another, and unset values come back as
//! `""`. These `serde_with` adapters accept every shape Omie produces and
//! serialize the field back in its Rust form.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use serde_with::{DeserializeAs, SerializeAs};

/// Free text: strings as-is, any other value as its JSON text.
pub struct Text;

/// An Omie id: a number or a numeric string. Blank strings are absent.
pub struct Id;

/// A decimal amount: a number or a numeric string, with either `.` or `,`
/// as separator. Blank or unreadable values are absent.
pub struct Amount;

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn id_of_number(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Read an id out of a raw JSON value.
///
/// `Ok(None)` for null and blank strings, `Err` for anything that is not
/// an integer.
pub(crate) fn parse_id(value: &Value) -> std::result::Result<Option<i64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => id_of_number(number)
            .map(Some)
            .ok_or_else(|| format!("invalid Omie id {number}")),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid Omie id \"{text}\"")),
        other => Err(format!("invalid Omie id {other}")),
    }
}

fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            text.parse()
                .ok()
                .or_else(|| text.replace(',', ".").parse().ok())
        }
        _ => None,
    }
}

impl<'de> DeserializeAs<'de, Option<String>> for Text {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(text_of(Value::deserialize(deserializer)?))
    }
}

impl<'de> DeserializeAs<'de, String> for Text {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(text_of(Value::deserialize(deserializer)?).unwrap_or_default())
    }
}

impl SerializeAs<Option<String>> for Text {
    fn serialize_as<S: Serializer>(source: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        source.serialize(serializer)
    }
}

impl SerializeAs<String> for Text {
    fn serialize_as<S: Serializer>(source: &String, serializer: S) -> Result<S::Ok, S::Error> {
        source.serialize(serializer)
    }
}

impl<'de> DeserializeAs<'de, Option<i64>> for Id {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        parse_id(&Value::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl SerializeAs<Option<i64>> for Id {
    fn serialize_as<S: Serializer>(source: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        source.serialize(serializer)
    }
}

impl<'de> DeserializeAs<'de, Option<f64>> for Amount {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let amount = parse_amount(&value);
        if amount.is_none() && !value.is_null() && value != Value::String(String::new()) {
            tracing::warn!(%value, "dropping unreadable amount");
        }
        Ok(amount)
    }
}

impl SerializeAs<Option<f64>> for Amount {
    fn serialize_as<S: Serializer>(source: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        source.serialize(serializer)
    }
}
