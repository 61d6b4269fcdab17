//! Turning records into field lists.
//!
//! A [`Record`] is anything that can list its attributes as ordered
//! `(name, value)` pairs. A `None` value marks the attribute as *unset*
//! (e.g. a database-generated id), which [`record_to_insert_fields`] leaves out
//! so the database can fill it in.
//!
//! Structs get an implementation from `#[derive(Record)]`:
//!
//! ```ignore
//! use que::{Record, record_to_insert_fields, Insert, Render, ParamStyle};
//!
//! #[derive(Record)]
//! struct User {
//!     id: Option<i64>,
//!     username: String,
//!     #[record(rename = "email_address")]
//!     email: String,
//!     #[record(skip)]
//!     password_confirmation: String,
//! }
//!
//! let fields = record_to_insert_fields(&user, &[]);
//! let (sql, params) = Insert::new("users").fields(fields).render(ParamStyle::Positional)?;
//! ```

use crate::field::{Field, FieldList};
use crate::value::Value;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Ordered named-attribute access.
pub trait Record {
    /// Attribute names and values in declaration order; `None` means unset.
    fn name_value_pairs(&self) -> Vec<(String, Option<Value>)>;
}

/// Conversion of a record attribute into an optional [`Value`].
///
/// Plain values are always set; `Option<T>` is unset when `None`. Use
/// [`Value::Null`] for an attribute that must be written as NULL.
pub trait AttrValue {
    fn attr_value(&self) -> Option<Value>;
}

macro_rules! impl_attr_value {
    ($($t:ty),*) => {
        $(
            impl AttrValue for $t {
                fn attr_value(&self) -> Option<Value> {
                    Some(Value::from(self.clone()))
                }
            }
        )*
    };
}

impl_attr_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    String,
    Vec<u8>,
    serde_json::Value,
    uuid::Uuid,
    DateTime<Utc>,
    Value
);

impl AttrValue for str {
    fn attr_value(&self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl<T: AttrValue> AttrValue for Option<T> {
    fn attr_value(&self) -> Option<Value> {
        self.as_ref().and_then(AttrValue::attr_value)
    }
}

impl<T: AttrValue + ?Sized> AttrValue for &T {
    fn attr_value(&self) -> Option<Value> {
        (**self).attr_value()
    }
}

impl<K: AsRef<str>, V: AttrValue> Record for [(K, V)] {
    fn name_value_pairs(&self) -> Vec<(String, Option<Value>)> {
        self.iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.attr_value()))
            .collect()
    }
}

impl<K: AsRef<str>, V: AttrValue> Record for Vec<(K, V)> {
    fn name_value_pairs(&self) -> Vec<(String, Option<Value>)> {
        self.as_slice().name_value_pairs()
    }
}

/// Pairs come out in key order.
impl<K: AsRef<str>, V: AttrValue> Record for BTreeMap<K, V> {
    fn name_value_pairs(&self) -> Vec<(String, Option<Value>)> {
        self.iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.attr_value()))
            .collect()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn name_value_pairs(&self) -> Vec<(String, Option<Value>)> {
        (**self).name_value_pairs()
    }
}

/// Build a field list from a record, skipping `exclude`d names.
///
/// Unset attributes are kept as value-less fields.
pub fn record_to_fields<R: Record + ?Sized>(record: &R, exclude: &[&str]) -> FieldList {
    record
        .name_value_pairs()
        .into_iter()
        .filter(|(name, _)| !exclude.contains(&name.as_str()))
        .map(|(name, value)| Field::with_opt(name, value))
        .collect()
}

/// Build a field list for an INSERT: like [`record_to_fields`], but unset
/// attributes are dropped.
pub fn record_to_insert_fields<R: Record + ?Sized>(record: &R, exclude: &[&str]) -> FieldList {
    record_to_fields(record, exclude)
        .into_iter()
        .filter(|field| !field.is_unset())
        .collect()
}
