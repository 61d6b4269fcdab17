//! Fields and ordered field lists.

use crate::value::Value;
use std::fmt;

/// A column name paired with an optional value.
///
/// A field without a value is *unset*: it still names a column (useful for
/// `SELECT` lists) but supplies nothing to bind. If an unset field ends up
/// behind a placeholder, it is bound as SQL NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    value: Option<Value>,
}

impl Field {
    /// Create a field carrying a value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a field that only names a column.
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Create a field from a name and an optional value.
    pub fn with_opt(name: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Whether the field carries no value.
    pub fn is_unset(&self) -> bool {
        self.value.is_none()
    }

    /// Return a copy of this field carrying `value`.
    pub fn replace_value(&self, value: impl Into<Value>) -> Self {
        Self {
            name: self.name.clone(),
            value: Some(value.into()),
        }
    }

    /// The value to bind for this field; unset binds as NULL.
    pub(crate) fn bind_value(&self) -> Value {
        self.value.clone().unwrap_or(Value::Null)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}={}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

impl<N: Into<String>, V: Into<Value>> From<(N, V)> for Field {
    fn from((name, value): (N, V)) -> Self {
        Field::new(name, value)
    }
}

/// An insertion-ordered list of [`Field`]s.
///
/// Duplicates are allowed; iteration order is rendering order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    /// Create a new empty field list.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Column names in order.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(Field::name).collect()
    }

    /// Values in order (`None` for unset fields).
    pub fn values(&self) -> Vec<Option<&Value>> {
        self.fields.iter().map(Field::value).collect()
    }

    /// Look up the first field with the given name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl From<Vec<Field>> for FieldList {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl FromIterator<Field> for FieldList {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<Field> for FieldList {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

impl IntoIterator for FieldList {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
