//! WHERE-clause predicates.
//!
//! A [`Filter`] pairs a [`Field`] with a [`FilterOperator`]. Comparison filters
//! render as `<column> <operator> <placeholder>` and bind one parameter.
//!
//! Two operator families render differently:
//!
//! - `IN` / `NOT IN` with a [`Value::List`] expand to one placeholder per
//!   element, `role IN ($1, $2)`. An empty list renders `1=0` (`IN`) or `1=1`
//!   (`NOT IN`) and binds nothing. A scalar value is treated as a one-element
//!   list.
//! - `IS` / `IS NOT` with an unset or NULL value render `IS NULL` /
//!   `IS NOT NULL`, and with a boolean `IS TRUE` / `IS FALSE`, binding nothing.
//!   Any other value renders `IS NOT DISTINCT FROM <placeholder>` (or
//!   `IS DISTINCT FROM`).
//!
//! # Example
//! ```ignore
//! use que::{Filter, FilterOperator, Field};
//!
//! Filter::eq("id", 1);
//! Filter::new(Field::new("age", 18), FilterOperator::Gte);
//! Filter::in_list("status", ["active", "pending"]);
//! Filter::is_null("deleted_at");
//! ```

use crate::error::QueResult;
use crate::field::Field;
use crate::param::Binder;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a [`Filter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Equal: column = value
    #[default]
    Eq,
    /// Not equal: column <> value
    Ne,
    /// Less than: column < value
    Lt,
    /// Less than or equal: column <= value
    Lte,
    /// Greater than: column > value
    Gt,
    /// Greater than or equal: column >= value
    Gte,
    /// LIKE pattern match
    Like,
    /// Case-insensitive LIKE
    #[serde(rename = "ilike")]
    ILike,
    /// NOT LIKE pattern match
    NotLike,
    /// IN (list)
    In,
    /// NOT IN (list)
    NotIn,
    /// IS (NULL / TRUE / FALSE, otherwise IS NOT DISTINCT FROM)
    Is,
    /// IS NOT (NULL / TRUE / FALSE, otherwise IS DISTINCT FROM)
    IsNot,
}

impl FilterOperator {
    /// The SQL text of the operator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Ne => "<>",
            FilterOperator::Lt => "<",
            FilterOperator::Lte => "<=",
            FilterOperator::Gt => ">",
            FilterOperator::Gte => ">=",
            FilterOperator::Like => "LIKE",
            FilterOperator::ILike => "ILIKE",
            FilterOperator::NotLike => "NOT LIKE",
            FilterOperator::In => "IN",
            FilterOperator::NotIn => "NOT IN",
            FilterOperator::Is => "IS",
            FilterOperator::IsNot => "IS NOT",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A single WHERE predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: Field,
    operator: FilterOperator,
    prefix: String,
}

impl Filter {
    /// Create a filter with an explicit operator.
    pub fn new(field: Field, operator: FilterOperator) -> Self {
        Self {
            field,
            operator,
            prefix: String::new(),
        }
    }

    /// Create an equality filter from a field.
    pub fn from_field(field: Field) -> Self {
        Self::new(field, FilterOperator::default())
    }

    /// Prefix the parameter name used under named styles.
    ///
    /// `Filter::eq("status", "old").prefix("old_")` binds `:old_status`, so two
    /// filters on one column can share a render.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    /// The parameter name used under named styles.
    pub fn param_name(&self) -> String {
        format!("{}{}", self.prefix, self.field.name())
    }

    /// Render the predicate, binding its parameters.
    pub(crate) fn render(&self, binder: &mut Binder) -> QueResult<String> {
        let column = self.field.name();
        let value = self.field.bind_value();

        match self.operator {
            FilterOperator::In | FilterOperator::NotIn => {
                let negated = self.operator == FilterOperator::NotIn;
                let values = match value {
                    Value::List(values) => values,
                    other => vec![other],
                };
                if values.is_empty() {
                    return Ok(if negated { "1=1" } else { "1=0" }.to_string());
                }

                let base = self.param_name();
                let mut placeholders = Vec::with_capacity(values.len());
                for (i, v) in values.into_iter().enumerate() {
                    placeholders.push(binder.bind(&format!("{base}_{i}"), v)?);
                }
                Ok(format!("{} {} ({})", column, self.operator, placeholders.join(", ")))
            }
            FilterOperator::Is | FilterOperator::IsNot => {
                let negated = self.operator == FilterOperator::IsNot;
                match value {
                    Value::Null => Ok(format!("{} {} NULL", column, self.operator)),
                    Value::Bool(b) => Ok(format!(
                        "{} {} {}",
                        column,
                        self.operator,
                        if b { "TRUE" } else { "FALSE" }
                    )),
                    other => {
                        let token = binder.bind(&self.param_name(), other)?;
                        let op = if negated { "IS DISTINCT FROM" } else { "IS NOT DISTINCT FROM" };
                        Ok(format!("{column} {op} {token}"))
                    }
                }
            }
            op => {
                let token = binder.bind(&self.param_name(), value)?;
                Ok(format!("{column} {op} {token}"))
            }
        }
    }

    fn compare(name: impl Into<String>, value: impl Into<Value>, op: FilterOperator) -> Self {
        Self::new(Field::new(name, value), op)
    }

    /// column = value
    pub fn eq(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(name, value, FilterOperator::Eq)
    }

    /// column <> value
    pub fn ne(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(name, value, FilterOperator::Ne)
    }

    /// column < value
    pub fn lt(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(name, value, FilterOperator::Lt)
    }

    /// column <= value
    pub fn lte(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(name, value, FilterOperator::Lte)
    }

    /// column > value
    pub fn gt(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(name, value, FilterOperator::Gt)
    }

    /// column >= value
    pub fn gte(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(name, value, FilterOperator::Gte)
    }

    /// column LIKE pattern
    pub fn like(name: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::compare(name, pattern, FilterOperator::Like)
    }

    /// column ILIKE pattern
    pub fn ilike(name: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::compare(name, pattern, FilterOperator::ILike)
    }

    /// column IN (values), one parameter per value
    pub fn in_list<T: Into<Value>>(name: impl Into<String>, values: impl IntoIterator<Item = T>) -> Self {
        Self::compare(name, Value::list(values), FilterOperator::In)
    }

    /// column NOT IN (values), one parameter per value
    pub fn not_in<T: Into<Value>>(name: impl Into<String>, values: impl IntoIterator<Item = T>) -> Self {
        Self::compare(name, Value::list(values), FilterOperator::NotIn)
    }

    /// column IS NULL
    pub fn is_null(name: impl Into<String>) -> Self {
        Self::new(Field::name_only(name), FilterOperator::Is)
    }

    /// column IS NOT NULL
    pub fn is_not_null(name: impl Into<String>) -> Self {
        Self::new(Field::name_only(name), FilterOperator::IsNot)
    }
}

impl From<Field> for Filter {
    fn from(field: Field) -> Self {
        Filter::from_field(field)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field.value() {
            Some(v) => write!(f, "{} {} {}", self.field.name(), self.operator, v),
            None => write!(f, "{} {} NULL", self.field.name(), self.operator),
        }
    }
}

/// An insertion-ordered list of [`Filter`]s, joined with `AND` when rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterList {
    filters: Vec<Filter>,
}

impl FilterList {
    /// Create a new empty filter list.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a filter.
    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    pub fn contains(&self, filter: &Filter) -> bool {
        self.filters.contains(filter)
    }
}

impl From<Vec<Filter>> for FilterList {
    fn from(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}

impl FromIterator<Filter> for FilterList {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl Extend<Filter> for FilterList {
    fn extend<I: IntoIterator<Item = Filter>>(&mut self, iter: I) {
        self.filters.extend(iter);
    }
}

impl IntoIterator for FilterList {
    type Item = Filter;
    type IntoIter = std::vec::IntoIter<Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.into_iter()
    }
}

impl<'a> IntoIterator for &'a FilterList {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
