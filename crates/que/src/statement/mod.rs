//! SQL statements and rendering.
//!
//! Four single-table statements share one rendering core:
//!
//! - [`Select`]: `SELECT <fields|*> FROM <table> [WHERE ...]`
//! - [`Insert`]: `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
//! - [`Update`]: `UPDATE <table> SET <assignments> [WHERE ...]`
//! - [`Delete`]: `DELETE FROM <table> [WHERE ...]`
//!
//! Rendering is a pure function of the statement and the [`RenderOptions`]:
//! numbered placeholders come from one counter shared by every clause, in the
//! order they appear in the SQL text, so UPDATE's SET placeholders precede its
//! WHERE placeholders.
//!
//! # Usage
//!
//! ```ignore
//! use que::{select, Filter, ParamStyle, Render};
//!
//! let (sql, params) = select("foo")
//!     .filter(Filter::eq("id", 1))
//!     .render(ParamStyle::Positional)?;
//! assert_eq!(sql, "SELECT * FROM foo WHERE id = :1");
//! ```

mod delete;
mod insert;
mod select;
mod update;

#[cfg(test)]
mod tests;

pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

use crate::driver::Driver;
use crate::error::{QueError, QueResult};
use crate::filter::FilterList;
use crate::param::{Binder, Params};
use crate::style::ParamStyle;
use serde::{Deserialize, Deserializer};

/// Key prefix of column-side parameters under named styles.
pub(crate) const COLUMN_PREFIX: &str = "col";

/// Options controlling a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Placeholder and parameter-container convention.
    pub style: ParamStyle,
    /// Number of the first numbered placeholder; at least 1.
    #[serde(deserialize_with = "deserialize_offset")]
    pub offset: usize,
}

fn deserialize_offset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let offset = usize::deserialize(deserializer)?;
    if offset == 0 {
        return Err(serde::de::Error::custom("offset must be at least 1"));
    }
    Ok(offset)
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: ParamStyle::default(),
            offset: 1,
        }
    }
}

impl RenderOptions {
    /// Create options for a style, numbering from 1.
    pub fn new(style: ParamStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Start numbered placeholders at `offset`. Rendering fails with
    /// [`QueError::InvalidOffset`] for 0.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// The output of a render: SQL text plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub sql: String,
    pub params: Params,
}

impl Rendered {
    pub fn into_parts(self) -> (String, Params) {
        (self.sql, self.params)
    }

    /// Hand the SQL and parameters to a driver.
    pub fn execute<D: Driver>(&self, driver: &mut D) -> Result<D::Output, D::Error> {
        driver.execute(&self.sql, &self.params)
    }
}

/// Capability shared by every statement: render to SQL plus parameters.
pub trait Render {
    /// Render with explicit options.
    fn render_with(&self, options: &RenderOptions) -> QueResult<Rendered>;

    /// Render with a parameter style, numbering from 1.
    fn render(&self, style: ParamStyle) -> QueResult<(String, Params)> {
        self.render_with(&RenderOptions::new(style))
            .map(Rendered::into_parts)
    }

    /// Debug helper: the SQL text under the default style.
    fn to_sql(&self) -> QueResult<String> {
        self.render(ParamStyle::default()).map(|(sql, _)| sql)
    }
}

/// Any of the four statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    /// The SQL verb of the statement.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "SELECT",
            Statement::Insert(_) => "INSERT",
            Statement::Update(_) => "UPDATE",
            Statement::Delete(_) => "DELETE",
        }
    }
}

impl Render for Statement {
    fn render_with(&self, options: &RenderOptions) -> QueResult<Rendered> {
        match self {
            Statement::Select(s) => s.render_with(options),
            Statement::Insert(s) => s.render_with(options),
            Statement::Update(s) => s.render_with(options),
            Statement::Delete(s) => s.render_with(options),
        }
    }
}

impl From<Select> for Statement {
    fn from(s: Select) -> Self {
        Statement::Select(s)
    }
}

impl From<Insert> for Statement {
    fn from(s: Insert) -> Self {
        Statement::Insert(s)
    }
}

impl From<Update> for Statement {
    fn from(s: Update) -> Self {
        Statement::Update(s)
    }
}

impl From<Delete> for Statement {
    fn from(s: Delete) -> Self {
        Statement::Delete(s)
    }
}

/// Table name with an optional schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TableRef {
    pub(crate) table: String,
    pub(crate) schema: Option<String>,
}

impl TableRef {
    pub(crate) fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            schema: None,
        }
    }

    /// `schema.table`, or `table` when no schema is set.
    pub(crate) fn qualified(&self) -> QueResult<String> {
        let table = self.table.trim();
        if table.is_empty() {
            return Err(QueError::EmptyTable);
        }
        match self.schema.as_deref().map(str::trim) {
            Some(schema) if !schema.is_empty() => Ok(format!("{schema}.{table}")),
            _ => Ok(table.to_string()),
        }
    }
}

/// Append ` WHERE a = ? AND b IN (?, ?)` to `sql`; nothing when `filters` is empty.
pub(crate) fn push_where(sql: &mut String, filters: &FilterList, binder: &mut Binder) -> QueResult<()> {
    if filters.is_empty() {
        return Ok(());
    }

    let mut parts = Vec::with_capacity(filters.len());
    for filter in filters {
        parts.push(filter.render(binder)?);
    }

    sql.push_str(" WHERE ");
    sql.push_str(&parts.join(" AND "));
    Ok(())
}

/// Append ` RETURNING a, b`; nothing when `cols` is empty.
pub(crate) fn push_returning(sql: &mut String, cols: &[String]) {
    if !cols.is_empty() {
        sql.push_str(" RETURNING ");
        sql.push_str(&cols.join(", "));
    }
}

/// Finish a render and emit it on the `que.sql` tracing target.
pub(crate) fn finish(kind: &'static str, sql: String, binder: Binder) -> Rendered {
    let style = binder.style();
    let params = binder.finish();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "que.sql",
        statement = kind,
        style = %style,
        params = params.len(),
        sql = %sql,
        "rendered statement"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (kind, style);

    Rendered { sql, params }
}

/// Warn when a write statement would touch every row.
#[cfg(feature = "tracing")]
pub(crate) fn warn_unfiltered(kind: &'static str, table: &str, filters: &FilterList) {
    if filters.is_empty() {
        tracing::warn!(
            target: "que.sql",
            statement = kind,
            table,
            "statement has no WHERE clause and affects every row"
        );
    }
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn warn_unfiltered(_kind: &'static str, _table: &str, _filters: &FilterList) {}
