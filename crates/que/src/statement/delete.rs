//! DELETE statement.

use crate::error::QueResult;
use crate::filter::{Filter, FilterList};
use crate::param::Binder;
use crate::statement::{
    Render, RenderOptions, Rendered, TableRef, finish, push_returning, push_where, warn_unfiltered,
};

/// A single-table DELETE.
///
/// Without filters the statement deletes every row. That is rendered as
/// asked and only logged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Delete {
    target: TableRef,
    filters: FilterList,
    returning_cols: Vec<String>,
}

impl Delete {
    /// Create a DELETE for the given table.
    pub fn new(table: &str) -> Self {
        Self {
            target: TableRef::new(table),
            ..Self::default()
        }
    }

    /// Qualify the table with a schema.
    pub fn schema(mut self, schema: &str) -> Self {
        self.target.schema = Some(schema.to_string());
        self
    }

    /// Add a WHERE predicate.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add several WHERE predicates, in order.
    pub fn filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Set RETURNING columns.
    pub fn returning(mut self, cols: &[&str]) -> Self {
        self.returning_cols = cols.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn table(&self) -> &str {
        &self.target.table
    }

    pub fn filter_list(&self) -> &FilterList {
        &self.filters
    }

    pub fn filter_list_mut(&mut self) -> &mut FilterList {
        &mut self.filters
    }
}

impl Render for Delete {
    fn render_with(&self, options: &RenderOptions) -> QueResult<Rendered> {
        let table = self.target.qualified()?;

        let mut sql = format!("DELETE FROM {table}");
        let mut binder = Binder::new(options.style, options.offset);
        push_where(&mut sql, &self.filters, &mut binder)?;
        push_returning(&mut sql, &self.returning_cols);

        warn_unfiltered("DELETE", &table, &self.filters);
        Ok(finish("DELETE", sql, binder))
    }
}
