//! UPDATE statement.

use crate::error::{QueError, QueResult};
use crate::field::{Field, FieldList};
use crate::filter::{Filter, FilterList};
use crate::param::Binder;
use crate::statement::{
    COLUMN_PREFIX, Render, RenderOptions, Rendered, TableRef, finish, push_returning, push_where, warn_unfiltered,
};
use crate::value::Value;

/// A single-table UPDATE.
///
/// Fields drive the SET clause, filters the WHERE clause. Under named styles
/// SET parameters are keyed `col<name>` and WHERE parameters by
/// [`Filter::param_name`], so a column can be set and filtered on in the same
/// statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Update {
    target: TableRef,
    fields: FieldList,
    filters: FilterList,
    returning_cols: Vec<String>,
}

impl Update {
    /// Create an UPDATE for the given table.
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

    /// Set a column value.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.fields.push(Field::new(column, value));
        self
    }

    /// Add a SET field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add several SET fields, in order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
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

    pub fn field_list(&self) -> &FieldList {
        &self.fields
    }

    pub fn filter_list(&self) -> &FilterList {
        &self.filters
    }

    pub fn field_list_mut(&mut self) -> &mut FieldList {
        &mut self.fields
    }

    pub fn filter_list_mut(&mut self) -> &mut FilterList {
        &mut self.filters
    }
}

impl Render for Update {
    fn render_with(&self, options: &RenderOptions) -> QueResult<Rendered> {
        let table = self.target.qualified()?;
        if self.fields.is_empty() {
            return Err(QueError::empty_fields("UPDATE"));
        }

        let mut binder = Binder::new(options.style, options.offset);

        let mut set_parts = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let key = format!("{COLUMN_PREFIX}{}", field.name());
            let token = binder.bind(&key, field.bind_value())?;
            set_parts.push(format!("{} = {}", field.name(), token));
        }

        let mut sql = format!("UPDATE {} SET {}", table, set_parts.join(", "));
        push_where(&mut sql, &self.filters, &mut binder)?;
        push_returning(&mut sql, &self.returning_cols);

        warn_unfiltered("UPDATE", &table, &self.filters);
        Ok(finish("UPDATE", sql, binder))
    }
}
