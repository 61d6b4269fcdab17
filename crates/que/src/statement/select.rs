//! SELECT statement.

use crate::error::QueResult;
use crate::field::{Field, FieldList};
use crate::filter::{Filter, FilterList};
use crate::param::Binder;
use crate::statement::{Render, RenderOptions, Rendered, TableRef, finish, push_where};

/// A single-table SELECT.
///
/// Fields only name columns; their values are ignored. No fields selects `*`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Select {
    target: TableRef,
    fields: FieldList,
    filters: FilterList,
}

impl Select {
    /// Create a SELECT for the given table.
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

    /// Select a column by name.
    pub fn column(mut self, name: &str) -> Self {
        self.fields.push(Field::name_only(name));
        self
    }

    /// Select a field's column.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Select several fields, in order.
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

impl Render for Select {
    fn render_with(&self, options: &RenderOptions) -> QueResult<Rendered> {
        let table = self.target.qualified()?;
        let columns = if self.fields.is_empty() {
            "*".to_string()
        } else {
            self.fields.names().join(", ")
        };

        let mut sql = format!("SELECT {columns} FROM {table}");
        let mut binder = Binder::new(options.style, options.offset);
        push_where(&mut sql, &self.filters, &mut binder)?;

        Ok(finish("SELECT", sql, binder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::Params;
    use crate::style::ParamStyle;
    use crate::value::Value;

    #[test]
    fn test_select_star() {
        let (sql, params) = Select::new("users").render(ParamStyle::Positional).unwrap();
        assert_eq!(sql, "SELECT * FROM users");
        assert_eq!(params, Params::Positional(vec![]));
    }

    #[test]
    fn test_select_columns_in_order() {
        let qb = Select::new("users").column("name").column("email");
        assert_eq!(qb.to_sql().unwrap(), "SELECT name, email FROM users");
    }

    #[test]
    fn test_select_ignores_field_values() {
        let (sql, params) = Select::new("foo")
            .field(Field::new("bar", "baz"))
            .render(ParamStyle::Positional)
            .unwrap();
        assert_eq!(sql, "SELECT bar FROM foo");
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_multiple_filters() {
        let (sql, params) = Select::new("users")
            .schema("app")
            .filter(Filter::eq("status", "active"))
            .filter(Filter::gt("age", 18))
            .render(ParamStyle::Dollar)
            .unwrap();
        assert_eq!(sql, "SELECT * FROM app.users WHERE status = $1 AND age > $2");
        assert_eq!(
            params,
            Params::Positional(vec![Value::from("active"), Value::Int(18)])
        );
    }

    #[test]
    fn test_select_offset() {
        let rendered = Select::new("t")
            .filter(Filter::eq("a", 1))
            .render_with(&RenderOptions::new(ParamStyle::Positional).offset(5))
            .unwrap();
        assert_eq!(rendered.sql, "SELECT * FROM t WHERE a = :5");
    }
}
