//! INSERT statement.

use crate::error::{QueError, QueResult};
use crate::field::{Field, FieldList};
use crate::param::Binder;
use crate::statement::{
    COLUMN_PREFIX, Render, RenderOptions, Rendered, TableRef, finish, push_returning,
};
use crate::value::Value;

/// Key prefix of value-side parameters under named styles.
const VALUE_PREFIX: &str = "val";

/// A single-table INSERT of one row.
///
/// Fields supply both the column list and the values. Under numbered and
/// anonymous styles the column names are written inline and the values are
/// bound in field order.
///
/// Under named styles every field binds two parameters: `col<name>` for the
/// column reference and `val<name>` for the value, so the two never share a
/// key. Call [`Insert::inline_columns`] to write column names inline instead,
/// leaving only the `val<name>` keys in the mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Insert {
    target: TableRef,
    fields: FieldList,
    returning_cols: Vec<String>,
    inline_columns: bool,
}

impl Insert {
    /// Create an INSERT for the given table.
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

    /// Add a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add several fields, in order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Write column names inline even under named styles.
    pub fn inline_columns(mut self, inline: bool) -> Self {
        self.inline_columns = inline;
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

    pub fn field_list_mut(&mut self) -> &mut FieldList {
        &mut self.fields
    }
}

impl Render for Insert {
    fn render_with(&self, options: &RenderOptions) -> QueResult<Rendered> {
        let table = self.target.qualified()?;
        if self.fields.is_empty() {
            return Err(QueError::empty_fields("INSERT"));
        }

        let named = options.style.is_named();
        let mut binder = Binder::new(options.style, options.offset);

        let mut columns = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            if named && !self.inline_columns {
                let key = format!("{COLUMN_PREFIX}{}", field.name());
                columns.push(binder.bind(&key, Value::from(field.name()))?);
            } else {
                columns.push(field.name().to_string());
            }
        }

        let mut values = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let key = format!("{VALUE_PREFIX}{}", field.name());
            values.push(binder.bind(&key, field.bind_value())?);
        }

        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            values.join(", ")
        );
        push_returning(&mut sql, &self.returning_cols);

        Ok(finish("INSERT", sql, binder))
    }
}
