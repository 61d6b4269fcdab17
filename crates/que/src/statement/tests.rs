//! Tests spanning all statement kinds.

use crate::field::Field;
use crate::filter::Filter;
use crate::param::Params;
use crate::statement::{Delete, Insert, Render, RenderOptions, Select, Statement, Update};
use crate::style::ParamStyle;
use crate::value::Value;
use crate::{delete, insert, select, update};
use std::collections::BTreeMap;

fn count_placeholders(sql: &str, style: ParamStyle) -> usize {
    match style {
        ParamStyle::Positional => sql.matches(':').count(),
        ParamStyle::Dollar => sql.matches('$').count(),
        ParamStyle::Qmark => sql.matches('?').count(),
        ParamStyle::Format => sql.matches("%s").count(),
        ParamStyle::Name => sql.matches(':').count(),
        ParamStyle::PyFormat => sql.matches("%(").count(),
    }
}

const ALL_STYLES: [ParamStyle; 6] = [
    ParamStyle::Positional,
    ParamStyle::Dollar,
    ParamStyle::Qmark,
    ParamStyle::Format,
    ParamStyle::Name,
    ParamStyle::PyFormat,
];

#[test]
fn test_select_by_id_positional() {
    let (sql, params) = select("foo")
        .filter(Filter::from(Field::new("id", 1)))
        .render(ParamStyle::Positional)
        .unwrap();
    assert_eq!(sql, "SELECT * FROM foo WHERE id = :1");
    assert_eq!(params, Params::Positional(vec![Value::Int(1)]));
}

#[test]
fn test_select_by_id_named() {
    let (sql, params) = select("foo")
        .filter(Filter::from(Field::new("id", 1)))
        .render(ParamStyle::Name)
        .unwrap();
    assert_eq!(sql, "SELECT * FROM foo WHERE id = :id");
    assert_eq!(
        params,
        Params::Named(BTreeMap::from([("id".to_string(), Value::Int(1))]))
    );
}

#[test]
fn test_select_field_list_rendering() {
    assert_eq!(select("foo").to_sql().unwrap(), "SELECT * FROM foo");
    assert_eq!(
        select("foo").field(Field::name_only("bar")).to_sql().unwrap(),
        "SELECT bar FROM foo"
    );
}

#[test]
fn test_update_numbering_spans_set_and_where() {
    let (sql, params) = update("foo")
        .field(Field::new("flavor", "grape"))
        .filter(Filter::eq("id", 7))
        .render(ParamStyle::Positional)
        .unwrap();
    assert_eq!(sql, "UPDATE foo SET flavor = :1 WHERE id = :2");
    assert_eq!(
        params,
        Params::Positional(vec![Value::from("grape"), Value::Int(7)])
    );
}

#[test]
fn test_insert_named_distinct_tokens() {
    let (sql, params) = insert("foo")
        .field(Field::new("bar", "blah"))
        .render(ParamStyle::Name)
        .unwrap();
    assert!(sql.contains(":colbar"));
    assert!(sql.contains(":valbar"));
    assert_eq!(params.get("valbar"), Some(&Value::from("blah")));
}

#[test]
fn test_placeholder_count_matches_params() {
    let filters = vec![
        Filter::eq("a", 1),
        Filter::gt("b", 2),
        Filter::like("c", "x%"),
    ];
    let fields = vec![Field::new("d", 4), Field::new("e", 5)];

    for style in ALL_STYLES {
        let (sql, params) = select("t")
            .filters(filters.clone())
            .render(style)
            .unwrap();
        assert_eq!(count_placeholders(&sql, style), filters.len(), "{style}");
        assert_eq!(params.len(), filters.len(), "{style}");

        let (sql, params) = delete("t")
            .filters(filters.clone())
            .render(style)
            .unwrap();
        assert_eq!(count_placeholders(&sql, style), filters.len(), "{style}");
        assert_eq!(params.len(), filters.len(), "{style}");

        let (sql, params) = update("t")
            .fields(fields.clone())
            .filters(filters.clone())
            .render(style)
            .unwrap();
        assert_eq!(
            count_placeholders(&sql, style),
            filters.len() + fields.len(),
            "{style}"
        );
        assert_eq!(params.len(), filters.len() + fields.len(), "{style}");
    }
}

#[test]
fn test_render_is_deterministic() {
    let stmt: Statement = update("accounts")
        .schema("bank")
        .set("balance", 10.5)
        .set("note", "x")
        .filter(Filter::eq("id", 3))
        .into();

    for style in ALL_STYLES {
        let first = stmt.render(style).unwrap();
        let second = stmt.render(style).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_empty_table_rejected_everywhere() {
    let statements: Vec<Statement> = vec![
        Select::new("").into(),
        Insert::new("").set("a", 1).into(),
        Update::new(" ").set("a", 1).into(),
        Delete::new("").into(),
    ];
    for stmt in statements {
        let err = stmt.render(ParamStyle::Positional).unwrap_err();
        assert_eq!(err, crate::QueError::EmptyTable, "{}", stmt.kind());
    }
}

#[test]
fn test_statement_enum_dispatch() {
    let stmt = Statement::from(delete("users").filter(Filter::eq("id", 1)));
    assert_eq!(stmt.kind(), "DELETE");
    assert_eq!(stmt.to_sql().unwrap(), "DELETE FROM users WHERE id = :1");
}

#[test]
fn test_in_list_expands_in_clause_order() {
    let (sql, params) = select("users")
        .filter(Filter::eq("org", 4))
        .filter(Filter::in_list("role", ["admin", "owner"]))
        .filter(Filter::gt("age", 18))
        .render(ParamStyle::Dollar)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE org = $1 AND role IN ($2, $3) AND age > $4"
    );
    assert_eq!(
        params,
        Params::Positional(vec![
            Value::Int(4),
            Value::from("admin"),
            Value::from("owner"),
            Value::Int(18),
        ])
    );
}

#[test]
fn test_null_check_is_literal() {
    let (sql, params) = select("users")
        .filter(Filter::is_null("deleted_at"))
        .filter(Filter::eq("id", 2))
        .render(ParamStyle::Qmark)
        .unwrap();
    assert_eq!(sql, "SELECT * FROM users WHERE deleted_at IS NULL AND id = ?");
    assert_eq!(params, Params::Positional(vec![Value::Int(2)]));

    let sql = delete("users")
        .filter(Filter::is_not_null("banned_at"))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "DELETE FROM users WHERE banned_at IS NOT NULL");
}

#[test]
fn test_update_set_and_filter_same_column_named() {
    for (style, expected) in [
        (ParamStyle::Name, "UPDATE bar.foo SET foo = :colfoo WHERE foo = :foo"),
        (ParamStyle::PyFormat, "UPDATE bar.foo SET foo = %(colfoo)s WHERE foo = %(foo)s"),
    ] {
        let (sql, params) = update("foo")
            .schema("bar")
            .field(Field::new("foo", "bar"))
            .filter(Filter::from(Field::new("foo", "bar")))
            .render(style)
            .unwrap();
        assert_eq!(sql, expected);
        assert_eq!(params.len(), 2);
    }
}

#[test]
fn test_offset_composes_statements() {
    let options = RenderOptions::new(ParamStyle::Dollar);
    let first = update("a").set("x", 1).filter(Filter::eq("id", 1)).render_with(&options).unwrap();
    let second = select("b")
        .filter(Filter::eq("y", 2))
        .render_with(&options.offset(first.params.len() + 1))
        .unwrap();
    assert_eq!(second.sql, "SELECT * FROM b WHERE y = $3");
}

#[test]
fn test_pyformat_select() {
    let (sql, _) = select("foo")
        .schema("bar")
        .column("foo")
        .filter(Filter::eq("foo", "bar"))
        .render(ParamStyle::PyFormat)
        .unwrap();
    assert_eq!(sql, "SELECT foo FROM bar.foo WHERE foo = %(foo)s");
}
