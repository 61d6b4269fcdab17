#![allow(dead_code)]

use que::{
    Field, FieldList, Insert, ParamStyle, Params, Record, Render, Value, record_to_fields,
    record_to_insert_fields,
};

#[derive(Debug, Clone, Record)]
struct Flavor {
    id: Option<i64>,
    name: String,
    #[record(rename = "is_sour")]
    sour: bool,
    #[record(skip)]
    cached_rank: u32,
}

#[derive(Debug, Record)]
#[record(rename_all = "camelCase")]
struct Event<'a> {
    event_id: i64,
    display_name: &'a str,
    payload: Option<serde_json::Value>,
}

#[test]
fn test_derive_lists_fields_in_declaration_order() {
    let flavor = Flavor {
        id: Some(1),
        name: "grape".into(),
        sour: false,
        cached_rank: 9,
    };
    let pairs = flavor.name_value_pairs();
    let names: Vec<&str> = pairs.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["id", "name", "is_sour"]);
    assert_eq!(pairs[0].1, Some(Value::Int(1)));
}

#[test]
fn test_unset_id_is_omitted_for_insert() {
    let flavor = Flavor {
        id: None,
        name: "lime".into(),
        sour: true,
        cached_rank: 0,
    };

    let all = record_to_fields(&flavor, &[]);
    assert_eq!(all.len(), 3);
    assert!(all.get("id").is_some_and(Field::is_unset));

    let fields = record_to_insert_fields(&flavor, &[]);
    assert_eq!(
        fields,
        FieldList::from(vec![Field::new("name", "lime"), Field::new("is_sour", true)])
    );

    let (sql, params) = Insert::new("flavors")
        .fields(fields)
        .render(ParamStyle::Positional)
        .unwrap();
    assert_eq!(sql, "INSERT INTO flavors (name, is_sour) VALUES (:1, :2)");
    assert_eq!(
        params,
        Params::Positional(vec![Value::from("lime"), Value::Bool(true)])
    );
}

#[test]
fn test_exclude_names() {
    let flavor = Flavor {
        id: Some(3),
        name: "cherry".into(),
        sour: false,
        cached_rank: 0,
    };
    let fields = record_to_fields(&flavor, &["id", "is_sour"]);
    assert_eq!(fields.names(), vec!["name"]);
}

#[test]
fn test_rename_all_and_borrowed_fields() {
    let event = Event {
        event_id: 10,
        display_name: "signup",
        payload: None,
    };
    let fields = record_to_insert_fields(&event, &[]);
    assert_eq!(fields.names(), vec!["eventId", "displayName"]);
    assert_eq!(
        fields.get("displayName").and_then(Field::value),
        Some(&Value::from("signup"))
    );
}
