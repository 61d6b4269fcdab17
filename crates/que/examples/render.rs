//! Rendering example for que
//!
//! Run with: cargo run --example render -p que
//!
//! Optionally set QUE_PARAM_STYLE (positional, dollar, qmark, format, named, pyformat).

use que::{Filter, ParamStyle, QueError, Record, Render, RenderOptions, Statement};
use que::{delete, insert, record_to_insert_fields, select, update};
use std::env;

#[derive(Debug, Record)]
#[allow(dead_code)]
struct Product {
    id: Option<i64>,
    name: String,
    price: i32,
    category: Option<String>,
    in_stock: bool,
}

fn main() -> Result<(), QueError> {
    let style = match env::var("QUE_PARAM_STYLE") {
        Ok(name) => name.parse::<ParamStyle>()?,
        Err(_) => ParamStyle::default(),
    };
    let options = RenderOptions::new(style);

    let product = Product {
        id: None,
        name: "Widget".into(),
        price: 999,
        category: Some("tools".into()),
        in_stock: true,
    };

    let statements: Vec<Statement> = vec![
        insert("products")
            .fields(record_to_insert_fields(&product, &[]))
            .returning(&["id"])
            .into(),
        select("products")
            .column("id")
            .column("name")
            .filter(Filter::eq("category", "tools"))
            .filter(Filter::lt("price", 1500))
            .into(),
        update("products")
            .set("in_stock", false)
            .filter(Filter::eq("id", 1))
            .into(),
        delete("products").filter(Filter::is_null("category")).into(),
    ];

    println!("style: {style}\n");
    for stmt in &statements {
        let rendered = stmt.render_with(&options)?;
        println!("{}", rendered.sql);
        println!("  params: {:?}\n", rendered.params);
    }

    Ok(())
}
