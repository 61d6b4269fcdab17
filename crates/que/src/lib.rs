//! # que
//!
//! Dialect-agnostic SQL statement rendering.
//!
//! Describe a single-table SELECT, INSERT, UPDATE or DELETE as fields and
//! filters, pick a [`ParamStyle`], and get back SQL text plus a parameter
//! container shaped for that style, ready for any driver.
//!
//! ## Features
//!
//! - **Two parameter shapes**: numbered/anonymous placeholders with an ordered
//!   sequence, or named placeholders with a mapping
//! - **One counter per render**: numbered placeholders follow SQL text order,
//!   so UPDATE's SET values come before its WHERE values
//! - **No silent loss**: a named parameter bound twice is an error, never an
//!   overwrite
//! - **Records**: `#[derive(Record)]` turns a struct into a field list
//!
//! ## Usage
//!
//! ```ignore
//! use que::{Filter, ParamStyle, Render};
//!
//! // SELECT * FROM foo WHERE id = :1   -- params [1]
//! let (sql, params) = que::select("foo")
//!     .filter(Filter::eq("id", 1))
//!     .render(ParamStyle::Positional)?;
//!
//! // SELECT * FROM foo WHERE id = :id  -- params {"id": 1}
//! let (sql, params) = que::select("foo")
//!     .filter(Filter::eq("id", 1))
//!     .render(ParamStyle::Name)?;
//!
//! // UPDATE foo SET flavor = :1 WHERE id = :2  -- params ["grape", 7]
//! let (sql, params) = que::update("foo")
//!     .set("flavor", "grape")
//!     .filter(Filter::eq("id", 7))
//!     .render(ParamStyle::Positional)?;
//! ```

// Lets `#[derive(Record)]` output (`::que::...`) resolve inside this crate.
extern crate self as que;

pub mod driver;
pub mod error;
pub mod field;
pub mod filter;
pub mod param;
pub mod prelude;
pub mod record;
pub mod statement;
pub mod style;
pub mod value;

#[cfg(feature = "postgres")]
pub mod pg;

pub use driver::Driver;
pub use error::{QueError, QueResult};
pub use field::{Field, FieldList};
pub use filter::{Filter, FilterList, FilterOperator};
pub use param::Params;
pub use record::{AttrValue, Record, record_to_fields, record_to_insert_fields};
pub use statement::{Delete, Insert, Render, RenderOptions, Rendered, Select, Statement, Update};
pub use style::{ParamKind, ParamStyle};
pub use value::Value;

#[cfg(feature = "derive")]
pub use que_derive::Record;

/// Create a SELECT for the given table.
///
/// # Example
/// ```ignore
/// let stmt = que::select("users").column("id").filter(Filter::eq("status", "active"));
/// ```
pub fn select(table: &str) -> Select {
    Select::new(table)
}

/// Create an INSERT for the given table.
pub fn insert(table: &str) -> Insert {
    Insert::new(table)
}

/// Create an UPDATE for the given table.
pub fn update(table: &str) -> Update {
    Update::new(table)
}

/// Create a DELETE for the given table.
pub fn delete(table: &str) -> Delete {
    Delete::new(table)
}
