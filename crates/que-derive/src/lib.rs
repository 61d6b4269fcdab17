//! Derive macros for que
//!
//! Provides `#[derive(Record)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod record;

/// Derive the `Record` trait for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use que::Record;
///
/// #[derive(Record)]
/// #[record(rename_all = "camelCase")]
/// struct User {
///     id: Option<i64>,
///     user_name: String,
///     #[record(rename = "email_address")]
///     email: String,
///     #[record(skip)]
///     cached_score: u32,
/// }
/// ```
///
/// Fields are listed in declaration order. `Option<T>` fields that are `None`
/// are reported as unset.
///
/// # Attributes
///
/// - `#[record(rename_all = "...")]` - Rename every field: `snake_case`,
///   `camelCase`, `PascalCase`, `SCREAMING_SNAKE_CASE`, `kebab-case`,
///   `lowercase` or `UPPERCASE`
/// - `#[record(rename = "name")]` - Use a different attribute name
/// - `#[record(skip)]` - Leave the field out
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
