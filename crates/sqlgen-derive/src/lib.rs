//! Derive macros for sqlgen
//!
//! Provides `#[derive(Record)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod record;

/// Derive the `Record` field descriptor table for a struct.
///
/// # Example
///
/// ```ignore
/// use sqlgen::Record;
///
/// #[derive(Record)]
/// struct Info {
///     #[sqlgen(json = "name")]
///     name: String,
///     #[sqlgen(json = "age", db = "user_age")]
///     age: i32,
/// }
///
/// #[derive(Record)]
/// struct Person {
///     #[sqlgen(json = ",")]
///     info: Info,
///     #[sqlgen(json = "token,omitdb")]
///     token: String,
/// }
/// ```
///
/// # Attributes
///
/// - `#[sqlgen(<namespace> = "<directive>", ...)]` - One directive per tag
///   namespace. The builder picks the namespace at construction time.
/// - A directive of exactly `","` flattens the field's own `Record` in place;
///   the field type must implement `Record`.
/// - Any other field type must implement `ToValue`.
#[proc_macro_derive(Record, attributes(sqlgen))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
