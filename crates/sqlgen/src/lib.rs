//! # sqlgen
//!
//! A fluent assembler for parameterized SQL.
//!
//! ## Features
//!
//! - **Bound arguments**: values never end up in the SQL text; each one gets a
//!   placeholder numbered by its position in the argument list
//! - **Pluggable placeholders**: `$1, $2, ...`, `?`, or a custom renderer
//! - **Record mapping**: `#[derive(Record)]` turns struct fields into
//!   columns/values, driven by per-namespace tag directives
//! - **Mirroring**: duplicate every write into a second builder, e.g. to build
//!   a `COUNT(*)` query sharing the WHERE clause of a paginated SELECT
//!
//! The builder never parses or validates the SQL it writes. Table names and
//! raw fragments are trusted; column names are quoted.
//!
//! ## Example
//!
//! ```ignore
//! use sqlgen::prelude::*;
//!
//! #[derive(Record)]
//! struct User {
//!     #[sqlgen(json = "id")]
//!     id: i64,
//!     #[sqlgen(json = "username")]
//!     username: String,
//!     #[sqlgen(json = "token,omitdb")]
//!     session_token: String,
//! }
//!
//! let user = User { id: 1, username: "a".into(), session_token: "t".into() };
//!
//! let mut b = Builder::question("json");
//! b.insert_struct("user", &user)?;
//! assert_eq!(b.sql(), "INSERT INTO user(`id`,`username`)VALUES(?,?)");
//!
//! let mut b = Builder::postgres();
//! b.delete("users").where_and([Cond::eq("id", 1)?]);
//! assert_eq!(b.sql(), "DELETE FROM users WHERE `id`=$1");
//! # Ok::<(), sqlgen::SqlGenError>(())
//! ```

// Lets `#[derive(Record)]` expand to `::sqlgen::...` inside this crate too.
extern crate self as sqlgen;

pub mod builder;
pub mod condition;
pub mod config;
pub mod error;
pub mod ident;
pub mod prelude;
pub mod record;
pub mod value;

pub use builder::{Builder, Sink};
pub use condition::{Assign, Cond, pairs, triples};
pub use config::{BuilderConfig, Placeholder};
pub use error::{SqlGenError, SqlGenResult};
pub use ident::Quote;
pub use record::{Columns, EMBED, Field, FieldValue, OMIT_FLAG, Record, map_columns};
pub use value::{ToValue, Value};

#[cfg(feature = "derive")]
pub use sqlgen_derive::Record;
