//! Convenient imports for typical `sqlgen` usage.
//!
//! ```ignore
//! use sqlgen::prelude::*;
//! ```

pub use crate::{
    Assign, Builder, BuilderConfig, Cond, Placeholder, Quote, Record, SqlGenError, SqlGenResult,
    ToValue, Value,
};
