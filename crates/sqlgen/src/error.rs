//! Error types for sqlgen

use thiserror::Error;

/// Result type alias for sqlgen operations
pub type SqlGenResult<T> = Result<T, SqlGenError>;

/// Errors raised while assembling a statement.
///
/// Every check runs before the builder is touched, so a call that fails
/// leaves the text buffer and arguments exactly as they were.
#[derive(Debug, Error)]
pub enum SqlGenError {
    /// A flat condition list whose length is not a multiple of 3
    #[error("condition triples has incorrect length: {0}")]
    TripleArity(usize),

    /// A flat column/value list of odd length
    #[error("column/value pairs has incorrect length: {0}")]
    PairArity(usize),

    /// Empty or non-text column name or operator inside a condition
    #[error("invalid column name or operator: {column:?} {operator:?}")]
    InvalidCondition { column: String, operator: String },

    /// Empty or non-text column name inside an assignment
    #[error("invalid column name: {0:?}")]
    InvalidColumn(String),

    /// A record field that has to be bound as an argument but only exposes
    /// a nested record
    #[error("cannot read field `{field}` of `{record}` as a column value")]
    FieldAccess {
        record: &'static str,
        field: &'static str,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SqlGenError {
    /// Create an invalid condition error
    pub fn invalid_condition(column: impl Into<String>, operator: impl Into<String>) -> Self {
        Self::InvalidCondition {
            column: column.into(),
            operator: operator.into(),
        }
    }

    /// Check if this error comes from malformed call arguments
    pub fn is_malformed_call(&self) -> bool {
        matches!(
            self,
            Self::TripleArity(_)
                | Self::PairArity(_)
                | Self::InvalidCondition { .. }
                | Self::InvalidColumn(_)
        )
    }

    /// Check if this error is a record field access violation
    pub fn is_field_access(&self) -> bool {
        matches!(self, Self::FieldAccess { .. })
    }
}

impl From<serde_json::Error> for SqlGenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
