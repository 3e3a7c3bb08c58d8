//! WHERE predicates and SET/VALUES assignments.
//!
//! [`Cond`] is one `column <op> value` predicate and [`Assign`] one
//! `column = value` pair. Both validate their column (and operator) when
//! constructed, so the builder methods that consume them cannot fail.
//!
//! For untyped input, [`triples`] and [`pairs`] parse flat value lists in
//! the `[col, op, val, col, op, val, ...]` / `[col, val, ...]` layout.
//!
//! # Example
//! ```ignore
//! use sqlgen::{Assign, Cond};
//!
//! let conds = [Cond::eq("status", "active")?, Cond::new("age", ">", 18)?];
//! let sets = [Assign::new("nickname", "Ethan")?];
//! # Ok::<(), sqlgen::SqlGenError>(())
//! ```

use crate::error::{SqlGenError, SqlGenResult};
use crate::value::Value;

/// A single `column <op> value` predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Cond {
    pub(crate) column: String,
    pub(crate) op: String,
    pub(crate) value: Value,
}

impl Cond {
    /// Create a predicate with an arbitrary operator (`=`, `<>`, ` LIKE `, ...).
    ///
    /// The operator is written verbatim between the quoted column and the
    /// placeholder, so include surrounding spaces for keyword operators.
    pub fn new(
        column: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<Value>,
    ) -> SqlGenResult<Self> {
        let column = column.into();
        let op = op.into();
        if column.is_empty() || op.is_empty() {
            return Err(SqlGenError::invalid_condition(column, op));
        }
        Ok(Self {
            column,
            op,
            value: value.into(),
        })
    }

    /// `column=value`
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> SqlGenResult<Self> {
        Self::new(column, "=", value)
    }

    /// `column<>value`
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> SqlGenResult<Self> {
        Self::new(column, "<>", value)
    }

    /// `column>value`
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> SqlGenResult<Self> {
        Self::new(column, ">", value)
    }

    /// `column>=value`
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> SqlGenResult<Self> {
        Self::new(column, ">=", value)
    }

    /// `column<value`
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> SqlGenResult<Self> {
        Self::new(column, "<", value)
    }

    /// `column<=value`
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> SqlGenResult<Self> {
        Self::new(column, "<=", value)
    }

    /// `column LIKE value`
    pub fn like(column: impl Into<String>, value: impl Into<Value>) -> SqlGenResult<Self> {
        Self::new(column, " LIKE ", value)
    }

    /// Column name, unquoted.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Operator text written between column and placeholder, e.g. `=`.
    pub fn op(&self) -> &str {
        &self.op
    }

    /// Value bound for this predicate.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A single `column = value` assignment for INSERT and UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub(crate) column: String,
    pub(crate) value: Value,
}

impl Assign {
    /// Create an assignment. Fails with [`SqlGenError::InvalidColumn`] when
    /// `column` is empty.
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> SqlGenResult<Self> {
        let column = column.into();
        if column.is_empty() {
            return Err(SqlGenError::InvalidColumn(column));
        }
        Ok(Self {
            column,
            value: value.into(),
        })
    }

    /// Column name, unquoted.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Value bound for this column.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Parse a flat `[col, op, val, ...]` list into predicates.
///
/// Fails with [`SqlGenError::TripleArity`] when the length is not a multiple
/// of 3, and [`SqlGenError::InvalidCondition`] when a column or operator is
/// not non-empty text.
pub fn triples(items: Vec<Value>) -> SqlGenResult<Vec<Cond>> {
    if items.len() % 3 != 0 {
        return Err(SqlGenError::TripleArity(items.len()));
    }

    let mut conds = Vec::with_capacity(items.len() / 3);
    let mut iter = items.into_iter();
    while let (Some(col), Some(op), Some(value)) = (iter.next(), iter.next(), iter.next()) {
        match (col, op) {
            (Value::Text(col), Value::Text(op)) => conds.push(Cond::new(col, op, value)?),
            (col, op) => {
                return Err(SqlGenError::invalid_condition(
                    describe(&col),
                    describe(&op),
                ));
            }
        }
    }
    Ok(conds)
}

/// Parse a flat `[col, val, ...]` list into assignments.
///
/// Fails with [`SqlGenError::PairArity`] on odd length and
/// [`SqlGenError::InvalidColumn`] when a column is not non-empty text.
pub fn pairs(items: Vec<Value>) -> SqlGenResult<Vec<Assign>> {
    if items.len() % 2 != 0 {
        return Err(SqlGenError::PairArity(items.len()));
    }

    let mut sets = Vec::with_capacity(items.len() / 2);
    let mut iter = items.into_iter();
    while let (Some(col), Some(value)) = (iter.next(), iter.next()) {
        let Value::Text(col) = col else {
            return Err(SqlGenError::InvalidColumn(describe(&col)));
        };
        sets.push(Assign::new(col, value)?);
    }
    Ok(sets)
}

fn describe(v: &Value) -> String {
    match v {
        Value::Text(s) => s.clone(),
        other => format!("{other:?}"),
    }
}
