//! Incremental SQL statement builder.
//!
//! [`Builder`] appends SQL fragments and bound arguments in call order. Each
//! argument's placeholder is rendered from the total argument count right
//! after the argument is pushed, so placeholders are 1-based, contiguous and
//! line up with [`Builder::args`] no matter which clause produced them.
//!
//! # Example
//! ```ignore
//! use sqlgen::{Builder, Cond};
//!
//! let mut b = Builder::postgres();
//! b.select(["*"])
//!     .from(["users"])
//!     .where_and([Cond::eq("status", "active")?])
//!     .order_by(["created_at DESC"])
//!     .limit(20);
//!
//! let (sql, args) = b.query();
//! assert_eq!(sql, "SELECT * FROM users WHERE `status`=$1 ORDER BY created_at DESC LIMIT $2");
//! assert_eq!(args.len(), 2);
//! # Ok::<(), sqlgen::SqlGenError>(())
//! ```

mod sink;

pub use sink::Sink;

use crate::condition::{Assign, Cond};
use crate::config::{BuilderConfig, Placeholder};
use crate::error::SqlGenResult;
use crate::ident::Quote;
use crate::record::{Record, map_columns};
use crate::value::Value;

/// A fluent, append-only SQL statement builder.
///
/// Every method appends; nothing is idempotent. Methods that read a record
/// return `SqlGenResult<&mut Self>` and leave the builder untouched when
/// they fail.
#[must_use]
pub struct Builder<'m> {
    sql: String,
    args: Vec<Value>,
    placeholder: Placeholder,
    tag: String,
    quote: Quote,
    where_added: bool,
    mirror: Option<&'m mut dyn Sink>,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self::with_config(BuilderConfig::default())
    }
}

impl std::fmt::Debug for Builder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("sql", &self.sql)
            .field("args", &self.args)
            .field("tag", &self.tag)
            .field("mirrored", &self.mirror.is_some())
            .finish_non_exhaustive()
    }
}

impl<'m> Builder<'m> {
    /// Create a builder with a placeholder style and a record tag namespace.
    ///
    /// An empty `tag` maps records by their declared field names.
    pub fn new(placeholder: Placeholder, tag: impl Into<String>) -> Self {
        Self::with_config(
            BuilderConfig::default()
                .with_placeholder(placeholder)
                .with_tag(tag),
        )
    }

    /// Create a builder from a [`BuilderConfig`].
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            sql: String::new(),
            args: Vec::new(),
            placeholder: config.placeholder,
            tag: config.tag,
            quote: config.quote,
            where_added: false,
            mirror: None,
        }
    }

    /// `$n` placeholders, `json` tags.
    pub fn postgres() -> Self {
        Self::default()
    }

    /// `?` placeholders with the given tag namespace.
    pub fn question(tag: impl Into<String>) -> Self {
        Self::new(Placeholder::Question, tag)
    }

    // ==================== Write path ====================

    fn write(&mut self, s: &str) {
        Sink::write_str(self, s);
    }

    /// Push an argument and return its placeholder.
    fn bind(&mut self, value: Value) -> String {
        Sink::push_arg(self, value);
        self.placeholder.render(self.args.len())
    }

    fn column(&self, name: &str) -> String {
        self.quote.column(name)
    }

    fn predicate(&mut self, cond: Cond) -> String {
        let ph = self.bind(cond.value);
        let mut out = self.column(&cond.column);
        out.push_str(&cond.op);
        out.push_str(&ph);
        out
    }

    fn open_where(&mut self) {
        if self.where_added {
            self.write(" AND ");
        } else {
            self.write(" WHERE ");
            Sink::where_opened(self);
        }
    }

    // ==================== Clauses ====================

    /// Append raw SQL and bind `args` in order.
    ///
    /// The text is written as-is; it must already contain the placeholders
    /// for `args`.
    pub fn raw(&mut self, text: &str, args: impl IntoIterator<Item = Value>) -> &mut Self {
        self.write(text);
        for arg in args {
            Sink::push_arg(self, arg);
        }
        self
    }

    /// `SELECT a,b,c`. Columns are written unquoted; an empty list selects `*`.
    pub fn select<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cols = join(columns);
        if cols.is_empty() {
            cols.push('*');
        }
        self.write("SELECT ");
        self.write(&cols);
        self
    }

    /// `SELECT` the record's mapped columns, minus those named in `except`.
    pub fn select_struct<R: Record + ?Sized>(
        &mut self,
        record: &R,
        except: &[&str],
    ) -> SqlGenResult<&mut Self> {
        let mapped = map_columns(record, &self.tag)?;
        let selected: Vec<String> = mapped
            .names
            .iter()
            .filter(|name| !except.contains(&name.as_str()))
            .map(|name| self.column(name))
            .collect();

        self.write("SELECT ");
        self.write(&selected.join(","));
        Ok(self)
    }

    /// ` FROM a,b`
    pub fn from<I, S>(&mut self, tables: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write(" FROM ");
        self.write(&join(tables));
        self
    }

    /// Add predicates joined by `AND`.
    ///
    /// The first clause-opening call writes ` WHERE `; later calls (including
    /// [`where_or`](Self::where_or) and [`where_in`](Self::where_in)) are
    /// joined with ` AND `. An empty list is a no-op.
    pub fn where_and(&mut self, conds: impl IntoIterator<Item = Cond>) -> &mut Self {
        let conds: Vec<Cond> = conds.into_iter().collect();
        if conds.is_empty() {
            return self;
        }
        self.open_where();

        let mut clause = String::new();
        for (i, cond) in conds.into_iter().enumerate() {
            if i > 0 {
                clause.push_str(" AND ");
            }
            let pred = self.predicate(cond);
            clause.push_str(&pred);
        }
        self.write(&clause);
        self
    }

    /// Add a parenthesized group of predicates joined by `OR`.
    ///
    /// Shares the WHERE/AND opening state with [`where_and`](Self::where_and).
    /// An empty list is a no-op.
    pub fn where_or(&mut self, conds: impl IntoIterator<Item = Cond>) -> &mut Self {
        let conds: Vec<Cond> = conds.into_iter().collect();
        if conds.is_empty() {
            return self;
        }
        self.open_where();

        let mut clause = String::from("(");
        for (i, cond) in conds.into_iter().enumerate() {
            if i > 0 {
                clause.push_str(" OR ");
            }
            let pred = self.predicate(cond);
            clause.push_str(&pred);
        }
        clause.push(')');
        self.write(&clause);
        self
    }

    /// Add `column IN(...)`, binding every value.
    ///
    /// An empty list renders `IN(NULL)`, which matches no row.
    pub fn where_in<I>(&mut self, column: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.open_where();

        let mut clause = self.column(column);
        clause.push_str(" IN(");
        let placeholders: Vec<String> = values
            .into_iter()
            .map(|v| self.bind(v.into()))
            .collect();
        if placeholders.is_empty() {
            clause.push_str("NULL");
        } else {
            clause.push_str(&placeholders.join(","));
        }
        clause.push(')');
        self.write(&clause);
        self
    }

    /// `UPDATE table SET a=$1,b=$2`. An empty list is a no-op.
    pub fn update(&mut self, table: &str, sets: impl IntoIterator<Item = Assign>) -> &mut Self {
        let sets: Vec<Assign> = sets.into_iter().collect();
        if sets.is_empty() {
            return self;
        }
        self.write_update(table, sets.into_iter().map(|a| (a.column, a.value)))
    }

    /// `INSERT INTO table(a,b)VALUES($1,$2)`. An empty list is a no-op.
    pub fn insert(&mut self, table: &str, sets: impl IntoIterator<Item = Assign>) -> &mut Self {
        let sets: Vec<Assign> = sets.into_iter().collect();
        if sets.is_empty() {
            return self;
        }
        self.write_insert(table, sets.into_iter().map(|a| (a.column, a.value)))
    }

    /// INSERT every mapped column of `record`.
    pub fn insert_struct<R: Record + ?Sized>(
        &mut self,
        table: &str,
        record: &R,
    ) -> SqlGenResult<&mut Self> {
        let mapped = map_columns(record, &self.tag)?;
        Ok(self.write_insert(table, mapped.names.into_iter().zip(mapped.values)))
    }

    /// UPDATE every mapped column of `record` except those named in `except`.
    pub fn update_struct<R: Record + ?Sized>(
        &mut self,
        table: &str,
        record: &R,
        except: &[&str],
    ) -> SqlGenResult<&mut Self> {
        let mapped = map_columns(record, &self.tag)?;
        let sets = mapped
            .names
            .into_iter()
            .zip(mapped.values)
            .filter(|(name, _)| !except.contains(&name.as_str()));
        Ok(self.write_update(table, sets))
    }

    fn write_insert(
        &mut self,
        table: &str,
        sets: impl Iterator<Item = (String, Value)>,
    ) -> &mut Self {
        let mut cols = Vec::new();
        let mut placeholders = Vec::new();
        for (column, value) in sets {
            cols.push(self.column(&column));
            placeholders.push(self.bind(value));
        }

        self.write(&format!(
            "INSERT INTO {table}({})VALUES({})",
            cols.join(","),
            placeholders.join(",")
        ));
        self
    }

    fn write_update(
        &mut self,
        table: &str,
        sets: impl Iterator<Item = (String, Value)>,
    ) -> &mut Self {
        let mut updates = Vec::new();
        for (column, value) in sets {
            let ph = self.bind(value);
            updates.push(format!("{}={ph}", self.column(&column)));
        }

        self.write(&format!("UPDATE {table} SET {}", updates.join(",")));
        self
    }

    /// `DELETE FROM table`.
    ///
    /// Nothing stops a DELETE without a WHERE clause; add one.
    pub fn delete(&mut self, table: &str) -> &mut Self {
        self.write("DELETE FROM ");
        self.write(table);
        self
    }

    /// ` ORDER BY a DESC,b`. Terms are written verbatim; an empty list is a no-op.
    pub fn order_by<I, S>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = join(terms);
        if terms.is_empty() {
            return self;
        }
        self.write(" ORDER BY ");
        self.write(&terms);
        self
    }

    /// ` GROUP BY a,b`. Columns are written verbatim; an empty list is a no-op.
    pub fn group_by<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = join(columns);
        if columns.is_empty() {
            return self;
        }
        self.write(" GROUP BY ");
        self.write(&columns);
        self
    }

    /// ` LIMIT $n` with `n` bound as an argument.
    pub fn limit(&mut self, n: i64) -> &mut Self {
        let ph = self.bind(Value::Int(n));
        self.write(&format!(" LIMIT {ph}"));
        self
    }

    /// ` OFFSET $n` with `n` bound as an argument.
    pub fn offset(&mut self, n: i64) -> &mut Self {
        let ph = self.bind(Value::Int(n));
        self.write(&format!(" OFFSET {ph}"));
        self
    }

    // ==================== Mirror ====================

    /// Send every later write to `sink` as well.
    ///
    /// Typical use is a `COUNT(*)` query that shares the WHERE clause of a
    /// paginated SELECT:
    ///
    /// ```ignore
    /// let mut count = Builder::postgres();
    /// count.select(["COUNT(*)"]).from(["users"]);
    ///
    /// let mut page = Builder::postgres();
    /// page.select(["*"]).from(["users"]).mirror(&mut count);
    /// page.where_and([Cond::eq("status", "active")?]).detach_mirror();
    /// page.limit(20);
    ///
    /// let (page_sql, page_args) = page.into_parts();
    /// let (count_sql, count_args) = count.query();
    /// ```
    ///
    /// Placeholders are rendered from this builder's argument count, so the
    /// mirror should hold no arguments of its own when attached.
    /// A mirror that opens its WHERE clause through this builder joins later
    /// predicates of its own with ` AND `.
    pub fn mirror(&mut self, sink: &'m mut dyn Sink) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlgen", at = self.sql.len(), "mirror attached");
        self.mirror = Some(sink);
        self
    }

    /// Stop mirroring. Later writes only reach this builder.
    pub fn detach_mirror(&mut self) -> &mut Self {
        self.mirror = None;
        self
    }

    // ==================== Output ====================

    /// The assembled SQL and its arguments. Can be called repeatedly.
    pub fn query(&self) -> (&str, &[Value]) {
        self.trace_statement();
        (&self.sql, &self.args)
    }

    /// The assembled SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bound arguments in placeholder order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Consume the builder, returning the SQL and its arguments.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        self.trace_statement();
        (self.sql, self.args)
    }

    /// Arguments as references compatible with `tokio-postgres`.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.args
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }

    fn trace_statement(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sqlgen", sql = %self.sql, args = self.args.len(), "statement assembled");
    }
}

impl Sink for Builder<'_> {
    fn write_str(&mut self, s: &str) {
        self.sql.push_str(s);
        if let Some(mirror) = self.mirror.as_deref_mut() {
            mirror.write_str(s);
        }
    }

    fn push_arg(&mut self, arg: Value) {
        if let Some(mirror) = self.mirror.as_deref_mut() {
            mirror.push_arg(arg.clone());
        }
        self.args.push(arg);
    }

    fn where_opened(&mut self) {
        self.where_added = true;
        if let Some(mirror) = self.mirror.as_deref_mut() {
            mirror.where_opened();
        }
    }
}

fn join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(item.as_ref());
    }
    out
}
