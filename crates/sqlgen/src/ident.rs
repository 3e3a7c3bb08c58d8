//! Column name quoting.
//!
//! Every column name the builder emits goes through [`Quote::write_column`]:
//!
//! - `*` is written bare
//! - dotted names are quoted per segment (`t.id` → `` `t`.`id` ``), and a
//!   trailing `*` segment stays bare (`t.*` → `` `t`.* ``)
//! - a delimiter inside a name is escaped by doubling it
//!
//! Table names and raw fragments are never passed through here.

use serde::Deserialize;

/// Delimiter used to quote column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quote {
    /// `` `name` `` (MySQL, SQLite)
    #[default]
    Backtick,
    /// `"name"` (PostgreSQL, standard SQL)
    Double,
    /// No quoting at all.
    None,
}

impl Quote {
    fn delimiter(self) -> Option<char> {
        match self {
            Quote::Backtick => Some('`'),
            Quote::Double => Some('"'),
            Quote::None => None,
        }
    }

    /// Render a column name.
    pub fn column(self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        self.write_column(name, &mut out);
        out
    }

    pub(crate) fn write_column(self, name: &str, out: &mut String) {
        if name == "*" {
            out.push('*');
            return;
        }
        let Some(delim) = self.delimiter() else {
            out.push_str(name);
            return;
        };

        let mut segments = name.split('.').enumerate().peekable();
        while let Some((i, seg)) = segments.next() {
            let last = segments.peek().is_none();
            if last && i > 0 && seg == "*" {
                out.push('*');
                break;
            }
            out.push(delim);
            for ch in seg.chars() {
                if ch == delim {
                    out.push(delim);
                }
                out.push(ch);
            }
            out.push(delim);
            if !last {
                out.push('.');
            }
        }
    }
}
