//! Record → column/value mapping.
//!
//! A [`Record`] exposes its fields as an ordered table of [`Field`]
//! descriptors: declared name, static tag directives and current value.
//! [`map_columns`] walks that table for a given tag namespace and produces the
//! column list the builder writes.
//!
//! Directive rules, per field, for the selected namespace:
//!
//! - no namespace selected: the declared field name is the column
//! - no directive under the namespace: the declared field name is the column
//! - `","`: the field's nested record is flattened in place
//! - `"name,flag,..."`: `name` is the column; an `omitdb` flag drops the field
//!
//! Records are normally described with `#[derive(Record)]`:
//!
//! ```ignore
//! #[derive(sqlgen::Record)]
//! struct Person {
//!     #[sqlgen(json = ",")]
//!     info: Info,
//!     #[sqlgen(json = "labels")]
//!     labels: Vec<String>,
//!     #[sqlgen(json = "token,omitdb")]
//!     token: String,
//! }
//! ```

use crate::error::{SqlGenError, SqlGenResult};
use crate::value::Value;

/// Directive value that flattens a nested record in place.
pub const EMBED: &str = ",";

/// Directive flag that excludes a field from mapping.
pub const OMIT_FLAG: &str = "omitdb";

/// Current value of a record field.
pub enum FieldValue<'a> {
    /// A value that can be bound as an argument.
    Scalar(Value),
    /// A nested record, only usable through an embed directive.
    Nested(&'a dyn Record),
}

/// Descriptor for one record field.
pub struct Field<'a> {
    /// Declared field name.
    pub name: &'static str,
    /// `(namespace, directive)` pairs, e.g. `("json", "token,omitdb")`.
    pub tags: &'static [(&'static str, &'static str)],
    pub value: FieldValue<'a>,
}

impl Field<'_> {
    /// Look up the directive for a tag namespace.
    pub fn tag(&self, namespace: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, directive)| *directive)
    }
}

/// A structure whose fields can be mapped to columns.
///
/// Implement it with `#[derive(Record)]`, or by hand by returning one
/// [`Field`] per field in declaration order.
pub trait Record {
    /// Type name, used in error messages.
    fn record_name(&self) -> &'static str;

    /// Field descriptors in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<T: Record + ?Sized> Record for &T {
    fn record_name(&self) -> &'static str {
        (**self).record_name()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn record_name(&self) -> &'static str {
        (**self).record_name()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// Ordered, position-aligned columns and values of a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
    pub names: Vec<String>,
    pub values: Vec<Value>,
}

impl Columns {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate `(column, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.names.iter().map(String::as_str).zip(self.values.iter())
    }
}

enum Directive<'d> {
    Embed,
    Omit,
    Column(&'d str),
}

impl<'d> Directive<'d> {
    fn parse(raw: &'d str) -> Self {
        if raw == EMBED {
            return Directive::Embed;
        }
        let mut segments = raw.split(',');
        let name = segments.next().unwrap_or_default();
        if segments.any(|flag| flag == OMIT_FLAG) {
            return Directive::Omit;
        }
        Directive::Column(name)
    }
}

/// Map a record to its columns and values under a tag namespace.
///
/// An empty `tag` uses declared field names for scalar fields. A field whose
/// value is a nested record has no declared-name fallback: unless it carries
/// the `","` embed directive under `tag`, mapping fails with
/// [`SqlGenError::FieldAccess`], since the record cannot be bound as a
/// single column value. With an empty `tag` no embed directive is read, so
/// any nested record fails.
pub fn map_columns<R: Record + ?Sized>(record: &R, tag: &str) -> SqlGenResult<Columns> {
    let mut out = Columns::default();
    collect(record, tag, &mut out)?;
    Ok(out)
}

fn collect<R: Record + ?Sized>(record: &R, tag: &str, out: &mut Columns) -> SqlGenResult<()> {
    for field in record.fields() {
        let directive = if tag.is_empty() {
            None
        } else {
            field.tag(tag).map(Directive::parse)
        };

        let column = match directive {
            Some(Directive::Embed) => {
                let FieldValue::Nested(inner) = field.value else {
                    return Err(SqlGenError::FieldAccess {
                        record: record.record_name(),
                        field: field.name,
                    });
                };
                collect(inner, tag, out)?;
                continue;
            }
            Some(Directive::Omit) => continue,
            Some(Directive::Column(name)) if !name.is_empty() => name,
            _ => field.name,
        };

        let FieldValue::Scalar(value) = field.value else {
            return Err(SqlGenError::FieldAccess {
                record: record.record_name(),
                field: field.name,
            });
        };
        out.names.push(column.to_string());
        out.values.push(value);
    }
    Ok(())
}
