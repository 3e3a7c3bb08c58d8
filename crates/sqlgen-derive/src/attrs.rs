//! Field-level `#[sqlgen(...)]` attribute parsing.

use syn::{Expr, ExprLit, Lit, MetaNameValue, Result, Token, punctuated::Punctuated};

/// Directive value that flattens a nested record.
const EMBED: &str = ",";

/// Tag directives collected from a field's `#[sqlgen(...)]` attributes.
pub(crate) struct FieldTags {
    /// `(namespace, directive)` in attribute order.
    pub tags: Vec<(String, String)>,
}

impl FieldTags {
    /// True if any namespace embeds this field.
    pub fn is_embedded(&self) -> bool {
        self.tags.iter().any(|(_, directive)| directive == EMBED)
    }
}

pub(crate) fn parse_field_tags(field: &syn::Field) -> Result<FieldTags> {
    let mut tags: Vec<(String, String)> = Vec::new();

    for attr in &field.attrs {
        if !attr.path().is_ident("sqlgen") {
            continue;
        }

        let items =
            attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;

        for nv in items {
            let Some(namespace) = nv.path.get_ident() else {
                return Err(syn::Error::new_spanned(
                    &nv.path,
                    "expected a tag namespace, e.g. #[sqlgen(json = \"name\")]",
                ));
            };
            let Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) = &nv.value
            else {
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    "tag directive must be a string literal",
                ));
            };

            let namespace = namespace.to_string();
            if tags.iter().any(|(ns, _)| *ns == namespace) {
                return Err(syn::Error::new_spanned(
                    &nv.path,
                    format!("duplicate `{namespace}` directive"),
                ));
            }
            tags.push((namespace, lit.value()));
        }
    }

    Ok(FieldTags { tags })
}
