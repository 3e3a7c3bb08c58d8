//! Record derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

use crate::attrs::parse_field_tags;

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let record_name = name.to_string();
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let declared = ident.to_string();
        let declared = declared.strip_prefix("r#").unwrap_or(&declared);

        let tags = parse_field_tags(field)?;
        let value = if tags.is_embedded() {
            quote! { ::sqlgen::FieldValue::Nested(&self.#ident) }
        } else {
            quote! { ::sqlgen::FieldValue::Scalar(::sqlgen::ToValue::to_value(&self.#ident)) }
        };
        let tag_pairs = tags.tags.iter().map(|(ns, directive)| quote! { (#ns, #directive) });

        descriptors.push(quote! {
            ::sqlgen::Field {
                name: #declared,
                tags: &[#(#tag_pairs),*],
                value: #value,
            }
        });
    }

    Ok(quote! {
        impl #impl_generics ::sqlgen::Record for #name #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #record_name
            }

            fn fields(&self) -> ::std::vec::Vec<::sqlgen::Field<'_>> {
                ::std::vec![
                    #(#descriptors),*
                ]
            }
        }
    })
}
