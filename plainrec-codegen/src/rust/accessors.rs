//! Accessor generation.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::parse_quote;

use super::field_ident;
use crate::mapper::MappedField;

/// Generator for the read-only accessors of the plain record.
pub struct AccessorGenerator<'a> {
    name: &'a Ident,
    fields: &'a [&'a MappedField],
}

impl<'a> AccessorGenerator<'a> {
    /// Creates a new accessor generator over fields in emission order.
    #[must_use]
    pub fn new(name: &'a Ident, fields: &'a [&'a MappedField]) -> Self {
        Self { name, fields }
    }

    /// Generates an `impl` block with one accessor per field, named after
    /// the field's original name.
    ///
    /// Copyable plain types are returned by value, everything else by
    /// reference.
    #[must_use]
    pub fn accessor_impl(&self) -> syn::ItemImpl {
        let name = self.name;
        let methods = self.fields.iter().map(|field| self.accessor(field));

        parse_quote! {
            impl #name {
                #(#methods)*
            }
        }
    }

    fn accessor(&self, field: &MappedField) -> TokenStream {
        let method = field_ident(&field.original_name);
        let member = field_ident(&field.lowered_name);
        let ty = &field.ty;

        if field.plain_type.is_copy() {
            quote! {
                #[must_use]
                pub fn #method(&self) -> #ty {
                    self.#member
                }
            }
        } else {
            quote! {
                #[must_use]
                pub fn #method(&self) -> &#ty {
                    &self.#member
                }
            }
        }
    }
}
