//! Plain record and direct constructor generation.

use proc_macro2::Ident;
use syn::parse_quote;

use super::field_ident;
use crate::mapper::MappedField;

/// Generator for the plain record type and its direct constructor.
pub struct RecordGenerator<'a> {
    name: &'a Ident,
    fields: &'a [&'a MappedField],
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator over fields in emission order.
    #[must_use]
    pub fn new(name: &'a Ident, fields: &'a [&'a MappedField]) -> Self {
        Self { name, fields }
    }

    /// Generates the record type with one private field per mapped field.
    #[must_use]
    pub fn record_struct(&self, derives: &[syn::Path]) -> syn::ItemStruct {
        let name = self.name;
        let idents = self.fields.iter().map(|f| field_ident(&f.lowered_name));
        let types = self.fields.iter().map(|f| &f.ty);
        let derive_attr = (!derives.is_empty()).then(|| -> syn::Attribute {
            parse_quote!(#[derive(#(#derives),*)])
        });

        parse_quote! {
            #derive_attr
            pub struct #name {
                #(#idents: #types,)*
            }
        }
    }

    /// Generates `fn <name>(fields...) -> Record` taking one positional
    /// parameter per field.
    #[must_use]
    pub fn constructor(&self, fn_name: &Ident) -> syn::ItemFn {
        let name = self.name;
        let idents: Vec<Ident> = self
            .fields
            .iter()
            .map(|f| field_ident(&f.lowered_name))
            .collect();
        let types = self.fields.iter().map(|f| &f.ty);

        parse_quote! {
            #[allow(clippy::too_many_arguments)]
            #[must_use]
            pub fn #fn_name(#(#idents: #types),*) -> #name {
                #name { #(#idents),* }
            }
        }
    }
}
