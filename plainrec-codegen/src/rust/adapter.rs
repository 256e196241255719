//! Adapter generation.
//!
//! The adapter converts a value of the source aggregate into the plain
//! record. Nullable wrappers are unwrapped into locals first, in declaration
//! order; every other field is copied straight from the source.

use std::collections::{HashMap, HashSet};

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::parse_quote;

use super::{field_ident, fresh_name};
use crate::mapper::MappedField;

/// Generator for the adapter function and its `From` impl.
pub struct AdapterGenerator<'a> {
    name: &'a Ident,
    source: &'a syn::Path,
    declared: &'a [MappedField],
    sorted: &'a [&'a MappedField],
}

impl<'a> AdapterGenerator<'a> {
    /// Creates a new adapter generator.
    ///
    /// `declared` holds the fields in declaration order, `sorted` in emission
    /// order.
    #[must_use]
    pub fn new(
        name: &'a Ident,
        source: &'a syn::Path,
        declared: &'a [MappedField],
        sorted: &'a [&'a MappedField],
    ) -> Self {
        Self {
            name,
            source,
            declared,
            sorted,
        }
    }

    /// Name of the adapter's source parameter.
    #[must_use]
    pub fn param_name(&self) -> String {
        let taken: HashSet<&str> = self
            .declared
            .iter()
            .map(|f| f.lowered_name.as_str())
            .collect();
        fresh_name("source", &taken)
    }

    /// Returns, per lowered name, whether the record reads it from an
    /// unwrapped local. Later declarations overwrite earlier ones.
    #[must_use]
    pub fn local_bindings(&self) -> HashMap<&'a str, bool> {
        let mut bindings = HashMap::new();
        for field in self.declared {
            bindings.insert(field.lowered_name.as_str(), field.init.is_some());
        }
        bindings
    }

    /// Generates `fn <name>(source: Source) -> Record`.
    #[must_use]
    pub fn adapter(&self, fn_name: &Ident) -> syn::ItemFn {
        let name = self.name;
        let source = self.source;
        let param = format_ident!("{}", self.param_name());

        let unwraps = self.declared.iter().filter_map(|field| {
            let init = field.init.as_ref()?;
            let target = field_ident(&init.target_var);
            let member = field_ident(&init.source_field);
            let valid = format_ident!("{}", init.valid_field);
            let value = format_ident!("{}", init.value_field);
            let ty = &field.ty;
            Some(quote! {
                let mut #target: #ty = Default::default();
                if #param.#member.#valid {
                    #target = #param.#member.#value;
                }
            })
        });

        let bindings = self.local_bindings();
        let inits = self.sorted.iter().map(|field| -> TokenStream {
            let ident = field_ident(&field.lowered_name);
            if bindings
                .get(field.lowered_name.as_str())
                .copied()
                .unwrap_or(false)
            {
                quote!(#ident)
            } else {
                let member = field_ident(&field.original_name);
                quote!(#ident: #param.#member)
            }
        });

        parse_quote! {
            #[must_use]
            pub fn #fn_name(#param: #source) -> #name {
                #(#unwraps)*
                #name { #(#inits),* }
            }
        }
    }

    /// Generates `impl From<Source> for Record` delegating to the adapter.
    #[must_use]
    pub fn from_impl(&self, fn_name: &Ident) -> syn::ItemImpl {
        let name = self.name;
        let source = self.source;

        parse_quote! {
            impl From<#source> for #name {
                fn from(value: #source) -> Self {
                    #fn_name(value)
                }
            }
        }
    }
}
