//! Rust code generation modules.
//!
//! [`RecordSynthesizer`] assembles mapped fields into the plain record, its
//! direct constructor, the adapter from the source aggregate and one
//! accessor per field.

pub mod accessors;
pub mod adapter;
pub mod record;

pub use accessors::AccessorGenerator;
pub use adapter::AdapterGenerator;
pub use record::RecordGenerator;

use std::collections::HashSet;

use proc_macro2::{Ident, Span};
use quote::format_ident;
use syn::parse_quote;

use crate::error::CodegenError;
use crate::mapper::MappedField;

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// A synthesized output unit.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    /// Name of the plain record.
    pub type_name: String,
    /// Mapped fields in emission order.
    pub fields: Vec<MappedField>,
    /// Generated items.
    pub file: syn::File,
    /// Marker comment text.
    pub marker: String,
}

impl GeneratedUnit {
    /// Renders the unit as formatted Rust source, marker comment first.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        for line in self.marker.lines() {
            output.push_str("// ");
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&prettyplease::unparse(&self.file));
        output
    }

    /// Returns a one-line-per-field summary of the mapping.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut output = format!("{}:\n", self.type_name);
        for field in &self.fields {
            output.push_str(&format!(
                "  {}: {} <- {}",
                field.lowered_name, field.plain_type, field.original_name
            ));
            if let Some(init) = &field.init {
                output.push_str(&format!(
                    " (if .{} then .{})",
                    init.valid_field, init.value_field
                ));
            }
            output.push('\n');
        }
        output
    }
}

/// Assembles the output unit for one aggregate.
pub struct RecordSynthesizer<'a> {
    type_name: &'a str,
    source_module: &'a str,
    derives: &'a [String],
}

impl<'a> RecordSynthesizer<'a> {
    /// Creates a new synthesizer.
    #[must_use]
    pub fn new(type_name: &'a str, source_module: &'a str, derives: &'a [String]) -> Self {
        Self {
            type_name,
            source_module,
            derives,
        }
    }

    /// Builds the unit from fields in declaration order.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the type name, source module or a
    /// derive is not a valid Rust path.
    pub fn synthesize(
        &self,
        declared: Vec<MappedField>,
        marker: &str,
    ) -> Result<GeneratedUnit, CodegenError> {
        let name: Ident = syn::parse_str(self.type_name)
            .map_err(|_| CodegenError::config(format!("invalid type name '{}'", self.type_name)))?;
        let module: syn::Path = syn::parse_str(self.source_module).map_err(|_| {
            CodegenError::config(format!("invalid source module '{}'", self.source_module))
        })?;
        let derives = self
            .derives
            .iter()
            .map(|derive| {
                syn::parse_str::<syn::Path>(derive)
                    .map_err(|_| CodegenError::config(format!("invalid derive '{derive}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let source: syn::Path = parse_quote!(#module::#name);

        let sorted = sort_fields(&declared);
        let snake = to_snake_case(self.type_name);
        let constructor_name = format_ident!("new_{}", snake);
        let adapter_name = format_ident!("new_from_{}", snake);

        let record = RecordGenerator::new(&name, &sorted);
        let adapter = AdapterGenerator::new(&name, &source, &declared, &sorted);
        let accessors = AccessorGenerator::new(&name, &sorted);

        let record_struct = record.record_struct(&derives);
        let constructor = record.constructor(&constructor_name);
        let adapter_fn = adapter.adapter(&adapter_name);
        let from_impl = adapter.from_impl(&adapter_name);
        let accessor_impl = accessors.accessor_impl();

        let file: syn::File = parse_quote! {
            #![allow(non_snake_case)]

            #[allow(unused_imports)]
            use #module::*;

            #record_struct

            #constructor

            #adapter_fn

            #from_impl

            #accessor_impl
        };

        let fields = sorted.into_iter().cloned().collect();
        Ok(GeneratedUnit {
            type_name: self.type_name.to_string(),
            fields,
            file,
            marker: marker.to_string(),
        })
    }
}

/// Sorts fields by lowered name; equal names keep declaration order.
#[must_use]
pub fn sort_fields(fields: &[MappedField]) -> Vec<&MappedField> {
    let mut sorted: Vec<&MappedField> = fields.iter().collect();
    sorted.sort_by(|a, b| a.lowered_name.cmp(&b.lowered_name));
    sorted
}

/// Builds an identifier for a field or variable name.
///
/// Keywords become raw identifiers; the few that cannot be raw get a
/// trailing underscore.
#[must_use]
pub fn field_ident(name: &str) -> Ident {
    if NON_RAW_KEYWORDS.contains(&name) {
        return format_ident!("{}_", name);
    }
    match syn::parse_str::<Ident>(name) {
        Ok(ident) => ident,
        Err(_) => Ident::new_raw(name, Span::call_site()),
    }
}

/// Picks a parameter name that does not clash with any field name.
#[must_use]
pub fn fresh_name(base: &str, taken: &HashSet<&str>) -> String {
    let mut name = base.to_string();
    while taken.contains(name.as_str()) {
        name.push('_');
    }
    name
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}
