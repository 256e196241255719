//! Field type mapping.
//!
//! Decides the plain type of every source field and, for nullable wrappers,
//! the statement that unwraps the value in the adapter.

use plainrec_schema::{FieldDescriptor, NullableKind, TypeRef};

use crate::error::CodegenError;

/// Conditional unwrap of a nullable wrapper field.
///
/// Declares `target_var` with the zero value of the plain type and assigns
/// `source.<source_field>.<value_field>` when
/// `source.<source_field>.<valid_field>` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapStatement {
    /// Local variable receiving the value.
    pub target_var: String,
    /// Original name of the wrapper field on the source.
    pub source_field: String,
    /// Validity flag on the wrapper.
    pub valid_field: &'static str,
    /// Field holding the wrapped value.
    pub value_field: &'static str,
}

/// A source field mapped onto the plain record.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedField {
    /// Name as declared on the source.
    pub original_name: String,
    /// Name on the plain record.
    pub lowered_name: String,
    /// Plain field type; never a nullable wrapper.
    pub plain_type: TypeRef,
    /// `plain_type` as emitted.
    pub ty: syn::Type,
    /// Unwrap logic for nullable wrappers, `None` for direct copies.
    pub init: Option<UnwrapStatement>,
}

/// Lowers a field name for the plain record.
///
/// The first character is lowercased, except that an entirely upper-case
/// name (`ID`, `URL`) is lowercased as a whole. Acronyms inside longer
/// names (`UserJSON`) are not special-cased.
#[must_use]
pub fn lower_name(name: &str) -> String {
    if name.to_uppercase() == name {
        return name.to_lowercase();
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Maps one field descriptor.
///
/// # Errors
/// Returns `CodegenError::UnsupportedFieldType` for shapes with no plain
/// translation.
pub fn map_field(field: &FieldDescriptor) -> Result<MappedField, CodegenError> {
    let lowered_name = lower_name(&field.name);
    let (plain_type, init) = match &field.ty {
        TypeRef::NullableWrapper(kind) => (
            TypeRef::Primitive(kind.plain_type()),
            Some(unwrap_statement(&field.name, &lowered_name, *kind)),
        ),
        TypeRef::Other(_) => return Err(unsupported(field)),
        direct => (direct.clone(), None),
    };
    let ty = plain_type
        .emitted_type()
        .ok_or_else(|| unsupported(field))?;

    tracing::debug!(
        "Mapped field {} -> {}: {}{}",
        field.name,
        lowered_name,
        plain_type,
        if init.is_some() { " (unwrapped)" } else { "" }
    );

    Ok(MappedField {
        original_name: field.name.clone(),
        lowered_name,
        plain_type,
        ty,
        init,
    })
}

/// Maps every field, stopping at the first unsupported one.
///
/// The result keeps declaration order.
///
/// # Errors
/// Returns the first `CodegenError::UnsupportedFieldType` encountered.
pub fn map_fields(fields: &[FieldDescriptor]) -> Result<Vec<MappedField>, CodegenError> {
    fields.iter().map(map_field).collect()
}

fn unwrap_statement(source_field: &str, target_var: &str, kind: NullableKind) -> UnwrapStatement {
    UnwrapStatement {
        target_var: target_var.to_string(),
        source_field: source_field.to_string(),
        valid_field: NullableKind::VALID_FIELD,
        value_field: kind.value_field(),
    }
}

fn unsupported(field: &FieldDescriptor) -> CodegenError {
    CodegenError::UnsupportedFieldType {
        field: field.name.clone(),
        type_description: field.ty.to_string(),
    }
}
