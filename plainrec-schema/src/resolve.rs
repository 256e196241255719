//! Field type classification.
//!
//! Turns a `syn::Type` as written in the source module into a [`TypeRef`],
//! resolving the leading path segment through the module's imports.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

use crate::types::{NullableKind, PointerKind, PrimitiveType, SequenceKind, TypeRef};
use crate::universe::TypeUniverse;

/// Collection types that have no plain translation.
const MAP_LIKE: &[&str] = &[
    "HashMap", "BTreeMap", "HashSet", "BTreeSet", "IndexMap", "IndexSet",
];

/// Module names whose `Null*` types are nullable wrappers.
const WRAPPER_MODULES: &[&str] = &["sql", "plainrec_sql"];

/// Renders a type the way it would be written by hand.
#[must_use]
pub fn describe_type(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" ::", "::")
        .replace(" < ", "<")
        .replace("< ", "<")
        .replace(" <", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" ;", ";")
        .replace("& ", "&")
        .replace("* ", "*")
}

/// Classifies a field type against the universe it was declared in.
#[must_use]
pub fn classify(ty: &Type, universe: &TypeUniverse) -> TypeRef {
    match ty {
        Type::Paren(paren) => classify(&paren.elem, universe),
        Type::Group(group) => classify(&group.elem, universe),
        Type::Ptr(ptr) => TypeRef::Pointer {
            kind: if ptr.mutability.is_some() {
                PointerKind::Mut
            } else {
                PointerKind::Const
            },
            ty: ty.clone(),
        },
        Type::Array(_) => TypeRef::Sequence {
            kind: SequenceKind::Array,
            ty: ty.clone(),
        },
        Type::Path(type_path) if type_path.qself.is_none() => {
            classify_path(ty, &type_path.path, universe)
        }
        _ => TypeRef::Other(describe_type(ty)),
    }
}

fn classify_path(ty: &Type, path: &syn::Path, universe: &TypeUniverse) -> TypeRef {
    let Some(last) = path.segments.last() else {
        return TypeRef::Other(describe_type(ty));
    };
    let resolved = resolve_segments(path, universe);
    let name = resolved
        .last()
        .cloned()
        .unwrap_or_else(|| last.ident.to_string());
    let package = &resolved[..resolved.len().saturating_sub(1)];
    let local = package.is_empty() && universe.declares(&name);

    if package.is_empty() && !local && last.arguments.is_none() {
        if let Some(prim) = PrimitiveType::from_rust_name(&name) {
            return TypeRef::Primitive(prim);
        }
    }

    if MAP_LIKE.contains(&name.as_str()) {
        return TypeRef::Other(describe_type(ty));
    }

    if !local && is_std(package) && single_type_argument(&last.arguments) {
        if let Some(kind) = PointerKind::from_name(&name) {
            return TypeRef::Pointer {
                kind,
                ty: ty.clone(),
            };
        }
        if name == "Vec" {
            return TypeRef::Sequence {
                kind: SequenceKind::Vec,
                ty: ty.clone(),
            };
        }
    }

    let from_wrapper_module = package
        .last()
        .is_some_and(|module| WRAPPER_MODULES.contains(&module.as_str()));
    if from_wrapper_module && last.arguments.is_none() {
        if let Some(kind) = NullableKind::from_wrapper_name(&name) {
            return TypeRef::NullableWrapper(kind);
        }
    }

    TypeRef::NamedExternal {
        package: if package.is_empty() {
            None
        } else {
            Some(package.join("::"))
        },
        name,
        ty: ty.clone(),
    }
}

/// Expands the first path segment through the universe's imports.
fn resolve_segments(path: &syn::Path, universe: &TypeUniverse) -> Vec<String> {
    let mut segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
    if let Some(full) = segments.first().and_then(|first| universe.import(first)) {
        let mut expanded = full.to_vec();
        expanded.extend(segments.drain(1..));
        return expanded;
    }
    segments
}

fn is_std(package: &[String]) -> bool {
    match package.first().map(String::as_str) {
        None => true,
        Some(root) => matches!(root, "std" | "alloc" | "core"),
    }
}

fn single_type_argument(arguments: &PathArguments) -> bool {
    match arguments {
        PathArguments::AngleBracketed(args) => {
            args.args.len() == 1 && matches!(args.args.first(), Some(GenericArgument::Type(_)))
        }
        _ => false,
    }
}
