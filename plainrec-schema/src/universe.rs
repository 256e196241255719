//! Type universe loading.
//!
//! A type universe is every top-level declaration of one module, read from
//! the `*.rs` files directly inside a directory, together with the module's
//! `use` imports.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use syn::{Fields, Item, UseTree};

use crate::error::LoadError;
use crate::resolve::classify;
use crate::types::FieldDescriptor;

/// Stem suffix of generated units, which are never part of a universe.
pub const GENERATED_SUFFIX: &str = "_gen";

/// Alias chains longer than this are treated as cyclic.
const MAX_ALIAS_DEPTH: usize = 16;

/// Kind of a top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// Struct with named fields.
    Struct,
    /// Tuple struct.
    TupleStruct,
    /// Unit struct.
    UnitStruct,
    /// Enum.
    Enum,
    /// Union.
    Union,
    /// `type` alias.
    Alias,
    /// Trait.
    Trait,
    /// Free function.
    Function,
    /// Constant.
    Const,
    /// Static.
    Static,
}

impl DeclKind {
    /// Returns a human readable name for the kind.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::TupleStruct => "tuple struct",
            Self::UnitStruct => "unit struct",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Alias => "type alias",
            Self::Trait => "trait",
            Self::Function => "function",
            Self::Const => "constant",
            Self::Static => "static",
        }
    }

    /// Returns true if the declaration introduces a named type.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        !matches!(self, Self::Function | Self::Const | Self::Static)
    }
}

#[derive(Debug, Clone)]
enum Decl {
    Aggregate {
        fields: syn::FieldsNamed,
        generic: bool,
    },
    Alias(Box<syn::Type>),
    Opaque(DeclKind),
}

impl Decl {
    fn kind(&self) -> DeclKind {
        match self {
            Self::Aggregate { .. } => DeclKind::Struct,
            Self::Alias(_) => DeclKind::Alias,
            Self::Opaque(kind) => *kind,
        }
    }
}

/// All named declarations visible in one module.
///
/// Types and values live in separate namespaces, so `fn Foo()` and
/// `struct Foo {}` can coexist.
#[derive(Debug, Clone, Default)]
pub struct TypeUniverse {
    types: HashMap<String, Decl>,
    values: HashMap<String, DeclKind>,
    imports: HashMap<String, Vec<String>>,
    files: Vec<PathBuf>,
}

impl TypeUniverse {
    /// Loads every `*.rs` file directly inside `dir`.
    ///
    /// Files are visited in sorted path order. Previously generated units
    /// (`*_gen.rs`) are skipped.
    ///
    /// # Errors
    /// Returns `LoadError` if the directory or a file cannot be read, or a
    /// file is not valid Rust.
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let generated = path
                .file_stem()
                .is_some_and(|stem| stem.to_string_lossy().ends_with(GENERATED_SUFFIX));
            if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") && !generated {
                paths.push(path);
            }
        }
        paths.sort();

        let mut universe = Self::default();
        for path in paths {
            let source = std::fs::read_to_string(&path)?;
            let file = syn::parse_file(&source).map_err(|source| LoadError::Parse {
                path: path.clone(),
                source,
            })?;
            tracing::debug!("Loaded {} ({} items)", path.display(), file.items.len());
            universe.add_file(path, &file);
        }
        Ok(universe)
    }

    /// Builds a universe from a single in-memory source file.
    ///
    /// # Errors
    /// Returns `LoadError::Parse` if the source is not valid Rust.
    pub fn from_source(source: &str) -> Result<Self, LoadError> {
        let file = syn::parse_file(source).map_err(|source| LoadError::Parse {
            path: PathBuf::from("<memory>"),
            source,
        })?;
        let mut universe = Self::default();
        universe.add_file(PathBuf::from("<memory>"), &file);
        Ok(universe)
    }

    fn add_file(&mut self, path: PathBuf, file: &syn::File) {
        for item in &file.items {
            match item {
                Item::Use(item_use) => {
                    collect_imports(&item_use.tree, &mut Vec::new(), &mut self.imports);
                }
                _ => {
                    if let Some((name, decl)) = declaration(item) {
                        self.insert(&path, name, decl);
                    }
                }
            }
        }
        self.files.push(path);
    }

    fn insert(&mut self, path: &Path, name: String, decl: Decl) {
        let duplicate = match decl {
            Decl::Opaque(kind) if !kind.is_type() => match self.values.entry(name.clone()) {
                Entry::Occupied(_) => true,
                Entry::Vacant(slot) => {
                    slot.insert(kind);
                    false
                }
            },
            decl => match self.types.entry(name.clone()) {
                Entry::Occupied(_) => true,
                Entry::Vacant(slot) => {
                    slot.insert(decl);
                    false
                }
            },
        };
        if duplicate {
            tracing::warn!(
                "Duplicate declaration of '{}' in {}, keeping the first",
                name,
                path.display()
            );
        }
    }

    /// Returns the files the universe was loaded from.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the number of declarations across both namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len() + self.values.len()
    }

    /// Returns true if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.values.is_empty()
    }

    /// Returns true if `name` is declared as a type in this module.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns the kind of the declaration named `name`, preferring the type
    /// namespace.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<DeclKind> {
        self.types
            .get(name)
            .map(Decl::kind)
            .or_else(|| self.values.get(name).copied())
    }

    /// Returns the full path an imported name refers to.
    #[must_use]
    pub fn import(&self, name: &str) -> Option<&[String]> {
        self.imports.get(name).map(Vec::as_slice)
    }

    /// Looks up the aggregate named `name` and returns its fields in
    /// declaration order.
    ///
    /// `type` aliases are followed through the universe.
    ///
    /// # Errors
    /// Returns `TypeNotFound`, `NotATypeDeclaration` or `NotAnAggregate`
    /// depending on what `name` resolves to.
    pub fn fields_of(&self, name: &str) -> Result<Vec<FieldDescriptor>, LoadError> {
        let mut current = name.to_string();
        for _ in 0..MAX_ALIAS_DEPTH {
            let Some(decl) = self.types.get(&current) else {
                return Err(match self.values.get(&current) {
                    Some(kind) => LoadError::NotATypeDeclaration {
                        name: name.to_string(),
                        kind: kind.describe(),
                    },
                    None => LoadError::not_found(current.as_str()),
                });
            };
            match decl {
                Decl::Aggregate { fields, generic } => {
                    if *generic {
                        return Err(LoadError::not_aggregate(name, "generic struct"));
                    }
                    return Ok(self.descriptors(fields));
                }
                Decl::Alias(target) => {
                    current = alias_target(target)
                        .filter(|target| self.declares(target))
                        .ok_or_else(|| {
                            LoadError::not_aggregate(
                                name,
                                format!("alias of {}", crate::describe_type(target)),
                            )
                        })?;
                }
                Decl::Opaque(kind) => {
                    return Err(LoadError::not_aggregate(name, kind.describe()));
                }
            }
        }
        Err(LoadError::not_aggregate(name, "cyclic type alias"))
    }

    fn descriptors(&self, fields: &syn::FieldsNamed) -> Vec<FieldDescriptor> {
        fields
            .named
            .iter()
            .filter_map(|field| {
                let ident = field.ident.as_ref()?;
                let name = ident.to_string();
                let name = name.strip_prefix("r#").map(str::to_string).unwrap_or(name);
                Some(FieldDescriptor::new(name, classify(&field.ty, self)))
            })
            .collect()
    }
}

fn declaration(item: &Item) -> Option<(String, Decl)> {
    let (ident, decl) = match item {
        Item::Struct(s) => {
            let decl = match &s.fields {
                Fields::Named(fields) => Decl::Aggregate {
                    fields: fields.clone(),
                    generic: !s.generics.params.is_empty(),
                },
                Fields::Unnamed(_) => Decl::Opaque(DeclKind::TupleStruct),
                Fields::Unit => Decl::Opaque(DeclKind::UnitStruct),
            };
            (&s.ident, decl)
        }
        Item::Enum(e) => (&e.ident, Decl::Opaque(DeclKind::Enum)),
        Item::Union(u) => (&u.ident, Decl::Opaque(DeclKind::Union)),
        Item::Type(t) => (&t.ident, Decl::Alias(t.ty.clone())),
        Item::Trait(t) => (&t.ident, Decl::Opaque(DeclKind::Trait)),
        Item::Fn(f) => (&f.sig.ident, Decl::Opaque(DeclKind::Function)),
        Item::Const(c) => (&c.ident, Decl::Opaque(DeclKind::Const)),
        Item::Static(s) => (&s.ident, Decl::Opaque(DeclKind::Static)),
        _ => return None,
    };
    Some((ident.to_string(), decl))
}

/// Returns the local name a `type` alias points at, if it is a plain
/// single-segment path.
fn alias_target(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(p) if p.qself.is_none() && p.path.segments.len() == 1 => {
            let segment = p.path.segments.first()?;
            segment
                .arguments
                .is_none()
                .then(|| segment.ident.to_string())
        }
        _ => None,
    }
}

fn collect_imports(
    tree: &UseTree,
    prefix: &mut Vec<String>,
    imports: &mut HashMap<String, Vec<String>>,
) {
    match tree {
        UseTree::Path(path) => {
            prefix.push(path.ident.to_string());
            collect_imports(&path.tree, prefix, imports);
            prefix.pop();
        }
        UseTree::Name(name) => {
            let ident = name.ident.to_string();
            if ident == "self" {
                if let Some(last) = prefix.last() {
                    imports.insert(last.clone(), prefix.clone());
                }
            } else {
                let mut full = prefix.clone();
                full.push(ident.clone());
                imports.insert(ident, full);
            }
        }
        UseTree::Rename(rename) => {
            let ident = rename.ident.to_string();
            let mut full = prefix.clone();
            if ident != "self" {
                full.push(ident);
            }
            if rename.rename != "_" {
                imports.insert(rename.rename.to_string(), full);
            }
        }
        UseTree::Glob(_) => {}
        UseTree::Group(group) => {
            for item in &group.items {
                collect_imports(item, prefix, imports);
            }
        }
    }
}
