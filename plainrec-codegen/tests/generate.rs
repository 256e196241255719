use std::path::{Path, PathBuf};

use plainrec_codegen::{CodegenError, Generator, GeneratorConfig, generate_file};
use plainrec_schema::LoadError;
use quote::ToTokens;

const SCENARIO: &str = r#"
use plainrec_sql as sql;

pub struct User {
    pub Email: sql::NullString,
    pub ConfirmedAt: sql::NullTime,
    pub SignInCount: i32,
}
"#;

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/model")
}

fn module_with(source: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("user.rs"), source).expect("Failed to write source");
    dir
}

fn struct_fields(file: &syn::File, name: &str) -> Vec<(String, String)> {
    file.items
        .iter()
        .find_map(|item| match item {
            syn::Item::Struct(s) if s.ident == name => Some(s),
            _ => None,
        })
        .expect("plain record")
        .fields
        .iter()
        .map(|f| {
            (
                f.ident.as_ref().map(ToString::to_string).unwrap_or_default(),
                f.ty.to_token_stream().to_string().replace(' ', ""),
            )
        })
        .collect()
}

fn function<'a>(file: &'a syn::File, name: &str) -> &'a syn::ItemFn {
    file.items
        .iter()
        .find_map(|item| match item {
            syn::Item::Fn(f) if f.sig.ident == name => Some(f),
            _ => None,
        })
        .expect("generated function")
}

#[test]
fn test_end_to_end_scenario() {
    let dir = module_with(SCENARIO);
    let base = dir.path().join("user.rs");

    let path = generate_file(dir.path(), "User", &base).expect("Failed to generate");
    assert_eq!(path, dir.path().join("user_gen.rs"));

    let output = std::fs::read_to_string(&path).expect("Failed to read output");
    assert!(output.starts_with("// Code generated by plainrec. DO NOT EDIT.\n"));

    let file = syn::parse_file(&output).expect("generated unit parses");
    assert_eq!(
        struct_fields(&file, "User"),
        [
            ("confirmedAt".to_string(), "chrono::DateTime<chrono::Utc>".to_string()),
            ("email".to_string(), "String".to_string()),
            ("signInCount".to_string(), "i32".to_string()),
        ]
    );

    let constructor = function(&file, "new_user");
    assert_eq!(constructor.sig.inputs.len(), 3);

    let adapter = function(&file, "new_from_user");
    let body = adapter.block.to_token_stream().to_string();
    assert!(body.contains("let mut email : String = Default :: default ()"));
    assert!(body.contains("if source . Email . valid { email = source . Email . string ; }"));
    assert!(body.contains("if source . ConfirmedAt . valid { confirmedAt = source . ConfirmedAt . time ; }"));
    assert!(body.contains("User { confirmedAt , email ,"));
    assert!(body.contains("signInCount : source . SignInCount"));

    assert!(output.contains("pub fn ConfirmedAt(&self) -> chrono::DateTime<chrono::Utc>"));
    assert!(output.contains("pub fn Email(&self) -> &String"));
    assert!(output.contains("pub fn SignInCount(&self) -> i32"));
}

#[test]
fn test_fixture_user() {
    let unit = Generator::default()
        .generate(&fixture_dir(), "User")
        .expect("Failed to generate");

    assert_eq!(unit.fields.len(), 43);
    let lowered: Vec<&str> = unit.fields.iter().map(|f| f.lowered_name.as_str()).collect();
    let mut sorted = lowered.clone();
    sorted.sort_unstable();
    assert_eq!(lowered, sorted);
    assert!(lowered.contains(&"id"));
    assert!(lowered.contains(&"confirmationToken"));
    assert_eq!(unit.fields.iter().filter(|f| f.init.is_some()).count(), 11);

    let file = syn::parse_file(&unit.render()).expect("generated unit parses");
    let fields = struct_fields(&file, "User");
    assert!(fields.contains(&("id".to_string(), "Uuid".to_string())));
    assert!(fields.contains(&("createdAt".to_string(), "DateTime<Utc>".to_string())));
    assert!(fields.contains(&("lastSignInIp".to_string(), "IpAddr".to_string())));

    let accessors = file
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(i) if i.trait_.is_none() => Some(i.items.len()),
            _ => None,
        })
        .sum::<usize>();
    assert_eq!(accessors, 43);
}

#[test]
fn test_declaration_order_does_not_change_output() {
    let reordered = r#"
use plainrec_sql as sql;

pub struct User {
    pub SignInCount: i32,
    pub ConfirmedAt: sql::NullTime,
    pub Email: sql::NullString,
}
"#;
    let generator = Generator::default();
    let a = generator
        .generate(module_with(SCENARIO).path(), "User")
        .expect("Failed to generate");
    let b = generator
        .generate(module_with(reordered).path(), "User")
        .expect("Failed to generate");

    let a = a.render();
    let b = b.render();
    let a_struct = &a[..a.find("pub fn new_from_user").expect("adapter")];
    let b_struct = &b[..b.find("pub fn new_from_user").expect("adapter")];
    assert_eq!(a_struct, b_struct);
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = module_with(SCENARIO);
    let base = dir.path().join("user.rs");
    let generator = Generator::new(GeneratorConfig::new().derive("Debug"));

    let path = generator
        .generate_to(dir.path(), "User", &base)
        .expect("Failed to generate");
    let first = std::fs::read(&path).expect("read");
    generator
        .generate_to(dir.path(), "User", &base)
        .expect("Failed to regenerate");
    assert_eq!(std::fs::read(&path).expect("read"), first);
}

#[test]
fn test_unsupported_field_writes_nothing() {
    let dir = module_with(
        r#"
use std::collections::HashMap;

pub struct User {
    pub Name: String,
    pub Attributes: HashMap<String, String>,
}
"#,
    );
    let base = dir.path().join("user.rs");

    let err = generate_file(dir.path(), "User", &base).unwrap_err();
    match err {
        CodegenError::UnsupportedFieldType { field, .. } => assert_eq!(field, "Attributes"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(!dir.path().join("user_gen.rs").exists());
}

#[test]
fn test_resolution_errors_are_propagated() {
    let dir = module_with(SCENARIO);
    let generator = Generator::default();

    let err = generator.generate(dir.path(), "Account").unwrap_err();
    assert!(matches!(
        err,
        CodegenError::Load(LoadError::TypeNotFound { .. })
    ));

    let err = generator.generate(&fixture_dir(), "anonymous").unwrap_err();
    assert!(matches!(
        err,
        CodegenError::Load(LoadError::NotATypeDeclaration { .. })
    ));
}

#[test]
fn test_custom_source_module() {
    let generator = Generator::new(GeneratorConfig::new().source_module("crate::model"));
    let unit = generator
        .generate(module_with(SCENARIO).path(), "User")
        .expect("Failed to generate");
    let output = unit.render();
    assert!(output.contains("use crate::model::*;"));
    assert!(output.contains("pub fn new_from_user(source: crate::model::User) -> User"));
}
