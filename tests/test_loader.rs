mod common;

use common::{simple_manifest, GeneratorRoot};
use scaffgen::generators::{builtin_root, Generator, GeneratorLoader, GENERATORS_DIR_ENV};
use scaffgen::Error;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

fn load(roots: &[&GeneratorRoot]) -> scaffgen::generators::GeneratorRegistry {
    GeneratorLoader::with_roots(roots.iter().map(|r| r.path().to_path_buf()).collect())
        .load()
        .unwrap()
}

#[test]
fn test_generators_from_both_roots_are_registered() {
    let builtins = GeneratorRoot::new();
    builtins.add_package("controller", &simple_manifest("controller"));
    let local = GeneratorRoot::new();
    local.add_package("foobar", &simple_manifest("foobar"));

    let registry = load(&[&builtins, &local]);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names(), vec!["controller", "foobar"]);
    assert!(registry.get("controller").is_some());
    assert!(registry.get("foobar").is_some());
}

#[test]
fn test_local_generator_overrides_builtin_with_same_name() {
    let builtins = GeneratorRoot::new();
    builtins.add_package("controller", &simple_manifest("controller"));
    let local = GeneratorRoot::new();
    local.add_package("controller", &simple_manifest("controller"));

    let registry = load(&[&builtins, &local]);

    assert_eq!(registry.len(), 1);
    let generator = registry.get("controller").unwrap();
    assert!(generator.template().starts_with(local.path()));
}

#[test]
fn test_non_conforming_package_is_skipped_silently() {
    let local = GeneratorRoot::new();
    local.add_package("broken", r#"{ "description": "not a generator" }"#);
    local.add_package("foobar", &simple_manifest("foobar"));

    let registry = load(&[&local]);

    assert_eq!(registry.names(), vec!["foobar"]);
}

#[test]
fn test_manifest_holding_a_collection_is_skipped() {
    let local = GeneratorRoot::new();
    local.add_package(
        "multi",
        r#"[{ "name": "a", "template": "template" }, { "name": "b", "template": "template" }]"#,
    );
    local.add_package("foobar", &simple_manifest("foobar"));

    let registry = load(&[&local]);

    assert_eq!(registry.names(), vec!["foobar"]);
}

#[test]
fn test_malformed_manifest_aborts_the_whole_scan() {
    let local = GeneratorRoot::new();
    local.add_package("broken", "{ not json");
    local.add_package("foobar", &simple_manifest("foobar"));

    let err = GeneratorLoader::with_roots(vec![local.path().to_path_buf()])
        .load()
        .unwrap_err();

    assert!(matches!(err, Error::ModuleLoad { .. }));
}

#[test]
fn test_directories_without_manifest_are_ignored() {
    let local = GeneratorRoot::new();
    fs::create_dir_all(local.path().join("docs")).unwrap();
    local.add_package("foobar", &simple_manifest("foobar"));

    let registry = load(&[&local]);

    assert_eq!(registry.names(), vec!["foobar"]);
}

#[test]
fn test_missing_roots_yield_an_empty_registry() {
    let registry = GeneratorLoader::with_roots(vec![PathBuf::from("/does/not/exist")])
        .load()
        .unwrap();
    assert!(registry.is_empty());
}

#[test]
#[serial]
fn test_default_roots_pick_up_local_generators() {
    let empty_builtins = GeneratorRoot::new();
    std::env::set_var(GENERATORS_DIR_ENV, empty_builtins.path());

    let project = tempfile::TempDir::new().unwrap();
    let package = project.path().join("lib/generators/foobar");
    fs::create_dir_all(&package).unwrap();
    fs::write(package.join("generator.json"), simple_manifest("foobar")).unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(project.path()).unwrap();
    let registry = GeneratorLoader::new().load();
    std::env::set_current_dir(original).unwrap();
    std::env::remove_var(GENERATORS_DIR_ENV);

    assert!(registry.unwrap().get("foobar").is_some());
}

#[test]
#[serial]
fn test_builtin_root_honors_environment_override() {
    std::env::set_var(GENERATORS_DIR_ENV, "/opt/scaffgen/generators");
    let root = builtin_root();
    std::env::remove_var(GENERATORS_DIR_ENV);

    assert_eq!(root, PathBuf::from("/opt/scaffgen/generators"));
}
