use std::path::{Path, PathBuf};

use genopts::manifest::errors::ManifestError;
use genopts::manifest::load_manifest;
use genopts::{Action, DefaultValue, Registry, ValueType, WILDCARD};

#[path = "common/mod.rs"]
mod common;

use common::flags;

const TOML_MANIFEST: &str = r#"
[[option]]
spellings = ["--verbose", "-v"]
action = "store_true"

[[option]]
spellings = ["--schema"]
tags = ["schema"]
type = "abspath"
default = "codegen/schema.yml"
help = "Schema file to load"

[[option]]
spellings = ["--jobs", "-j"]
tags = ["ql", "trap"]
default = "4"
"#;

const YAML_MANIFEST: &str = r#"
option:
  - spellings: ["--trap-output"]
    tags: [trap]
    type: abspath
    required: true
  - spellings: ["--dry-run"]
    action: store_true
    default: false
    dest: dry
"#;

const JSON_MANIFEST: &str = r#"
{
  "option": [
    { "spellings": ["--dbscheme"], "tags": ["dbscheme"], "type": "abspath", "default": "/abs/swift.dbscheme" },
    { "spellings": ["--codeql-binary"], "tags": ["ql"], "default": "codeql" }
  ]
}
"#;

#[test]
fn toml_manifest_declares_in_file_order() {
    let path = common::write_manifest_file("manifest_order.toml", TOML_MANIFEST);
    let mut registry = Registry::new();

    let count = load_manifest(&path, Path::new("/project"), &mut registry).expect("load toml");

    assert_eq!(count, 3);
    assert_eq!(registry.len(), 3);
    assert_eq!(flags(&registry.get(["schema"])), ["--verbose", "--schema"]);
    assert_eq!(flags(&registry.get(["trap"])), ["--verbose", "--jobs"]);

    let verbose = &registry.tagged(WILDCARD)[0];
    assert_eq!(verbose.directives().action, Action::StoreTrue);

    let schema = &registry.tagged("schema")[0];
    assert_eq!(schema.directives().value_type, ValueType::AbsPath);
    assert_eq!(
        schema.directives().default,
        Some(DefaultValue::Path(PathBuf::from("/project/codegen/schema.yml")))
    );
    assert_eq!(schema.directives().help.as_deref(), Some("Schema file to load"));

    let jobs = &registry.tagged("ql")[0];
    assert_eq!(
        jobs.directives().default,
        Some(DefaultValue::Text("4".to_string()))
    );
}

#[test]
fn yaml_manifest_loads() {
    let path = common::write_manifest_file("manifest_trap.yaml", YAML_MANIFEST);
    let mut registry = Registry::new();

    load_manifest(&path, Path::new("/project"), &mut registry).expect("load yaml");

    let trap = &registry.tagged("trap")[0];
    assert!(trap.directives().required);
    assert_eq!(trap.directives().default, None);

    let dry = &registry.tagged(WILDCARD)[0];
    assert_eq!(dry.dest(), "dry");
    assert_eq!(dry.directives().default, Some(DefaultValue::Flag(false)));
}

#[test]
fn json_manifest_loads_and_keeps_absolute_defaults() {
    let path = common::write_manifest_file("manifest_ql.json", JSON_MANIFEST);
    let mut registry = Registry::new();

    load_manifest(&path, Path::new("/project"), &mut registry).expect("load json");

    assert_eq!(
        registry.tagged("dbscheme")[0].directives().default,
        Some(DefaultValue::Path(PathBuf::from("/abs/swift.dbscheme")))
    );
    assert_eq!(flags(&registry.get(["ql"])), ["--codeql-binary"]);
}

#[test]
fn manifest_extends_existing_registry() {
    let path = common::write_manifest_file("manifest_extend.yml", YAML_MANIFEST);
    let mut registry = genopts::builtin::codegen_registry(Path::new("/project"));

    load_manifest(&path, Path::new("/project"), &mut registry).expect("load yml");

    assert_eq!(
        flags(&registry.get(["trap"])),
        ["--verbose", "--dry-run", "--trap-output", "--trap-output"]
    );
}

#[test]
fn unsupported_extension_is_rejected() {
    let path = common::write_manifest_file("manifest.ini", "[option]");
    let mut registry = Registry::new();

    let err = load_manifest(&path, Path::new("/project"), &mut registry).unwrap_err();

    assert!(matches!(err, ManifestError::UnsupportedFormat(_)));
    assert!(registry.is_empty());
}

#[test]
fn missing_file_is_a_file_error() {
    let mut registry = Registry::new();

    let err = load_manifest("out/does_not_exist.toml", Path::new("/"), &mut registry).unwrap_err();

    assert!(matches!(err, ManifestError::FileError(_)));
}

#[test]
fn malformed_manifest_registers_nothing() {
    let path = common::write_manifest_file(
        "manifest_bad.toml",
        r#"
[[option]]
spellings = ["--ok"]

[[option]]
spellings = ["--bad"]
action = "append"
"#,
    );
    let mut registry = Registry::new();

    let err = load_manifest(&path, Path::new("/project"), &mut registry).unwrap_err();

    assert!(matches!(err, ManifestError::ParseError { .. }));
    assert!(registry.is_empty());
}

#[test]
fn unknown_fields_are_rejected() {
    let path = common::write_manifest_file(
        "manifest_unknown.json",
        r#"{ "option": [ { "spellings": ["--x"], "nargs": 2 } ] }"#,
    );
    let mut registry = Registry::new();

    let err = load_manifest(&path, Path::new("/project"), &mut registry).unwrap_err();

    assert!(matches!(err, ManifestError::ParseError { .. }));
}
