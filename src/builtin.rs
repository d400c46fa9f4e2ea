//! The code generator's own option set.

use std::path::Path;

use crate::option::{Directives, ValueType};
use crate::registry::Registry;

pub const SCHEMA: &str = "schema";
pub const DBSCHEME: &str = "dbscheme";
pub const QL: &str = "ql";
pub const TRAP: &str = "trap";

const NO_TAGS: [&str; 0] = [];

fn abspath() -> Directives {
    Directives::store().value_type(ValueType::AbsPath)
}

/// Declare the generator options into `registry`, with path defaults under `root`.
pub fn declare_codegen_options(registry: &mut Registry, root: &Path) {
    registry.declare(
        ["--verbose", "-v"],
        Directives::store_true().help("Log what each stage is doing"),
        NO_TAGS,
    );
    registry.declare(
        ["--schema"],
        abspath()
            .default_value(root.join("codegen/schema.yml"))
            .help("Schema file to load"),
        [SCHEMA],
    );
    registry.declare(
        ["--dbscheme"],
        abspath()
            .default_value(root.join("ql/lib/swift.dbscheme"))
            .help("Output dbscheme file"),
        [DBSCHEME],
    );
    registry.declare(
        ["--ql-output"],
        abspath()
            .default_value(root.join("ql/lib/codeql/swift/generated"))
            .help("Directory for generated QL classes"),
        [QL],
    );
    registry.declare(
        ["--ql-stub-output"],
        abspath()
            .default_value(root.join("ql/lib/codeql/swift/elements"))
            .help("Directory for user-editable QL stubs"),
        [QL],
    );
    registry.declare(
        ["--codeql-binary"],
        Directives::store()
            .default_value("codeql")
            .help("CodeQL executable used to format generated QL"),
        [QL],
    );
    registry.declare(
        ["--trap-output"],
        abspath().required(true).help("Directory for generated trap code"),
        [TRAP],
    );
}

/// A fresh registry holding only the generator options.
pub fn codegen_registry(root: &Path) -> Registry {
    let mut registry = Registry::new();
    declare_codegen_options(&mut registry, root);
    registry
}
