pub mod list;
pub mod parse;

use crate::args::{Args, SelectArgs};
use crate::builtin;
use crate::error::GenoptsError;
use crate::manifest::load_manifest;
use crate::registry::Registry;
use crate::visuals;

pub use list::{OptionRow, list_options};
pub use parse::parse_args;

/// Built-ins first (unless switched off), then each manifest in the order given.
pub fn build_registry(select: &SelectArgs) -> Result<Registry, GenoptsError> {
    let mut registry = Registry::new();
    if !select.no_builtin {
        builtin::declare_codegen_options(&mut registry, &select.root);
    }
    for manifest in &select.manifest {
        load_manifest(manifest, &select.root, &mut registry)?;
    }
    Ok(registry)
}

pub fn run(args: &Args) -> Result<(), GenoptsError> {
    let registry = build_registry(&args.select)?;
    let tags = &args.select.tags;

    if args.argv.is_empty() {
        let rows = list_options(&registry, tags);
        if !args.output.quiet {
            visuals::print_summary(&registry, tags, rows.len());
        }
        visuals::print_options(&rows);
    } else {
        let values = parse_args(&registry, tags, &args.output.prog, &args.argv)?;
        visuals::print_values(&values);
    }

    Ok(())
}
