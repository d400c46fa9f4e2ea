use std::path::{Component, Path, PathBuf};

use clap::ArgMatches;
use indexmap::IndexMap;

use crate::option::{Action, ValueType};
use crate::registry::Selection;

/// Value parser for [`ValueType::AbsPath`].
///
/// Relative input is taken against the current directory. The part of the path
/// that exists is canonicalized (symlinks followed), and the rest is normalized
/// lexically, so the path does not have to exist.
pub fn parse_abspath(value: &str) -> Result<PathBuf, std::io::Error> {
    Ok(resolve(&std::path::absolute(value)?))
}

fn resolve(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    let mut on_disk = true;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if on_disk {
                    match dunce::canonicalize(&resolved) {
                        Ok(real) => resolved = real,
                        Err(_) => on_disk = false,
                    }
                }
            }
        }
    }

    resolved
}

/// Read back what clap parsed for each selected option, keyed by destination in
/// selection order. Options with no value (and no default) are left out.
pub fn values(selection: &Selection<'_>, matches: &ArgMatches) -> IndexMap<String, String> {
    let mut out = IndexMap::new();

    for option in selection {
        let dest = option.dest();
        if out.contains_key(&dest) {
            continue;
        }

        let directives = option.directives();
        let value = match (directives.action, directives.value_type) {
            (Action::StoreTrue, _) => matches
                .try_get_one::<bool>(&dest)
                .ok()
                .flatten()
                .map(|b| b.to_string()),
            (Action::Store, ValueType::AbsPath) => matches
                .try_get_one::<PathBuf>(&dest)
                .ok()
                .flatten()
                .map(|p| p.display().to_string()),
            (Action::Store, ValueType::Text) => matches
                .try_get_one::<String>(&dest)
                .ok()
                .flatten()
                .cloned(),
        };

        if let Some(value) = value {
            out.insert(dest, value);
        }
    }

    out
}
