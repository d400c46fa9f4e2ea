pub mod errors;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::option::{Action, CliOption, DefaultValue, Directives, ValueType};
use crate::registry::Registry;
use errors::ManifestError;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "option")]
    options: Vec<OptionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DefaultEntry {
    Flag(bool),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionEntry {
    spellings: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    action: Action,
    #[serde(default, rename = "type")]
    value_type: ValueType,
    default: Option<DefaultEntry>,
    #[serde(default)]
    required: bool,
    dest: Option<String>,
    help: Option<String>,
}

impl OptionEntry {
    fn into_option(self, root: &Path) -> CliOption {
        let default = self.default.map(|d| match (d, self.value_type) {
            (DefaultEntry::Flag(b), _) => DefaultValue::Flag(b),
            (DefaultEntry::Text(s), ValueType::AbsPath) => DefaultValue::Path(root.join(s)),
            (DefaultEntry::Text(s), ValueType::Text) => DefaultValue::Text(s),
        });

        let directives = Directives {
            action: self.action,
            value_type: self.value_type,
            default,
            required: self.required,
            dest: self.dest,
            help: self.help,
        };

        CliOption::new(self.spellings, directives).with_tags(self.tags)
    }
}

fn parse_manifest(file: &str, content: &str, ext: &str) -> Result<Manifest, ManifestError> {
    let parse_error = |reason: String| ManifestError::ParseError {
        file: file.to_string(),
        reason,
    };

    match ext {
        "toml" => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        "yaml" | "yml" => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
        "json" => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        _ => Err(ManifestError::UnsupportedFormat(ext.to_string())),
    }
}

/// Declare every option in the manifest at `path` into `registry`, in file order.
///
/// Relative string defaults of `abspath` options are joined onto `root`.
/// Returns how many options were declared. Nothing is registered if the file
/// fails to load.
pub fn load_manifest(
    path: impl AsRef<Path>,
    root: &Path,
    registry: &mut Registry,
) -> Result<usize, ManifestError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !matches!(ext.as_str(), "toml" | "yaml" | "yml" | "json") {
        return Err(ManifestError::UnsupportedFormat(display));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ManifestError::FileError(format!("failed to open file {display}: {e}")))?;
    let manifest = parse_manifest(&display, &content, &ext)?;

    let count = manifest.options.len();
    for entry in manifest.options {
        log::debug!("manifest {display}: declaring {:?}", entry.spellings);
        registry.register(entry.into_option(root));
    }
    log::info!("loaded {count} option(s) from {display}");

    Ok(count)
}
