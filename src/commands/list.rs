use crate::option::{Action, CliOption, DefaultValue, ValueType};
use crate::registry::Registry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub spellings: String,
    pub tags: String,
    pub action: &'static str,
    pub value_type: &'static str,
    pub default: String,
    pub required: bool,
    pub dest: String,
}

impl From<&CliOption> for OptionRow {
    fn from(option: &CliOption) -> Self {
        let directives = option.directives();
        let tags = if option.is_wildcard() {
            crate::registry::WILDCARD.to_string()
        } else {
            option
                .tags()
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let default = match &directives.default {
            Some(DefaultValue::Text(s)) => s.clone(),
            Some(DefaultValue::Path(p)) => p.display().to_string(),
            Some(DefaultValue::Flag(b)) => b.to_string(),
            None => String::new(),
        };

        Self {
            spellings: option.spellings().join(", "),
            tags,
            action: match directives.action {
                Action::StoreTrue => "store_true",
                Action::Store => "store",
            },
            value_type: match directives.value_type {
                ValueType::Text => "text",
                ValueType::AbsPath => "abspath",
            },
            default,
            required: directives.required,
            dest: option.dest(),
        }
    }
}

/// One row per option in the selection for `tags`, duplicates included.
pub fn list_options<T: AsRef<str>>(registry: &Registry, tags: &[T]) -> Vec<OptionRow> {
    registry
        .get(tags)
        .iter()
        .map(|option| OptionRow::from(&**option))
        .collect()
}
