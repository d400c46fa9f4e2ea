use std::ffi::OsString;
use std::path::PathBuf;

use serde::Deserialize;

/// What the parser does when it meets the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Presence of the flag sets the destination to `true`.
    StoreTrue,
    /// The flag takes one value which is stored.
    #[default]
    Store,
}

/// Converter applied to the raw value before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Text,
    /// Resolve the value into an absolute path against the working directory,
    /// following symlinks and dropping `.` and `..`.
    AbsPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    Text(String),
    Path(PathBuf),
    Flag(bool),
}

impl DefaultValue {
    pub fn to_os_string(&self) -> OsString {
        match self {
            DefaultValue::Text(s) => OsString::from(s),
            DefaultValue::Path(p) => p.clone().into_os_string(),
            DefaultValue::Flag(b) => OsString::from(b.to_string()),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Text(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::Text(value)
    }
}

impl From<PathBuf> for DefaultValue {
    fn from(value: PathBuf) -> Self {
        DefaultValue::Path(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Flag(value)
    }
}

/// Parser directives carried by an option and handed to the parser untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directives {
    pub action: Action,
    pub value_type: ValueType,
    pub default: Option<DefaultValue>,
    pub required: bool,
    pub dest: Option<String>,
    pub help: Option<String>,
}

impl Directives {
    pub fn store() -> Self {
        Self::default()
    }

    pub fn store_true() -> Self {
        Self {
            action: Action::StoreTrue,
            ..Self::default()
        }
    }

    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn default_value(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn dest(mut self, dest: impl Into<String>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
