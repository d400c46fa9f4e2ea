pub mod args;
pub mod builtin;
pub mod commands;
pub mod error;
pub mod manifest;
pub mod option;
pub mod parser;
pub mod registry;
pub mod visuals;

pub use option::{Action, ArgSink, CliOption, DefaultValue, Directives, ValueType};
pub use registry::{Registry, Selection, WILDCARD};
