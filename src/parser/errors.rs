use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Invalid flag spelling {spelling:?} for option {option:?}: {reason}.")]
    InvalidSpelling {
        option: Vec<String>,
        spelling: String,
        reason: String,
    },

    #[error("Unsupported directives for option {option:?}: {reason}.")]
    Unsupported { option: Vec<String>, reason: String },

    #[error("Conflicting {kind} {name:?}: it is already taken.")]
    Conflict { kind: &'static str, name: String },
}
