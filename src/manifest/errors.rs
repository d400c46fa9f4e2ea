use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Failed to parse manifest {file}: {reason}.")]
    ParseError { file: String, reason: String },

    #[error("Unsupported manifest format: {0}. Expected toml, yaml or json.")]
    UnsupportedFormat(String),
}
