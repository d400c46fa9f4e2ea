use thiserror::Error;

use crate::manifest::errors::ManifestError;
use crate::parser::errors::BuildError;

#[derive(Debug, Error)]
pub enum GenoptsError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Parse(#[from] clap::Error),
}
