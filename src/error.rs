use std::path::PathBuf;

use thiserror::Error;

use crate::project::framework::Framework;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Directory '{name}' already exists.")]
    DestinationExists { name: String, path: PathBuf },

    #[error("No `{framework}` template found in {location}")]
    UnknownTemplate {
        framework: Framework,
        location: String,
    },

    #[error("{} does not contain a JSON object", path.display())]
    ManifestNotObject { path: PathBuf },

    #[error("`{field}` in {} is not a JSON object", path.display())]
    ManifestFieldNotObject { path: PathBuf, field: &'static str },

    #[error("Invalid project name `{name}`: {reason}")]
    InvalidProjectName { name: String, reason: &'static str },
}
