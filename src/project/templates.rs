use std::path::{Path, PathBuf};

use anyhow::Result;
use include_dir::{Dir, include_dir};

use crate::error::ScaffoldError;
use crate::project::framework::Framework;
use crate::utils::fs::{copy_dir_recursive, extract_embedded};

static EMBEDDED_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Where framework template trees are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Trees compiled into the binary.
    Embedded,
    /// A directory holding one sub-directory per framework identifier.
    Directory(PathBuf),
}

impl TemplateSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "embedded templates".to_string(),
            Self::Directory(root) => root.display().to_string(),
        }
    }

    /// Copy the template of `framework` to `dest` verbatim.
    pub fn materialize(&self, framework: Framework, dest: &Path) -> Result<()> {
        match self {
            Self::Embedded => {
                let tree = EMBEDDED_TEMPLATES
                    .get_dir(framework.id())
                    .ok_or_else(|| self.unknown(framework))?;
                extract_embedded(tree, dest)
            }
            Self::Directory(root) => {
                let tree = root.join(framework.id());
                if !tree.is_dir() {
                    return Err(self.unknown(framework).into());
                }
                copy_dir_recursive(&tree, dest)
            }
        }
    }

    fn unknown(&self, framework: Framework) -> ScaffoldError {
        ScaffoldError::UnknownTemplate {
            framework,
            location: self.describe(),
        }
    }
}
