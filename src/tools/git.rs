use std::ffi::OsStr;

use anyhow::Result;

use crate::project::Project;
use crate::utils::fs::write_file;
use crate::utils::shell::run_silent;

pub const IGNORE_FILE: &str = ".gitignore";

const GITIGNORE: &str = "node_modules
dist
.env
.env.*
*.local

# Editor directories and files
.vscode
.idea
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?
";

/// Write `.gitignore` and run `git init` in the project.
///
/// Returns whether the repository was initialized. A failing git is only a warning.
pub fn apply(project: &Project, git_program: &OsStr) -> Result<bool> {
    step!("Initializing Git repository...");
    write_file(&project.path(IGNORE_FILE), GITIGNORE)?;

    match run_silent(git_program, &["init"], project.dir) {
        Ok(()) => Ok(true),
        Err(err) => {
            warn!("Could not initialize git repository.");
            trace!("{err:#}");
            Ok(false)
        }
    }
}
