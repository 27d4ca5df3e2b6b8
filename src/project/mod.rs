pub mod finish;
pub mod framework;
pub mod manifest;
pub mod options;
pub mod package_manager;
pub mod templates;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::ScaffoldError;
use crate::project::framework::Framework;
use crate::project::manifest::Manifest;
use crate::project::options::ProjectOptions;
use crate::project::templates::TemplateSource;
use crate::tools::{eslint, git, playwright, prettier, tailwind, vitest};

/// Everything a scaffold run needs from its environment.
#[derive(Debug, Clone)]
pub struct ScaffoldContext {
    /// Directory the new project is created in.
    pub working_dir: PathBuf,
    pub templates: TemplateSource,
    /// Program invoked as `<git> init`.
    pub git_program: OsString,
}

/// A freshly copied project being patched.
#[derive(Debug, Clone, Copy)]
pub struct Project<'a> {
    pub dir: &'a Path,
    pub framework: Framework,
}

impl<'a> Project<'a> {
    pub fn new(dir: &'a Path, framework: Framework) -> Self {
        Self { dir, framework }
    }

    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.join(relative)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub project_dir: PathBuf,
    pub git_initialized: bool,
}

/// Copy the framework template and apply every selected tool patch.
///
/// Fails before touching the filesystem when the destination already exists. Later
/// failures leave the partially written project in place.
pub fn scaffold(ctx: &ScaffoldContext, options: &ProjectOptions) -> Result<Scaffolded> {
    let project_dir = ctx.working_dir.join(&options.name);
    if project_dir.exists() {
        return Err(ScaffoldError::DestinationExists {
            name: options.name.clone(),
            path: project_dir,
        }
        .into());
    }

    println!("\nScaffolding project in {}...", project_dir.display());
    trace!("template source: {}", ctx.templates.describe());
    ctx.templates.materialize(options.framework, &project_dir)?;
    success!("Copied template files.");

    let project = Project::new(&project_dir, options.framework);
    let mut manifest = Manifest::load(&project_dir)?;
    manifest.set_name(&options.name);

    let tools = &options.tools;
    if tools.tailwind {
        tailwind::apply(&project, &mut manifest)?;
    }
    if tools.eslint {
        eslint::apply(&project, &mut manifest, tools.eslint_google)?;
    } else if tools.eslint_google {
        trace!("Google ESLint preset requested without ESLint, ignoring");
    }
    if tools.vitest {
        vitest::apply(&project, &mut manifest)?;
    }
    if tools.playwright {
        playwright::apply(&project, &mut manifest)?;
    }
    if tools.prettier {
        prettier::apply(&project, &mut manifest)?;
    }

    step!("Updating package.json...");
    manifest.save()?;

    let git_initialized = if tools.git {
        git::apply(&project, &ctx.git_program)?
    } else {
        false
    };

    Ok(Scaffolded {
        project_dir,
        git_initialized,
    })
}
