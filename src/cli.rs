use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{self, LoadedConfig};
use crate::project::finish::print_next_steps;
use crate::project::framework::Framework;
use crate::project::options::ToolSelection;
use crate::project::package_manager::PackageManager;
use crate::project::templates::TemplateSource;
use crate::project::{ScaffoldContext, scaffold};
use crate::resolve::{
    AcceptDefaults, InquirePrompter, PartialOptions, Prompter, Resolution, resolve,
};

const PROJECT_ROOT_ENV: &str = "RWAPP_PROJECT_ROOT";
const TEMPLATES_ENV: &str = "RWAPP_TEMPLATES";
const GIT_ENV: &str = "RWAPP_GIT";
const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Root CLI for create-rwapp
#[derive(Debug, Parser)]
#[command(name = "create-rwapp", version)]
#[command(about = "A CLI to create a new web project with a specified framework.")]
pub struct Cli {
    /// Name of the directory to create
    pub project_name: Option<String>,

    /// Starter template
    #[arg(short, long, value_enum)]
    pub framework: Option<Framework>,

    /// Add Tailwind CSS
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub tailwind: Option<bool>,

    /// Add ESLint
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub eslint: Option<bool>,

    /// Use Google's ESLint config (needs --eslint)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub google: Option<bool>,

    /// Add Vitest for unit testing
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub vitest: Option<bool>,

    /// Add Playwright for end-to-end testing
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub playwright: Option<bool>,

    /// Add Prettier
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub prettier: Option<bool>,

    /// Initialize a git repository
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub git: Option<bool>,

    /// Accept defaults for everything not given on the command line
    #[arg(short, long)]
    pub yes: bool,

    /// Package manager shown in the next steps
    #[arg(long, value_enum)]
    pub pm: Option<PackageManager>,

    /// Copy templates from this directory instead of the built-in set
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl Cli {
    fn tools(&self) -> ToolSelection<Option<bool>> {
        ToolSelection {
            tailwind: self.tailwind,
            eslint: self.eslint,
            eslint_google: self.google,
            vitest: self.vitest,
            playwright: self.playwright,
            prettier: self.prettier,
            git: self.git,
        }
    }
}

/// Parse, dispatch and map the outcome to a process exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let working_dir = working_dir()?;
    let config = config::load_project_config_from_dir(&working_dir)?;
    if let Some(loaded) = &config {
        trace!("using config {}", loaded.path.display());
    }

    let partial = partial_options(&cli, config.as_ref());
    let mut prompter: Box<dyn Prompter> = if cli.yes {
        Box::new(AcceptDefaults)
    } else {
        Box::new(InquirePrompter)
    };
    let options = match resolve(partial, prompter.as_mut())? {
        Resolution::Ready(options) => options,
        Resolution::Cancelled => {
            println!("Operation cancelled.");
            return Ok(());
        }
    };

    let ctx = ScaffoldContext {
        working_dir,
        templates: template_source(cli.templates, config.as_ref()),
        git_program: git_program(),
    };
    let outcome = scaffold(&ctx, &options)?;
    print_next_steps(&options, &outcome);
    Ok(())
}

/// CLI flags first, then the config file, then the invoking package manager.
fn partial_options(cli: &Cli, config: Option<&LoadedConfig>) -> PartialOptions {
    let data = config.map(|loaded| &loaded.data);
    let tools = match data {
        Some(data) => cli.tools().or(&data.defaults),
        None => cli.tools(),
    };

    PartialOptions {
        name: cli.project_name.clone(),
        framework: cli.framework.or(data.and_then(|d| d.framework)),
        tools,
        package_manager: cli
            .pm
            .or(data.and_then(|d| d.package_manager))
            .or_else(detected_package_manager),
    }
}

fn working_dir() -> Result<PathBuf> {
    match env::var_os(PROJECT_ROOT_ENV) {
        Some(root) => Ok(PathBuf::from(root)),
        None => env::current_dir().context("resolving current directory"),
    }
}

fn template_source(flag: Option<PathBuf>, config: Option<&LoadedConfig>) -> TemplateSource {
    flag.or_else(|| env::var_os(TEMPLATES_ENV).map(PathBuf::from))
        .or_else(|| config.and_then(LoadedConfig::templates_dir))
        .map_or(TemplateSource::Embedded, TemplateSource::Directory)
}

fn git_program() -> OsString {
    env::var_os(GIT_ENV).unwrap_or_else(|| OsString::from("git"))
}

fn detected_package_manager() -> Option<PackageManager> {
    let agent = env::var(USER_AGENT_ENV).ok()?;
    PackageManager::from_user_agent(&agent)
}
