use serde::Deserialize;

use crate::error::ScaffoldError;
use crate::project::framework::Framework;
use crate::project::package_manager::PackageManager;

/// One optional tooling integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Tailwind,
    Eslint,
    EslintGoogle,
    Vitest,
    Playwright,
    Prettier,
    Git,
}

impl Toggle {
    /// Prompt order. `EslintGoogle` must come after `Eslint`.
    pub const ALL: [Toggle; 7] = [
        Toggle::Tailwind,
        Toggle::Eslint,
        Toggle::EslintGoogle,
        Toggle::Vitest,
        Toggle::Playwright,
        Toggle::Prettier,
        Toggle::Git,
    ];

    pub fn question(self) -> &'static str {
        match self {
            Self::Tailwind => "Add Tailwind CSS?",
            Self::Eslint => "Add ESLint for code linting?",
            Self::EslintGoogle => "Use Google's ESLint config?",
            Self::Vitest => "Add Vitest for Unit Testing?",
            Self::Playwright => "Add Playwright for E2E Testing?",
            Self::Prettier => "Add Prettier for code formatting?",
            Self::Git => "Initialize a new git repository?",
        }
    }
}

/// A value per toggle: `Option<bool>` while resolving, `bool` once resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(
    default,
    deny_unknown_fields,
    bound(deserialize = "T: Deserialize<'de> + Default")
)]
pub struct ToolSelection<T> {
    pub tailwind: T,
    pub eslint: T,
    #[serde(alias = "google")]
    pub eslint_google: T,
    pub vitest: T,
    pub playwright: T,
    pub prettier: T,
    pub git: T,
}

impl<T> ToolSelection<T> {
    pub fn get(&self, toggle: Toggle) -> &T {
        match toggle {
            Toggle::Tailwind => &self.tailwind,
            Toggle::Eslint => &self.eslint,
            Toggle::EslintGoogle => &self.eslint_google,
            Toggle::Vitest => &self.vitest,
            Toggle::Playwright => &self.playwright,
            Toggle::Prettier => &self.prettier,
            Toggle::Git => &self.git,
        }
    }

    pub fn get_mut(&mut self, toggle: Toggle) -> &mut T {
        match toggle {
            Toggle::Tailwind => &mut self.tailwind,
            Toggle::Eslint => &mut self.eslint,
            Toggle::EslintGoogle => &mut self.eslint_google,
            Toggle::Vitest => &mut self.vitest,
            Toggle::Playwright => &mut self.playwright,
            Toggle::Prettier => &mut self.prettier,
            Toggle::Git => &mut self.git,
        }
    }
}

impl ToolSelection<Option<bool>> {
    /// Fill every unset toggle from `fallback`.
    pub fn or(mut self, fallback: &ToolSelection<Option<bool>>) -> Self {
        for toggle in Toggle::ALL {
            let slot = self.get_mut(toggle);
            if slot.is_none() {
                *slot = *fallback.get(toggle);
            }
        }
        self
    }
}

/// Fully resolved answers for one run. Nothing downstream prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub name: String,
    pub framework: Framework,
    pub tools: ToolSelection<bool>,
    pub package_manager: PackageManager,
}

/// Reject names that would not land in a single new directory of the working dir.
pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    let reason = if name.trim().is_empty() {
        Some("name must not be empty")
    } else if name == "." || name == ".." {
        Some("name must not refer to an existing directory")
    } else if name.contains(['/', '\\']) {
        Some("name must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ScaffoldError::InvalidProjectName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
