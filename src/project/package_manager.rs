use clap::ValueEnum;
use serde::Deserialize;

/// JavaScript package manager named in the printed next steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn name(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    pub fn executable(self) -> &'static str {
        self.name()
    }

    /// Parse the `npm_config_user_agent` value package managers export to the
    /// processes they launch, e.g. `pnpm/8.15.1 npm/? node/v20.11.0 linux x64`.
    pub fn from_user_agent(agent: &str) -> Option<Self> {
        let (name, _version) = agent.split_whitespace().next()?.split_once('/')?;
        match name.to_ascii_lowercase().as_str() {
            "npm" => Some(Self::Npm),
            "pnpm" => Some(Self::Pnpm),
            "yarn" => Some(Self::Yarn),
            "bun" => Some(Self::Bun),
            _ => None,
        }
    }

    pub fn install_command(self) -> String {
        match self {
            Self::Yarn => self.executable().to_string(),
            Self::Npm | Self::Pnpm | Self::Bun => format!("{} install", self.executable()),
        }
    }

    pub fn run_command(self, script: &str) -> String {
        match self {
            Self::Yarn => format!("{} {script}", self.executable()),
            Self::Npm | Self::Pnpm | Self::Bun => format!("{} run {script}", self.executable()),
        }
    }
}
