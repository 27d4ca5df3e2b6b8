use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::project::framework::Framework;
use crate::project::options::ToolSelection;
use crate::project::package_manager::PackageManager;

const CONFIG_CANDIDATES: &[(&str, ConfigFormat)] = &[
    ("rwapp.yml", ConfigFormat::Yaml),
    ("rwapp.yaml", ConfigFormat::Yaml),
    ("rwapp.toml", ConfigFormat::Toml),
];

#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub data: RwappConfig,
}

impl LoadedConfig {
    /// Template directory, with relative paths resolved against the config file.
    pub fn templates_dir(&self) -> Option<PathBuf> {
        let templates = self.data.templates.as_ref()?;
        let base = self.path.parent().unwrap_or_else(|| Path::new("."));
        Some(base.join(templates))
    }
}

/// Defaults applied to every project created from this directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RwappConfig {
    pub framework: Option<Framework>,
    pub package_manager: Option<PackageManager>,
    pub templates: Option<PathBuf>,
    pub defaults: ToolSelection<Option<bool>>,
}

pub fn load_project_config_from_dir(base_dir: &Path) -> Result<Option<LoadedConfig>> {
    for (file, format) in CONFIG_CANDIDATES {
        let path = base_dir.join(file);
        if !path.exists() {
            continue;
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        let data = match format {
            ConfigFormat::Yaml => parse_yaml_str(&content)
                .with_context(|| format!("parsing YAML config at {}", path.display()))?,
            ConfigFormat::Toml => parse_toml_str(&content)
                .with_context(|| format!("parsing TOML config at {}", path.display()))?,
        };
        return Ok(Some(LoadedConfig { path, data }));
    }
    Ok(None)
}

pub(crate) fn parse_yaml_str(content: &str) -> Result<RwappConfig> {
    // An empty YAML file is a null document, not an empty mapping.
    if content.trim().is_empty() {
        return Ok(RwappConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

pub(crate) fn parse_toml_str(content: &str) -> Result<RwappConfig> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_is_not_an_error() {
        let tmp = tempdir().expect("temp dir");
        assert!(
            load_project_config_from_dir(tmp.path())
                .expect("lookup")
                .is_none()
        );
    }

    #[test]
    fn parses_yaml_defaults() {
        let tmp = tempdir().expect("temp dir");
        let yaml = r#"framework: vue-js
package_manager: pnpm
templates: ./my-templates
defaults:
  eslint: true
  google: true
  git: false
"#;
        fs::write(tmp.path().join("rwapp.yml"), yaml).expect("write yaml");

        let loaded = load_project_config_from_dir(tmp.path())
            .expect("parse yaml")
            .expect("config present");

        assert_eq!(loaded.data.framework, Some(Framework::VueJs));
        assert_eq!(loaded.data.package_manager, Some(PackageManager::Pnpm));
        assert_eq!(loaded.data.defaults.eslint, Some(true));
        assert_eq!(loaded.data.defaults.eslint_google, Some(true));
        assert_eq!(loaded.data.defaults.git, Some(false));
        assert_eq!(loaded.data.defaults.tailwind, None);
        assert_eq!(
            loaded.templates_dir(),
            Some(tmp.path().join("./my-templates"))
        );
    }

    #[test]
    fn parses_toml_defaults() {
        let tmp = tempdir().expect("temp dir");
        let toml = r#"framework = "lit-ts"

[defaults]
tailwind = true
prettier = true
"#;
        fs::write(tmp.path().join("rwapp.toml"), toml).expect("write toml");

        let loaded = load_project_config_from_dir(tmp.path())
            .expect("parse toml")
            .expect("config present");

        assert_eq!(loaded.data.framework, Some(Framework::LitTs));
        assert_eq!(loaded.data.package_manager, None);
        assert_eq!(loaded.data.defaults.tailwind, Some(true));
        assert_eq!(loaded.data.defaults.prettier, Some(true));
        assert_eq!(loaded.templates_dir(), None);
    }

    #[test]
    fn yaml_wins_over_toml() {
        let tmp = tempdir().expect("temp dir");
        fs::write(tmp.path().join("rwapp.yaml"), "framework: react-js\n").expect("write yaml");
        fs::write(tmp.path().join("rwapp.toml"), "framework = \"vue-ts\"\n").expect("write toml");

        let loaded = load_project_config_from_dir(tmp.path())
            .expect("parse")
            .expect("config present");
        assert!(loaded.path.ends_with("rwapp.yaml"));
        assert_eq!(loaded.data.framework, Some(Framework::ReactJs));
    }

    #[test]
    fn unknown_keys_are_reported_with_the_file() {
        let tmp = tempdir().expect("temp dir");
        fs::write(tmp.path().join("rwapp.yml"), "defaults:\n  jest: true\n").expect("write yaml");

        let err = load_project_config_from_dir(tmp.path()).expect_err("unknown toggle");
        let message = format!("{err:#}");
        assert!(message.contains("parsing YAML config"), "{message}");
        assert!(message.contains("jest"), "{message}");
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let parsed = parse_yaml_str("\n").expect("empty yaml");
        assert!(parsed.framework.is_none());
        assert_eq!(parsed.defaults, ToolSelection::default());
    }

    #[test]
    fn unknown_framework_is_rejected() {
        assert!(parse_toml_str("framework = \"svelte-ts\"\n").is_err());
    }
}
