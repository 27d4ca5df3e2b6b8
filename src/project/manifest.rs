use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::error::ScaffoldError;
use crate::utils::fs::{read_file, write_file};

pub const MANIFEST_FILE: &str = "package.json";

/// In-memory `package.json` of the project being scaffolded.
///
/// Dev dependencies contributed by the tool patches are collected separately and
/// merged into `devDependencies` when the manifest is saved, so keys coming from
/// the template keep their position and only same-named keys are overwritten.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
    dev_dependencies: Map<String, Value>,
}

impl Manifest {
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(MANIFEST_FILE);
        let content = read_file(&path)?;
        Self::parse(path, &content)
    }

    pub fn parse(path: PathBuf, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .with_context(|| format!("parsing {}", path.display()))?;
        let Value::Object(document) = value else {
            return Err(ScaffoldError::ManifestNotObject { path }.into());
        };
        Ok(Self {
            path,
            document,
            dev_dependencies: Map::new(),
        })
    }

    pub fn set_name(&mut self, name: &str) {
        self.document
            .insert("name".to_string(), Value::String(name.to_string()));
    }

    pub fn add_script(&mut self, name: &str, command: &str) -> Result<()> {
        let scripts = self.object_field("scripts")?;
        scripts.insert(name.to_string(), Value::String(command.to_string()));
        Ok(())
    }

    pub fn add_dev_dependency(&mut self, name: &str, version: &str) {
        self.dev_dependencies
            .insert(name.to_string(), Value::String(version.to_string()));
    }

    pub fn add_dev_dependencies(&mut self, dependencies: &[(&str, &str)]) {
        for (name, version) in dependencies {
            self.add_dev_dependency(name, version);
        }
    }

    /// Merge the collected dev dependencies and render the document.
    pub fn render(&mut self) -> Result<String> {
        let pending = std::mem::take(&mut self.dev_dependencies);
        let existing = self.object_field("devDependencies")?;
        for (name, version) in pending {
            existing.insert(name, version);
        }

        let mut rendered = serde_json::to_string_pretty(&self.document)
            .with_context(|| format!("serializing {}", self.path.display()))?;
        rendered.push('\n');
        Ok(rendered)
    }

    pub fn save(mut self) -> Result<()> {
        let rendered = self.render()?;
        write_file(&self.path, &rendered)
    }

    fn object_field(&mut self, field: &'static str) -> Result<&mut Map<String, Value>> {
        let entry = self
            .document
            .entry(field)
            .or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(map) => Ok(map),
            _ => Err(ScaffoldError::ManifestFieldNotObject {
                path: self.path.clone(),
                field,
            }
            .into()),
        }
    }
}
