use anyhow::{Context, Result};
use serde_json::json;

use crate::project::Project;
use crate::project::manifest::Manifest;
use crate::utils::fs::write_file;

pub const CONFIG_FILE: &str = ".prettierrc.json";
pub const IGNORE_FILE: &str = ".prettierignore";
const IGNORE: &str = "node_modules\ndist\n";

pub fn apply(project: &Project, manifest: &mut Manifest) -> Result<()> {
    step!("Adding Prettier...");
    manifest.add_dev_dependency("prettier", "^3.2.4");
    manifest.add_script("format", "prettier --write .")?;

    let config = json!({
        "semi": true,
        "tabWidth": 2,
        "printWidth": 100,
        "singleQuote": true,
        "trailingComma": "es5",
        "jsxSingleQuote": true
    });
    let rendered = serde_json::to_string_pretty(&config).context("serializing Prettier config")?;
    write_file(&project.path(CONFIG_FILE), &format!("{rendered}\n"))?;
    write_file(&project.path(IGNORE_FILE), IGNORE)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::Value;
    use tempfile::tempdir;

    use super::*;
    use crate::project::framework::Framework;
    use crate::project::manifest::MANIFEST_FILE;

    #[test]
    fn writes_config_ignore_file_and_format_script() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join(MANIFEST_FILE), r#"{"name":"fmt"}"#).expect("manifest");
        let mut manifest = Manifest::load(tmp.path()).expect("load");
        let project = Project::new(tmp.path(), Framework::ReactJs);

        apply(&project, &mut manifest).expect("prettier");

        let config: Value = serde_json::from_str(
            &fs::read_to_string(tmp.path().join(CONFIG_FILE)).expect("config"),
        )
        .expect("json");
        assert_eq!(config["printWidth"], 100);
        assert_eq!(config["trailingComma"], "es5");
        assert_eq!(
            fs::read_to_string(tmp.path().join(IGNORE_FILE)).expect("ignore"),
            "node_modules\ndist\n"
        );

        let rendered: Value =
            serde_json::from_str(&manifest.render().expect("render")).expect("json");
        assert_eq!(rendered["scripts"]["format"], "prettier --write .");
    }
}
