use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::project::Project;
use crate::project::framework::{Family, Framework};
use crate::project::manifest::Manifest;
use crate::utils::fs::write_file;

pub const CONFIG_FILE: &str = ".eslintrc.json";
const LINT_SCRIPT: &str = "eslint . --ext .js,.jsx,.ts,.tsx,.vue";

/// ESLint configuration for one framework, plus the packages it needs.
#[derive(Debug, Clone)]
pub struct EslintSetup {
    pub config: Value,
    pub dev_dependencies: Vec<(&'static str, &'static str)>,
}

pub fn eslint_setup(framework: Framework, google: bool) -> EslintSetup {
    let mut dev_dependencies = vec![("eslint", "^8.56.0")];
    let mut extends = vec!["eslint:recommended"];

    let typed = framework.is_typescript();
    if typed {
        dev_dependencies.push(("@typescript-eslint/parser", "^6.19.0"));
        dev_dependencies.push(("@typescript-eslint/eslint-plugin", "^6.19.0"));
        extends.push("plugin:@typescript-eslint/recommended");
    }

    match framework.family() {
        Family::React => {
            dev_dependencies.push(("eslint-plugin-react", "^7.33.2"));
            extends.push("plugin:react/recommended");
            extends.push("plugin:react/jsx-runtime");
        }
        Family::Vue => {
            dev_dependencies.push(("eslint-plugin-vue", "^9.20.1"));
            extends.push("plugin:vue/vue3-essential");
        }
        Family::Lit | Family::Vanilla => {}
    }

    if google {
        dev_dependencies.push(("eslint-config-google", "^0.14.0"));
        extends.push("google");
    }

    let mut config = json!({
        "env": { "browser": true, "es2021": true, "node": true },
        "extends": extends,
        "parserOptions": { "ecmaVersion": "latest", "sourceType": "module" },
        "rules": {}
    });
    if typed {
        if let Value::Object(map) = &mut config {
            map.insert("parser".to_string(), json!("@typescript-eslint/parser"));
            map.insert("plugins".to_string(), json!(["@typescript-eslint"]));
        }
    }

    EslintSetup {
        config,
        dev_dependencies,
    }
}

pub fn apply(project: &Project, manifest: &mut Manifest, google: bool) -> Result<()> {
    step!("Adding ESLint...");
    if google {
        println!("  - Using Google's ESLint config.");
    }

    let setup = eslint_setup(project.framework, google);
    manifest.add_dev_dependencies(&setup.dev_dependencies);
    manifest.add_script("lint", LINT_SCRIPT)?;

    let rendered =
        serde_json::to_string_pretty(&setup.config).context("serializing ESLint config")?;
    write_file(&project.path(CONFIG_FILE), &format!("{rendered}\n"))
}
