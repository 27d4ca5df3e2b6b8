use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Starter templates shipped with the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    ReactTs,
    ReactJs,
    VueTs,
    VueJs,
    LitTs,
    LitJs,
    VanillaTs,
    VanillaJs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    React,
    Vue,
    Lit,
    Vanilla,
}

impl Framework {
    /// Selection order of the interactive prompt.
    pub const ALL: [Framework; 8] = [
        Framework::ReactTs,
        Framework::ReactJs,
        Framework::VueTs,
        Framework::VueJs,
        Framework::LitTs,
        Framework::LitJs,
        Framework::VanillaTs,
        Framework::VanillaJs,
    ];

    /// Identifier used on the command line and as the template directory name.
    pub fn id(self) -> &'static str {
        match self {
            Self::ReactTs => "react-ts",
            Self::ReactJs => "react-js",
            Self::VueTs => "vue-ts",
            Self::VueJs => "vue-js",
            Self::LitTs => "lit-ts",
            Self::LitJs => "lit-js",
            Self::VanillaTs => "vanilla-ts",
            Self::VanillaJs => "vanilla-js",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ReactTs => "React (TypeScript)",
            Self::ReactJs => "React (JavaScript)",
            Self::VueTs => "Vue (TypeScript)",
            Self::VueJs => "Vue (JavaScript)",
            Self::LitTs => "Lit (TypeScript)",
            Self::LitJs => "Lit (JavaScript)",
            Self::VanillaTs => "Plain TypeScript",
            Self::VanillaJs => "Plain JavaScript",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Self::ReactTs | Self::ReactJs => Family::React,
            Self::VueTs | Self::VueJs => Family::Vue,
            Self::LitTs | Self::LitJs => Family::Lit,
            Self::VanillaTs | Self::VanillaJs => Family::Vanilla,
        }
    }

    pub fn is_typescript(self) -> bool {
        matches!(
            self,
            Self::ReactTs | Self::VueTs | Self::LitTs | Self::VanillaTs
        )
    }

    /// Source extension for plain modules (`ts` or `js`).
    pub fn script_ext(self) -> &'static str {
        if self.is_typescript() { "ts" } else { "js" }
    }

    /// Primary stylesheet under `src/`.
    pub fn stylesheet(self) -> &'static str {
        match self.family() {
            Family::Vue | Family::Vanilla => "style.css",
            Family::React | Family::Lit => "index.css",
        }
    }

    pub fn vite_config(self) -> &'static str {
        if self.is_typescript() {
            "vite.config.ts"
        } else {
            "vite.config.js"
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clap_names_match_template_directories() {
        for framework in Framework::ALL {
            let value = framework
                .to_possible_value()
                .expect("every framework is selectable");
            assert_eq!(value.get_name(), framework.id());
        }
    }

    #[test]
    fn stylesheet_convention_splits_vue_and_vanilla_from_the_rest() {
        assert_eq!(Framework::VueJs.stylesheet(), "style.css");
        assert_eq!(Framework::VanillaTs.stylesheet(), "style.css");
        assert_eq!(Framework::ReactTs.stylesheet(), "index.css");
        assert_eq!(Framework::LitJs.stylesheet(), "index.css");
    }

    #[test]
    fn typescript_variants_use_ts_vite_config() {
        assert_eq!(Framework::ReactTs.vite_config(), "vite.config.ts");
        assert_eq!(Framework::ReactJs.vite_config(), "vite.config.js");
        assert_eq!(Framework::LitTs.script_ext(), "ts");
        assert_eq!(Framework::VanillaJs.script_ext(), "js");
    }

    #[test]
    fn deserializes_from_kebab_case_identifier() {
        let framework: Framework = serde_yaml::from_str("lit-ts").expect("yaml framework");
        assert_eq!(framework, Framework::LitTs);
    }
}
