use anyhow::Result;
use inquire::{Confirm, InquireError, Select, Text};

use crate::project::framework::Framework;
use crate::project::options::{ProjectOptions, Toggle, ToolSelection, validate_project_name};
use crate::project::package_manager::PackageManager;

pub const DEFAULT_PROJECT_NAME: &str = "my-rwapp-project";

/// Source of answers for values missing from the command line and config file.
///
/// `Ok(None)` means the user cancelled the prompt.
pub trait Prompter {
    fn project_name(&mut self, default: &str) -> Result<Option<String>>;
    fn framework(&mut self) -> Result<Option<Framework>>;
    fn toggle(&mut self, toggle: Toggle) -> Result<Option<bool>>;
}

/// Interactive terminal prompts.
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn project_name(&mut self, default: &str) -> Result<Option<String>> {
        cancellable(
            Text::new("What is your project named?")
                .with_default(default)
                .prompt(),
        )
    }

    fn framework(&mut self) -> Result<Option<Framework>> {
        let titles: Vec<&str> = Framework::ALL.iter().map(|f| f.title()).collect();
        let choice = cancellable(
            Select::new("Select a framework:", titles)
                .with_starting_cursor(0)
                .raw_prompt(),
        )?;
        Ok(choice.map(|option| Framework::ALL[option.index]))
    }

    fn toggle(&mut self, toggle: Toggle) -> Result<Option<bool>> {
        cancellable(Confirm::new(toggle.question()).with_default(false).prompt())
    }
}

fn cancellable<T>(answer: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Answers every question with its default. Backs `--yes`.
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn project_name(&mut self, default: &str) -> Result<Option<String>> {
        Ok(Some(default.to_string()))
    }

    fn framework(&mut self) -> Result<Option<Framework>> {
        Ok(Some(Framework::ALL[0]))
    }

    fn toggle(&mut self, _toggle: Toggle) -> Result<Option<bool>> {
        Ok(Some(false))
    }
}

/// Values collected from flags and the config file before prompting.
#[derive(Debug, Clone, Default)]
pub struct PartialOptions {
    pub name: Option<String>,
    pub framework: Option<Framework>,
    pub tools: ToolSelection<Option<bool>>,
    pub package_manager: Option<PackageManager>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Ready(ProjectOptions),
    Cancelled,
}

/// Fill every unset value through `prompter`, asking in a fixed order.
///
/// The Google preset question is only asked once ESLint is enabled; otherwise it
/// resolves to `false` without prompting.
pub fn resolve(partial: PartialOptions, prompter: &mut dyn Prompter) -> Result<Resolution> {
    let name = match partial.name {
        Some(name) => name,
        None => match prompter.project_name(DEFAULT_PROJECT_NAME)? {
            Some(name) => name,
            None => return Ok(Resolution::Cancelled),
        },
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        return Ok(Resolution::Cancelled);
    }
    validate_project_name(&name)?;

    let framework = match partial.framework {
        Some(framework) => framework,
        None => match prompter.framework()? {
            Some(framework) => framework,
            None => return Ok(Resolution::Cancelled),
        },
    };

    let mut tools = ToolSelection::<bool>::default();
    for toggle in Toggle::ALL {
        if toggle == Toggle::EslintGoogle && !tools.eslint {
            *tools.get_mut(toggle) = partial.tools.eslint_google.unwrap_or(false);
            continue;
        }
        let value = match *partial.tools.get(toggle) {
            Some(value) => value,
            None => match prompter.toggle(toggle)? {
                Some(value) => value,
                None => return Ok(Resolution::Cancelled),
            },
        };
        *tools.get_mut(toggle) = value;
    }

    Ok(Resolution::Ready(ProjectOptions {
        name,
        framework,
        tools,
        package_manager: partial.package_manager.unwrap_or_default(),
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::error::ScaffoldError;

    /// Replays canned answers and records which questions were asked.
    #[derive(Default)]
    struct Scripted {
        names: VecDeque<Option<String>>,
        frameworks: VecDeque<Option<Framework>>,
        toggles: VecDeque<Option<bool>>,
        asked: Vec<String>,
    }

    impl Prompter for Scripted {
        fn project_name(&mut self, default: &str) -> Result<Option<String>> {
            self.asked.push(format!("name[{default}]"));
            Ok(self.names.pop_front().expect("unexpected name prompt"))
        }

        fn framework(&mut self) -> Result<Option<Framework>> {
            self.asked.push("framework".to_string());
            Ok(self.frameworks.pop_front().expect("unexpected framework prompt"))
        }

        fn toggle(&mut self, toggle: Toggle) -> Result<Option<bool>> {
            self.asked.push(format!("{toggle:?}"));
            Ok(self.toggles.pop_front().expect("unexpected toggle prompt"))
        }
    }

    fn ready(resolution: Resolution) -> ProjectOptions {
        match resolution {
            Resolution::Ready(options) => options,
            Resolution::Cancelled => panic!("resolution was cancelled"),
        }
    }

    #[test]
    fn supplied_values_are_never_prompted() {
        let partial = PartialOptions {
            name: Some("demo".to_string()),
            framework: Some(Framework::VueJs),
            tools: ToolSelection {
                tailwind: Some(false),
                eslint: Some(true),
                eslint_google: Some(true),
                vitest: Some(false),
                playwright: Some(false),
                prettier: Some(true),
                git: Some(false),
            },
            package_manager: Some(PackageManager::Pnpm),
        };
        let mut prompter = Scripted::default();

        let options = ready(resolve(partial, &mut prompter).expect("resolve"));

        assert!(prompter.asked.is_empty(), "asked {:?}", prompter.asked);
        assert_eq!(options.name, "demo");
        assert_eq!(options.framework, Framework::VueJs);
        assert!(options.tools.eslint && options.tools.eslint_google && options.tools.prettier);
        assert_eq!(options.package_manager, PackageManager::Pnpm);
    }

    #[test]
    fn google_question_follows_an_enabled_eslint() {
        let mut prompter = Scripted {
            names: VecDeque::from([Some("app".to_string())]),
            frameworks: VecDeque::from([Some(Framework::ReactTs)]),
            toggles: VecDeque::from([
                Some(false),
                Some(true),
                Some(true),
                Some(false),
                Some(false),
                Some(false),
                Some(true),
            ]),
            ..Default::default()
        };

        let options = ready(resolve(PartialOptions::default(), &mut prompter).expect("resolve"));

        assert_eq!(
            prompter.asked,
            [
                "name[my-rwapp-project]",
                "framework",
                "Tailwind",
                "Eslint",
                "EslintGoogle",
                "Vitest",
                "Playwright",
                "Prettier",
                "Git",
            ]
        );
        assert!(options.tools.eslint_google);
        assert!(options.tools.git);
        assert_eq!(options.package_manager, PackageManager::Npm);
    }

    #[test]
    fn google_question_is_skipped_without_eslint() {
        let partial = PartialOptions {
            name: Some("app".to_string()),
            framework: Some(Framework::LitJs),
            tools: ToolSelection {
                eslint: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut prompter = Scripted {
            toggles: VecDeque::from([Some(false); 5]),
            ..Default::default()
        };

        let options = ready(resolve(partial, &mut prompter).expect("resolve"));

        assert!(!prompter.asked.iter().any(|q| q == "EslintGoogle"));
        assert_eq!(prompter.asked.len(), 5);
        assert!(!options.tools.eslint_google);
    }

    #[test]
    fn cancelling_any_prompt_yields_no_options() {
        let mut name_cancel = Scripted {
            names: VecDeque::from([None]),
            ..Default::default()
        };
        assert_eq!(
            resolve(PartialOptions::default(), &mut name_cancel).expect("resolve"),
            Resolution::Cancelled
        );

        let mut toggle_cancel = Scripted {
            names: VecDeque::from([Some("app".to_string())]),
            frameworks: VecDeque::from([Some(Framework::VanillaJs)]),
            toggles: VecDeque::from([Some(true), None]),
            ..Default::default()
        };
        assert_eq!(
            resolve(PartialOptions::default(), &mut toggle_cancel).expect("resolve"),
            Resolution::Cancelled
        );
        assert_eq!(toggle_cancel.asked.last().map(String::as_str), Some("Eslint"));
    }

    #[test]
    fn empty_name_cancels() {
        let mut prompter = Scripted {
            names: VecDeque::from([Some("   ".to_string())]),
            ..Default::default()
        };
        assert_eq!(
            resolve(PartialOptions::default(), &mut prompter).expect("resolve"),
            Resolution::Cancelled
        );
        assert_eq!(prompter.asked.len(), 1);
    }

    #[test]
    fn path_like_names_are_rejected() {
        let partial = PartialOptions {
            name: Some("../escape".to_string()),
            ..Default::default()
        };
        let err = resolve(partial, &mut AcceptDefaults).expect_err("invalid name");
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn accept_defaults_fills_everything() {
        let partial = PartialOptions {
            tools: ToolSelection {
                prettier: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };

        let options = ready(resolve(partial, &mut AcceptDefaults).expect("resolve"));

        assert_eq!(options.name, DEFAULT_PROJECT_NAME);
        assert_eq!(options.framework, Framework::ReactTs);
        assert_eq!(
            options.tools,
            ToolSelection {
                prettier: true,
                ..Default::default()
            }
        );
    }
}
