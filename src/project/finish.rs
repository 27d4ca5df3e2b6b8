use crate::project::Scaffolded;
use crate::project::options::ProjectOptions;

/// Instructions printed once the project is on disk.
pub fn next_steps(options: &ProjectOptions, outcome: &Scaffolded) -> String {
    let pm = options.package_manager;
    let mut text = String::from("Done. Now run:\n\n");
    text.push_str(&format!("  cd {}\n", options.name));
    text.push_str(&format!("  {}\n", pm.install_command()));
    text.push_str(&format!("  {}\n", pm.run_command("dev")));
    if outcome.git_initialized {
        text.push_str("\nA git repository was initialized in the project directory.\n");
    }
    text
}

pub fn print_next_steps(options: &ProjectOptions, outcome: &Scaffolded) {
    trace!("project written to {}", outcome.project_dir.display());
    println!();
    success!("Project setup complete!");
    println!();
    println!("{}", next_steps(options, outcome));
}
