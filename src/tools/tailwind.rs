use anyhow::Result;

use crate::project::Project;
use crate::project::manifest::Manifest;
use crate::utils::fs::{read_file, write_file};

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("tailwindcss", "^3.4.1"),
    ("postcss", "^8.4.33"),
    ("autoprefixer", "^10.4.17"),
    ("@tailwindcss/typography", "^0.5.10"),
];

pub const TAILWIND_CONFIG_FILE: &str = "tailwind.config.js";
pub const POSTCSS_CONFIG_FILE: &str = "postcss.config.js";

const TAILWIND_CONFIG: &str = r#"import typography from '@tailwindcss/typography'

/** @type {import('tailwindcss').Config} */
export default {
  content: ["./index.html", "./src/**/*.{js,ts,jsx,tsx,vue,lit}"],
  theme: {
    extend: {},
  },
  plugins: [typography],
}
"#;

const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

pub const DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n";

pub fn apply(project: &Project, manifest: &mut Manifest) -> Result<()> {
    step!("Adding Tailwind CSS...");
    manifest.add_dev_dependencies(DEV_DEPENDENCIES);

    write_file(&project.path(TAILWIND_CONFIG_FILE), TAILWIND_CONFIG)?;
    write_file(&project.path(POSTCSS_CONFIG_FILE), POSTCSS_CONFIG)?;

    let stylesheet = project.path("src").join(project.framework.stylesheet());
    if stylesheet.exists() {
        let css = read_file(&stylesheet)?;
        write_file(&stylesheet, &format!("{DIRECTIVES}{css}"))?;
    } else {
        trace!(
            "no stylesheet at {}, skipping Tailwind directives",
            stylesheet.display()
        );
    }
    Ok(())
}
