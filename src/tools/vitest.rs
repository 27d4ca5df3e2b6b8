use anyhow::Result;

use crate::project::Project;
use crate::project::framework::{Family, Framework};
use crate::project::manifest::Manifest;
use crate::utils::fs::{insert_before, read_file, write_file};

const DEV_DEPENDENCIES: &[(&str, &str)] = &[("vitest", "^1.2.1"), ("jsdom", "^24.0.0")];
const REACT_DEPENDENCIES: &[(&str, &str)] = &[
    ("@testing-library/react", "^14.2.1"),
    ("@testing-library/jest-dom", "^6.4.2"),
];
const VUE_DEPENDENCIES: &[(&str, &str)] = &[("@vue/test-utils", "^2.4.4")];
const LIT_DEPENDENCIES: &[(&str, &str)] = &[("@open-wc/testing", "^4.0.0")];

const VITE_IMPORT_ANCHOR: &str = "import { defineConfig } from 'vite'";
const PLUGINS_ANCHOR: &str = "plugins:";
const VITEST_REFERENCE: &str = "/// <reference types=\"vitest\" />\n";

const REACT_SETUP: &str = "import '@testing-library/jest-dom';";

const REACT_TEST: &str = r#"import { render, screen } from '@testing-library/react';
import { describe, it, expect } from 'vitest';
import App from './App';

describe('App', () => {
  it('renders headline', () => {
    render(<App />);
    const headline = screen.getByText(/Hello, React/i);
    expect(headline).toBeInTheDocument();
  });
});"#;

const VUE_TEST: &str = r#"import { mount } from '@vue/test-utils';
import { describe, it, expect } from 'vitest';
import App from './App.vue';

describe('App', () => {
  it('renders properly', () => {
    const wrapper = mount(App);
    expect(wrapper.text()).toContain('Hello, Vue');
  });
});"#;

/// Smoke test and wiring for one framework family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTestPlan {
    pub dev_dependencies: &'static [(&'static str, &'static str)],
    /// Test file path relative to the project root.
    pub test_file: String,
    pub test_source: String,
    /// Setup module relative to the project root, with its contents.
    pub setup_file: Option<(String, &'static str)>,
}

impl UnitTestPlan {
    /// Block injected into the Vite config in front of `plugins:`.
    pub fn vite_test_block(&self) -> String {
        match &self.setup_file {
            Some((path, _)) => format!(
                "test: {{\n    globals: true,\n    environment: 'jsdom',\n    setupFiles: './{path}'\n  }},"
            ),
            None => "test: {\n    globals: true,\n    environment: 'jsdom',\n  },".to_string(),
        }
    }
}

pub fn unit_test_plan(framework: Framework) -> UnitTestPlan {
    let ext = framework.script_ext();
    match framework.family() {
        Family::React => UnitTestPlan {
            dev_dependencies: REACT_DEPENDENCIES,
            test_file: format!(
                "src/App.test.{}",
                if framework.is_typescript() { "tsx" } else { "jsx" }
            ),
            test_source: REACT_TEST.to_string(),
            setup_file: Some((format!("src/test-setup.{ext}"), REACT_SETUP)),
        },
        Family::Vue => UnitTestPlan {
            dev_dependencies: VUE_DEPENDENCIES,
            test_file: format!("src/App.test.{ext}"),
            test_source: VUE_TEST.to_string(),
            setup_file: None,
        },
        Family::Lit => UnitTestPlan {
            dev_dependencies: LIT_DEPENDENCIES,
            test_file: format!("src/my-element.test.{ext}"),
            test_source: lit_test(ext),
            setup_file: None,
        },
        Family::Vanilla => UnitTestPlan {
            dev_dependencies: &[],
            test_file: format!("src/main.test.{ext}"),
            test_source: vanilla_test(ext),
            setup_file: None,
        },
    }
}

fn lit_test(ext: &str) -> String {
    format!(
        r#"import {{ fixture, html }} from '@open-wc/testing';
import {{ expect }} from 'vitest';
import './my-element.{ext}';

describe('MyElement', () => {{
  it('renders the slotted content', async () => {{
    const el = await fixture(html`
      <my-element>
        <h1>Hello, Lit</h1>
      </my-element>
    `);
    const slot = el.shadowRoot.querySelector('slot');
    const slottedContent = slot.assignedNodes()[0];
    expect(slottedContent.textContent).toContain('Hello, Lit');
  }});
}});"#
    )
}

fn vanilla_test(ext: &str) -> String {
    format!(
        r#"import {{ describe, it, expect, beforeAll }} from 'vitest';

describe('DOM manipulation', () => {{
  beforeAll(() => {{
    document.body.innerHTML = '<div id="app"></div>';
  }});

  it('should add content to the app div', async () => {{
    await import('./main.{ext}');
    const appDiv = document.querySelector('#app');
    expect(appDiv.innerHTML).toContain('Hello');
  }});
}});"#
    )
}

/// Splice the Vitest type reference and test block into a Vite config.
///
/// Each anchor is handled on its own; `None` means neither anchor was found and the
/// file must stay untouched.
pub fn patch_vite_config(source: &str, test_block: &str) -> Option<String> {
    let with_reference = insert_before(source, VITE_IMPORT_ANCHOR, VITEST_REFERENCE);
    let base = with_reference.as_deref().unwrap_or(source);
    let with_block = insert_before(base, PLUGINS_ANCHOR, &format!("  {test_block}\n  "));
    with_block.or(with_reference)
}

pub fn apply(project: &Project, manifest: &mut Manifest) -> Result<()> {
    step!("Adding Vitest...");
    let plan = unit_test_plan(project.framework);

    manifest.add_dev_dependencies(DEV_DEPENDENCIES);
    manifest.add_dev_dependencies(plan.dev_dependencies);
    manifest.add_script("test", "vitest")?;

    write_file(&project.path(&plan.test_file), &plan.test_source)?;
    if let Some((path, contents)) = &plan.setup_file {
        write_file(&project.path(path), contents)?;
    }

    let vite_config = project.path(project.framework.vite_config());
    if vite_config.exists() {
        let source = read_file(&vite_config)?;
        match patch_vite_config(&source, &plan.vite_test_block()) {
            Some(patched) => write_file(&vite_config, &patched)?,
            None => trace!(
                "{} has no Vitest anchors, leaving it unchanged",
                vite_config.display()
            ),
        }
    }
    Ok(())
}
