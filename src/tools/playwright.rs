use std::fs;

use anyhow::{Context, Result};

use crate::project::Project;
use crate::project::manifest::Manifest;
use crate::utils::fs::write_file;

pub const CONFIG_FILE: &str = "playwright.config.ts";
pub const TEST_DIR: &str = "tests-e2e";
const EXAMPLE_TEST_FILE: &str = "example.spec.ts";

const PLAYWRIGHT_CONFIG: &str = r#"import { defineConfig, devices } from '@playwright/test';

export default defineConfig({
  testDir: './tests-e2e',
  fullyParallel: true,
  forbidOnly: !!process.env.CI,
  retries: process.env.CI ? 2 : 0,
  workers: process.env.CI ? 1 : undefined,
  reporter: 'html',
  use: {
    baseURL: 'http://localhost:5173',
    trace: 'on-first-retry',
  },
  projects: [
    { name: 'chromium', use: { ...devices['Desktop Chrome'] } },
    { name: 'firefox', use: { ...devices['Desktop Firefox'] } },
    { name: 'webkit', use: { ...devices['Desktop WebKit'] } },
  ],
  webServer: {
    command: 'npm run dev',
    url: 'http://localhost:5173',
    reuseExistingServer: !process.env.CI,
  },
});
"#;

const EXAMPLE_TEST: &str = r#"import { test, expect } from '@playwright/test';

test('has title', async ({ page }) => {
  await page.goto('/');
  await expect(page).toHaveTitle(/Vite/);
});

test('h1 is visible', async ({ page }) => {
  await page.goto('/');
  await expect(page.getByRole('heading', { level: 1 })).toBeVisible();
});
"#;

pub fn apply(project: &Project, manifest: &mut Manifest) -> Result<()> {
    step!("Adding Playwright for E2E testing...");
    manifest.add_dev_dependency("@playwright/test", "^1.41.1");
    manifest.add_script("test:e2e", "playwright test")?;

    write_file(&project.path(CONFIG_FILE), PLAYWRIGHT_CONFIG)?;

    let test_dir = project.path(TEST_DIR);
    fs::create_dir(&test_dir)
        .with_context(|| format!("creating directory {}", test_dir.display()))?;
    write_file(&test_dir.join(EXAMPLE_TEST_FILE), EXAMPLE_TEST)
}
