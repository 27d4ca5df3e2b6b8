use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Run `program args..` inside `cwd` with every stream discarded.
pub fn run_silent(program: &OsStr, args: &[&str], cwd: &Path) -> Result<()> {
    let rendered = render(program, args);
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| format!("spawning `{rendered}` in {}", cwd.display()))?;

    if !status.success() {
        bail!(
            "command `{}` exited with code {}",
            rendered,
            status.code().unwrap_or_default()
        );
    }
    Ok(())
}

fn render(program: &OsStr, args: &[&str]) -> String {
    let mut parts = vec![program.to_string_lossy().into_owned()];
    parts.extend(args.iter().map(|arg| arg.to_string()));
    parts.join(" ")
}
