use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use include_dir::{Dir, DirEntry};
use walkdir::WalkDir;

/// Copy `src` to `dest`, recreating the directory structure and byte-copying files.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.with_context(|| format!("walking template {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| {
                format!(
                    "resolving {} inside {}",
                    entry.path().display(),
                    src.display()
                )
            })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating directory {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "copying {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }
    Ok(())
}

/// Write the contents of an embedded directory below `dest`.
///
/// Entry paths inside `include_dir` are relative to the embedding root, so they are
/// re-based on `dir` before being joined onto `dest`.
pub fn extract_embedded(dir: &Dir<'_>, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).with_context(|| format!("creating directory {}", dest.display()))?;
    extract_entries(dir.path(), dir, dest)
}

fn extract_entries(base: &Path, dir: &Dir<'_>, dest: &Path) -> Result<()> {
    for entry in dir.entries() {
        let relative = entry
            .path()
            .strip_prefix(base)
            .with_context(|| format!("resolving embedded entry {}", entry.path().display()))?;
        let target = dest.join(relative);

        match entry {
            DirEntry::Dir(child) => {
                fs::create_dir_all(&target)
                    .with_context(|| format!("creating directory {}", target.display()))?;
                extract_entries(base, child, dest)?;
            }
            DirEntry::File(file) => {
                fs::write(&target, file.contents())
                    .with_context(|| format!("writing {}", target.display()))?;
            }
        }
    }
    Ok(())
}

pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents.as_bytes()).with_context(|| format!("writing {}", path.display()))
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Insert `insertion` right before the first occurrence of `anchor`.
///
/// Returns `None` when the anchor is absent.
pub fn insert_before(source: &str, anchor: &str, insertion: &str) -> Option<String> {
    let at = source.find(anchor)?;
    let mut patched = String::with_capacity(source.len() + insertion.len());
    patched.push_str(&source[..at]);
    patched.push_str(insertion);
    patched.push_str(&source[at..]);
    Some(patched)
}
