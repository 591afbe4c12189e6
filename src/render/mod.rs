//! Template-tree materialization.
//!
//! Narrow wrapper over the Tera engine: takes a template directory, a
//! key-value context and a target directory, and either renders the
//! tree into the target or removes a previous rendering. Path segments
//! are always rendered as Tera expressions, so directory and file names
//! may contain `{{ placeholders }}`. File contents are rendered only
//! for `*.tera` files (the suffix is stripped on output); anything else
//! is copied verbatim.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use walkdir::WalkDir;

pub const TEMPLATE_SUFFIX: &str = ".tera";

/// What to do when a target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Pre-existing target files abort the whole operation before
    /// anything is written.
    Fail,
    /// Pre-existing target files are left untouched.
    Skip,
}

#[derive(Debug, Default)]
pub struct RenderOutcome {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

enum EntryKind {
    Directory,
    Verbatim,
    Template,
}

struct PlannedEntry {
    source: PathBuf,
    target: PathBuf,
    kind: EntryKind,
}

/// Render a template tree into `target_dir`.
pub fn render_tree(
    template_dir: &Path,
    context: &BTreeMap<String, Value>,
    target_dir: &Path,
    policy: OverwritePolicy,
) -> Result<RenderOutcome> {
    let tera_context = Context::from_serialize(context)?;
    let planned = plan(template_dir, &tera_context)?;

    if policy == OverwritePolicy::Fail {
        for entry in &planned {
            if !matches!(entry.kind, EntryKind::Directory) {
                let target = target_dir.join(&entry.target);
                if target.exists() {
                    return Err(Error::Conflict(target));
                }
            }
        }
    }

    let mut outcome = RenderOutcome::default();
    for entry in planned {
        let target = target_dir.join(&entry.target);
        match entry.kind {
            EntryKind::Directory => {
                fs::create_dir_all(&target)?;
            }
            EntryKind::Verbatim | EntryKind::Template => {
                if target.exists() {
                    outcome.skipped.push(target);
                    continue;
                }
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                if matches!(entry.kind, EntryKind::Template) {
                    let raw = fs::read_to_string(&entry.source)?;
                    let rendered = Tera::one_off(&raw, &tera_context, false)?;
                    fs::write(&target, rendered)?;
                } else {
                    fs::copy(&entry.source, &target)?;
                }
                outcome.written.push(target);
            }
        }
    }

    Ok(outcome)
}

/// Remove a previous rendering of the template tree from `target_dir`.
///
/// Deletes the files the tree resolves to, then prunes directories the
/// removal emptied. Paths already gone are ignored, so calling this on
/// an already-clean target is a no-op. Returns the files removed.
pub fn remove_tree(
    template_dir: &Path,
    context: &BTreeMap<String, Value>,
    target_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let tera_context = Context::from_serialize(context)?;
    let planned = plan(template_dir, &tera_context)?;

    let mut removed = Vec::new();
    let mut directories = Vec::new();
    for entry in &planned {
        let target = target_dir.join(&entry.target);
        if matches!(entry.kind, EntryKind::Directory) {
            directories.push(target);
        } else if target.is_file() {
            fs::remove_file(&target)?;
            removed.push(target);
        }
    }

    // deepest first; non-empty directories are left alone
    directories.sort_by_key(|path| std::cmp::Reverse(path.components().count()));
    for directory in directories {
        let _ = fs::remove_dir(directory);
    }

    Ok(removed)
}

/// Resolve every template entry to its target-relative path.
fn plan(template_dir: &Path, context: &Context) -> Result<Vec<PlannedEntry>> {
    if !template_dir.is_dir() {
        return Err(Error::TemplateMissing(template_dir.to_path_buf()));
    }

    let mut planned = Vec::new();
    let walker = WalkDir::new(template_dir).sort_by(|a, b| a.file_name().cmp(b.file_name()));
    for entry in walker {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        let rel = match entry.path().strip_prefix(template_dir) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => continue,
        };

        let raw = rel.to_string_lossy();
        let mut rendered = Tera::one_off(&raw, context, false)?;

        let kind = if entry.file_type().is_dir() {
            EntryKind::Directory
        } else if rendered.ends_with(TEMPLATE_SUFFIX) {
            rendered.truncate(rendered.len() - TEMPLATE_SUFFIX.len());
            EntryKind::Template
        } else {
            EntryKind::Verbatim
        };

        planned.push(PlannedEntry {
            source: entry.path().to_path_buf(),
            target: PathBuf::from(rendered),
            kind,
        });
    }

    Ok(planned)
}
