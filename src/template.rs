//! Template tree cloning with ignore filtering.
//!
//! A template is copied entry by entry in file-name order. Entries whose
//! name contains one of [`IGNORE_PATTERNS`] are left out; an ignored
//! directory takes its whole subtree with it. Copies are best-effort: an IO
//! failure stops the walk and leaves whatever was already written in place.

use std::{
    ffi::OsStr,
    fs::{self, File, FileTimes},
    io,
    path::{Path, PathBuf},
};

use tracing::debug;
use walkdir::WalkDir;

use crate::{
    diagnostics::Diagnostics,
    error::{Error, Result},
};

/// Name fragments marking build artifacts that are never copied.
pub const IGNORE_PATTERNS: &[&str] = &[".pyc", "__pycache__"];

/// Return true if an entry name contains any ignore pattern.
pub fn is_ignored(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    IGNORE_PATTERNS.iter().any(|pattern| name.contains(pattern))
}

/// Summary of a completed clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneReport {
    /// Directories created or reused, relative to the destination root.
    pub directories: Vec<PathBuf>,
    /// Files copied, relative to the destination root.
    pub files: Vec<PathBuf>,
    /// Top-most ignored entries, relative to the source root.
    pub ignored: Vec<PathBuf>,
}

/// Copy the template tree at `source` into `dest`.
pub fn clone_tree(source: &Path, dest: &Path, diagnostics: &mut Diagnostics) -> Result<CloneReport> {
    if !source.is_dir() {
        return Err(Error::TemplateMissing {
            path: source.to_path_buf(),
        });
    }

    let mut report = CloneReport::default();
    let mut ignored = Vec::new();

    let walker = WalkDir::new(source)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !is_ignored(entry.file_name()) {
                return true;
            }
            debug!(path = %entry.path().display(), "ignoring template entry");
            ignored.push(entry.path().to_path_buf());
            false
        });

    for entry in walker {
        let entry = entry.map_err(|error| walk_error(source, error))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|_| Error::TemplateWalk {
                path: entry.path().to_path_buf(),
                source: io::Error::other("entry is outside the template root"),
            })?;
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|error| Error::DirectoryCreate {
                path: target.clone(),
                source: error,
            })?;
            debug!(path = %target.display(), "created directory");
            if entry.depth() > 0 {
                report.directories.push(relative.to_path_buf());
            }
        } else if file_type.is_file() || entry.path().is_file() {
            copy_file(entry.path(), &target)?;
            debug!(from = %entry.path().display(), to = %target.display(), "copied file");
            report.files.push(relative.to_path_buf());
        } else {
            diagnostics.warn(format!(
                "skipping {}: not a regular file or directory",
                entry.path().display()
            ));
        }
    }

    report.ignored = ignored
        .into_iter()
        .filter_map(|path| path.strip_prefix(source).ok().map(Path::to_path_buf))
        .collect();
    Ok(report)
}

/// Copy a single file's bytes, timestamps and permission bits.
fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let copy_error = |error| Error::TemplateCopy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: error,
    };

    let metadata = fs::metadata(from).map_err(copy_error)?;
    // Replace rather than truncate so read-only copies from an earlier run don't block us.
    if fs::symlink_metadata(to).is_ok() {
        fs::remove_file(to).map_err(copy_error)?;
    }

    let mut reader = File::open(from).map_err(copy_error)?;
    let mut writer = File::create(to).map_err(copy_error)?;
    io::copy(&mut reader, &mut writer).map_err(copy_error)?;

    let mut times = FileTimes::new().set_modified(metadata.modified().map_err(copy_error)?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    writer.set_times(times).map_err(copy_error)?;
    drop(writer);

    fs::set_permissions(to, metadata.permissions()).map_err(copy_error)
}

/// Convert a walkdir failure into a crate error.
fn walk_error(source_root: &Path, error: walkdir::Error) -> Error {
    let path = error
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source_root.to_path_buf());
    Error::TemplateWalk {
        path,
        source: error
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("walkdir error")),
    }
}
