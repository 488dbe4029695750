//! Capability-scoped filesystem plumbing for report artefacts.
//!
//! Artefacts are written through [`cap_std::fs_utf8`] so every path stays
//! UTF-8 and file access is scoped to the artefact's parent directory.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File};
use std::io::{self, Read, Write};

use crate::error::ReportError;

/// Write `contents` to `path`, creating parent directories as needed.
///
/// An existing file at `path` is truncated and replaced.
pub(crate) fn write_text_artefact(path: &Utf8Path, contents: &str) -> Result<(), ReportError> {
    ensure_parent_dir(path).map_err(|source| ReportError::CreateParent {
        path: parent_or_dot(path),
        source,
    })?;
    let write_error = |source| ReportError::WriteArtefact {
        path: path.to_path_buf(),
        source,
    };
    let (dir, file_name) = open_dir_and_file(path).map_err(write_error)?;
    let mut file = dir.create(file_name.as_str()).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    Ok(())
}

/// Read the file at `path` into a string.
pub(crate) fn read_text_artefact(path: &Utf8Path) -> io::Result<String> {
    let mut file = File::open_ambient(path, ambient_authority())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Create the parent directory of `path` when it does not already exist.
fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (base, relative) = split_parent(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let base_dir = Dir::open_ambient_dir(&base, ambient_authority())?;
    base_dir.create_dir_all(&relative)
}

/// Open the directory holding `path` and return it with the file name.
fn open_dir_and_file(path: &Utf8Path) -> io::Result<(Dir, String)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("artefact path {path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Split a parent path into an openable base and the relative tail.
///
/// `create_dir_all` on a capability [`Dir`] rejects absolute paths, so
/// absolute parents are anchored at the filesystem root (or the drive
/// prefix on Windows) and the remainder is created relative to it.
fn split_parent(parent: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut components = parent.components();
    match components.next() {
        Some(Utf8Component::Prefix(prefix)) => {
            let base = Utf8PathBuf::from(format!("{}{}", prefix.as_str(), std::path::MAIN_SEPARATOR));
            let relative = components
                .filter(|component| !matches!(component, Utf8Component::RootDir))
                .collect();
            (base, relative)
        }
        Some(Utf8Component::RootDir) => (Utf8PathBuf::from("/"), components.collect()),
        _ => (Utf8PathBuf::from("."), parent.to_path_buf()),
    }
}

fn parent_or_dot(path: &Utf8Path) -> Utf8PathBuf {
    path.parent()
        .map_or_else(|| Utf8Path::new(".").to_path_buf(), Utf8Path::to_path_buf)
}
