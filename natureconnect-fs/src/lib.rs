//! Capability-scoped filesystem helpers built on `cap-std` and `camino`.
//!
//! Callers open a data directory once with [`open_data_dir`] and then read
//! and write files by name relative to that handle, so file names can never
//! reach outside it.
#![forbid(unsafe_code)]

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;
use std::path::MAIN_SEPARATOR_STR;

const TEMP_SUFFIX: &str = ".partial";

/// Create `path` (and any missing ancestors) and open it as a directory
/// handle.
///
/// # Errors
/// Returns any I/O error raised while creating or opening the directory.
pub fn open_data_dir(path: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    let (anchor, relative) = split_data_dir(path)?;
    if relative.as_str().is_empty() {
        return Ok(anchor);
    }
    anchor.create_dir_all(&relative)?;
    anchor.open_dir(&relative)
}

/// Read `name` from `dir`, returning `None` when the file does not exist.
///
/// # Errors
/// Returns I/O errors other than `NotFound`, including invalid UTF-8.
pub fn read_optional(dir: &fs_utf8::Dir, name: &str) -> io::Result<Option<String>> {
    match dir.read_to_string(name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// Replace the contents of `name` in `dir`.
///
/// The bytes are written to a sibling file first and renamed over `name`,
/// so readers never observe a half-written file.
///
/// # Errors
/// Returns any I/O error raised while writing or renaming.
pub fn replace_file(dir: &fs_utf8::Dir, name: &str, contents: &[u8]) -> io::Result<()> {
    let staging = format!("{name}{TEMP_SUFFIX}");
    dir.write(&staging, contents)?;
    dir.rename(&staging, dir, name)
}

/// Split a data-directory path into the directory it is anchored at and
/// the remainder beneath that anchor.
///
/// Absolute paths are anchored at their filesystem root (including any
/// Windows drive); relative paths at the working directory. The anchor is
/// the only directory opened with ambient authority.
///
/// # Errors
/// Returns any I/O error raised while opening the anchor directory.
pub fn split_data_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut rest = path.components();
    let anchor = match rest.clone().next() {
        Some(Utf8Component::Prefix(drive)) => {
            rest.next();
            if rest.clone().next() == Some(Utf8Component::RootDir) {
                rest.next();
            }
            Utf8PathBuf::from(drive.as_str()).join(MAIN_SEPARATOR_STR)
        }
        Some(Utf8Component::RootDir) => {
            rest.next();
            Utf8PathBuf::from(MAIN_SEPARATOR_STR)
        }
        _ => Utf8PathBuf::from("."),
    };
    let anchor_dir = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((anchor_dir, rest.as_path().to_path_buf()))
}
