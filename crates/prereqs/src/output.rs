//! Plain-text course lists: one entry per line, sorted.
//!
//! # Atomicity
//!
//! Writes go to a sibling named after the full target plus `.tmp`
//! (`out.txt` -> `out.txt.tmp`) and are renamed over the target, so a crash
//! mid-write leaves any previous file intact. Other files that merely share
//! the target's stem are never touched.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Sort a course set for display or persistence.
#[must_use]
pub fn sorted_courses(courses: &HashSet<String>) -> Vec<&str> {
    let mut sorted: Vec<&str> = courses.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

/// Write `courses` to `path`, sorted, each followed by `\n`.
///
/// An empty set produces an empty file.
///
/// # Errors
///
/// Returns `Error::Io` if the temporary file can't be written or renamed.
pub fn write_course_list(path: &Path, courses: &HashSet<String>) -> Result<()> {
    let temp_path = temp_path_for(path);

    let mut writer = BufWriter::new(File::create(&temp_path)?);
    for course in sorted_courses(courses) {
        writer.write_all(course.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    drop(writer);

    std::fs::rename(&temp_path, path)?;
    tracing::debug!(path = %path.display(), count = courses.len(), "Wrote course list");
    Ok(())
}

/// `path` with `.tmp` appended to its full file name.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsStr::to_os_string).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read a course list written by [`write_course_list`].
///
/// Empty lines are ignored.
///
/// # Errors
///
/// Returns `Error::Io` if the file can't be read.
pub fn read_course_list(path: &Path) -> Result<HashSet<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
