//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

/// The three-course calculus chain used throughout the tests.
pub const CALCULUS: &str = "\
MATH 124 Calc 1 (5)

MATH 125 Calc 2 (5)
Prerequisite: MATH 124

MATH 324 Adv Calc (3)
Prerequisite: MATH 125
";

/// Write catalog text to a fresh temporary file.
pub fn catalog_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Run the prereqs binary with the given arguments.
pub fn run_prereqs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prereqs"))
        .args(args)
        .output()
        .expect("Failed to execute prereqs binary")
}

/// Run the prereqs binary with the catalog path appended as `--catalog`.
pub fn run_prereqs_on(catalog: &Path, args: &[&str]) -> Output {
    let catalog = catalog.to_str().expect("temp path should be UTF-8");
    let mut full: Vec<&str> = args.to_vec();
    full.extend(["--catalog", catalog]);
    run_prereqs(&full)
}
