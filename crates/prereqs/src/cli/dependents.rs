//! `prereqs dependents` command implementation.

use std::path::Path;

use colored::Colorize;
use prereqs::output::{sorted_courses, write_course_list};
use prereqs::{DependentsQuery, Settings};

use super::display::print_warnings;

/// Run the dependents command.
pub fn run(
    course: &str,
    catalog: &Path,
    output: Option<&Path>,
    settings: Settings,
    json: bool,
) -> Result<(), prereqs::Error> {
    let outcome = DependentsQuery::new(settings).run(course, catalog)?;
    print_warnings(&outcome.warnings);

    if let Some(path) = output {
        write_course_list(path, &outcome.courses)?;
        eprintln!(
            "{} {} courses to {}",
            "Wrote".green(),
            outcome.courses.len(),
            path.display()
        );
        return Ok(());
    }

    let sorted = sorted_courses(&outcome.courses);
    if json {
        let rendered = serde_json::to_string_pretty(&sorted)?;
        println!("{rendered}");
        return Ok(());
    }

    if sorted.is_empty() {
        eprintln!("No courses require \"{}\"", course.cyan());
        return Ok(());
    }

    for entry in sorted {
        println!("{entry}");
    }
    Ok(())
}
