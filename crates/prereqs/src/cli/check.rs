//! `prereqs check` command implementation.

use std::path::Path;

use colored::Colorize;
use prereqs::{load_catalog, CourseGraph, Settings};

use super::display::print_warnings;

/// Run the check command.
pub fn run(catalog: &Path, settings: Settings) -> Result<(), prereqs::Error> {
    let loaded = load_catalog(catalog, &settings)?;
    let graph = CourseGraph::build(&loaded.records, settings.match_mode);

    let without_prerequisites = loaded
        .records
        .iter()
        .filter(|r| !r.has_prerequisites())
        .count();

    println!("{} {}", "Catalog:".white().bold(), catalog.display());
    println!("  {}: {}", "Courses".dimmed(), graph.node_count().to_string().green());
    println!(
        "  {}: {}",
        "Distinct abbreviations".dimmed(),
        graph.abbreviation_count()
    );
    println!("  {}: {}", "Prerequisite edges".dimmed(), graph.edge_count());
    println!(
        "  {}: {}",
        "Without prerequisites".dimmed(),
        without_prerequisites
    );
    println!(
        "  {}: {}",
        "Warnings".dimmed(),
        if loaded.warnings.is_empty() {
            "0".green()
        } else {
            loaded.warnings.len().to_string().yellow()
        }
    );

    print_warnings(&loaded.warnings);
    Ok(())
}
