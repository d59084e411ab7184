//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `projlist_core` linkage from a standalone executable.
//! - Walk through create + drag-drop once so ordering output can be eyeballed.

use projlist_core::{CommandError, ProjectService};

fn main() {
    println!("projlist_core ping={}", projlist_core::ping());
    println!("projlist_core version={}", projlist_core::core_version());

    if let Err(err) = walkthrough() {
        eprintln!("walkthrough failed: {err}");
        std::process::exit(1);
    }
}

fn walkthrough() -> Result<(), CommandError> {
    let mut service = ProjectService::new();
    let first = service.create_project(Some("Alpha".to_string()))?;
    service.create_project(Some("Beta".to_string()))?;
    let last = service.create_project(Some("Gamma".to_string()))?;

    service.move_project(first, last)?;

    for (index, project) in service.ordered().iter().enumerate() {
        println!(
            "{}. {} weight={}",
            index + 1,
            project.name.as_deref().unwrap_or("(draft)"),
            project
                .weight
                .map_or_else(|| "-".to_string(), |weight| weight.to_string())
        );
    }
    Ok(())
}
