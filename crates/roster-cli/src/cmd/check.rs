use crate::output::print_json;
use anyhow::{Context, Result};
use roster_core::Catalog;
use std::path::Path;

pub fn run(path: &Path, json: bool) -> Result<()> {
    let catalog =
        Catalog::load(path).with_context(|| format!("invalid catalog {}", path.display()))?;
    let activities = catalog.activities.len();
    let enrolled: usize = catalog.activities.iter().map(|a| a.participants.len()).sum();
    let capacity: usize = catalog.activities.iter().map(|a| a.max_participants).sum();

    if json {
        return print_json(&serde_json::json!({
            "valid": true,
            "activities": activities,
            "enrolled": enrolled,
            "capacity": capacity,
        }));
    }

    println!(
        "{}: ok ({activities} activities, {enrolled}/{capacity} spots taken)",
        path.display()
    );
    Ok(())
}
