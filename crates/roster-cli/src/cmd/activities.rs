use crate::output::{print_json, print_table};
use anyhow::{Context, Result};
use roster_core::{Catalog, RosterManager};
use std::path::Path;

pub fn run(catalog: Option<&Path>, json: bool) -> Result<()> {
    let catalog = Catalog::load_or_default(catalog).context("failed to load catalog")?;
    let snapshot = RosterManager::new(catalog)?.list();

    if json {
        return print_json(&snapshot);
    }

    let rows: Vec<Vec<String>> = snapshot
        .iter()
        .map(|(name, a)| {
            vec![
                name.to_string(),
                a.schedule.clone(),
                format!("{}/{}", a.participants.len(), a.max_participants),
            ]
        })
        .collect();
    print_table(&["ACTIVITY", "SCHEDULE", "ENROLLED"], &rows);
    Ok(())
}
