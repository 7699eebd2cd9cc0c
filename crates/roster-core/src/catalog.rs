use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// ActivityConfig
// ---------------------------------------------------------------------------

/// One activity as declared in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityConfig {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The activity catalog a [`RosterManager`](crate::RosterManager) is seeded
/// from. Loaded once at startup; activity names never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub activities: Vec<ActivityConfig>,
}

/// (name, description, schedule, capacity, initial participants)
const MERGINGTON: &[(&str, &str, &str, usize, [&str; 2])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        ["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        ["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        ["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        ["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        ["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        ["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

impl Catalog {
    /// The built-in Mergington High School catalog.
    pub fn mergington() -> Self {
        let activities = MERGINGTON
            .iter()
            .map(|(name, description, schedule, max, participants)| ActivityConfig {
                name: name.to_string(),
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            })
            .collect();
        Self { activities }
    }

    /// Load and validate a YAML catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&data)?;
        tracing::debug!(
            path = %path.display(),
            activities = catalog.activities.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Load the catalog at `path`, or the built-in one when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::mergington()),
        }
    }

    pub fn from_yaml(data: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(data)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the roster invariants hold for the initial state.
    pub fn validate(&self) -> Result<()> {
        if self.activities.is_empty() {
            return Err(RosterError::InvalidCatalog(
                "catalog declares no activities".into(),
            ));
        }

        let mut names = HashSet::new();
        for activity in &self.activities {
            let name = activity.name.as_str();
            if name.trim().is_empty() {
                return Err(RosterError::InvalidCatalog(
                    "activity name must not be empty".into(),
                ));
            }
            if !names.insert(name) {
                return Err(RosterError::InvalidCatalog(format!(
                    "duplicate activity '{name}'"
                )));
            }
            if activity.max_participants == 0 {
                return Err(RosterError::InvalidCatalog(format!(
                    "'{name}': max_participants must be positive"
                )));
            }
            if activity.participants.len() > activity.max_participants {
                return Err(RosterError::InvalidCatalog(format!(
                    "'{name}': {} participants exceed capacity {}",
                    activity.participants.len(),
                    activity.max_participants
                )));
            }
            let mut seen = HashSet::new();
            for email in &activity.participants {
                if !seen.insert(email.as_str()) {
                    return Err(RosterError::InvalidCatalog(format!(
                        "'{name}': duplicate participant '{email}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::mergington()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::mergington();
        catalog.validate().unwrap();
        assert_eq!(catalog.activities.len(), 9);

        let chess = &catalog.activities[0];
        assert_eq!(chess.name, "Chess Club");
        assert_eq!(chess.max_participants, 12);
        assert!(chess
            .participants
            .contains(&"michael@mergington.edu".to_string()));
    }

    #[test]
    fn participants_default_to_empty() {
        let yaml = "activities:\n  - name: Robotics\n    description: Build robots\n    schedule: Mondays\n    max_participants: 4\n";
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert!(catalog.activities[0].participants.is_empty());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let yaml = serde_yaml::to_string(&Catalog::mergington()).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = Catalog::load(file.path()).unwrap();
        assert_eq!(loaded, Catalog::mergington());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Catalog::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn load_or_default_falls_back_to_builtin() {
        let catalog = Catalog::load_or_default(None).unwrap();
        assert_eq!(catalog, Catalog::mergington());
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let err = Catalog::from_yaml("activities: [: nope").unwrap_err();
        assert!(matches!(err, RosterError::Yaml(_)));
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::from_yaml("activities: []\n").unwrap_err();
        assert!(matches!(err, RosterError::InvalidCatalog(_)));
    }

    #[test]
    fn rejects_zero_capacity() {
        let mut catalog = Catalog::mergington();
        catalog.activities[0].max_participants = 0;
        catalog.activities[0].participants.clear();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("max_participants"));
    }

    #[test]
    fn rejects_duplicate_activity_names() {
        let mut catalog = Catalog::mergington();
        let copy = catalog.activities[0].clone();
        catalog.activities.push(copy);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate activity"));
    }

    #[test]
    fn rejects_overfull_initial_roster() {
        let mut catalog = Catalog::mergington();
        catalog.activities[0].max_participants = 1;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("exceed capacity"));
    }

    #[test]
    fn rejects_duplicate_initial_participants() {
        let mut catalog = Catalog::mergington();
        catalog.activities[0].participants = vec![
            "michael@mergington.edu".into(),
            "michael@mergington.edu".into(),
        ];
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate participant"));
    }
}
