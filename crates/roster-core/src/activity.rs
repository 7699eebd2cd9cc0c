use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// ActivitySnapshot
// ---------------------------------------------------------------------------

/// Point-in-time view of one activity and its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl ActivitySnapshot {
    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}

// ---------------------------------------------------------------------------
// RosterSnapshot
// ---------------------------------------------------------------------------

/// Snapshot of the whole catalog in catalog order.
///
/// Serializes as a JSON object keyed by activity name, so the key order on
/// the wire matches the order activities were declared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSnapshot {
    entries: Vec<(String, ActivitySnapshot)>,
}

impl RosterSnapshot {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, name: String, activity: ActivitySnapshot) {
        self.entries.push((name, activity));
    }

    pub fn get(&self, name: &str) -> Option<&ActivitySnapshot> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivitySnapshot)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RosterSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> ActivitySnapshot {
        ActivitySnapshot {
            description: "Learn strategies".into(),
            schedule: "Fridays".into(),
            max_participants: 2,
            participants: vec!["michael@mergington.edu".into()],
        }
    }

    #[test]
    fn spots_left_counts_remaining_capacity() {
        let mut a = chess();
        assert_eq!(a.spots_left(), 1);
        assert!(!a.is_full());
        a.participants.push("daniel@mergington.edu".into());
        assert_eq!(a.spots_left(), 0);
        assert!(a.is_full());
    }

    #[test]
    fn snapshot_serializes_as_object_in_catalog_order() {
        let mut snap = RosterSnapshot::with_capacity(2);
        snap.push("Zebra Club".into(), chess());
        snap.push("Art Club".into(), chess());

        let json = serde_json::to_string(&snap).unwrap();
        let zebra = json.find("Zebra Club").unwrap();
        let art = json.find("Art Club").unwrap();
        assert!(zebra < art, "expected declaration order, got {json}");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Art Club"]["max_participants"], 2);
        assert_eq!(value["Art Club"]["participants"][0], "michael@mergington.edu");
    }

    #[test]
    fn get_finds_by_exact_name() {
        let mut snap = RosterSnapshot::default();
        snap.push("Chess Club".into(), chess());
        assert!(snap.get("Chess Club").is_some());
        assert!(snap.get("chess club").is_none());
        assert_eq!(snap.len(), 1);
    }
}
