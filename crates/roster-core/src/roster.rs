use crate::activity::{ActivitySnapshot, RosterSnapshot};
use crate::catalog::Catalog;
use crate::error::{Result, RosterError};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

// ---------------------------------------------------------------------------
// Acknowledgements
// ---------------------------------------------------------------------------

/// Successful enroll acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity: String,
    pub email: String,
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signed up {} for {}", self.email, self.activity)
    }
}

/// Successful remove acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unenrollment {
    pub activity: String,
    pub email: String,
}

impl fmt::Display for Unenrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unregistered {} from {}", self.email, self.activity)
    }
}

// ---------------------------------------------------------------------------
// RosterManager
// ---------------------------------------------------------------------------

struct Slot {
    name: String,
    description: String,
    schedule: String,
    max_participants: usize,
    participants: Mutex<Vec<String>>,
}

impl Slot {
    // A panic cannot interrupt a push/remove halfway, so a poisoned roster
    // is still consistent.
    fn roster(&self) -> MutexGuard<'_, Vec<String>> {
        self.participants
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot(&self) -> ActivitySnapshot {
        ActivitySnapshot {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.roster().clone(),
        }
    }
}

/// Owns every activity's roster and enforces the capacity and
/// unique-membership invariants.
///
/// Each activity has its own lock: enroll and remove are atomic with respect
/// to other operations on the same activity, while different activities never
/// contend. Share it between request handlers behind an `Arc`.
pub struct RosterManager {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl RosterManager {
    /// Build a manager from a catalog, rejecting catalogs whose initial
    /// rosters already violate the invariants.
    pub fn new(catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self::from_valid(catalog))
    }

    fn from_valid(catalog: Catalog) -> Self {
        let mut slots = Vec::with_capacity(catalog.activities.len());
        let mut index = HashMap::with_capacity(catalog.activities.len());
        for (i, a) in catalog.activities.into_iter().enumerate() {
            index.insert(a.name.clone(), i);
            slots.push(Slot {
                name: a.name,
                description: a.description,
                schedule: a.schedule,
                max_participants: a.max_participants,
                participants: Mutex::new(a.participants),
            });
        }
        Self { slots, index }
    }

    fn slot(&self, activity: &str) -> Result<&Slot> {
        self.index
            .get(activity)
            .map(|&i| &self.slots[i])
            .ok_or_else(|| RosterError::ActivityNotFound(activity.to_string()))
    }

    /// Snapshot of every activity in catalog order.
    pub fn list(&self) -> RosterSnapshot {
        let mut snapshot = RosterSnapshot::with_capacity(self.slots.len());
        for slot in &self.slots {
            snapshot.push(slot.name.clone(), slot.snapshot());
        }
        snapshot
    }

    pub fn activity(&self, name: &str) -> Option<ActivitySnapshot> {
        self.slot(name).ok().map(Slot::snapshot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Add `email` to the roster of `activity`.
    ///
    /// Checks run in a fixed order: the activity must exist, the email must
    /// not already be enrolled, and the roster must have a free spot.
    pub fn enroll(&self, activity: &str, email: &str) -> Result<Enrollment> {
        let slot = self.slot(activity).inspect_err(|_| {
            tracing::debug!(activity, email, "enroll rejected: unknown activity");
        })?;

        let mut roster = slot.roster();
        if roster.iter().any(|p| p == email) {
            tracing::debug!(activity, email, "enroll rejected: already signed up");
            return Err(RosterError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        if roster.len() >= slot.max_participants {
            tracing::debug!(activity, email, "enroll rejected: activity full");
            return Err(RosterError::ActivityFull(activity.to_string()));
        }
        roster.push(email.to_string());
        let enrolled = roster.len();
        drop(roster);

        tracing::info!(
            activity,
            email,
            enrolled,
            capacity = slot.max_participants,
            "participant enrolled"
        );
        Ok(Enrollment {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    /// Remove `email` from the roster of `activity`, freeing its spot.
    pub fn remove(&self, activity: &str, email: &str) -> Result<Unenrollment> {
        let slot = self.slot(activity).inspect_err(|_| {
            tracing::debug!(activity, email, "remove rejected: unknown activity");
        })?;

        let mut roster = slot.roster();
        let Some(pos) = roster.iter().position(|p| p == email) else {
            tracing::debug!(activity, email, "remove rejected: not registered");
            return Err(RosterError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };
        roster.remove(pos);
        let enrolled = roster.len();
        drop(roster);

        tracing::info!(activity, email, enrolled, "participant removed");
        Ok(Unenrollment {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}

impl Default for RosterManager {
    fn default() -> Self {
        Self::from_valid(Catalog::mergington())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
