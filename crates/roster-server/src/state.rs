use roster_core::RosterManager;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterManager>,
}

impl AppState {
    pub fn new(roster: Arc<RosterManager>) -> Self {
        Self { roster }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_roster() {
        let state = AppState::new(Arc::new(RosterManager::default()));
        let other = state.clone();
        other
            .roster
            .enroll("Chess Club", "shared@mergington.edu")
            .unwrap();

        let chess = state.roster.activity("Chess Club").unwrap();
        assert!(chess
            .participants
            .contains(&"shared@mergington.edu".to_string()));
    }
}
