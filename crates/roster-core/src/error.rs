use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Activity {0} is full")]
    ActivityFull(String),

    #[error("Student {email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Coarse classification of a [`RosterError`], used by callers that map
/// failures onto transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The named activity does not exist.
    NotFound,
    /// The request contradicts the current roster (duplicate, full, absent).
    Conflict,
    /// Catalog loading or I/O failure.
    Internal,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::ActivityNotFound(_) => ErrorKind::NotFound,
            RosterError::AlreadySignedUp { .. }
            | RosterError::ActivityFull(_)
            | RosterError::NotRegistered { .. } => ErrorKind::Conflict,
            RosterError::InvalidCatalog(_) | RosterError::Io(_) | RosterError::Yaml(_) => {
                ErrorKind::Internal
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_fixed() {
        let err = RosterError::ActivityNotFound("Nonexistent Club".into());
        assert_eq!(err.to_string(), "Activity not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn conflict_messages_carry_reason() {
        let dup = RosterError::AlreadySignedUp {
            activity: "Chess Club".into(),
            email: "michael@mergington.edu".into(),
        };
        assert!(dup.to_string().contains("already signed up"));
        assert_eq!(dup.kind(), ErrorKind::Conflict);

        let full = RosterError::ActivityFull("Chess Club".into());
        assert!(full.to_string().ends_with("full"));
        assert_eq!(full.kind(), ErrorKind::Conflict);

        let absent = RosterError::NotRegistered {
            activity: "Chess Club".into(),
            email: "unknown@x.edu".into(),
        };
        assert!(absent.to_string().contains("not registered"));
        assert_eq!(absent.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn catalog_errors_are_internal() {
        let err = RosterError::InvalidCatalog("empty".into());
        assert_eq!(err.kind(), ErrorKind::Internal);
        let io = RosterError::Io(std::io::Error::other("disk full"));
        assert_eq!(io.kind(), ErrorKind::Internal);
    }
}
