pub mod activity;
pub mod catalog;
pub mod error;
pub mod roster;

pub use activity::{ActivitySnapshot, RosterSnapshot};
pub use catalog::{ActivityConfig, Catalog};
pub use error::{ErrorKind, Result, RosterError};
pub use roster::{Enrollment, RosterManager, Unenrollment};
