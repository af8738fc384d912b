use std::error::Error;
use std::fmt;

/// RaceError covers everything that can go wrong when handling a race record. Persistence
/// failures are not handled any further and carry the underlying error.
#[derive(Debug)]
pub enum RaceError {
    /// A required creation field is absent or zero
    MissingInput(String),
    /// No race with the given id exists
    NotFound(u32),
    /// A race with the given id already exists
    CreationConflict(u32),
    /// No competitor of the race can ever reach the total distance
    Unfinishable(u32),
    /// Reading or writing the race store failed
    Store(anyhow::Error),
}

impl fmt::Display for RaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaceError::MissingInput(msg) => write!(f, "Missing input: {}", msg),
            RaceError::NotFound(id) => write!(f, "Race {} not found", id),
            RaceError::CreationConflict(id) => write!(f, "Race {} already exists", id),
            RaceError::Unfinishable(id) => write!(f, "Race {} can never finish", id),
            RaceError::Store(e) => write!(f, "Store error: {:#}", e),
        }
    }
}

impl Error for RaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RaceError::Store(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for RaceError {
    fn from(e: anyhow::Error) -> Self {
        RaceError::Store(e)
    }
}
