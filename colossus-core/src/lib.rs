pub mod report;
pub mod repository;
pub mod seating;

use std::path::PathBuf;

/// Every way a reservation operation can fail. Validation variants leave the
/// flight untouched; `Canceled` is the operator backing out, not a fault.
#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error("Canceled.")]
    Canceled,
    #[error("Seat {0} is out of range.")]
    OutOfRange(i64),
    #[error("Seat {0} is already taken.")]
    AlreadyTaken(u8),
    #[error("Seat {0} is already empty.")]
    AlreadyEmpty(u8),
    #[error("No changes made.")]
    NotConfirmed,
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No empty seats.")]
    NoCapacity,
    #[error("Reservation data at {} is unavailable: {source}", path.display())]
    PersistenceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Reservation data is corrupt at line {line}: {reason}")]
    PersistenceCorrupt { line: usize, reason: String },
}

pub type ReservationResult<T> = Result<T, ReservationError>;
