use colossus_core::ReservationError;

/// The operator action a failure happened in, used to word `Canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Assign,
    Delete,
}

/// Console text for a failed reservation operation.
///
/// Validation failures are routine and only traced at debug level; storage
/// failures are logged as warnings since they put data at risk.
pub fn operator_message(action: Action, err: &ReservationError) -> String {
    match err {
        ReservationError::Canceled => {
            tracing::debug!(?action, "operator canceled");
            match action {
                Action::Assign => "Assignment canceled.".to_string(),
                Action::Delete => "Delete canceled.".to_string(),
            }
        }
        ReservationError::PersistenceUnavailable { .. }
        | ReservationError::PersistenceCorrupt { .. } => {
            tracing::warn!(?action, error = %err, "storage failure");
            err.to_string()
        }
        other => {
            tracing::debug!(?action, error = %other, "operation rejected");
            other.to_string()
        }
    }
}

/// Warning shown when a save fails. The session carries on with the data in
/// memory.
pub fn save_failed_message(err: &ReservationError) -> String {
    format!(
        "WARNING: could not save reservation data ({}). Changes are held in memory only \
         and will be lost on exit unless a later save succeeds.",
        err
    )
}
