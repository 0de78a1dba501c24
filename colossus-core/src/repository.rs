use colossus_shared::Reservations;

use crate::ReservationResult;

/// Storage for both flights between runs.
pub trait ReservationRepository {
    /// Read back the last saved state.
    ///
    /// `Ok(None)` means nothing has been saved yet. A load either yields both
    /// flights complete or fails; it never returns half a file.
    fn load(&self) -> ReservationResult<Option<Reservations>>;

    /// Write both flights, replacing whatever was saved before.
    fn save(&self, reservations: &Reservations) -> ReservationResult<()>;
}

/// Outcome of loading at startup, kept apart so the operator sees whether
/// there was no file or a bad one.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded,
    Missing,
    Failed(crate::ReservationError),
}

/// Load into `target`, leaving it untouched unless the whole load succeeds.
pub fn load_into(repo: &dyn ReservationRepository, target: &mut Reservations) -> LoadOutcome {
    match repo.load() {
        Ok(Some(loaded)) => {
            *target = loaded;
            tracing::info!("loaded existing reservation data");
            LoadOutcome::Loaded
        }
        Ok(None) => {
            tracing::info!("no reservation data found, starting fresh");
            LoadOutcome::Missing
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not load reservation data, starting fresh");
            LoadOutcome::Failed(err)
        }
    }
}
