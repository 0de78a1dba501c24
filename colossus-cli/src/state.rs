use colossus_core::repository::{load_into, LoadOutcome, ReservationRepository};
use colossus_core::ReservationResult;
use colossus_shared::Reservations;

/// Everything a session works on: both flights and where they are kept.
pub struct AppState<'r> {
    pub reservations: Reservations,
    pub repo: &'r dyn ReservationRepository,
}

impl<'r> AppState<'r> {
    /// Both flights start empty until [`AppState::load`] is called.
    pub fn new(repo: &'r dyn ReservationRepository) -> Self {
        Self {
            reservations: Reservations::new(),
            repo,
        }
    }

    pub fn load(&mut self) -> LoadOutcome {
        load_into(self.repo, &mut self.reservations)
    }

    pub fn save(&self) -> ReservationResult<()> {
        self.repo.save(&self.reservations)
    }
}
