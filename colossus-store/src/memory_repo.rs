use colossus_core::repository::ReservationRepository;
use colossus_core::{ReservationError, ReservationResult};
use colossus_shared::Reservations;
use std::cell::{Cell, RefCell};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

use crate::codec;

/// Keeps the encoded file text in memory. Goes through the same codec as
/// [`crate::FileRepository`], so it stands in for it in session tests.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    contents: RefCell<Option<String>>,
    saves: Cell<usize>,
    reject_saves: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing file text, as if it had been saved earlier.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(text.into())),
            ..Self::default()
        }
    }

    /// Every save fails as if the file could not be opened.
    pub fn unavailable() -> Self {
        Self {
            reject_saves: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Number of successful saves so far
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl ReservationRepository for MemoryRepository {
    fn load(&self) -> ReservationResult<Option<Reservations>> {
        self.contents.borrow().as_deref().map(codec::decode).transpose()
    }

    fn save(&self, reservations: &Reservations) -> ReservationResult<()> {
        if self.reject_saves {
            return Err(ReservationError::PersistenceUnavailable {
                path: PathBuf::from("<memory>"),
                source: Error::new(ErrorKind::PermissionDenied, "saves are disabled"),
            });
        }
        *self.contents.borrow_mut() = Some(codec::encode(reservations));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
