use colossus_core::repository::ReservationRepository;
use colossus_core::{ReservationError, ReservationResult};
use colossus_shared::Reservations;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::codec;

/// Keeps reservations in a single text file.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> ReservationError {
        ReservationError::PersistenceUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReservationRepository for FileRepository {
    fn load(&self) -> ReservationResult<Option<Reservations>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        let reservations = codec::decode(&text)?;
        info!("Loaded reservations from {}", self.path.display());
        Ok(Some(reservations))
    }

    fn save(&self, reservations: &Reservations) -> ReservationResult<()> {
        let text = codec::encode(reservations);

        let mut file = File::create(&self.path).map_err(|e| self.unavailable(e))?;
        file.write_all(text.as_bytes()).map_err(|e| self.unavailable(e))?;
        // Surface errors a plain drop would swallow.
        file.sync_all().map_err(|e| self.unavailable(e))?;

        info!("Saved reservations to {}", self.path.display());
        Ok(())
    }
}
