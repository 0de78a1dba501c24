pub mod models;
pub mod pii;

pub use models::{Flight, Leg, Reservations, Seat, MAX_NAME_LEN, SEATS_PER_FLIGHT};
pub use pii::Masked;
