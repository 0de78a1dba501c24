pub mod flight;
pub mod seat;

pub use flight::{Flight, Leg, Reservations, SEATS_PER_FLIGHT};
pub use seat::{Seat, MAX_NAME_LEN};
