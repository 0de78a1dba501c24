use std::fmt;

use super::seat::Seat;

/// Number of seats on every flight.
pub const SEATS_PER_FLIGHT: usize = 24;

/// Which of the two flights a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    Outbound,
    Inbound,
}

impl Leg {
    /// Legs in the order they are persisted.
    pub const ALL: [Leg; 2] = [Leg::Outbound, Leg::Inbound];

    /// Section tag used in the data file
    pub fn tag(&self) -> &'static str {
        match self {
            Leg::Outbound => "OUTBOUND",
            Leg::Inbound => "INBOUND",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Leg::Outbound => "Outbound",
            Leg::Inbound => "Inbound",
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A flight with exactly [`SEATS_PER_FLIGHT`] seats. Seat `i` (0-based) has
/// id `i + 1` for the lifetime of the flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    seats: Vec<Seat>,
}

impl Flight {
    /// A flight with every seat empty.
    pub fn new() -> Self {
        let seats = (1..=SEATS_PER_FLIGHT as u8).map(Seat::vacant).collect();
        Self { seats }
    }

    /// All seats in storage (id) order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Look up a seat by its 1-based id.
    pub fn seat(&self, id: u8) -> Option<&Seat> {
        Self::slot(id).and_then(|i| self.seats.get(i))
    }

    pub fn seat_mut(&mut self, id: u8) -> Option<&mut Seat> {
        Self::slot(id).and_then(move |i| self.seats.get_mut(i))
    }

    fn slot(id: u8) -> Option<usize> {
        (id as usize).checked_sub(1)
    }
}

impl Default for Flight {
    fn default() -> Self {
        Self::new()
    }
}

/// Both flights of the journey, passed explicitly to every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservations {
    pub outbound: Flight,
    pub inbound: Flight,
}

impl Reservations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flight(&self, leg: Leg) -> &Flight {
        match leg {
            Leg::Outbound => &self.outbound,
            Leg::Inbound => &self.inbound,
        }
    }

    pub fn flight_mut(&mut self, leg: Leg) -> &mut Flight {
        match leg {
            Leg::Outbound => &mut self.outbound,
            Leg::Inbound => &mut self.inbound,
        }
    }
}
