//! Text format for the reservation data file.
//!
//! ```text
//! COLOSSUS_V1
//! OUTBOUND
//! <id> <0|1> <first|-> <last|->    x24
//! INBOUND
//! <id> <0|1> <first|-> <last|->    x24
//! ```
//!
//! Fields are read as whitespace-separated tokens, so line breaks inside a
//! record are tolerated. Anything after the inbound section is ignored.

use colossus_core::{ReservationError, ReservationResult};
use colossus_shared::{Flight, Leg, Reservations, MAX_NAME_LEN, SEATS_PER_FLIGHT};
use std::fmt::Write;

pub const HEADER: &str = "COLOSSUS_V1";

/// Placeholder written in place of the names of an empty seat.
const NO_NAME: &str = "-";

pub fn encode(reservations: &Reservations) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for leg in Leg::ALL {
        out.push_str(leg.tag());
        out.push('\n');
        for seat in reservations.flight(leg).seats() {
            let (first, last) = if seat.is_assigned() {
                (seat.first_name(), seat.last_name())
            } else {
                (NO_NAME, NO_NAME)
            };
            // Writing to a String cannot fail.
            let flag = u8::from(seat.is_assigned());
            let _ = writeln!(out, "{} {} {} {}", seat.id(), flag, first, last);
        }
    }
    out
}

/// Parse a whole file. Fails on the first problem; never returns a partially
/// filled result.
pub fn decode(text: &str) -> ReservationResult<Reservations> {
    let mut tokens = Tokens::new(text);

    let header = tokens.next("file header")?;
    if header != HEADER {
        return Err(tokens.corrupt(format!("expected header {}, found {}", HEADER, header)));
    }

    let mut reservations = Reservations::new();
    for leg in Leg::ALL {
        let tag = tokens.next("section tag")?;
        if tag != leg.tag() {
            return Err(tokens.corrupt(format!("expected section {}, found {}", leg.tag(), tag)));
        }
        decode_flight(&mut tokens, reservations.flight_mut(leg))?;
    }
    Ok(reservations)
}

fn decode_flight(tokens: &mut Tokens<'_>, flight: &mut Flight) -> ReservationResult<()> {
    for expected_id in 1..=SEATS_PER_FLIGHT as u8 {
        let id = tokens.next("seat id")?;
        if id.parse::<u8>().ok() != Some(expected_id) {
            return Err(tokens.corrupt(format!("expected seat {}, found {}", expected_id, id)));
        }

        let assigned = match tokens.next("assigned flag")? {
            "0" => false,
            "1" => true,
            other => {
                let reason = format!("assigned flag must be 0 or 1, found {}", other);
                return Err(tokens.corrupt(reason));
            }
        };
        let first = tokens.next("first name")?;
        let last = tokens.next("last name")?;

        if assigned {
            if let Some(seat) = flight.seat_mut(expected_id) {
                seat.occupy(clip(first), clip(last));
            }
        }
    }
    Ok(())
}

fn clip(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}

/// Whitespace tokenizer that remembers which line it is on.
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: std::str::SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            current: "".split_whitespace(),
            line: 0,
        }
    }

    fn next(&mut self, what: &str) -> ReservationResult<&'a str> {
        loop {
            if let Some(token) = self.current.next() {
                return Ok(token);
            }
            match self.lines.next() {
                Some((index, line)) => {
                    self.line = index + 1;
                    self.current = line.split_whitespace();
                }
                None => {
                    let reason = format!("unexpected end of file, expected {}", what);
                    return Err(self.corrupt(reason));
                }
            }
        }
    }

    fn corrupt(&self, reason: String) -> ReservationError {
        ReservationError::PersistenceCorrupt { line: self.line, reason }
    }
}
