use colossus_shared::{Flight, Masked, Seat, MAX_NAME_LEN, SEATS_PER_FLIGHT};
use tracing::debug;

use crate::report::count_empty;
use crate::{ReservationError, ReservationResult};

/// Seat number an operator enters to back out of an assign or delete.
pub const CANCEL: i64 = 0;

/// Assign a customer to an empty seat.
///
/// Checks run in a fixed order and the first failure wins: capacity, cancel,
/// range, occupancy, then both names. Nothing is written unless every check
/// passes.
pub fn assign_seat<'a>(
    flight: &'a mut Flight,
    seat_number: i64,
    first_name: &str,
    last_name: &str,
) -> ReservationResult<&'a Seat> {
    let id = vacant_seat(flight, seat_number)?;
    validate_name("first name", first_name)?;
    validate_name("last name", last_name)?;

    let seat = seat_slot(flight, id)?;
    seat.occupy(first_name, last_name);
    debug!(seat = id, first = %Masked(first_name), last = %Masked(last_name), "seat assigned");
    Ok(seat)
}

/// Clear an assigned seat once the operator has confirmed it.
pub fn delete_seat<'a>(
    flight: &'a mut Flight,
    seat_number: i64,
    confirmation: &str,
) -> ReservationResult<&'a Seat> {
    let id = occupied_seat(flight, seat_number)?.id();
    if !is_affirmative(confirmation) {
        return Err(ReservationError::NotConfirmed);
    }

    let seat = seat_slot(flight, id)?;
    seat.vacate();
    debug!(seat = id, "seat cleared");
    Ok(seat)
}

/// The assign checks that need only a seat number. Lets a caller reject a
/// bad seat before asking for names.
pub fn vacant_seat(flight: &Flight, seat_number: i64) -> ReservationResult<u8> {
    if count_empty(flight) == 0 {
        return Err(ReservationError::NoCapacity);
    }
    let id = seat_id(seat_number)?;
    match flight.seat(id) {
        Some(seat) if seat.is_assigned() => Err(ReservationError::AlreadyTaken(id)),
        Some(_) => Ok(id),
        None => Err(ReservationError::OutOfRange(seat_number)),
    }
}

/// The delete checks that come before confirmation. Returns the seat so the
/// caller can show who is in it.
pub fn occupied_seat(flight: &Flight, seat_number: i64) -> ReservationResult<&Seat> {
    let id = seat_id(seat_number)?;
    match flight.seat(id) {
        Some(seat) if seat.is_assigned() => Ok(seat),
        Some(_) => Err(ReservationError::AlreadyEmpty(id)),
        None => Err(ReservationError::OutOfRange(seat_number)),
    }
}

/// Map an operator-entered number to a seat id.
pub fn seat_id(seat_number: i64) -> ReservationResult<u8> {
    if seat_number == CANCEL {
        return Err(ReservationError::Canceled);
    }
    if !(1..=SEATS_PER_FLIGHT as i64).contains(&seat_number) {
        return Err(ReservationError::OutOfRange(seat_number));
    }
    Ok(seat_number as u8)
}

/// A name is one non-empty word of at most [`MAX_NAME_LEN`] characters.
pub fn validate_name(field: &str, value: &str) -> ReservationResult<()> {
    if value.is_empty() {
        return Err(ReservationError::InvalidName(format!("{} is required", field)));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ReservationError::InvalidName(format!(
            "{} must not contain spaces",
            field
        )));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(ReservationError::InvalidName(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Only an answer starting with `y` or `Y` confirms.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

fn seat_slot(flight: &mut Flight, id: u8) -> ReservationResult<&mut Seat> {
    flight
        .seat_mut(id)
        .ok_or(ReservationError::OutOfRange(i64::from(id)))
}
