//! Text renderings of the flight reports.

use colossus_core::report::{alpha_list, count_empty, empty_seat_ids};
use colossus_shared::{Flight, SEATS_PER_FLIGHT};

pub fn empty_count(flight: &Flight) -> String {
    format!("Empty seats: {} of {}", count_empty(flight), SEATS_PER_FLIGHT)
}

pub fn empty_list(flight: &Flight) -> String {
    let ids = empty_seat_ids(flight);
    if ids.is_empty() {
        return "Empty seat numbers: (none)".to_string();
    }
    let ids: Vec<String> = ids.iter().map(u8::to_string).collect();
    format!("Empty seat numbers: {}", ids.join(" "))
}

pub fn alpha_listing(flight: &Flight) -> Vec<String> {
    let mut lines = vec!["Alphabetical list of assigned seats:".to_string()];
    let seats = alpha_list(flight);
    if seats.is_empty() {
        lines.push("(none)".to_string());
    }
    lines.extend(
        seats
            .iter()
            .map(|seat| format!("Seat {}: {} {}", seat.id(), seat.first_name(), seat.last_name()))
    );
    lines
}
