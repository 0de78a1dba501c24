use colossus_shared::{Flight, Seat};

/// Number of seats nobody is assigned to.
pub fn count_empty(flight: &Flight) -> usize {
    flight.seats().iter().filter(|seat| !seat.is_assigned()).count()
}

/// Ids of the empty seats, ascending. Empty when the flight is full.
pub fn empty_seat_ids(flight: &Flight) -> Vec<u8> {
    flight
        .seats()
        .iter()
        .filter(|seat| !seat.is_assigned())
        .map(Seat::id)
        .collect()
}

/// Assigned seats ordered by last name, then first name.
///
/// The sort is stable and runs over references, so equal names keep their
/// seat order and the flight itself is never reordered.
pub fn alpha_list(flight: &Flight) -> Vec<&Seat> {
    let mut assigned: Vec<&Seat> = flight
        .seats()
        .iter()
        .filter(|seat| seat.is_assigned())
        .collect();
    assigned.sort_by(|a, b| {
        a.last_name()
            .cmp(b.last_name())
            .then_with(|| a.first_name().cmp(b.first_name()))
    });
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use colossus_shared::SEATS_PER_FLIGHT;

    fn occupy(flight: &mut Flight, id: u8, first: &str, last: &str) {
        flight.seat_mut(id).unwrap().occupy(first, last);
    }

    #[test]
    fn test_fresh_flight_reports() {
        let flight = Flight::new();

        assert_eq!(count_empty(&flight), SEATS_PER_FLIGHT);
        assert_eq!(empty_seat_ids(&flight), (1..=24).collect::<Vec<u8>>());
        assert!(alpha_list(&flight).is_empty());
    }

    #[test]
    fn test_empty_list_skips_assigned() {
        let mut flight = Flight::new();
        occupy(&mut flight, 5, "Ann", "Lee");
        occupy(&mut flight, 1, "Bo", "Kim");

        let ids = empty_seat_ids(&flight);
        assert_eq!(count_empty(&flight), 22);
        assert_eq!(ids.len(), 22);
        assert!(!ids.contains(&1));
        assert!(!ids.contains(&5));
        assert_eq!(ids.first(), Some(&2));
    }

    #[test]
    fn test_alpha_list_orders_by_last_then_first() {
        let mut flight = Flight::new();
        occupy(&mut flight, 1, "Zed", "Adams");
        occupy(&mut flight, 2, "Amy", "Young");
        occupy(&mut flight, 3, "Amy", "Adams");
        occupy(&mut flight, 4, "bob", "Young");

        let ids: Vec<u8> = alpha_list(&flight).iter().map(|s| s.id()).collect();
        // Byte-wise comparison puts uppercase before lowercase.
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_alpha_list_is_stable_and_leaves_storage_alone() {
        let mut flight = Flight::new();
        occupy(&mut flight, 3, "Ann", "Lee");
        occupy(&mut flight, 1, "Ann", "Lee");
        occupy(&mut flight, 2, "Ann", "Lee");
        let before = flight.clone();

        let ids: Vec<u8> = alpha_list(&flight).iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(flight, before);
    }
}
