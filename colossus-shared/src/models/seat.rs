/// Longest first or last name a seat can hold, in characters.
pub const MAX_NAME_LEN: usize = 19;

/// A single reservable seat. The id is fixed by its slot in the flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    id: u8,
    assigned: bool,
    first_name: String,
    last_name: String,
}

impl Seat {
    pub(crate) fn vacant(id: u8) -> Self {
        Self {
            id,
            assigned: false,
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Place an occupant in the seat. Names are stored as given; callers
    /// validate them first.
    pub fn occupy(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self.assigned = true;
    }

    /// Clear the seat. Names are always emptied along with the flag.
    pub fn vacate(&mut self) {
        self.assigned = false;
        self.first_name.clear();
        self.last_name.clear();
    }
}
