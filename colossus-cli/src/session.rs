use colossus_core::repository::LoadOutcome;
use colossus_core::{report, seating, ReservationError};
use colossus_shared::{Flight, Leg, SEATS_PER_FLIGHT};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::console::{menu_choice, Console};
use crate::error::{operator_message, save_failed_message, Action};
use crate::state::AppState;
use crate::view;

/// How a flight submenu ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmenuExit {
    /// At least one assign or delete succeeded.
    pub changed: bool,
    /// Input ran out before the operator chose to return.
    pub input_closed: bool,
}

/// Result of one assign or delete exchange.
enum Step {
    Done { changed: bool },
    InputClosed,
}

/// Load saved data, then run the top-level menu until the operator quits.
///
/// Quitting always saves. Running out of input is treated as quitting. If the
/// console itself fails, both flights are saved before the error is returned.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState<'_>,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let outcome = state.load();
    let result = announce_load(console, &outcome).and_then(|()| main_menu(state, console));

    if let Err(err) = result {
        tracing::error!(error = %err, "console failed, saving before exit");
        if let Err(save_err) = state.save() {
            tracing::warn!(error = %save_err, "failed to save reservation data");
        }
        return Err(err);
    }

    persist(state, console)?;
    console.say("Goodbye!")?;
    Ok(())
}

fn main_menu<R: BufRead, W: Write>(
    state: &mut AppState<'_>,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    console.say("Welcome to Colossus Airlines Seat Reservation")?;

    loop {
        console.say("")?;
        console.say("First Level Menu")?;
        console.say("a) Outbound Flight")?;
        console.say("b) Inbound Flight")?;
        console.say("c) Quit")?;

        let Some(reply) = console.prompt("Enter choice: ")? else {
            debug!("input closed at main menu");
            return Ok(());
        };
        let leg = match menu_choice(&reply) {
            Some('a') => Leg::Outbound,
            Some('b') => Leg::Inbound,
            Some('c') => return Ok(()),
            Some(_) => {
                console.say("Invalid choice.")?;
                continue;
            }
            None => {
                console.say("Invalid input.")?;
                continue;
            }
        };

        debug!(%leg, "entering flight menu");
        let exit = flight_menu(console, state.reservations.flight_mut(leg), leg)?;
        if exit.input_closed {
            return Ok(());
        }
        if exit.changed {
            persist(state, console)?;
        }
    }
}

/// Second-level menu for one flight. Reports whether anything changed so the
/// caller can decide to save.
pub fn flight_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    flight: &mut Flight,
    leg: Leg,
) -> anyhow::Result<SubmenuExit> {
    let mut changed = false;

    loop {
        console.say("")?;
        console.say(&format!("Second Level Menu - {}", leg))?;
        console.say("a) Show number of empty seats")?;
        console.say("b) Show list of empty seats")?;
        console.say("c) Show alphabetical list of seats")?;
        console.say("d) Assign a customer to a seat assignment")?;
        console.say("e) Delete a seat assignment")?;
        console.say("f) Return to Main menu")?;

        let Some(reply) = console.prompt("Enter choice: ")? else {
            return Ok(SubmenuExit { changed, input_closed: true });
        };
        let step = match menu_choice(&reply) {
            Some('a') => {
                console.say(&view::empty_count(flight))?;
                continue;
            }
            Some('b') => {
                console.say(&view::empty_list(flight))?;
                continue;
            }
            Some('c') => {
                for line in view::alpha_listing(flight) {
                    console.say(&line)?;
                }
                continue;
            }
            Some('d') => assign_flow(console, flight)?,
            Some('e') => delete_flow(console, flight)?,
            Some('f') => return Ok(SubmenuExit { changed, input_closed: false }),
            Some(_) => {
                console.say("Invalid choice.")?;
                continue;
            }
            None => {
                console.say("Invalid input.")?;
                continue;
            }
        };

        match step {
            Step::Done { changed: step_changed } => changed |= step_changed,
            Step::InputClosed => return Ok(SubmenuExit { changed, input_closed: true }),
        }
    }
}

fn assign_flow<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    flight: &mut Flight,
) -> anyhow::Result<Step> {
    console.say("")?;
    console.say("Assign a customer to a seat (0 = cancel)")?;
    console.say(&view::empty_list(flight))?;
    if report::count_empty(flight) == 0 {
        return reject(console, Action::Assign, ReservationError::NoCapacity);
    }

    let question = format!("Seat number (1-{}, 0=cancel): ", SEATS_PER_FLIGHT);
    let Some(reply) = console.prompt(&question)? else {
        return Ok(Step::InputClosed);
    };
    let seat_number = match parse_seat_number(&reply) {
        Ok(n) => n,
        Err(err) => return reject(console, Action::Assign, err),
    };
    if let Err(err) = seating::vacant_seat(flight, seat_number) {
        return reject(console, Action::Assign, err);
    }

    let Some(first) = console.prompt("First name (no spaces): ")? else {
        return Ok(Step::InputClosed);
    };
    if let Err(err) = seating::validate_name("first name", &first) {
        return reject(console, Action::Assign, err);
    }
    let Some(last) = console.prompt("Last name (no spaces): ")? else {
        return Ok(Step::InputClosed);
    };

    match seating::assign_seat(flight, seat_number, &first, &last) {
        Ok(seat) => {
            console.say(&format!(
                "Assigned seat {} to {} {}.",
                seat.id(),
                seat.first_name(),
                seat.last_name()
            ))?;
            Ok(Step::Done { changed: true })
        }
        Err(err) => reject(console, Action::Assign, err),
    }
}

fn delete_flow<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    flight: &mut Flight,
) -> anyhow::Result<Step> {
    console.say("")?;
    console.say("Delete a seat assignment (0 = cancel)")?;

    let question = format!("Seat number to clear (1-{}, 0=cancel): ", SEATS_PER_FLIGHT);
    let Some(reply) = console.prompt(&question)? else {
        return Ok(Step::InputClosed);
    };
    let seat_number = match parse_seat_number(&reply) {
        Ok(n) => n,
        Err(err) => return reject(console, Action::Delete, err),
    };
    let question = match seating::occupied_seat(flight, seat_number) {
        Ok(seat) => format!(
            "Confirm delete for seat {} ({} {})? (y/n): ",
            seat.id(),
            seat.first_name(),
            seat.last_name()
        ),
        Err(err) => return reject(console, Action::Delete, err),
    };

    let Some(answer) = console.prompt(&question)? else {
        return Ok(Step::InputClosed);
    };
    match seating::delete_seat(flight, seat_number, &answer) {
        Ok(_) => {
            console.say("Seat cleared.")?;
            Ok(Step::Done { changed: true })
        }
        Err(err) => reject(console, Action::Delete, err),
    }
}

fn parse_seat_number(reply: &str) -> Result<i64, ReservationError> {
    reply
        .parse::<i64>()
        .map_err(|_| ReservationError::InvalidInput(format!("'{}' is not a seat number", reply)))
}

fn reject<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    action: Action,
    err: ReservationError,
) -> anyhow::Result<Step> {
    console.say(&operator_message(action, &err))?;
    Ok(Step::Done { changed: false })
}

fn announce_load<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: &LoadOutcome,
) -> anyhow::Result<()> {
    match outcome {
        LoadOutcome::Loaded => console.say("[Loaded existing reservation data.]"),
        LoadOutcome::Missing => console.say("[No data file found. Starting fresh.]"),
        LoadOutcome::Failed(err) => console.say(&format!(
            "[Data file is unreadable or corrupt ({}). Starting fresh.]",
            err
        )),
    }
}

/// Save both flights. A failure is reported to the operator and the session
/// continues.
fn persist<R: BufRead, W: Write>(
    state: &AppState<'_>,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    match state.save() {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::warn!(error = %err, "failed to save reservation data");
            console.say(&save_failed_message(&err))
        }
    }
}
