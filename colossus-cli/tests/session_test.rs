use colossus_cli::{session, AppState, Console};
use colossus_core::report::count_empty;
use colossus_shared::Reservations;
use colossus_store::{codec, MemoryRepository};
use std::io::{self, BufReader, Cursor, Read};

/// Run a whole session against `repo`, feeding `script` as operator input.
fn run_script(repo: &MemoryRepository, script: impl AsRef<[u8]>) -> (String, Reservations) {
    let mut state = AppState::new(repo);
    let mut console = Console::new(Cursor::new(script.as_ref().to_vec()), Vec::new());

    session::run(&mut state, &mut console).expect("session should not fail");

    let output = String::from_utf8(console.into_output()).expect("console output is utf-8");
    (output, state.reservations)
}

/// Reader whose stream breaks once the script before it is used up.
struct BrokenStream;

impl Read for BrokenStream {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console went away"))
    }
}

fn saved_with(setup: impl FnOnce(&mut Reservations)) -> MemoryRepository {
    let mut reservations = Reservations::new();
    setup(&mut reservations);
    MemoryRepository::with_contents(codec::encode(&reservations))
}

#[test]
fn test_assign_report_save_and_reload() {
    let repo = MemoryRepository::new();
    let (output, reservations) = run_script(&repo, "a\nd\n5\nAnn\nLee\na\nb\nc\nf\nc\n");

    assert!(output.contains("[No data file found. Starting fresh.]"));
    assert!(output.contains("Assigned seat 5 to Ann Lee."));
    assert!(output.contains("Empty seats: 23 of 24"));
    assert!(output.contains(
        "Empty seat numbers: 1 2 3 4 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24\n"
    ));
    assert!(output.contains("Seat 5: Ann Lee"));
    assert!(output.ends_with("Goodbye!\n"));
    assert_eq!(count_empty(&reservations.outbound), 23);
    assert_eq!(count_empty(&reservations.inbound), 24);
    // Once on leaving the changed submenu, once on quit.
    assert_eq!(repo.saves(), 2);

    let reloaded = MemoryRepository::with_contents(repo.contents().expect("data was saved"));
    let (output, reservations) = run_script(&reloaded, "c\n");
    assert!(output.contains("[Loaded existing reservation data.]"));
    let seat = reservations.outbound.seat(5).unwrap();
    assert!(seat.is_assigned());
    assert_eq!((seat.first_name(), seat.last_name()), ("Ann", "Lee"));
}

#[test]
fn test_cancel_and_out_of_range_change_nothing() {
    let repo = MemoryRepository::new();
    let (output, reservations) = run_script(&repo, "a\nd\n0\nd\n30\na\nf\nc\n");

    assert!(output.contains("Assignment canceled."));
    assert!(output.contains("Seat 30 is out of range."));
    assert!(output.contains("Empty seats: 24 of 24"));
    assert_eq!(reservations, Reservations::new());
    // Only the unconditional save on quit.
    assert_eq!(repo.saves(), 1);
}

#[test]
fn test_taken_seat_and_bad_names_are_reported() {
    let repo = saved_with(|r| r.outbound.seat_mut(2).unwrap().occupy("Ann", "Lee"));
    let (output, reservations) = run_script(&repo, "a\nd\n2\nd\n3\nAnn Marie\nd\nx\nf\nc\n");

    assert!(output.contains("Seat 2 is already taken."));
    assert!(output.contains("Invalid name: first name must not contain spaces"));
    assert!(output.contains("Invalid input: 'x' is not a seat number"));
    assert_eq!(count_empty(&reservations.outbound), 23);
    assert_eq!(repo.saves(), 1);
}

#[test]
fn test_full_flight_refuses_assignment() {
    let repo = saved_with(|r| {
        for id in 1..=24 {
            r.inbound.seat_mut(id).unwrap().occupy("Pax", "Smith");
        }
    });
    let (output, _) = run_script(&repo, "b\nd\nf\nc\n");

    assert!(output.contains("Empty seat numbers: (none)"));
    assert!(output.contains("No empty seats."));
    // Nothing was asked for after the capacity check.
    assert!(!output.contains("Seat number (1-24, 0=cancel): "));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let repo = saved_with(|r| r.inbound.seat_mut(3).unwrap().occupy("Bo", "Kim"));
    let (output, reservations) = run_script(&repo, "b\ne\n3\nn\ne\n4\ne\n3\nY\nf\nc\n");

    assert!(output.contains("Confirm delete for seat 3 (Bo Kim)? (y/n): "));
    assert!(output.contains("No changes made."));
    assert!(output.contains("Seat 4 is already empty."));
    assert!(output.contains("Seat cleared."));
    assert_eq!(reservations, Reservations::new());
    assert_eq!(repo.saves(), 2);
}

#[test]
fn test_invalid_menu_choices_keep_looping() {
    let repo = MemoryRepository::new();
    let (output, _) = run_script(&repo, "z\n\nb\nq\nf\nc\n");

    assert_eq!(output.matches("Invalid choice.").count(), 2);
    assert!(output.contains("Invalid input."));
    assert!(output.contains("Second Level Menu - Inbound"));
    assert_eq!(repo.saves(), 1);
}

#[test]
fn test_save_failure_is_not_fatal() {
    let repo = MemoryRepository::unavailable();
    let (output, reservations) = run_script(&repo, "a\nd\n1\nAnn\nLee\nf\nc\n");

    assert_eq!(output.matches("WARNING: could not save reservation data").count(), 2);
    assert!(output.ends_with("Goodbye!\n"));
    assert!(reservations.outbound.seat(1).unwrap().is_assigned());
}

#[test]
fn test_corrupt_data_starts_fresh() {
    let repo = MemoryRepository::with_contents("COLOSSUS_V0\n");
    let (output, reservations) = run_script(&repo, "c\n");

    assert!(output.contains("[Data file is unreadable or corrupt"));
    assert!(output.contains("Starting fresh.]"));
    assert_eq!(reservations, Reservations::new());
}

#[test]
fn test_end_of_input_quits_and_saves() {
    let repo = MemoryRepository::new();
    let (output, reservations) = run_script(&repo, "a\nd\n7\nCy\nDiaz\n");

    assert!(output.ends_with("Goodbye!\n"));
    assert!(reservations.outbound.seat(7).unwrap().is_assigned());
    assert_eq!(repo.saves(), 1);

    let saved = codec::decode(&repo.contents().unwrap()).unwrap();
    assert_eq!(saved, reservations);
}

#[test]
fn test_non_utf8_reply_is_rejected_and_session_continues() {
    let repo = MemoryRepository::new();
    let (output, reservations) = run_script(&repo, b"a\nd\n5\nAnn\nLee\n\xff\xfe\nf\nc\n");

    assert!(output.contains("Assigned seat 5 to Ann Lee."));
    assert!(output.contains("Invalid choice."));
    assert!(output.ends_with("Goodbye!\n"));
    assert!(reservations.outbound.seat(5).unwrap().is_assigned());
    assert_eq!(repo.saves(), 2);
}

#[test]
fn test_console_failure_saves_before_returning_error() {
    let repo = MemoryRepository::new();
    let mut state = AppState::new(&repo);
    let input = BufReader::new(Cursor::new(b"a\nd\n5\nAnn\nLee\n".to_vec()).chain(BrokenStream));
    let mut console = Console::new(input, Vec::new());

    let result = session::run(&mut state, &mut console);

    assert!(result.is_err());
    assert_eq!(repo.saves(), 1);
    let saved = codec::decode(&repo.contents().unwrap()).unwrap();
    assert_eq!(saved.outbound.seat(5).unwrap().last_name(), "Lee");
}
