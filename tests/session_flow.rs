use assert_cmd::Command;
use predicates::prelude::*;

fn nook() -> Command {
    Command::cargo_bin("nook").unwrap()
}

#[test]
fn test_exit_immediately() {
    nook()
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Welcome to nook"))
        .stdout(predicates::str::contains("Main menu"))
        .stdout(predicates::str::contains("Goodbye!"));
}

#[test]
fn test_invalid_choices_reprompt_then_recover() {
    // A word, an out-of-range number, then a valid exit.
    nook()
        .write_stdin("notanumber\n9\n3\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Only digits are accepted here. Try again.",
        ))
        .stdout(predicates::str::contains(
            "There is no menu item with that number. Try again.",
        ))
        .stdout(predicates::str::contains("Goodbye!"));
}

#[test]
fn test_blank_archive_names_are_rejected() {
    nook()
        .write_stdin("1\n\n   \nTrip\n3\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "An archive name needs at least one character besides spaces.",
        ))
        .stdout(predicates::str::contains("Archive 'Trip' created."));
}

#[test]
fn test_created_archive_shows_in_the_list_with_back() {
    // Create "Trip", browse the list, pick Back, exit.
    nook()
        .write_stdin("1\nTrip\n2\n2\n3\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("1 Trip\n2 Back\n"));
}

#[test]
fn test_browsing_with_no_archives_announces_it() {
    nook()
        .write_stdin("2\n3\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "No archives have been created yet.",
        ))
        .stdout(predicates::str::contains("2 Back").not());
}

#[test]
fn test_empty_archive_has_no_notes_to_view() {
    // Create, open, view notes (none), go back, exit.
    nook()
        .write_stdin("1\nTrip\n2\n1\n1\n3\n3\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Archive: Trip"))
        .stdout(predicates::str::contains("This archive has no notes yet."));
}

#[test]
fn test_added_note_is_listed_and_displayed_verbatim() {
    // Create "Trip", open it, add "Idea"/"Buy milk", view it, back out.
    nook()
        .write_stdin("1\nTrip\n2\n1\n2\nIdea\nBuy milk\n1\n1\n3\n3\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note 'Idea' added."))
        .stdout(predicates::str::contains("1 Idea\n2 Back\n"))
        .stdout(predicates::str::contains("Idea\n----\nBuy milk\n"));
}

#[test]
fn test_back_navigation_ends_only_at_the_main_screen() {
    // Main -> archive -> back -> exit: exactly one farewell, at the end.
    let assert = nook()
        .write_stdin("1\nTrip\n2\n1\n3\n3\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("Goodbye!").count(), 1);
    assert!(stdout.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_closed_stdin_is_a_fatal_error() {
    // The name prompt never gets a line: the session cannot continue.
    nook()
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error"))
        .stderr(predicates::str::contains("input stream closed"));
}

#[test]
fn test_plain_output_carries_no_escape_codes() {
    let assert = nook()
        .arg("--plain")
        .write_stdin("1\nTrip\n2\n2\n3\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains('\u{1b}'));
    assert!(stdout.contains("Archive 'Trip' created."));
}
