use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::model::{Archive, Note};
use crate::prompt::Prompter;
use crate::store::ArchiveStore;
use crate::styles::THEME;

const MAIN_TITLE: &str = "Main menu";
const CHOOSE_ACTION: &str = "Choose an action by its number:";
const BACK_LABEL: &str = "Back";

const MAIN_LABELS: [&str; 3] = ["Create a new archive", "View existing archives", "Exit"];
const ARCHIVE_LABELS: [&str; 3] = ["View and select notes", "Add a new note", "Go back"];

const PICK_ARCHIVE: &str = "Pick an archive by its number:";
const PICK_NOTE: &str = "Pick a note by its number:";
const NO_ARCHIVES: &str = "No archives have been created yet.";
const NO_NOTES: &str = "This archive has no notes yet.";

const ARCHIVE_NAME_PROMPT: &str = "Name for the new archive:";
const ARCHIVE_NAME_COMPLAINT: &str =
    "An archive name needs at least one character besides spaces. Try again.";
const NOTE_NAME_PROMPT: &str = "Name for the new note:";
const NOTE_NAME_COMPLAINT: &str =
    "A note name needs at least one character besides spaces. Try again.";
const NOTE_BODY_PROMPT: &str = "Text of the note:";
const NOTE_BODY_COMPLAINT: &str =
    "A note body needs at least one character besides spaces. Try again.";

/// What a dispatched action asks the navigator to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Re-render the same screen.
    Stay,
    /// Push the screen for the archive at this index.
    Open(usize),
    /// Pop the current screen.
    Back,
}

/// One open screen, as tracked on the navigation stack. An archive screen
/// carries the index of the archive it views, so reopening a different
/// archive can never alias a previously opened one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Archive(usize),
}

impl Screen {
    fn labels(&self) -> &'static [&'static str] {
        match self {
            Screen::Main => &MAIN_LABELS,
            Screen::Archive(_) => &ARCHIVE_LABELS,
        }
    }
}

/// Renders `screen` and dispatches the chosen action. The routine is shared
/// by every screen variant; a variant contributes its title, its labels and
/// the handlers behind them.
pub fn render<R: BufRead, W: Write>(
    screen: Screen,
    store: &mut ArchiveStore,
    term: &mut Prompter<R, W>,
) -> Result<Transition> {
    term.say("")?;
    match screen {
        Screen::Main => term.say(THEME.title.apply_to(MAIN_TITLE))?,
        Screen::Archive(index) => {
            let archive = store.archive(index)?;
            term.say(THEME.title.apply_to(format!("Archive: {}", archive.name)))?;
            term.say(THEME.meta.apply_to(format!(
                "{} note(s), created {}",
                archive.notes.len(),
                age(archive.created_at)
            )))?;
        }
    }
    term.say(CHOOSE_ACTION)?;
    let labels = screen.labels();
    for (i, label) in labels.iter().enumerate() {
        term.say(format!("{} {}", i + 1, label))?;
    }
    let picked = term.choice(labels.len())?;

    match (screen, picked) {
        (Screen::Main, 1) => create_archive(store, term),
        (Screen::Main, 2) => browse_archives(store, term),
        (Screen::Main, _) => Ok(Transition::Back),
        (Screen::Archive(index), 1) => view_notes(store, index, term),
        (Screen::Archive(index), 2) => add_note(store, index, term),
        (Screen::Archive(_), _) => Ok(Transition::Back),
    }
}

fn create_archive<R: BufRead, W: Write>(
    store: &mut ArchiveStore,
    term: &mut Prompter<R, W>,
) -> Result<Transition> {
    let name = term.non_blank(ARCHIVE_NAME_PROMPT, ARCHIVE_NAME_COMPLAINT)?;
    store.add_archive(Archive::new(name.clone()));
    term.success(&format!("Archive '{}' created.", name))?;
    Ok(Transition::Stay)
}

fn browse_archives<R: BufRead, W: Write>(
    store: &ArchiveStore,
    term: &mut Prompter<R, W>,
) -> Result<Transition> {
    if store.is_empty() {
        term.info(NO_ARCHIVES)?;
        return Ok(Transition::Stay);
    }

    term.say(PICK_ARCHIVE)?;
    for (i, archive) in store.archives().iter().enumerate() {
        term.say(format!("{} {}", i + 1, archive.name))?;
    }
    term.say(format!("{} {}", store.len() + 1, BACK_LABEL))?;

    let picked = term.choice(store.len() + 1)?;
    if picked > store.len() {
        return Ok(Transition::Stay);
    }
    Ok(Transition::Open(picked - 1))
}

fn view_notes<R: BufRead, W: Write>(
    store: &ArchiveStore,
    index: usize,
    term: &mut Prompter<R, W>,
) -> Result<Transition> {
    let archive = store.archive(index)?;
    if archive.notes.is_empty() {
        term.info(NO_NOTES)?;
        return Ok(Transition::Stay);
    }

    term.say(PICK_NOTE)?;
    for (i, note) in archive.notes.iter().enumerate() {
        term.say(format!("{} {}", i + 1, note.name))?;
    }
    term.say(format!("{} {}", archive.notes.len() + 1, BACK_LABEL))?;

    let picked = term.choice(archive.notes.len() + 1)?;
    if let Some(note) = archive.notes.get(picked - 1) {
        print_note(note, term)?;
    }
    Ok(Transition::Stay)
}

fn add_note<R: BufRead, W: Write>(
    store: &mut ArchiveStore,
    index: usize,
    term: &mut Prompter<R, W>,
) -> Result<Transition> {
    let name = term.non_blank(NOTE_NAME_PROMPT, NOTE_NAME_COMPLAINT)?;
    let body = term.non_blank(NOTE_BODY_PROMPT, NOTE_BODY_COMPLAINT)?;
    store.add_note(index, Note::new(name.clone(), body))?;
    term.success(&format!("Note '{}' added.", name))?;
    Ok(Transition::Stay)
}

fn print_note<R: BufRead, W: Write>(note: &Note, term: &mut Prompter<R, W>) -> Result<()> {
    term.say("")?;
    term.say(THEME.title.apply_to(&note.name))?;
    term.say("-".repeat(note.name.width()))?;
    term.say(&note.body)?;
    term.say(THEME.meta.apply_to(format!("created {}", age(note.created_at))))?;
    Ok(())
}

fn age(timestamp: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(elapsed.to_std().unwrap_or_default())
}
