use std::io::{BufRead, Write};

use crate::error::Result;
use crate::menu::{self, Screen, Transition};
use crate::prompt::Prompter;
use crate::store::ArchiveStore;

const FAREWELL: &str = "Goodbye!";

/// Owns the back-stack of open screens and the archive collection every
/// screen operates on. The stack models screen history: "go back" always
/// returns to the previously opened screen, however deep the navigation
/// went, and popping the last screen ends the session.
#[derive(Default)]
pub struct Navigator {
    stack: Vec<Screen>,
    store: ArchiveStore,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the session until the user backs out of the last screen. The
    /// single entry point, called once at startup.
    pub fn run<R: BufRead, W: Write>(&mut self, term: &mut Prompter<R, W>) -> Result<()> {
        self.stack.push(Screen::Main);
        while let Some(screen) = self.stack.last().copied() {
            match menu::render(screen, &mut self.store, term)? {
                Transition::Stay => {}
                Transition::Open(index) => self.stack.push(Screen::Archive(index)),
                Transition::Back => {
                    self.stack.pop();
                    if self.stack.is_empty() {
                        term.say(FAREWELL)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn store(&self) -> &ArchiveStore {
        &self.store
    }
}
