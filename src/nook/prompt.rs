use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{NookError, Result};
use crate::styles::THEME;

pub(crate) const NUMERIC_COMPLAINT: &str = "Only digits are accepted here. Try again.";
pub(crate) const RANGE_COMPLAINT: &str = "There is no menu item with that number. Try again.";

/// Line-oriented terminal front end: every read and every write of the
/// session goes through here. Generic over its endpoints so interactive
/// flows can be exercised against in-memory buffers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Blocks for one line and returns it without its line terminator,
    /// otherwise unmodified (a blank line comes back blank). A read of
    /// zero bytes means the stream is gone for the rest of the session.
    pub fn line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut buf = String::new();
        let read = self.input.read_line(&mut buf)?;
        if read == 0 {
            return Err(NookError::InputClosed);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn info(&mut self, text: &str) -> Result<()> {
        self.say(THEME.info.apply_to(text))
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        self.say(THEME.success.apply_to(text))
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        self.say(THEME.error.apply_to(text))
    }

    /// Emits `prompt` once, then reads until the user supplies a line with
    /// at least one non-space character, repeating `complaint` for each
    /// rejected line. The accepted line is returned unmodified; trimming is
    /// applied only to the blankness check.
    pub fn non_blank(&mut self, prompt: &str, complaint: &str) -> Result<String> {
        self.say(prompt)?;
        loop {
            let line = self.line()?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
            self.error(complaint)?;
        }
    }

    /// Reads until the user supplies a base-10 integer in `[1, count]` and
    /// returns it. A line that does not parse and a number off the menu get
    /// distinct complaints; both loop back to another read.
    pub fn choice(&mut self, count: usize) -> Result<usize> {
        loop {
            let line = self.line()?;
            match line.trim().parse::<i64>() {
                Err(_) => self.error(NUMERIC_COMPLAINT)?,
                Ok(n) if n < 1 || n > count as i64 => self.error(RANGE_COMPLAINT)?,
                Ok(n) => return Ok(n as usize),
            }
        }
    }
}
