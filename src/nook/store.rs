use crate::error::{NookError, Result};
use crate::model::{Archive, Note};

/// In-memory collection of archives. Does NOT persist data.
///
/// Mutation is append-only: archives and notes are added at the end and
/// never removed or reordered, so a position handed out by a menu stays
/// valid for the rest of the session. All access is positional.
#[derive(Debug, Default)]
pub struct ArchiveStore {
    archives: Vec<Archive>,
}

impl ArchiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_archive(&mut self, archive: Archive) {
        self.archives.push(archive);
    }

    pub fn archive(&self, index: usize) -> Result<&Archive> {
        self.archives
            .get(index)
            .ok_or(NookError::ArchiveNotFound(index))
    }

    pub fn add_note(&mut self, index: usize, note: Note) -> Result<()> {
        let archive = self
            .archives
            .get_mut(index)
            .ok_or(NookError::ArchiveNotFound(index))?;
        archive.notes.push(note);
        Ok(())
    }

    pub fn archives(&self) -> &[Archive] {
        &self.archives
    }

    pub fn len(&self) -> usize {
        self.archives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archives.is_empty()
    }
}
