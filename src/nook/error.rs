use thiserror::Error;

#[derive(Error, Debug)]
pub enum NookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input stream closed before the session ended")]
    InputClosed,

    #[error("No archive at index: {0}")]
    ArchiveNotFound(usize),
}

pub type Result<T> = std::result::Result<T, NookError>;
