use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ReadError { .. } => "ReadError",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.position.line, self.position.column, self.internal_error
        )
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("error while reading source: {source}")]
    ReadError { source: std::io::Error },
}
