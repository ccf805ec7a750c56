use std::error;
use std::fmt;
use std::result;

/// The errors that can be returned by operations on the ordered maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The operation requires at least one entry, but the tree has no root.
    EmptyTree,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyTree => write!(f, "operation requires a non-empty tree"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
