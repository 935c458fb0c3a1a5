//! Error types for the dispatcher core.
//!
//! Protocol-level rejections (oversized line, unrecognized command) are
//! ordinary [`Reply`](crate::reply::Reply) values, not errors. The types here
//! cover the two remaining failure classes: unexpected faults caught by the
//! per-line fault boundary, and command-table construction mistakes.

use std::str::Utf8Error;

use thiserror::Error;

/// An unexpected fault raised while processing one line.
///
/// Faults are caught at the dispatcher's fault boundary, forwarded once to
/// [`Session::fault`](crate::session::Session::fault), and answered with
/// `500 Internal Server Error`. They never tear down the connection.
#[derive(Debug, Error)]
pub enum Fault {
    /// The command line was not valid UTF-8.
    #[error("Invalid UTF-8 in command line: {0}")]
    Decode(#[from] Utf8Error),

    /// A collaborator hook panicked while handling the line.
    #[error("Command handler panicked: {0}")]
    Handler(String),
}

impl Fault {
    /// Returns `true` if the fault came from decoding the line rather than
    /// from a collaborator hook.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Errors raised while building a [`CommandTable`](crate::command::CommandTable).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A keyword was registered as the empty string.
    #[error("Command keyword may not be empty")]
    EmptyKeyword,

    /// A keyword was registered that is not uppercased and trimmed.
    #[error("Command keyword {0:?} is not normalized")]
    NotNormalized(String),

    /// The same keyword was registered twice.
    #[error("Command keyword {0:?} is already registered")]
    Duplicate(String),
}
