use core::fmt::{self, Display, Formatter};
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::status::Status;

/// A single reply to one client line: a status code plus human-readable text.
///
/// Replies carry no wire framing (no trailing CRLF, no multi-line
/// continuation) -- that belongs to whatever writes them to the client.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Reply {
    status: Status,
    text: Cow<'static, str>,
}

impl Reply {
    #[must_use]
    pub fn new(status: Status, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rejection for a line exceeding [`MAX_LINE_LENGTH`](crate::dispatch::MAX_LINE_LENGTH).
    #[must_use]
    pub const fn line_too_long() -> Self {
        Self {
            status: Status::CommandUnrecognized,
            text: Cow::Borrowed("Line too long"),
        }
    }

    /// Rejection for a line that matched no registered command keyword.
    #[must_use]
    pub const fn not_implemented() -> Self {
        Self {
            status: Status::NotImplemented,
            text: Cow::Borrowed("5.5.2 Command not implemented"),
        }
    }

    /// Reply sent in place of a fault that escaped a collaborator hook.
    #[must_use]
    pub const fn internal_error() -> Self {
        Self {
            status: Status::CommandUnrecognized,
            text: Cow::Borrowed("Internal Server Error"),
        }
    }
}

impl Display for Reply {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} {}", self.status, self.text)
    }
}
