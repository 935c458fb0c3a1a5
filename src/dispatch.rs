use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use crate::{
    command::{CommandTable, normalize},
    error::Fault,
    incoming, internal,
    reply::Reply,
    session::Session,
};

/// Longest line the dispatcher will route. Anything over this is rejected
/// with `500 Line too long` before any mode-specific processing runs.
pub const MAX_LINE_LENGTH: usize = 2040;

/// End-of-data terminator, length-exact: `..` is message content, not an end.
const DATA_TERMINATOR: &[u8] = b".";

/// Routes one client line at a time to the session's capability set.
///
/// One dispatcher serves exactly one connection and processes at most one
/// line at a time; the caller serializes line delivery. The command table is
/// read-only and may be shared across dispatchers.
pub struct Dispatcher<S> {
    table: Arc<CommandTable<S>>,
    data_mode: bool,
}

impl<S: Session> Dispatcher<S> {
    #[must_use]
    pub const fn new(table: Arc<CommandTable<S>>) -> Self {
        Self {
            table,
            data_mode: false,
        }
    }

    #[must_use]
    pub const fn in_data_mode(&self) -> bool {
        self.data_mode
    }

    /// Enter or leave data mode. The caller flips this after delivering a
    /// successful `DATA` reply; the dispatcher itself only clears it, upon
    /// recognizing the end-of-data terminator.
    pub fn set_data_mode(&mut self, data_mode: bool) {
        self.data_mode = data_mode;
    }

    #[must_use]
    pub fn table(&self) -> &CommandTable<S> {
        &self.table
    }

    /// Classify and route one complete client line, terminator already
    /// stripped, and return the reply to send.
    ///
    /// The whole step runs inside a single fault boundary: a hook that
    /// panics, or a command line that is not valid UTF-8, is reported to
    /// [`Session::fault`] exactly once and answered with
    /// `500 Internal Server Error`. The data-mode flag is not reset on a
    /// fault, and the connection stays up -- the caller decides whether to
    /// keep the session.
    pub fn process_line(&mut self, session: &mut S, line: &[u8]) -> Reply {
        if line.len() > MAX_LINE_LENGTH {
            return Reply::line_too_long();
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.route(session, line)));

        match outcome {
            Ok(Ok(reply)) => reply,
            Ok(Err(fault)) => {
                session.fault(&fault);
                Reply::internal_error()
            }
            Err(payload) => {
                let fault = Fault::Handler(panic_message(payload.as_ref()));
                session.fault(&fault);
                Reply::internal_error()
            }
        }
    }

    fn route(&mut self, session: &mut S, line: &[u8]) -> Result<Reply, Fault> {
        if self.data_mode {
            if line == DATA_TERMINATOR {
                self.data_mode = false;
                return Ok(session.data_end());
            }

            return Ok(session.data_line(line));
        }

        let text = std::str::from_utf8(line)?;
        incoming!("{text}");

        if let Some(reply) = session.raw_line(text) {
            return Ok(reply);
        }

        Ok(self.match_command(session, text))
    }

    /// Three-tier keyword match, first hit wins: colon form (`MAIL FROM:`),
    /// then space form (`EHLO example.com`), then the whole line (`QUIT`).
    /// The keyword candidate is uppercased and trimmed; the argument is
    /// everything after the delimiter, untrimmed.
    fn match_command(&self, session: &mut S, text: &str) -> Reply {
        if let Some(pos) = text.find(':') {
            let keyword = normalize(&text[..=pos]);
            if let Some(handler) = self.table.lookup(&keyword) {
                return handler(session, &keyword, &text[pos + 1..]);
            }
        }

        if let Some(pos) = text.find(' ') {
            let keyword = normalize(&text[..pos]);
            if let Some(handler) = self.table.lookup(&keyword) {
                return handler(session, &keyword, &text[pos + 1..]);
            }
        }

        let keyword = normalize(text);
        if let Some(handler) = self.table.lookup(&keyword) {
            return handler(session, &keyword, "");
        }

        internal!(level = DEBUG, "Unrecognized command: {text}");
        Reply::not_implemented()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload.downcast_ref::<&str>().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .map_or_else(|| String::from("unknown panic"), Clone::clone)
        },
        |s| (*s).to_string(),
    )
}
