//! Line-oriented SMTP command recognizer and dispatcher.
//!
//! This crate is the protocol core of an SMTP server: it turns raw byte
//! lines received from a client into typed command invocations and produces
//! the reply to send back. The transport that frames lines off a socket and
//! the session object implementing each command's business behavior are
//! external collaborators -- the former delivers lines to
//! [`Dispatcher::process_line`], the latter implements [`Session`].
//!
//! A [`CommandTable`] maps normalized keywords (`MAIL FROM:`, `EHLO`,
//! `QUIT`, ...) to handler capabilities and is built once, immutable
//! afterwards, and shareable across connections. The [`Dispatcher`] owns the
//! per-connection data-mode flag and runs every line through a single fault
//! boundary, so one malformed line or buggy handler answers
//! `500 Internal Server Error` instead of taking the session down.
//!
//! ```
//! # use smtpd_core::{CommandTable, Dispatcher, Reply, Session, Status};
//! # use std::sync::Arc;
//! struct Conn {
//!     message: Vec<u8>,
//! }
//!
//! impl Session for Conn {
//!     fn ehlo(&mut self, _: &str, arg: &str) -> Reply {
//!         Reply::new(Status::Ok, format!("Hello {arg}"))
//!     }
//!
//!     fn data_start(&mut self, _: &str, _: &str) -> Reply {
//!         Reply::new(Status::StartMailInput, "End data with <CR><LF>.<CR><LF>")
//!     }
//!
//!     fn data_line(&mut self, line: &[u8]) -> Reply {
//!         self.message.extend_from_slice(line);
//!         Reply::new(Status::Ok, "Ok")
//!     }
//!
//!     fn data_end(&mut self) -> Reply {
//!         Reply::new(Status::Ok, "Message accepted")
//!     }
//!     # fn helo(&mut self, _: &str, _: &str) -> Reply { Reply::new(Status::Ok, "Ok") }
//!     # fn mail_from(&mut self, _: &str, _: &str) -> Reply { Reply::new(Status::Ok, "Ok") }
//!     # fn noop(&mut self, _: &str, _: &str) -> Reply { Reply::new(Status::Ok, "Ok") }
//!     # fn quit(&mut self, _: &str, _: &str) -> Reply { Reply::new(Status::GoodBye, "Bye") }
//!     # fn rcpt_to(&mut self, _: &str, _: &str) -> Reply { Reply::new(Status::Ok, "Ok") }
//!     # fn rset(&mut self, _: &str, _: &str) -> Reply { Reply::new(Status::Ok, "Ok") }
//!     # fn vrfy(&mut self, _: &str, _: &str) -> Reply { Reply::new(Status::CannotVerify, "Cannot VRFY user") }
//! }
//!
//! # fn main() -> Result<(), smtpd_core::TableError> {
//! let table = Arc::new(CommandTable::standard().build()?);
//! let mut dispatcher = Dispatcher::new(table);
//! let mut conn = Conn { message: Vec::new() };
//!
//! let reply = dispatcher.process_line(&mut conn, b"EHLO client.example.com");
//! assert_eq!(reply.to_string(), "250 Hello client.example.com");
//!
//! let reply = dispatcher.process_line(&mut conn, b"DATA");
//! assert_eq!(reply.status(), Status::StartMailInput);
//! dispatcher.set_data_mode(true);
//!
//! let _ = dispatcher.process_line(&mut conn, b"Subject: hi");
//! let reply = dispatcher.process_line(&mut conn, b".");
//! assert_eq!(reply.to_string(), "250 Message accepted");
//! assert!(!dispatcher.in_data_mode());
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod reply;
pub mod session;
pub mod status;

pub use tracing;

pub use crate::{
    command::{CommandFn, CommandTable, CommandTableBuilder},
    dispatch::{Dispatcher, MAX_LINE_LENGTH},
    error::{Fault, TableError},
    reply::Reply,
    session::Session,
    status::Status,
};
