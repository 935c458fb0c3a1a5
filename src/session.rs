use crate::{error::Fault, internal, reply::Reply};

/// The capability set a connection collaborator supplies to the dispatcher.
///
/// One implementor serves exactly one connection. The dispatcher routes each
/// recognized command to the method of the same name, passing the normalized
/// keyword it matched and the argument text following the delimiter
/// (untrimmed); the method's [`Reply`] is returned to the caller verbatim.
///
/// Command methods own the business behavior -- mailbox validation, message
/// storage, greeting text -- none of which the dispatcher interprets. A
/// method that needs to reject a command does so with an ordinary error
/// [`Reply`]; panicking is treated as a fault and answered with
/// `500 Internal Server Error` (see [`Session::fault`]).
pub trait Session {
    /// `DATA` was recognized. Returning `354` and entering data mode is the
    /// caller's decision, made by flipping
    /// [`Dispatcher::set_data_mode`](crate::dispatch::Dispatcher::set_data_mode)
    /// once this reply has been delivered.
    fn data_start(&mut self, keyword: &str, arg: &str) -> Reply;

    /// The data-mode terminator (a lone `.`) was received. Data mode is
    /// already cleared when this runs; the implementation finalizes the
    /// buffered message and answers for it.
    fn data_end(&mut self) -> Reply;

    fn ehlo(&mut self, keyword: &str, arg: &str) -> Reply;

    fn helo(&mut self, keyword: &str, arg: &str) -> Reply;

    fn mail_from(&mut self, keyword: &str, arg: &str) -> Reply;

    fn noop(&mut self, keyword: &str, arg: &str) -> Reply;

    fn quit(&mut self, keyword: &str, arg: &str) -> Reply;

    fn rcpt_to(&mut self, keyword: &str, arg: &str) -> Reply;

    fn rset(&mut self, keyword: &str, arg: &str) -> Reply;

    fn vrfy(&mut self, keyword: &str, arg: &str) -> Reply;

    /// One line of message content received in data mode, raw bytes with the
    /// terminator already stripped. Implementations typically buffer the
    /// line and answer with a success status the caller discards.
    fn data_line(&mut self, line: &[u8]) -> Reply;

    /// Pre-filter invoked with every decoded command-mode line before any
    /// keyword matching. Returning `Some` short-circuits the matcher and
    /// that reply goes back to the client unchanged; the default `None`
    /// continues normal dispatch.
    ///
    /// This is the seam for rate limiting, bad-peer shutdown, or
    /// authentication gating.
    fn raw_line(&mut self, line: &str) -> Option<Reply> {
        let _ = line;
        None
    }

    /// Observer for faults caught at the dispatcher's fault boundary,
    /// invoked exactly once per fault. Must not influence control flow; the
    /// dispatcher has already chosen the `500` reply.
    fn fault(&mut self, fault: &Fault) {
        internal!(level = ERROR, "{fault}");
    }
}
