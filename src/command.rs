use core::fmt::{self, Debug, Formatter};

use ahash::AHashMap;

use crate::{error::TableError, reply::Reply, session::Session};

/// A registered command handler: the session capability invoked with the
/// normalized keyword that matched and the argument text after the delimiter.
pub type CommandFn<S> = fn(&mut S, &str, &str) -> Reply;

/// Normalize a keyword candidate: trimmed and uppercased, any trailing colon
/// kept (colon-form keywords such as `MAIL FROM:` include it).
#[must_use]
pub fn normalize(keyword: &str) -> String {
    keyword.trim().to_ascii_uppercase()
}

/// The fixed mapping from normalized command keyword to handler capability.
///
/// Built once via [`CommandTable::builder`] or [`CommandTable::standard`] and
/// immutable afterwards; lookups are read-only, so one table may be shared
/// across every dispatcher in the process behind an `Arc`.
pub struct CommandTable<S> {
    commands: AHashMap<Box<str>, CommandFn<S>>,
}

impl<S> CommandTable<S> {
    /// Start an empty table.
    #[must_use]
    pub fn builder() -> CommandTableBuilder<S> {
        CommandTableBuilder::default()
    }

    /// Look up the handler registered for an already-normalized keyword.
    #[must_use]
    pub fn lookup(&self, keyword: &str) -> Option<CommandFn<S>> {
        self.commands.get(keyword).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<S: Session> CommandTable<S> {
    /// Start a table pre-seeded with the standard command set, each keyword
    /// wired to the [`Session`] method of the same name. Further keywords
    /// may be registered on the returned builder before `build()`.
    #[must_use]
    pub fn standard() -> CommandTableBuilder<S> {
        Self::builder()
            .register("DATA", S::data_start)
            .register("EHLO", S::ehlo)
            .register("HELO", S::helo)
            .register("MAIL FROM:", S::mail_from)
            .register("NOOP", S::noop)
            .register("QUIT", S::quit)
            .register("RCPT TO:", S::rcpt_to)
            .register("RSET", S::rset)
            .register("VRFY", S::vrfy)
    }
}

impl<S> Debug for CommandTable<S> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        let mut keywords: Vec<&str> = self.commands.keys().map(AsRef::as_ref).collect();
        keywords.sort_unstable();

        fmt.debug_struct("CommandTable")
            .field("keywords", &keywords)
            .finish()
    }
}

/// Builder for [`CommandTable`]. Collects registrations and validates them
/// all at [`build`](CommandTableBuilder::build).
pub struct CommandTableBuilder<S> {
    entries: Vec<(Box<str>, CommandFn<S>)>,
}

impl<S> Default for CommandTableBuilder<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> CommandTableBuilder<S> {
    /// Register a handler for a keyword. The keyword must already be
    /// normalized (uppercase, trimmed, trailing colon included for
    /// colon-form commands); `build()` rejects anything else.
    #[must_use]
    pub fn register(mut self, keyword: &str, handler: CommandFn<S>) -> Self {
        self.entries.push((keyword.into(), handler));
        self
    }

    /// Validate every registration and produce the immutable table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if any keyword is empty, not equal to its
    /// normalized form, or registered more than once.
    pub fn build(self) -> Result<CommandTable<S>, TableError> {
        let mut commands = AHashMap::with_capacity(self.entries.len());

        for (keyword, handler) in self.entries {
            if keyword.is_empty() {
                return Err(TableError::EmptyKeyword);
            }

            if normalize(&keyword) != *keyword {
                return Err(TableError::NotNormalized(keyword.into()));
            }

            if commands.insert(keyword.clone(), handler).is_some() {
                return Err(TableError::Duplicate(keyword.into()));
            }
        }

        Ok(CommandTable { commands })
    }
}
