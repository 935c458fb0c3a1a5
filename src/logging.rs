use tracing::metadata::LevelFilter;
use tracing_subscriber::{
    Layer, filter::FilterFn, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Emit a protocol event under a dedicated target, so per-line traffic can
/// be filtered separately from the rest of the process.
#[macro_export]
macro_rules! log {
    ($target:expr, $level:expr, $($msg:expr),*) => {
        $crate::tracing::event!(target: $target, $level, $($msg),*)
    };
}

/// Log a command line received from a client, after decoding.
#[macro_export]
macro_rules! incoming {
    (level = $level:ident, $($msg:expr),*) => {
        $crate::log!("smtpd_core::incoming", $crate::tracing::Level::$level, $($msg),*)
    };

    ($($msg:expr),*) => {
        $crate::incoming!(level = TRACE, $($msg),*)
    };
}

/// Log dispatcher internals: unmatched commands, contained faults.
#[macro_export]
macro_rules! internal {
    (level = $level:ident, $($msg:expr),*) => {
        $crate::log!("smtpd_core::internal", $crate::tracing::Level::$level, $($msg),*)
    };

    ($($msg:expr),*) => {
        $crate::internal!(level = TRACE, $($msg),*)
    };
}

pub fn init() {
    let level = match std::env::var("LOG_LEVEL")
        .map(|level| level.to_ascii_lowercase())
        .as_deref()
    {
        Ok("error") => LevelFilter::ERROR,
        Ok("warn") => LevelFilter::WARN,
        Ok("info") => LevelFilter::INFO,
        Ok("debug") => LevelFilter::DEBUG,
        Ok("trace") => LevelFilter::TRACE,
        _ if cfg!(debug_assertions) => LevelFilter::TRACE,
        _ => LevelFilter::INFO,
    };

    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_target(true)
                .with_filter(level)
                .with_filter(FilterFn::new(|metadata| {
                    metadata.target().starts_with("smtpd_core")
                })),
        )
        .init();
}
