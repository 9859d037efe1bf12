//! Advisory message sinks.

use volfile_core::FormatTag;

/// Receives the registry's advisory messages.
///
/// The registry decides whether a message is emitted at all (see
/// [`DispatchConfig::log_level`](crate::DispatchConfig)); sinks only deliver.
pub trait WarningSink: Send + Sync {
    /// Deliver a warning about `tag`.
    fn warn(&self, tag: &FormatTag, message: &str);
}

impl<F> WarningSink for F
where
    F: Fn(&FormatTag, &str) + Send + Sync,
{
    fn warn(&self, tag: &FormatTag, message: &str) {
        (self)(tag, message)
    }
}

/// Emits warnings through `tracing` under the `volfile` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, tag: &FormatTag, message: &str) {
        tracing::warn!(target: "volfile", tag = %tag, "{message}");
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn warn(&self, _tag: &FormatTag, _message: &str) {}
}
