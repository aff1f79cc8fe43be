//! Embedding-host capability

/// Capability exposed by the host the panel is embedded in (the
/// Bitrix24 application frame in production). Always optional: the
/// panel also runs as a plain page with no host attached.
pub trait HostBridge: Send + Sync {
    /// Ask the host to close the embedded panel. Best effort: local
    /// session state is already cleared by the time this is called,
    /// and a host that ignores the signal leaves the panel correct.
    fn close_application(&self);
}
