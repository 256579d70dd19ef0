use crate::utils::CCStr;

/// Lifecycle of one external resource attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
    TimedOut,
}
impl LoadState {
    /// `Failed` and `TimedOut` look the same to the user, only the diagnostics differ
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failed | Self::TimedOut)
    }
}
impl core::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
            Self::TimedOut => "timed-out",
        })
    }
}

/// Identifies one loading attempt.
///
/// Every asynchronous callback (timer expiry, load or error signal) is stamped
/// with the attempt that issued it. The loader only accepts callbacks carrying
/// its current attempt, so anything queued before a retry or a dispose is
/// silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AttemptId(u64);
impl AttemptId {
    pub(super) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}
impl core::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the view should draw in place of (or on top of) the resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    /// The resource is confirmed loaded, draw it as is
    None,
    /// Neutral placeholder while waiting for a signal
    Loading,
    /// Decorative substitute, never carries an error message
    StaticBackground,
    /// Actionable recovery: open the resource elsewhere or retry
    Recovery { url: CCStr },
    /// The current browsing context is about to leave for `url`
    Redirecting { url: CCStr, delay_ms: u64 },
}
