use thiserror::Error;

use crate::utils::CCStr;

/// Reasons an external resource could not be confirmed loaded.
///
/// None of these is fatal: they end up in the logs while the view switches
/// to its fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("{url} reported a load error")]
    ResourceLoadFailure { url: CCStr },
    #[error("{url} gave no load signal within {timeout_ms}ms")]
    ResourceLoadTimeout { url: CCStr, timeout_ms: u64 },
    #[error("could not attach script {url}: {reason}")]
    ScriptAttachmentError { url: CCStr, reason: CCStr },
}
