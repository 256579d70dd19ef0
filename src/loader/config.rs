use serde::{Deserialize, Serialize};

use crate::utils::CCStr;

/// How the resource gets attached to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    /// A `<script>` tag shared by every loader using the same URL
    Script,
    /// An `<iframe>` owned by a single loader
    Frame,
    /// Nothing is attached, the current browsing context navigates away
    Navigation,
}

/// What the user gets when the resource cannot be confirmed loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackAction {
    OpenInNewTab,
    ShowStaticBackground,
    RedirectAfterDelay { delay_ms: u64 },
}

/// Immutable configuration of one loader instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub resource_url: CCStr,
    pub kind: ResourceKind,
    /// `None` means no timeout is enforced
    pub timeout_ms: Option<u64>,
    pub fallback_action: FallbackAction,
}
impl LoaderConfig {
    /// Third-party script, replaced by a decorative background when it fails
    pub fn script(resource_url: impl Into<CCStr>) -> Self {
        Self {
            resource_url: resource_url.into(),
            kind: ResourceKind::Script,
            timeout_ms: None,
            fallback_action: FallbackAction::ShowStaticBackground,
        }
    }

    /// Embedded document, with open-in-new-tab and retry as recovery actions
    pub fn frame(resource_url: impl Into<CCStr>) -> Self {
        Self {
            resource_url: resource_url.into(),
            kind: ResourceKind::Frame,
            timeout_ms: None,
            fallback_action: FallbackAction::OpenInNewTab,
        }
    }

    /// Navigate the current browsing context to `resource_url` after `delay_ms`
    pub fn redirect(resource_url: impl Into<CCStr>, delay_ms: u64) -> Self {
        Self {
            resource_url: resource_url.into(),
            kind: ResourceKind::Navigation,
            timeout_ms: None,
            fallback_action: FallbackAction::RedirectAfterDelay { delay_ms },
        }
    }

    pub fn with_timeout(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}
