use std::collections::HashMap;

use crate::utils::CCStr;

/// Where a script attachment stands in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentStatus {
    /// A tag was inserted and neither `load` nor `error` fired yet
    Pending,
    /// The script ran, its globals are available
    Loaded,
    /// The tag reported an error and was removed from the document
    Failed,
}

/// Which script URLs are attached to the document.
///
/// Loaders consult it read-before-write so a given URL is inserted at most
/// once, however many loaders ask for it.
pub trait ScriptRegistry {
    fn status(&self, url: &str) -> Option<AttachmentStatus>;
    /// `Failed` means the tag is gone from the document, the next loader inserts it again
    fn record(&mut self, url: CCStr, status: AttachmentStatus);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryScriptRegistry {
    attachments: HashMap<CCStr, AttachmentStatus>,
}
impl InMemoryScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}
impl ScriptRegistry for InMemoryScriptRegistry {
    fn status(&self, url: &str) -> Option<AttachmentStatus> {
        self.attachments.get(url).copied()
    }

    fn record(&mut self, url: CCStr, status: AttachmentStatus) {
        log::debug!("ScriptRegistry - {url} is now {status:?}");
        self.attachments.insert(url, status);
    }
}
