use dioxus::prelude::*;

use futures_util::stream::StreamExt;

use crate::{
    browser,
    loader::prelude::{AttachmentStatus, InMemoryScriptRegistry, ScriptRegistry},
    utils::{log_error, CCStr},
};

/// Commands for the script registry service
#[derive(Debug)]
pub(super) enum ScriptCommand {
    /// Put the tag in the document and record the outcome
    Insert { url: CCStr },
}

/// The document's script attachments, shared by every loader of the app.
///
/// Provided once at the root by [`use_init_services`](super::use_init_services).
/// Insertions run in the root scope, so a loader unmounting in the middle of
/// a download does not leave the URL stuck in [`AttachmentStatus::Pending`].
#[derive(Clone, Copy)]
pub struct SharedScriptRegistry {
    attachments: Signal<InMemoryScriptRegistry>,
    service_handle: Coroutine<ScriptCommand>,
}
impl PartialEq for SharedScriptRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.attachments == other.attachments
    }
}
impl SharedScriptRegistry {
    /// Reactive: the calling scope re-runs when any attachment changes
    pub fn status(&self, url: &str) -> Option<AttachmentStatus> {
        self.attachments.read().status(url)
    }

    pub fn with_mut<R>(&mut self, f: impl FnOnce(&mut InMemoryScriptRegistry) -> R) -> R {
        f(&mut self.attachments.write())
    }

    pub fn insert(&self, url: CCStr) {
        self.service_handle.send(ScriptCommand::Insert { url });
    }
}

pub fn use_script_registry() -> SharedScriptRegistry {
    use_context()
}

/// Script registry service coroutine
pub(super) fn use_script_registry_service() -> SharedScriptRegistry {
    let mut attachments = use_signal(InMemoryScriptRegistry::new);
    let service_handle = use_coroutine(
        move |mut rx: UnboundedReceiver<ScriptCommand>| async move {
            log::info!("script_registry_service (coroutine) - start");

            while let Some(cmd) = rx.next().await {
                log::debug!("script_registry_service (coroutine) - Processing command {cmd:?}...");
                match cmd {
                    ScriptCommand::Insert { url } => {
                        spawn(async move {
                            let status = match browser::inject_script(&url).await.map_err(log_error) {
                                Ok(()) => AttachmentStatus::Loaded,
                                Err(_) => AttachmentStatus::Failed,
                            };
                            attachments.write().record(url, status);
                        });
                    }
                }
                log::debug!("script_registry_service (coroutine) - Command processed");
            }
        },
    );
    use_context_provider(|| SharedScriptRegistry {
        attachments,
        service_handle,
    })
}

/// Registry whose insert commands never reach the document.
///
/// Attachments start as `initial` and only change through
/// [`SharedScriptRegistry::with_mut`].
#[cfg(test)]
pub(crate) fn use_detached_script_registry(initial: InMemoryScriptRegistry) -> SharedScriptRegistry {
    let attachments = use_signal(move || initial);
    let service_handle = use_coroutine(
        move |mut rx: UnboundedReceiver<ScriptCommand>| async move {
            while let Some(cmd) = rx.next().await {
                log::debug!("detached script registry - ignoring {cmd:?}");
            }
        },
    );
    use_context_provider(|| SharedScriptRegistry {
        attachments,
        service_handle,
    })
}
