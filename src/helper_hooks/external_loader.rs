use dioxus::prelude::*;

use crate::{
    browser,
    loader::prelude::*,
    state_management::prelude::{state_management::use_script_registry, SharedScriptRegistry},
    utils::{async_sleep, CCStr},
};

/// The iframe the view must render for the current attempt.
///
/// Render it keyed by `attempt`: a new attempt then yields a brand new
/// iframe, which reloads the document even when the URL did not change.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAttachment {
    pub url: CCStr,
    pub attempt: AttemptId,
}

#[derive(Debug, Clone, PartialEq)]
struct ScriptWait {
    url: CCStr,
    attempt: AttemptId,
}

/// Drives an [`ExternalLoader`] from a component.
///
/// Returned by [`use_external_loader`]. The handle is `Copy`; every method
/// is a no-op once the loader has been disposed.
#[derive(Clone, Copy, PartialEq)]
pub struct ExternalLoaderHandle {
    machine: Signal<ExternalLoader>,
    timer: Signal<Option<Task>>,
    script_wait: Signal<Option<ScriptWait>>,
    frame: Signal<Option<FrameAttachment>>,
    registry: SharedScriptRegistry,
}

/// Create a loader for `config`, mount it once the component is mounted and
/// dispose of it when the component is dropped.
pub fn use_external_loader(config: LoaderConfig) -> ExternalLoaderHandle {
    let registry = use_script_registry();
    let machine = use_signal(move || ExternalLoader::new(config));
    let timer = use_signal(|| None);
    let script_wait = use_signal(|| None);
    let frame = use_signal(|| None);
    let handle = ExternalLoaderHandle {
        machine,
        timer,
        script_wait,
        frame,
        registry,
    };

    // Nothing is read here, the effect runs once
    use_effect(move || {
        let mut handle = handle;
        let mut registry = handle.registry;
        handle.dispatch(|machine| registry.with_mut(|r| machine.mount(r)));
    });

    // Resolve the awaited script as soon as the registry knows about it
    use_effect(move || {
        let mut handle = handle;
        let Some(wait) = handle.script_wait.read().clone() else {
            return;
        };
        match handle.registry.status(&wait.url) {
            Some(AttachmentStatus::Loaded) => {
                handle.script_wait.set(None);
                handle.dispatch(|machine| machine.on_success(wait.attempt));
            }
            Some(AttachmentStatus::Failed) => {
                handle.script_wait.set(None);
                handle.dispatch(|machine| {
                    machine.on_attachment_error(wait.attempt, "the script could not be fetched")
                });
            }
            Some(AttachmentStatus::Pending) | None => (),
        }
    });

    use_drop(move || {
        let mut handle = handle;
        handle.dispose();
    });

    handle
}

/// Run `callback` once, after the first render where `loader` is [`LoadState::Ready`].
///
/// Later writes to the loader re-run the effect but never the callback.
pub fn use_on_first_ready(loader: ExternalLoaderHandle, mut callback: impl FnMut() + 'static) {
    let mut fired = use_signal(|| false);
    use_effect(move || {
        if loader.state() == LoadState::Ready && !*fired.peek() {
            fired.set(true);
            callback();
        }
    });
}

impl ExternalLoaderHandle {
    pub fn state(&self) -> LoadState {
        self.machine.read().state()
    }

    pub fn fallback(&self) -> Fallback {
        self.machine.read().fallback()
    }

    /// Why the last attempt failed, kept for diagnostics
    pub fn last_error(&self) -> Option<LoadError> {
        self.machine.read().last_error().cloned()
    }

    pub fn frame(&self) -> Option<FrameAttachment> {
        self.frame.read().clone()
    }

    pub fn retry(&mut self) {
        let mut registry = self.registry;
        self.dispatch(|machine| registry.with_mut(|r| machine.retry(r)));
    }

    pub fn dispose(&mut self) {
        self.dispatch(ExternalLoader::dispose);
    }

    pub fn open_now(&mut self) {
        self.dispatch(ExternalLoader::open_now);
    }

    pub fn open_in_new_tab(&mut self) {
        self.dispatch(|machine| machine.open_in_new_tab());
    }

    /// `load` event of the iframe rendered for `attempt`
    pub fn frame_loaded(&mut self, attempt: AttemptId) {
        self.dispatch(|machine| machine.on_success(attempt));
    }

    /// `error` event of the iframe rendered for `attempt`
    pub fn frame_failed(&mut self, attempt: AttemptId) {
        self.dispatch(|machine| machine.on_error(attempt));
    }

    fn timer_fired(&mut self, attempt: AttemptId) {
        self.dispatch(|machine| machine.on_timer(attempt));
    }

    fn dispatch<F>(&mut self, f: F)
    where
        F: FnOnce(&mut ExternalLoader) -> Effects,
    {
        let effects = match self.machine.try_write() {
            Ok(mut machine) => f(&mut machine),
            Err(e) => {
                log::debug!("ExternalLoaderHandle - loader gone, nothing to do ({e})");
                return;
            }
        };
        self.apply(effects);
    }

    fn apply(&mut self, effects: Effects) {
        for effect in effects {
            log::debug!("ExternalLoaderHandle - {effect:?}");
            match effect {
                LoaderEffect::AttachScript { url, attempt, mode } => {
                    if mode == ScriptAttachMode::Insert {
                        self.registry.insert(url.clone());
                    }
                    self.script_wait.set(Some(ScriptWait { url, attempt }));
                }
                LoaderEffect::AttachFrame { url, attempt } => {
                    self.frame.set(Some(FrameAttachment { url, attempt }));
                }
                LoaderEffect::ScheduleTimer {
                    attempt, delay_ms, ..
                } => {
                    let mut handle = *self;
                    let task = spawn(async move {
                        async_sleep(delay_ms).await;
                        handle.timer_fired(attempt);
                    });
                    if let Some(previous) = self.timer.write().replace(task) {
                        previous.cancel();
                    }
                }
                LoaderEffect::CancelTimer => {
                    if let Some(task) = self.timer.try_write().ok().and_then(|mut t| t.take()) {
                        task.cancel();
                    }
                }
                LoaderEffect::Detach => {
                    if let Ok(mut wait) = self.script_wait.try_write() {
                        *wait = None;
                    }
                    if let Ok(mut frame) = self.frame.try_write() {
                        *frame = None;
                    }
                }
                LoaderEffect::Navigate { url } => browser::navigate(&url),
                LoaderEffect::OpenInNewTab { url } => browser::open_in_new_tab(&url),
                LoaderEffect::Report(error) => match error {
                    LoadError::ResourceLoadTimeout { .. } => {
                        log::warn!("Load timeout, showing the fallback: {error}")
                    }
                    LoadError::ResourceLoadFailure { .. } => {
                        log::warn!("Load failure, showing the fallback: {error}")
                    }
                    LoadError::ScriptAttachmentError { .. } => {
                        log::warn!("Script attachment failed, page stays usable: {error}")
                    }
                },
            }
        }
    }
}
