use super::{
    config::{FallbackAction, LoaderConfig, ResourceKind},
    error::LoadError,
    registry::{AttachmentStatus, ScriptRegistry},
    state::{AttemptId, Fallback, LoadState},
};
use crate::utils::CCStr;

/// How a script attachment must be carried out, decided from the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptAttachMode {
    /// Nobody attached it yet (or the previous tag failed and was removed)
    Insert,
    /// Another loader inserted it, wait for its outcome
    Await,
    /// Already loaded in the document
    Reuse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPurpose {
    /// Expiry means the resource gave no success signal in time
    Timeout,
    /// Expiry means navigate to the resource
    Redirect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTimer {
    attempt: AttemptId,
    purpose: TimerPurpose,
}

/// Side effects the host has to carry out on behalf of the loader.
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderEffect {
    AttachScript {
        url: CCStr,
        attempt: AttemptId,
        mode: ScriptAttachMode,
    },
    /// Point an iframe at `url`. A new attempt must produce a fresh iframe, even for the same URL.
    AttachFrame { url: CCStr, attempt: AttemptId },
    /// Replaces any timer still held by the host
    ScheduleTimer {
        attempt: AttemptId,
        delay_ms: u64,
        purpose: TimerPurpose,
    },
    CancelTimer,
    /// Drop every listener registered for the loader
    Detach,
    Navigate { url: CCStr },
    OpenInNewTab { url: CCStr },
    Report(LoadError),
}

pub type Effects = Vec<LoaderEffect>;

/// State machine deciding what the user sees while an external resource loads.
///
/// The machine does no I/O. Every operation returns the [`LoaderEffect`]s the
/// host must execute, and every asynchronous outcome comes back in through
/// [`on_success`](Self::on_success), [`on_error`](Self::on_error) or
/// [`on_timer`](Self::on_timer) stamped with the [`AttemptId`] it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLoader {
    config: LoaderConfig,
    state: LoadState,
    attempt: AttemptId,
    pending_timer: Option<PendingTimer>,
    navigated: bool,
    disposed: bool,
    last_error: Option<LoadError>,
}

impl ExternalLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            state: LoadState::Idle,
            attempt: AttemptId::default(),
            pending_timer: None,
            navigated: false,
            disposed: false,
            last_error: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }
    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }
    #[cfg(test)]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn fallback(&self) -> Fallback {
        let url = self.config.resource_url.clone();
        match (self.config.fallback_action, self.state) {
            (FallbackAction::RedirectAfterDelay { delay_ms }, _) => {
                Fallback::Redirecting { url, delay_ms }
            }
            (_, LoadState::Idle | LoadState::Loading) => Fallback::Loading,
            (_, LoadState::Ready) => Fallback::None,
            (FallbackAction::ShowStaticBackground, LoadState::Failed | LoadState::TimedOut) => {
                Fallback::StaticBackground
            }
            (FallbackAction::OpenInNewTab, LoadState::Failed | LoadState::TimedOut) => {
                Fallback::Recovery { url }
            }
        }
    }

    /// `Idle -> Loading`. Does nothing if the loader was already mounted.
    pub fn mount<R: ScriptRegistry + ?Sized>(&mut self, registry: &mut R) -> Effects {
        let mut effects = Effects::new();
        if self.disposed || self.state != LoadState::Idle {
            return effects;
        }
        self.begin_attempt(registry, &mut effects);
        effects
    }

    /// `Failed | TimedOut -> Loading`, restarting the attachment from scratch
    pub fn retry<R: ScriptRegistry + ?Sized>(&mut self, registry: &mut R) -> Effects {
        let mut effects = Effects::new();
        if self.disposed || !self.state.is_failure() {
            log::debug!(
                "ExternalLoader({}) - retry ignored in state {}",
                self.config.resource_url,
                self.state
            );
            return effects;
        }
        self.begin_attempt(registry, &mut effects);
        effects
    }

    pub fn on_success(&mut self, attempt: AttemptId) -> Effects {
        let mut effects = Effects::new();
        if !self.accepts(attempt, "success")
            || self.state != LoadState::Loading
            || self.config.kind == ResourceKind::Navigation
        {
            return effects;
        }
        self.state = LoadState::Ready;
        self.cancel_timer(&mut effects);
        effects
    }

    pub fn on_error(&mut self, attempt: AttemptId) -> Effects {
        let error = LoadError::ResourceLoadFailure {
            url: self.config.resource_url.clone(),
        };
        self.fail(attempt, error)
    }

    /// The attachment itself could not be set up (CDN unreachable, blocked by a content blocker...)
    pub fn on_attachment_error(&mut self, attempt: AttemptId, reason: impl Into<CCStr>) -> Effects {
        let error = LoadError::ScriptAttachmentError {
            url: self.config.resource_url.clone(),
            reason: reason.into(),
        };
        self.fail(attempt, error)
    }

    pub fn on_timer(&mut self, attempt: AttemptId) -> Effects {
        let mut effects = Effects::new();
        if !self.accepts(attempt, "timer") {
            return effects;
        }
        let Some(pending) = self.pending_timer.filter(|p| p.attempt == attempt) else {
            return effects;
        };
        self.pending_timer = None;
        match pending.purpose {
            TimerPurpose::Timeout if self.state == LoadState::Loading => {
                self.state = LoadState::TimedOut;
                self.report(
                    LoadError::ResourceLoadTimeout {
                        url: self.config.resource_url.clone(),
                        timeout_ms: self.config.timeout_ms.unwrap_or_default(),
                    },
                    &mut effects,
                );
            }
            TimerPurpose::Timeout => (),
            TimerPurpose::Redirect => self.navigate(&mut effects),
        }
        effects
    }

    /// Skip the redirect delay. Navigation still happens only once.
    pub fn open_now(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.disposed
            || !matches!(
                self.config.fallback_action,
                FallbackAction::RedirectAfterDelay { .. }
            )
        {
            return effects;
        }
        self.cancel_timer(&mut effects);
        self.navigate(&mut effects);
        effects
    }

    pub fn open_in_new_tab(&self) -> Effects {
        if self.disposed {
            return Effects::new();
        }
        vec![LoaderEffect::OpenInNewTab {
            url: self.config.resource_url.clone(),
        }]
    }

    /// Cancels the pending timer and detaches listeners. Every later call is a no-op.
    pub fn dispose(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.disposed {
            return effects;
        }
        log::debug!(
            "ExternalLoader({}) - disposed in state {}",
            self.config.resource_url,
            self.state
        );
        self.disposed = true;
        self.attempt = self.attempt.next();
        self.cancel_timer(&mut effects);
        effects.push(LoaderEffect::Detach);
        effects
    }

    fn accepts(&self, attempt: AttemptId, what: &str) -> bool {
        let accepted = !self.disposed && attempt == self.attempt;
        if !accepted {
            log::debug!(
                "ExternalLoader({}) - dropping stale {what} from attempt {attempt} (current {}, disposed {})",
                self.config.resource_url,
                self.attempt,
                self.disposed
            );
        }
        accepted
    }

    fn begin_attempt<R: ScriptRegistry + ?Sized>(&mut self, registry: &mut R, effects: &mut Effects) {
        self.attempt = self.attempt.next();
        self.state = LoadState::Loading;
        self.last_error = None;
        self.cancel_timer(effects);

        let attempt = self.attempt;
        let url = self.config.resource_url.clone();
        log::debug!("ExternalLoader({url}) - loading, attempt {attempt}");

        match self.config.kind {
            ResourceKind::Script => {
                let mode = match registry.status(&url) {
                    Some(AttachmentStatus::Loaded) => ScriptAttachMode::Reuse,
                    Some(AttachmentStatus::Pending) => ScriptAttachMode::Await,
                    Some(AttachmentStatus::Failed) | None => {
                        registry.record(url.clone(), AttachmentStatus::Pending);
                        ScriptAttachMode::Insert
                    }
                };
                effects.push(LoaderEffect::AttachScript { url, attempt, mode });
            }
            ResourceKind::Frame => effects.push(LoaderEffect::AttachFrame { url, attempt }),
            ResourceKind::Navigation => (),
        }

        match (self.config.fallback_action, self.config.timeout_ms) {
            (FallbackAction::RedirectAfterDelay { delay_ms }, _) => {
                self.schedule_timer(delay_ms, TimerPurpose::Redirect, effects)
            }
            (_, Some(timeout_ms)) => self.schedule_timer(timeout_ms, TimerPurpose::Timeout, effects),
            (_, None) => (),
        }
    }

    fn fail(&mut self, attempt: AttemptId, error: LoadError) -> Effects {
        let mut effects = Effects::new();
        if !self.accepts(attempt, "error")
            || self.state != LoadState::Loading
            || self.config.kind == ResourceKind::Navigation
        {
            return effects;
        }
        self.state = LoadState::Failed;
        self.cancel_timer(&mut effects);
        self.report(error, &mut effects);
        effects
    }

    fn report(&mut self, error: LoadError, effects: &mut Effects) {
        self.last_error = Some(error.clone());
        effects.push(LoaderEffect::Report(error));
    }

    fn schedule_timer(&mut self, delay_ms: u64, purpose: TimerPurpose, effects: &mut Effects) {
        let attempt = self.attempt;
        self.pending_timer = Some(PendingTimer { attempt, purpose });
        effects.push(LoaderEffect::ScheduleTimer {
            attempt,
            delay_ms,
            purpose,
        });
    }

    fn cancel_timer(&mut self, effects: &mut Effects) {
        if self.pending_timer.take().is_some() {
            effects.push(LoaderEffect::CancelTimer);
        }
    }

    fn navigate(&mut self, effects: &mut Effects) {
        if self.navigated {
            return;
        }
        self.navigated = true;
        self.state = LoadState::Ready;
        effects.push(LoaderEffect::Navigate {
            url: self.config.resource_url.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::registry::InMemoryScriptRegistry;

    const DASHBOARD: &str = "https://example-dashboard.test/";
    const EFFECTS_JS: &str = "https://cdn.example.test/effects.js";

    fn mounted(config: LoaderConfig) -> (ExternalLoader, Effects) {
        let mut loader = ExternalLoader::new(config);
        let effects = loader.mount(&mut InMemoryScriptRegistry::new());
        (loader, effects)
    }

    fn count_navigations(effects: &[LoaderEffect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, LoaderEffect::Navigate { .. }))
            .count()
    }

    #[test]
    fn every_kind_starts_loading_after_mount() {
        let configs = [
            LoaderConfig::frame(DASHBOARD),
            LoaderConfig::script(EFFECTS_JS),
            LoaderConfig::frame(DASHBOARD).with_timeout(Some(5000)),
        ];
        for config in configs {
            let loader = ExternalLoader::new(config.clone());
            assert_eq!(loader.state(), LoadState::Idle);
            let (loader, _) = mounted(config);
            assert_eq!(loader.state(), LoadState::Loading);
            assert_eq!(loader.fallback(), Fallback::Loading);
        }
    }

    #[test]
    fn mount_twice_does_nothing_the_second_time() {
        let mut registry = InMemoryScriptRegistry::new();
        let mut loader = ExternalLoader::new(LoaderConfig::frame(DASHBOARD));
        let first = loader.mount(&mut registry);
        let attempt = loader.attempt();
        assert!(!first.is_empty());
        assert!(loader.mount(&mut registry).is_empty());
        assert_eq!(loader.attempt(), attempt);
    }

    #[test]
    fn frame_without_timeout_becomes_ready_on_load() {
        let (mut loader, effects) = mounted(LoaderConfig::frame(DASHBOARD));
        let attempt = loader.attempt();
        assert_eq!(
            effects,
            vec![LoaderEffect::AttachFrame {
                url: DASHBOARD.into(),
                attempt
            }]
        );

        let effects = loader.on_success(attempt);
        assert!(effects.is_empty());
        assert_eq!(loader.state(), LoadState::Ready);
        assert_eq!(loader.fallback(), Fallback::None);
    }

    #[test]
    fn success_before_timeout_cancels_the_timer() {
        let (mut loader, effects) =
            mounted(LoaderConfig::frame(DASHBOARD).with_timeout(Some(5000)));
        let attempt = loader.attempt();
        assert!(effects.contains(&LoaderEffect::ScheduleTimer {
            attempt,
            delay_ms: 5000,
            purpose: TimerPurpose::Timeout
        }));

        assert_eq!(loader.on_success(attempt), vec![LoaderEffect::CancelTimer]);
        assert_eq!(loader.state(), LoadState::Ready);

        // a timer callback already queued before the cancellation is harmless
        assert!(loader.on_timer(attempt).is_empty());
        assert_eq!(loader.state(), LoadState::Ready);
    }

    #[test]
    fn silently_blocked_frame_times_out_into_recovery() {
        let (mut loader, _) = mounted(LoaderConfig::frame(DASHBOARD).with_timeout(Some(5000)));
        let attempt = loader.attempt();

        let effects = loader.on_timer(attempt);
        assert_eq!(loader.state(), LoadState::TimedOut);
        assert_eq!(
            effects,
            vec![LoaderEffect::Report(LoadError::ResourceLoadTimeout {
                url: DASHBOARD.into(),
                timeout_ms: 5000
            })]
        );
        assert_eq!(
            loader.fallback(),
            Fallback::Recovery {
                url: DASHBOARD.into()
            }
        );
    }

    #[test]
    fn late_success_after_timeout_is_ignored() {
        let (mut loader, _) = mounted(LoaderConfig::frame(DASHBOARD).with_timeout(Some(5000)));
        let attempt = loader.attempt();
        loader.on_timer(attempt);

        assert!(loader.on_success(attempt).is_empty());
        assert!(loader.on_error(attempt).is_empty());
        assert_eq!(loader.state(), LoadState::TimedOut);
    }

    #[test]
    fn retry_after_timeout_reattaches_frame_with_a_new_attempt() {
        let mut registry = InMemoryScriptRegistry::new();
        let mut loader =
            ExternalLoader::new(LoaderConfig::frame(DASHBOARD).with_timeout(Some(5000)));
        loader.mount(&mut registry);
        let first = loader.attempt();
        loader.on_timer(first);

        let effects = loader.retry(&mut registry);
        let second = loader.attempt();
        assert_ne!(first, second);
        assert_eq!(loader.state(), LoadState::Loading);
        assert_eq!(loader.fallback(), Fallback::Loading);
        assert!(loader.last_error().is_none());
        assert_eq!(
            effects,
            vec![
                LoaderEffect::AttachFrame {
                    url: DASHBOARD.into(),
                    attempt: second
                },
                LoaderEffect::ScheduleTimer {
                    attempt: second,
                    delay_ms: 5000,
                    purpose: TimerPurpose::Timeout
                },
            ]
        );

        // signals and timers from the first iframe no longer count
        assert!(loader.on_success(first).is_empty());
        assert!(loader.on_timer(first).is_empty());
        assert_eq!(loader.state(), LoadState::Loading);
        loader.on_success(second);
        assert_eq!(loader.state(), LoadState::Ready);

        // same after an early error: the first timeout must not expire the retry
        let mut loader =
            ExternalLoader::new(LoaderConfig::frame(DASHBOARD).with_timeout(Some(5000)));
        loader.mount(&mut registry);
        let first = loader.attempt();
        loader.on_error(first);
        assert_eq!(loader.state(), LoadState::Failed);
        loader.retry(&mut registry);
        assert!(loader.on_timer(first).is_empty());
        assert_eq!(loader.state(), LoadState::Loading);
        assert_eq!(loader.fallback(), Fallback::Loading);
        let effects = loader.on_timer(loader.attempt());
        assert_eq!(loader.state(), LoadState::TimedOut);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn retry_after_error_restarts_loading() {
        let mut registry = InMemoryScriptRegistry::new();
        let mut loader = ExternalLoader::new(LoaderConfig::frame(DASHBOARD));
        loader.mount(&mut registry);
        let first = loader.attempt();
        loader.on_error(first);
        assert_eq!(loader.state(), LoadState::Failed);

        let effects = loader.retry(&mut registry);
        assert_eq!(loader.state(), LoadState::Loading);
        assert!(matches!(
            effects.as_slice(),
            [LoaderEffect::AttachFrame { attempt, .. }] if *attempt != first
        ));
    }

    #[test]
    fn retry_is_ignored_unless_failed() {
        let mut registry = InMemoryScriptRegistry::new();
        let mut loader = ExternalLoader::new(LoaderConfig::frame(DASHBOARD));
        assert!(loader.retry(&mut registry).is_empty());
        loader.mount(&mut registry);
        let attempt = loader.attempt();
        assert!(loader.retry(&mut registry).is_empty());
        loader.on_success(attempt);
        assert!(loader.retry(&mut registry).is_empty());
        assert_eq!(loader.attempt(), attempt);
        assert_eq!(loader.state(), LoadState::Ready);
    }

    #[test]
    fn dispose_blocks_every_later_mutation() {
        let mut registry = InMemoryScriptRegistry::new();
        let mut loader =
            ExternalLoader::new(LoaderConfig::frame(DASHBOARD).with_timeout(Some(5000)));
        loader.mount(&mut registry);
        let attempt = loader.attempt();

        assert_eq!(
            loader.dispose(),
            vec![LoaderEffect::CancelTimer, LoaderEffect::Detach]
        );
        assert!(loader.is_disposed());

        assert!(loader.on_timer(attempt).is_empty());
        assert!(loader.on_success(attempt).is_empty());
        assert!(loader.on_error(attempt).is_empty());
        assert!(loader.retry(&mut registry).is_empty());
        assert!(loader.open_in_new_tab().is_empty());
        assert!(loader.dispose().is_empty());
        assert_eq!(loader.state(), LoadState::Loading);
    }

    #[test]
    fn dispose_after_failure_still_detaches() {
        let (mut loader, _) = mounted(LoaderConfig::frame(DASHBOARD));
        loader.on_error(loader.attempt());
        assert_eq!(loader.dispose(), vec![LoaderEffect::Detach]);
        assert!(loader.retry(&mut InMemoryScriptRegistry::new()).is_empty());
        assert_eq!(loader.state(), LoadState::Failed);
    }

    #[test]
    fn failed_background_script_shows_static_background_silently() {
        let (mut loader, _) = mounted(LoaderConfig::script(EFFECTS_JS).with_timeout(Some(8000)));
        let effects = loader.on_error(loader.attempt());

        assert_eq!(loader.state(), LoadState::Failed);
        assert_eq!(loader.fallback(), Fallback::StaticBackground);
        assert_eq!(
            effects,
            vec![
                LoaderEffect::CancelTimer,
                LoaderEffect::Report(LoadError::ResourceLoadFailure {
                    url: EFFECTS_JS.into()
                }),
            ]
        );
    }

    #[test]
    fn attachment_error_is_reported_as_such() {
        let (mut loader, _) = mounted(LoaderConfig::script(EFFECTS_JS));
        let effects = loader.on_attachment_error(loader.attempt(), "eval channel closed");
        assert_eq!(loader.state(), LoadState::Failed);
        assert!(matches!(
            loader.last_error(),
            Some(LoadError::ScriptAttachmentError { reason, .. }) if &**reason == "eval channel closed"
        ));
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn script_is_inserted_once_then_awaited_then_reused() {
        let mut registry = InMemoryScriptRegistry::new();

        let mut first = ExternalLoader::new(LoaderConfig::script(EFFECTS_JS));
        let effects = first.mount(&mut registry);
        assert!(matches!(
            effects.as_slice(),
            [LoaderEffect::AttachScript { mode: ScriptAttachMode::Insert, .. }]
        ));
        assert_eq!(registry.status(EFFECTS_JS), Some(AttachmentStatus::Pending));

        let mut second = ExternalLoader::new(LoaderConfig::script(EFFECTS_JS));
        let effects = second.mount(&mut registry);
        assert!(matches!(
            effects.as_slice(),
            [LoaderEffect::AttachScript { mode: ScriptAttachMode::Await, .. }]
        ));

        registry.record(EFFECTS_JS.into(), AttachmentStatus::Loaded);
        let mut third = ExternalLoader::new(LoaderConfig::script(EFFECTS_JS));
        let effects = third.mount(&mut registry);
        assert!(matches!(
            effects.as_slice(),
            [LoaderEffect::AttachScript { mode: ScriptAttachMode::Reuse, .. }]
        ));
    }

    #[test]
    fn script_retry_reuses_a_script_that_loaded_late() {
        let mut registry = InMemoryScriptRegistry::new();
        let mut loader =
            ExternalLoader::new(LoaderConfig::script(EFFECTS_JS).with_timeout(Some(8000)));
        loader.mount(&mut registry);
        loader.on_timer(loader.attempt());
        assert_eq!(loader.fallback(), Fallback::StaticBackground);

        registry.record(EFFECTS_JS.into(), AttachmentStatus::Loaded);
        let effects = loader.retry(&mut registry);
        assert!(matches!(
            effects.first(),
            Some(LoaderEffect::AttachScript { mode: ScriptAttachMode::Reuse, .. })
        ));
    }

    #[test]
    fn script_retry_reinserts_a_removed_script() {
        let mut registry = InMemoryScriptRegistry::new();
        let mut loader = ExternalLoader::new(LoaderConfig::script(EFFECTS_JS));
        loader.mount(&mut registry);
        registry.record(EFFECTS_JS.into(), AttachmentStatus::Failed);
        loader.on_error(loader.attempt());

        let effects = loader.retry(&mut registry);
        assert!(matches!(
            effects.as_slice(),
            [LoaderEffect::AttachScript { mode: ScriptAttachMode::Insert, .. }]
        ));
        assert_eq!(registry.status(EFFECTS_JS), Some(AttachmentStatus::Pending));
    }

    #[test]
    fn redirect_navigates_once_when_user_clicks_before_the_delay() {
        let (mut loader, effects) = mounted(LoaderConfig::redirect(DASHBOARD, 2000));
        let attempt = loader.attempt();
        assert_eq!(
            effects,
            vec![LoaderEffect::ScheduleTimer {
                attempt,
                delay_ms: 2000,
                purpose: TimerPurpose::Redirect
            }]
        );

        let mut all = loader.open_now();
        assert_eq!(
            all,
            vec![
                LoaderEffect::CancelTimer,
                LoaderEffect::Navigate {
                    url: DASHBOARD.into()
                }
            ]
        );
        all.extend(loader.on_timer(attempt));
        all.extend(loader.open_now());
        assert_eq!(count_navigations(&all), 1);
    }

    #[test]
    fn redirect_timer_navigates_and_later_clicks_do_not() {
        let (mut loader, _) = mounted(LoaderConfig::redirect(DASHBOARD, 2000));
        let attempt = loader.attempt();

        let mut all = loader.on_timer(attempt);
        assert_eq!(count_navigations(&all), 1);
        assert_eq!(loader.state(), LoadState::Ready);
        all.extend(loader.open_now());
        assert_eq!(count_navigations(&all), 1);
        assert_eq!(
            loader.fallback(),
            Fallback::Redirecting {
                url: DASHBOARD.into(),
                delay_ms: 2000
            }
        );
    }

    #[test]
    fn redirect_ignores_load_signals() {
        let (mut loader, _) = mounted(LoaderConfig::redirect(DASHBOARD, 2000));
        let attempt = loader.attempt();
        assert!(loader.on_success(attempt).is_empty());
        assert!(loader.on_error(attempt).is_empty());
        assert_eq!(loader.state(), LoadState::Loading);
        assert_eq!(count_navigations(&loader.on_timer(attempt)), 1);
    }

    #[test]
    fn open_now_is_only_for_redirects() {
        let (mut loader, _) = mounted(LoaderConfig::frame(DASHBOARD));
        assert!(loader.open_now().is_empty());
        assert_eq!(
            loader.open_in_new_tab(),
            vec![LoaderEffect::OpenInNewTab {
                url: DASHBOARD.into()
            }]
        );
    }
}
