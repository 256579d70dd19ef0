//! # Loader Module
//!
//! Decides what the user sees while a third-party resource loads, and what
//! they can do when it never does.
//!
//! The portal embeds two kinds of resources it does not control: the
//! visual-effects script behind the animated background, and the analytics
//! dashboard shown in an iframe. Both follow the same shape: attach the
//! resource, wait for a success signal, an error signal or a timeout, then
//! either show the resource or a deterministic fallback.
//!
//! ## Core Concepts
//!
//! - [`ExternalLoader`](machine::ExternalLoader): the state machine. It performs no I/O,
//!   every operation returns the [`LoaderEffect`](machine::LoaderEffect)s the host executes
//! - [`AttemptId`](state::AttemptId): stamped on every asynchronous callback so stale ones are dropped
//! - [`ScriptRegistry`](registry::ScriptRegistry): which script URLs are already attached,
//!   consulted before inserting a new tag
//! - [`Fallback`](state::Fallback): the view-level outcome of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use crate::loader::prelude::*;
//!
//! let mut registry = InMemoryScriptRegistry::new();
//! let mut loader = ExternalLoader::new(
//!     LoaderConfig::frame("https://example-dashboard.test/").with_timeout(Some(5000)),
//! );
//! let effects = loader.mount(&mut registry);
//! // ... execute `effects`, then feed the outcome back
//! let effects = loader.on_success(loader.attempt());
//! assert_eq!(loader.state(), LoadState::Ready);
//! ```

mod config;
mod error;
mod machine;
mod registry;
mod state;

pub mod prelude {
    pub use super::config::{FallbackAction, LoaderConfig, ResourceKind};
    pub use super::error::LoadError;
    pub use super::machine::{
        Effects, ExternalLoader, LoaderEffect, ScriptAttachMode, TimerPurpose,
    };
    pub use super::registry::{AttachmentStatus, InMemoryScriptRegistry, ScriptRegistry};
    pub use super::state::{AttemptId, Fallback, LoadState};
}
