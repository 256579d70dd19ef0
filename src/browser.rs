//! Platform actions the loaders need from the page.
//!
//! Everything goes through `document::eval` so the same code drives the web
//! renderer and the desktop webview. Values cross the bridge through
//! `dioxus.recv()` rather than being formatted into the script source.

use dioxus::prelude::*;
use thiserror::Error;

use crate::utils::CCStr;

const INJECT_SCRIPT_JS: &str = r#"
const url = await dioxus.recv();
const script = document.createElement("script");
script.src = url;
script.async = true;
script.onload = () => dioxus.send("load");
script.onerror = () => {
    script.remove();
    dioxus.send("error");
};
document.head.appendChild(script);
"#;

const INIT_EFFECTS_JS: &str = r#"
const us = window.UnicornStudio;
if (us && typeof us.init === "function") {
    Promise.resolve(us.init()).catch((e) => console.warn("UnicornStudio.init failed", e));
}
"#;

const NAVIGATE_JS: &str = r#"
const url = await dioxus.recv();
window.location.href = url;
"#;

#[cfg(not(feature = "desktop"))]
const OPEN_IN_NEW_TAB_JS: &str = r#"
const url = await dioxus.recv();
window.open(url, "_blank", "noopener,noreferrer");
"#;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrowserError {
    #[error("script {url} could not be fetched")]
    ScriptLoad { url: CCStr },
    #[error("eval bridge failure: {0}")]
    Eval(String),
    #[error("unexpected answer from the page: {0:?}")]
    UnexpectedAnswer(String),
}

/// Insert a `<script>` tag and wait for its `load` or `error` event.
///
/// On error the tag is removed again, so a later attempt starts from a clean document.
pub async fn inject_script(url: &CCStr) -> Result<(), BrowserError> {
    log::debug!("inject_script - {url}");
    let mut eval = document::eval(INJECT_SCRIPT_JS);
    eval.send(url.to_string())
        .map_err(|e| BrowserError::Eval(format!("{e:?}")))?;
    let answer: String = eval
        .recv()
        .await
        .map_err(|e| BrowserError::Eval(format!("{e:?}")))?;
    match answer.as_str() {
        "load" => Ok(()),
        "error" => Err(BrowserError::ScriptLoad { url: url.clone() }),
        _ => Err(BrowserError::UnexpectedAnswer(answer)),
    }
}

/// Run the global entry point of the visual-effects script over the scenes currently in the DOM
pub fn init_effects_scenes() {
    document::eval(INIT_EFFECTS_JS);
}

/// Send the current browsing context to `url`
pub fn navigate(url: &str) {
    log::info!("Navigating to {url}");
    let eval = document::eval(NAVIGATE_JS);
    if let Err(e) = eval.send(url) {
        log::error!("Could not navigate to {url}: {e:?}");
    }
}

#[cfg(not(feature = "desktop"))]
pub fn open_in_new_tab(url: &str) {
    log::info!("Opening {url} in a new tab");
    let eval = document::eval(OPEN_IN_NEW_TAB_JS);
    if let Err(e) = eval.send(url) {
        log::error!("Could not open {url}: {e:?}");
    }
}

#[cfg(feature = "desktop")]
pub fn open_in_new_tab(url: &str) {
    log::info!("Opening {url} in the system browser");
    _ = open::that_in_background(url);
}
