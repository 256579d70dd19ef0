use crate::prelude::*;

use crate::browser;

/// Animated scene rendered by the third-party visual-effects script.
///
/// Purely cosmetic: while the script loads a neutral placeholder is shown,
/// and if it fails or times out a static gradient takes its place without
/// any message. Several instances on the same page share one script tag.
#[component]
pub fn AnimatedBackground(width: Option<u32>, height: Option<u32>) -> Element {
    let config = state_management::APP_CONFIG.read().clone();
    let loader = helper_hooks::use_external_loader(config.background_loader());
    let project_id = config.background_project_id.clone();

    log::debug!("AnimatedBackground Rendered: {}", loader.state());

    // The scene div only exists once ready, so the entry point must run after that render
    helper_hooks::use_on_first_ready(loader, browser::init_effects_scenes);

    use_drop(|| log::debug!("AnimatedBackground Dropped"));

    let size_style = match (width, height) {
        (Some(w), Some(h)) => format!("width: {w}px; height: {h}px;"),
        _ => "width: 100%; height: 100%;".to_owned(),
    };

    rsx! {
        div { class: "animated-background",
            {match loader.fallback() {
                Fallback::None => rsx! {
                    div {
                        class: "effects-scene",
                        style: "{size_style}",
                        "data-us-project": "{project_id}",
                        "data-us-production": "true",
                    }
                },
                Fallback::StaticBackground => rsx! {
                    div { class: "gradient-fallback" }
                },
                _ => rsx! {
                    div { class: "gradient-placeholder animate-pulse",
                        div { class: "placeholder-label", "Loading Animation..." }
                    }
                },
            }}
        }
    }
}
