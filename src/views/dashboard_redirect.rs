use crate::prelude::*;

use crate::components::misc::{BackButton, Spinner};

/// Leaves the portal for the dashboard after a short delay.
///
/// For deployments where the dashboard refuses to be framed at all.
#[component]
pub fn DashboardRedirectView() -> Element {
    log::debug!("DashboardRedirectView Rendered");

    let config = state_management::APP_CONFIG.read().clone();
    let mut loader = helper_hooks::use_external_loader(config.redirect_loader());

    use_drop(|| log::debug!("DashboardRedirectView Dropped"));

    let countdown = match loader.fallback() {
        Fallback::Redirecting { delay_ms, .. } => format_delay(delay_ms),
        _ => "shortly".to_owned(),
    };

    rsx! {
        div { class: "dashboard redirect",
            BackButton { route: crate::Route::LandingView {} }
            div { class: "overlay-content",
                Spinner {}
                div { class: "overlay-title", "Redirecting to Dashboard..." }
                div { class: "overlay-text",
                    "You will be redirected to the analytics dashboard {countdown}"
                }
                div { class: "overlay-subtitle", "Team Codezilla" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| loader.open_now(),
                    "Open Now"
                }
            }
        }
    }
}

fn format_delay(delay_ms: u64) -> String {
    match delay_ms {
        0 => "now".to_owned(),
        1000 => "in 1 second".to_owned(),
        ms if ms % 1000 == 0 => format!("in {} seconds", ms / 1000),
        ms => format!("in {:.1} seconds", ms as f64 / 1000.0),
    }
}
