use crate::prelude::*;

use crate::components::{
    misc::Spinner,
    svg::{DrawSvg, ExternalLink, Refresh, SvgSize::Size5, SvgSize::Size16, Warning},
};

const FRAME_TITLE: &str = "Urban Flood Risk Analytics Dashboard";
const FRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// The external dashboard in a full-size iframe.
///
/// An overlay covers the frame until it reports `load`. When the frame
/// errors, or stays silent past the timeout (a refused embedding usually
/// fires nothing at all), the overlay turns into recovery actions.
#[component]
pub fn DashboardFrame() -> Element {
    let config = state_management::APP_CONFIG.read().clone();
    let mut loader = helper_hooks::use_external_loader(config.dashboard_loader());

    log::debug!("DashboardFrame Rendered: {}", loader.state());
    if let Some(error) = loader.last_error() {
        log::debug!("DashboardFrame - showing recovery actions after: {error}");
    }

    use_drop(|| log::debug!("DashboardFrame Dropped"));

    rsx! {
        {match loader.fallback() {
            Fallback::Loading => rsx! {
                LoadingOverlay {}
            },
            Fallback::Recovery { url } => rsx! {
                div { class: "overlay",
                    div { class: "overlay-content",
                        div { class: "warning-icon",
                            DrawSvg::<Warning> { size: Size16 }
                        }
                        div { class: "overlay-title", "Dashboard Unavailable" }
                        div { class: "overlay-text",
                            "The analytics dashboard could not be displayed here. It may require \
                            you to sign in, or refuse to be embedded in another page."
                        }
                        div { class: "overlay-text", "You can open it directly at {url}" }
                        div { class: "overlay-actions",
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| loader.open_in_new_tab(),
                                DrawSvg::<ExternalLink> { size: Size5 }
                                "Open in New Tab"
                            }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| loader.retry(),
                                DrawSvg::<Refresh> { size: Size5 }
                                "Retry"
                            }
                        }
                    }
                }
            },
            _ => rsx! {},
        }}
        for frame in loader.frame() {
            iframe {
                key: "{frame.attempt}",
                class: "dashboard-frame",
                src: "{frame.url}",
                title: FRAME_TITLE,
                allow: FRAME_ALLOW,
                allowfullscreen: true,
                referrerpolicy: "no-referrer-when-downgrade",
                onload: move |_| loader.frame_loaded(frame.attempt),
                onerror: move |_| loader.frame_failed(frame.attempt),
            }
        }
    }
}

#[component]
fn LoadingOverlay() -> Element {
    rsx! {
        div { class: "overlay",
            div { class: "overlay-content",
                Spinner {}
                div { class: "overlay-title", "Loading Dashboard..." }
                div { class: "overlay-subtitle", "Team Codezilla" }
            }
        }
    }
}
