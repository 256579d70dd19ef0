use crate::prelude::*;

use crate::{
    components::{
        animated_background::AnimatedBackground,
        svg::{ArrowRight, DrawSvg, SvgSize::Size6},
    },
    config::DashboardMode,
    utils::async_sleep,
};

/// Delay before the content starts fading in
const FADE_IN_DELAY_MS: u64 = 100;
const SCENE_SIZE_PX: u32 = 384;

#[component]
pub fn LandingView() -> Element {
    log::debug!("LandingView Rendered");

    let mut visible = use_signal(|| false);

    use_future(move || async move {
        async_sleep(FADE_IN_DELAY_MS).await;
        visible.set(true);
    });

    let take_me_to_project = move |_| {
        let route = match state_management::APP_CONFIG.read().dashboard_mode {
            DashboardMode::Embed => crate::Route::DashboardView {},
            DashboardMode::Redirect => crate::Route::DashboardRedirectView {},
        };
        navigator().push(route);
    };

    use_drop(|| log::debug!("LandingView Dropped"));

    rsx! {
        div { class: "landing",
            div { class: "landing-background", AnimatedBackground {} }

            div { class: "landing-content",
                AppearFrom { show: visible, delay_class: "delay-0",
                    div { class: "scene-frame",
                        AnimatedBackground { width: SCENE_SIZE_PX, height: SCENE_SIZE_PX }
                    }
                }

                AppearFrom { show: visible, delay_class: "delay-300",
                    h1 { class: "team-name", "Team Codezilla" }
                }

                AppearFrom { show: visible, delay_class: "delay-500",
                    button {
                        class: "btn btn-cta group",
                        onclick: take_me_to_project,
                        span { "Take me to project" }
                        DrawSvg::<ArrowRight> {
                            size: Size6,
                            base_class: "icon cta-arrow",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AppearFrom(show: ReadOnlySignal<bool>, delay_class: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "appear {delay_class}",
            class: if show() { "appear-shown" } else { "appear-hidden" },
            {children}
        }
    }
}
