use crate::prelude::*;

use crate::components::svg::{ArrowLeft, DrawSvg, SvgSize::Size6};

/// Floating back button, top-left of full-screen views
#[component]
pub fn BackButton(route: crate::Route) -> Element {
    let click_back = move |_| {
        navigator().push(route.clone());
    };

    rsx! {
        button {
            class: "back-button",
            title: "Back to Landing Page",
            onclick: click_back,
            DrawSvg::<ArrowLeft> { size: Size6 }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner" }
    }
}
