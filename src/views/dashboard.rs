use crate::prelude::*;

use crate::components::{dashboard_frame::DashboardFrame, misc::BackButton};

#[component]
pub fn DashboardView() -> Element {
    log::debug!("DashboardView Rendered");

    use_drop(|| log::debug!("DashboardView Dropped"));

    rsx! {
        div { class: "dashboard",
            BackButton { route: crate::Route::LandingView {} }
            DashboardFrame {}
        }
    }
}
