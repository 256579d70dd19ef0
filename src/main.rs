#![cfg_attr(feature = "desktop", windows_subsystem = "windows")]
mod browser;
mod components;
mod config;
mod helper_hooks;
mod loader;
mod logging;
mod state_management;
mod utils;
mod views;

mod prelude {
    pub use super::helper_hooks::prelude::*;
    pub use super::loader::prelude::*;
    pub use super::state_management::prelude::*;
    pub use dioxus::prelude::*;
}

use serde::{Deserialize, Serialize};

use prelude::*;

use views::{
    dashboard::DashboardView, dashboard_redirect::DashboardRedirectView, landing::LandingView,
};

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    LandingView {},
    #[nest("/dashboard")]
        #[route("/")]
        DashboardView {},
        #[route("/redirect")]
        DashboardRedirectView {},
    #[end_nest]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

static TITLE: &str = "Urban Flood Risk Analytics Portal - Team Codezilla";
static DESCRIPTION: &str =
    "Landing page with an animated background that connects to the Urban Flood Risk Analytics dashboard.";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    state_management::use_init_services();

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        document::Meta { name: "description", content: DESCRIPTION }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Stylesheet { href: "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;600;700&display=swap" }
        document::Stylesheet { href: asset!("/assets/main.css") }

        div { id: "app", Router::<Route> {} }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "We are terribly sorry, but the page you requested doesn't exist." }
            Link { class: "btn btn-primary", to: Route::LandingView {}, "Back to the portal" }
            pre { "log:\nattemped to navigate to: {route:?}" }
        }
    }
}

fn main() {
    logging::init();

    log::info!("starting portal");
    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config, WindowBuilder};
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1920, 1080))
                    .with_maximized(true)
                    .with_resizable(true),
            ),
        )
        .launch(App)
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App)
}
