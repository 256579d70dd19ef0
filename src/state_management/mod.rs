use dioxus::prelude::*;

use crate::config::AppConfig;

mod script_registry;
#[cfg(test)]
pub(crate) use script_registry::use_detached_script_registry;

/// Resolved once, from the variables seen at build time
pub static APP_CONFIG: GlobalSignal<AppConfig> = Signal::global(AppConfig::from_build_env);

pub fn use_init_services() {
    log::debug!("init_services - start");
    let _ = script_registry::use_script_registry_service();
    log::debug!("init_services - finished");
}

pub mod prelude {
    pub use super::script_registry::SharedScriptRegistry;

    pub mod state_management {
        pub use super::super::script_registry::use_script_registry;
        pub use super::super::APP_CONFIG;
    }
}
