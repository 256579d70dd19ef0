mod external_loader;

pub mod prelude {
    pub use super::external_loader::{ExternalLoaderHandle, FrameAttachment};
    pub mod helper_hooks {
        pub use super::super::external_loader::{use_external_loader, use_on_first_ready};
    }
}
