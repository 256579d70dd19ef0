pub mod animated_background;
pub mod dashboard_frame;
pub mod misc;
pub mod svg;
