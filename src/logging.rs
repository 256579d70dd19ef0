/// Install the `log` backend for the current platform.
///
/// Native builds go through `env_logger` and honour `RUST_LOG` at run time.
/// In the browser there is no environment, so the filter is the `RUST_LOG`
/// value seen at build time and records go to the devtools console.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    use std::str::FromStr;

    console_error_panic_hook::set_once();

    let level = option_env!("RUST_LOG")
        .and_then(|filter| log::Level::from_str(filter).ok())
        .unwrap_or(log::Level::Warn);
    _ = console_log::init_with_level(level);
}
