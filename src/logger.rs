use log::LevelFilter;

/// Initialize the logger; `RUST_LOG` still takes precedence over `level`.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .format_target(false)
        .init();
}
