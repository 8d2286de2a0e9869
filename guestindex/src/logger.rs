use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Sets up `env_logger` once per process. `RUST_LOG` overrides the defaults.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("guestindex", LevelFilter::Info)
            .filter_module("guestindex::index", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // a test harness may already have installed a logger
        let _ = builder.try_init();
    });
}
