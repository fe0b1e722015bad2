use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once; later calls are ignored.
///
/// `filter` uses the `env_logger` filter syntax ("info", "scribe=trace").
/// Without it `RUST_LOG` is honored, falling back to `warn`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.format_timestamp(None);
        builder.init();

        log::debug!("logging initialized");
    });
}
