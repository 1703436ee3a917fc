use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "MINESWEEPER_LOG";

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{} - {}", record.level(), record.args());
        #[cfg(all(feature = "web", target_arch = "wasm32"))]
        web_sys::console::log_1(&line.into());
        #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
        eprintln!("{}", line);
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a level name such as `debug`; `None` when unrecognised.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Initialize logging with a level taken from the `MINESWEEPER_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid (always the case in a browser).
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| parse_level(&lvl))
        .unwrap_or(LevelFilter::Info);
    init_logging_with_level(level);
}

/// Install the logger with an explicit level. Later calls only adjust the level.
pub fn init_logging_with_level(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
