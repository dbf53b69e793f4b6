//! `log` backend that prints through the console.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::LOG_LEVEL;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        crate::print::_eprint(format_args!(
            "\u{1B}[{}m[{:>5}] {}\u{1B}[0m\n",
            level_to_color_code(record.level()),
            record.level(),
            record.args()
        ));
    }

    fn flush(&self) {}
}

fn level_to_color_code(level: Level) -> u8 {
    match level {
        Level::Error => 31, // Red
        Level::Warn => 93,  // BrightYellow
        Level::Info => 34,  // Blue
        Level::Debug => 32, // Green
        Level::Trace => 90, // BrightBlack
    }
}

fn level_filter(name: Option<&str>) -> LevelFilter {
    match name {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

pub fn init() {
    static LOGGER: ConsoleLogger = ConsoleLogger;
    // only fails if a logger is already installed
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_filter(LOG_LEVEL));
}
