use crate::report::report_errors::ReportErrors;
use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Colour-tagged stderr logger. Stdout stays reserved for the report itself.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

fn tag(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[31m[ERROR]",
        Level::Warn => "\x1b[35m[WARN] ",
        Level::Info => "\x1b[32m[INFO] ",
        Level::Debug => "\x1b[33m[DEBUG]",
        Level::Trace => "\x1b[36m[TRACE]",
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}[{}]\x1b[0m {}",
                tag(record.level()),
                Utc::now().format("%H:%M:%S"),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<(), ReportErrors> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
