use std::fmt::Display;

use log::{Level, LevelFilter, Log, SetLoggerError};

fn prefix(level: Level) -> impl Display {
    match level {
        Level::Trace => console::style(".").bold().white(),
        Level::Debug => console::style("?").bold().cyan(),
        Level::Info => console::style(">").bold().blue(),
        Level::Warn => console::style("!").bold().yellow(),
        Level::Error => console::style("X").bold().red(),
    }
}

/// Install the stderr logger, keeping messages up to `level`.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&Logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Prefix the first line of `message` with the level glyph and indent the rest.
fn format_record(level: Level, message: &str) -> String {
    let mut lines = message.lines();
    let mut result = match lines.next() {
        Some(line) => format!("{} {line}", prefix(level)),
        None => format!("{}", prefix(level)),
    };

    for line in lines {
        result.push_str("\n  ");
        result.push_str(line);
    }

    result
}

struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("{}", format_record(record.level(), &record.args().to_string()));
    }

    fn flush(&self) {}
}
