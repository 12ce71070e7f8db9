use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend that writes to the browser console, tagging each line with
/// the component (last path segment of the record target).
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", component_tag(record.target()), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(message),
            Level::Warn => gloo::console::warn!(message),
            Level::Info => gloo::console::info!(message),
            Level::Debug | Level::Trace => gloo::console::debug!(message),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    log::set_logger(&LOGGER)
        .map_err(|e| anyhow::anyhow!("failed to install console logger: {}", e))?;
    log::set_max_level(level);
    Ok(())
}

fn component_tag(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}
