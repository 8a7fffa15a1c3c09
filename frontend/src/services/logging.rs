use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// `log` backend that writes to the browser console.
///
/// Records are tagged with their target, so `log::info!(target: "calendar", ..)`
/// shows up as `[calendar] ..`.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }
}

fn format_line(component: &str, message: &str) -> String {
    let component = component.rsplit("::").next().unwrap_or(component);
    format!("[{}] {}", component, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_line_uses_last_path_segment() {
        assert_eq!(
            format_line("ignite_call_domain::blocked_dates", "Dropping stale blocked dates"),
            "[blocked_dates] Dropping stale blocked dates"
        );
        assert_eq!(format_line("calendar", "hi"), "[calendar] hi");
    }
}
