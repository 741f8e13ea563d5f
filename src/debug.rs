//! Log bridge for vimterm.
//!
//! Routes `log::info!()` and friends from every crate to stderr as
//! timestamped lines, keeping stdout free for the settings output.
//!
//! Level precedence: `--log-level`, then `RUST_LOG` (a bare level such as
//! `debug`), then `warn`.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(&get_timestamp(), record);
        let mut sink = self.sink.lock();
        // Logging must never take the process down.
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

/// Resolve the effective level from the CLI flag and `RUST_LOG`.
pub fn resolve_level(cli_level: Option<LevelFilter>, rust_log: Option<&str>) -> LevelFilter {
    cli_level
        .or_else(|| rust_log.and_then(|v| v.trim().parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Install the log bridge. Later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, rust_log.as_deref());
    let logger = LOGGER.get_or_init(|| LogBridge {
        level,
        sink: Mutex::new(Box::new(std::io::stderr())),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_line(timestamp: &str, record: &Record) -> String {
    format!(
        "[{}] [{:<5}] [{}] {}\n",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Trace), Some("error")),
            LevelFilter::Trace
        );
    }

    #[test]
    fn test_rust_log_used_when_no_flag() {
        assert_eq!(resolve_level(None, Some(" debug ")), LevelFilter::Debug);
    }

    #[test]
    fn test_defaults_to_warn() {
        assert_eq!(resolve_level(None, None), LevelFilter::Warn);
        assert_eq!(resolve_level(None, Some("vimterm=debug")), LevelFilter::Warn);
    }

    #[test]
    fn test_format_line() {
        let line = format_line(
            "12.000001",
            &Record::builder()
                .level(log::Level::Info)
                .target("vimterm_settings")
                .args(format_args!("loaded"))
                .build(),
        );
        assert_eq!(line, "[12.000001] [INFO ] [vimterm_settings] loaded\n");
    }
}
