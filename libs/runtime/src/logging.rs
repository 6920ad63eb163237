use crate::config::{LoggingConfig, Section};
use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};

// -------- level helpers --------

fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

fn level_filter(s: &str) -> LevelFilter {
    parse_tracing_level(s)
        .map(LevelFilter::from_level)
        .unwrap_or(LevelFilter::OFF)
}

// -------- rotating writer for files --------

#[derive(Clone)]
struct RotWriter(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl<'a> fmt::MakeWriter<'a> for RotWriter {
    type Writer = RotWriterHandle;
    fn make_writer(&'a self) -> Self::Writer {
        RotWriterHandle(self.0.clone())
    }
}

#[derive(Clone)]
struct RotWriterHandle(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl Write for RotWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.lock().unwrap().flush()
    }
}

// -------- path resolution helpers --------

/// Resolve a log file path against `base_dir`. Absolute paths are kept as-is.
fn resolve_log_path(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

/// Create a rotating writer for log files, ensuring the parent directory exists.
fn create_rotating_writer(section: &Section, base_dir: &Path) -> Option<RotWriter> {
    if section.file.trim().is_empty() {
        return None;
    }

    let log_path = resolve_log_path(&section.file, base_dir);
    if let Some(parent) = log_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            eprintln!("Failed to create log directory for '{}'", log_path.display());
            return None;
        }
    }

    let max_bytes = section.max_size_mb.unwrap_or(100) as usize * 1024 * 1024;
    let max_files = section.max_backups.unwrap_or(3);

    let rot = FileRotate::new(
        log_path,
        AppendTimestamp::default(FileLimit::MaxFiles(max_files)),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None, // file permissions (Unix only)
    );

    Some(RotWriter(Arc::new(Mutex::new(rot))))
}

// -------- public init --------

/// Initialize logging from a configuration.
/// - `cfg`: LoggingConfig; only the "default" section is consumed.
/// - `base_dir`: base directory used to resolve relative log file paths.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_logging_from_config(cfg: &LoggingConfig, base_dir: &Path) {
    // Bridge `log` → `tracing` *before* installing the subscriber
    let _ = tracing_log::LogTracer::init();

    let Some(section) = cfg.get("default") else {
        init_default_logging();
        return;
    };

    let console_layer = fmt::layer()
        .with_target(true)
        .with_ansi(atty::is(atty::Stream::Stdout))
        .with_filter(level_filter(&section.console_level));

    let file_layer = create_rotating_writer(section, base_dir).map(|writer| {
        let file_level = if section.file_level.trim().is_empty() {
            "debug"
        } else {
            section.file_level.as_str()
        };
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(level_filter(file_level))
    });

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

fn init_default_logging() {
    let _ = fmt()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_including_off() {
        assert_eq!(parse_tracing_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_tracing_level("WARN"), Some(Level::WARN));
        assert_eq!(parse_tracing_level("off"), None);
        assert_eq!(parse_tracing_level("none"), None);
        // Unknown values fall back to info
        assert_eq!(parse_tracing_level("bogus"), Some(Level::INFO));
    }

    #[test]
    fn resolves_relative_paths_against_base_dir() {
        let base = Path::new("/var/lib/marketday");
        assert_eq!(
            resolve_log_path("logs/app.log", base),
            PathBuf::from("/var/lib/marketday/logs/app.log")
        );
        assert_eq!(
            resolve_log_path("/tmp/app.log", base),
            PathBuf::from("/tmp/app.log")
        );
    }

    #[test]
    fn empty_file_means_no_writer() {
        let section = Section {
            console_level: "info".into(),
            file: "".into(),
            file_level: "".into(),
            max_backups: None,
            max_size_mb: None,
        };
        assert!(create_rotating_writer(&section, Path::new("/tmp")).is_none());
    }
}
