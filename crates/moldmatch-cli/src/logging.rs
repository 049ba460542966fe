use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILE: &str = "./logs/moldmatch.log";

/// Filter used when `TRACING_LEVEL` is unset. `--verbose` lowers both crates to debug.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "moldmatch=debug,moldmatch_core=debug"
    } else {
        "moldmatch=info,moldmatch_core=info"
    }
}

/// Split a log file path into the directory tracing-appender writes to and the file name.
fn log_target(path: &Path) -> (PathBuf, PathBuf) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("moldmatch.log"));
    (dir, file)
}

/// Human-readable events on stderr (stdout carries tables, JSON or CSV) plus a
/// plain-text copy in `LOG_FILE_PATH`. Keep the returned guard alive until exit.
pub fn init_logger(verbose: bool) -> WorkerGuard {
    let filter_layer = match env::var("TRACING_LEVEL") {
        Ok(level) => EnvFilter::new(level),
        Err(_) => EnvFilter::new(default_filter(verbose)),
    };

    let log_file_path = env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let (dir, file) = log_target(Path::new(&log_file_path));
    let file_appender = tracing_appender::rolling::never(&dir, &file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_file(false)
        .without_time()
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter_layer)
        .init();

    debug!("Logging to stderr and {}", dir.join(&file).display());

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_target_splits_path() {
        let (dir, file) = log_target(Path::new("./logs/run.log"));
        assert_eq!(dir, PathBuf::from("./logs"));
        assert_eq!(file, PathBuf::from("run.log"));
    }

    #[test]
    fn test_log_target_bare_file_name() {
        let (dir, file) = log_target(Path::new("run.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("run.log"));
    }

    #[test]
    fn test_default_filter() {
        assert!(default_filter(true).contains("moldmatch_core=debug"));
        assert!(default_filter(false).contains("moldmatch=info"));
    }
}
