//! Usage: Tracing setup (stderr + daily rolling file with bounded retention).

use crate::app_paths;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "aspirematch";
const LOG_FILE_SUFFIX: &str = "log";
const DEFAULT_FILTER: &str = "info,tao=warn,wry=warn";
const MAX_LOG_FILES: usize = 14;

static INITIALIZED: AtomicBool = AtomicBool::new(false);
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Daily files; the appender deletes the oldest once more than `MAX_LOG_FILES` exist.
pub(crate) fn file_appender(dir: &Path) -> Result<RollingFileAppender, String> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .map_err(|e| format!("LOG_APPENDER_INIT: {e}"))
}

pub(crate) fn init(app: &tauri::AppHandle) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, log_dir) = match app_paths::logs_dir(app).and_then(|dir| {
        let appender = file_appender(&dir)?;
        Ok((appender, dir))
    }) {
        Ok((appender, dir)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);

            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(dir))
        }
        Err(err) => {
            eprintln!("log file disabled: {err}");
            (None, None)
        }
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {err}");
        return;
    }

    // Tauri and its plugins log through the `log` facade.
    if let Err(err) = tracing_log::LogTracer::init() {
        tracing::warn!("failed to bridge log records: {}", err);
    }

    if let Some(dir) = log_dir {
        tracing::info!(dir = %dir.display(), "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::AtomicUsize;
    use std::time::{SystemTime, UNIX_EPOCH};

    static TMP_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

    fn unique_tmp_dir() -> std::path::PathBuf {
        let seq = TMP_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "aspirematch_logging_test_{nanos}_{}_{}",
            std::process::id(),
            seq
        ));
        std::fs::create_dir_all(&dir).expect("create tmp dir");
        dir
    }

    #[test]
    fn file_appender_writes_prefixed_log_file() {
        let dir = unique_tmp_dir();
        let mut appender = file_appender(&dir).expect("file_appender");
        appender.write_all(b"hello\n").expect("write");
        appender.flush().expect("flush");

        let names: Vec<String> = std::fs::read_dir(&dir)
            .expect("read dir")
            .flatten()
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("aspirematch."));
        assert!(names[0].ends_with(".log"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_appender_fails_for_unwritable_dir() {
        let dir = unique_tmp_dir();
        let blocker = dir.join("not-a-dir");
        std::fs::write(&blocker, "x").expect("write blocker");

        let err = file_appender(&blocker).unwrap_err();
        assert!(err.starts_with("LOG_APPENDER_INIT:"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
