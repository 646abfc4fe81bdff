//! Usage: Startup wiring (run the shell launcher against the live app handle).

use super::app_state::ShellState;
use crate::launcher;
use crate::shell_config::ShellConfig;
use tauri::Manager;

pub(crate) fn launch_shell(app: &tauri::AppHandle) -> Result<(), String> {
    let session = launcher::launch(app, &ShellConfig::default())?;
    app.state::<ShellState>().replace(session);
    Ok(())
}

#[cfg(debug_assertions)]
pub(crate) fn log_dev_diagnostics(app: &tauri::AppHandle) {
    let enabled = std::env::var("ASPIREMATCH_DEV_DIAGNOSTICS")
        .ok()
        .map(|v| v.trim().to_ascii_lowercase())
        .is_some_and(|v| v == "1" || v == "true" || v == "yes");
    if !enabled {
        return;
    }

    let identifier = &app.config().identifier;
    let product_name = app.config().product_name.as_deref().unwrap_or("<missing>");
    tracing::info!(identifier = %identifier, "[dev] tauri identifier");
    tracing::info!(product_name = %product_name, "[dev] productName");
    tracing::info!(remote = crate::shell_config::REMOTE_ADMIN_URL, "[dev] remote url");
    if let Ok(dir) = crate::app_paths::logs_dir(app) {
        tracing::info!(dir = %dir.display(), "[dev] logs dir");
    }
}
