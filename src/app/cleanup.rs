//! Usage: Best-effort cleanup hook for app exit.

use super::app_state::ShellState;
use crate::updates;
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::Manager;

static CLEANUP_STARTED: AtomicBool = AtomicBool::new(false);

pub(crate) fn cleanup_before_exit(app: &tauri::AppHandle) {
    if CLEANUP_STARTED.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Some(session) = app.state::<ShellState>().current() {
        session.ready.cancel();
    }

    match updates::install_staged(app) {
        Ok(true) => tracing::info!("exit cleanup: staged update installed"),
        Ok(false) => {}
        Err(err) => tracing::warn!("exit cleanup: staged update install failed: {}", err),
    }
}
