//! Usage: Window lifecycle hooks after startup (second instance, macOS reopen).

use super::app_state::ShellState;
use crate::launcher;
use crate::lifecycle::PrimaryPhase;
use tauri::Manager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusTarget {
    Nothing,
    Splash,
    Primary,
}

/// The primary surface is only brought forward once a reveal has started. At `Ready` the splash
/// is already gone, so the primary is the only window left to surface.
fn focus_target(phase: Option<PrimaryPhase>) -> FocusTarget {
    match phase {
        None => FocusTarget::Nothing,
        Some(PrimaryPhase::Ready | PrimaryPhase::Shown) => FocusTarget::Primary,
        Some(PrimaryPhase::Created | PrimaryPhase::Loading) => FocusTarget::Splash,
    }
}

pub fn show_main_window(app: &tauri::AppHandle) {
    let Some(session) = app.state::<ShellState>().current() else {
        return;
    };

    match focus_target(Some(session.phase())) {
        FocusTarget::Nothing => {}
        FocusTarget::Splash => {
            if let Some(splash) = app.get_webview_window(session.splash_label) {
                let _ = splash.set_focus();
            }
        }
        FocusTarget::Primary => {
            if !launcher::retry_reveal(app, &session) {
                return;
            }
            let Some(window) = app.get_webview_window(session.primary_label) else {
                return;
            };
            let _ = window.show();
            let _ = window.unminimize();
            let _ = window.set_focus();
        }
    }
}

/// macOS dock click with no visible windows: bring the primary back, or start over if it is gone.
#[cfg(target_os = "macos")]
pub fn reopen(app: &tauri::AppHandle) {
    let has_primary = app
        .state::<ShellState>()
        .current()
        .is_some_and(|session| app.get_webview_window(session.primary_label).is_some());

    if has_primary {
        show_main_window(app);
        return;
    }

    if let Err(err) = super::startup::launch_shell(app) {
        tracing::error!("relaunch failed: {}", err);
    }
}
