//! Usage: Best-effort update flow (check -> background download -> notify -> install on exit).
//!
//! Failures never reach the launcher: `spawn_check_and_notify` logs them and returns.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UpdateOutcome {
    UpToDate,
    Staged { version: String },
}

pub(crate) fn staged_notice_body(version: &str) -> String {
    format!("Version {version} has been downloaded and will be installed when you quit.")
}

pub(crate) fn report_check_result(result: &Result<UpdateOutcome, String>) {
    match result {
        Ok(UpdateOutcome::UpToDate) => tracing::info!("application is up to date"),
        Ok(UpdateOutcome::Staged { version }) => {
            tracing::info!(version = %version, "update staged for install on exit")
        }
        Err(err) => tracing::warn!("update check failed: {}", err),
    }
}

#[cfg(desktop)]
pub(crate) use desktop::{install_staged, spawn_check_and_notify, StagedUpdate};

#[cfg(not(desktop))]
pub(crate) fn spawn_check_and_notify(_app: &tauri::AppHandle) {}

#[cfg(not(desktop))]
pub(crate) fn install_staged(_app: &tauri::AppHandle) -> Result<bool, String> {
    Ok(false)
}

#[cfg(desktop)]
mod desktop {
    use super::{report_check_result, staged_notice_body, UpdateOutcome};
    use crate::app_state::UpdateState;
    use crate::notice::{self, NoticeLevel};
    use crate::shared::mutex_ext::MutexExt;
    use tauri::Manager;
    use tauri_plugin_updater::{Update, UpdaterExt};

    pub(crate) struct StagedUpdate {
        update: Update,
        bytes: Vec<u8>,
    }

    pub(crate) fn spawn_check_and_notify(app: &tauri::AppHandle) {
        let app = app.clone();
        tauri::async_runtime::spawn(async move {
            let result = check_and_notify(&app).await;
            report_check_result(&result);
        });
    }

    async fn check_and_notify(app: &tauri::AppHandle) -> Result<UpdateOutcome, String> {
        let updater = app.updater().map_err(|e| format!("UPDATER_INIT: {e}"))?;

        let Some(update) = updater
            .check()
            .await
            .map_err(|e| format!("UPDATE_CHECK: {e}"))?
        else {
            return Ok(UpdateOutcome::UpToDate);
        };

        let version = update.version.clone();
        tracing::info!(
            current = %update.current_version,
            version = %version,
            "update available, downloading"
        );

        let bytes = update
            .download(|_chunk, _total| {}, || {})
            .await
            .map_err(|e| format!("UPDATE_DOWNLOAD: {e}"))?;

        {
            let state = app.state::<UpdateState>();
            *state.0.lock_or_recover() = Some(StagedUpdate { update, bytes });
        }

        let payload = notice::build(
            NoticeLevel::Info,
            Some("Update ready".to_string()),
            staged_notice_body(&version),
        );
        if let Err(err) = notice::show(app, payload) {
            tracing::warn!("failed to show update notice: {}", err);
        }

        Ok(UpdateOutcome::Staged { version })
    }

    /// Installs the staged package, if any. On Windows the installer takes over the process.
    pub(crate) fn install_staged(app: &tauri::AppHandle) -> Result<bool, String> {
        let staged = {
            let state = app.state::<UpdateState>();
            let mut guard = state.0.lock_or_recover();
            guard.take()
        };

        let Some(StagedUpdate { update, bytes }) = staged else {
            return Ok(false);
        };

        tracing::info!(version = %update.version, "installing staged update");
        update
            .install(bytes)
            .map_err(|e| format!("UPDATE_INSTALL: {e}"))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_notice_mentions_version_and_exit() {
        let body = staged_notice_body("1.2.0");
        assert!(body.contains("1.2.0"));
        assert!(body.contains("quit"));
    }

    #[test]
    fn report_check_result_accepts_every_outcome() {
        report_check_result(&Ok(UpdateOutcome::UpToDate));
        report_check_result(&Ok(UpdateOutcome::Staged {
            version: "1.2.0".to_string(),
        }));
        report_check_result(&Err("UPDATE_CHECK: timed out".to_string()));
    }
}
