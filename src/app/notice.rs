//! Notice (system notification) module.
//!
//! Usage:
//! - Rust: `notice::show(app, notice::build(level, title, body))` pops an OS notification
//!   through `tauri-plugin-notification`.
//! - The remote admin page has no IPC access, so notices only originate from the shell itself
//!   (update staged, etc.).

const NOTICE_PREFIX: &str = "AspireMatch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct NoticePayload {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

fn default_title(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "Info",
        NoticeLevel::Success => "Success",
        NoticeLevel::Warning => "Warning",
        NoticeLevel::Error => "Error",
    }
}

fn normalize_optional_title(title: Option<String>) -> Option<String> {
    let title = title?;
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn format_title(level: NoticeLevel, title: Option<String>) -> String {
    let title = normalize_optional_title(title).unwrap_or_else(|| default_title(level).to_string());
    format!("{NOTICE_PREFIX} · {title}")
}

pub fn build(level: NoticeLevel, title: Option<String>, body: String) -> NoticePayload {
    NoticePayload {
        level,
        title: format_title(level, title),
        body,
    }
}

#[cfg(desktop)]
pub fn show(app: &tauri::AppHandle, payload: NoticePayload) -> Result<(), String> {
    use tauri_plugin_notification::NotificationExt;

    app.notification()
        .builder()
        .title(payload.title)
        .body(payload.body)
        .show()
        .map_err(|e| format!("NOTICE_SHOW: {e}"))
}

#[cfg(not(desktop))]
pub fn show(_app: &tauri::AppHandle, payload: NoticePayload) -> Result<(), String> {
    tracing::info!(title = %payload.title, "{}", payload.body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_uses_default_title_per_level() {
        let payload = build(NoticeLevel::Warning, None, "body".to_string());
        assert_eq!(payload.title, "AspireMatch · Warning");
        assert_eq!(payload.body, "body");
    }

    #[test]
    fn build_trims_custom_title() {
        let payload = build(
            NoticeLevel::Info,
            Some("  Update ready  ".to_string()),
            String::new(),
        );
        assert_eq!(payload.title, "AspireMatch · Update ready");
    }

    #[test]
    fn blank_title_falls_back_to_default() {
        let payload = build(NoticeLevel::Error, Some("   ".to_string()), String::new());
        assert_eq!(payload.title, "AspireMatch · Error");
    }

    #[test]
    fn level_serializes_lowercase() {
        let payload = build(NoticeLevel::Success, None, "ok".to_string());
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json["level"], "success");
        assert_eq!(json["title"], "AspireMatch · Success");
    }
}
