//! Usage: Fixed shell configuration (remote endpoint, surface geometry, icon).

pub const REMOTE_ADMIN_URL: &str = "https://aspirematch-cpsu.onrender.com/admin";
pub const SPLASH_DOCUMENT: &str = "splash.html";
pub const SPLASH_WINDOW_LABEL: &str = "splash";
pub const PRIMARY_WINDOW_LABEL: &str = "main";
const PRODUCT_NAME: &str = "AspireMatch";

const SPLASH_WIDTH: f64 = 400.0;
const SPLASH_HEIGHT: f64 = 300.0;
const PRIMARY_WIDTH: f64 = 1200.0;
const PRIMARY_HEIGHT: f64 = 800.0;

const APP_ICON_PNG: &[u8] = include_bytes!("../../icons/icon.png");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceSource {
    /// Document shipped inside the application bundle (`frontendDist`).
    Bundled(&'static str),
    Remote(String),
}

/// Script context of the embedded page. Tauri still injects its IPC internals into every
/// webview; an `Isolated` page is confined by the ACL (no capability covers remote origins,
/// so every command is rejected) and its navigation is pinned to web schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptContext {
    Shared,
    Isolated,
}

#[derive(Debug, Clone)]
pub struct SurfaceSpec {
    pub label: &'static str,
    pub title: &'static str,
    pub source: SurfaceSource,
    pub width: f64,
    pub height: f64,
    pub decorations: bool,
    pub always_on_top: bool,
    pub resizable: bool,
    pub visible: bool,
    pub center: bool,
    pub script_context: ScriptContext,
    pub icon_png: Option<&'static [u8]>,
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub splash: SurfaceSpec,
    pub primary: SurfaceSpec,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            splash: SurfaceSpec {
                label: SPLASH_WINDOW_LABEL,
                title: PRODUCT_NAME,
                source: SurfaceSource::Bundled(SPLASH_DOCUMENT),
                width: SPLASH_WIDTH,
                height: SPLASH_HEIGHT,
                decorations: false,
                always_on_top: true,
                resizable: false,
                visible: true,
                center: true,
                script_context: ScriptContext::Shared,
                icon_png: None,
            },
            primary: SurfaceSpec {
                label: PRIMARY_WINDOW_LABEL,
                title: PRODUCT_NAME,
                source: SurfaceSource::Remote(REMOTE_ADMIN_URL.to_string()),
                width: PRIMARY_WIDTH,
                height: PRIMARY_HEIGHT,
                decorations: true,
                always_on_top: false,
                resizable: true,
                visible: false,
                center: true,
                script_context: ScriptContext::Isolated,
                icon_png: Some(APP_ICON_PNG),
            },
        }
    }
}

impl ShellConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.splash.label == self.primary.label {
            return Err(format!(
                "SHELL_CONFIG: splash and primary share label={}",
                self.splash.label
            ));
        }
        if self.primary.visible {
            return Err("SHELL_CONFIG: primary surface must start hidden".to_string());
        }
        if let SurfaceSource::Remote(url) = &self.primary.source {
            validate_remote_url(url)?;
        }
        Ok(())
    }
}

pub fn validate_remote_url(raw: &str) -> Result<tauri::Url, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("SHELL_CONFIG: remote url is required".to_string());
    }

    let url = tauri::Url::parse(raw)
        .map_err(|e| format!("SHELL_CONFIG: invalid remote url={raw}: {e}"))?;
    if url.scheme() != "https" {
        return Err(format!("SHELL_CONFIG: remote url must use https: {raw}"));
    }
    if url.host_str().is_none() {
        return Err(format!("SHELL_CONFIG: remote url has no host: {raw}"));
    }
    Ok(url)
}
