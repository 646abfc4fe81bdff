//! Usage: `ShellHost` implementation backed by Tauri webview windows.

use crate::domain::launcher::{PageLoad, PageLoadHook, ShellHost};
use crate::domain::shell_config::{validate_remote_url, ScriptContext, SurfaceSource, SurfaceSpec};
use std::path::PathBuf;
use tauri::webview::PageLoadEvent;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

const ISOLATED_NAVIGATION_SCHEMES: [&str; 3] = ["https", "about", "blob"];

pub(crate) fn allow_isolated_navigation(url: &tauri::Url) -> bool {
    ISOLATED_NAVIGATION_SCHEMES.contains(&url.scheme())
}

fn webview_url(source: &SurfaceSource) -> Result<WebviewUrl, String> {
    match source {
        SurfaceSource::Bundled(path) => Ok(WebviewUrl::App(PathBuf::from(path))),
        SurfaceSource::Remote(raw) => validate_remote_url(raw).map(WebviewUrl::External),
    }
}

impl ShellHost for tauri::AppHandle {
    fn create_surface(
        &self,
        spec: &SurfaceSpec,
        on_page_load: Option<PageLoadHook>,
    ) -> Result<(), String> {
        let url = webview_url(&spec.source)?;

        let mut builder = WebviewWindowBuilder::new(self, spec.label, url)
            .title(spec.title)
            .inner_size(spec.width, spec.height)
            .decorations(spec.decorations)
            .always_on_top(spec.always_on_top)
            .resizable(spec.resizable)
            .visible(spec.visible);

        if spec.center {
            builder = builder.center();
        }

        if let Some(bytes) = spec.icon_png {
            let icon = tauri::image::Image::from_bytes(bytes)
                .map_err(|e| format!("failed to decode window icon: {e}"))?;
            builder = builder
                .icon(icon)
                .map_err(|e| format!("failed to set window icon: {e}"))?;
        }

        // Remote origins have no capability grant, so an isolated page never sees the IPC
        // bridge. Navigation is additionally pinned to web schemes.
        if spec.script_context == ScriptContext::Isolated {
            let label = spec.label;
            builder = builder.on_navigation(move |url| {
                let allowed = allow_isolated_navigation(url);
                if !allowed {
                    tracing::warn!(window = label, url = %url, "blocked navigation");
                }
                allowed
            });
        }

        if let Some(hook) = on_page_load {
            builder = builder.on_page_load(move |window, payload| {
                let event = match payload.event() {
                    PageLoadEvent::Started => PageLoad::Started,
                    PageLoadEvent::Finished => PageLoad::Finished,
                };
                tracing::debug!(
                    window = %window.label(),
                    url = %payload.url(),
                    event = ?event,
                    "page load"
                );
                hook(event);
            });
        }

        builder
            .build()
            .map_err(|e| format!("failed to build window {}: {e}", spec.label))?;
        Ok(())
    }

    fn destroy_surface(&self, label: &str) -> Result<(), String> {
        let window = self
            .get_webview_window(label)
            .ok_or_else(|| format!("window not found: {label}"))?;
        window
            .destroy()
            .map_err(|e| format!("failed to destroy window {label}: {e}"))
    }

    fn show_surface(&self, label: &str) -> Result<(), String> {
        let window = self
            .get_webview_window(label)
            .ok_or_else(|| format!("window not found: {label}"))?;
        window
            .show()
            .map_err(|e| format!("failed to show window {label}: {e}"))?;
        let _ = window.set_focus();
        Ok(())
    }

    #[cfg(desktop)]
    fn clear_app_menu(&self) -> Result<(), String> {
        self.remove_menu()
            .map(|_| ())
            .map_err(|e| format!("failed to remove app menu: {e}"))
    }

    #[cfg(not(desktop))]
    fn clear_app_menu(&self) -> Result<(), String> {
        Ok(())
    }

    fn request_update_check(&self) {
        crate::app::updates::spawn_check_and_notify(self);
    }
}
