//! Usage: Startup sequencing of the splash and primary surfaces over an explicit host handle.
//!
//! The launcher never talks to Tauri directly; `infra::window_host` implements [`ShellHost`]
//! for `tauri::AppHandle`, and tests drive the same code with a recording fake.

use super::lifecycle::{PrimaryLifecycle, PrimaryPhase, ReadySubscription};
use super::shell_config::{ShellConfig, SurfaceSpec};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    Started,
    Finished,
}

pub type PageLoadHook = Box<dyn Fn(PageLoad) + Send + Sync + 'static>;

/// Surface operations the launcher needs from the GUI runtime.
pub trait ShellHost: Clone + Send + Sync + 'static {
    fn create_surface(
        &self,
        spec: &SurfaceSpec,
        on_page_load: Option<PageLoadHook>,
    ) -> Result<(), String>;

    fn destroy_surface(&self, label: &str) -> Result<(), String>;

    fn show_surface(&self, label: &str) -> Result<(), String>;

    fn clear_app_menu(&self) -> Result<(), String>;

    /// Fire-and-forget. Implementations must swallow every failure.
    fn request_update_check(&self);
}

#[derive(Debug, Clone)]
pub struct LaunchSession {
    pub splash_label: &'static str,
    pub primary_label: &'static str,
    pub ready: ReadySubscription,
}

impl LaunchSession {
    pub fn phase(&self) -> PrimaryPhase {
        self.ready.phase()
    }

    pub fn is_started(&self) -> bool {
        self.phase() == PrimaryPhase::Shown
    }
}

pub fn launch<H: ShellHost>(host: &H, config: &ShellConfig) -> Result<LaunchSession, String> {
    config.validate()?;

    let splash_label = config.splash.label;
    let primary_label = config.primary.label;

    host.create_surface(&config.splash, None)
        .map_err(|e| format!("SHELL_SPLASH_CREATE: {e}"))?;

    let lifecycle = PrimaryLifecycle::new();
    let hook = primary_page_load_hook(host.clone(), lifecycle.clone(), splash_label, primary_label);

    if let Err(err) = host.create_surface(&config.primary, Some(hook)) {
        let _ = host.destroy_surface(splash_label);
        return Err(format!("SHELL_PRIMARY_CREATE: {err}"));
    }

    if let Err(err) = host.clear_app_menu() {
        tracing::warn!("failed to clear application menu: {}", err);
    }

    host.request_update_check();

    tracing::info!(
        splash = splash_label,
        primary = primary_label,
        "shell launched, waiting for primary surface"
    );

    Ok(LaunchSession {
        splash_label,
        primary_label,
        ready: ReadySubscription::new(lifecycle),
    })
}

fn primary_page_load_hook<H: ShellHost>(
    host: H,
    lifecycle: Arc<PrimaryLifecycle>,
    splash_label: &'static str,
    primary_label: &'static str,
) -> PageLoadHook {
    Box::new(move |event| match event {
        PageLoad::Started => {
            if lifecycle.mark_loading() {
                tracing::debug!(primary = primary_label, "primary surface loading");
            }
        }
        PageLoad::Finished => {
            if lifecycle.mark_ready() {
                reveal_primary(&host, &lifecycle, splash_label, primary_label);
            } else if lifecycle.phase() == PrimaryPhase::Ready && !lifecycle.is_cancelled() {
                // An earlier reveal removed the splash but could not show the primary.
                show_primary(&host, &lifecycle, primary_label);
            }
        }
    })
}

/// Shows the primary again after a reveal that failed half-way (splash gone, primary hidden).
/// Returns `true` when the primary is known to be shown.
pub fn retry_reveal<H: ShellHost>(host: &H, session: &LaunchSession) -> bool {
    match session.phase() {
        PrimaryPhase::Shown => true,
        PrimaryPhase::Ready => show_primary(host, session.ready.lifecycle(), session.primary_label),
        PrimaryPhase::Created | PrimaryPhase::Loading => false,
    }
}

fn reveal_primary<H: ShellHost>(
    host: &H,
    lifecycle: &PrimaryLifecycle,
    splash_label: &str,
    primary_label: &str,
) {
    // Splash goes first so both surfaces are never visible together.
    if let Err(err) = host.destroy_surface(splash_label) {
        tracing::warn!("failed to destroy splash surface: {}", err);
    }

    show_primary(host, lifecycle, primary_label);
}

/// Leaves the phase at `Ready` on failure so a later `Finished` or activation can retry.
fn show_primary<H: ShellHost>(host: &H, lifecycle: &PrimaryLifecycle, primary_label: &str) -> bool {
    match host.show_surface(primary_label) {
        Ok(()) => {
            lifecycle.mark_shown();
            tracing::info!(primary = primary_label, "primary surface shown");
            true
        }
        Err(err) => {
            tracing::error!("failed to show primary surface: {}", err);
            false
        }
    }
}
