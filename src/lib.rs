mod app;
mod commands;
mod domain;
mod infra;
mod shared;

pub(crate) use app::{app_state, notice, resident, updates};
pub(crate) use domain::{launcher, lifecycle, shell_config, shutdown_policy};
pub(crate) use infra::app_paths;

use app_state::ShellState;
use commands::*;
use shutdown_policy::{keep_running_on_exit_request, WindowingConvention};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default().manage(ShellState::default());

    #[cfg(desktop)]
    let builder = builder
        .enable_macos_default_menu(false)
        .manage(app_state::UpdateState::default())
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            resident::show_main_window(app);
        }));

    let app = builder
        .setup(|app| {
            crate::app::logging::init(app.handle());

            #[cfg(desktop)]
            {
                if let Err(err) = app
                    .handle()
                    .plugin(tauri_plugin_updater::Builder::new().build())
                {
                    tracing::error!("updater init failed: {}", err);
                }
            }

            #[cfg(debug_assertions)]
            crate::app::startup::log_dev_diagnostics(app.handle());

            crate::app::startup::launch_shell(app.handle())?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![app_about_get])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| match event {
        tauri::RunEvent::ExitRequested { api, code, .. } => {
            if keep_running_on_exit_request(code, WindowingConvention::current()) {
                tracing::info!("all windows closed, staying resident");
                api.prevent_exit();
            }
        }
        tauri::RunEvent::Exit => {
            crate::app::cleanup::cleanup_before_exit(app_handle);
        }
        #[cfg(target_os = "macos")]
        tauri::RunEvent::Reopen {
            has_visible_windows,
            ..
        } => {
            if !has_visible_windows {
                resident::reopen(app_handle);
            }
        }
        _ => {}
    });
}
