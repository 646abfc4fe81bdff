//! Usage: App-level Tauri commands (about info for the splash document).

use tauri::utils::config::BundleType;

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct AppAboutInfo {
    os: String,
    arch: String,
    profile: String,
    app_version: String,
    bundle_type: Option<String>,
    run_mode: String,
}

fn run_mode(bundle_type: Option<&BundleType>) -> &'static str {
    match bundle_type {
        Some(BundleType::Nsis | BundleType::Msi | BundleType::Deb | BundleType::Rpm) => "installer",
        Some(BundleType::AppImage) => "portable",
        Some(BundleType::App | BundleType::Dmg) => "unknown",
        None => "unknown",
    }
}

#[tauri::command]
pub(crate) fn app_about_get() -> AppAboutInfo {
    let bundle_type = tauri::utils::platform::bundle_type();
    let run_mode = run_mode(bundle_type.as_ref()).to_string();

    AppAboutInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        profile: if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "release".to_string()
        },
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        bundle_type: bundle_type.map(|t| t.to_string()),
        run_mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_mode_by_bundle_type() {
        assert_eq!(run_mode(Some(&BundleType::Nsis)), "installer");
        assert_eq!(run_mode(Some(&BundleType::Deb)), "installer");
        assert_eq!(run_mode(Some(&BundleType::AppImage)), "portable");
        assert_eq!(run_mode(Some(&BundleType::Dmg)), "unknown");
        assert_eq!(run_mode(None), "unknown");
    }

    #[test]
    fn about_reports_package_version() {
        let info = app_about_get();
        let json = serde_json::to_value(&info).expect("serialize");
        assert_eq!(json["app_version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["os"], std::env::consts::OS);
    }
}
