//! Usage: Infrastructure adapters (filesystem paths, Tauri window host).

pub(crate) mod app_paths;
pub(crate) mod window_host;
