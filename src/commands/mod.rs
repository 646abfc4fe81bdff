//! Usage: Tauri command handlers exposed to local (bundled) documents.

mod app;

pub(crate) use app::*;
