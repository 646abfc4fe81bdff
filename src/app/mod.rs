//! Usage: Application layer (Tauri-managed state, logging, startup/exit wiring, updates).

pub(crate) mod app_state;
pub(crate) mod cleanup;
pub(crate) mod logging;
pub(crate) mod notice;
pub(crate) mod resident;
pub(crate) mod startup;
pub(crate) mod updates;
