//! Usage: Shell logic independent of the GUI runtime (configuration, launch sequencing, lifecycle).

pub(crate) mod launcher;
pub(crate) mod lifecycle;
pub(crate) mod shell_config;
pub(crate) mod shutdown_policy;
