//! CLI subcommand implementations.

pub mod browse;
pub mod delete;
pub mod list;
pub mod set_status;
