//! Command implementations for Kickstart CLI

pub mod completions;
pub mod install;
pub mod update;
pub mod version;
