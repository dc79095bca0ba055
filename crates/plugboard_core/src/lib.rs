//! Plugin composition core for the Plugboard console.
//! This crate is the single source of truth for plugin registration,
//! extension ordering, and slot resolution invariants.

pub mod builtin;
pub mod logging;
pub mod plugin;

pub use logging::{default_log_level, init_logging, logging_status};
pub use plugin::catalog::{self, ExtensionPoint};
pub use plugin::contract::{
    ExtensionComponent, ExtensionPointRef, HookResult, Plugin, PluginInfo, SlotComponent,
    SlotContext, StateReducer,
};
pub use plugin::registry::{
    HookFailure, HookKind, HookReport, PluginRegistry, RegisteredExtension,
};
pub use plugin::slot::{ExtensionSlot, SlotRendering};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
