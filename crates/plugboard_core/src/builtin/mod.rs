//! Built-in demonstration plugins.
//!
//! # Responsibility
//! - Ship small, fully-working plugins exercising the authoring contract.
//! - Provide the startup registration wave for the composition root.

pub mod hello_world;
pub mod user_status;

use crate::plugin::registry::PluginRegistry;
use hello_world::HelloWorldPlugin;
use user_status::UserStatusPlugin;

/// Registers every built-in plugin on the given registry.
pub fn register_builtin_plugins(registry: &mut PluginRegistry) {
    registry.register_plugin(Box::new(HelloWorldPlugin::new()));
    registry.register_plugin(Box::new(UserStatusPlugin::new()));
}
