//! Composition-root smoke binary.
//!
//! # Responsibility
//! - Run the startup registration wave against one registry instance.
//! - Render the dashboard slot for a sample context, deterministically.

use plugboard_core::builtin::register_builtin_plugins;
use plugboard_core::{catalog, ExtensionSlot, PluginRegistry, SlotContext};

fn main() {
    let mut registry = PluginRegistry::new();
    register_builtin_plugins(&mut registry);

    let mut context = SlotContext::new();
    context.insert("username".to_string(), serde_json::Value::from("admin"));

    println!("plugboard_core version={}", plugboard_core::core_version());
    println!("plugins={}", registry.len());
    for plugin in registry.plugins() {
        let info = plugin.info();
        println!(
            "plugin id={} name={} version={}",
            info.id, info.name, info.version
        );
    }

    let slot = ExtensionSlot::new(&registry);
    for item in slot.render(&catalog::DASHBOARD_CONTENT, &context) {
        println!(
            "slot={} plugin={} body={}",
            item.key, item.plugin_id, item.body
        );
    }
}
