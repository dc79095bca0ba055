//! Greeting banner plugin for the dashboard.

use crate::plugin::catalog::DASHBOARD_CONTENT;
use crate::plugin::contract::{
    ExtensionComponent, HookResult, Plugin, PluginInfo, SlotContext,
};
use log::info;

/// Renders a greeting banner on the main dashboard.
pub struct HelloWorldPlugin {
    info: PluginInfo,
}

impl HelloWorldPlugin {
    pub fn new() -> Self {
        Self {
            info: PluginInfo {
                id: "hello-world".to_string(),
                name: "Hello World".to_string(),
                version: "1.0.0".to_string(),
                description: "A simple greeting banner for the console dashboard".to_string(),
                author: Some("Plugboard Team".to_string()),
            },
        }
    }
}

impl Default for HelloWorldPlugin {
    fn default() -> Self {
        Self::new()
    }
}

fn greeting(context: &SlotContext) -> String {
    let username = context
        .get("username")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("there");
    format!("Hello, {username}!")
}

impl Plugin for HelloWorldPlugin {
    fn info(&self) -> &PluginInfo {
        &self.info
    }

    fn extensions(&self) -> Vec<ExtensionComponent> {
        vec![ExtensionComponent::new(&DASHBOARD_CONTENT, greeting).with_priority(10)]
    }

    fn initialize(&self) -> HookResult {
        info!("event=plugin_init module=hello_world status=ok");
        Ok(())
    }

    fn cleanup(&self) -> HookResult {
        info!("event=plugin_cleanup module=hello_world status=ok");
        Ok(())
    }
}
