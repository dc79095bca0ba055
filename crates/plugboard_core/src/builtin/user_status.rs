//! Availability-status field plugin for the user edit form.
//!
//! Surfaces the directory `inetuserstatus` attribute of the record being
//! edited. The attribute value itself is opaque to the composition core; this
//! plugin only reads it from the slot context.

use crate::plugin::catalog::USER_EDIT_FORM;
use crate::plugin::contract::{
    ExtensionComponent, HookResult, Plugin, PluginInfo, SlotContext, StateReducer,
};
use log::info;
use std::collections::HashMap;
use std::sync::Arc;

/// Lets operators view a user's availability status while editing the record.
pub struct UserStatusPlugin {
    info: PluginInfo,
}

impl UserStatusPlugin {
    pub fn new() -> Self {
        Self {
            info: PluginInfo {
                id: "user-status".to_string(),
                name: "User Status".to_string(),
                version: "1.0.0".to_string(),
                description:
                    "Show the user's availability status (active, inactive, disabled)".to_string(),
                author: Some("Plugboard Team".to_string()),
            },
        }
    }
}

impl Default for UserStatusPlugin {
    fn default() -> Self {
        Self::new()
    }
}

fn status_field(context: &SlotContext) -> String {
    let user = context.get("user").and_then(serde_json::Value::as_object);
    let uid = user
        .and_then(|record| record.get("uid"))
        .and_then(serde_json::Value::as_str)
        .unwrap_or("unknown");
    let status = user
        .and_then(|record| record.get("inetuserstatus"))
        .and_then(serde_json::Value::as_str)
        .unwrap_or("active");
    format!("Status: {status} (uid={uid})")
}

impl Plugin for UserStatusPlugin {
    fn info(&self) -> &PluginInfo {
        &self.info
    }

    fn extensions(&self) -> Vec<ExtensionComponent> {
        vec![ExtensionComponent::new(&USER_EDIT_FORM, status_field).with_priority(10)]
    }

    fn initialize(&self) -> HookResult {
        info!("event=plugin_init module=user_status status=ok");
        Ok(())
    }

    fn cleanup(&self) -> HookResult {
        info!("event=plugin_cleanup module=user_status status=ok");
        Ok(())
    }

    fn reducers(&self) -> HashMap<String, StateReducer> {
        // Pass-through slice; the host store integrates it, the core never
        // invokes it.
        let mut reducers: HashMap<String, StateReducer> = HashMap::new();
        reducers.insert(
            "userStatus".to_string(),
            Arc::new(|state: serde_json::Value, _action: serde_json::Value| state),
        );
        reducers
    }
}
