//! Rendering-time slot resolution.
//!
//! # Responsibility
//! - Resolve an extension-point identifier to the registry's ordered list.
//! - Render each contribution with the caller's context bag and a stable
//!   per-position identity.
//!
//! # Invariants
//! - Unknown string ids pass through to the registry lookup; they are never
//!   rejected.
//! - An empty slot is an expected, non-exceptional state: debug log only,
//!   nothing rendered.
//! - A component's own internal failure is not contained here; fault
//!   isolation exists only at the lifecycle-hook boundary.

use crate::plugin::catalog;
use crate::plugin::contract::{ExtensionPointRef, SlotContext};
use crate::plugin::registry::PluginRegistry;
use log::debug;

/// One rendered contribution from a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRendering {
    /// Stable identity derived from the point key and list position, so
    /// re-renders do not remount unrelated siblings while the list length is
    /// unchanged.
    pub key: String,
    /// Id of the contributing plugin.
    pub plugin_id: String,
    /// Component output for the given context.
    pub body: String,
}

/// Query-and-render view over one registry instance.
pub struct ExtensionSlot<'a> {
    registry: &'a PluginRegistry,
}

impl<'a> ExtensionSlot<'a> {
    pub fn new(registry: &'a PluginRegistry) -> Self {
        Self { registry }
    }

    /// Renders every extension registered for `point`, in registry order,
    /// forwarding the full context bag to each component.
    pub fn render(
        &self,
        point: impl Into<ExtensionPointRef>,
        context: &SlotContext,
    ) -> Vec<SlotRendering> {
        let point = point.into();
        // Catalogued ids resolve to their descriptor key; unknown ids are
        // passed through to the lookup as-is.
        let key = match catalog::by_id(point.canonical_key()) {
            Some(descriptor) => descriptor.id,
            None => point.canonical_key(),
        };

        let extensions = self.registry.extensions_for(key);
        if extensions.is_empty() {
            debug!("event=slot_empty module=extension_slot status=ok point={key}");
            return Vec::new();
        }

        let rendered: Vec<SlotRendering> = extensions
            .iter()
            .enumerate()
            .map(|(index, extension)| SlotRendering {
                key: format!("{key}-{index}"),
                plugin_id: extension.plugin_id().to_string(),
                body: extension.render(context),
            })
            .collect();
        debug!(
            "event=slot_rendered module=extension_slot status=ok point={key} count={}",
            rendered.len()
        );
        rendered
    }
}
