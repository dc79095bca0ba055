//! Plugin authoring contract.
//!
//! # Responsibility
//! - Define the shape every plugin module must satisfy.
//! - Normalize heterogeneous extension-point identifiers to one key type.
//!
//! # Invariants
//! - A conforming plugin supplies a globally-unique `id` and a possibly-empty
//!   extension sequence, and assumes nothing about registration order.
//! - The core never inspects a `SlotComponent`'s internals or a reducer's
//!   behavior; both are opaque to registry and slot resolution.
//! - Descriptor and bare-string identifiers for the same point converge on
//!   the same canonical key.

use crate::plugin::catalog::ExtensionPoint;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

/// Arbitrary props/context bag forwarded to rendered components.
pub type SlotContext = serde_json::Map<String, serde_json::Value>;

/// Result type for plugin lifecycle hooks.
///
/// Hook failures are contained at the registry boundary; they are recorded
/// and logged, never propagated to the registration or teardown caller.
pub type HookResult = Result<(), Box<dyn Error + Send + Sync>>;

/// Opaque state-integration hook `(state, action) -> state`.
///
/// Collected from plugins by the host composition root; the core stores and
/// hands these through without ever invoking them.
pub type StateReducer =
    Arc<dyn Fn(serde_json::Value, serde_json::Value) -> serde_json::Value + Send + Sync>;

/// One renderable unit contributed to an extension point.
///
/// The core treats implementations as opaque: it forwards the context bag and
/// collects the rendered output, nothing more.
pub trait SlotComponent: Send + Sync {
    fn render(&self, context: &SlotContext) -> String;
}

impl<F> SlotComponent for F
where
    F: Fn(&SlotContext) -> String + Send + Sync,
{
    fn render(&self, context: &SlotContext) -> String {
        self(context)
    }
}

/// Plugin metadata. Documentation only, no behavioral effect beyond `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin id within one registry instance.
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Extension-point identifier as accepted from call sites.
///
/// Call sites may reference a point either by the shared catalog descriptor
/// or by its bare string id; both resolve to the same registry bucket via
/// [`ExtensionPointRef::canonical_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionPointRef {
    /// Reference by catalog descriptor.
    Descriptor(ExtensionPoint),
    /// Reference by raw string key.
    Key(String),
}

impl ExtensionPointRef {
    /// Returns the canonical registry bucket key for this reference.
    pub fn canonical_key(&self) -> &str {
        match self {
            Self::Descriptor(point) => point.id,
            Self::Key(key) => key,
        }
    }

    /// Best-effort coercion for identifier shapes that are neither a
    /// descriptor nor a plain string. May silently yield a lookup miss.
    pub fn coerce(value: impl Display) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<ExtensionPoint> for ExtensionPointRef {
    fn from(point: ExtensionPoint) -> Self {
        Self::Descriptor(point)
    }
}

impl From<&ExtensionPoint> for ExtensionPointRef {
    fn from(point: &ExtensionPoint) -> Self {
        Self::Descriptor(*point)
    }
}

impl From<&str> for ExtensionPointRef {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for ExtensionPointRef {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

/// One contribution targeting a specific extension point.
///
/// Immutable after registration; owned exclusively by its declaring plugin
/// until handed to the registry.
pub struct ExtensionComponent {
    /// Target insertion point, by descriptor or string id.
    pub extension_point: ExtensionPointRef,
    /// The opaque renderable unit.
    pub component: Box<dyn SlotComponent>,
    /// Higher renders first; absent is treated as 0.
    pub priority: Option<i32>,
    /// Opaque key/value bag, not interpreted by the core.
    pub metadata: Option<SlotContext>,
}

impl ExtensionComponent {
    /// Creates a contribution with default priority and no metadata.
    pub fn new(
        point: impl Into<ExtensionPointRef>,
        component: impl SlotComponent + 'static,
    ) -> Self {
        Self {
            extension_point: point.into(),
            component: Box::new(component),
            priority: None,
            metadata: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_metadata(mut self, metadata: SlotContext) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Contract every plugin module implements.
///
/// Lifecycle: constructed once by its owning module, handed to
/// [`crate::plugin::registry::PluginRegistry::register_plugin`], retained by
/// the registry until teardown.
pub trait Plugin {
    /// Plugin metadata; `info().id` must be unique per registry instance.
    fn info(&self) -> &PluginInfo;

    /// Contributions to hand to the registry. Called once at registration.
    fn extensions(&self) -> Vec<ExtensionComponent>;

    /// Startup side effects. Failure is contained and recorded; the plugin
    /// stays registered.
    fn initialize(&self) -> HookResult {
        Ok(())
    }

    /// Teardown side effects. Failure is contained; sibling plugins still
    /// clean up and the registry still clears.
    fn cleanup(&self) -> HookResult {
        Ok(())
    }

    /// Opaque state-integration hooks for the host composition root.
    fn reducers(&self) -> HashMap<String, StateReducer> {
        HashMap::new()
    }
}
