//! Process-lifetime plugin registry.
//!
//! # Responsibility
//! - Hold registered plugins and, per extension point, the ordered list of
//!   contributed extensions.
//! - Contain plugin lifecycle-hook failures at the registry boundary.
//!
//! # Invariants
//! - Every extension bucket is sorted by non-increasing priority; equal
//!   priorities keep registration order (stable sort).
//! - A plugin id appears at most once; duplicate registration is a warned
//!   no-op that alters no state.
//! - Every stored extension belongs to exactly one registered plugin, and
//!   teardown removes all contributions together with their plugins.

use crate::plugin::contract::{
    ExtensionComponent, ExtensionPointRef, HookResult, Plugin, SlotComponent, SlotContext,
};
use log::{error, info, warn};
use std::any::Any;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};

const MAX_CAUSE_CHARS: usize = 160;

/// Lifecycle hook identifier for recorded outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    Initialize,
    Cleanup,
}

impl HookKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::Cleanup => "cleanup",
        }
    }
}

impl Display for HookKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contained failure cause for one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookFailure {
    /// Hook returned an error value.
    Error(String),
    /// Hook panicked; payload text is sanitized and capped.
    Panic(String),
}

impl Display for HookFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error(cause) => write!(f, "hook returned error: {cause}"),
            Self::Panic(payload) => write!(f, "hook panicked: {payload}"),
        }
    }
}

impl Error for HookFailure {}

/// Recorded outcome of one bounded hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookReport {
    pub plugin_id: String,
    pub hook: HookKind,
    pub outcome: Result<(), HookFailure>,
}

/// One extension as stored by the registry, with resolved priority and the
/// owning plugin recorded.
pub struct RegisteredExtension {
    plugin_id: String,
    priority: i32,
    metadata: Option<SlotContext>,
    component: Box<dyn SlotComponent>,
}

impl RegisteredExtension {
    /// Id of the plugin that contributed this extension.
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// Resolved priority (absent declared priority is 0).
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Opaque metadata bag as declared by the plugin.
    pub fn metadata(&self) -> Option<&SlotContext> {
        self.metadata.as_ref()
    }

    /// Renders the contributed component with the given context bag.
    pub fn render(&self, context: &SlotContext) -> String {
        self.component.render(context)
    }
}

/// Registry of plugins and their per-point extension lists.
///
/// One instance lives for the application's lifetime, constructed by the
/// composition root and passed by handle. [`PluginRegistry::cleanup`] resets
/// contents but not identity, so the same instance can host a later
/// registration wave.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<String, Box<dyn Plugin>>,
    extensions: BTreeMap<String, Vec<RegisteredExtension>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one plugin and all of its extensions.
    ///
    /// # Contract
    /// - Duplicate plugin id: warned no-op, existing state untouched.
    /// - `initialize` runs inside a fault boundary; failure is recorded and
    ///   logged, the plugin stays registered, nothing propagates.
    pub fn register_plugin(&mut self, plugin: Box<dyn Plugin>) {
        let plugin_id = plugin.info().id.clone();
        if self.plugins.contains_key(plugin_id.as_str()) {
            warn!(
                "event=plugin_duplicate module=plugin_registry status=rejected plugin_id={plugin_id}"
            );
            return;
        }

        let components = plugin.extensions();
        let extension_count = components.len();
        self.plugins.insert(plugin_id.clone(), plugin);
        for component in components {
            self.register_extension(&plugin_id, component);
        }

        if let Some(plugin) = self.plugins.get(plugin_id.as_str()) {
            let report = run_hook(&plugin_id, HookKind::Initialize, || plugin.initialize());
            if let Err(failure) = &report.outcome {
                error!(
                    "event=plugin_hook_failed module=plugin_registry status=error \
                     plugin_id={plugin_id} hook=initialize cause={failure}"
                );
            }
        }

        info!(
            "event=plugin_registered module=plugin_registry status=ok \
             plugin_id={plugin_id} extensions={extension_count}"
        );
    }

    fn register_extension(&mut self, plugin_id: &str, component: ExtensionComponent) {
        let key = component.extension_point.canonical_key().to_string();
        let bucket = self.extensions.entry(key).or_default();
        bucket.push(RegisteredExtension {
            plugin_id: plugin_id.to_string(),
            priority: component.priority.unwrap_or(0),
            metadata: component.metadata,
            component: component.component,
        });
        // Stable sort keeps equal-priority entries in registration order.
        bucket.sort_by_key(|extension| Reverse(extension.priority));
    }

    /// Returns the ordered extension list for one point.
    ///
    /// Absence is a valid, silent outcome: unknown or empty points yield an
    /// empty slice, never an error.
    pub fn extensions_for(&self, point: impl Into<ExtensionPointRef>) -> &[RegisteredExtension] {
        let point = point.into();
        self.extensions
            .get(point.canonical_key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns all registered plugins.
    pub fn plugins(&self) -> impl Iterator<Item = &dyn Plugin> {
        self.plugins.values().map(|plugin| plugin.as_ref())
    }

    /// Returns one plugin by id.
    pub fn plugin(&self, plugin_id: &str) -> Option<&dyn Plugin> {
        self.plugins.get(plugin_id).map(|plugin| plugin.as_ref())
    }

    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.contains_key(plugin_id)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Runs every plugin's `cleanup` hook, then clears all state.
    ///
    /// # Contract
    /// - Each hook runs in its own fault boundary; one failure never stops
    ///   sibling cleanup.
    /// - Both maps are cleared unconditionally, regardless of failures.
    /// - Returns the recorded outcome of every attempted hook.
    pub fn cleanup(&mut self) -> Vec<HookReport> {
        let mut reports = Vec::with_capacity(self.plugins.len());
        for (plugin_id, plugin) in &self.plugins {
            let report = run_hook(plugin_id, HookKind::Cleanup, || plugin.cleanup());
            if let Err(failure) = &report.outcome {
                error!(
                    "event=plugin_hook_failed module=plugin_registry status=error \
                     plugin_id={plugin_id} hook=cleanup cause={failure}"
                );
            }
            reports.push(report);
        }

        self.plugins.clear();
        self.extensions.clear();
        info!(
            "event=registry_cleanup module=plugin_registry status=ok plugins={}",
            reports.len()
        );
        reports
    }
}

/// Runs one hook as a bounded operation yielding a recorded result.
///
/// Both error returns and panics are contained here; callers only ever see
/// the report.
fn run_hook<F>(plugin_id: &str, hook: HookKind, invoke: F) -> HookReport
where
    F: FnOnce() -> HookResult,
{
    let outcome = match catch_unwind(AssertUnwindSafe(invoke)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(cause)) => Err(HookFailure::Error(sanitize_cause(&cause.to_string()))),
        Err(payload) => Err(HookFailure::Panic(sanitize_cause(&panic_payload_text(
            payload.as_ref(),
        )))),
    };
    HookReport {
        plugin_id: plugin_id.to_string(),
        hook,
        outcome,
    }
}

fn panic_payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn sanitize_cause(value: &str) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(MAX_CAUSE_CHARS).collect::<String>();
    if normalized.chars().count() > MAX_CAUSE_CHARS {
        truncated.push_str("...");
    }
    truncated
}
