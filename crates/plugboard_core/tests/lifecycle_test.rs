use plugboard_core::{
    ExtensionComponent, HookFailure, HookKind, HookResult, Plugin, PluginInfo, PluginRegistry,
    SlotContext,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, PartialEq, Eq)]
enum CleanupBehavior {
    Succeed,
    Fail,
    Panic,
}

struct LifecyclePlugin {
    info: PluginInfo,
    cleanup_behavior: CleanupBehavior,
    cleanup_calls: Arc<AtomicUsize>,
}

impl LifecyclePlugin {
    fn new(id: &str, cleanup_behavior: CleanupBehavior, cleanup_calls: Arc<AtomicUsize>) -> Self {
        Self {
            info: PluginInfo {
                id: id.to_string(),
                name: id.to_string(),
                version: "1.0.0".to_string(),
                description: "lifecycle fixture".to_string(),
                author: None,
            },
            cleanup_behavior,
            cleanup_calls,
        }
    }
}

impl Plugin for LifecyclePlugin {
    fn info(&self) -> &PluginInfo {
        &self.info
    }

    fn extensions(&self) -> Vec<ExtensionComponent> {
        vec![ExtensionComponent::new("dashboardContent", |_: &SlotContext| {
            "lifecycle".to_string()
        })]
    }

    fn cleanup(&self) -> HookResult {
        self.cleanup_calls.fetch_add(1, Ordering::SeqCst);
        match self.cleanup_behavior {
            CleanupBehavior::Succeed => Ok(()),
            CleanupBehavior::Fail => Err("resource release failed".into()),
            CleanupBehavior::Panic => panic!("cleanup hook panicked"),
        }
    }
}

#[test]
fn cleanup_attempts_every_plugin_and_clears_all_state() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = PluginRegistry::new();
    registry.register_plugin(Box::new(LifecyclePlugin::new(
        "first",
        CleanupBehavior::Panic,
        Arc::clone(&calls),
    )));
    registry.register_plugin(Box::new(LifecyclePlugin::new(
        "second",
        CleanupBehavior::Fail,
        Arc::clone(&calls),
    )));
    registry.register_plugin(Box::new(LifecyclePlugin::new(
        "third",
        CleanupBehavior::Succeed,
        Arc::clone(&calls),
    )));

    let reports = registry.cleanup();

    assert_eq!(calls.load(Ordering::SeqCst), 3, "every hook must be attempted");
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|report| report.hook == HookKind::Cleanup));

    let outcome_of = |id: &str| {
        reports
            .iter()
            .find(|report| report.plugin_id == id)
            .unwrap_or_else(|| panic!("missing report for plugin `{id}`"))
            .outcome
            .clone()
    };
    assert!(matches!(outcome_of("first"), Err(HookFailure::Panic(_))));
    assert!(matches!(outcome_of("second"), Err(HookFailure::Error(_))));
    assert!(outcome_of("third").is_ok());

    assert!(registry.is_empty());
    assert_eq!(registry.plugins().count(), 0);
    assert!(registry.extensions_for("dashboardContent").is_empty());
}

#[test]
fn registry_accepts_a_fresh_wave_after_cleanup() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = PluginRegistry::new();
    registry.register_plugin(Box::new(LifecyclePlugin::new(
        "wave-one",
        CleanupBehavior::Succeed,
        Arc::clone(&calls),
    )));
    registry.cleanup();

    registry.register_plugin(Box::new(LifecyclePlugin::new(
        "wave-two",
        CleanupBehavior::Succeed,
        Arc::clone(&calls),
    )));
    assert!(registry.has_plugin("wave-two"));
    assert!(!registry.has_plugin("wave-one"));
    assert_eq!(registry.extensions_for("dashboardContent").len(), 1);
}

struct FailingInitPlugin {
    info: PluginInfo,
}

impl Plugin for FailingInitPlugin {
    fn info(&self) -> &PluginInfo {
        &self.info
    }

    fn extensions(&self) -> Vec<ExtensionComponent> {
        vec![ExtensionComponent::new("userEditForm", |_: &SlotContext| {
            "fragile".to_string()
        })]
    }

    fn initialize(&self) -> HookResult {
        panic!("initialize hook panicked");
    }
}

#[test]
fn initialize_panic_is_contained_and_plugin_stays_registered() {
    let mut registry = PluginRegistry::new();
    registry.register_plugin(Box::new(FailingInitPlugin {
        info: PluginInfo {
            id: "fragile".to_string(),
            name: "Fragile".to_string(),
            version: "1.0.0".to_string(),
            description: "panics during initialize".to_string(),
            author: None,
        },
    }));

    assert!(registry.has_plugin("fragile"));
    assert_eq!(registry.extensions_for("userEditForm").len(), 1);
}
