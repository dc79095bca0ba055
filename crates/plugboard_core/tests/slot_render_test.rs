use plugboard_core::builtin::register_builtin_plugins;
use plugboard_core::{catalog, ExtensionSlot, PluginRegistry, SlotContext};

#[test]
fn slot_with_no_registrants_renders_nothing_and_does_not_panic() {
    let registry = PluginRegistry::new();
    let slot = ExtensionSlot::new(&registry);

    assert!(slot
        .render(&catalog::DASHBOARD_CONTENT, &SlotContext::new())
        .is_empty());
    assert!(slot
        .render("pointThatNeverExisted", &SlotContext::new())
        .is_empty());
}

#[test]
fn builtin_wave_renders_dashboard_greeting_with_context() {
    let mut registry = PluginRegistry::new();
    register_builtin_plugins(&mut registry);

    let mut context = SlotContext::new();
    context.insert("username".to_string(), serde_json::Value::from("admin"));

    let slot = ExtensionSlot::new(&registry);
    let rendered = slot.render(&catalog::DASHBOARD_CONTENT, &context);
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].key, "dashboardContent-0");
    assert_eq!(rendered[0].plugin_id, "hello-world");
    assert_eq!(rendered[0].body, "Hello, admin!");
}

#[test]
fn user_edit_form_slot_receives_the_edited_record() {
    let mut registry = PluginRegistry::new();
    register_builtin_plugins(&mut registry);

    let mut record = serde_json::Map::new();
    record.insert("uid".to_string(), serde_json::Value::from("alice"));
    record.insert(
        "inetuserstatus".to_string(),
        serde_json::Value::from("inactive"),
    );
    let mut context = SlotContext::new();
    context.insert("user".to_string(), serde_json::Value::Object(record));

    let slot = ExtensionSlot::new(&registry);
    let rendered = slot.render("userEditForm", &context);
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].plugin_id, "user-status");
    assert_eq!(rendered[0].body, "Status: inactive (uid=alice)");
}

#[test]
fn rendered_keys_stay_stable_across_re_renders() {
    let mut registry = PluginRegistry::new();
    register_builtin_plugins(&mut registry);

    let slot = ExtensionSlot::new(&registry);
    let context = SlotContext::new();
    let first = slot.render(&catalog::DASHBOARD_CONTENT, &context);
    let second = slot.render(&catalog::DASHBOARD_CONTENT, &context);
    let first_keys: Vec<&str> = first.iter().map(|item| item.key.as_str()).collect();
    let second_keys: Vec<&str> = second.iter().map(|item| item.key.as_str()).collect();
    assert_eq!(first_keys, second_keys);
}

#[test]
fn slot_is_empty_again_after_registry_cleanup() {
    let mut registry = PluginRegistry::new();
    register_builtin_plugins(&mut registry);
    registry.cleanup();

    let slot = ExtensionSlot::new(&registry);
    assert!(slot
        .render(&catalog::DASHBOARD_CONTENT, &SlotContext::new())
        .is_empty());
    assert!(slot.render("userEditForm", &SlotContext::new()).is_empty());
}
