//! Tests for registry CRUD and selection behavior.

use reel_core::{CompositionDescriptor, CompositionRegistry, Error};

fn descriptor(name: &str) -> CompositionDescriptor {
    CompositionDescriptor {
        name: name.into(),
        component: format!("./src/{name}.tsx"),
        width: 1280,
        height: 720,
        fps: 30,
        duration_in_frames: 90,
    }
}

#[test]
fn register_and_get() {
    let mut registry = CompositionRegistry::new();
    registry.register(descriptor("intro"));

    assert!(registry.contains("intro"));
    assert_eq!(registry.get("intro").unwrap().width, 1280);
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
}

#[test]
fn register_replaces_existing() {
    let mut registry = CompositionRegistry::new();
    registry.register(descriptor("intro"));

    let mut wider = descriptor("intro");
    wider.width = 3840;
    registry.register(wider);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("intro").unwrap().width, 3840);
}

#[test]
fn unregister_returns_descriptor() {
    let mut registry = CompositionRegistry::new();
    registry.register(descriptor("intro"));

    let removed = registry.unregister("intro");
    assert_eq!(removed.unwrap().name, "intro");
    assert!(registry.is_empty());
    assert!(registry.unregister("intro").is_none());
}

#[test]
fn select_unknown_composition_fails() {
    let mut registry = CompositionRegistry::new();
    registry.register(descriptor("intro"));

    let err = registry.select("outro").unwrap_err();
    assert_eq!(err, Error::UnknownComposition("outro".into()));
    assert_eq!(registry.current_name(), None);
}

#[test]
fn select_then_current() {
    let mut registry = CompositionRegistry::new();
    registry.register(descriptor("intro"));
    registry.register(descriptor("outro"));

    registry.select("outro").unwrap();
    assert_eq!(registry.current_name(), Some("outro"));
    assert_eq!(registry.current().unwrap().component, "./src/outro.tsx");

    registry.clear_selection();
    assert!(registry.current().is_none());
}

#[test]
fn unregister_clears_matching_selection() {
    let mut registry = CompositionRegistry::new();
    registry.register(descriptor("intro"));
    registry.register(descriptor("outro"));
    registry.select("intro").unwrap();

    registry.unregister("intro");
    assert_eq!(registry.current_name(), None);
}

#[test]
fn unregister_keeps_unrelated_selection() {
    let mut registry = CompositionRegistry::new();
    registry.register(descriptor("intro"));
    registry.register(descriptor("outro"));
    registry.select("intro").unwrap();

    registry.unregister("outro");
    assert_eq!(registry.current_name(), Some("intro"));
}

#[test]
fn clear_resets_everything() {
    let mut registry = CompositionRegistry::new();
    registry.register(descriptor("intro"));
    registry.select("intro").unwrap();

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.current_name().is_none());
}

#[test]
fn names_and_iter_cover_all_entries() {
    let mut registry = CompositionRegistry::new();
    registry.register(descriptor("intro"));
    registry.register(descriptor("outro"));

    let mut names: Vec<_> = registry.names().cloned().collect();
    names.sort();
    assert_eq!(names, vec!["intro", "outro"]);

    assert_eq!(registry.iter().count(), 2);
}
