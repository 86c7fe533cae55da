//! Store behavior through the public API: scenarios, invariants, persistence

use proptest::prelude::*;
use serde_json::json;
use sitecraft_editor::{
    build_hierarchy, ElementStore, FileStorage, KeyValueStorage, Mutation, NewElement,
    Persistence, StoreError, ELEMENTS_KEY, VERSION_KEY,
};
use sitecraft_model::{Accessibility, ElementKind, Settings, StyleValue, Styles};
use std::collections::HashSet;
use std::sync::Arc;

/// Every child reference resolves and points back at its owner, every
/// non-root element is listed by exactly one parent, and no ID repeats.
fn assert_invariants(store: &ElementStore) {
    let elements = store.elements();
    let ids: HashSet<&str> = elements.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), elements.len(), "duplicate ids");

    let mut owned = HashSet::new();
    for element in elements {
        for child_id in &element.children {
            let child = store
                .find_by_id(child_id)
                .unwrap_or_else(|| panic!("dangling child {child_id}"));
            assert_eq!(child.parent_id.as_deref(), Some(element.id.as_str()));
            assert!(owned.insert(child_id.as_str()), "shared child {child_id}");
        }
    }

    for element in elements {
        if element.parent_id.is_some() {
            assert!(owned.contains(element.id.as_str()), "unlisted child {}", element.id);
        }
    }
}

#[test]
fn scenario_a_single_paragraph() {
    let mut store = ElementStore::new();
    let id = store.add_element(ElementKind::Paragraph).unwrap();

    assert_eq!(store.len(), 1);
    let element = store.find_by_id(&id).unwrap();
    assert_eq!(element.kind, ElementKind::Paragraph);
    assert!(element.children.is_empty());
    assert_eq!(element.parent_id, None);
}

#[test]
fn scenario_b_form_from_basic_structure() {
    let mut store = ElementStore::new();
    let form_id = store
        .add_element(NewElement::new(ElementKind::Form).structure("basic"))
        .unwrap();

    assert_eq!(store.len(), 3);
    let form = store.find_by_id(&form_id).unwrap();
    assert_eq!(form.children.len(), 2);
    assert_eq!(form.structure.as_deref(), Some("basic"));

    for child_id in &form.children {
        let input = store.find_by_id(child_id).unwrap();
        assert_eq!(input.kind, ElementKind::Input);
        assert_eq!(input.parent_id.as_deref(), Some(form_id.as_str()));
    }
    assert_invariants(&store);
}

#[test]
fn scenario_d_removing_form_cascades() {
    let mut store = ElementStore::new();
    let form_id = store
        .add_element(NewElement::new(ElementKind::Form).structure("basic"))
        .unwrap();

    assert!(store.remove_element(&form_id));

    assert!(store.is_empty());
}

#[test]
fn test_unknown_structure_creates_bare_container() {
    let mut store = ElementStore::new();
    let id = store
        .add_element(NewElement::new(ElementKind::Form).structure("nope"))
        .unwrap();

    assert_eq!(store.len(), 1);
    assert!(store.find_by_id(&id).unwrap().children.is_empty());
}

#[test]
fn test_add_with_missing_parent_is_rejected() {
    let mut store = ElementStore::new();
    let result = store.add_element(NewElement::new(ElementKind::Span).parent("ghost"));

    assert_eq!(result, Err(StoreError::ParentNotFound("ghost".to_string())));
    assert!(store.is_empty());
}

#[test]
fn test_add_into_parent_at_index() {
    let mut store = ElementStore::new();
    let list = store.add_element(ElementKind::List).unwrap();
    let first = store
        .add_element(NewElement::new(ElementKind::ListItem).parent(&list))
        .unwrap();
    let second = store
        .add_element(NewElement::new(ElementKind::ListItem).parent(&list).at(0))
        .unwrap();

    assert_eq!(store.find_by_id(&list).unwrap().children, vec![second, first]);
    assert_invariants(&store);
}

#[test]
fn test_remove_nested_subtree_strips_parent_reference() {
    let mut store = ElementStore::new();
    let section = store.add_element(ElementKind::Section).unwrap();
    let form = store
        .add_element(
            NewElement::new(ElementKind::Form)
                .parent(&section)
                .structure("contact"),
        )
        .unwrap();
    let sibling = store
        .add_element(NewElement::new(ElementKind::Paragraph).parent(&section))
        .unwrap();

    store.remove_element(&form);

    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_id(&section).unwrap().children, vec![sibling]);
    assert_invariants(&store);
}

#[test]
fn test_remove_missing_is_noop() {
    let mut store = ElementStore::new();
    store.add_element(ElementKind::Paragraph).unwrap();
    let version = store.version();

    assert!(!store.remove_element("missing"));
    assert_eq!(store.version(), version);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_hover_sub_merge() {
    let mut store = ElementStore::new();
    let id = store.add_element(ElementKind::Button).unwrap();

    store.update_styles(&id, &Styles::new().with_hover("color", "red"));
    store.update_styles(&id, &Styles::new().with_hover("backgroundColor", "blue"));

    let hover = &store.find_by_id(&id).unwrap().styles.hover;
    assert_eq!(hover.len(), 2);
    assert_eq!(hover.get("color"), Some(&StyleValue::from("red")));
    assert_eq!(hover.get("backgroundColor"), Some(&StyleValue::from("blue")));
}

#[test]
fn test_updates_on_missing_ids_are_silent() {
    let mut store = ElementStore::new();

    assert!(!store.update_content("x", "y"));
    assert!(!store.update_styles("x", &Styles::new().with("color", "red")));
    assert!(!store.update_configuration("x", "layout", json!("twoColumn")));
    assert!(!store.update_settings("x", Settings::default()));
    assert!(!store.update_accessibility("x", Accessibility::default()));
    assert!(store.find_by_id("x").is_none());
}

#[test]
fn test_update_configuration_and_settings() {
    let mut store = ElementStore::new();
    let id = store.add_element(ElementKind::List).unwrap();

    store.update_configuration(&id, "listType", json!("ordered"));
    store.update_settings(
        &id,
        Settings {
            target_value: Some("#top".to_string()),
            ..Default::default()
        },
    );
    store.update_accessibility(
        &id,
        Accessibility {
            aria_label: Some("Steps".to_string()),
            ..Default::default()
        },
    );

    let element = store.find_by_id(&id).unwrap();
    assert_eq!(
        element.configuration.as_ref().and_then(|c| c.list_type()),
        Some("ordered")
    );
    assert_eq!(
        element.settings.as_ref().and_then(|s| s.target_value.as_deref()),
        Some("#top")
    );
    assert_eq!(
        element.accessibility.as_ref().and_then(|a| a.aria_label.as_deref()),
        Some("Steps")
    );
}

#[test]
fn test_move_between_parents() {
    let mut store = ElementStore::new();
    let a = store.add_element(ElementKind::Div).unwrap();
    let b = store.add_element(ElementKind::Div).unwrap();
    let child = store
        .add_element(NewElement::new(ElementKind::Span).parent(&a))
        .unwrap();

    assert_eq!(store.move_element(&child, Some(b.as_str()), 0), Ok(true));

    assert!(store.find_by_id(&a).unwrap().children.is_empty());
    assert_eq!(store.find_by_id(&b).unwrap().children, vec![child.clone()]);
    assert_eq!(
        store.find_by_id(&child).unwrap().parent_id.as_deref(),
        Some(b.as_str())
    );
    assert_invariants(&store);
}

#[test]
fn test_move_to_root() {
    let mut store = ElementStore::new();
    let parent = store.add_element(ElementKind::Div).unwrap();
    let child = store
        .add_element(NewElement::new(ElementKind::Span).parent(&parent))
        .unwrap();

    store.move_element(&child, None, 0).unwrap();

    assert_eq!(store.elements()[0].id, child);
    assert!(store.find_by_id(&child).unwrap().is_root());
    assert_invariants(&store);
}

#[test]
fn test_move_into_descendant_is_rejected() {
    let mut store = ElementStore::new();
    let outer = store.add_element(ElementKind::Div).unwrap();
    let inner = store
        .add_element(NewElement::new(ElementKind::Div).parent(&outer))
        .unwrap();

    let result = store.move_element(&outer, Some(inner.as_str()), 0);

    assert!(matches!(result, Err(StoreError::CycleDetected { .. })));
    assert!(matches!(
        store.move_element(&outer, Some(outer.as_str()), 0),
        Err(StoreError::CycleDetected { .. })
    ));
    assert_invariants(&store);
}

#[test]
fn test_hierarchy_from_store() {
    let mut store = ElementStore::new();
    store.add_element(ElementKind::Div).unwrap();
    store
        .add_element(NewElement::new(ElementKind::Navbar).structure("twoColumn"))
        .unwrap();

    let tree = build_hierarchy(store.elements());

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].element.kind, ElementKind::Navbar);
    assert_eq!(tree[0].children.len(), 4);
    assert_eq!(store.len(), 6);
}

#[test]
fn test_persistence_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let persistence = Persistence::file(dir.path());

    let original = {
        let mut store = persistence.open_store();
        let hero = store
            .add_element(NewElement::new(ElementKind::Hero).structure("heroOne"))
            .unwrap();
        store.update_styles(
            &hero,
            &Styles::new().with("padding", 24).with_hover("opacity", 0.8),
        );
        store.snapshot()
    };

    let reloaded = persistence.load();
    assert_eq!(reloaded, *original);

    let storage = FileStorage::new(dir.path());
    assert!(storage.get(ELEMENTS_KEY).unwrap().is_some());
    assert!(storage.get(VERSION_KEY).unwrap().is_some());
}

#[test]
fn test_clear_all_clears_storage() {
    let persistence = Persistence::memory();
    let mut store = persistence.open_store();
    store.add_element(ElementKind::Paragraph).unwrap();
    assert_eq!(persistence.load().len(), 1);

    store.apply(Mutation::ClearAll).unwrap();

    assert!(store.is_empty());
    assert!(persistence.load().is_empty());
}

#[test]
fn test_custom_storage_backend() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(sitecraft_editor::MemoryStorage::new());
    let persistence = Persistence::new(Arc::clone(&storage));
    persistence
        .save(&[sitecraft_model::Element::new("p-1", ElementKind::Paragraph)])
        .unwrap();

    let store = Persistence::new(storage).open_store();
    assert!(store.find_by_id("p-1").is_some());
}

#[derive(Debug, Clone)]
enum Op {
    Add { kind: usize, parent: Option<usize>, structure: Option<usize> },
    Remove(usize),
    Move { node: usize, parent: Option<usize>, index: usize },
}

const KINDS: &[ElementKind] = &[
    ElementKind::Div,
    ElementKind::Form,
    ElementKind::Navbar,
    ElementKind::Span,
];
const STRUCTURES: &[&str] = &["basic", "twoColumn", "mintingSection", "unknown"];

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..KINDS.len(), prop::option::of(0usize..32), prop::option::of(0..STRUCTURES.len()))
            .prop_map(|(kind, parent, structure)| Op::Add { kind, parent, structure }),
        (0usize..32).prop_map(Op::Remove),
        (0usize..32, prop::option::of(0usize..32), 0usize..4)
            .prop_map(|(node, parent, index)| Op::Move { node, parent, index }),
    ]
}

fn pick(store: &ElementStore, index: usize) -> Option<String> {
    let elements = store.elements();
    if elements.is_empty() {
        None
    } else {
        Some(elements[index % elements.len()].id.clone())
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn referential_integrity_holds(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut store = ElementStore::new();

        for op in ops {
            match op {
                Op::Add { kind, parent, structure } => {
                    let mut new = NewElement::new(KINDS[kind].clone());
                    if let Some(parent_id) = parent.and_then(|p| pick(&store, p)) {
                        new = new.parent(parent_id);
                    }
                    if let Some(s) = structure {
                        new = new.structure(STRUCTURES[s]);
                    }
                    prop_assert!(store.add_element(new).is_ok());
                }
                Op::Remove(index) => {
                    if let Some(id) = pick(&store, index) {
                        store.remove_element(&id);
                        prop_assert!(store.find_by_id(&id).is_none());
                        prop_assert!(store.elements().iter().all(|e| !e.children.contains(&id)));
                    }
                }
                Op::Move { node, parent, index } => {
                    if let Some(id) = pick(&store, node) {
                        let parent_id = parent.and_then(|p| pick(&store, p));
                        let _ = store.move_element(&id, parent_id.as_deref(), index);
                    }
                }
            }
            assert_invariants(&store);
        }
    }
}
