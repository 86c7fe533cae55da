//! # Element Store
//!
//! Owns the canonical, ordered list of elements and is the only code path that
//! rewrites `children` / `parent_id` links.
//!
//! ## Snapshots
//!
//! Elements live behind an `Arc<Vec<Element>>`. Mutations go through
//! `Arc::make_mut`, so a [`Snapshot`] handed out earlier keeps observing the
//! state it was taken from while the store moves on.
//!
//! ## Semantics
//!
//! - Every call leaves the store consistent: each ID in a `children` list names
//!   an existing element whose `parent_id` points back at the owner.
//! - Targeting a missing element is a silent no-op (`false`).
//! - Calls that would break the tree (unknown parent, cycle) are rejected and
//!   leave the store untouched.

use crate::errors::{StoreError, StoreResult};
use crate::templates::StructureRegistry;
use serde_json::Value;
use sitecraft_model::{
    generate_id, merge_all, type_defaults, Accessibility, Configuration, Element, ElementKind,
    Settings, Styles,
};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Immutable view of the element list at one point in time
pub type Snapshot = Arc<Vec<Element>>;

/// Notification delivered to listeners after every successful mutation
#[derive(Debug, Clone)]
pub enum StoreEvent {
    Changed(Snapshot),
    Cleared,
}

pub type ChangeListener = Box<dyn FnMut(&StoreEvent) + Send>;

/// Parameters of `add_element`
#[derive(Debug, Clone, PartialEq)]
pub struct NewElement {
    pub kind: ElementKind,
    pub level: Option<u8>,
    pub insert_index: Option<usize>,
    pub parent_id: Option<String>,
    pub structure: Option<String>,
}

impl NewElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            level: None,
            insert_index: None,
            parent_id: None,
            structure: None,
        }
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn at(mut self, index: usize) -> Self {
        self.insert_index = Some(index);
        self
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn structure(mut self, name: impl Into<String>) -> Self {
        self.structure = Some(name.into());
        self
    }
}

impl From<ElementKind> for NewElement {
    fn from(kind: ElementKind) -> Self {
        NewElement::new(kind)
    }
}

pub struct ElementStore {
    elements: Snapshot,
    registry: Arc<StructureRegistry>,
    listeners: Vec<ChangeListener>,
    version: u64,
}

impl ElementStore {
    /// Empty store using the built-in template catalog
    pub fn new() -> Self {
        Self::with_registry(StructureRegistry::builtin().clone())
    }

    pub fn with_registry(registry: StructureRegistry) -> Self {
        Self {
            elements: Arc::new(Vec::new()),
            registry: Arc::new(registry),
            listeners: Vec::new(),
            version: 0,
        }
    }

    /// Store seeded with previously persisted elements. Dangling links are
    /// repaired so the invariants hold from the first call on.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let mut store = Self::new();
        store.elements = Arc::new(repair_links(elements));
        store
    }

    pub fn registry(&self) -> &StructureRegistry {
        &self.registry
    }

    /// Register a listener invoked after each mutation
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Number of successful mutations since creation
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.elements)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Create an element (and its template children, if `structure` is known)
    pub fn add_element(&mut self, new: impl Into<NewElement>) -> StoreResult<String> {
        let new = new.into();

        if let Some(parent_id) = &new.parent_id {
            if self.index_of(parent_id).is_none() {
                return Err(StoreError::ParentNotFound(parent_id.clone()));
            }
        }

        let id = generate_id(new.kind.as_str());
        let mut base = Element::new(id.clone(), new.kind.clone());
        base.parent_id = new.parent_id.clone();
        base.level = match (&new.kind, new.level) {
            (ElementKind::Heading, level) => Some(level.unwrap_or(1).clamp(1, 6)),
            (_, level) => level,
        };

        let mut created = Vec::new();
        if let Some(name) = &new.structure {
            match self.registry.get(name) {
                Some(template) => {
                    base.structure = Some(name.clone());
                    base.configuration = Some(Configuration::new().with("layout", name.as_str()));

                    for child in &template.children {
                        let child_id = generate_id(child.kind.as_str());
                        let mut element = Element::new(child_id.clone(), child.kind.clone());
                        element.content = child.content.clone();
                        element.styles = child.styles.clone();
                        element.level = child.level;
                        element.slot = child.slot;
                        element.configuration = child.configuration.clone();
                        element.settings = child.settings.clone();
                        element.parent_id = Some(id.clone());

                        base.children.push(child_id);
                        created.push(element);
                    }
                }
                None => {
                    warn!(structure = %name, kind = %new.kind, "Unknown structure, creating bare element");
                }
            }
        }

        let elements = Arc::make_mut(&mut self.elements);

        match &new.parent_id {
            Some(parent_id) => {
                if let Some(parent) = elements.iter_mut().find(|e| &e.id == parent_id) {
                    let index = new
                        .insert_index
                        .unwrap_or(parent.children.len())
                        .min(parent.children.len());
                    parent.children.insert(index, id.clone());
                }
                elements.push(base);
                elements.extend(created);
            }
            None => {
                let index = new
                    .insert_index
                    .unwrap_or(elements.len())
                    .min(elements.len());
                let tail = elements.split_off(index);
                elements.push(base);
                elements.extend(created);
                elements.extend(tail);
            }
        }

        debug!(id = %id, kind = %new.kind, "Added element");
        self.commit();
        Ok(id)
    }

    /// Remove an element and all of its descendants
    pub fn remove_element(&mut self, id: &str) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }

        let doomed = self.descendants_of(id);
        let elements = Arc::make_mut(&mut self.elements);

        elements.retain(|e| !doomed.contains(e.id.as_str()));
        for element in elements.iter_mut() {
            element.children.retain(|c| !doomed.contains(c.as_str()));
        }

        debug!(id = %id, removed = doomed.len(), "Removed element");
        self.commit();
        true
    }

    /// Reparent and/or reorder an element.
    ///
    /// With a parent, `index` is a position in the parent's `children`;
    /// without one, the element becomes a root at position `index` of the list.
    pub fn move_element(
        &mut self,
        id: &str,
        new_parent_id: Option<&str>,
        index: usize,
    ) -> StoreResult<bool> {
        if self.index_of(id).is_none() {
            return Ok(false);
        }

        if let Some(parent_id) = new_parent_id {
            if self.index_of(parent_id).is_none() {
                return Err(StoreError::ParentNotFound(parent_id.to_string()));
            }
            if self.descendants_of(id).contains(parent_id) {
                return Err(StoreError::CycleDetected {
                    node_id: id.to_string(),
                    parent_id: parent_id.to_string(),
                });
            }
        }

        // slots only mean something to the composite that assigned them
        let parent_kind = |parent: Option<&str>| {
            parent
                .and_then(|p| self.find_by_id(p))
                .map(|e| e.kind.clone())
        };
        let old_parent = self.find_by_id(id).and_then(|e| e.parent_id.clone());
        let regrouped = parent_kind(old_parent.as_deref()) != parent_kind(new_parent_id);

        let elements = Arc::make_mut(&mut self.elements);

        for element in elements.iter_mut() {
            element.children.retain(|c| c != id);
            if regrouped && element.id == id {
                element.slot = None;
            }
        }

        match new_parent_id {
            Some(parent_id) => {
                if let Some(parent) = elements.iter_mut().find(|e| e.id == parent_id) {
                    let index = index.min(parent.children.len());
                    parent.children.insert(index, id.to_string());
                }
                if let Some(element) = elements.iter_mut().find(|e| e.id == id) {
                    element.parent_id = Some(parent_id.to_string());
                }
            }
            None => {
                if let Some(position) = elements.iter().position(|e| e.id == id) {
                    let mut element = elements.remove(position);
                    element.parent_id = None;
                    let index = index.min(elements.len());
                    elements.insert(index, element);
                }
            }
        }

        self.commit();
        Ok(true)
    }

    pub fn update_content(&mut self, id: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        self.update(id, |element| element.content = Some(value))
    }

    /// Merge a partial style update. `hover` is merged one level deeper, and
    /// `null` values delete keys.
    pub fn update_styles(&mut self, id: &str, patch: &Styles) -> bool {
        self.update(id, |element| element.styles = element.styles.merged(patch))
    }

    pub fn update_configuration(&mut self, id: &str, key: &str, value: Value) -> bool {
        self.update(id, |element| {
            element
                .configuration
                .get_or_insert_with(Configuration::new)
                .set(key, value)
        })
    }

    pub fn update_settings(&mut self, id: &str, partial: Settings) -> bool {
        self.update(id, |element| {
            element
                .settings
                .get_or_insert_with(Settings::default)
                .merge(partial)
        })
    }

    pub fn update_accessibility(&mut self, id: &str, partial: Accessibility) -> bool {
        self.update(id, |element| {
            element
                .accessibility
                .get_or_insert_with(Accessibility::default)
                .merge(partial)
        })
    }

    /// Styles as seen by the editor: type defaults, template styles, the
    /// element's own styles, then `overrides`.
    pub fn effective_styles(&self, id: &str, overrides: &Styles) -> Option<Styles> {
        let element = self.find_by_id(id)?;
        let defaults = type_defaults(&element.kind);
        let empty = Styles::default();
        let template = element
            .structure
            .as_deref()
            .and_then(|name| self.registry.get(name))
            .map(|t| &t.styles)
            .unwrap_or(&empty);

        Some(merge_all([&defaults, template, &element.styles, overrides]))
    }

    pub fn clear_all(&mut self) {
        self.elements = Arc::new(Vec::new());
        self.version += 1;
        for listener in &mut self.listeners {
            listener(&StoreEvent::Cleared);
        }
    }

    fn update(&mut self, id: &str, f: impl FnOnce(&mut Element)) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(id = %id, "Update targets missing element");
            return false;
        };

        f(&mut Arc::make_mut(&mut self.elements)[index]);
        self.commit();
        true
    }

    /// IDs of `id` and everything reachable from it through `children`
    fn descendants_of(&self, id: &str) -> HashSet<String> {
        let by_id: HashMap<&str, &Element> =
            self.elements.iter().map(|e| (e.id.as_str(), e)).collect();

        let mut found = HashSet::new();
        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            if !found.insert(current.clone()) {
                continue;
            }
            if let Some(element) = by_id.get(current.as_str()) {
                stack.extend(element.children.iter().cloned());
            }
        }
        found
    }

    fn commit(&mut self) {
        self.version += 1;
        let event = StoreEvent::Changed(Arc::clone(&self.elements));
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ElementStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementStore")
            .field("elements", &self.elements.len())
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Drop child references that do not point back at their owner, and clear
/// `parent_id` values whose parent does not list the element.
fn repair_links(mut elements: Vec<Element>) -> Vec<Element> {
    let parents: HashMap<String, Option<String>> = elements
        .iter()
        .map(|e| (e.id.clone(), e.parent_id.clone()))
        .collect();

    let mut owned: HashSet<String> = HashSet::new();
    for element in elements.iter_mut() {
        let owner = element.id.clone();
        element.children.retain(|child| {
            let points_back = parents.get(child) == Some(&Some(owner.clone()));
            points_back && owned.insert(child.clone())
        });
    }

    let dangling: Vec<String> = elements
        .iter()
        .filter(|e| e.parent_id.is_some() && !owned.contains(&e.id))
        .map(|e| e.id.clone())
        .collect();
    if !dangling.is_empty() {
        warn!(count = dangling.len(), "Detached elements with dangling parent links");
    }
    for element in elements.iter_mut() {
        if dangling.contains(&element.id) {
            element.parent_id = None;
        }
    }

    let detached = break_cycles(&mut elements);
    if detached > 0 {
        warn!(count = detached, "Detached elements to break parent cycles");
    }

    elements
}

/// Once every link points back, anything unreachable from a root sits on a
/// cycle. Detach the first unreachable element in storage order until every
/// element hangs off a root. Returns the number of detached elements.
fn break_cycles(elements: &mut [Element]) -> usize {
    let index: HashMap<String, usize> = elements
        .iter()
        .enumerate()
        .map(|(i, e)| (e.id.clone(), i))
        .collect();

    let mut reachable = vec![false; elements.len()];
    let mut stack: Vec<usize> = (0..elements.len())
        .filter(|&i| elements[i].parent_id.is_none())
        .collect();
    let mut detached = 0;

    loop {
        while let Some(i) = stack.pop() {
            if std::mem::replace(&mut reachable[i], true) {
                continue;
            }
            stack.extend(
                elements[i]
                    .children
                    .iter()
                    .filter_map(|child| index.get(child).copied()),
            );
        }

        let Some(i) = reachable.iter().position(|r| !r) else {
            break;
        };

        let id = elements[i].id.clone();
        if let Some(owner) = elements[i]
            .parent_id
            .take()
            .and_then(|parent| index.get(&parent).copied())
        {
            elements[owner].children.retain(|child| *child != id);
        }
        detached += 1;
        stack.push(i);
    }

    detached
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecraft_model::Slot;
    use std::sync::Mutex;

    #[test]
    fn test_snapshot_is_not_affected_by_later_mutations() {
        let mut store = ElementStore::new();
        store.add_element(ElementKind::Paragraph).unwrap();
        let before = store.snapshot();

        store.add_element(ElementKind::Span).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_heading_level_defaults_and_clamps() {
        let mut store = ElementStore::new();
        let h = store.add_element(ElementKind::Heading).unwrap();
        let h9 = store
            .add_element(NewElement::new(ElementKind::Heading).level(9))
            .unwrap();

        assert_eq!(store.find_by_id(&h).unwrap().level, Some(1));
        assert_eq!(store.find_by_id(&h9).unwrap().level, Some(6));
    }

    #[test]
    fn test_insert_index_positions_root() {
        let mut store = ElementStore::new();
        let first = store.add_element(ElementKind::Paragraph).unwrap();
        let second = store
            .add_element(NewElement::new(ElementKind::Span).at(0))
            .unwrap();

        let ids: Vec<&str> = store.elements().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![second.as_str(), first.as_str()]);
    }

    #[test]
    fn test_listeners_observe_changes_and_clear() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);

        let mut store = ElementStore::new();
        store.subscribe(Box::new(move |event| {
            let label = match event {
                StoreEvent::Changed(snapshot) => format!("changed:{}", snapshot.len()),
                StoreEvent::Cleared => "cleared".to_string(),
            };
            sink.lock().unwrap().push(label);
        }));

        store.add_element(ElementKind::Paragraph).unwrap();
        store.update_content("missing", "x");
        store.clear_all();

        assert_eq!(*events.lock().unwrap(), vec!["changed:1", "cleared"]);
    }

    #[test]
    fn test_effective_styles_layers() {
        let mut store = ElementStore::new();
        let id = store
            .add_element(NewElement::new(ElementKind::Form).structure("contact"))
            .unwrap();
        store.update_styles(&id, &Styles::new().with("gap", "4px"));

        let styles = store
            .effective_styles(&id, &Styles::new().with("display", "grid"))
            .unwrap();

        assert_eq!(styles.get("gap").map(ToString::to_string).as_deref(), Some("4px"));
        assert_eq!(styles.get("display").map(ToString::to_string).as_deref(), Some("grid"));
        assert_eq!(
            styles.get("maxWidth").map(ToString::to_string).as_deref(),
            Some("480px")
        );
        assert_eq!(
            styles.get("flexDirection").map(ToString::to_string).as_deref(),
            Some("column")
        );
    }

    #[test]
    fn test_repair_links_drops_dangling_children() {
        let mut parent = Element::new("p", ElementKind::Div);
        parent.children = vec!["ghost".to_string(), "c".to_string()];
        let mut child = Element::new("c", ElementKind::Span);
        child.parent_id = Some("p".to_string());
        let mut orphan = Element::new("o", ElementKind::Span);
        orphan.parent_id = Some("nowhere".to_string());

        let store = ElementStore::from_elements(vec![parent, child, orphan]);

        assert_eq!(store.find_by_id("p").unwrap().children, vec!["c"]);
        assert_eq!(store.find_by_id("o").unwrap().parent_id, None);
    }

    #[test]
    fn test_repair_links_breaks_parent_cycles() {
        let mut a = Element::new("a", ElementKind::Section).with_content("A");
        a.parent_id = Some("b".to_string());
        a.children = vec!["b".to_string()];
        let mut b = Element::new("b", ElementKind::Div).with_content("B");
        b.parent_id = Some("a".to_string());
        b.children = vec!["a".to_string()];

        let store = ElementStore::from_elements(vec![a, b]);

        let a = store.find_by_id("a").unwrap();
        assert_eq!(a.parent_id, None);
        assert_eq!(a.children, vec!["b"]);
        assert!(store.find_by_id("b").unwrap().children.is_empty());

        let roots = crate::build_hierarchy(store.elements());
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].children[0].element.id, "b");
    }

    #[test]
    fn test_move_between_composites_clears_slot() {
        let mut store = ElementStore::new();
        let footer = store.add_element(ElementKind::Footer).unwrap();
        let navbar = store.add_element(ElementKind::Navbar).unwrap();
        let hero = store.add_element(ElementKind::Hero).unwrap();
        let button = store
            .add_element(NewElement::new(ElementKind::Button).parent(footer.as_str()))
            .unwrap();
        store.update(&button, |e| e.slot = Some(Slot::Social));

        store.move_element(&button, Some(&navbar), 0).unwrap();
        assert_eq!(store.find_by_id(&button).unwrap().slot, None);

        store.update(&button, |e| e.slot = Some(Slot::Button));
        let other_navbar = store.add_element(ElementKind::Navbar).unwrap();
        store.move_element(&button, Some(&other_navbar), 0).unwrap();
        assert_eq!(store.find_by_id(&button).unwrap().slot, Some(Slot::Button));

        store.move_element(&button, Some(&hero), 0).unwrap();
        assert_eq!(store.find_by_id(&button).unwrap().slot, None);
    }
}
