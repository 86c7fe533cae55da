//! Nested view of the flat element list, used for export and debugging.

use serde::Serialize;
use sitecraft_model::Element;
use std::collections::{HashMap, HashSet};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode {
    pub element: Element,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Total number of nodes in this subtree
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::size).sum::<usize>()
    }
}

/// Rebuild the tree from the flat list.
///
/// Root elements with no children, no content and no structure are empty
/// placeholders and are left out. Children are resolved in `children` order;
/// IDs that do not resolve are skipped.
pub fn build_hierarchy(elements: &[Element]) -> Vec<HierarchyNode> {
    let by_id: HashMap<&str, &Element> = elements.iter().map(|e| (e.id.as_str(), e)).collect();
    let mut visited = HashSet::new();

    elements
        .iter()
        .filter(|e| e.is_root() && !is_placeholder(e))
        .filter_map(|root| build_node(root, &by_id, &mut visited))
        .collect()
}

fn is_placeholder(element: &Element) -> bool {
    element.children.is_empty() && element.text().is_none() && element.structure.is_none()
}

fn build_node<'a>(
    element: &'a Element,
    by_id: &HashMap<&'a str, &'a Element>,
    visited: &mut HashSet<&'a str>,
) -> Option<HierarchyNode> {
    if !visited.insert(element.id.as_str()) {
        warn!(id = %element.id, "Element reachable twice, skipping");
        return None;
    }

    let children = element
        .children
        .iter()
        .filter_map(|child_id| match by_id.get(child_id.as_str()) {
            Some(&child) => build_node(child, by_id, visited),
            None => {
                warn!(parent = %element.id, child = %child_id, "Child not found");
                None
            }
        })
        .collect();

    Some(HierarchyNode {
        element: element.clone(),
        children,
    })
}
