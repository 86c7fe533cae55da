//! # Store Mutations
//!
//! Serializable form of the store operations, for editors that send commands
//! as data (IPC, replay logs, tests).
//!
//! ## Mutation Semantics
//!
//! ### AddElement
//! - Creates the element and any template children in one step
//! - Fails if the parent does not exist
//!
//! ### MoveElement
//! - Atomic relocation of a node to a new parent (or to the root level)
//! - Fails if the parent does not exist or the move would create a cycle
//!
//! ### RemoveElement / Update*
//! - Missing targets are no-ops

use crate::errors::StoreResult;
use crate::store::{ElementStore, NewElement};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitecraft_model::{Accessibility, ElementKind, Settings, Styles};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    #[serde(rename_all = "camelCase")]
    AddElement {
        #[serde(rename = "type")]
        kind: ElementKind,
        #[serde(default)]
        level: Option<u8>,
        #[serde(default)]
        insert_index: Option<usize>,
        #[serde(default)]
        parent_id: Option<String>,
        #[serde(default)]
        structure: Option<String>,
    },

    RemoveElement { id: String },

    #[serde(rename_all = "camelCase")]
    MoveElement {
        id: String,
        #[serde(default)]
        new_parent_id: Option<String>,
        index: usize,
    },

    UpdateContent { id: String, value: String },

    UpdateStyles { id: String, styles: Styles },

    UpdateConfiguration { id: String, key: String, value: Value },

    UpdateSettings { id: String, settings: Settings },

    UpdateAccessibility { id: String, accessibility: Accessibility },

    ClearAll,
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Store version after the mutation
    pub version: u64,

    /// ID of the element created by `AddElement`
    pub created_id: Option<String>,

    /// Whether the target existed (always true for `AddElement` / `ClearAll`)
    pub applied: bool,
}

impl Mutation {
    pub fn apply(self, store: &mut ElementStore) -> StoreResult<MutationResult> {
        let mut created_id = None;

        let applied = match self {
            Mutation::AddElement {
                kind,
                level,
                insert_index,
                parent_id,
                structure,
            } => {
                let id = store.add_element(NewElement {
                    kind,
                    level,
                    insert_index,
                    parent_id,
                    structure,
                })?;
                created_id = Some(id);
                true
            }
            Mutation::RemoveElement { id } => store.remove_element(&id),
            Mutation::MoveElement {
                id,
                new_parent_id,
                index,
            } => store.move_element(&id, new_parent_id.as_deref(), index)?,
            Mutation::UpdateContent { id, value } => store.update_content(&id, value),
            Mutation::UpdateStyles { id, styles } => store.update_styles(&id, &styles),
            Mutation::UpdateConfiguration { id, key, value } => {
                store.update_configuration(&id, &key, value)
            }
            Mutation::UpdateSettings { id, settings } => store.update_settings(&id, settings),
            Mutation::UpdateAccessibility { id, accessibility } => {
                store.update_accessibility(&id, accessibility)
            }
            Mutation::ClearAll => {
                store.clear_all();
                true
            }
        };

        Ok(MutationResult {
            version: store.version(),
            created_id,
            applied,
        })
    }
}

impl ElementStore {
    pub fn apply(&mut self, mutation: Mutation) -> StoreResult<MutationResult> {
        mutation.apply(self)
    }
}
