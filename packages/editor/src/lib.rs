//! # Sitecraft Editor
//!
//! Element tree state for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI editors / drag-and-drop (external)       │
//! └─────────────────────────────────────────────┘
//!                     ↓ add / move / update / remove
//! ┌─────────────────────────────────────────────┐
//! │ editor: ElementStore                        │
//! │  - Structure templates expand on creation   │
//! │  - Cascading removal, cycle-safe moves      │
//! │  - Copy-on-write snapshots                  │
//! └─────────────────────────────────────────────┘
//!          ↓ change events            ↓ snapshot
//! ┌──────────────────────┐  ┌─────────────────────┐
//! │ Persistence          │  │ build_hierarchy →   │
//! │ (key/value storage)  │  │ compiler-html       │
//! └──────────────────────┘  └─────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitecraft_editor::{ElementStore, NewElement, Persistence};
//! use sitecraft_model::ElementKind;
//!
//! let persistence = Persistence::file(".sitecraft");
//! let mut store = persistence.open_store();
//!
//! let form = store.add_element(NewElement::new(ElementKind::Form).structure("basic"))?;
//! store.update_content(&form, "Sign up");
//! ```

mod errors;
mod hierarchy;
mod mutations;
mod persistence;
mod store;
mod templates;

pub use errors::{PersistenceError, PersistenceResult, StoreError, StoreResult};
pub use hierarchy::{build_hierarchy, HierarchyNode};
pub use mutations::{Mutation, MutationResult};
pub use persistence::{
    FileStorage, KeyValueStorage, MemoryStorage, Persistence, ELEMENTS_KEY, SCHEMA_VERSION,
    VERSION_KEY,
};
pub use store::{ChangeListener, ElementStore, NewElement, Snapshot, StoreEvent};
pub use templates::{ChildTemplate, StructureRegistry, StructureTemplate};
