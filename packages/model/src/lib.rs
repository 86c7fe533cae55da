//! # Sitecraft Model
//!
//! Data model shared by the editor and the compilers.
//!
//! A page is a flat, ordered list of [`Element`] records. Tree structure is
//! expressed through `children` ID lists and `parent_id` back-references;
//! only the editor's store is allowed to rewrite those links.
//!
//! ```text
//! ┌──────────────┐   children   ┌──────────────┐
//! │ navbar-1-... │ ───────────→ │ image-2-...  │
//! │ parent: None │ ←─────────── │ parent: nav  │
//! └──────────────┘   parent_id  └──────────────┘
//! ```

pub mod defaults;
pub mod element;
pub mod id_generator;
pub mod styles;

pub use defaults::type_defaults;
pub use element::{
    Accessibility, ActionType, Configuration, DropdownLink, Element, ElementKind, Settings, Slot,
};
pub use id_generator::generate_id;
pub use styles::{merge_all, merge_styles, StyleMap, StyleValue, Styles};
