//! # Sitecraft HTML Compiler
//!
//! Serializes an element tree to static HTML and collects the per-element
//! style rules that `sitecraft-compiler-css` turns into the stylesheet.
//!
//! Generic elements map to a single tag. The composite types (`navbar`,
//! `hero`, `footer`, `cta`, `mintingSection`) are rendered by composers that
//! regroup their children into fixed slot containers.

mod attributes;
mod compiler;
mod composers;
mod tags;

pub use compiler::{
    compile, compile_document, compile_hierarchy, compile_with_registry, CompileError,
    CompileOptions, CompileResult, CompiledPage,
};

#[cfg(test)]
mod tests;
