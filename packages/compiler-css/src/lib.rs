mod document;
mod rule;
mod utils;

pub use document::{CssRule, VirtualCssDocument};
pub use rule::{CollectedStyles, StyleRule};
pub use utils::{class_name_for, format_value, join_selector, to_kebab_case};

/// Compile collected element styles to a stylesheet
pub fn compile_css(collected: &CollectedStyles) -> String {
    VirtualCssDocument::from_collected(collected).to_css()
}

/// Compile collected element styles to a minified stylesheet
pub fn compile_css_minified(collected: &CollectedStyles) -> String {
    VirtualCssDocument::from_collected(collected).to_css_minified()
}
