use crate::rule::{CollectedStyles, StyleRule};
use crate::utils::{format_value, join_selector, to_kebab_case};
use sitecraft_model::StyleMap;
use tracing::{debug, instrument};

/// CSS rule with selector and properties (already kebab-cased)
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selector: String,
    pub properties: Vec<(String, String)>,
}

/// CSS document - flat collection of CSS rules
#[derive(Debug, Clone, Default)]
pub struct VirtualCssDocument {
    pub rules: Vec<CssRule>,
}

impl VirtualCssDocument {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: CssRule) {
        self.rules.push(rule);
    }

    /// Flatten collected styles. Each entry produces `.class`, `.class:hover`
    /// and one rule per nested selector, recursively; empty rules are skipped.
    #[instrument(skip_all, fields(entries = collected.len()))]
    pub fn from_collected(collected: &CollectedStyles) -> Self {
        let mut doc = Self::new();
        for (class_name, rule) in collected.entries() {
            doc.flatten(&format!(".{}", class_name), rule);
        }
        debug!(rules = doc.rules.len(), "Flattened collected styles");
        doc
    }

    fn flatten(&mut self, selector: &str, rule: &StyleRule) {
        self.add_map(selector.to_string(), &rule.properties);
        self.add_map(join_selector(selector, ":hover"), &rule.hover);

        for (nested, child) in &rule.rules {
            self.flatten(&join_selector(selector, nested), child);
        }
    }

    fn add_map(&mut self, selector: String, map: &StyleMap) {
        let properties: Vec<(String, String)> = map
            .iter()
            .filter(|(_, value)| !value.is_unset())
            .map(|(key, value)| (to_kebab_case(key), format_value(key, value)))
            .collect();

        if !properties.is_empty() {
            self.add_rule(CssRule {
                selector,
                properties,
            });
        }
    }

    /// Convert to CSS text
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for rule in &self.rules {
            css.push_str(&rule.selector);
            css.push_str(" {\n");

            for (key, value) in &rule.properties {
                css.push_str("  ");
                css.push_str(key);
                css.push_str(": ");
                css.push_str(value);
                css.push_str(";\n");
            }

            css.push_str("}\n\n");
        }

        css
    }

    /// Single-line output without optional whitespace
    pub fn to_css_minified(&self) -> String {
        let mut css = String::new();

        for rule in &self.rules {
            css.push_str(&rule.selector);
            css.push('{');
            let body: Vec<String> = rule
                .properties
                .iter()
                .map(|(key, value)| format!("{}:{}", key, value))
                .collect();
            css.push_str(&body.join(";"));
            css.push('}');
        }

        css
    }
}
