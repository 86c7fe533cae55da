use sitecraft_model::{StyleMap, Styles};

/// Resolved styles of one element: its own properties, its `:hover` state,
/// and nested rules addressed by selector (`.logoContainer`, `&.open`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRule {
    pub properties: StyleMap,
    pub hover: StyleMap,
    /// Nested rules in emission order
    pub rules: Vec<(String, StyleRule)>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: &Styles) -> Self {
        Self {
            properties: styles.properties.clone(),
            hover: styles.hover.clone(),
            rules: Vec::new(),
        }
    }

    /// Append a nested rule; a selector that is already present is merged
    /// into, keeping its original position
    pub fn with_rule(mut self, selector: impl Into<String>, rule: StyleRule) -> Self {
        self.push_rule(selector, rule);
        self
    }

    pub fn push_rule(&mut self, selector: impl Into<String>, rule: StyleRule) {
        let selector = selector.into();
        match self.rules.iter_mut().find(|(s, _)| *s == selector) {
            Some((_, existing)) => existing.merge(rule),
            None => self.rules.push((selector, rule)),
        }
    }

    /// Layer `other` on top of this rule
    pub fn merge(&mut self, other: StyleRule) {
        self.properties.extend(other.properties);
        self.hover.extend(other.hover);
        for (selector, rule) in other.rules {
            self.push_rule(selector, rule);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
            && self.hover.is_empty()
            && self.rules.iter().all(|(_, r)| r.is_empty())
    }
}

impl From<Styles> for StyleRule {
    fn from(styles: Styles) -> Self {
        Self {
            properties: styles.properties,
            hover: styles.hover,
            rules: Vec::new(),
        }
    }
}

/// Accumulator of `(class name, rule)` pairs gathered during the HTML walk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedStyles {
    entries: Vec<(String, StyleRule)>,
}

impl CollectedStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class_name: impl Into<String>, rule: StyleRule) {
        self.entries.push((class_name.into(), rule));
    }

    pub fn entries(&self) -> &[(String, StyleRule)] {
        &self.entries
    }

    pub fn get(&self, class_name: &str) -> Option<&StyleRule> {
        self.entries
            .iter()
            .find(|(c, _)| c == class_name)
            .map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
