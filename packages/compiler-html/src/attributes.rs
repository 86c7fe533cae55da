use crate::compiler::escape_attr;
use sitecraft_model::{ActionType, DropdownLink, Element, ElementKind, Settings};
use std::fmt;

/// Ordered attribute list rendered as ` name="value"` pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Attributes {
    entries: Vec<(String, Option<String>)>,
}

impl Attributes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, name: &str, value: impl Into<String>) {
        self.entries.push((name.to_string(), Some(value.into())));
    }

    /// Boolean attribute without a value
    pub(crate) fn flag(&mut self, name: &str) {
        self.entries.push((name.to_string(), None));
    }

    /// `id`, `class` and accessibility attributes shared by every element
    pub(crate) fn base(element: &Element, class_name: &str) -> Self {
        let mut attrs = Self::new();
        attrs.set("id", element.id.as_str());
        attrs.set("class", class_name);

        if let Some(a11y) = &element.accessibility {
            if let Some(role) = &a11y.role {
                attrs.set("role", role.as_str());
            }
            if let Some(label) = &a11y.aria_label {
                attrs.set("aria-label", label.as_str());
            }
            if let Some(tab_index) = a11y.tab_index {
                attrs.set("tabindex", tab_index.to_string());
            }
        }

        attrs
    }

    pub(crate) fn for_element(element: &Element, class_name: &str) -> Self {
        let mut attrs = Self::base(element, class_name);
        let settings = element.settings.as_ref();
        let configuration = element.configuration.as_ref();

        match element.kind {
            ElementKind::Anchor => {
                let href = settings
                    .and_then(|s| s.target_value.as_deref())
                    .unwrap_or("#");
                attrs.set("href", href);
                if settings.and_then(|s| s.open_in_new_tab) == Some(true) {
                    attrs.set("target", "_blank");
                    attrs.set("rel", "noopener noreferrer");
                }
            }
            ElementKind::Image => {
                attrs.set("src", element.text().unwrap_or_default());
                let alt = element
                    .accessibility
                    .as_ref()
                    .and_then(|a| a.alt.as_deref())
                    .unwrap_or_default();
                attrs.set("alt", alt);
            }
            ElementKind::Video | ElementKind::Audio => {
                attrs.set("src", element.text().unwrap_or_default());
                attrs.flag("controls");
            }
            ElementKind::Iframe => {
                attrs.set("src", element.text().unwrap_or_default());
            }
            ElementKind::Progress | ElementKind::Meter => {
                let value = settings
                    .and_then(|s| s.value)
                    .or_else(|| configuration.and_then(|c| c.get_f64("value")));
                let max = settings
                    .and_then(|s| s.max)
                    .or_else(|| configuration.and_then(|c| c.get_f64("max")));
                if let Some(value) = value {
                    attrs.set("value", value.to_string());
                }
                if let Some(max) = max {
                    attrs.set("max", max.to_string());
                }
            }
            ElementKind::Input => {
                let input_type = configuration.and_then(|c| c.input_type()).unwrap_or("text");
                attrs.set("type", input_type);
                if let Some(placeholder) = configuration.and_then(|c| c.placeholder()) {
                    attrs.set("placeholder", placeholder);
                }
                if let Some(name) = configuration.and_then(|c| c.name()) {
                    attrs.set("name", name);
                }
                if let Some(value) = element.text() {
                    attrs.set("value", value);
                }
                if configuration.map(|c| c.required()).unwrap_or(false) {
                    attrs.flag("required");
                }
            }
            ElementKind::Textarea | ElementKind::Select => {
                if let Some(name) = configuration.and_then(|c| c.name()) {
                    attrs.set("name", name);
                }
                if let Some(placeholder) = configuration.and_then(|c| c.placeholder()) {
                    attrs.set("placeholder", placeholder);
                }
                if configuration.map(|c| c.required()).unwrap_or(false) {
                    attrs.flag("required");
                }
            }
            ElementKind::ConnectWalletButton => {
                attrs.set("type", "button");
                if let Some(wallets) = settings.and_then(|s| s.wallets.as_ref()) {
                    attrs.set("data-wallets", wallets.join(","));
                }
            }
            _ => {}
        }

        if let Some(script) = settings.and_then(|s| click_script(element, s)) {
            attrs.set("onclick", script);
        }

        attrs
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            match value {
                Some(value) => write!(f, " {}=\"{}\"", name, escape_attr(value))?,
                None => write!(f, " {}", name)?,
            }
        }
        Ok(())
    }
}

/// Inline handler for the element's click action
fn click_script(element: &Element, settings: &Settings) -> Option<String> {
    let target = settings.target_value.as_deref().map(escape_js);

    match settings.action_type? {
        ActionType::PageSection => Some(format!(
            "document.getElementById('{}').scrollIntoView({{ behavior: 'smooth' }})",
            target?
        )),
        ActionType::File if settings.download == Some(true) => Some(format!(
            "var a = document.createElement('a'); a.href = '{}'; a.download = ''; a.click();",
            target?
        )),
        ActionType::File => Some(format!("window.open('{}', '_blank')", target?)),
        ActionType::Dropdown => Some(format!(
            "var m = document.getElementById('{}'); m.style.display = m.style.display === 'none' ? 'block' : 'none';",
            escape_js(&dropdown_id(element))
        )),
        // anchors navigate through href
        ActionType::Link if element.kind == ElementKind::Anchor => None,
        ActionType::Link if settings.open_in_new_tab == Some(true) => {
            Some(format!("window.open('{}', '_blank')", target?))
        }
        ActionType::Link => Some(format!("window.location.href = '{}'", target?)),
    }
}

/// Escape a value for a single-quoted JavaScript string
fn escape_js(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn dropdown_id(element: &Element) -> String {
    format!("dropdown-{}", element.id)
}

/// Hidden menu emitted right after an element whose action is `Dropdown`
pub(crate) struct DropdownMenu<'a> {
    pub(crate) id: String,
    pub(crate) links: &'a [DropdownLink],
}

impl DropdownMenu<'_> {
    pub(crate) fn open_tag(&self) -> String {
        format!(
            "<div id=\"{}\" class=\"dropdown-menu\" style=\"display:none\">",
            escape_attr(&self.id)
        )
    }
}

pub(crate) fn dropdown_menu(element: &Element) -> Option<DropdownMenu<'_>> {
    let settings = element.settings.as_ref()?;
    if settings.action_type != Some(ActionType::Dropdown) {
        return None;
    }

    Some(DropdownMenu {
        id: dropdown_id(element),
        links: settings.dropdown_links.as_deref().unwrap_or_default(),
    })
}
