use crate::styles::Styles;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

macro_rules! element_kinds {
    ($($variant:ident => $tag:literal),* $(,)?) => {
        /// Element type tag. Unknown tags are kept verbatim in `Other` so that
        /// persisted documents from newer palettes still load.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum ElementKind {
            $($variant,)*
            Other(String),
        }

        impl ElementKind {
            /// Every known kind, in palette order
            pub const KNOWN: &'static [ElementKind] = &[$(ElementKind::$variant,)*];

            pub fn as_str(&self) -> &str {
                match self {
                    $(ElementKind::$variant => $tag,)*
                    ElementKind::Other(tag) => tag,
                }
            }
        }

        impl From<&str> for ElementKind {
            fn from(tag: &str) -> Self {
                match tag {
                    $($tag => ElementKind::$variant,)*
                    other => ElementKind::Other(other.to_string()),
                }
            }
        }
    };
}

element_kinds! {
    Paragraph => "paragraph",
    Heading => "heading",
    Span => "span",
    Anchor => "anchor",
    Button => "button",
    Image => "image",
    Video => "video",
    Audio => "audio",
    Iframe => "iframe",
    List => "list",
    ListItem => "list-item",
    Table => "table",
    TableRow => "table-row",
    TableCell => "table-cell",
    Form => "form",
    Input => "input",
    Textarea => "textarea",
    Select => "select",
    Label => "label",
    Section => "section",
    Div => "div",
    Container => "container",
    Blockquote => "blockquote",
    Code => "code",
    Pre => "pre",
    Hr => "hr",
    LineBreak => "line-break",
    Progress => "progress",
    Meter => "meter",
    Navbar => "navbar",
    Hero => "hero",
    Footer => "footer",
    Cta => "cta",
    MintingSection => "mintingSection",
    ConnectWalletButton => "connectWalletButton",
}

impl ElementKind {
    /// Kinds rendered by a dedicated composer instead of the generic path
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            ElementKind::Navbar
                | ElementKind::Hero
                | ElementKind::Footer
                | ElementKind::Cta
                | ElementKind::MintingSection
        )
    }

    pub fn is_media(&self) -> bool {
        matches!(
            self,
            ElementKind::Image | ElementKind::Video | ElementKind::Audio | ElementKind::Iframe
        )
    }

    pub fn is_button(&self) -> bool {
        matches!(self, ElementKind::Button | ElementKind::ConnectWalletButton)
    }
}

impl From<String> for ElementKind {
    fn from(tag: String) -> Self {
        ElementKind::from(tag.as_str())
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic position of a child inside a composite element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Logo,
    Link,
    Button,
    Title,
    Subtitle,
    Description,
    Image,
    Copyright,
    Social,
    Timer,
    Price,
    Quantity,
    MintButton,
    WalletButton,
    RareItem,
}

/// Structural metadata (layout variant, list type, form field descriptor).
///
/// Stored as a JSON object so editors can set arbitrary keys through
/// `update_configuration`; the accessors cover the keys the compiler reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Layout variant of a composite (`twoColumn`, `heroOne`, `simple`, ...)
    pub fn layout(&self) -> Option<&str> {
        self.get_str("layout")
    }

    /// `ordered` or `unordered`
    pub fn list_type(&self) -> Option<&str> {
        self.get_str("listType")
    }

    pub fn input_type(&self) -> Option<&str> {
        self.get_str("inputType")
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.get_str("placeholder")
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    pub fn required(&self) -> bool {
        self.get_bool("required").unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Click behavior attached to buttons and links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(rename = "pageSection")]
    PageSection,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "Dropdown")]
    Dropdown,
    #[serde(rename = "link")]
    Link,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownLink {
    pub label: String,
    pub href: String,
}

/// Behavioral metadata. Every field is optional so that the same type can be
/// used as a partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Link href, section id or file URL depending on `action_type`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_in_new_tab: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ActionType>,

    /// For `file` actions: download instead of opening
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropdown_links: Option<Vec<DropdownLink>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallets: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Settings {
    /// Overwrite the fields that are set in `partial`
    pub fn merge(&mut self, partial: Settings) {
        let Settings {
            target_value,
            open_in_new_tab,
            action_type,
            download,
            dropdown_links,
            wallets,
            value,
            max,
        } = partial;

        if target_value.is_some() {
            self.target_value = target_value;
        }
        if open_in_new_tab.is_some() {
            self.open_in_new_tab = open_in_new_tab;
        }
        if action_type.is_some() {
            self.action_type = action_type;
        }
        if download.is_some() {
            self.download = download;
        }
        if dropdown_links.is_some() {
            self.dropdown_links = dropdown_links;
        }
        if wallets.is_some() {
            self.wallets = wallets;
        }
        if value.is_some() {
            self.value = value;
        }
        if max.is_some() {
            self.max = max;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Accessibility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i32>,

    /// Alternative text for images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Accessibility {
    pub fn merge(&mut self, partial: Accessibility) {
        if partial.role.is_some() {
            self.role = partial.role;
        }
        if partial.aria_label.is_some() {
            self.aria_label = partial.aria_label;
        }
        if partial.tab_index.is_some() {
            self.tab_index = partial.tab_index;
        }
        if partial.alt.is_some() {
            self.alt = partial.alt;
        }
    }
}

/// A single node of the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ElementKind,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub styles: Styles,

    #[serde(default)]
    pub configuration: Option<Configuration>,

    #[serde(default)]
    pub settings: Option<Settings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,

    #[serde(default)]
    pub children: Vec<String>,

    #[serde(default)]
    pub parent_id: Option<String>,

    /// Heading rank 1-6
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    /// Template this element was created from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<Slot>,
}

impl Element {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content: None,
            styles: Styles::default(),
            configuration: None,
            settings: None,
            accessibility: None,
            children: Vec::new(),
            parent_id: None,
            level: None,
            structure: None,
            slot: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Text content, treating `None` and the empty string alike
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    /// Layout variant: explicit `configuration.layout`, else the template name
    pub fn layout(&self) -> Option<&str> {
        self.configuration
            .as_ref()
            .and_then(Configuration::layout)
            .or(self.structure.as_deref())
    }
}
