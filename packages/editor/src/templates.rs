//! # Structure Templates
//!
//! Named sets of child descriptors materialized when a container element is
//! created with a structure name. The catalog is data only; the store never
//! needs to know about individual templates.

use sitecraft_model::{Configuration, ElementKind, Settings, Slot, Styles};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Descriptor of one child created by a template
#[derive(Debug, Clone, PartialEq)]
pub struct ChildTemplate {
    pub kind: ElementKind,
    pub content: Option<String>,
    pub styles: Styles,
    pub level: Option<u8>,
    pub slot: Option<Slot>,
    pub configuration: Option<Configuration>,
    pub settings: Option<Settings>,
}

impl ChildTemplate {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            content: None,
            styles: Styles::default(),
            level: None,
            slot: None,
            configuration: None,
            settings: None,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// A named structure: container kind, container styles, ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct StructureTemplate {
    pub name: String,
    pub container: ElementKind,
    pub styles: Styles,
    pub children: Vec<ChildTemplate>,
}

impl StructureTemplate {
    pub fn new(name: impl Into<String>, container: ElementKind) -> Self {
        Self {
            name: name.into(),
            container,
            styles: Styles::default(),
            children: Vec::new(),
        }
    }

    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn child(mut self, child: ChildTemplate) -> Self {
        self.children.push(child);
        self
    }
}

/// Registry of structure templates keyed by name
#[derive(Debug, Clone, Default)]
pub struct StructureRegistry {
    templates: HashMap<String, StructureTemplate>,
}

impl StructureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared registry with the built-in catalog
    pub fn builtin() -> &'static StructureRegistry {
        static REGISTRY: OnceLock<StructureRegistry> = OnceLock::new();
        REGISTRY.get_or_init(builtin_registry)
    }

    /// Register a template, replacing any previous one with the same name
    pub fn register(&mut self, template: StructureTemplate) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, name: &str) -> Option<&StructureTemplate> {
        self.templates.get(name)
    }

    /// Child descriptors for a structure; empty for unknown names
    pub fn resolve(&self, name: &str) -> &[ChildTemplate] {
        self.templates
            .get(name)
            .map(|t| t.children.as_slice())
            .unwrap_or(&[])
    }

    /// Template names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn templates(&self) -> impl Iterator<Item = &StructureTemplate> {
        self.templates.values()
    }
}

fn text(kind: ElementKind, content: &str) -> ChildTemplate {
    ChildTemplate::new(kind).content(content)
}

fn field(input_type: &str, name: &str, placeholder: &str) -> ChildTemplate {
    ChildTemplate::new(ElementKind::Input).configuration(
        Configuration::new()
            .with("inputType", input_type)
            .with("name", name)
            .with("placeholder", placeholder),
    )
}

fn logo() -> ChildTemplate {
    text(ElementKind::Image, "/assets/logo.png")
        .slot(Slot::Logo)
        .styles(Styles::new().with("height", "40px"))
}

fn nav_link(label: &str) -> ChildTemplate {
    text(ElementKind::Span, label).slot(Slot::Link)
}

fn builtin_registry() -> StructureRegistry {
    let mut registry = StructureRegistry::new();

    // Forms
    registry.register(
        StructureTemplate::new("basic", ElementKind::Form)
            .child(field("text", "name", "Your name"))
            .child(field("email", "email", "Your email")),
    );
    registry.register(
        StructureTemplate::new("contact", ElementKind::Form)
            .styles(Styles::new().with("maxWidth", "480px"))
            .child(field("text", "name", "Your name"))
            .child(field("email", "email", "Your email"))
            .child(
                ChildTemplate::new(ElementKind::Textarea).configuration(
                    Configuration::new()
                        .with("name", "message")
                        .with("placeholder", "Message"),
                ),
            )
            .child(text(ElementKind::Button, "Send")),
    );

    // Navigation bars
    registry.register(
        StructureTemplate::new("twoColumn", ElementKind::Navbar)
            .child(logo())
            .child(nav_link("Home"))
            .child(nav_link("About"))
            .child(text(ElementKind::Button, "Get Started").slot(Slot::Button)),
    );
    registry.register(
        StructureTemplate::new("threeColumn", ElementKind::Navbar)
            .child(logo())
            .child(nav_link("Home"))
            .child(nav_link("Collection"))
            .child(nav_link("Roadmap"))
            .child(text(ElementKind::Button, "Join").slot(Slot::Button))
            .child(text(ElementKind::ConnectWalletButton, "Connect Wallet").slot(Slot::Button)),
    );
    registry.register(
        StructureTemplate::new("customTemplate", ElementKind::Navbar)
            .styles(Styles::new().with("backgroundColor", "#111111").with("color", "#ffffff"))
            .child(logo())
            .child(nav_link("Features"))
            .child(nav_link("Pricing"))
            .child(text(ElementKind::Button, "Sign Up").slot(Slot::Button)),
    );

    // Heroes
    for name in ["heroOne", "heroTwo", "heroThree"] {
        registry.register(
            StructureTemplate::new(name, ElementKind::Hero)
                .child(text(ElementKind::Image, "/assets/hero.png").slot(Slot::Image))
                .child(
                    text(ElementKind::Heading, "Build something great")
                        .level(1)
                        .slot(Slot::Title),
                )
                .child(
                    text(ElementKind::Span, "Launch your page in minutes").slot(Slot::Subtitle),
                )
                .child(text(ElementKind::Button, "Get Started").slot(Slot::Button))
                .child(text(ElementKind::Button, "Learn More").slot(Slot::Button)),
        );
    }

    // Footers
    registry.register(
        StructureTemplate::new("simple", ElementKind::Footer)
            .child(logo())
            .child(nav_link("Privacy"))
            .child(nav_link("Terms"))
            .child(text(ElementKind::Span, "© 2024 Company").slot(Slot::Copyright)),
    );
    registry.register(
        StructureTemplate::new("detailed", ElementKind::Footer)
            .child(logo())
            .child(
                text(ElementKind::Paragraph, "Tools for independent creators.")
                    .slot(Slot::Description),
            )
            .child(nav_link("Docs"))
            .child(nav_link("Blog"))
            .child(nav_link("Careers"))
            .child(text(ElementKind::Button, "Twitter").slot(Slot::Social))
            .child(text(ElementKind::Button, "Discord").slot(Slot::Social))
            .child(text(ElementKind::Span, "© 2024 Company").slot(Slot::Copyright)),
    );

    // Calls to action
    registry.register(
        StructureTemplate::new("ctaOne", ElementKind::Cta)
            .child(
                text(ElementKind::Heading, "Ready to start?")
                    .level(2)
                    .slot(Slot::Title),
            )
            .child(
                text(ElementKind::Paragraph, "Join thousands of builders today.")
                    .slot(Slot::Description),
            )
            .child(text(ElementKind::Button, "Sign Up").slot(Slot::Button)),
    );
    registry.register(
        StructureTemplate::new("ctaTwo", ElementKind::Cta)
            .child(
                text(ElementKind::Heading, "Ready to start?")
                    .level(2)
                    .slot(Slot::Title),
            )
            .child(
                text(ElementKind::Paragraph, "Join thousands of builders today.")
                    .slot(Slot::Description),
            )
            .child(text(ElementKind::Button, "Sign Up").slot(Slot::Button))
            .child(text(ElementKind::Button, "Contact Sales").slot(Slot::Button))
            .child(text(ElementKind::Image, "/assets/cta.png").slot(Slot::Image)),
    );

    // Minting
    let mut minting = StructureTemplate::new("mintingSection", ElementKind::MintingSection)
        .child(text(ElementKind::Heading, "Mint Your NFT").level(2).slot(Slot::Title))
        .child(
            text(ElementKind::Paragraph, "Limited collection of 10,000 unique items.")
                .slot(Slot::Description),
        )
        .child(text(ElementKind::Image, "/assets/nft.png").slot(Slot::Image))
        .child(text(ElementKind::Span, "Ends in 02:14:30").slot(Slot::Timer))
        .child(text(ElementKind::Span, "Price: 0.5 SOL").slot(Slot::Price))
        .child(
            ChildTemplate::new(ElementKind::Input)
                .slot(Slot::Quantity)
                .configuration(
                    Configuration::new()
                        .with("inputType", "number")
                        .with("name", "quantity")
                        .with("placeholder", "1"),
                ),
        )
        .child(text(ElementKind::Button, "Mint Now").slot(Slot::MintButton))
        .child(
            text(ElementKind::ConnectWalletButton, "Connect Wallet")
                .slot(Slot::WalletButton)
                .settings(Settings {
                    wallets: Some(vec!["phantom".to_string(), "solflare".to_string()]),
                    ..Default::default()
                }),
        );
    for index in 1..=3 {
        minting = minting.child(
            text(ElementKind::Image, &format!("/assets/rare-{}.png", index)).slot(Slot::RareItem),
        );
    }
    registry.register(minting);

    registry
}
