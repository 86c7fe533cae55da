//! Palette defaults: the lowest style layer every element starts from.

use crate::element::ElementKind;
use crate::styles::Styles;

/// Default styles for a component type
pub fn type_defaults(kind: &ElementKind) -> Styles {
    match kind {
        ElementKind::Paragraph => Styles::new()
            .with("fontSize", "16px")
            .with("lineHeight", "1.5")
            .with("margin", "0 0 16px"),
        ElementKind::Heading => Styles::new().with("fontWeight", "bold").with("margin", "0 0 12px"),
        ElementKind::Anchor => Styles::new()
            .with("color", "#3366ff")
            .with("textDecoration", "none")
            .with_hover("textDecoration", "underline"),
        ElementKind::Button | ElementKind::ConnectWalletButton => Styles::new()
            .with("padding", "10px 20px")
            .with("border", "none")
            .with("borderRadius", "6px")
            .with("backgroundColor", "#3366ff")
            .with("color", "#ffffff")
            .with("cursor", "pointer")
            .with_hover("opacity", 0.9),
        ElementKind::Image => Styles::new().with("maxWidth", "100%").with("height", "auto"),
        ElementKind::Video | ElementKind::Iframe => Styles::new().with("width", "100%"),
        ElementKind::Input | ElementKind::Textarea | ElementKind::Select => Styles::new()
            .with("padding", "8px")
            .with("border", "1px solid #cccccc")
            .with("borderRadius", "4px"),
        ElementKind::Form => Styles::new()
            .with("display", "flex")
            .with("flexDirection", "column")
            .with("gap", "12px"),
        ElementKind::Table => Styles::new().with("borderCollapse", "collapse").with("width", "100%"),
        ElementKind::TableCell => Styles::new().with("padding", "8px").with("border", "1px solid #dddddd"),
        ElementKind::Blockquote => Styles::new()
            .with("borderLeft", "4px solid #dddddd")
            .with("paddingLeft", "16px"),
        ElementKind::Pre | ElementKind::Code => Styles::new().with("fontFamily", "monospace"),
        _ => Styles::new(),
    }
}
