use sitecraft_model::{Element, ElementKind};

/// HTML tag for a generic element, `None` when the type has no mapping.
/// Composite types are rendered by composers and never reach here.
pub(crate) fn tag_for(element: &Element) -> Option<String> {
    let tag = match &element.kind {
        ElementKind::Paragraph => "p",
        ElementKind::Heading => return Some(format!("h{}", heading_level(element))),
        ElementKind::Anchor => "a",
        ElementKind::Image => "img",
        ElementKind::List => {
            if element
                .configuration
                .as_ref()
                .and_then(|c| c.list_type())
                == Some("ordered")
            {
                "ol"
            } else {
                "ul"
            }
        }
        ElementKind::ListItem => "li",
        ElementKind::TableRow => "tr",
        ElementKind::TableCell => "td",
        ElementKind::LineBreak => "br",
        ElementKind::Container => "div",
        ElementKind::ConnectWalletButton => "button",
        ElementKind::Span
        | ElementKind::Button
        | ElementKind::Video
        | ElementKind::Audio
        | ElementKind::Iframe
        | ElementKind::Table
        | ElementKind::Form
        | ElementKind::Input
        | ElementKind::Textarea
        | ElementKind::Select
        | ElementKind::Label
        | ElementKind::Section
        | ElementKind::Div
        | ElementKind::Blockquote
        | ElementKind::Code
        | ElementKind::Pre
        | ElementKind::Hr
        | ElementKind::Progress
        | ElementKind::Meter => element.kind.as_str(),
        ElementKind::Navbar
        | ElementKind::Hero
        | ElementKind::Footer
        | ElementKind::Cta
        | ElementKind::MintingSection
        | ElementKind::Other(_) => return None,
    };

    Some(tag.to_string())
}

fn heading_level(element: &Element) -> u8 {
    element.level.unwrap_or(1).clamp(1, 6)
}
