use super::{css, group, Composer, SlotBuckets};
use crate::compiler::{CompileResult, Context};
use sitecraft_compiler_css::StyleRule;
use sitecraft_editor::HierarchyNode;
use sitecraft_model::{Element, ElementKind, Slot, Styles};

/// `<nav>` with logo, links and buttons.
///
/// `twoColumn` puts links and buttons together on the right; every other
/// layout gets a separate centered links container.
pub(crate) struct NavbarComposer;

impl Composer for NavbarComposer {
    fn tag(&self) -> &'static str {
        "nav"
    }

    fn slots(&self) -> &'static [Slot] {
        &[Slot::Logo, Slot::Link, Slot::Button]
    }

    fn classify(&self, child: &Element, _slots: &SlotBuckets) -> Option<Slot> {
        match child.kind {
            ElementKind::Image => Some(Slot::Logo),
            ElementKind::Span | ElementKind::Anchor => Some(Slot::Link),
            ElementKind::Button | ElementKind::ConnectWalletButton => Some(Slot::Button),
            _ => None,
        }
    }

    fn base_rule(&self) -> StyleRule {
        css(Styles::new()
            .with("display", "flex")
            .with("alignItems", "center")
            .with("justifyContent", "space-between")
            .with("padding", "16px 32px")
            .with("gap", "24px"))
        .with_rule(
            ".logoContainer",
            css(Styles::new().with("display", "flex").with("alignItems", "center"))
                .with_rule("img", css(Styles::new().with("height", "40px"))),
        )
        .with_rule(
            ".linksContainer",
            css(Styles::new()
                .with("display", "flex")
                .with("alignItems", "center")
                .with("gap", "24px")),
        )
        .with_rule(
            ".buttonContainer",
            css(Styles::new()
                .with("display", "flex")
                .with("alignItems", "center")
                .with("gap", "12px")),
        )
    }

    fn variant_rule(&self, layout: Option<&str>) -> StyleRule {
        match layout {
            Some("twoColumn") => StyleRule::new().with_rule(
                ".buttonContainer",
                css(Styles::new().with("gap", "20px"))
                    .with_rule("span", css(Styles::new().with("cursor", "pointer"))),
            ),
            Some("threeColumn") => StyleRule::new().with_rule(
                ".linksContainer",
                css(Styles::new().with("flex", 1).with("justifyContent", "center")),
            ),
            Some("customTemplate") => css(Styles::new()
                .with("borderRadius", "12px")
                .with("margin", "16px"))
            .with_rule(".linksContainer", css(Styles::new().with("gap", "32px"))),
            _ => StyleRule::new(),
        }
    }

    fn render(
        &self,
        slots: &SlotBuckets,
        layout: Option<&str>,
        ctx: &mut Context,
    ) -> CompileResult<()> {
        let logo: Vec<&HierarchyNode> = slots.first(Slot::Logo).into_iter().collect();
        group(ctx, "logoContainer", &logo)?;

        if layout == Some("twoColumn") {
            let right: Vec<&HierarchyNode> = slots
                .all(Slot::Link)
                .iter()
                .chain(slots.all(Slot::Button))
                .copied()
                .collect();
            group(ctx, "buttonContainer", &right)
        } else {
            group(ctx, "linksContainer", slots.all(Slot::Link))?;
            group(ctx, "buttonContainer", slots.all(Slot::Button))
        }
    }
}
