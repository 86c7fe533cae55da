use super::{css, group, singles, Composer, SlotBuckets};
use crate::compiler::{CompileResult, Context};
use sitecraft_compiler_css::StyleRule;
use sitecraft_model::{Element, ElementKind, Slot, Styles};

pub(crate) struct CtaComposer;

impl Composer for CtaComposer {
    fn tag(&self) -> &'static str {
        "section"
    }

    fn slots(&self) -> &'static [Slot] {
        &[Slot::Title, Slot::Description, Slot::Button, Slot::Image]
    }

    fn classify(&self, child: &Element, _slots: &SlotBuckets) -> Option<Slot> {
        match child.kind {
            ElementKind::Heading => Some(Slot::Title),
            ElementKind::Paragraph | ElementKind::Span => Some(Slot::Description),
            ElementKind::Image => Some(Slot::Image),
            ElementKind::Button | ElementKind::ConnectWalletButton | ElementKind::Anchor => {
                Some(Slot::Button)
            }
            _ => None,
        }
    }

    fn base_rule(&self) -> StyleRule {
        css(Styles::new()
            .with("display", "flex")
            .with("gap", "32px")
            .with("padding", "64px 32px"))
        .with_rule(
            ".ctaContent",
            css(Styles::new()
                .with("display", "flex")
                .with("flexDirection", "column")
                .with("gap", "16px")),
        )
        .with_rule(
            ".buttonContainer",
            css(Styles::new().with("display", "flex").with("gap", "12px")),
        )
    }

    fn variant_rule(&self, layout: Option<&str>) -> StyleRule {
        match layout {
            Some("ctaOne") => css(Styles::new()
                .with("flexDirection", "column")
                .with("alignItems", "center")
                .with("textAlign", "center"))
            .with_rule(
                ".buttonContainer",
                css(Styles::new().with("justifyContent", "center")),
            ),
            Some("ctaTwo") => css(Styles::new()
                .with("flexDirection", "row")
                .with("alignItems", "center")
                .with("justifyContent", "space-between"))
            .with_rule(
                ".ctaImage",
                StyleRule::new().with_rule("img", css(Styles::new().with("maxWidth", "320px"))),
            ),
            _ => StyleRule::new(),
        }
    }

    fn render(
        &self,
        slots: &SlotBuckets,
        _layout: Option<&str>,
        ctx: &mut Context,
    ) -> CompileResult<()> {
        if !slots.none_of(&[Slot::Title, Slot::Description, Slot::Button]) {
            ctx.open_group("ctaContent");
            singles(ctx, slots, &[Slot::Title, Slot::Description])?;
            group(ctx, "buttonContainer", slots.all(Slot::Button))?;
            ctx.close_group();
        }

        let image: Vec<_> = slots.first(Slot::Image).into_iter().collect();
        group(ctx, "ctaImage", &image)
    }
}
