use super::{css, group, singles, Composer, SlotBuckets};
use crate::compiler::{CompileResult, Context};
use sitecraft_compiler_css::StyleRule;
use sitecraft_model::{Element, ElementKind, Slot, Styles};

pub(crate) struct HeroComposer;

impl HeroComposer {
    fn render_content(&self, slots: &SlotBuckets, ctx: &mut Context) -> CompileResult<()> {
        if slots.none_of(&[Slot::Title, Slot::Subtitle, Slot::Button]) {
            return Ok(());
        }

        ctx.open_group("heroContent");
        singles(ctx, slots, &[Slot::Title, Slot::Subtitle])?;
        group(ctx, "buttonContainer", slots.all(Slot::Button))?;
        ctx.close_group();
        Ok(())
    }

    fn render_image(&self, slots: &SlotBuckets, ctx: &mut Context) -> CompileResult<()> {
        let image: Vec<_> = slots.first(Slot::Image).into_iter().collect();
        group(ctx, "heroImage", &image)
    }
}

impl Composer for HeroComposer {
    fn tag(&self) -> &'static str {
        "section"
    }

    fn slots(&self) -> &'static [Slot] {
        &[Slot::Title, Slot::Subtitle, Slot::Button, Slot::Image]
    }

    fn classify(&self, child: &Element, _slots: &SlotBuckets) -> Option<Slot> {
        match child.kind {
            ElementKind::Image => Some(Slot::Image),
            ElementKind::Heading => Some(Slot::Title),
            ElementKind::Paragraph | ElementKind::Span => Some(Slot::Subtitle),
            ElementKind::Button | ElementKind::ConnectWalletButton | ElementKind::Anchor => {
                Some(Slot::Button)
            }
            _ => None,
        }
    }

    fn base_rule(&self) -> StyleRule {
        css(Styles::new()
            .with("display", "flex")
            .with("alignItems", "center")
            .with("gap", "48px")
            .with("padding", "80px 32px"))
        .with_rule(
            ".heroContent",
            css(Styles::new()
                .with("flex", 1)
                .with("display", "flex")
                .with("flexDirection", "column")
                .with("gap", "16px")),
        )
        .with_rule(
            ".heroImage",
            css(Styles::new().with("flex", 1)).with_rule(
                "img",
                css(Styles::new().with("width", "100%").with("borderRadius", "12px")),
            ),
        )
        .with_rule(
            ".buttonContainer",
            css(Styles::new().with("display", "flex").with("gap", "12px")),
        )
    }

    fn variant_rule(&self, layout: Option<&str>) -> StyleRule {
        match layout {
            Some("heroTwo") => css(Styles::new().with("flexDirection", "row")),
            Some("heroThree") => css(Styles::new()
                .with("flexDirection", "column")
                .with("textAlign", "center"))
            .with_rule(".heroContent", css(Styles::new().with("alignItems", "center")))
            .with_rule(
                ".buttonContainer",
                css(Styles::new().with("justifyContent", "center")),
            ),
            _ => StyleRule::new(),
        }
    }

    fn render(
        &self,
        slots: &SlotBuckets,
        layout: Option<&str>,
        ctx: &mut Context,
    ) -> CompileResult<()> {
        if layout == Some("heroTwo") {
            self.render_image(slots, ctx)?;
            self.render_content(slots, ctx)
        } else {
            self.render_content(slots, ctx)?;
            self.render_image(slots, ctx)
        }
    }
}
