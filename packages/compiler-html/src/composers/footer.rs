use super::{css, group, lower_text, singles, Composer, SlotBuckets};
use crate::compiler::{CompileResult, Context};
use sitecraft_compiler_css::StyleRule;
use sitecraft_model::{Element, ElementKind, Slot, Styles};

pub(crate) struct FooterComposer;

fn is_copyright(child: &Element) -> bool {
    let text = lower_text(child);
    text.contains('©') || text.starts_with("copyright")
}

impl Composer for FooterComposer {
    fn tag(&self) -> &'static str {
        "footer"
    }

    fn slots(&self) -> &'static [Slot] {
        &[Slot::Logo, Slot::Description, Slot::Link, Slot::Social, Slot::Copyright]
    }

    fn classify(&self, child: &Element, _slots: &SlotBuckets) -> Option<Slot> {
        match child.kind {
            ElementKind::Image => Some(Slot::Logo),
            ElementKind::Paragraph => Some(Slot::Description),
            ElementKind::Span if is_copyright(child) => Some(Slot::Copyright),
            ElementKind::Span | ElementKind::Anchor => Some(Slot::Link),
            ElementKind::Button | ElementKind::ConnectWalletButton => Some(Slot::Social),
            _ => None,
        }
    }

    fn base_rule(&self) -> StyleRule {
        css(Styles::new()
            .with("display", "flex")
            .with("flexWrap", "wrap")
            .with("justifyContent", "space-between")
            .with("gap", "24px")
            .with("padding", "32px"))
        .with_rule(
            ".footerBrand",
            css(Styles::new()
                .with("display", "flex")
                .with("flexDirection", "column")
                .with("gap", "8px"))
            .with_rule("img", css(Styles::new().with("height", "32px"))),
        )
        .with_rule(
            ".footerLinks",
            css(Styles::new().with("display", "flex").with("gap", "16px")),
        )
        .with_rule(
            ".footerSocial",
            css(Styles::new().with("display", "flex").with("gap", "8px")),
        )
        .with_rule(
            ".footerBottom",
            css(Styles::new()
                .with("width", "100%")
                .with("fontSize", "14px")
                .with("opacity", 0.7)),
        )
    }

    fn variant_rule(&self, layout: Option<&str>) -> StyleRule {
        match layout {
            Some("simple") => css(Styles::new().with("alignItems", "center")),
            Some("detailed") => css(Styles::new()
                .with("alignItems", "flex-start")
                .with("padding", "48px 32px"))
            .with_rule(
                ".footerBottom",
                css(Styles::new()
                    .with("borderTop", "1px solid #333333")
                    .with("paddingTop", "16px")),
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
        if !slots.none_of(&[Slot::Logo, Slot::Description]) {
            ctx.open_group("footerBrand");
            singles(ctx, slots, &[Slot::Logo, Slot::Description])?;
            ctx.close_group();
        }

        group(ctx, "footerLinks", slots.all(Slot::Link))?;
        group(ctx, "footerSocial", slots.all(Slot::Social))?;

        let copyright: Vec<_> = slots.first(Slot::Copyright).into_iter().collect();
        group(ctx, "footerBottom", &copyright)
    }
}
