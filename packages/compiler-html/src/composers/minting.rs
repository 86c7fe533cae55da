use super::{css, group, lower_text, singles, Composer, SlotBuckets};
use crate::compiler::{CompileResult, Context};
use sitecraft_compiler_css::StyleRule;
use sitecraft_model::{Element, ElementKind, Slot, Styles};

/// NFT minting block: header, artwork with mint controls, rare item strip.
///
/// The first image is the artwork; further images are rare items. Spans are
/// told apart by content (price vs countdown).
pub(crate) struct MintingComposer;

fn is_price(text: &str) -> bool {
    text.contains("price")
        || text
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|word| matches!(word, "sol" | "eth"))
}

fn is_timer(text: &str) -> bool {
    if text.contains("ends") || text.contains("remaining") {
        return true;
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0].is_ascii_digit() && w[1] == ':' && w[2].is_ascii_digit())
}

impl Composer for MintingComposer {
    fn tag(&self) -> &'static str {
        "section"
    }

    fn slots(&self) -> &'static [Slot] {
        &[
            Slot::Title,
            Slot::Description,
            Slot::Image,
            Slot::Timer,
            Slot::Price,
            Slot::Quantity,
            Slot::MintButton,
            Slot::WalletButton,
            Slot::RareItem,
        ]
    }

    fn classify(&self, child: &Element, slots: &SlotBuckets) -> Option<Slot> {
        match child.kind {
            ElementKind::Heading => Some(Slot::Title),
            ElementKind::Paragraph => Some(Slot::Description),
            ElementKind::Image if slots.has(Slot::Image) => Some(Slot::RareItem),
            ElementKind::Image => Some(Slot::Image),
            ElementKind::Span => {
                let text = lower_text(child);
                if is_price(&text) {
                    Some(Slot::Price)
                } else if is_timer(&text) {
                    Some(Slot::Timer)
                } else {
                    None
                }
            }
            ElementKind::Input => Some(Slot::Quantity),
            ElementKind::Button => Some(Slot::MintButton),
            ElementKind::ConnectWalletButton => Some(Slot::WalletButton),
            _ => None,
        }
    }

    fn base_rule(&self) -> StyleRule {
        css(Styles::new()
            .with("display", "flex")
            .with("flexDirection", "column")
            .with("gap", "32px")
            .with("padding", "64px 32px"))
        .with_rule(
            ".mintingHeader",
            css(Styles::new().with("textAlign", "center")),
        )
        .with_rule(
            ".mintingBody",
            css(Styles::new()
                .with("display", "flex")
                .with("gap", "32px")
                .with("alignItems", "center")),
        )
        .with_rule(
            ".mintImage",
            css(Styles::new().with("flex", 1)).with_rule(
                "img",
                css(Styles::new().with("width", "100%").with("borderRadius", "16px")),
            ),
        )
        .with_rule(
            ".mintDetails",
            css(Styles::new()
                .with("flex", 1)
                .with("display", "flex")
                .with("flexDirection", "column")
                .with("gap", "16px")),
        )
        .with_rule(
            ".mintTimer",
            css(Styles::new()
                .with("fontFamily", "monospace")
                .with("fontSize", "20px")),
        )
        .with_rule(
            ".mintPrice",
            css(Styles::new().with("fontWeight", 600).with("fontSize", "18px")),
        )
        .with_rule(
            ".mintControls",
            css(Styles::new()
                .with("display", "flex")
                .with("alignItems", "center")
                .with("gap", "12px"))
            .with_rule("input", css(Styles::new().with("width", "80px"))),
        )
        .with_rule(
            ".rareItems",
            css(Styles::new()
                .with("display", "grid")
                .with("gridTemplateColumns", "repeat(auto-fill, minmax(120px, 1fr))")
                .with("gap", "16px"))
            .with_rule("img", css(Styles::new().with("width", "100%").with("borderRadius", "8px"))),
        )
    }

    fn variant_rule(&self, _layout: Option<&str>) -> StyleRule {
        StyleRule::new()
    }

    fn render(
        &self,
        slots: &SlotBuckets,
        _layout: Option<&str>,
        ctx: &mut Context,
    ) -> CompileResult<()> {
        if !slots.none_of(&[Slot::Title, Slot::Description]) {
            ctx.open_group("mintingHeader");
            singles(ctx, slots, &[Slot::Title, Slot::Description])?;
            ctx.close_group();
        }

        let details = [
            Slot::Timer,
            Slot::Price,
            Slot::Quantity,
            Slot::MintButton,
            Slot::WalletButton,
        ];
        if !slots.none_of(&details) || slots.has(Slot::Image) {
            ctx.open_group("mintingBody");

            let image: Vec<_> = slots.first(Slot::Image).into_iter().collect();
            group(ctx, "mintImage", &image)?;

            if !slots.none_of(&details) {
                ctx.open_group("mintDetails");
                let timer: Vec<_> = slots.first(Slot::Timer).into_iter().collect();
                group(ctx, "mintTimer", &timer)?;
                let price: Vec<_> = slots.first(Slot::Price).into_iter().collect();
                group(ctx, "mintPrice", &price)?;

                if !slots.none_of(&[Slot::Quantity, Slot::MintButton, Slot::WalletButton]) {
                    ctx.open_group("mintControls");
                    singles(
                        ctx,
                        slots,
                        &[Slot::Quantity, Slot::MintButton, Slot::WalletButton],
                    )?;
                    ctx.close_group();
                }
                ctx.close_group();
            }

            ctx.close_group();
        }

        group(ctx, "rareItems", slots.all(Slot::RareItem))
    }
}
