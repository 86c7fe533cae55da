//! Composite renderers.
//!
//! A composite keeps its semantic children as a flat, unordered list. The
//! composer sorts them into slots (an explicit `Element::slot` it renders
//! first, a type/content heuristic otherwise) and emits the slots in a fixed
//! order, wrapped in named containers that its nested style rules address.

mod cta;
mod footer;
mod hero;
mod minting;
mod navbar;

use crate::attributes::Attributes;
use crate::compiler::{render_node, CompileResult, Context};
use sitecraft_compiler_css::{class_name_for, StyleRule};
use sitecraft_editor::HierarchyNode;
use sitecraft_model::{Element, ElementKind, Slot, Styles};
use tracing::debug;

pub(crate) trait Composer {
    /// Wrapper tag of the composite
    fn tag(&self) -> &'static str;

    /// Slots this composite renders
    fn slots(&self) -> &'static [Slot];

    fn accepts(&self, slot: Slot) -> bool {
        self.slots().contains(&slot)
    }

    /// Heuristic slot of a child without an explicit one
    fn classify(&self, child: &Element, slots: &SlotBuckets) -> Option<Slot>;

    /// Defaults shared by every layout variant
    fn base_rule(&self) -> StyleRule;

    fn variant_rule(&self, layout: Option<&str>) -> StyleRule;

    /// Emit slot contents in fixed order
    fn render(
        &self,
        slots: &SlotBuckets,
        layout: Option<&str>,
        ctx: &mut Context,
    ) -> CompileResult<()>;
}

fn composer_for(kind: &ElementKind) -> Option<&'static dyn Composer> {
    let composer: &'static dyn Composer = match kind {
        ElementKind::Navbar => &navbar::NavbarComposer,
        ElementKind::Hero => &hero::HeroComposer,
        ElementKind::Footer => &footer::FooterComposer,
        ElementKind::Cta => &cta::CtaComposer,
        ElementKind::MintingSection => &minting::MintingComposer,
        _ => return None,
    };
    Some(composer)
}

/// Slots that hold at most one child. Later matches are dropped.
fn is_singleton(slot: Slot) -> bool {
    !matches!(
        slot,
        Slot::Link | Slot::Button | Slot::Social | Slot::RareItem
    )
}

/// Children of one composite grouped by slot, in storage order
#[derive(Default)]
pub(crate) struct SlotBuckets<'n> {
    buckets: Vec<(Slot, Vec<&'n HierarchyNode>)>,
}

impl<'n> SlotBuckets<'n> {
    fn classify(node: &'n HierarchyNode, composer: &dyn Composer) -> Self {
        let mut slots = SlotBuckets::default();

        for child in &node.children {
            let element = &child.element;
            let explicit = element.slot.filter(|slot| {
                let accepted = composer.accepts(*slot);
                if !accepted {
                    debug!(parent = %node.element.id, child = %element.id, ?slot, "Slot not rendered here, classifying by type");
                }
                accepted
            });

            let Some(slot) = explicit.or_else(|| composer.classify(element, &slots)) else {
                debug!(parent = %node.element.id, child = %element.id, "Child fits no slot, dropping");
                continue;
            };

            if is_singleton(slot) && slots.has(slot) {
                debug!(parent = %node.element.id, child = %element.id, ?slot, "Slot already filled, dropping");
                continue;
            }

            slots.push(slot, child);
        }

        slots
    }

    fn push(&mut self, slot: Slot, node: &'n HierarchyNode) {
        match self.buckets.iter_mut().find(|(s, _)| *s == slot) {
            Some((_, nodes)) => nodes.push(node),
            None => self.buckets.push((slot, vec![node])),
        }
    }

    pub(crate) fn has(&self, slot: Slot) -> bool {
        !self.all(slot).is_empty()
    }

    pub(crate) fn first(&self, slot: Slot) -> Option<&'n HierarchyNode> {
        self.all(slot).first().copied()
    }

    pub(crate) fn all(&self, slot: Slot) -> &[&'n HierarchyNode] {
        self.buckets
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, nodes)| nodes.as_slice())
            .unwrap_or_default()
    }

    /// True when none of `slots` has content
    pub(crate) fn none_of(&self, slots: &[Slot]) -> bool {
        slots.iter().all(|slot| !self.has(*slot))
    }
}

pub(crate) fn compose(node: &HierarchyNode, ctx: &mut Context) -> CompileResult<()> {
    let element = &node.element;
    let Some(composer) = composer_for(&element.kind) else {
        return Ok(());
    };

    let layout = element.layout();
    let slots = SlotBuckets::classify(node, composer);

    // component defaults < variant defaults < template styles < own styles
    let mut rule = composer.base_rule();
    rule.merge(composer.variant_rule(layout));
    if let Some(template) = ctx.template_styles(element) {
        rule.merge(StyleRule::from_styles(template));
    }
    rule.merge(StyleRule::from_styles(&element.styles));

    let class_name = class_name_for(element.kind.as_str(), &element.id);
    ctx.push_style(&class_name, rule);

    let tag = composer.tag();
    ctx.add_line(&format!(
        "<{}{}>",
        tag,
        Attributes::base(element, &class_name)
    ));
    ctx.indent();
    composer.render(&slots, layout, ctx)?;
    ctx.dedent();
    ctx.add_line(&format!("</{}>", tag));

    Ok(())
}

/// Wrap `nodes` in a `<div class="...">`; nothing is emitted when empty
pub(crate) fn group(ctx: &mut Context, class: &str, nodes: &[&HierarchyNode]) -> CompileResult<()> {
    if nodes.is_empty() {
        return Ok(());
    }

    ctx.open_group(class);
    for node in nodes {
        render_node(node, ctx)?;
    }
    ctx.close_group();
    Ok(())
}

/// Render the first node of each slot in order, skipping empty ones
pub(crate) fn singles(ctx: &mut Context, slots: &SlotBuckets, order: &[Slot]) -> CompileResult<()> {
    for slot in order {
        if let Some(node) = slots.first(*slot) {
            render_node(node, ctx)?;
        }
    }
    Ok(())
}

pub(crate) fn css(styles: Styles) -> StyleRule {
    StyleRule::from(styles)
}

/// Lowercased text of an element
pub(crate) fn lower_text(element: &Element) -> String {
    element.text().unwrap_or_default().to_lowercase()
}
