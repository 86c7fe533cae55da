use crate::attributes::{dropdown_menu, Attributes};
use crate::composers;
use crate::tags::tag_for;
use sitecraft_compiler_css::{
    class_name_for, compile_css, compile_css_minified, CollectedStyles, StyleRule,
};
use sitecraft_editor::{build_hierarchy, HierarchyNode, StructureRegistry};
use sitecraft_model::{merge_all, type_defaults, Element, ElementKind, Styles};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Errors that can occur during HTML compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Element {id} is nested deeper than {limit} levels")]
    DepthExceeded { id: String, limit: usize },
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML and CSS. Compact output also minifies the stylesheet.
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// `<title>` of a full document
    pub title: String,
    /// Link an external stylesheet from a full document instead of inlining it
    pub stylesheet_href: Option<String>,
    /// Maximum element nesting before compilation is aborted
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Sitecraft Page".to_string(),
            stylesheet_href: None,
            max_depth: 64,
        }
    }
}

/// Output of one export: body markup and the stylesheet it references
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPage {
    pub html: String,
    pub css: String,
}

pub(crate) struct Context<'a> {
    options: &'a CompileOptions,
    registry: &'a StructureRegistry,
    depth: usize,
    nesting: usize,
    buffer: String,
    styles: CollectedStyles,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions, registry: &'a StructureRegistry) -> Self {
        Self {
            options,
            registry,
            depth: 0,
            nesting: 0,
            buffer: String::new(),
            styles: CollectedStyles::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    /// Re-indent a multi-line block at the current depth
    fn add_block(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                if self.options.pretty {
                    self.add("\n");
                }
            } else {
                self.add_line(line);
            }
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// `<div class="...">` wrapper used by composers
    pub(crate) fn open_group(&mut self, class: &str) {
        self.add_line(&format!("<div class=\"{}\">", escape_attr(class)));
        self.indent();
    }

    pub(crate) fn close_group(&mut self) {
        self.dedent();
        self.add_line("</div>");
    }

    pub(crate) fn push_style(&mut self, class_name: &str, rule: StyleRule) {
        self.styles.push(class_name, rule);
    }

    /// Template styles of the structure an element was created from
    pub(crate) fn template_styles(&self, element: &Element) -> Option<&'a Styles> {
        let registry = self.registry;
        element
            .structure
            .as_deref()
            .and_then(|name| registry.get(name))
            .map(|template| &template.styles)
    }

    fn finish(self) -> CompiledPage {
        let css = if self.options.pretty {
            compile_css(&self.styles)
        } else {
            compile_css_minified(&self.styles)
        };

        CompiledPage {
            html: self.buffer,
            css,
        }
    }
}

/// Compile a flat element list to body markup and a stylesheet, using the
/// built-in structure templates for template-level styles
pub fn compile(elements: &[Element], options: &CompileOptions) -> CompileResult<CompiledPage> {
    compile_with_registry(elements, options, StructureRegistry::builtin())
}

pub fn compile_with_registry(
    elements: &[Element],
    options: &CompileOptions,
    registry: &StructureRegistry,
) -> CompileResult<CompiledPage> {
    compile_hierarchy(&build_hierarchy(elements), options, registry)
}

/// Compile an already built tree
#[instrument(skip_all, fields(roots = roots.len()))]
pub fn compile_hierarchy(
    roots: &[HierarchyNode],
    options: &CompileOptions,
    registry: &StructureRegistry,
) -> CompileResult<CompiledPage> {
    let page = render_roots(roots, options, registry, 0)?;
    info!(
        html_bytes = page.html.len(),
        css_bytes = page.css.len(),
        "Compiled page"
    );
    Ok(page)
}

/// Render `roots` with every line starting `depth` levels in. Element text is
/// emitted verbatim, so markup must be rendered at its final depth rather
/// than re-indented afterwards.
fn render_roots(
    roots: &[HierarchyNode],
    options: &CompileOptions,
    registry: &StructureRegistry,
    depth: usize,
) -> CompileResult<CompiledPage> {
    let mut ctx = Context::new(options, registry);
    ctx.depth = depth;

    for root in roots {
        render_node(root, &mut ctx)?;
    }

    Ok(ctx.finish())
}

/// Compile a standalone HTML document. The stylesheet is inlined unless
/// `stylesheet_href` is set; `css` is returned either way.
pub fn compile_document(
    elements: &[Element],
    options: &CompileOptions,
) -> CompileResult<CompiledPage> {
    let registry = StructureRegistry::builtin();
    // body content sits inside <html> and <body>
    let page = render_roots(&build_hierarchy(elements), options, registry, 2)?;
    let mut ctx = Context::new(options, registry);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&options.title)));

    match &options.stylesheet_href {
        Some(href) => {
            ctx.add_line(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">",
                escape_attr(href)
            ));
        }
        None if !page.css.is_empty() => {
            ctx.add_line("<style>");
            ctx.indent();
            ctx.add_block(&page.css);
            ctx.dedent();
            ctx.add_line("</style>");
        }
        None => {}
    }

    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.add(&page.html);
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    Ok(CompiledPage {
        html: ctx.buffer,
        css: page.css,
    })
}

pub(crate) fn render_node(node: &HierarchyNode, ctx: &mut Context) -> CompileResult<()> {
    let element = &node.element;

    if ctx.nesting >= ctx.options.max_depth {
        return Err(CompileError::DepthExceeded {
            id: element.id.clone(),
            limit: ctx.options.max_depth,
        });
    }

    ctx.nesting += 1;
    let result = if element.kind.is_composite() {
        composers::compose(node, ctx)
    } else {
        render_element(node, ctx)
    };
    ctx.nesting -= 1;

    result
}

fn render_element(node: &HierarchyNode, ctx: &mut Context) -> CompileResult<()> {
    let element = &node.element;

    let Some(tag) = tag_for(element) else {
        warn!(id = %element.id, kind = %element.kind, "No tag mapping for element type, skipping");
        return Ok(());
    };

    let class_name = class_name_for(element.kind.as_str(), &element.id);
    let rule = resolve_rule(element, ctx);
    ctx.push_style(&class_name, rule);

    let attributes = Attributes::for_element(element, &class_name);

    if is_self_closing(&tag) {
        if !node.children.is_empty() {
            debug!(id = %element.id, tag = %tag, "Dropping children of self-closing tag");
        }
        ctx.add_line(&format!("<{}{} />", tag, attributes));
    } else {
        let text = inline_text(element).map(escape_html).unwrap_or_default();

        if node.children.is_empty() {
            ctx.add_line(&format!("<{}{}>{}</{}>", tag, attributes, text, tag));
        } else {
            ctx.add_line(&format!("<{}{}>{}", tag, attributes, text));
            ctx.indent();
            for child in &node.children {
                render_node(child, ctx)?;
            }
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        }
    }

    if let Some(menu) = dropdown_menu(element) {
        ctx.add_line(&menu.open_tag());
        ctx.indent();
        for link in menu.links {
            ctx.add_line(&format!(
                "<a href=\"{}\">{}</a>",
                escape_attr(&link.href),
                escape_html(&link.label)
            ));
        }
        ctx.dedent();
        ctx.add_line("</div>");
    }

    Ok(())
}

/// type defaults < template styles < own styles
fn resolve_rule(element: &Element, ctx: &Context) -> StyleRule {
    let defaults = type_defaults(&element.kind);
    let empty = Styles::default();
    let template = ctx.template_styles(element).unwrap_or(&empty);

    StyleRule::from(merge_all([&defaults, template, &element.styles]))
}

/// Text rendered between the tags. Media and form fields carry their content
/// in attributes instead.
fn inline_text(element: &Element) -> Option<&str> {
    if element.kind.is_media() || element.kind == ElementKind::Input {
        return None;
    }
    element.text()
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a double-quoted attribute value
pub(crate) fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(crate) fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img" | "input" | "br" | "hr" | "meta" | "link" | "source"
    )
}
