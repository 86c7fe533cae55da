//! Shared helpers for generating class names and CSS property names.

use sitecraft_model::StyleValue;

/// Generate the scoped class name of an element.
///
/// Element IDs are already unique; the kind prefix keeps the stylesheet
/// readable.
///
/// Examples:
/// - `class_name_for("button", "button-3-lx2k-a1b2c3")` → `"_button-button-3-lx2k-a1b2c3"`
/// - `class_name_for("list-item", "p.1")` → `"_list-item-p-1"`
pub fn class_name_for(kind: &str, id: &str) -> String {
    format!("_{}-{}", sanitize(kind), sanitize(id))
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// `backgroundColor` → `background-color`. Already-kebab names and custom
/// properties (`--accent`) pass through unchanged.
pub fn to_kebab_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len() + 4);
    for (i, c) in property.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    // Vendor prefixes: WebkitTransition → -webkit-transition
    if ["webkit-", "moz-", "ms-", "o-"]
        .iter()
        .any(|prefix| out.starts_with(prefix))
        && property.starts_with(|c: char| c.is_ascii_uppercase())
    {
        out.insert(0, '-');
    }

    out
}

/// Properties whose numeric values are emitted without a `px` suffix
const UNITLESS: &[&str] = &[
    "opacity",
    "zIndex",
    "fontWeight",
    "lineHeight",
    "flex",
    "flexGrow",
    "flexShrink",
    "order",
    "zoom",
    "aspectRatio",
    "columnCount",
    "gridColumn",
    "gridRow",
];

/// Render a stored value as CSS text. Non-zero numbers get `px` unless the
/// property is unitless. Text values cannot close their declaration or rule.
pub fn format_value(property: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Number(n) if *n != 0.0 && !UNITLESS.contains(&property) => {
            format!("{}px", value)
        }
        StyleValue::Text(text) => strip_breakouts(text),
        _ => value.to_string(),
    }
}

/// Drop braces, `<`, and line breaks everywhere, and `;` outside quoted strings
fn strip_breakouts(text: &str) -> String {
    let mut quote: Option<char> = None;

    text.chars()
        .filter(|&c| {
            match (quote, c) {
                (_, '{' | '}' | '<' | '\n' | '\r') => return false,
                (None, ';') => return false,
                (None, '"' | '\'') => quote = Some(c),
                (Some(open), _) if open == c => quote = None,
                _ => {}
            }
            true
        })
        .collect()
}

/// Combine a parent selector with a nested selector.
///
/// `&` is replaced by the parent, pseudo selectors attach directly, anything
/// else becomes a descendant selector.
pub fn join_selector(parent: &str, nested: &str) -> String {
    if nested.contains('&') {
        nested.replace('&', parent)
    } else if nested.starts_with(':') {
        format!("{}{}", parent, nested)
    } else {
        format!("{} {}", parent, nested)
    }
}
