//! Textual rendering of generated pages.

use super::page::{DomNodeId, Page};
use crate::error::{GardenerError, Result};

/// How elements without content are closed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderStyle {
    /// Childless elements without text render self-closing (`<p/>`).
    Compact,
    /// Every element gets an explicit end tag, which HTML5 parsers read back
    /// into the same tree.
    Html,
}

/// Renders the page from `html` down in [`RenderStyle::Compact`] form.
///
/// Attributes are written in name order.
///
/// # Examples
/// ```
/// use gardener_core::{Gardener, render};
///
/// let mut gardener = Gardener::from_seed(3);
/// let page = gardener.generate_page(12, Vec::new())?;
/// let text = render(&page);
/// assert!(text.starts_with("<html>"));
/// assert!(text.ends_with("</html>"));
/// # Ok::<(), gardener_core::GardenerError>(())
/// ```
#[must_use]
pub fn render(page: &Page) -> String {
    render_from(page, page.html(), RenderStyle::Compact)
}

/// Renders the page from `html` down with explicit end tags on every
/// element.
#[must_use]
pub fn render_html(page: &Page) -> String {
    render_from(page, page.html(), RenderStyle::Html)
}

/// Renders the subtree below `node`.
///
/// The document root renders as the concatenation of its children.
///
/// # Errors
/// Returns [`GardenerError::InvariantViolation`] when `node`, or any node
/// reachable from it, does not belong to `page`.
pub fn render_node(page: &Page, node: DomNodeId, style: RenderStyle) -> Result<String> {
    let mut out = String::new();
    write_node(page, node, style, &mut out)?;
    Ok(out)
}

fn render_from(page: &Page, node: DomNodeId, style: RenderStyle) -> String {
    let rendered = render_node(page, node, style);
    debug_assert!(rendered.is_ok(), "page-minted handles must resolve: {rendered:?}");
    rendered.unwrap_or_default()
}

fn write_node(page: &Page, id: DomNodeId, style: RenderStyle, out: &mut String) -> Result<()> {
    let node = page
        .node(id)
        .ok_or_else(|| GardenerError::InvariantViolation {
            message: format!("node {} does not belong to this page", id.index()),
        })?;

    if node.tag().is_empty() {
        for &child in node.children() {
            write_node(page, child, style, out)?;
        }
        return Ok(());
    }

    out.push('<');
    out.push_str(node.tag());
    for (name, value) in node.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }

    if style == RenderStyle::Compact && node.children().is_empty() && node.text().is_none() {
        out.push_str("/>");
        return Ok(());
    }

    out.push('>');
    if let Some(text) = node.text() {
        escape_into(text, out);
    }
    for &child in node.children() {
        write_node(page, child, style, out)?;
    }
    out.push_str("</");
    out.push_str(node.tag());
    out.push('>');
    Ok(())
}

fn escape_into(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}
