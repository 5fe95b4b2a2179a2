//! Tag and attribute tables for generated pages.

/// Tag carrying page links.
pub(crate) const ANCHOR: &str = "a";
/// Attribute that holds a link on anchors.
pub(crate) const HREF: &str = "href";
/// Value used for anchors once every supplied link has been placed.
pub(crate) const FALLBACK_HREF: &str = "#";

const COMMON_ATTRS: &[&str] = &["class", "id"];

const TEXT_CONTENT: &[&str] = &["div", "hr", "li", "main", "p", "ul"];

const CONTENT: &[&str] = &["a", "img", "span", "audio", "video", "source"];

const BODY_CHILDREN: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "article", "section", "footer", "header", "nav", "div",
    "hr", "li", "main", "p", "ul", "a", "img", "span", "audio", "video", "source",
];

const FLOW_CHILDREN: &[&str] = &[
    "a", "img", "span", "audio", "video", "source", "div", "hr", "li", "main", "p", "ul",
];

const LIST_CHILDREN: &[&str] = &["a", "img", "span", "audio", "video", "source", "li"];

const ANCHOR_CHILDREN: &[&str] = &["img", "span", "audio", "video", "source"];

const MEDIA_CHILDREN: &[&str] = &["source"];

/// Tags that may appear directly below `tag`, in draw order.
///
/// Tags outside the grammar, and structural leaves such as `p` or `img`,
/// yield an empty slice.
pub(crate) fn child_tags(tag: &str) -> &'static [&'static str] {
    match tag {
        "body" => BODY_CHILDREN,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => TEXT_CONTENT,
        "article" | "section" | "footer" | "header" | "nav" | "main" | "div" => FLOW_CHILDREN,
        "ul" => LIST_CHILDREN,
        "li" => CONTENT,
        "a" => ANCHOR_CHILDREN,
        "audio" | "video" => MEDIA_CHILDREN,
        _ => &[],
    }
}

/// Attributes `tag` may carry, in draw order.
pub(crate) fn attributes(tag: &str) -> &'static [&'static str] {
    match tag {
        "li" => &["class", "id", "value"],
        "a" => &["class", "id", "href"],
        "audio" | "video" => &["class", "id", "controls"],
        "img" | "source" => &["class", "id", "src"],
        "head" | "body" | "title" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "article"
        | "section" | "footer" | "header" | "nav" | "main" | "div" | "ul" | "hr" | "p"
        | "span" => COMMON_ATTRS,
        _ => &[],
    }
}
