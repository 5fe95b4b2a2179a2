//! HTML-like page generation.
//!
//! A page is a fixed `html`/`head`/`title`/`body` skeleton with a random
//! tree grown below `body`. Child tags follow a fixed grammar, and every
//! supplied link is placed as exactly one anchor `href`: once the remaining
//! element budget drops to the number of unplaced links, every new element
//! is forced to be an anchor.

mod grammar;
mod page;
mod render;

pub(crate) use page::generate;
pub use page::{DomNode, DomNodeId, Page, SKELETON_ELEMENTS};
pub use render::{RenderStyle, render, render_html, render_node};
