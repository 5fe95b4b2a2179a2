//! Page arena holding one generated DOM tree and its shared context.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, warn};

use super::grammar::{self, ANCHOR, FALLBACK_HREF, HREF};
use crate::{
    error::{GardenerError, Result},
    growth::grow_tree,
    rng::filler,
    structure::Structure,
};

/// Number of fixed elements every page starts with: `html`, `head`, `title`
/// and `body`.
pub const SKELETON_ELEMENTS: usize = 4;

const ROOT: DomNodeId = DomNodeId(0);
const HTML: DomNodeId = DomNodeId(1);
const HEAD: DomNodeId = DomNodeId(2);
const TITLE: DomNodeId = DomNodeId(3);
const BODY: DomNodeId = DomNodeId(4);

/// Handle to a node inside one [`Page`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DomNodeId(usize);

impl DomNodeId {
    /// Returns the arena slot backing this handle.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One element of a generated page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DomNode {
    tag: &'static str,
    position: usize,
    attributes: BTreeMap<&'static str, String>,
    children: Vec<DomNodeId>,
    text: Option<String>,
}

impl DomNode {
    fn new(tag: &'static str, attributes: BTreeMap<&'static str, String>) -> Self {
        Self {
            tag,
            position: 0,
            attributes,
            children: Vec::new(),
            text: None,
        }
    }

    /// Tag name; empty for the document root.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Breadth-first ordinal starting at 1 for `html`; 0 for the document
    /// root.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Attributes keyed by name.
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<&'static str, String> {
        &self.attributes
    }

    /// Looks up a single attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[DomNodeId] {
        &self.children
    }

    /// Text content rendered inside the element, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A generated page: the DOM arena plus the context shared by its nodes.
///
/// The tag and attribute indices double as the expected output for
/// consumers under test: every element is listed under its tag and under
/// each attribute it carries.
#[derive(Clone, Debug)]
pub struct Page {
    nodes: Vec<DomNode>,
    tag_index: HashMap<&'static str, Vec<DomNodeId>>,
    attr_index: HashMap<&'static str, Vec<DomNodeId>>,
    remaining_links: BTreeSet<String>,
    remaining_budget: usize,
    filler_length: usize,
}

impl Page {
    fn skeleton(links: BTreeSet<String>, budget: usize, filler_length: usize, title: String) -> Self {
        let mut page = Self {
            nodes: vec![DomNode::new("", BTreeMap::new())],
            tag_index: HashMap::new(),
            attr_index: HashMap::new(),
            remaining_links: links,
            remaining_budget: budget,
            filler_length,
        };
        let html = page.insert(DomNode::new("html", BTreeMap::new()));
        page.attach(ROOT, html);
        let head = page.insert(DomNode::new("head", BTreeMap::new()));
        page.attach(html, head);
        let mut title_node = DomNode::new("title", BTreeMap::new());
        title_node.text = Some(title);
        let title = page.insert(title_node);
        page.attach(head, title);
        let body = page.insert(DomNode::new("body", BTreeMap::new()));
        page.attach(html, body);
        debug_assert_eq!([html, head, title, body], [HTML, HEAD, TITLE, BODY]);
        page
    }

    fn insert(&mut self, node: DomNode) -> DomNodeId {
        let id = DomNodeId(self.nodes.len());
        self.tag_index.entry(node.tag).or_default().push(id);
        for &name in node.attributes.keys() {
            self.attr_index.entry(name).or_default().push(id);
        }
        self.nodes.push(node);
        id
    }

    /// The unnamed document root that owns `html`.
    #[must_use]
    pub const fn root(&self) -> DomNodeId {
        ROOT
    }

    /// The `html` element.
    #[must_use]
    pub const fn html(&self) -> DomNodeId {
        HTML
    }

    /// The `head` element.
    #[must_use]
    pub const fn head(&self) -> DomNodeId {
        HEAD
    }

    /// The `title` element.
    #[must_use]
    pub const fn title(&self) -> DomNodeId {
        TITLE
    }

    /// The `body` element, below which all generated content hangs.
    #[must_use]
    pub const fn body(&self) -> DomNodeId {
        BODY
    }

    /// Resolves a handle; `None` for handles from another page.
    #[must_use]
    pub fn node(&self, id: DomNodeId) -> Option<&DomNode> {
        self.nodes.get(id.0)
    }

    /// Number of elements, excluding the document root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Whether the page holds no elements besides the document root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements carrying `tag`, in creation order.
    #[must_use]
    pub fn nodes_with_tag(&self, tag: &str) -> &[DomNodeId] {
        self.tag_index.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Elements carrying attribute `name`, in creation order.
    #[must_use]
    pub fn nodes_with_attr(&self, name: &str) -> &[DomNodeId] {
        self.attr_index.get(name).map_or(&[], Vec::as_slice)
    }

    /// Every `href` value on the page, in creation order.
    #[must_use]
    pub fn hrefs(&self) -> Vec<&str> {
        self.nodes_with_attr(HREF)
            .iter()
            .filter_map(|&id| self.node(id)?.attribute(HREF))
            .collect()
    }

    /// Links not yet placed; empty once generation has finished.
    #[must_use]
    pub const fn remaining_links(&self) -> &BTreeSet<String> {
        &self.remaining_links
    }

    /// Element budget not yet spent; zero once generation has finished.
    #[must_use]
    pub const fn remaining_budget(&self) -> usize {
        self.remaining_budget
    }

    /// Elements in breadth-first order starting at `html`.
    #[must_use]
    pub fn breadth_first(&self) -> Vec<DomNodeId> {
        let mut order = Vec::with_capacity(self.len());
        let mut queue = VecDeque::from([HTML]);
        while let Some(id) = queue.pop_front() {
            let Some(node) = self.node(id) else {
                continue;
            };
            order.push(id);
            queue.extend(node.children.iter().copied());
        }
        order
    }

    fn assign_positions(&mut self) {
        for (ordinal, id) in self.breadth_first().into_iter().enumerate() {
            if let Some(node) = self.nodes.get_mut(id.0) {
                node.position = ordinal + 1;
            }
        }
    }

    fn verify(&self, element_count: usize) -> Result<()> {
        if !self.remaining_links.is_empty() {
            return Err(GardenerError::InvariantViolation {
                message: format!("{} links were never placed", self.remaining_links.len()),
            });
        }
        if self.remaining_budget != 0 {
            return Err(GardenerError::InvariantViolation {
                message: format!("{} elements of budget left unspent", self.remaining_budget),
            });
        }
        if self.len() != element_count {
            return Err(GardenerError::InvariantViolation {
                message: format!("expected {element_count} elements, built {}", self.len()),
            });
        }
        Ok(())
    }
}

impl Structure for Page {
    type Node = DomNodeId;

    fn spawn_child<R: Rng + ?Sized>(&mut self, parent: DomNodeId, rng: &mut R) -> Option<DomNodeId> {
        let pool = grammar::child_tags(self.node(parent)?.tag);
        if pool.is_empty() {
            return None;
        }
        let tag = if self.remaining_budget <= self.remaining_links.len() {
            // Every remaining element must carry a link; parents that cannot
            // hold an anchor are skipped.
            if !pool.contains(&ANCHOR) {
                return None;
            }
            ANCHOR
        } else {
            pool.choose(rng).copied()?
        };

        let mut attributes = BTreeMap::new();
        for &name in grammar::attributes(tag) {
            if name == HREF {
                let link = self
                    .remaining_links
                    .pop_first()
                    .unwrap_or_else(|| FALLBACK_HREF.to_owned());
                attributes.insert(name, link);
            } else if rng.gen_bool(0.5) {
                attributes.insert(name, filler(rng, self.filler_length));
            }
        }
        self.remaining_budget = self.remaining_budget.saturating_sub(1);

        let child = self.insert(DomNode::new(tag, attributes));
        self.attach(parent, child);
        Some(child)
    }

    fn attach(&mut self, from: DomNodeId, to: DomNodeId) {
        if let Some(node) = self.nodes.get_mut(from.0) {
            node.children.push(to);
        }
    }

    fn has_edge(&self, from: DomNodeId, to: DomNodeId) -> bool {
        self.node(from).is_some_and(|node| node.children.contains(&to))
    }
}

/// Builds a page of exactly `element_count` elements embedding every link
/// once.
pub(crate) fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    element_count: usize,
    links: BTreeSet<String>,
    filler_length: usize,
) -> Result<Page> {
    if element_count <= SKELETON_ELEMENTS {
        warn!(element_count, "element count leaves no room beyond the skeleton");
        return Err(GardenerError::ElementCountTooSmall {
            got: element_count,
            minimum: SKELETON_ELEMENTS,
        });
    }
    let budget = element_count - SKELETON_ELEMENTS;
    if links.len() > budget {
        warn!(links = links.len(), budget, "link set exceeds the page budget");
        return Err(GardenerError::LinkBudgetExceeded {
            links: links.len(),
            budget,
        });
    }

    let title = filler(rng, filler_length);
    let mut page = Page::skeleton(links, budget, filler_length, title);
    grow_tree(&mut page, BODY, budget, rng);
    page.assign_positions();
    page.verify(element_count)?;
    debug!(
        elements = page.len(),
        anchors = page.nodes_with_tag(ANCHOR).len(),
        "page generated"
    );
    Ok(page)
}
