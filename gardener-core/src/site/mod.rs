//! Multi-host website graph generation.
//!
//! A site is grown as a random graph from its origin page. Hostnames
//! cluster: a new page usually reuses one of the earliest hosts and only
//! occasionally mints a fresh one. Once the graph is frozen, a depth-first
//! pass assigns each page its depth and renders it a DOM page that links to
//! every page it references.

use std::collections::{BTreeSet, HashMap, HashSet};

use rand::Rng;
use tracing::{debug, warn};

use crate::{
    dom::{self, Page, SKELETON_ELEMENTS},
    error::{GardenerError, Result},
    growth::grow_graph,
    rng::{standard_normal, token},
    structure::Structure,
};

/// Handle to a page node inside one [`Site`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SiteNodeId(usize);

impl SiteNodeId {
    /// Returns the arena slot backing this handle.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One page of a generated site.
#[derive(Clone, Debug)]
pub struct SiteNode {
    hostname: String,
    link_path: String,
    full_link: String,
    depth: usize,
    page: Option<Page>,
    refs: Vec<SiteNodeId>,
    backlinks: Vec<SiteNodeId>,
}

impl SiteNode {
    fn new(hostname: String, link_path: String) -> Self {
        let full_link = format!("{hostname}/{link_path}");
        Self {
            hostname,
            link_path,
            full_link,
            depth: 0,
            page: None,
            refs: Vec::new(),
            backlinks: Vec::new(),
        }
    }

    /// Host part, including the scheme.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Path below the host.
    #[must_use]
    pub fn link_path(&self) -> &str {
        &self.link_path
    }

    /// `hostname/link_path`; unique within the site.
    #[must_use]
    pub fn full_link(&self) -> &str {
        &self.full_link
    }

    /// Depth at which the depth-first pass first reached this page.
    ///
    /// This is not guaranteed to be the shortest distance from the origin.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The rendered page, present on every node of a finished site.
    #[must_use]
    pub const fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// Pages this page links to, in insertion order.
    #[must_use]
    pub fn refs(&self) -> &[SiteNodeId] {
        &self.refs
    }

    /// Pages linking to this page, in insertion order.
    #[must_use]
    pub fn backlinks(&self) -> &[SiteNodeId] {
        &self.backlinks
    }
}

/// Naming and sizing knobs for site generation.
#[derive(Clone, Debug)]
pub(crate) struct SitePlan {
    pub(crate) scheme: String,
    pub(crate) tld: String,
    pub(crate) page_padding: usize,
    pub(crate) filler_length: usize,
}

/// A generated site: page nodes plus the ground truth crawler tests check
/// against.
#[derive(Clone, Debug)]
pub struct Site {
    nodes: Vec<SiteNode>,
    registry: HashMap<String, SiteNodeId>,
    hosts: Vec<String>,
    max_depth: usize,
    scheme: String,
    tld: String,
}

impl Site {
    fn new(scheme: &str, tld: &str) -> Self {
        Self {
            nodes: Vec::new(),
            registry: HashMap::new(),
            hosts: Vec::new(),
            max_depth: 0,
            scheme: scheme.to_owned(),
            tld: tld.to_owned(),
        }
    }

    /// The page generation started from.
    #[must_use]
    pub const fn origin(&self) -> SiteNodeId {
        SiteNodeId(0)
    }

    /// Resolves a handle; `None` for handles from another site.
    #[must_use]
    pub fn node(&self, id: SiteNodeId) -> Option<&SiteNode> {
        self.nodes.get(id.0)
    }

    /// Finds a page by its full link.
    #[must_use]
    pub fn lookup(&self, full_link: &str) -> Option<&SiteNode> {
        self.registry.get(full_link).and_then(|&id| self.node(id))
    }

    /// Every page ever created, keyed by full link.
    #[must_use]
    pub const fn page_registry(&self) -> &HashMap<String, SiteNodeId> {
        &self.registry
    }

    /// Hostnames in the order they were minted.
    #[must_use]
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Largest depth observed during the depth pass, counting repeat visits.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the site has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pages in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (SiteNodeId, &SiteNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (SiteNodeId(idx), node))
    }

    fn mint_host<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let hostname = format!("{}://{}.{}", self.scheme, token(rng), self.tld);
        self.hosts.push(hostname.clone());
        hostname
    }

    /// Picks a hostname biased towards the earliest minted hosts.
    fn pick_host<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let count = self.hosts.len();
        if count == 0 {
            return self.mint_host(rng);
        }
        let scaled = (standard_normal(rng).abs() * count as f64 / 2.0).floor();
        // Float-to-int casts saturate, so huge draws land past the end.
        let idx = scaled as usize;
        match self.hosts.get(idx) {
            Some(hostname) => hostname.clone(),
            None => self.mint_host(rng),
        }
    }

    fn insert(&mut self, hostname: String, link_path: String) -> SiteNodeId {
        let id = SiteNodeId(self.nodes.len());
        let node = SiteNode::new(hostname, link_path);
        self.registry.insert(node.full_link.clone(), id);
        self.nodes.push(node);
        id
    }

    /// Assigns depth and page on first visit and returns the full link of
    /// `id`.
    fn visit<R: Rng + ?Sized>(
        &mut self,
        id: SiteNodeId,
        depth: usize,
        visited: &mut HashSet<String>,
        pass: &mut PagePass<'_, R>,
    ) -> Result<String> {
        self.max_depth = self.max_depth.max(depth);
        let Some(node) = self.nodes.get_mut(id.0) else {
            return Err(missing_node(id));
        };
        let full_link = node.full_link.clone();
        if !visited.insert(full_link.clone()) {
            return Ok(full_link);
        }
        node.depth = depth;
        let refs = node.refs.clone();

        let mut links = BTreeSet::new();
        for target in refs {
            links.insert(self.visit(target, depth + 1, visited, pass)?);
        }

        let page = pass.render(links)?;
        let node = self.nodes.get_mut(id.0).ok_or_else(|| missing_node(id))?;
        node.page = Some(page);
        Ok(full_link)
    }

    fn verify(&self, sites: usize) -> Result<()> {
        if self.registry.len() != sites {
            return Err(GardenerError::InvariantViolation {
                message: format!("expected {sites} pages, registered {}", self.registry.len()),
            });
        }
        if let Some(node) = self.nodes.iter().find(|node| node.page.is_none()) {
            return Err(GardenerError::InvariantViolation {
                message: format!("page {} was never rendered", node.full_link),
            });
        }
        Ok(())
    }
}

impl Structure for Site {
    type Node = SiteNodeId;

    fn spawn_child<R: Rng + ?Sized>(&mut self, parent: SiteNodeId, rng: &mut R) -> Option<SiteNodeId> {
        self.node(parent)?;
        let hostname = self.pick_host(rng);
        let child = self.insert(hostname, token(rng));
        self.attach(parent, child);
        Some(child)
    }

    fn attach(&mut self, from: SiteNodeId, to: SiteNodeId) {
        if let Some(node) = self.nodes.get_mut(from.0) {
            node.refs.push(to);
        }
        if let Some(node) = self.nodes.get_mut(to.0) {
            node.backlinks.push(from);
        }
    }

    fn has_edge(&self, from: SiteNodeId, to: SiteNodeId) -> bool {
        self.node(from).is_some_and(|node| node.refs.contains(&to))
    }
}

/// Page rendering state threaded through the depth pass.
struct PagePass<'a, R: ?Sized> {
    rng: &'a mut R,
    sites: usize,
    page_padding: usize,
    filler_length: usize,
}

impl<R: Rng + ?Sized> PagePass<'_, R> {
    /// Renders a page of `2 * sites + uniform(0..page_padding)` elements on
    /// top of the skeleton.
    fn render(&mut self, links: BTreeSet<String>) -> Result<Page> {
        let extra = self
            .sites
            .saturating_mul(2)
            .saturating_add(self.rng.gen_range(0..self.page_padding.max(1)));
        dom::generate(
            &mut *self.rng,
            SKELETON_ELEMENTS.saturating_add(extra),
            links,
            self.filler_length,
        )
    }
}

fn missing_node(id: SiteNodeId) -> GardenerError {
    GardenerError::InvariantViolation {
        message: format!("site node {} is missing", id.index()),
    }
}

/// Builds a site of `sites` pages with every page rendered.
pub(crate) fn generate<R: Rng + ?Sized>(rng: &mut R, sites: usize, plan: &SitePlan) -> Result<Site> {
    if sites == 0 {
        warn!("a site of zero pages was requested");
        return Err(GardenerError::EmptySite);
    }
    let mut site = Site::new(&plan.scheme, &plan.tld);
    let hostname = site.mint_host(rng);
    let origin = site.insert(hostname, token(rng));
    grow_graph(&mut site, origin, sites - 1, rng);

    let mut visited = HashSet::with_capacity(sites);
    let mut pass = PagePass {
        rng,
        sites,
        page_padding: plan.page_padding,
        filler_length: plan.filler_length,
    };
    site.visit(origin, 0, &mut visited, &mut pass)?;
    site.verify(sites)?;
    debug!(
        pages = site.len(),
        hosts = site.hosts.len(),
        max_depth = site.max_depth,
        "site generated"
    );
    Ok(site)
}
