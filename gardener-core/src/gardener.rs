//! The [`Gardener`] entry point for tree, page and site generation.
//!
//! A gardener owns its random generator outright, so two gardeners never
//! share state and a fixed seed replays the exact same sequence of
//! structures.

use std::collections::BTreeSet;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{Span, field, instrument};

use crate::{
    Result,
    builder::GardenerConfig,
    dom::{self, Page},
    growth::{grow_graph, grow_tree},
    site::{self, Site, SitePlan},
    structure::Structure,
};

/// Seeded generator of random trees, graphs, pages and sites.
///
/// # Examples
/// ```
/// use gardener_core::Gardener;
///
/// let mut gardener = Gardener::from_seed(42);
/// let site = gardener.generate_site(5)?;
/// assert_eq!(site.page_registry().len(), 5);
///
/// let origin = site.node(site.origin()).expect("origin exists");
/// let page = origin.page().expect("origin page is rendered");
/// for &target in origin.refs() {
///     let link = site.node(target).expect("ref resolves").full_link();
///     assert!(page.hrefs().contains(&link));
/// }
/// # Ok::<(), gardener_core::GardenerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Gardener {
    rng: SmallRng,
    config: GardenerConfig,
}

impl Default for Gardener {
    fn default() -> Self {
        Self::new()
    }
}

impl Gardener {
    /// Creates a gardener with default settings seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config_from_entropy(GardenerConfig::default())
    }

    /// Creates a gardener with default settings and a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_config(GardenerConfig::default(), seed)
    }

    pub(crate) fn with_config(config: GardenerConfig, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    pub(crate) fn with_config_from_entropy(config: GardenerConfig) -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            config,
        }
    }

    /// Restarts the random sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Returns the settings this gardener generates with.
    #[must_use]
    pub const fn config(&self) -> &GardenerConfig {
        &self.config
    }

    /// Grows `n` new nodes below `root` as a random spanning tree.
    ///
    /// The returned nodes are in creation order with `root` first. Parents
    /// are drawn uniformly among the nodes built so far, and a parent that
    /// refuses a child is skipped without counting the attempt.
    pub fn rand_tree<S: Structure>(&mut self, structure: &mut S, root: S::Node, n: usize) -> Vec<S::Node> {
        grow_tree(structure, root, n, &mut self.rng)
    }

    /// Grows a random spanning tree of `n` new nodes below `root`, then adds
    /// a random number of extra edges from every node.
    ///
    /// Extra edges may point back at their own source node.
    pub fn rand_graph<S: Structure>(&mut self, structure: &mut S, root: S::Node, n: usize) -> Vec<S::Node> {
        grow_graph(structure, root, n, &mut self.rng)
    }

    /// Generates a page of exactly `element_count` elements (the document
    /// root excluded) that embeds every link as exactly one anchor `href`.
    ///
    /// Duplicate links collapse to one anchor.
    ///
    /// # Errors
    /// Returns [`crate::GardenerError::ElementCountTooSmall`] unless
    /// `element_count` exceeds the four skeleton elements,
    /// [`crate::GardenerError::LinkBudgetExceeded`] when there are more
    /// distinct links than free elements, and
    /// [`crate::GardenerError::InvariantViolation`] if a generation guarantee
    /// did not hold.
    ///
    /// # Examples
    /// ```
    /// use gardener_core::Gardener;
    ///
    /// let mut gardener = Gardener::from_seed(1);
    /// let page = gardener.generate_page(6, ["L1".to_owned(), "L2".to_owned()])?;
    /// assert_eq!(page.len(), 6);
    /// let mut hrefs = page.hrefs();
    /// hrefs.sort_unstable();
    /// assert_eq!(hrefs, ["L1", "L2"]);
    /// # Ok::<(), gardener_core::GardenerError>(())
    /// ```
    #[instrument(
        name = "gardener.generate_page",
        err,
        skip(self, links),
        fields(element_count = element_count, links = field::Empty),
    )]
    pub fn generate_page<I>(&mut self, element_count: usize, links: I) -> Result<Page>
    where
        I: IntoIterator<Item = String>,
    {
        let links: BTreeSet<String> = links.into_iter().collect();
        Span::current().record("links", links.len());
        dom::generate(&mut self.rng, element_count, links, self.config.filler_length)
    }

    /// Generates a site of `sites` pages linked as a random graph, with every
    /// page rendered.
    ///
    /// # Errors
    /// Returns [`crate::GardenerError::EmptySite`] when `sites` is zero and
    /// [`crate::GardenerError::InvariantViolation`] if a generation guarantee
    /// did not hold.
    #[instrument(name = "gardener.generate_site", err, skip(self), fields(sites = sites))]
    pub fn generate_site(&mut self, sites: usize) -> Result<Site> {
        let plan = SitePlan {
            scheme: self.config.scheme.clone(),
            tld: self.config.tld.clone(),
            page_padding: self.config.page_padding,
            filler_length: self.config.filler_length,
        };
        site::generate(&mut self.rng, sites, &plan)
    }
}
