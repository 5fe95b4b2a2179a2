//! The node capability the generic builders grow.

use rand::Rng;

/// A per-generation store of nodes that the tree and graph builders can grow.
///
/// The implementor doubles as the shared generation context: it owns the
/// nodes and whatever bookkeeping they share, and it is handed to every
/// capability call by mutable reference. Nodes are addressed through the
/// copyable [`Structure::Node`] handle, and handle equality is node
/// identity.
///
/// # Examples
/// ```
/// use gardener_core::{Gardener, Structure};
/// use rand::Rng;
///
/// /// A chain where every node may hold at most one child.
/// #[derive(Default)]
/// struct Chain {
///     children: Vec<Vec<usize>>,
/// }
///
/// impl Structure for Chain {
///     type Node = usize;
///
///     fn spawn_child<R: Rng + ?Sized>(&mut self, parent: usize, _rng: &mut R) -> Option<usize> {
///         if !self.children.get(parent)?.is_empty() {
///             return None;
///         }
///         let child = self.children.len();
///         self.children.push(Vec::new());
///         self.attach(parent, child);
///         Some(child)
///     }
///
///     fn attach(&mut self, from: usize, to: usize) {
///         if let Some(edges) = self.children.get_mut(from) {
///             edges.push(to);
///         }
///     }
///
///     fn has_edge(&self, from: usize, to: usize) -> bool {
///         self.children.get(from).is_some_and(|edges| edges.contains(&to))
///     }
/// }
///
/// let mut chain = Chain { children: vec![Vec::new()] };
/// let mut gardener = Gardener::from_seed(1);
/// let nodes = gardener.rand_tree(&mut chain, 0, 4);
/// assert_eq!(nodes, vec![0, 1, 2, 3, 4]);
/// ```
pub trait Structure {
    /// Copyable handle identifying one node of this structure.
    type Node: Copy + Eq;

    /// Creates a new node below `parent` and links it as a child.
    ///
    /// Returns `None` when `parent` cannot take another child, which the
    /// builders treat as "pick another parent", never as an error.
    fn spawn_child<R: Rng + ?Sized>(&mut self, parent: Self::Node, rng: &mut R)
    -> Option<Self::Node>;

    /// Adds an edge from `from` to the already existing node `to`.
    fn attach(&mut self, from: Self::Node, to: Self::Node);

    /// Reports whether `from` already holds an edge to `to`.
    fn has_edge(&self, from: Self::Node, to: Self::Node) -> bool;
}
