//! Random spanning-tree construction and graph augmentation.
//!
//! Both builders drive a [`Structure`] purely through its capability
//! methods and never inspect what kind of node they are growing.

use rand::Rng;
use tracing::instrument;

use crate::{rng::random_choice, structure::Structure};

/// Grows `n` new nodes below `root`, returning them in creation order with
/// `root` at index 0.
///
/// Each step picks a parent uniformly among the nodes built so far. A
/// parent that refuses a child is skipped without counting the attempt, so
/// the call loops until exactly `n` nodes were created. A structure whose
/// nodes can refuse children forever never terminates.
#[instrument(name = "gardener.grow_tree", level = "debug", skip_all, fields(nodes = n))]
pub(crate) fn grow_tree<S, R>(structure: &mut S, root: S::Node, n: usize, rng: &mut R) -> Vec<S::Node>
where
    S: Structure,
    R: Rng + ?Sized,
{
    let mut nodes = Vec::with_capacity(n.saturating_add(1));
    nodes.push(root);
    let mut created = 0;
    while created < n {
        let parent = if nodes.len() > 1 {
            nodes.get(rng.gen_range(0..nodes.len())).copied().unwrap_or(root)
        } else {
            root
        };
        if let Some(child) = structure.spawn_child(parent, rng) {
            nodes.push(child);
            created += 1;
        }
    }
    nodes
}

/// Grows a spanning tree of `n` new nodes below `root`, then gives every node
/// a random number of extra edges drawn from `[0, n)`.
///
/// Targets are the first entries of a random permutation of the indices
/// `0..n` into the creation order. A node may draw its own index, which
/// yields a self edge.
#[instrument(name = "gardener.grow_graph", level = "debug", skip_all, fields(nodes = n))]
pub(crate) fn grow_graph<S, R>(structure: &mut S, root: S::Node, n: usize, rng: &mut R) -> Vec<S::Node>
where
    S: Structure,
    R: Rng + ?Sized,
{
    let nodes = grow_tree(structure, root, n, rng);
    if n == 0 {
        return nodes;
    }
    for &node in &nodes {
        let count = rng.gen_range(0..n);
        for idx in random_choice(rng, count, n) {
            let Some(&target) = nodes.get(idx) else {
                continue;
            };
            if !structure.has_edge(node, target) {
                structure.attach(node, target);
            }
        }
    }
    nodes
}

#[cfg(test)]
mod tests;
