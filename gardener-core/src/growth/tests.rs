//! Unit and property tests for spanning-tree growth and graph augmentation.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rstest::rstest;

use super::{grow_graph, grow_tree};
use crate::{structure::Structure, test_utils::suite_proptest_config};

/// Minimal structure recording parents and edges by index.
///
/// When `barren_odd` is set, odd-numbered nodes refuse children so the
/// builders' retry path is exercised.
struct Sapling {
    parents: Vec<Option<usize>>,
    edges: Vec<Vec<usize>>,
    barren_odd: bool,
}

impl Sapling {
    fn new(barren_odd: bool) -> Self {
        Self {
            parents: vec![None],
            edges: vec![Vec::new()],
            barren_odd,
        }
    }

    fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}

impl Structure for Sapling {
    type Node = usize;

    fn spawn_child<R: Rng + ?Sized>(&mut self, parent: usize, _rng: &mut R) -> Option<usize> {
        if self.barren_odd && parent % 2 == 1 {
            return None;
        }
        let child = self.parents.len();
        self.parents.push(Some(parent));
        self.edges.push(Vec::new());
        self.attach(parent, child);
        Some(child)
    }

    fn attach(&mut self, from: usize, to: usize) {
        self.edges[from].push(to);
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges[from].contains(&to)
    }
}

fn assert_spanning_tree(sapling: &Sapling, nodes: &[usize], n: usize) {
    assert_eq!(nodes.len(), n + 1);
    assert_eq!(nodes[0], 0);
    let unique: HashSet<_> = nodes.iter().copied().collect();
    assert_eq!(unique.len(), nodes.len(), "nodes must be pairwise distinct");
    for (position, &node) in nodes.iter().enumerate().skip(1) {
        let parent = sapling.parents[node].expect("non-root nodes have parents");
        let parent_position = nodes
            .iter()
            .position(|&candidate| candidate == parent)
            .expect("parent must be part of the tree");
        assert!(
            parent_position < position,
            "node {node} refers forward to parent {parent}"
        );
    }
}

#[rstest]
#[case::single(1, false)]
#[case::small(8, false)]
#[case::large(200, false)]
#[case::with_barren_nodes(64, true)]
fn grow_tree_creates_exactly_n_nodes(#[case] n: usize, #[case] barren_odd: bool) {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut sapling = Sapling::new(barren_odd);
    let nodes = grow_tree(&mut sapling, 0, n, &mut rng);
    assert_spanning_tree(&sapling, &nodes, n);
    assert_eq!(sapling.edge_count(), n);
}

#[test]
fn grow_tree_with_zero_nodes_returns_root_only() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut sapling = Sapling::new(false);
    assert_eq!(grow_tree(&mut sapling, 0, 0, &mut rng), vec![0]);
}

#[test]
fn barren_nodes_never_gain_children() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut sapling = Sapling::new(true);
    grow_tree(&mut sapling, 0, 50, &mut rng);
    for (node, edges) in sapling.edges.iter().enumerate() {
        if node % 2 == 1 {
            assert!(edges.is_empty(), "barren node {node} gained a child");
        }
    }
}

#[test]
fn grow_graph_with_zero_nodes_adds_no_edges() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut sapling = Sapling::new(false);
    let nodes = grow_graph(&mut sapling, 0, 0, &mut rng);
    assert_eq!(nodes, vec![0]);
    assert_eq!(sapling.edge_count(), 0);
}

#[test]
fn grow_graph_never_duplicates_edges() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut sapling = Sapling::new(false);
    let nodes = grow_graph(&mut sapling, 0, 30, &mut rng);
    assert_eq!(nodes.len(), 31);
    for edges in &sapling.edges {
        let unique: HashSet<_> = edges.iter().collect();
        assert_eq!(unique.len(), edges.len());
    }
    assert!(sapling.edge_count() >= 30);
}

#[test]
fn grow_graph_targets_only_the_first_n_nodes() {
    let n = 12;
    let mut rng = SmallRng::seed_from_u64(23);
    let mut sapling = Sapling::new(false);
    let nodes = grow_graph(&mut sapling, 0, n, &mut rng);
    let last = nodes[n];
    for (node, edges) in sapling.edges.iter().enumerate() {
        let tree_child = |target: &usize| sapling.parents[*target] == Some(node);
        assert!(
            edges.iter().all(|target| *target != last || tree_child(target)),
            "only the spanning tree may reach the last node"
        );
    }
}

#[test]
fn grow_graph_can_produce_self_edges() {
    let found = (0..20_u64).any(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut sapling = Sapling::new(false);
        grow_graph(&mut sapling, 0, 10, &mut rng);
        sapling
            .edges
            .iter()
            .enumerate()
            .any(|(node, edges)| edges.contains(&node))
    });
    assert!(found, "augmentation keeps self edges");
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn grow_tree_spans_for_any_seed(seed in any::<u64>(), n in 1_usize..120, barren_odd in any::<bool>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut sapling = Sapling::new(barren_odd);
        let nodes = grow_tree(&mut sapling, 0, n, &mut rng);
        assert_spanning_tree(&sapling, &nodes, n);
    }

    #[test]
    fn grow_graph_is_reproducible(seed in any::<u64>(), n in 1_usize..40) {
        let mut left_rng = SmallRng::seed_from_u64(seed);
        let mut right_rng = SmallRng::seed_from_u64(seed);
        let mut left = Sapling::new(false);
        let mut right = Sapling::new(false);
        let left_nodes = grow_graph(&mut left, 0, n, &mut left_rng);
        let right_nodes = grow_graph(&mut right, 0, n, &mut right_rng);
        prop_assert_eq!(left_nodes, right_nodes);
        prop_assert_eq!(left.edges, right.edges);
    }
}
