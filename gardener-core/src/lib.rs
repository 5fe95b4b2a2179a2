//! Gardener core library.
//!
//! Grows randomized but structurally valid fixtures for consumers that walk
//! hierarchical or graph-shaped data: HTML-like pages for parser tests and
//! multi-host link graphs for crawler tests. Everything is driven by one
//! seeded generator per [`Gardener`], so a fixed seed replays the same
//! fixtures.

mod builder;
mod dom;
mod error;
mod gardener;
mod growth;
mod rng;
mod site;
mod structure;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{GardenerBuilder, GardenerConfig},
    dom::{
        DomNode, DomNodeId, Page, RenderStyle, SKELETON_ELEMENTS, render, render_html,
        render_node,
    },
    error::{GardenerError, GardenerErrorCode, Result},
    gardener::Gardener,
    site::{Site, SiteNode, SiteNodeId},
    structure::Structure,
};
