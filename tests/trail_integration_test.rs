// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the trail-based backtracking system.
//!
//! These tests verify that subset changes made through a SearchContext are
//! undone by rewinding its trail, which the cover enumeration depends on.

mod common;

use common::{graph, vertex, PATH3};
use cover_tree_search::{SearchContext, VertexCover};

#[test]
fn test_search_context_simple_backtracking() {
    let g = graph(PATH3);
    let mut ctx = SearchContext::new(&g);

    let checkpoint = ctx.trail.checkpoint();
    ctx.include_vertex(vertex(&g, "c"));
    assert_eq!(ctx.current_cover(), VertexCover::new(["c"]));
    assert_eq!(ctx.trail.len(), 1);

    ctx.trail.rewind_to(checkpoint);
    assert_eq!(ctx.current_cover(), VertexCover::default());
    assert_eq!(ctx.trail.len(), 0);
}

#[test]
fn test_nested_checkpoints() {
    let g = graph(PATH3);
    let mut ctx = SearchContext::new(&g);

    let cp1 = ctx.trail.checkpoint();
    ctx.include_vertex(vertex(&g, "a"));
    let cp2 = ctx.trail.checkpoint();
    ctx.include_vertex(vertex(&g, "d"));
    ctx.record_cover();

    ctx.trail.rewind_to(cp2);
    ctx.include_vertex(vertex(&g, "b"));
    ctx.record_cover();

    ctx.trail.rewind_to(cp1);
    ctx.record_cover();

    // Recorded covers are not trailed
    assert_eq!(
        ctx.covers,
        vec![
            VertexCover::new(["a", "d"]),
            VertexCover::new(["a", "b"]),
            VertexCover::default(),
        ]
    );
}

#[test]
fn test_independent_search_contexts() {
    let g = graph(PATH3);
    let mut ctx1 = SearchContext::new(&g);
    let mut ctx2 = SearchContext::new(&g);

    ctx1.include_vertex(vertex(&g, "a"));
    ctx2.include_vertex(vertex(&g, "d"));

    assert_eq!(ctx1.current_cover(), VertexCover::new(["a"]));
    assert_eq!(ctx2.current_cover(), VertexCover::new(["d"]));
}
