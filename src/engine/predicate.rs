// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Steps of a subset-enumeration program.
//!
//! A program is a list of predicates run in order against a
//! [`SearchContext`]. The cover program is
//! `Subset -> [counting] -> RecordCover -> Fail`: `Subset` decides one
//! vertex per round by offering an exclude/include choice, `RecordCover`
//! copies the finished subset out, and the final `Fail` drives the engine
//! back into the most recent undecided vertex.
//!
//! # Example
//!
//! A step that puts exactly one vertex into the subset:
//!
//! ```
//! use cover_tree_search::context::SearchContext;
//! use cover_tree_search::engine::{EngineBuilder, Predicate, PredicateResult};
//! use cover_tree_search::graph::{Graph, VertexId};
//! use cover_tree_search::predicates::{FailPredicate, RecordCoverPredicate};
//!
//! #[derive(Debug)]
//! struct SingleVertex;
//!
//! impl Predicate for SingleVertex {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(ctx.vertex_count())
//!     }
//!
//!     fn retry_pred(
//!         &mut self,
//!         ctx: &mut SearchContext,
//!         _round: usize,
//!         choice: usize,
//!     ) -> PredicateResult {
//!         ctx.include_vertex(VertexId::from(choice));
//!         PredicateResult::Success
//!     }
//! }
//!
//! let graph: Graph = "a,b;b,c".parse().unwrap();
//! let mut ctx = SearchContext::new(&graph);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(SingleVertex))
//!     .add(Box::new(RecordCoverPredicate))
//!     .terminal(FailPredicate)
//!     .build();
//!
//! assert!(engine.search(&mut ctx).is_none());
//! let sizes: Vec<usize> = ctx.covers.iter().map(|c| c.size()).collect();
//! assert_eq!(sizes, vec![1, 1, 1]);
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// What a step tells the engine to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Go on to the next step.
    Success,

    /// Run this step again with `round + 1`. The subset step uses this to
    /// walk the vertices one round each.
    SuccessSamePredicate,

    /// Undo back to the last open choice.
    Failure,

    /// Open a choice point with this many alternatives, e.g. exclude/include.
    Choices(usize),

    /// Hand control back to the caller with the subset intact.
    Suspend,
}

/// A step that may end a program: it never returns `Success`.
///
/// [`EngineBuilder::terminal`](crate::engine::EngineBuilder::terminal) only
/// accepts these.
pub trait TerminalPredicate: Predicate {}

/// One step of a program.
///
/// `try_pred` runs when the engine reaches the step. If it answers
/// `Choices(n)`, the engine calls `retry_pred` with choice `0`, and with the
/// next choice each time a later step fails, until all `n` are spent. The
/// trail is rewound to the choice point before every retry, so vertices
/// included by an earlier alternative are gone.
pub trait Predicate: Debug {
    /// Run the step for `round`, which counts `SuccessSamePredicate` repeats.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Take alternative `choice` after `try_pred` opened a choice point.
    ///
    /// Must not return `Choices` or `Suspend`.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{} opened no choices", self.name());
    }

    /// Label used in engine traces.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
