// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates for enumerating vertex subsets.
//!
//! `SubsetPredicate` runs one round per vertex. Each round offers two
//! choices, exclude (0) then include (1). Inclusion is written through the
//! trail, so when the engine backtracks to a round's choice point the subset
//! is exactly what it was when that round began.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::graph::VertexId;

const EXCLUDE: usize = 0;
const INCLUDE: usize = 1;

/// Decide membership of vertex `round`, then move on once every vertex is decided.
#[derive(Debug)]
pub struct SubsetPredicate;

impl Predicate for SubsetPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round >= ctx.vertex_count() {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(2)
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        match choice {
            EXCLUDE => PredicateResult::SuccessSamePredicate,
            INCLUDE => {
                ctx.include_vertex(VertexId::from(round));
                PredicateResult::SuccessSamePredicate
            }
            _ => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Subset"
    }
}

/// Append the subset in progress to `ctx.covers`.
#[derive(Debug)]
pub struct RecordCoverPredicate;

impl Predicate for RecordCoverPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.record_cover();
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "RecordCover"
    }
}
