// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail so that every choice
//! point sees the state it had when its choices were first offered.
//!
//! # Execution Model
//!
//! The engine maintains a stack of predicate execution states:
//! 1. Call try_pred(round) on the top entry
//! 2. If Success: push an entry for the next predicate
//! 3. If SuccessSamePredicate: push an entry for the same predicate, round + 1
//! 4. If Choices(n): turn the entry into a choice point, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the most recent choice point
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use cover_tree_search::context::SearchContext;
//! use cover_tree_search::engine::EngineBuilder;
//! use cover_tree_search::graph::Graph;
//! use cover_tree_search::predicates::{RecordCoverPredicate, SubsetPredicate, FailPredicate};
//!
//! let graph: Graph = "a,b;b,c".parse().unwrap();
//! let mut ctx = SearchContext::new(&graph);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(SubsetPredicate))
//!     .add(Box::new(RecordCoverPredicate))
//!     .terminal(FailPredicate)
//!     .build();
//!
//! // Fails after exhausting every subset
//! assert!(engine.search(&mut ctx).is_none());
//! assert_eq!(ctx.covers.len(), 8);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use tracing::trace;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether this entry is a choice point.
    in_choice_mode: bool,

    /// Next choice to try (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,

    /// Trail position when the search started.
    base_checkpoint: usize,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the program ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
            base_checkpoint: 0,
        }
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - calling search() again resumes by
    ///   backtracking into the most recent choice point
    /// - `None` if exhausted - every choice has been tried, and the trail is
    ///   back where it was when the search started
    ///
    /// Results are communicated through side effects on `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without FAIL or
    /// SUSPEND, or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.stack.is_empty() {
            if self.predicates.is_empty() {
                return None;
            }
            self.base_checkpoint = ctx.trail.checkpoint();
            self.stack.push(StackEntry::new(0, 0, self.base_checkpoint));
        } else {
            self.backtrack();
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                ctx.trail.rewind_to(self.base_checkpoint);
                return None;
            };
            ctx.trail.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            if !entry.in_choice_mode {
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => self.backtrack(),
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.checkpoint();
                        }
                    }
                    PredicateResult::Suspend => return Some(self),
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.backtrack();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Pop the current entry and every deterministic entry below it,
    /// leaving the most recent choice point on top.
    fn backtrack(&mut self) {
        self.stack.pop();
        while let Some(top) = self.stack.last() {
            if top.in_choice_mode {
                break;
            }
            self.stack.pop();
        }
        trace!(depth = self.stack.len(), "backtrack");
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0, ctx.trail.checkpoint()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack.push(StackEntry::new(pred_index, next_round, ctx.trail.checkpoint()));
    }

    /// Returns (try_count, retry_count): how many times predicates were
    /// tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for a predicate program that must end with a terminal predicate.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: T) -> TerminatedBuilder {
        self.predicates.push(Box::new(predicate));
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete predicate program, ready to build into an engine.
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::predicates::{FailPredicate, SuspendPredicate};

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that offers `n` choices, all of which succeed.
    #[derive(Debug)]
    struct Choose(usize);

    impl Predicate for Choose {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.0)
        }

        fn retry_pred(
            &mut self,
            _ctx: &mut SearchContext,
            _round: usize,
            _choice: usize,
        ) -> PredicateResult {
            PredicateResult::Success
        }
    }

    fn ctx() -> SearchContext {
        SearchContext::new(&Graph::new())
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = ctx();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(SuspendPredicate)
            .build();

        let engine = engine.search(&mut ctx);
        assert!(engine.is_some());
        let engine = engine.unwrap();
        assert_eq!(engine.statistics(), (2, 0));
    }

    #[test]
    fn test_resume_after_suspend_exhausts() {
        let mut ctx = ctx();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(SuspendPredicate)
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        // No choice point to resume from
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_choices_then_fail_terminates() {
        let mut ctx = ctx();
        let engine = SearchEngine::new(vec![
            Box::new(Choose(3)),
            Box::new(AlwaysSucceed),
            Box::new(FailPredicate),
        ]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_resume_visits_every_choice() {
        let mut ctx = ctx();
        let mut engine = EngineBuilder::new()
            .add(Box::new(Choose(2)))
            .add(Box::new(Choose(3)))
            .terminal(SuspendPredicate)
            .build();

        let mut solutions = 0;
        loop {
            match engine.search(&mut ctx) {
                Some(next) => {
                    solutions += 1;
                    engine = next;
                }
                None => break,
            }
        }
        assert_eq!(solutions, 6);
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = ctx();
        let engine = SearchEngine::new(vec![Box::new(FailPredicate)]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = ctx();
        let engine = SearchEngine::new(vec![]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = ctx();
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);
        let _ = engine.search(&mut ctx);
    }
}
