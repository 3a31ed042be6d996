//! Tests for readiness/blocking evaluation over a completion vector.
//!
//! `pending[i] == true` means step `i` still needs doing. A step is
//! blocked while any transitive predecessor is pending.
mod common;
use common::*;
use souschef::prelude::*;

#[test]
fn test_three_step_linear_scenario() {
    let graph = StepGraph::build(&linear_recipe());

    // Nothing done yet: step 1 has no prerequisites, the rest are blocked.
    let pending = vec![true, true, true];
    assert!(!graph.step_is_blocked(1, &pending));
    assert!(graph.step_is_blocked(2, &pending));
    assert!(graph.step_is_blocked(3, &pending));

    // Step 1 done: step 2 frees up, step 3 still waits on step 2.
    let pending = vec![false, true, true];
    assert!(!graph.step_is_blocked(2, &pending));
    assert!(graph.step_is_blocked(3, &pending));

    // Steps 1 and 2 done: step 3 frees up.
    let pending = vec![false, false, true];
    assert!(!graph.step_is_blocked(3, &pending));
}

#[test]
fn test_blocking_is_transitive() {
    let graph = StepGraph::build(&linear_recipe());

    // Step 2 marked done while step 1 is still pending: step 3 remains
    // blocked through the transitive closure.
    let pending = vec![true, false, true];
    assert!(graph.step_is_blocked(3, &pending));
}

#[test]
fn test_any_pending_predecessor_blocks() {
    // Step 3 consumes products of both step 1 and step 2, which are
    // independent of each other.
    let mut zest = step(0, "zest");
    zest.products = vec![product("p1", ProductKind::Ingredient, "lemon zest")];

    let mut juice = step(1, "juice");
    juice.products = vec![product("p2", ProductKind::Ingredient, "lemon juice")];

    let mut combine = step(2, "combine");
    combine.ingredients = vec![
        product_ingredient("p1", "lemon zest"),
        product_ingredient("p2", "lemon juice"),
    ];

    let graph = StepGraph::build(&Recipe::new("lemon", vec![zest, juice, combine]));

    // One of two prerequisites done: still blocked.
    assert!(graph.step_is_blocked(3, &[false, true, true]));
    assert!(graph.step_is_blocked(3, &[true, false, true]));
    assert!(!graph.step_is_blocked(3, &[false, false, true]));
}

#[test]
fn test_readiness_monotonicity() {
    let graph = StepGraph::build(&linear_recipe());

    // Flipping any predecessor from done back to pending can only move a
    // dependent step from unblocked to blocked, never the reverse.
    for target in 1..=3 {
        for flipped in 0..3 {
            let mut done = vec![false, false, false];
            let before = graph.step_is_blocked(target, &done);
            done[flipped] = true;
            let after = graph.step_is_blocked(target, &done);
            assert!(
                after || !before,
                "step {} went from blocked to unblocked when step {} became pending",
                target,
                flipped + 1
            );
        }
    }
}

#[test]
fn test_no_predecessors_means_not_blocked() {
    let graph = StepGraph::build(&Recipe::new("solo", vec![step(0, "boil")]));
    assert!(!graph.step_is_blocked(1, &[true]));
}

#[test]
fn test_unknown_producer_never_blocks() {
    let mut consumer = step(0, "stir");
    consumer.ingredients = vec![product_ingredient("missing", "mystery paste")];
    let graph = StepGraph::build(&Recipe::new("dangling", vec![consumer]));

    // The only predecessor is the unknown sentinel; it carries no
    // completion state and must not block.
    assert_eq!(graph.predecessors(1), &[UNKNOWN_STEP]);
    assert!(!graph.step_is_blocked(1, &[true]));
}

#[test]
fn test_short_completion_vector_never_blocks() {
    let graph = StepGraph::build(&linear_recipe());

    // A predecessor with no slot in the vector is treated as not pending.
    assert!(!graph.step_is_blocked(3, &[false]));
}

#[test]
fn test_malformed_cycle_terminates() {
    // Two steps consuming each other's products: impossible through the
    // UI, but the traversal must terminate and still answer.
    let mut first = step(0, "ferment");
    first.ingredients = vec![product_ingredient("p2", "starter")];
    first.products = vec![product("p1", ProductKind::Ingredient, "dough")];

    let mut second = step(1, "feed");
    second.ingredients = vec![product_ingredient("p1", "dough")];
    second.products = vec![product("p2", ProductKind::Ingredient, "starter")];

    let graph = StepGraph::build(&Recipe::new("sourdough", vec![first, second]));

    assert!(graph.step_is_blocked(1, &[true, true]));
    assert!(graph.step_is_blocked(2, &[true, true]));
    assert!(!graph.step_is_blocked(1, &[false, false]));
    assert!(!graph.step_is_blocked(2, &[false, false]));
}
