use crate::model::{Recipe, RecipeStep};
use ahash::AHashMap;
use std::fmt::Write as _;

/// Sentinel node number for a producer that could not be resolved.
///
/// Real step numbers are 1-based, so 0 is never a valid node key. Edges
/// from the sentinel carry no completion state and never block readiness.
pub const UNKNOWN_STEP: usize = 0;

/// A `product id -> producing step index` lookup table, built once per
/// recipe so that back-reference resolution is O(1) instead of a scan of
/// every step's product list at every call site.
#[derive(Debug, Clone, Default)]
pub struct ProductIndex {
    by_id: AHashMap<String, usize>,
}

impl ProductIndex {
    pub fn new(recipe: &Recipe) -> Self {
        let mut by_id = AHashMap::new();
        for step in &recipe.steps {
            for product in &step.products {
                by_id.insert(product.id.clone(), step.index);
            }
        }
        Self { by_id }
    }

    /// The 0-based index of the step producing `product_id`, if any.
    pub fn producing_step(&self, product_id: &str) -> Option<usize> {
        self.by_id.get(product_id).copied()
    }

    /// The 1-based display number of the producing step, or `-1` when the
    /// reference does not resolve. Dangling references are display data,
    /// not errors.
    pub fn display_number(&self, product_id: &str) -> i64 {
        match self.producing_step(product_id) {
            Some(index) => (index + 1) as i64,
            None => -1,
        }
    }
}

/// A directed graph over the steps of one recipe.
///
/// One node per step, keyed by the 1-based display step number. An edge
/// runs producer -> consumer whenever a consumer step holds a
/// product-backed ingredient or instrument whose reference resolves to a
/// product of the producer step. Vessels are not wired into the graph.
///
/// The builder performs no cycle detection: acyclicity follows from
/// well-formed input, where product references only point at earlier
/// steps. Traversals over the graph carry their own visited sets and stay
/// safe even when that assumption is violated.
#[derive(Debug, Clone)]
pub struct StepGraph {
    /// Preparation names, indexed by step number - 1. Doubles as the node
    /// list: step numbers `1..=labels.len()` are the graph's nodes.
    labels: Vec<String>,
    /// Consumer step number -> producer step numbers (may contain
    /// [`UNKNOWN_STEP`] for dangling references).
    predecessors: AHashMap<usize, Vec<usize>>,
}

impl StepGraph {
    /// Builds the dependency graph for a recipe.
    pub fn build(recipe: &Recipe) -> Self {
        let products = ProductIndex::new(recipe);

        // Step index is the stable identity; the steps array is not
        // guaranteed to arrive sorted by it.
        let mut labels = vec![String::new(); recipe.steps.len()];
        for step in &recipe.steps {
            if let Some(slot) = labels.get_mut(step.index) {
                *slot = step.preparation.clone();
            }
        }

        let mut predecessors: AHashMap<usize, Vec<usize>> = AHashMap::new();
        for step in &recipe.steps {
            for product_id in consumed_product_ids(step) {
                let producer = match products.producing_step(product_id) {
                    Some(index) => index + 1,
                    None => {
                        log::debug!(
                            "Step {} references unknown product '{}'",
                            step.display_number(),
                            product_id
                        );
                        UNKNOWN_STEP
                    }
                };

                let entry = predecessors.entry(step.display_number()).or_default();
                if !entry.contains(&producer) {
                    entry.push(producer);
                }
            }
        }

        Self {
            labels,
            predecessors,
        }
    }

    /// Number of step nodes in the graph.
    pub fn step_count(&self) -> usize {
        self.labels.len()
    }

    /// Whether `step_number` is a node of this graph.
    pub fn contains(&self, step_number: usize) -> bool {
        (1..=self.labels.len()).contains(&step_number)
    }

    /// Direct predecessors of a step, in edge insertion order. Unknown
    /// step numbers have none.
    pub fn predecessors(&self, step_number: usize) -> &[usize] {
        self.predecessors
            .get(&step_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Renders the graph as a Graphviz `digraph` for inspection. Dangling
    /// producers surface as a single node labeled `UNKNOWN`.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph recipe {\n");
        for (i, label) in self.labels.iter().enumerate() {
            let _ = writeln!(dot, "    step{} [label=\"{}. {}\"];", i + 1, i + 1, label);
        }
        if self.predecessors.values().flatten().any(|&p| p == UNKNOWN_STEP) {
            dot.push_str("    step0 [label=\"UNKNOWN\"];\n");
        }

        let mut consumers: Vec<&usize> = self.predecessors.keys().collect();
        consumers.sort();
        for consumer in consumers {
            for producer in &self.predecessors[consumer] {
                let _ = writeln!(dot, "    step{} -> step{};", producer, consumer);
            }
        }
        dot.push_str("}\n");
        dot
    }
}

/// Product ids consumed by a step through its ingredients and instruments.
///
/// Vessels are deliberately absent: the surrounding application has never
/// wired vessel back-references into the dependency graph, and downstream
/// readiness behavior depends on that.
fn consumed_product_ids(step: &RecipeStep) -> impl Iterator<Item = &str> {
    let ingredient_refs = step.ingredients.iter().filter_map(|i| i.product_id());
    let instrument_refs = step.instruments.iter().filter_map(|i| i.product_id());
    ingredient_refs.chain(instrument_refs)
}
