use super::builder::{StepGraph, UNKNOWN_STEP};
use ahash::AHashSet;

impl StepGraph {
    /// Every transitive predecessor of `step_number`, in discovery order.
    ///
    /// The traversal carries a visited set, so it terminates even on a
    /// malformed graph where a back-reference points forward and forms a
    /// cycle. The [`UNKNOWN_STEP`] sentinel appears in the result when a
    /// dangling reference contributed an edge.
    pub fn transitive_predecessors(&self, step_number: usize) -> Vec<usize> {
        let mut visited = AHashSet::new();
        let mut closure = Vec::new();
        let mut stack: Vec<usize> = self.predecessors(step_number).to_vec();
        while let Some(predecessor) = stack.pop() {
            if !visited.insert(predecessor) {
                continue;
            }
            closure.push(predecessor);
            stack.extend_from_slice(self.predecessors(predecessor));
        }
        closure
    }

    /// Whether a step is currently blocked by a pending predecessor.
    ///
    /// `pending[i]` is `true` while step `i` (0-based) still needs doing;
    /// the vector is owned and mutated by the caller and only read here.
    ///
    /// A step with no predecessors is never blocked. Otherwise the step is
    /// blocked as soon as *any* transitive predecessor is still pending --
    /// not only when all of them are done. Predecessors without a
    /// completion entry (the unknown-producer sentinel, or a step number
    /// past the end of the vector) never block.
    pub fn step_is_blocked(&self, step_number: usize, pending: &[bool]) -> bool {
        let closure = self.transitive_predecessors(step_number);
        if closure.is_empty() {
            return false;
        }

        closure
            .iter()
            .any(|&n| n != UNKNOWN_STEP && pending.get(n - 1).copied().unwrap_or(false))
    }
}
