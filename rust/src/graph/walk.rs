//! Shared traversal used by the forward pass, backward pass and date projector.
//!
//! All three read one hop of neighbours per task: forward propagation reads
//! predecessors, backward propagation reads successors. They differ only in
//! which tasks get visited, which [`Scope`] captures.

use std::convert::Infallible;

use super::index::{DependencyIndex, Edge};

/// Which way values flow along dependency edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Visit in order; each task reads its predecessors.
    Forward,
    /// Visit in reverse order; each task reads its successors.
    Backward,
}

impl Direction {
    /// The edges a task reads when walking in this direction.
    pub fn inputs<'a>(&self, index: &'a DependencyIndex, task_id: &str) -> &'a [Edge] {
        match self {
            Self::Forward => index.predecessors(task_id),
            Self::Backward => index.successors(task_id),
        }
    }
}

/// Which tasks a walk visits.
#[derive(Clone, Copy, Debug)]
pub enum Scope<'a> {
    /// A single task, without regard to the rest of the graph.
    Local(&'a str),
    /// Every task, in the given topological order.
    Global(&'a [String]),
}

/// Visit tasks in `scope`, handing each one its input edges for `direction`.
///
/// Stops at the first error returned by `step`.
pub fn try_walk<'a, E, F>(
    index: &'a DependencyIndex,
    direction: Direction,
    scope: Scope<'a>,
    mut step: F,
) -> Result<(), E>
where
    F: FnMut(&'a str, &'a [Edge]) -> Result<(), E>,
{
    match scope {
        Scope::Local(task_id) => step(task_id, direction.inputs(index, task_id)),
        Scope::Global(order) => {
            let mut visit = |task_id: &'a String| step(task_id, direction.inputs(index, task_id));
            match direction {
                Direction::Forward => order.iter().try_for_each(&mut visit),
                Direction::Backward => order.iter().rev().try_for_each(&mut visit),
            }
        }
    }
}

/// Infallible form of [`try_walk`].
pub fn walk<'a, F>(index: &'a DependencyIndex, direction: Direction, scope: Scope<'a>, mut step: F)
where
    F: FnMut(&'a str, &'a [Edge]),
{
    try_walk(index, direction, scope, |task_id, edges| {
        step(task_id, edges);
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {})
}
