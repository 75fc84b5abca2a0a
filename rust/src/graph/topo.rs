//! Topological ordering of the task graph.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::{Dependency, Task};

use super::index::DependencyIndex;
use super::GraphError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Open,
    Done,
}

/// Order tasks so that every predecessor precedes its successors.
///
/// Runs a depth-first search over predecessor edges and emits each task
/// once all of its predecessors are emitted, so tasks with no ordering
/// constraint between them keep their input order. Fails with
/// [`GraphError::CyclicDependency`] as soon as the search re-enters a task
/// on its own path, carrying that cycle in dependency direction.
///
/// Only ids in [`DependencyIndex::task_ids`] are emitted; predecessors
/// missing from the task list are skipped.
pub fn topological_sort(index: &DependencyIndex) -> Result<Vec<String>, GraphError> {
    let known: FxHashSet<&str> = index.task_ids().iter().map(String::as_str).collect();
    let mut marks: FxHashMap<&str, Mark> =
        FxHashMap::with_capacity_and_hasher(index.len(), Default::default());
    let mut order: Vec<String> = Vec::with_capacity(index.len());

    for root in index.task_ids() {
        if marks.contains_key(root.as_str()) {
            continue;
        }

        let mut stack: Vec<(&str, usize)> = vec![(root.as_str(), 0)];
        marks.insert(root.as_str(), Mark::Open);

        while let Some(frame) = stack.last_mut() {
            let (node, child) = *frame;
            let predecessors = index.predecessors(node);

            if child >= predecessors.len() {
                marks.insert(node, Mark::Done);
                order.push(node.to_string());
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let prev = predecessors[child].task_id.as_str();
            if !known.contains(prev) {
                continue;
            }
            match marks.get(prev) {
                None => {
                    marks.insert(prev, Mark::Open);
                    stack.push((prev, 0));
                }
                Some(Mark::Open) => {
                    // The stack walks against edge direction; reverse it so
                    // the reported cycle reads from -> to.
                    let pos = stack.iter().position(|&(id, _)| id == prev).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        stack[pos..].iter().map(|&(id, _)| id.to_string()).collect();
                    cycle.push(prev.to_string());
                    cycle.reverse();
                    return Err(GraphError::CyclicDependency {
                        cycles: vec![cycle],
                    });
                }
                Some(Mark::Done) => {}
            }
        }
    }

    Ok(order)
}

/// Validate the inputs, then run [`topological_sort`].
///
/// Dangling endpoints and other input errors are reported as
/// [`GraphError`] before any ordering is attempted.
pub fn sort_tasks(tasks: &[Task], dependencies: &[Dependency]) -> Result<Vec<String>, GraphError> {
    topological_sort(&DependencyIndex::validated(tasks, dependencies)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tasks(ids: &[&str]) -> Vec<Task> {
        let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        ids.iter().map(|id| Task::new(*id, day, day)).collect()
    }

    fn deps(edges: &[(&str, &str)]) -> Vec<Dependency> {
        edges.iter().map(|(f, t)| Dependency::new(*f, *t)).collect()
    }

    fn position(order: &[String], id: &str) -> usize {
        order.iter().position(|x| x == id).unwrap()
    }

    #[test]
    fn test_chain_order() {
        let order = sort_tasks(&tasks(&["a", "b", "c"]), &deps(&[("a", "b"), ("b", "c")])).unwrap();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reverse_listed_chain() {
        let order = sort_tasks(&tasks(&["c", "b", "a"]), &deps(&[("a", "b"), ("b", "c")])).unwrap();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_every_edge_points_forward() {
        let edges = [
            ("a", "d"),
            ("b", "d"),
            ("c", "e"),
            ("d", "f"),
            ("e", "f"),
            ("a", "e"),
        ];
        let order = sort_tasks(&tasks(&["f", "e", "d", "c", "b", "a"]), &deps(&edges)).unwrap();
        assert_eq!(order.len(), 6);
        for (from, to) in edges {
            assert!(position(&order, from) < position(&order, to), "{from} before {to}");
        }
    }

    #[test]
    fn test_independent_tasks_keep_input_order() {
        let order = sort_tasks(&tasks(&["x", "y", "z"]), &[]).unwrap();
        assert_eq!(order, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_graph() {
        assert!(sort_tasks(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_cycle_fails_with_cycle() {
        let err = sort_tasks(
            &tasks(&["a", "b", "c"]),
            &deps(&[("a", "b"), ("b", "c"), ("c", "a")]),
        )
        .unwrap_err();
        match err {
            GraphError::CyclicDependency { cycles } => {
                assert_eq!(cycles, vec![vec!["a", "b", "c", "a"]]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dangling_predecessor_reported() {
        let err = sort_tasks(&tasks(&["a"]), &deps(&[("ghost", "a")])).unwrap_err();
        assert_eq!(
            err,
            GraphError::DanglingDependency {
                from: "ghost".to_string(),
                to: "a".to_string(),
                missing: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_unchecked_index_emits_only_known_tasks() {
        let index = DependencyIndex::build(&tasks(&["a", "b"]), &deps(&[("ghost", "a"), ("a", "b")]));
        assert_eq!(topological_sort(&index).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_cycle_downstream_of_acyclic_part() {
        let err = sort_tasks(
            &tasks(&["root", "a", "b"]),
            &deps(&[("root", "a"), ("a", "b"), ("b", "a")]),
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::CyclicDependency { .. }));
    }
}
