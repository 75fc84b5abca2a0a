//! Cycle detection by three-colour depth-first search.
//!
//! Every task starts white. A task turns gray when the search enters it and
//! black once all of its successors are finished. Reaching a gray successor
//! means the current path loops back on itself: the path suffix starting
//! at that successor, closed by the successor again, is one cycle.

use rustc_hash::FxHashMap;

use crate::models::{Dependency, Task};

use super::index::DependencyIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Find every cycle reachable by a DFS rooted at each unvisited task.
///
/// Each cycle is closed: its first and last ids are the same task, and
/// consecutive ids follow dependency direction (`from -> to`). Returns an
/// empty `Vec` for an acyclic graph.
pub fn find_cycles(index: &DependencyIndex) -> Vec<Vec<String>> {
    let mut colors: FxHashMap<&str, Color> =
        FxHashMap::with_capacity_and_hasher(index.len(), Default::default());
    let mut cycles: Vec<Vec<String>> = Vec::new();

    for root in index.task_ids() {
        if colors.get(root.as_str()).copied().unwrap_or(Color::White) != Color::White {
            continue;
        }

        // Frames are (task, next successor to examine); the frame stack is
        // also the current DFS path.
        let mut stack: Vec<(&str, usize)> = vec![(root.as_str(), 0)];
        colors.insert(root.as_str(), Color::Gray);

        while let Some(frame) = stack.last_mut() {
            let (node, child) = *frame;
            let successors = index.successors(node);

            if child >= successors.len() {
                colors.insert(node, Color::Black);
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let next = successors[child].task_id.as_str();
            match colors.get(next).copied().unwrap_or(Color::White) {
                Color::White => {
                    colors.insert(next, Color::Gray);
                    stack.push((next, 0));
                }
                Color::Gray => {
                    if let Some(pos) = stack.iter().position(|&(id, _)| id == next) {
                        let mut cycle: Vec<String> =
                            stack[pos..].iter().map(|&(id, _)| id.to_string()).collect();
                        cycle.push(next.to_string());
                        cycles.push(cycle);
                    }
                }
                Color::Black => {}
            }
        }
    }

    cycles
}

/// Build an index and run [`find_cycles`] over it.
pub fn detect_cycles(tasks: &[Task], dependencies: &[Dependency]) -> Vec<Vec<String>> {
    find_cycles(&DependencyIndex::build(tasks, dependencies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rustc_hash::FxHashSet;

    fn tasks(ids: &[&str]) -> Vec<Task> {
        let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        ids.iter().map(|id| Task::new(*id, day, day)).collect()
    }

    fn deps(edges: &[(&str, &str)]) -> Vec<Dependency> {
        edges.iter().map(|(f, t)| Dependency::new(*f, *t)).collect()
    }

    #[test]
    fn test_acyclic_graph_has_no_cycles() {
        let cycles = detect_cycles(
            &tasks(&["a", "b", "c", "d"]),
            &deps(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]),
        );
        assert!(cycles.is_empty());
    }

    #[test]
    fn test_two_cycle() {
        let cycles = detect_cycles(&tasks(&["a", "b"]), &deps(&[("a", "b"), ("b", "a")]));
        assert_eq!(cycles, vec![vec!["a", "b", "a"]]);
    }

    #[test]
    fn test_three_cycle_contains_exactly_members() {
        let cycles = detect_cycles(
            &tasks(&["a", "b", "c", "d"]),
            &deps(&[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]),
        );
        assert_eq!(cycles.len(), 1);
        let cycle = &cycles[0];
        assert_eq!(cycle.first(), cycle.last());
        let members: FxHashSet<&str> = cycle.iter().map(String::as_str).collect();
        let expected: FxHashSet<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(members, expected);
        assert_eq!(cycle.len(), 4);
    }

    #[test]
    fn test_cycles_in_disconnected_components() {
        let cycles = detect_cycles(
            &tasks(&["a", "b", "x", "y", "z"]),
            &deps(&[("a", "b"), ("b", "a"), ("x", "y"), ("y", "z"), ("z", "x")]),
        );
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0], vec!["a", "b", "a"]);
        assert_eq!(cycles[1], vec!["x", "y", "z", "x"]);
    }

    #[test]
    fn test_cycle_reached_from_acyclic_prefix() {
        // start -> a -> b -> a; the cycle excludes the entry task
        let cycles = detect_cycles(
            &tasks(&["start", "a", "b"]),
            &deps(&[("start", "a"), ("a", "b"), ("b", "a")]),
        );
        assert_eq!(cycles, vec![vec!["a", "b", "a"]]);
    }

    #[test]
    fn test_self_loop_reported_by_unvalidated_index() {
        let cycles = detect_cycles(&tasks(&["a"]), &deps(&[("a", "a")]));
        assert_eq!(cycles, vec![vec!["a", "a"]]);
    }
}
