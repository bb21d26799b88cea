//! Link graph traversal

use crate::error::Result;
use std::collections::HashSet;

/// Iterative depth-first walk from `root`.
///
/// Returns nodes in visit order. A neighbor is pushed only if it has not been
/// visited and is not already waiting on the stack, so every reachable node
/// appears exactly once, root first.
pub(crate) fn depth_first<F>(root: u32, mut neighbors: F) -> Result<Vec<u32>>
where
    F: FnMut(u32) -> Result<Vec<u32>>,
{
    let mut stack = vec![root];
    let mut waiting = HashSet::from([root]);
    let mut seen = HashSet::new();
    let mut visited = Vec::new();

    while let Some(current) = stack.pop() {
        waiting.remove(&current);
        seen.insert(current);
        visited.push(current);

        for next in neighbors(current)? {
            if !seen.contains(&next) && waiting.insert(next) {
                stack.push(next);
            }
        }
    }

    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_visit_order() {
        let graph: HashMap<u32, Vec<u32>> =
            HashMap::from([(0, vec![1, 2]), (1, vec![0, 3]), (2, vec![3]), (3, vec![])]);

        let order = depth_first(0, |id| Ok(graph.get(&id).cloned().unwrap_or_default())).unwrap();
        // Last pushed is popped first
        assert_eq!(order, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_cycles_terminate() {
        let order = depth_first(0, |id| Ok(vec![(id + 1) % 3])).unwrap();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
