//! Tests for best-first search in single-best and all-best modes

#[cfg(test)]
mod tests {
    use searchkit::search::capability::{Identifiable, Prioritized, Scored, Successors};
    use searchkit::search::priority::{
        search_all_best, search_all_best_unpruned, search_best, search_best_unpruned,
    };

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Visit {
        node: usize,
        cost: u64,
    }

    struct Graph {
        edges: Vec<Vec<(usize, u64)>>,
        goals: Vec<usize>,
    }

    impl Graph {
        fn new(nodes: usize, edges: &[(usize, usize, u64)], goals: &[usize]) -> Self {
            let mut adjacency = vec![Vec::new(); nodes];
            for &(from, to, cost) in edges {
                adjacency[from].push((to, cost));
            }
            Self {
                edges: adjacency,
                goals: goals.to_vec(),
            }
        }

        // Right/down lattice with unit costs, goal in the far corner
        fn lattice(side: usize) -> Self {
            let mut edges = Vec::new();
            for row in 0..side {
                for col in 0..side {
                    let node = row * side + col;
                    if col + 1 < side {
                        edges.push((node, node + 1, 1));
                    }
                    if row + 1 < side {
                        edges.push((node, node + side, 1));
                    }
                }
            }
            Self::new(side * side, &edges, &[side * side - 1])
        }
    }

    impl Successors for Graph {
        type State = Visit;

        fn successors(&self, state: &Visit, out: &mut Vec<Visit>) {
            out.extend(self.edges[state.node].iter().map(|&(node, step)| Visit {
                node,
                cost: state.cost + step,
            }));
        }
    }

    impl Scored for Graph {
        type Score = u64;

        fn score(&self, state: &Visit) -> u64 {
            state.cost
        }
    }

    impl Identifiable for Graph {
        type Identity = usize;

        fn identity(&self, state: &Visit) -> usize {
            state.node
        }
    }

    impl Prioritized for Graph {
        type Priority = u64;

        fn priority(&self, state: &Visit) -> u64 {
            state.cost
        }

        fn is_end(&self, state: &Visit) -> bool {
            self.goals.contains(&state.node)
        }
    }

    const START: Visit = Visit { node: 0, cost: 0 };

    // Tests the cheapest route wins over a route with a cheaper first edge
    // Verified by popping the largest priority first
    #[test]
    fn test_search_best_finds_cheapest_route() {
        let graph = Graph::new(
            4,
            &[(0, 1, 1), (1, 3, 10), (0, 2, 4), (2, 3, 2)],
            &[3],
        );

        let outcome = search_best(&graph, START);
        assert_eq!(outcome.solution, Some(Visit { node: 3, cost: 6 }));
    }

    // Tests an unreachable goal exhausts the frontier and reports nothing
    // Verified by returning the last popped state when the frontier empties
    #[test]
    fn test_search_best_unreachable_goal() {
        let graph = Graph::new(3, &[(0, 1, 1), (1, 0, 1)], &[2]);

        let outcome = search_best(&graph, START);
        assert_eq!(outcome.solution, None);
        assert_eq!(outcome.stats.expanded, 2);
    }

    // Tests a terminal initial state is returned without expansion
    // Verified by expanding states before the end test
    #[test]
    fn test_search_best_initial_is_terminal() {
        let graph = Graph::new(2, &[(0, 1, 1)], &[0]);

        let outcome = search_best(&graph, START);
        assert_eq!(outcome.solution, Some(START));
        assert_eq!(outcome.stats.expanded, 0);
        assert_eq!(outcome.stats.enqueued, 1);
    }

    // Tests every goal tied at the best score is collected and worse ones are not
    // Verified by keeping terminal states with a greater score
    #[test]
    fn test_search_all_best_collects_ties() {
        let graph = Graph::new(
            6,
            &[(0, 1, 2), (0, 2, 2), (0, 3, 5), (0, 4, 2), (4, 5, 1)],
            &[1, 2, 3],
        );

        let outcome = search_all_best(&graph, START);
        let nodes: Vec<_> = outcome.solution.iter().map(|visit| visit.node).collect();
        assert_eq!(nodes, vec![1, 2]);
        assert!(outcome.solution.iter().all(|visit| visit.cost == 2));
        assert_eq!(outcome.stats.pruned_by_bound, 1);
    }

    // Tests all-best with no reachable goal yields an empty list
    // Verified by pushing the initial state into the result unconditionally
    #[test]
    fn test_search_all_best_empty() {
        let graph = Graph::new(2, &[(0, 1, 1)], &[]);
        let outcome = search_all_best(&graph, START);
        assert!(outcome.solution.is_empty());
    }

    // Tests duplicate pruning changes work done but not the optimal score
    // Verified by skipping the dominance check in the pruned entry point
    #[test]
    fn test_pruned_and_unpruned_agree_on_score() {
        let graph = Graph::lattice(4);

        let pruned = search_best(&graph, START);
        let unpruned = search_best_unpruned(&graph, START);

        let pruned_cost = pruned.solution.map(|visit| visit.cost);
        let unpruned_cost = unpruned.solution.map(|visit| visit.cost);
        assert_eq!(pruned_cost, Some(6));
        assert_eq!(pruned_cost, unpruned_cost);
        assert!(pruned.stats.expanded <= 16);
        assert!(unpruned.stats.expanded > pruned.stats.expanded);
        assert!(pruned.stats.pruned_by_dominance > 0);
        assert_eq!(unpruned.stats.pruned_by_dominance, 0);
    }

    // Tests identity pruning collapses equal-cost paths to one terminal state
    // Verified by admitting equal scores into the dominance table
    #[test]
    fn test_all_best_identity_collapses_paths() {
        let graph = Graph::new(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)], &[3]);

        let pruned = search_all_best(&graph, START);
        let unpruned = search_all_best_unpruned(&graph, START);

        assert_eq!(pruned.solution, vec![Visit { node: 3, cost: 2 }]);
        assert_eq!(unpruned.solution.len(), 2);
        assert!(unpruned.solution.iter().all(|visit| visit.cost == 2));
    }

    // Tests a cheaper late path to a known identity is still admitted
    // Verified by rejecting every identity seen before
    #[test]
    fn test_dominance_admits_cheaper_rediscovery() {
        let graph = Graph::new(
            5,
            &[(0, 1, 5), (0, 2, 1), (2, 3, 1), (3, 1, 1), (1, 4, 1)],
            &[4],
        );

        let outcome = search_best(&graph, START);
        assert_eq!(outcome.solution, Some(Visit { node: 4, cost: 4 }));
    }
}
