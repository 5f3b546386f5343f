//! A* search over the board state graph.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use taquin_core::{Board, Slide};

use crate::Solution;

/// The goal configuration is unreachable from the initial board.
///
/// Raised by the closed-form parity check before any search. The frontier
/// running empty reports the same error, as a consistency backstop the
/// parity check should make unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("puzzle is not solvable: the goal is unreachable from this configuration")]
pub struct NotSolvableError;

/// Counters collected during a search.
///
/// Purely observational: the numbers describe the work the search performed
/// and have no effect on the solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    expanded: usize,
    generated: usize,
    max_frontier_len: usize,
}

impl SolverStats {
    /// Returns the number of boards expanded (popped and not stale).
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the number of search nodes created, including the initial
    /// one and nodes later discarded as stale.
    #[must_use]
    pub fn generated(&self) -> usize {
        self.generated
    }

    /// Returns the largest frontier length observed.
    #[must_use]
    pub fn max_frontier_len(&self) -> usize {
        self.max_frontier_len
    }
}

// Arena-backed search node; `parent` is an index into the arena, used only
// to walk the path backwards once the goal is popped.
struct SearchNode {
    board: Board,
    g: u32,
    parent: Option<usize>,
    slide: Option<Slide>,
}

// Min-ordering key via Reverse: f first, then h (prefer nodes closer to the
// goal), then insertion sequence (FIFO among exact ties). `seq` is unique,
// so `node` never participates in the comparison.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    f: u32,
    h: u32,
    seq: u64,
    node: usize,
}

/// An optimal sliding-tile solver for a single initial board.
///
/// Runs A* with the Manhattan-distance heuristic over the graph of board
/// configurations. The heuristic is admissible, so the first goal popped
/// from the frontier carries a minimum-length move sequence.
///
/// Each solver owns its frontier and visited map exclusively and boards are
/// immutable, so concurrent solves never share mutable state. A solve is a
/// single synchronous computation: no cancellation, no retry, exactly one
/// outcome per call, and equal inputs always produce equal outcomes.
///
/// # Examples
///
/// ```
/// use taquin_core::Board;
/// use taquin_solver::Solver;
///
/// let board = Board::new(vec![1, 2, 3, 4, 0, 6, 7, 5, 8])?;
/// let solution = Solver::new(board).solve()?;
/// assert_eq!(solution.moves(), 2);
/// assert!(solution.states().last().unwrap().is_goal());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    initial: Board,
}

impl Solver {
    /// Creates a solver for the given initial board.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        Self { initial }
    }

    /// Returns the initial board this solver searches from.
    #[must_use]
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// Finds a minimum-move solution.
    ///
    /// # Errors
    ///
    /// Returns [`NotSolvableError`] when the initial board's parity puts the
    /// goal in the unreachable half of the state space. No partial solution
    /// is ever returned.
    pub fn solve(&self) -> Result<Solution, NotSolvableError> {
        self.solve_with_stats().map(|(solution, _)| solution)
    }

    /// Finds a minimum-move solution along with search statistics.
    ///
    /// The solution is identical to [`solve`](Self::solve)'s: ties on the
    /// frontier are broken by lower heuristic first and insertion order
    /// second, so repeated solves of equal boards return identical move
    /// sequences.
    ///
    /// # Errors
    ///
    /// Returns [`NotSolvableError`] exactly as [`solve`](Self::solve) does.
    pub fn solve_with_stats(&self) -> Result<(Solution, SolverStats), NotSolvableError> {
        if !self.initial.is_solvable() {
            return Err(NotSolvableError);
        }

        let mut stats = SolverStats::default();
        let mut arena = Vec::new();
        let mut frontier = BinaryHeap::new();
        // Board -> lowest g at which it was expanded
        let mut visited: HashMap<Board, u32> = HashMap::new();
        let mut seq = 0_u64;

        let h = self.initial.manhattan_distance();
        arena.push(SearchNode {
            board: self.initial.clone(),
            g: 0,
            parent: None,
            slide: None,
        });
        frontier.push(Reverse(FrontierEntry {
            f: h,
            h,
            seq,
            node: 0,
        }));
        stats.generated = 1;
        stats.max_frontier_len = 1;

        while let Some(Reverse(entry)) = frontier.pop() {
            let board = arena[entry.node].board.clone();
            let g = arena[entry.node].g;

            if board.is_goal() {
                return Ok((reconstruct(&arena, entry.node), stats));
            }
            if visited.get(&board).is_some_and(|&best| best <= g) {
                // Stale: this board was already expanded at least as cheaply.
                continue;
            }
            visited.insert(board.clone(), g);
            stats.expanded += 1;

            let next_g = g + 1;
            for (slide, next_board) in board.neighbors() {
                if visited.get(&next_board).is_some_and(|&best| best <= next_g) {
                    continue;
                }
                let h = next_board.manhattan_distance();
                seq += 1;
                arena.push(SearchNode {
                    board: next_board,
                    g: next_g,
                    parent: Some(entry.node),
                    slide: Some(slide),
                });
                frontier.push(Reverse(FrontierEntry {
                    f: next_g + h,
                    h,
                    seq,
                    node: arena.len() - 1,
                }));
                stats.generated += 1;
            }
            stats.max_frontier_len = stats.max_frontier_len.max(frontier.len());
        }

        // Unreachable while the parity check above holds; an exhausted
        // frontier reports the same terminal outcome.
        Err(NotSolvableError)
    }
}

fn reconstruct(arena: &[SearchNode], goal: usize) -> Solution {
    let mut states = Vec::new();
    let mut slides = Vec::new();
    let mut cursor = Some(goal);
    while let Some(index) = cursor {
        let node = &arena[index];
        states.push(node.board.clone());
        if let Some(slide) = node.slide {
            slides.push(slide);
        }
        cursor = node.parent;
    }
    states.reverse();
    slides.reverse();
    Solution::new(states, slides)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{SeedableRng as _, seq::IndexedRandom as _};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn replay(initial: &Board, slides: &[Slide]) -> Board {
        slides.iter().fold(initial.clone(), |board, &slide| {
            board.slide(slide).expect("solution slides are legal")
        })
    }

    /// Shortest-path distance by plain breadth-first search.
    fn bfs_distance(start: &Board) -> Option<usize> {
        let mut distances = HashMap::from([(start.clone(), 0_usize)]);
        let mut queue = std::collections::VecDeque::from([start.clone()]);
        while let Some(board) = queue.pop_front() {
            let distance = distances[&board];
            if board.is_goal() {
                return Some(distance);
            }
            for (_, next) in board.neighbors() {
                if !distances.contains_key(&next) {
                    distances.insert(next.clone(), distance + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    #[test]
    fn test_goal_solves_immediately() {
        let goal = Board::goal(3);
        let solution = Solver::new(goal.clone()).solve().unwrap();
        assert_eq!(solution.moves(), 0);
        assert_eq!(solution.states(), &[goal]);
        assert!(solution.slides().is_empty());
    }

    #[test]
    fn test_two_move_puzzle() {
        let initial = Board::new(vec![1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let solution = Solver::new(initial.clone()).solve().unwrap();

        assert_eq!(solution.moves(), 2);
        assert_eq!(solution.states().len(), 3);
        assert_eq!(solution.states()[0], initial);
        assert!(solution.states()[2].is_goal());

        // Replaying the slides from the initial board reaches the goal.
        let replayed = replay(&initial, solution.slides());
        assert_eq!(replayed, Board::goal(3));
        assert_eq!(replayed.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    }

    #[test]
    fn test_replay_reproduces_states() {
        let initial = Board::new(vec![8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
        let solution = Solver::new(initial.clone()).solve().unwrap();

        let mut board = initial;
        for (slide, state) in solution.slides().iter().zip(&solution.states()[1..]) {
            board = board.slide(*slide).unwrap();
            assert_eq!(&board, state);
        }
    }

    #[test]
    fn test_unsolvable_board_is_rejected() {
        let initial = Board::new(vec![1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
        assert_eq!(Solver::new(initial).solve().unwrap_err(), NotSolvableError);
    }

    #[test]
    fn test_two_by_two() {
        let initial = Board::new(vec![3, 1, 0, 2]).unwrap();
        let solution = Solver::new(initial).solve().unwrap();
        assert_eq!(solution.moves(), 3);
        assert_eq!(solution.slides(), &[Slide::Up, Slide::Right, Slide::Down]);
    }

    #[test]
    fn test_hardest_eight_puzzle() {
        // One of the two 8-puzzle configurations at the maximum distance.
        let initial = Board::new(vec![8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
        let solution = Solver::new(initial).solve().unwrap();
        assert_eq!(solution.moves(), 31);
    }

    #[test]
    fn test_solve_is_deterministic() {
        // Pinned tie-break: lower h first, then FIFO insertion order.
        let initial = Board::new(vec![4, 1, 3, 7, 2, 6, 0, 5, 8]).unwrap();
        let first = Solver::new(initial.clone()).solve().unwrap();
        let second = Solver::new(initial).solve().unwrap();
        assert_eq!(first.moves(), second.moves());
        assert_eq!(first.states(), second.states());
        assert_eq!(first.slides(), second.slides());
    }

    #[test]
    fn test_optimal_against_bfs_on_random_scrambles() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x7a71_u64);

        for scramble_len in [5, 10, 20, 40] {
            // Random-walk scrambles are solvable by construction.
            let mut board = Board::goal(3);
            for _ in 0..scramble_len {
                let neighbors: Vec<_> = board.neighbors().collect();
                board = neighbors.choose(&mut rng).unwrap().1.clone();
            }

            let solution = Solver::new(board.clone()).solve().unwrap();
            assert!(solution.moves() <= scramble_len);
            assert_eq!(solution.moves(), bfs_distance(&board).unwrap());

            let replayed = replay(&board, solution.slides());
            assert!(replayed.is_goal());
        }
    }

    #[test]
    fn test_stats_reflect_search_effort() {
        let initial = Board::new(vec![1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let (solution, stats) = Solver::new(initial).solve_with_stats().unwrap();

        assert_eq!(solution.moves(), 2);
        // At least the nodes on the solution path were expanded or popped.
        assert!(stats.expanded() >= 2);
        assert!(stats.generated() > stats.expanded());
        assert!(stats.max_frontier_len() >= 1);
    }

    #[test]
    fn test_solver_exposes_initial_board() {
        let board = Board::goal(3);
        let solver = Solver::new(board.clone());
        assert_eq!(solver.initial(), &board);
    }
}
