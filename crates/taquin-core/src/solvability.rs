//! Parity-based solvability check.
//!
//! Whether the goal is reachable from a configuration is decided without any
//! search, from the permutation parity of the tile sequence (the classic
//! 15-puzzle theorem). The solver runs this check before touching its
//! frontier so that unsolvable inputs fail fast instead of exhausting the
//! reachable half of the state space.

use crate::Board;

impl Board {
    /// Returns `true` if the goal configuration is reachable from this
    /// board.
    ///
    /// For odd N the board is solvable iff its inversion count is even; for
    /// even N it is solvable iff the inversion count plus the blank's row
    /// counted from the bottom (1-based) is odd. Runs in O(N⁴) worst case
    /// (pairwise inversion count), with no search.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Board;
    ///
    /// assert!(Board::goal(3).is_solvable());
    ///
    /// // Swapping two adjacent tiles flips the parity.
    /// let board = Board::new(vec![1, 2, 3, 4, 5, 6, 8, 7, 0])?;
    /// assert!(!board.is_solvable());
    /// # Ok::<(), taquin_core::MalformedBoardError>(())
    /// ```
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size() % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row_from_bottom = usize::from(self.size() - self.blank_position().y());
            (inversions + blank_row_from_bottom) % 2 == 1
        }
    }

    /// Counts pairs of non-blank tiles whose relative order differs from the
    /// goal ordering.
    fn inversions(&self) -> usize {
        let tiles = self.tiles();
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| {
                tiles[index + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < tile)
                    .count()
            })
            .sum()
    }
}
