//! Board state validation logic

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check if the board could arise from legal play starting with X
    pub fn is_valid(&self) -> bool {
        self.validate(&self.encode()).is_ok()
    }

    /// Validate piece counts and winning lines.
    ///
    /// # Errors
    ///
    /// - [`InvalidPieceCounts`](crate::Error::InvalidPieceCounts) unless
    ///   X has the same number of marks as O or exactly one more
    /// - [`ConflictingWinners`](crate::Error::ConflictingWinners) when both
    ///   players have a completed line
    /// - [`UnreachableBoard`](crate::Error::UnreachableBoard) when the winner
    ///   did not move last, or when one player's lines cannot have been
    ///   completed by a single move
    pub(super) fn validate(&self, context: &str) -> crate::Result<()> {
        let count = self.count_pieces();
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Err(crate::Error::ConflictingWinners {
                context: context.to_string(),
            });
        }

        let unreachable = |reason: &str| crate::Error::UnreachableBoard {
            context: context.to_string(),
            reason: reason.to_string(),
        };

        // The winner must have made the last move
        if x_wins && count.x != count.o + 1 {
            return Err(unreachable("X has a line but did not move last"));
        }
        if o_wins && count.x != count.o {
            return Err(unreachable("O has a line but did not move last"));
        }

        for player in [Player::X, Player::O] {
            if !self.winning_lines_share_cell(player) {
                return Err(unreachable("winning lines do not share a cell"));
            }
        }

        Ok(())
    }

    /// Check if all winning lines for a player share at least one cell.
    /// Several lines can only be completed together by a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::lines_for(&self.cells, player);

        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}
