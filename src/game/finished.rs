use crate::{final_standings, Board, EndReason, Game, PlayedMove, Racks, Standings};
use tracing::info;

/// Owns game state after the game is over. Created from [Game::play].
#[derive(Debug, Clone)]
pub struct FinishedGame {
    /// The placed [tiles](crate::Tile) at the end of the game.
    board: Board,
    /// The [tiles](crate::Tile) left in each rack.
    racks: Racks,
    /// Every applied move in order.
    history: Vec<PlayedMove>,
    /// Why the game ended.
    end_reason: EndReason,
    /// The points after the final adjustment and the winner.
    standings: Standings,
}

impl FinishedGame {
    /// Applies the [final adjustment](final_standings) to the points of `game`.
    pub(super) fn new(game: Game, end_reason: EndReason) -> FinishedGame {
        let standings = final_standings(&game.points, &game.racks);
        info!(
            %end_reason,
            points = ?standings.points(),
            winner = ?standings.winner(),
            "game over"
        );

        FinishedGame {
            board: game.board,
            racks: game.racks,
            history: game.history,
            end_reason,
            standings,
        }
    }

    /// Why the game ended.
    #[inline]
    pub fn end_reason(&self) -> EndReason {
        self.end_reason
    }

    /// The points after the final adjustment and the winner.
    #[inline]
    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    /// Every applied move in order.
    #[inline]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }
}

/// Immutably borrows properties from [`FinishedGame`].
#[derive(Debug)]
pub struct FinishedView<'a> {
    /// The placed [tiles](crate::Tile) at the end of the game.
    pub board: &'a Board,
    /// The [tiles](crate::Tile) left in each rack.
    pub racks: &'a Racks,
    /// Why the game ended.
    pub end_reason: EndReason,
    /// The points after the final adjustment and the winner.
    pub standings: &'a Standings,
}

impl<'a> FinishedGame {
    /// # Returns
    ///
    /// A new [`FinishedView`] struct, which immutably borrows properties from
    /// [`FinishedGame`]. Racks are no longer private once the game is over.
    #[inline]
    pub fn finished_view(&'a self) -> FinishedView<'a> {
        FinishedView {
            board: &self.board,
            racks: &self.racks,
            end_reason: self.end_reason,
            standings: &self.standings,
        }
    }
}
