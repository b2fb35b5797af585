use crate::{Board, Game, Points, Rack, RackLens};
use smallvec::SmallVec;

/// Immutably borrows the publicly visible properties of a [`Game`].
#[derive(Debug)]
pub struct GameView<'a> {
    /// The number of [tiles](crate::Tile) which haven't been drawn yet.
    pub bag_len: usize,
    /// The placed [tiles](crate::Tile) and spent premiums.
    pub board: &'a Board,
    /// A vector of points for each player.
    pub points: &'a Points,
    /// A vector of rack lengths.
    pub rack_lens: RackLens,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The number of passes since the last placement or exchange.
    pub consecutive_passes: usize,
    /// Whether the next placement must cover the center square.
    pub is_first_move: bool,
}

impl<'a> Game {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows properties from [`Game`], but
    /// with `bag` replaced by `bag.len()` and `racks` replaced by the number
    /// of [tiles](crate::Tile) in each rack.
    pub fn view(&'a self) -> GameView<'a> {
        GameView {
            bag_len: self.bag.len(),
            board: &self.board,
            points: &self.points,
            rack_lens: self.racks.iter().map(SmallVec::len).collect(),
            current_player: self.turn.current_player(),
            consecutive_passes: self.turn.consecutive_passes(),
            is_first_move: self.is_first_move(),
        }
    }

    /// # Returns
    ///
    /// The rack held by the requesting player or `None` if out of bounds.
    pub fn get_rack(&self, player: usize) -> Option<&Rack> {
        self.racks.get(player)
    }
}
