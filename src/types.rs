use crate::{Position, Tile, PLAYER_CAPACITY, RACK_CAPACITY};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// A map of [positions](Position) on the board to the [tiles](Tile) placed there in one move.
/// A placed blank tile carries the letter assigned to it.
///
/// # See Also
///
/// * [Move::PlaceTiles](crate::Move::PlaceTiles)
/// * [RuleEngine::validate](crate::RuleEngine::validate)
pub type Placements = BTreeMap<Position, Tile>;
/// The [tiles](Tile) a player offers to swap with the bag.
///
/// # See Also
///
/// * [Move::Exchange](crate::Move::Exchange)
/// * [TileBag::exchange](crate::TileBag::exchange)
pub type Exchanges = Vec<Tile>;
/// A vector of points for each player. Points become negative when the final
/// adjustment subtracts more than a player has earned.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [Game](crate::Game)
/// * [final_standings](crate::final_standings)
pub type Points = SmallVec<[isize; PLAYER_CAPACITY]>;
/// A vector of [tiles](Tile) held by one player.
///
/// # See Also
///
/// * [Tile]
/// * [RACK_CAPACITY]
/// * [Racks]
/// * [Game::get_rack](crate::Game::get_rack)
pub type Rack = SmallVec<[Tile; RACK_CAPACITY]>;
/// A vector of racks for each player, where each rack is a vector of [tiles](Tile).
///
/// # See Also
///
/// * [Rack]
/// * [PLAYER_CAPACITY]
/// * [Game](crate::Game)
/// * [FinishedView](crate::FinishedView)
pub type Racks = SmallVec<[Rack; PLAYER_CAPACITY]>;
/// A vector of rack lengths.
///
/// # See Also
///
/// * [Racks]
/// * [GameView](crate::GameView)
pub type RackLens = SmallVec<[usize; PLAYER_CAPACITY]>;

/// The sum of the [values](Tile::value) of every [tile](Tile) in `rack`.
#[inline]
pub fn rack_value(rack: &[Tile]) -> usize {
    rack.iter().map(|tile| tile.value()).sum()
}

/// Removes the first [tile](Tile) in `rack` of the [same kind](Tile::is_same_kind) as `tile`.
///
/// # Returns
///
/// The removed [tile](Tile), or [None] if `rack` holds no such [tile](Tile).
pub fn take_tile(rack: &mut Rack, tile: Tile) -> Option<Tile> {
    let index = rack.iter().position(|&held| held.is_same_kind(tile))?;
    Some(rack.remove(index))
}
