use crate::{
    Board, PlayedMove, Points, Rack, Racks, TileBag, TurnState, ValidatedMove, MIN_PLAYERS,
    PLAYER_CAPACITY, RACK_CAPACITY, RACK_SIZE,
};
use derive_more::{Display, Error};
pub use finished::*;
use map_macro::hash_set;
pub use play::*;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;
pub use view::*;

mod finished;
mod play;
#[cfg(test)]
mod test_setup;
mod view;

/// Describes the reasons why a [game](Game) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum NewError {
    /// Attempting [to start](Game::new) with fewer than [MIN_PLAYERS] players.
    #[display("{players_len} players is fewer than {}", MIN_PLAYERS)]
    TooFewPlayers {
        /// The number of players requested.
        players_len: usize,
    },
    /// Attempting [to start](Game::new) with more than [PLAYER_CAPACITY] players.
    #[display("{players_len} players is more than {}", PLAYER_CAPACITY)]
    TooManyPlayers {
        /// The number of players requested.
        players_len: usize,
    },
    /// Attempting to select a first player who is not playing.
    #[display("first player {first_player} is not one of {players_len} players")]
    FirstPlayerOutOfRange {
        /// The index of the selected first player.
        first_player: usize,
        /// The number of players requested.
        players_len: usize,
    },
}

/// Owns the authoritative state of one game in progress and applies
/// [validated moves](ValidatedMove) to it. Created from [Game::new] and advanced by
/// [Game::play], which hands back either the next [Game] or a [FinishedGame].
#[derive(Debug, Clone)]
pub struct Game {
    /// The [tiles](crate::Tile) which haven't been drawn yet.
    bag: TileBag,
    /// The placed [tiles](crate::Tile) and spent premiums.
    board: Board,
    /// A vector of points for each player.
    points: Points,
    /// A vector of racks, where each rack is a vector of [tiles](crate::Tile).
    racks: Racks,
    /// Whose turn it is and how many passes were made in a row.
    turn: TurnState,
    /// Every applied move in order.
    history: Vec<PlayedMove>,
}

impl Game {
    /// Starts a game with a randomly selected first player.
    ///
    /// # Errors
    ///
    /// * [NewError::TooFewPlayers] Attempting [to start](Game::new) with fewer than
    /// [MIN_PLAYERS] players.
    /// * [NewError::TooManyPlayers] Attempting [to start](Game::new) with more than
    /// [PLAYER_CAPACITY] players.
    ///
    /// # See Also
    ///
    /// * [Game::new]
    pub fn new_random_first_player(players_len: usize) -> Result<Game, HashSet<NewError>> {
        Game::new(players_len, |players_len| {
            rand::thread_rng().gen_range(0..players_len)
        })
    }

    /// Checks that `players_len` is between [MIN_PLAYERS] and [PLAYER_CAPACITY]
    /// inclusive, shuffles the [standard bag](TileBag::standard) and deals
    /// [RACK_SIZE] [tiles](crate::Tile) to each player. The first player is the index
    /// returned by `first_player_selector` given `players_len`.
    ///
    /// # Errors
    ///
    /// * [NewError::TooFewPlayers] Attempting [to start](Game::new) with fewer than
    /// [MIN_PLAYERS] players.
    /// * [NewError::TooManyPlayers] Attempting [to start](Game::new) with more than
    /// [PLAYER_CAPACITY] players.
    /// * [NewError::FirstPlayerOutOfRange] Attempting to select a first player who
    /// is not playing.
    ///
    /// # See Also
    ///
    /// * [Game::new_random_first_player]
    pub fn new(
        players_len: usize,
        first_player_selector: impl FnOnce(usize) -> usize,
    ) -> Result<Game, HashSet<NewError>> {
        if players_len < MIN_PLAYERS {
            return Err(hash_set! { NewError::TooFewPlayers { players_len } });
        }
        if players_len > PLAYER_CAPACITY {
            return Err(hash_set! { NewError::TooManyPlayers { players_len } });
        }

        let first_player = first_player_selector(players_len);
        if first_player >= players_len {
            return Err(hash_set! { NewError::FirstPlayerOutOfRange {
                first_player,
                players_len,
            }});
        }

        let mut bag = TileBag::standard();
        let racks: Racks = (0..players_len)
            .map(|_| {
                let mut rack = Rack::with_capacity(RACK_CAPACITY);
                rack.extend(bag.draw(RACK_SIZE));
                rack
            })
            .collect();
        debug!(players_len, first_player, bag_len = bag.len(), "dealt racks");

        Ok(Game {
            bag,
            board: Board::standard(),
            points: Points::from_elem(0, players_len),
            racks,
            turn: TurnState::new(players_len, first_player),
            history: Vec::new(),
        })
    }

    /// # Returns
    ///
    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.turn.current_player()
    }

    /// Whose turn it is and how many passes were made in a row.
    #[inline]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Every applied move in order.
    #[inline]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// # Returns
    ///
    /// The moves made by `player` in order, or nothing if `player` is not playing.
    pub fn moves_by_player(&self, player: usize) -> impl Iterator<Item = &ValidatedMove> + '_ {
        self.history
            .iter()
            .filter(move |played| played.player() == player)
            .map(PlayedMove::validated)
    }

    /// The most recently applied move, or [None] before the first move.
    #[inline]
    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    /// Whether no [tiles](crate::Tile) have been placed yet, so the next placement must
    /// cover the center square.
    pub fn is_first_move(&self) -> bool {
        !self
            .history
            .iter()
            .any(|played| played.validated().is_placement())
    }
}
