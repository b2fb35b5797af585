use crate::{rack_value, Points, Rack, TileBag, ValidatedMove, CONSECUTIVE_PASS_LIMIT};
use derive_more::Display;
use itertools::Itertools;

/// Describes why a game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
pub enum EndReason {
    /// [CONSECUTIVE_PASS_LIMIT] passes were made in a row.
    #[display("{} consecutive passes", CONSECUTIVE_PASS_LIMIT)]
    ConsecutivePasses,
    /// Some player emptied their rack while the bag was empty.
    #[display("player {player} emptied their rack")]
    RackEmptied {
        /// The index of the player with the empty rack.
        player: usize,
    },
}

/// Whose turn it is and how many passes were made in a row.
///
/// Only [validated moves](ValidatedMove) are recorded, so every recorded move has
/// already been applied to the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TurnState {
    /// The number of players.
    players_len: usize,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// The number of passes since the last placement or exchange.
    consecutive_passes: usize,
}

impl TurnState {
    /// A turn state where `current_player` moves first and nobody has passed.
    ///
    /// # Panics
    ///
    /// If `current_player` is not less than `players_len`.
    pub fn new(players_len: usize, current_player: usize) -> TurnState {
        assert!(
            current_player < players_len,
            "current player ({}) should be less than the number of players ({})",
            current_player,
            players_len
        );
        TurnState {
            players_len,
            current_player,
            consecutive_passes: 0,
        }
    }

    /// The number of players.
    #[inline]
    pub fn players_len(&self) -> usize {
        self.players_len
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The number of passes since the last placement or exchange.
    #[inline]
    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    /// Counts a [pass](ValidatedMove::Pass), or resets the count for any other move.
    pub fn record(&mut self, validated: &ValidatedMove) {
        if validated.is_pass() {
            self.consecutive_passes += 1;
        } else {
            self.consecutive_passes = 0;
        }
    }

    /// [Records](TurnState::record) `validated` and hands the turn to the next player,
    /// looping back to `0` after the last player.
    pub fn advance(&mut self, validated: &ValidatedMove) {
        self.record(validated);
        self.current_player = (self.current_player + 1) % self.players_len;
    }

    /// Whether [CONSECUTIVE_PASS_LIMIT] passes were made in a row.
    #[inline]
    pub fn passes_exhausted(&self) -> bool {
        self.consecutive_passes >= CONSECUTIVE_PASS_LIMIT
    }

    /// # Returns
    ///
    /// Why the game is over, or [None] while it continues. The game is over once
    /// [passes are exhausted](TurnState::passes_exhausted), or when some rack is empty
    /// while the bag is empty too.
    pub fn end_reason(&self, racks: &[Rack], bag: &TileBag) -> Option<EndReason> {
        if self.passes_exhausted() {
            return Some(EndReason::ConsecutivePasses);
        }
        if !bag.is_empty() {
            return None;
        }
        racks
            .iter()
            .position(|rack| rack.is_empty())
            .map(|player| EndReason::RackEmptied { player })
    }

    /// Whether the game is over. See [TurnState::end_reason].
    #[inline]
    pub fn is_game_over(&self, racks: &[Rack], bag: &TileBag) -> bool {
        self.end_reason(racks, bag).is_some()
    }
}

/// The adjusted points of every player once the game is over, and the winner.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Standings {
    /// The points of each player after the final adjustment.
    points: Points,
    /// The index of the sole player with the most points, or [None] on a tie.
    winner: Option<usize>,
}

impl Standings {
    /// The points of each player after the final adjustment.
    #[inline]
    pub fn points(&self) -> &Points {
        &self.points
    }

    /// The index of the sole player with the most points, or [None] on a tie.
    #[inline]
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Whether several players share the most points.
    #[inline]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}

/// Applies the final adjustment to `points`.
///
/// Every player loses the [value](rack_value) of the [tiles](crate::Tile) left in their
/// rack. If exactly one player emptied their rack, that player also gains the value
/// left in every other rack. The player with the most points wins, and equal most
/// points is a tie with no winner.
pub fn final_standings(points: &[isize], racks: &[Rack]) -> Standings {
    let remaining = racks
        .iter()
        .map(|rack| rack_value(rack) as isize)
        .collect_vec();
    let remaining_total: isize = remaining.iter().sum();

    let mut points: Points = points
        .iter()
        .zip(&remaining)
        .map(|(&points, &remaining)| points - remaining)
        .collect();

    if let Ok(emptied) = racks.iter().positions(|rack| rack.is_empty()).exactly_one() {
        points[emptied] += remaining_total;
    }

    let most = points.iter().copied().max();
    let winner = points
        .iter()
        .positions(|&points| Some(points) == most)
        .exactly_one()
        .ok();

    Standings { points, winner }
}
