use crate::{Exchanges, Placements, Tile, Word};

/// A candidate action submitted by the current player before validation.
///
/// # See Also
///
/// * [RuleEngine::validate](crate::RuleEngine::validate)
/// * [Game::play](crate::Game::play)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Move {
    /// Place new [tiles](Tile) on empty squares. Squares already on the board are never
    /// part of the placements.
    PlaceTiles(Placements),
    /// Give up the turn.
    Pass,
    /// Swap [tiles](Tile) from the rack with [tiles](Tile) from the bag.
    Exchange(Exchanges),
}

impl Move {
    /// Whether the move is [Move::Pass].
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

/// An action that has passed validation and has been applied, annotated with its outcome.
/// Produced only by [Game::play](crate::Game::play) and never modified afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ValidatedMove {
    /// [Tiles](Tile) were placed.
    PlaceTiles {
        /// The [tiles](Tile) as they landed on the board, blanks carrying their letters.
        placements: Placements,
        /// The points earned, bingo bonus included.
        score: usize,
        /// Every word formed by the placement.
        words: Vec<Word>,
    },
    /// The turn was given up.
    Pass,
    /// [Tiles](Tile) were swapped with the bag.
    Exchange {
        /// The [tiles](Tile) given to the bag.
        surrendered: Exchanges,
        /// The [tiles](Tile) drawn in return.
        received: Exchanges,
    },
}

impl ValidatedMove {
    /// The points earned by the move. Passes and exchanges earn `0`.
    #[inline]
    pub fn score(&self) -> usize {
        match self {
            ValidatedMove::PlaceTiles { score, .. } => *score,
            ValidatedMove::Pass | ValidatedMove::Exchange { .. } => 0,
        }
    }

    /// Whether the move is [ValidatedMove::Pass].
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, ValidatedMove::Pass)
    }

    /// Whether the move placed [tiles](Tile).
    #[inline]
    pub fn is_placement(&self) -> bool {
        matches!(self, ValidatedMove::PlaceTiles { .. })
    }

    /// # Returns
    ///
    /// The text of every formed word, empty for passes and exchanges.
    pub fn word_texts(&self) -> Vec<String> {
        match self {
            ValidatedMove::PlaceTiles { words, .. } => words.iter().map(Word::text).collect(),
            ValidatedMove::Pass | ValidatedMove::Exchange { .. } => Vec::new(),
        }
    }
}

/// A [validated move](ValidatedMove) in the history of a [game](crate::Game), with the
/// index of the player who made it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PlayedMove {
    /// The index of the player who made the move.
    player: usize,
    /// The move as it was applied.
    validated: ValidatedMove,
}

impl PlayedMove {
    /// Records that `player` made `validated`.
    #[inline]
    pub(crate) fn new(player: usize, validated: ValidatedMove) -> PlayedMove {
        PlayedMove { player, validated }
    }

    /// The index of the player who made the move.
    #[inline]
    pub fn player(&self) -> usize {
        self.player
    }

    /// The move as it was applied.
    #[inline]
    pub fn validated(&self) -> &ValidatedMove {
        &self.validated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Letter, Position};

    #[test]
    fn scores() {
        let placements: Placements = [(Position::CENTER, Tile::letter(Letter::A))].into();
        let place_tiles = ValidatedMove::PlaceTiles {
            placements,
            score: 12,
            words: Vec::new(),
        };
        let exchange = ValidatedMove::Exchange {
            surrendered: vec![Tile::blank()],
            received: vec![Tile::letter(Letter::E)],
        };

        assert_eq!(12, place_tiles.score());
        assert!(place_tiles.is_placement());
        assert_eq!(0, ValidatedMove::Pass.score());
        assert!(ValidatedMove::Pass.is_pass());
        assert_eq!(0, exchange.score());
        assert!(!exchange.is_pass());
        assert!(exchange.word_texts().is_empty());
    }

    #[test]
    fn candidate_pass() {
        assert!(Move::Pass.is_pass());
        assert!(!Move::Exchange(Vec::new()).is_pass());
    }

    #[test]
    fn played_move_keeps_player() {
        let played = PlayedMove::new(3, ValidatedMove::Pass);

        assert_eq!(3, played.player());
        assert!(played.validated().is_pass());
    }
}
