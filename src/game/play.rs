use crate::{
    take_tile, Dictionary, ExchangeError, Exchanges, FinishedGame, Game, InvalidMove, Move,
    PlayedMove, RuleEngine, Validation, ValidatedMove, RACK_SIZE,
};
use derive_more::{Display, Error, From};
use either::Either;
use itertools::Itertools;
use tracing::{debug, instrument};

/// Describes the reason why [Game::play] could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, From, Error)]
pub enum GameError {
    /// The [move](Move) breaks a rule.
    #[display("invalid move: {_0}")]
    Invalid(#[error(source)] InvalidMove),
    /// Attempting to exchange more [tiles](crate::Tile) than remain in the bag.
    #[display("exchange unavailable: {requested} tiles requested, {available} in the bag")]
    #[from(ignore)]
    ExchangeUnavailable {
        /// The number of [tiles](crate::Tile) offered.
        requested: usize,
        /// The number of [tiles](crate::Tile) in the bag.
        available: usize,
    },
}

impl From<ExchangeError> for GameError {
    fn from(error: ExchangeError) -> Self {
        match error {
            ExchangeError::NotEnoughTiles {
                requested,
                available,
            } => GameError::ExchangeUnavailable {
                requested,
                available,
            },
        }
    }
}

impl Game {
    /// Validates `candidate` for the current player with `engine` and applies it as
    /// a whole or not at all.
    ///
    /// * Placing [tiles](crate::Tile) moves them from the rack to the board, refills
    /// the rack up to [RACK_SIZE] and adds the earned points.
    /// * Passing changes nothing but the count of consecutive passes.
    /// * Exchanging swaps [tiles](crate::Tile) from the rack with [tiles](crate::Tile)
    /// from the bag and earns nothing.
    ///
    /// The move is then recorded in the history and the turn passes to the next player,
    /// unless the game is over.
    ///
    /// # Errors
    ///
    /// * [GameError::Invalid] The [move](Move) breaks a rule.
    /// * [GameError::ExchangeUnavailable] Attempting to exchange more [tiles](crate::Tile)
    /// than remain in the bag.
    ///
    /// The unchanged game is handed back with the error.
    ///
    /// # Returns
    ///
    /// Either the next [game](Game) or the [finished game](FinishedGame) after the move.
    #[instrument(
        level = "debug",
        skip(self, engine, candidate),
        fields(player = self.turn.current_player())
    )]
    pub fn play<D: Dictionary>(
        mut self,
        engine: &RuleEngine<D>,
        candidate: &Move,
    ) -> Result<Either<Game, FinishedGame>, (Game, GameError)> {
        let player = self.turn.current_player();
        let validation = match engine.validate(
            candidate,
            &self.board,
            &self.racks[player],
            self.is_first_move(),
        ) {
            Ok(validation) => validation,
            Err(reason) => return Err((self, reason.into())),
        };

        let validated = match candidate {
            Move::PlaceTiles(_) => self.apply_placements(player, validation),
            Move::Pass => ValidatedMove::Pass,
            Move::Exchange(tiles) => match self.apply_exchange(player, tiles) {
                Ok(validated) => validated,
                Err(error) => return Err((self, error)),
            },
        };
        debug!(score = validated.score(), "applied move");

        self.turn.advance(&validated);
        self.history.push(PlayedMove::new(player, validated));

        match self.turn.end_reason(&self.racks, &self.bag) {
            Some(end_reason) => Ok(Either::Right(FinishedGame::new(self, end_reason))),
            None => Ok(Either::Left(self)),
        }
    }

    /// Moves the validated placements from `player`'s rack to the board, refills the rack
    /// and adds the score to `player`.
    fn apply_placements(&mut self, player: usize, validation: Validation) -> ValidatedMove {
        let (placements, score, words) = validation.into_parts();

        let rack = &mut self.racks[player];
        for (&position, &tile) in &placements {
            take_tile(rack, tile).unwrap_or_else(|| {
                unreachable!("validated tile {} should be in rack {:?}", tile, rack)
            });
            self.board.place(position, tile).unwrap_or_else(|error| {
                unreachable!("validated placement should succeed: {}", error)
            });
        }
        // when the bag is empty, no more tiles will be drawn
        rack.extend(self.bag.fill_to(rack.len(), RACK_SIZE));

        self.points[player] += score as isize;

        ValidatedMove::PlaceTiles {
            placements,
            score,
            words,
        }
    }

    /// Swaps `tiles` from `player`'s rack with the bag. The rack is only replaced once
    /// the bag has accepted the exchange.
    fn apply_exchange(
        &mut self,
        player: usize,
        tiles: &Exchanges,
    ) -> Result<ValidatedMove, GameError> {
        let mut rack = self.racks[player].clone();
        let surrendered = tiles
            .iter()
            .map(|&tile| {
                take_tile(&mut rack, tile).unwrap_or_else(|| {
                    unreachable!("validated tile {} should be in rack {:?}", tile, rack)
                })
            })
            .collect_vec();

        let received = self
            .bag
            .exchange(surrendered.clone())
            .map_err(|(_, error)| GameError::from(error))?;
        rack.extend(received.iter().copied());
        self.racks[player] = rack;

        Ok(ValidatedMove::Exchange {
            surrendered,
            received,
        })
    }
}
