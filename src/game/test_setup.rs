use crate::{
    random_bag, random_current_player, random_points, random_racks, Board, Game, PlayedMove, Points,
    Rack, Racks, TileBag, TurnState, RACK_CAPACITY,
};
use rand::Rng;

impl Game {
    /// Generates an empty [Game] for `players_len` players.
    ///
    /// # Returns
    ///
    /// A [Game] struct with the properties set to the following:
    /// * `bag`: An empty bag.
    /// * `board`: An empty standard board.
    /// * `points`: `0` for each player.
    /// * `racks`: An empty rack for each player.
    /// * `turn`: Player `0` to move without passes.
    /// * `history`: An empty history.
    pub fn empty_game(players_len: usize) -> Game {
        Game {
            bag: TileBag::default(),
            board: Board::standard(),
            points: Points::from_elem(0, players_len),
            racks: (0..players_len)
                .map(|_| Rack::with_capacity(RACK_CAPACITY))
                .collect(),
            turn: TurnState::new(players_len, 0),
            history: Vec::new(),
        }
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut TileBag {
        &mut self.bag
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.points`.
    pub fn mut_points(&mut self) -> &mut Points {
        &mut self.points
    }

    /// A mutable reference to `self.racks`.
    pub fn mut_racks(&mut self) -> &mut Racks {
        &mut self.racks
    }

    /// A mutable reference to `self.history`.
    pub fn mut_history(&mut self) -> &mut Vec<PlayedMove> {
        &mut self.history
    }

    /// It inserts a random, small, non-zero number of [tiles](crate::Tile) into the bag.
    ///
    /// # Returns
    ///
    /// The number of additional [tiles](crate::Tile) in the bag.
    pub fn random_bag<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_bag(rng, &mut self.bag)
    }

    /// Sets each player's points to a random, medium, non-zero number.
    pub fn random_points<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_points(rng, &mut self.points)
    }

    /// Pushes the same random, small, non-zero number of [tiles](crate::Tile)
    /// into each player's rack.
    ///
    /// # Returns
    ///
    /// The number of additional [tiles](crate::Tile) in each player's rack.
    pub fn random_racks<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_racks(rng, &mut self.racks)
    }

    /// Hands the turn to a random player without recording a move.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let players_len = self.turn.players_len();
        let mut current_player = self.turn.current_player();
        random_current_player(rng, &mut current_player, players_len);
        self.turn = TurnState::new(players_len, current_player);
        current_player
    }
}
