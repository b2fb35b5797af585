use crate::{Position, Tile, BOARD_SIZE};
use derive_more::{Display, Error};
use std::cmp;
use std::fmt;

/// Describes the scoring bonus printed on a square of the [board](Board).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub enum Premium {
    /// No bonus.
    #[default]
    Plain,
    /// Doubles the value of the [tile](Tile) placed on the square.
    DoubleLetter,
    /// Triples the value of the [tile](Tile) placed on the square.
    TripleLetter,
    /// Doubles the score of every word formed through the square.
    DoubleWord,
    /// Triples the score of every word formed through the square.
    TripleWord,
    /// The center square which the first move must cover. Scores like [Premium::DoubleWord].
    Center,
}

impl Premium {
    /// The factor applied to the value of a newly placed [tile](Tile) on the square.
    #[inline]
    pub fn letter_multiplier(self) -> usize {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    /// The factor applied to the score of a word formed through a newly placed
    /// [tile](Tile) on the square.
    #[inline]
    pub fn word_multiplier(self) -> usize {
        match self {
            Premium::DoubleWord | Premium::Center => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }

    /// The glyph drawn for an empty square with this premium.
    fn glyph(self) -> char {
        match self {
            Premium::Plain => '.',
            Premium::DoubleLetter => '2',
            Premium::TripleLetter => '3',
            Premium::DoubleWord => '@',
            Premium::TripleWord => '#',
            Premium::Center => '*',
        }
    }

    /// # Returns
    ///
    /// The premium of the standard layout at `row` and `col`. The layout is symmetric
    /// under rotation and reflection, so each square is folded into the octant
    /// `row <= col <= CENTER` before the lookup.
    fn standard_at(row: usize, col: usize) -> Premium {
        let last = BOARD_SIZE - 1;
        let row = cmp::min(row, last - row);
        let col = cmp::min(col, last - col);
        match (cmp::min(row, col), cmp::max(row, col)) {
            (7, 7) => Premium::Center,
            (0, 0) | (0, 7) => Premium::TripleWord,
            (1, 1) | (2, 2) | (3, 3) | (4, 4) => Premium::DoubleWord,
            (1, 5) | (5, 5) => Premium::TripleLetter,
            (0, 3) | (2, 6) | (3, 7) | (6, 6) => Premium::DoubleLetter,
            _ => Premium::Plain,
        }
    }
}

/// Describes the reason why a [tile](Tile) could not be [placed](Board::place) on
/// the [board](Board).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum PlaceError {
    /// Attempting to place a [tile](Tile) off the board.
    #[display("{position} is off the board")]
    OutOfBounds {
        /// The [position](Position) outside of `0..BOARD_SIZE` in some component.
        position: Position,
    },
    /// Attempting to place a [tile](Tile) on a square which already holds one.
    #[display("{position} is already occupied")]
    Occupied {
        /// The [position](Position) of the existing [tile](Tile).
        position: Position,
    },
}

type Grid<T> = [[T; BOARD_SIZE]; BOARD_SIZE];

/// A fixed [BOARD_SIZE] by [BOARD_SIZE] grid of placed [tiles](Tile) and the
/// premium squares they were placed on.
///
/// A premium applies only to the move which first covers its square. [Board::place]
/// marks the square spent, and [Board::active_premium] reports [Premium::Plain]
/// afterwards. Queries taking a [position](Position) are total: a position off the
/// board reads as an empty, plain square.
///
/// Cloning is cheap, so the [rule engine](crate::RuleEngine) tests placements on a
/// [snapshot](Board::snapshot) instead of the authoritative board.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    /// The [tile](Tile) on each square, if any.
    tiles: Grid<Option<Tile>>,
    /// The premium printed on each square.
    premiums: Grid<Premium>,
    /// Whether each square's premium has been consumed.
    spent: Grid<bool>,
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    /// An empty board with the standard premium layout.
    pub fn standard() -> Board {
        let mut premiums = [[Premium::Plain; BOARD_SIZE]; BOARD_SIZE];
        for (row, premiums_row) in premiums.iter_mut().enumerate() {
            for (col, premium) in premiums_row.iter_mut().enumerate() {
                *premium = Premium::standard_at(row, col);
            }
        }

        Board {
            tiles: [[None; BOARD_SIZE]; BOARD_SIZE],
            premiums,
            spent: [[false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The grid indexes of `position`, or [None] if it is off the board.
    #[inline]
    fn index(position: Position) -> Option<(usize, usize)> {
        position
            .is_in_bounds()
            .then(|| (position.row() as usize, position.col() as usize))
    }

    /// Places `tile` at `position` and consumes the premium of the square.
    ///
    /// # Errors
    ///
    /// * [PlaceError::OutOfBounds] `position` is off the board.
    /// * [PlaceError::Occupied] The square already holds a [tile](Tile).
    pub fn place(&mut self, position: Position, tile: Tile) -> Result<(), PlaceError> {
        let Some((row, col)) = Board::index(position) else {
            return Err(PlaceError::OutOfBounds { position });
        };
        let square = &mut self.tiles[row][col];
        if square.is_some() {
            return Err(PlaceError::Occupied { position });
        }

        *square = Some(tile);
        self.spent[row][col] = true;
        Ok(())
    }

    /// # Returns
    ///
    /// The [tile](Tile) at `position`, or [None] if the square is empty or off the board.
    #[inline]
    pub fn tile_at(&self, position: Position) -> Option<Tile> {
        Board::index(position).and_then(|(row, col)| self.tiles[row][col])
    }

    /// Whether no [tile](Tile) is at `position`. Squares off the board are empty.
    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.tile_at(position).is_none()
    }

    /// Whether a [tile](Tile) is at `position`.
    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.tile_at(position).is_some()
    }

    /// # Returns
    ///
    /// The (up to 4) in-bounds [positions](Position) adjacent to `position` in
    /// up, left, right and down order.
    pub fn adjacent(&self, position: Position) -> impl Iterator<Item = Position> {
        position.adjacent().filter(|adjacent| adjacent.is_in_bounds())
    }

    /// Whether some square adjacent to `position` holds a [tile](Tile).
    pub fn touches_tile(&self, position: Position) -> bool {
        self.adjacent(position)
            .any(|adjacent| self.is_occupied(adjacent))
    }

    /// # Returns
    ///
    /// The premium printed at `position` whether or not it has been spent, or
    /// [Premium::Plain] off the board.
    #[inline]
    pub fn premium_at(&self, position: Position) -> Premium {
        Board::index(position).map_or(Premium::Plain, |(row, col)| self.premiums[row][col])
    }

    /// Whether a [tile](Tile) has been placed on the square at `position`, spending
    /// its premium. Squares off the board are never spent.
    #[inline]
    pub fn is_premium_spent(&self, position: Position) -> bool {
        Board::index(position).map_or(false, |(row, col)| self.spent[row][col])
    }

    /// # Returns
    ///
    /// The premium at `position` if it is still available, otherwise [Premium::Plain].
    #[inline]
    pub fn active_premium(&self, position: Position) -> Premium {
        if self.is_premium_spent(position) {
            Premium::Plain
        } else {
            self.premium_at(position)
        }
    }

    /// A disposable copy of the board which can be placed on without changing `self`.
    #[inline]
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Whether no [tile](Tile) has been placed on the board.
    pub fn is_board_empty(&self) -> bool {
        self.tiles.iter().flatten().all(Option::is_none)
    }

    /// # Returns
    ///
    /// Every occupied [position](Position) in row then column order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles().map(|(position, _)| position)
    }

    /// # Returns
    ///
    /// Every placed [tile](Tile) with its [position](Position) in row then column order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles_row)| {
            tiles_row.iter().enumerate().filter_map(move |(col, tile)| {
                tile.map(|tile| (Position::new(row as isize, col as isize), tile))
            })
        })
    }
}

/// Draws the grid with column letters and row numbers. Placed [tiles](Tile) are drawn
/// as their letters, lowercase for blanks and `?` for unassigned blanks. Empty squares
/// are drawn as the glyph of their premium: `.` plain, `2` double letter, `3` triple
/// letter, `@` double word, `#` triple word and `*` center.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", char::from(b'A' + col as u8))?;
        }
        writeln!(f)?;

        for (row, (tiles_row, premiums_row)) in self.tiles.iter().zip(&self.premiums).enumerate() {
            write!(f, "{:>3}", row + 1)?;
            for (tile, premium) in tiles_row.iter().zip(premiums_row) {
                let glyph = match tile {
                    Some(Tile::Letter(letter)) => letter.as_char(),
                    Some(Tile::Blank(Some(letter))) => letter.as_char().to_ascii_lowercase(),
                    Some(Tile::Blank(None)) => crate::BLANK_CHAR,
                    None => premium.glyph(),
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
