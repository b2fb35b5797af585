use crate::{BOARD_SIZE, CENTER};
use derive_more::{Display, Error};
use std::cmp;
use std::fmt;
use std::iter::Peekable;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A square on the board addressed by a `0`-indexed row and column. Both components
/// are valid in the range `0..`[BOARD_SIZE], but any pair may be represented so that
/// placements outside the board can be described and rejected.
///
/// Ordered by row and then by column.
///
/// # See Also
///
/// * [Placements](crate::Placements)
/// * [Board](crate::Board)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    row: isize,
    col: isize,
}

impl Position {
    /// The center square, `H8`.
    pub const CENTER: Position = Position::new(CENTER as isize, CENTER as isize);

    /// # Returns
    ///
    /// A [Position] at `row` and `col`, which may or may not be on the board.
    #[inline]
    pub const fn new(row: isize, col: isize) -> Position {
        Position { row, col }
    }

    /// The `0`-indexed row.
    #[inline]
    pub const fn row(self) -> isize {
        self.row
    }

    /// The `0`-indexed column.
    #[inline]
    pub const fn col(self) -> isize {
        self.col
    }

    /// # Returns
    ///
    /// Whether both components lie in the range `0..`[BOARD_SIZE].
    #[inline]
    pub fn is_in_bounds(self) -> bool {
        let size = BOARD_SIZE as isize;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// # Returns
    ///
    /// The component that varies along `axis`: the column for [Axis::Horizontal] and
    /// the row for [Axis::Vertical].
    #[inline]
    pub fn along(self, axis: Axis) -> isize {
        match axis {
            Axis::Horizontal => self.col,
            Axis::Vertical => self.row,
        }
    }

    /// # Returns
    ///
    /// The [Position] `offset` squares away along `axis`. A negative `offset`
    /// moves left or up.
    #[inline]
    pub fn step(self, axis: Axis, offset: isize) -> Position {
        match axis {
            Axis::Horizontal => Position::new(self.row, self.col + offset),
            Axis::Vertical => Position::new(self.row + offset, self.col),
        }
    }

    /// The sum of the absolute differences of both components.
    #[inline]
    pub fn manhattan_distance(self, other: Position) -> usize {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    /// Whether `other` is exactly one square up, down, left or right of `self`.
    #[inline]
    pub fn is_adjacent_to(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Finds the adjacent [positions](Position) where adjacent is 4 directional and
    /// not diagonal. Positions off the board are included, except where a component
    /// would overflow.
    ///
    /// # See Also
    ///
    /// * [Board::adjacent](crate::Board::adjacent)
    ///
    /// # Returns
    ///
    /// Up to 4 [positions](Position) in natural order: up, left, right and down.
    pub fn adjacent(self) -> impl Iterator<Item = Position> {
        let Position { row, col } = self;
        [
            row.checked_sub(1).map(|up| Position::new(up, col)),
            col.checked_sub(1).map(|left| Position::new(row, left)),
            col.checked_add(1).map(|right| Position::new(row, right)),
            row.checked_add(1).map(|down| Position::new(down, col)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Formats in board notation, a column letter `A` to `O` followed by a `1`-indexed row,
/// so that row `7` and column `7` is `H8`. [Positions](Position) off the board are
/// formatted as `(row, col)`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_in_bounds() {
            let column = char::from(b'A' + self.col as u8);
            write!(f, "{}{}", column, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Describes the reason why board notation could not be parsed into a [Position].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum ParsePositionError {
    /// The notation was empty.
    #[display("empty position notation")]
    Empty,
    /// The first character was not a column letter from `A` to `O`.
    #[display("invalid column: {_0}")]
    InvalidColumn(#[error(not(source))] char),
    /// The remaining characters were not a row number from `1` to `15`.
    #[display("invalid row: {_0}")]
    InvalidRow(#[error(not(source))] String),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses board notation such as `H8` or `o15`. Column letters are case-insensitive.
    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let notation = notation.trim();
        let mut chars = notation.chars();
        let Some(column) = chars.next() else {
            return Err(ParsePositionError::Empty);
        };

        let column = column.to_ascii_uppercase();
        let last_column = char::from(b'A' + (BOARD_SIZE - 1) as u8);
        if !('A'..=last_column).contains(&column) {
            return Err(ParsePositionError::InvalidColumn(column));
        }

        let row_notation = chars.as_str();
        let row = row_notation
            .parse::<usize>()
            .ok()
            .filter(|row| (1..=BOARD_SIZE).contains(row))
            .ok_or_else(|| ParsePositionError::InvalidRow(row_notation.to_owned()))?;

        Ok(Position::new(
            row as isize - 1,
            (column as u8 - b'A') as isize,
        ))
    }
}

/// The direction a line of tiles runs across the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Axis {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Axis {
    /// The other [Axis].
    #[inline]
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Finds the minimum and maximum of each component from [positions](Position).
/// If `positions` is empty, [None] is returned.
///
/// # Arguments
///
/// * `positions`: An [iterator](Iterator) of [positions](Position).
///
/// # See Also
///
/// * [RuleEngine::validate](crate::RuleEngine::validate)
///
/// # Returns
///
/// The top left corner and the bottom right corner of the smallest rectangle
/// containing every [position](Position).
pub fn find_bounds(mut positions: impl Iterator<Item = Position>) -> Option<(Position, Position)> {
    let first = positions.next()?;

    let (mut min, mut max) = (first, first);

    for Position { row, col } in positions {
        min = Position::new(cmp::min(min.row, row), cmp::min(min.col, col));
        max = Position::new(cmp::max(max.row, row), cmp::max(max.col, col));
    }

    Some((min, max))
}

/// The next range of continuous, increasing values from `peekable`, starting at the next
/// value. The range contains a single value when the value after it is not exactly one
/// greater. If the `peekable` iteration is finished, returns [None].
///
/// # See Also
///
/// * [Itertools::batching](itertools::Itertools::batching)
/// * [InvalidMove::Gaps](crate::InvalidMove::Gaps)
pub fn batch_continuous_range<I>(peekable: &mut Peekable<I>) -> Option<RangeInclusive<isize>>
where
    I: Iterator<Item = isize>,
{
    let first = peekable.next()?;

    let mut last = first;
    while let Some(next) = peekable.next_if_eq(&(last + 1)) {
        last = next;
    }
    Some(first..=last)
}
