use crate::{find_bounds, Axis, Board, Placements, Position, Tile, BLANK_CHAR, MIN_WORD_LEN};
use itertools::Itertools;
use std::fmt;
use std::iter;

/// A run of at least [MIN_WORD_LEN] contiguous occupied squares along one [axis](Axis),
/// read from a [board](Board). A word is derived, never stored on the board.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Word {
    /// The direction the word is read in.
    axis: Axis,
    /// The [tiles](Tile) of the word in reading order.
    tiles: Vec<(Position, Tile)>,
}

impl Word {
    /// The direction the word is read in.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The [tiles](Tile) of the word with their [positions](Position) in reading order.
    #[inline]
    pub fn tiles(&self) -> &[(Position, Tile)] {
        &self.tiles
    }

    /// The [positions](Position) of the word in reading order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().map(|&(position, _)| position)
    }

    /// The number of letters.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`, since a word has at least [MIN_WORD_LEN] letters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The uppercase text of the word. Blanks read as their assigned letters.
    pub fn text(&self) -> String {
        self.tiles
            .iter()
            .map(|&(_, tile)| tile.display_letter().map_or(BLANK_CHAR, |letter| letter.as_char()))
            .collect()
    }
}

/// Formats as the text followed by the starting [position](Position) and the direction,
/// such as `CAT (G8 across)`.
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.axis {
            Axis::Horizontal => "across",
            Axis::Vertical => "down",
        };
        match self.tiles.first() {
            Some((start, _)) => write!(f, "{} ({} {})", self.text(), start, direction),
            None => write!(f, "{}", self.text()),
        }
    }
}

/// # Returns
///
/// The [axis](Axis) shared by every [position](Position), horizontal for a single
/// [position](Position), or [None] when `positions` is empty or spans several rows
/// and several columns.
pub fn line_axis(positions: impl Iterator<Item = Position>) -> Option<Axis> {
    let (min, max) = find_bounds(positions)?;
    if min.row() == max.row() {
        Some(Axis::Horizontal)
    } else if min.col() == max.col() {
        Some(Axis::Vertical)
    } else {
        None
    }
}

/// Extends backward and forward from `position` along `axis` until an empty square.
///
/// # Returns
///
/// The [word](Word) through `position`, or [None] if `position` is empty or the run is
/// shorter than [MIN_WORD_LEN].
pub fn find_word(board: &Board, position: Position, axis: Axis) -> Option<Word> {
    if board.is_empty(position) {
        return None;
    }

    let start = iter::successors(Some(position), |&previous| Some(previous.step(axis, -1)))
        .take_while(|&previous| board.is_occupied(previous))
        .last()?;
    let tiles = iter::successors(Some(start), |&next| Some(next.step(axis, 1)))
        .map(|next| board.tile_at(next).map(|tile| (next, tile)))
        .while_some()
        .collect_vec();

    (tiles.len() >= MIN_WORD_LEN).then_some(Word { axis, tiles })
}

/// Finds every [word](Word) formed by `placements` on `board`, which must already hold
/// the placed [tiles](Tile).
///
/// The main words run along the axis shared by the placements and the cross words run
/// perpendicular through each placed [tile](Tile). A single placed [tile](Tile) is scanned
/// along both axes alike. Runs shorter than [MIN_WORD_LEN] are not words, and a span
/// reached by several scans is reported once.
///
/// # Returns
///
/// The formed [words](Word), main words first.
pub fn extract_words(board: &Board, placements: &Placements) -> Vec<Word> {
    let main_axis = line_axis(placements.keys().copied()).unwrap_or(Axis::Horizontal);
    let cross_axis = main_axis.perpendicular();

    let main_words = placements
        .keys()
        .filter_map(|&position| find_word(board, position, main_axis));
    let cross_words = placements
        .keys()
        .filter_map(|&position| find_word(board, position, cross_axis));

    main_words.chain(cross_words).unique().collect()
}

/// Scores `word` against the premiums of `board`, the board before `placements` were
/// placed.
///
/// Every letter counts its [value](Tile::value). Newly placed [tiles](Tile) also apply
/// the letter multiplier of their square to their own value and the word multiplier of
/// their square to the whole word. Word multipliers compound. [Tiles](Tile) already on
/// the board never apply their square's premium again.
pub fn score_word(board: &Board, placements: &Placements, word: &Word) -> usize {
    let mut letters = 0;
    let mut word_multiplier = 1;

    for &(position, tile) in word.tiles() {
        if placements.contains_key(&position) {
            let premium = board.active_premium(position);
            letters += tile.value() * premium.letter_multiplier();
            word_multiplier *= premium.word_multiplier();
        } else {
            letters += tile.value();
        }
    }

    letters * word_multiplier
}
