use derive_more::{Display, Error};
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// The character used for a blank [`Tile`] that has not been assigned a letter.
pub const BLANK_CHAR: char = '?';
/// The value of a blank [`Tile`], whatever letter it stands in for.
pub const BLANK_VALUE: usize = 0;
/// The number of blank [tiles](Tile) in the standard bag.
pub const BLANK_COUNT: usize = 2;
/// The number of [tiles](Tile) in the standard bag. `100` tiles.
pub const STANDARD_BAG_LEN: usize = {
    let mut len = BLANK_COUNT;
    let mut index = 0;
    while index < Letter::LETTERS_LEN {
        len += Letter::LETTERS[index].count();
        index += 1;
    }
    len
};

/// One of the `26` letters printed on a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, FromPrimitive)]
pub enum Letter {
    /// `0`.
    A = 0,
    /// `1`.
    B = 1,
    /// `2`.
    C = 2,
    /// `3`.
    D = 3,
    /// `4`.
    E = 4,
    /// `5`.
    F = 5,
    /// `6`.
    G = 6,
    /// `7`.
    H = 7,
    /// `8`.
    I = 8,
    /// `9`.
    J = 9,
    /// `10`.
    K = 10,
    /// `11`.
    L = 11,
    /// `12`.
    M = 12,
    /// `13`.
    N = 13,
    /// `14`.
    O = 14,
    /// `15`.
    P = 15,
    /// `16`.
    Q = 16,
    /// `17`.
    R = 17,
    /// `18`.
    S = 18,
    /// `19`.
    T = 19,
    /// `20`.
    U = 20,
    /// `21`.
    V = 21,
    /// `22`.
    W = 22,
    /// `23`.
    X = 23,
    /// `24`.
    Y = 24,
    /// `25`.
    Z = 25,
}

impl Letter {
    /// The number of [`Letter`] variants. 26 letters.
    pub const LETTERS_LEN: usize = 26;

    /// Every [`Letter`] in alphabetical order.
    pub const LETTERS: [Letter; Letter::LETTERS_LEN] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::H,
        Letter::I,
        Letter::J,
        Letter::K,
        Letter::L,
        Letter::M,
        Letter::N,
        Letter::O,
        Letter::P,
        Letter::Q,
        Letter::R,
        Letter::S,
        Letter::T,
        Letter::U,
        Letter::V,
        Letter::W,
        Letter::X,
        Letter::Y,
        Letter::Z,
    ];

    /// # Returns
    ///
    /// The [`Letter`] for an ASCII letter in either case, or [None] for any other character.
    pub fn from_char(char: char) -> Option<Letter> {
        let upper = char.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        num::FromPrimitive::from_u8(upper as u8 - b'A')
    }

    /// The uppercase character of the [`Letter`].
    #[inline]
    pub fn as_char(self) -> char {
        char::from(b'A' + self as u8)
    }

    /// The points a [`Tile`] printed with this [`Letter`] is worth.
    pub const fn value(self) -> usize {
        match self {
            Letter::A
            | Letter::E
            | Letter::I
            | Letter::L
            | Letter::N
            | Letter::O
            | Letter::R
            | Letter::S
            | Letter::T
            | Letter::U => 1,
            Letter::D | Letter::G => 2,
            Letter::B | Letter::C | Letter::M | Letter::P => 3,
            Letter::F | Letter::H | Letter::V | Letter::W | Letter::Y => 4,
            Letter::K => 5,
            Letter::J | Letter::X => 8,
            Letter::Q | Letter::Z => 10,
        }
    }

    /// The number of [tiles](Tile) printed with this [`Letter`] in the standard bag.
    pub const fn count(self) -> usize {
        match self {
            Letter::E => 12,
            Letter::A | Letter::I => 9,
            Letter::O => 8,
            Letter::N | Letter::R | Letter::T => 6,
            Letter::D | Letter::L | Letter::S | Letter::U => 4,
            Letter::G => 3,
            Letter::B
            | Letter::C
            | Letter::F
            | Letter::H
            | Letter::M
            | Letter::P
            | Letter::V
            | Letter::W
            | Letter::Y => 2,
            Letter::J | Letter::K | Letter::Q | Letter::X | Letter::Z => 1,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Distribution<Letter> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Letter {
        let index = rng.gen_range(0..Letter::LETTERS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Letter::LETTERS_LEN);
            unreachable!(
                "index ({:?}) should be matched since letters cover all indexes \
                in range 0..Letter::LETTERS_LEN (0..{:?}).",
                index,
                Letter::LETTERS_LEN
            );
        })
    }
}

/// A tile held in a rack, lying in the bag or placed on the board.
///
/// A blank tile is worth [BLANK_VALUE] points and starts without a letter. It is assigned
/// the letter it stands in for exactly once, when it is placed, and keeps scoring
/// [BLANK_VALUE] afterwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Tile {
    /// A tile printed with a [`Letter`].
    Letter(Letter),
    /// A blank tile and the [`Letter`] assigned to it, if any.
    Blank(Option<Letter>),
}

/// Describes the reason why a letter could not be [assigned](Tile::assign) to a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum AssignError {
    /// Only blank tiles can be assigned a letter.
    #[display("cannot assign a letter to non-blank tile {_0}")]
    NotBlank(#[error(not(source))] Letter),
    /// The blank tile already stands in for a letter.
    #[display("blank tile is already assigned {_0}")]
    AlreadyAssigned(#[error(not(source))] Letter),
}

impl Tile {
    /// A tile printed with `letter`.
    #[inline]
    pub const fn letter(letter: Letter) -> Tile {
        Tile::Letter(letter)
    }

    /// An unassigned blank tile.
    #[inline]
    pub const fn blank() -> Tile {
        Tile::Blank(None)
    }

    /// # Returns
    ///
    /// A letter tile for an ASCII letter in either case, an unassigned blank for
    /// [BLANK_CHAR], or [None] for any other character.
    pub fn from_char(char: char) -> Option<Tile> {
        if char == BLANK_CHAR {
            return Some(Tile::blank());
        }
        Letter::from_char(char).map(Tile::Letter)
    }

    /// Whether the tile is blank, assigned or not.
    #[inline]
    pub fn is_blank(self) -> bool {
        matches!(self, Tile::Blank(_))
    }

    /// # Returns
    ///
    /// The letter the tile reads as on the board: the printed letter, the assigned letter
    /// of a blank, or [None] for an unassigned blank.
    #[inline]
    pub fn display_letter(self) -> Option<Letter> {
        match self {
            Tile::Letter(letter) => Some(letter),
            Tile::Blank(assigned) => assigned,
        }
    }

    /// The points the tile is worth before any premium square.
    #[inline]
    pub fn value(self) -> usize {
        match self {
            Tile::Letter(letter) => letter.value(),
            Tile::Blank(_) => BLANK_VALUE,
        }
    }

    /// Assigns `letter` to an unassigned blank tile.
    ///
    /// # Errors
    ///
    /// * [AssignError::NotBlank] The tile is printed with a letter.
    /// * [AssignError::AlreadyAssigned] The blank tile already stands in for a letter.
    pub fn assign(&mut self, letter: Letter) -> Result<(), AssignError> {
        match self {
            Tile::Letter(printed) => Err(AssignError::NotBlank(*printed)),
            Tile::Blank(Some(assigned)) => Err(AssignError::AlreadyAssigned(*assigned)),
            Tile::Blank(assigned @ None) => {
                *assigned = Some(letter);
                Ok(())
            }
        }
    }

    /// Whether taking `self` out of a rack satisfies a request for `other`. Letter tiles
    /// match the same letter, and blank tiles match each other whatever their assignment.
    #[inline]
    pub fn is_same_kind(self, other: Tile) -> bool {
        match (self, other) {
            (Tile::Letter(letter), Tile::Letter(other_letter)) => letter == other_letter,
            (Tile::Blank(_), Tile::Blank(_)) => true,
            _ => false,
        }
    }
}

/// Formats a letter tile as its uppercase letter, an unassigned blank as [BLANK_CHAR],
/// and an assigned blank as its lowercase letter followed by `*`.
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Letter(letter) => write!(f, "{}", letter),
            Tile::Blank(None) => write!(f, "{}", BLANK_CHAR),
            Tile::Blank(Some(letter)) => write!(f, "{}*", letter.as_char().to_ascii_lowercase()),
        }
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile::Letter(rng.gen())
    }
}

/// # Returns
///
/// Every [tile](Tile) of the standard bag in alphabetical order followed by the blanks.
pub fn standard_tiles() -> Vec<Tile> {
    Letter::LETTERS
        .into_iter()
        .flat_map(|letter| vec![Tile::Letter(letter); letter.count()])
        .chain(vec![Tile::blank(); BLANK_COUNT])
        .collect()
}
