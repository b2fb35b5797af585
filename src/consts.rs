use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and the number of columns on the board. `15` squares per side.
///
/// # See Also
///
/// * [Position](crate::Position)
/// * [Board](crate::Board)
pub const BOARD_SIZE: usize = 15;
/// The row and column of the center square. `7`, or `H8` in notation.
///
/// # See Also
///
/// * [Position::CENTER](crate::Position::CENTER)
/// * [InvalidMove::CenterNotCovered](crate::InvalidMove::CenterNotCovered)
pub const CENTER: usize = BOARD_SIZE / 2;
/// The number of [tiles](crate::Tile) a player holds after drawing. `7` tiles per rack.
///
/// # See Also
///
/// * [Rack](crate::Rack)
/// * [BINGO_BONUS]
pub const RACK_SIZE: usize = 7;
/// The shortest run of letters that counts as a [word](crate::Word). `2` letters.
pub const MIN_WORD_LEN: usize = 2;
/// The longest entry a [word list](crate::WordList) accepts, which is also the longest
/// run of letters the board can hold. `15` letters.
pub const MAX_WORD_LEN: usize = BOARD_SIZE;
/// The fewest players a [game](crate::Game) can be created with. `2` players.
pub const MIN_PLAYERS: usize = 2;

/// The amount of extra points given when a placement uses all [RACK_SIZE] tiles of a rack
/// in one turn. If the environment variable named `BINGO_BONUS` is present at compile time
/// and is able to be parsed into a `usize`, set to the value of the environment variable.
/// Otherwise, it is set to `50`.
///
/// # See Also
///
/// * [RuleEngine::validate](crate::RuleEngine::validate)
pub const BINGO_BONUS: usize = option::unwrap_or!(
    option::and_then!(option_env!("BINGO_BONUS"), |str| result::ok!(parse_usize(
        str
    ))),
    50
);
/// The number of consecutive passes that ends the game. If the environment variable named
/// `CONSECUTIVE_PASS_LIMIT` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to `6`,
/// three full rounds of passing between two players.
///
/// # Panics
///
/// * When the given value is `0`
///
/// # See Also
///
/// * [TurnState::record](crate::TurnState::record)
/// * [EndReason::ConsecutivePasses](crate::EndReason::ConsecutivePasses)
pub const CONSECUTIVE_PASS_LIMIT: usize = option::unwrap_or!(
    option::and_then!(option_env!("CONSECUTIVE_PASS_LIMIT"), |str| result::ok!(
        parse_usize(str)
    )),
    6
);
const _: () = assert!(CONSECUTIVE_PASS_LIMIT > 0);
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// `PLAYER_CAPACITY` is also the most players a [game](crate::Game) accepts.
///
/// # Panics
///
/// * When the given value is less than [MIN_PLAYERS]
///
/// # See Also
///
/// * [Points](crate::Points)
/// * [Racks](crate::Racks)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
const _: () = assert!(PLAYER_CAPACITY >= MIN_PLAYERS);
/// All racks will be stored on the stack until the number of [tiles](crate::Tile) in a rack
/// becomes greater than `RACK_CAPACITY`. If the environment variable named `RACK_CAPACITY`
/// is present at compile time and is able to be parsed into a `usize`, set to the value
/// of the environment variable. Otherwise, it is set to [RACK_SIZE].
///
/// # See Also
///
/// * [Rack](crate::Rack)
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    RACK_SIZE
);
// the standard bag must deal a full rack to every supported player
const _: () = assert!(PLAYER_CAPACITY * RACK_SIZE <= crate::STANDARD_BAG_LEN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_middle_square() {
        assert_eq!(7, CENTER);
        assert_eq!(BOARD_SIZE - 1 - CENTER, CENTER);
    }

    #[test]
    fn longest_word_fits_board() {
        assert_eq!(BOARD_SIZE, MAX_WORD_LEN);
        assert!(MIN_WORD_LEN <= MAX_WORD_LEN);
    }
}
