//! Concrete structs to represent and protect the state of a word placement game with
//! methods to validate, score, and apply each player's move.
//!
//! ## Summary
//!
//! Two to [PLAYER_CAPACITY] players take turns on a [BOARD_SIZE] by [BOARD_SIZE]
//! [board](Board) of [premium squares](Premium). Each turn, the current player either
//! [places tiles](Move::PlaceTiles) from their [rack](Rack) in a single line,
//! [exchanges tiles](Move::Exchange) with the [bag](TileBag), or [passes](Move::Pass).
//! Every placement must spell [known words](Dictionary) in every direction it touches.
//! The player with the most points at the end wins.
//!
//! ## How is a move validated?
//!
//! [RuleEngine::validate] checks a [candidate move](Move) against a [board](Board), the
//! current player's [rack](Rack) and a [dictionary](Dictionary) in a fixed order, and
//! rejects it with the first [violated rule](InvalidMove):
//!
//! * The placement is not empty, on the board, on empty squares, and every blank
//! carries a letter.
//! * The rack holds the placed [tiles](Tile), with rack blanks covering missing letters.
//! * The placed [tiles](Tile) share a row or a column, and existing tiles fill every gap
//! between them.
//! * The first placement covers the [center](Position::CENTER). Every later placement
//! touches some existing [tile](Tile).
//! * Every [word](Word) formed is at least [MIN_WORD_LEN] letters long and known.
//!
//! Validating never changes the [board](Board). The [validation](Validation) carries the
//! [tiles](Tile) which will actually land, the [words](Word) formed, and the score.
//!
//! ## How are points calculated?
//!
//! The score of a placement is the sum of the scores of every [word](Word) formed. A
//! [word](Word) scores the sum of its [letter values](Letter::value), where only newly
//! placed [tiles](Tile) receive [letter](Premium::letter_multiplier) and
//! [word](Premium::word_multiplier) premiums. Each premium square is used once.
//! Placing [RACK_SIZE] [tiles](Tile) in one move earns an extra [bingo bonus](BINGO_BONUS).
//!
//! ## How is the game advanced?
//!
//! [Game::new] and [Game::new_random_first_player] deal [RACK_SIZE] [tiles](Tile) to
//! each player. [Game::play] validates a [move](Move), applies it, refills the current
//! player's rack and hands the turn to the next player. The result is either the next
//! [game](Game) or a [finished game](FinishedGame).
//!
//! ## How is the game ended?
//!
//! The game ends after [CONSECUTIVE_PASS_LIMIT] [passes](Move::Pass) in a row, or when
//! some player empties their rack while the bag is empty. See [EndReason]. Every player
//! then loses the value of the [tiles](Tile) left in their rack, and a player who emptied
//! their rack gains the value left in every other rack. See [final_standings].
//!
//! ## How is the game viewed?
//!
//! [Game::view] and [FinishedGame::finished_view] borrow the state visible to all players.
//! [Game::get_rack] shares the private rack of each individual player.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds methods to get mutable references to the properties
//! of a [game](Game), helper methods to add random data to specific properties, and
//! fixtures to spell words onto a [board](Board).

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    single_use_lifetimes,
    missing_debug_implementations,
    unsafe_code
)]
#![warn(unused, unreachable_pub)]

pub use bag::*;
pub use board::*;
pub use consts::*;
pub use dictionary::*;
pub use game::*;
pub use moves::*;
pub use position::*;
#[cfg(test)]
pub use random::*;
pub use rules::*;
pub use tile::*;
pub use turn::*;
pub use types::*;
pub use words::*;

mod bag;
mod board;
mod consts;
mod dictionary;
mod game;
mod moves;
mod position;
#[cfg(test)]
mod random;
mod rules;
mod tile;
mod turn;
mod types;
mod words;
