use crate::{
    Axis, Board, Letter, Placements, Points, Position, Rack, Racks, Tile, TileBag, WordList,
    RACK_SIZE,
};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// The [tile](Tile) a character stands for in test fixtures: an uppercase letter is
/// a letter tile, a lowercase letter is a blank assigned that letter, and
/// [BLANK_CHAR](crate::BLANK_CHAR) is an unassigned blank.
///
/// # Panics
///
/// If `char` is none of those.
pub fn test_tile(char: char) -> Tile {
    match Tile::from_char(char) {
        Some(Tile::Letter(letter)) if char.is_ascii_lowercase() => Tile::Blank(Some(letter)),
        Some(tile) => tile,
        None => panic!("{:?} should be a letter or a blank", char),
    }
}

/// Spells `text` from `start` along `axis`, one [tile](Tile) per character of
/// [test_tile].
pub fn spell(start: &str, axis: Axis, text: &str) -> Placements {
    let start: Position = start.parse().expect("start should be in notation");
    text.chars()
        .enumerate()
        .map(|(offset, char)| (start.step(axis, offset as isize), test_tile(char)))
        .collect()
}

/// Places every [tile](Tile) of `placements` on `board`.
///
/// # Panics
///
/// If some [position](Position) is off the board or occupied.
pub fn place_all(board: &mut Board, placements: &Placements) {
    for (&position, &tile) in placements {
        board
            .place(position, tile)
            .expect("test placements should be on empty squares");
    }
}

/// A rack holding one [tile](Tile) per character of [test_tile].
pub fn rack_from(text: &str) -> Rack {
    text.chars().map(test_tile).collect()
}

/// A small [word list](WordList) covering the words formed in unit tests.
pub fn test_dictionary() -> WordList {
    [
        "AE", "AT", "AX", "CAT", "CATE", "CATS", "QUEST", "READING", "TO",
    ]
    .into_iter()
    .collect()
}

/// A vector of `len` random letter [tiles](Tile).
pub fn random_tiles<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Tile> {
    (0..len).map(|_| rng.gen::<Tile>()).collect()
}

/// It inserts a random, small, non-zero number of [tiles](Tile) into the bag.
///
/// # Returns
///
/// The number of additional [tiles](Tile) in the bag.
pub fn random_bag<R: Rng + ?Sized>(rng: &mut R, bag: &mut TileBag) -> usize {
    let bag_len = rng.gen_range(10..20);
    let mut tiles = bag.tiles().to_vec();
    tiles.extend(random_tiles(rng, bag_len));
    *bag = TileBag::new(tiles);

    bag_len
}

/// Sets each player's points to a random, medium, non-zero number.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, points: &mut Points) {
    let possible_points = Uniform::from(100..200);
    points.fill_with(|| possible_points.sample(rng));
}

/// Pushes the same random, small, non-zero number of [tiles](Tile) into
/// each player's rack.
///
/// # Returns
///
/// The number of additional [tiles](Tile) in each player's rack.
pub fn random_racks<R: Rng + ?Sized>(rng: &mut R, racks: &mut Racks) -> usize {
    let rack_len = rng.gen_range(2..=RACK_SIZE);
    for rack in racks {
        rack.extend(random_tiles(rng, rack_len));
    }

    rack_len
}

/// If `players` is not `0`, sets the current player to a random number between `0` inclusive
/// and `players` exclusive. Otherwise, does nothing.
///
/// # Returns
///
/// The index of the player whose turn it is.
pub fn random_current_player<R: Rng + ?Sized>(
    rng: &mut R,
    current_player: &mut usize,
    players: usize,
) -> usize {
    if players > 0 {
        *current_player = rng.gen_range(0..players);
    }

    *current_player
}

/// A random [letter](Letter) other than `letter`.
pub fn random_different_letter<R: Rng + ?Sized>(rng: &mut R, letter: Letter) -> Letter {
    let possible_indexes = Uniform::from(0..Letter::LETTERS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // removing the letter at its own index in the array of letters
    let random_different_index = random_index + usize::from(random_index >= letter as usize);
    Letter::LETTERS[random_different_index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dictionary, BLANK_CHAR, PLAYER_CAPACITY, RACK_CAPACITY};

    #[test]
    fn test_tile_chars() {
        assert_eq!(Tile::letter(Letter::C), test_tile('C'));
        assert_eq!(Tile::Blank(Some(Letter::C)), test_tile('c'));
        assert_eq!(Tile::blank(), test_tile(BLANK_CHAR));
    }

    #[test]
    fn spell_vertical() {
        let placements = spell("H8", Axis::Vertical, "Qi");

        assert_eq!(
            Placements::from([
                (Position::CENTER, Tile::letter(Letter::Q)),
                (Position::new(8, 7), Tile::Blank(Some(Letter::I))),
            ]),
            placements
        );
    }

    #[test]
    fn rack_from_text() {
        let rack = rack_from("AB?");

        assert_eq!(3, rack.len());
        assert!(rack[2].is_blank());
    }

    #[test]
    fn test_dictionary_contains_fixtures() {
        let dictionary = test_dictionary();

        assert!(dictionary.contains("READING"));
        assert!(!dictionary.contains("CATT"));
    }

    #[test]
    fn random_bag_empty() {
        let mut bag = TileBag::default();

        let bag_len = random_bag(&mut rand::thread_rng(), &mut bag);

        assert_eq!(bag.len(), bag_len);
    }

    #[test]
    fn random_points_non_zero() {
        let mut points = Points::with_capacity(PLAYER_CAPACITY);
        for _ in 0..points.capacity() {
            points.push(0);
        }

        random_points(&mut rand::thread_rng(), &mut points);

        for point in points {
            assert!(point > 0);
        }
    }

    #[test]
    fn random_racks_same_len() {
        let mut racks = Racks::with_capacity(PLAYER_CAPACITY);
        for _ in 0..racks.capacity() {
            racks.push(Rack::with_capacity(RACK_CAPACITY));
        }

        let rack_len = random_racks(&mut rand::thread_rng(), &mut racks);

        for rack in &racks {
            assert_eq!(rack_len, rack.len());
        }
    }

    #[test]
    fn random_current_player_some_players() {
        let mut current_player = 0;

        let random_current_player = random_current_player(
            &mut rand::thread_rng(),
            &mut current_player,
            PLAYER_CAPACITY,
        );

        assert!((0..PLAYER_CAPACITY).contains(&random_current_player));
        assert_eq!(random_current_player, current_player);
    }

    #[test]
    fn random_different_letter_single_sample() {
        let mut rng = rand::thread_rng();
        let letter = rng.gen();

        assert_ne!(letter, random_different_letter(&mut rng, letter));
    }
}
