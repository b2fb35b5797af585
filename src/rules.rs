use crate::{
    batch_continuous_range, extract_words, find_bounds, line_axis, score_word, take_tile, Board,
    Dictionary, Exchanges, Move, Placements, Position, Rack, Tile, Word, BINGO_BONUS, RACK_SIZE,
};
use derive_more::{Display, Error};
use itertools::Itertools;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Describes the rule a [move](Move) violates, found by [RuleEngine::validate].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum InvalidMove {
    /// Attempting to place no [tiles](Tile).
    #[display("no tiles placed")]
    EmptyPlacement,
    /// Attempting to place a [tile](Tile) off the board.
    #[display("{position} is off the board")]
    OutOfBounds {
        /// The first [position](Position) off the board.
        position: Position,
    },
    /// Attempting to place a [tile](Tile) on an occupied square.
    #[display("{position} is already occupied")]
    Occupied {
        /// The first occupied [position](Position).
        position: Position,
    },
    /// Attempting to place a blank [tile](Tile) without the letter it stands for.
    #[display("blank tile at {position} has no letter")]
    UnassignedBlank {
        /// The first [position](Position) of an unassigned blank.
        position: Position,
    },
    /// Attempting to place [tiles](Tile) which the rack does not hold, even counting
    /// its blanks.
    #[display("insufficient tiles: missing {}", missing.iter().join(", "))]
    InsufficientTiles {
        /// The placed [tiles](Tile) left uncovered by the rack.
        missing: Vec<Tile>,
    },
    /// Attempting to place [tiles](Tile) across several rows and several columns.
    #[display("not a straight line")]
    NotInLine,
    /// Attempting to place [tiles](Tile) with empty squares between them.
    #[display(
        "gap in placement at {}",
        gaps.iter().map(|(first, last)| format!("{}..{}", first, last)).join(", ")
    )]
    Gaps {
        /// The first and last [position](Position) of each run of empty squares.
        gaps: BTreeSet<(Position, Position)>,
    },
    /// Attempting a first move which does not cover the center square.
    #[display("first move must cover {}", Position::CENTER)]
    CenterNotCovered,
    /// Attempting to place [tiles](Tile) which touch no [tile](Tile) on the board.
    #[display("disconnected from existing tiles")]
    NotConnected,
    /// Attempting a placement which forms no word of at least two letters.
    #[display("no word formed")]
    NoWordFormed,
    /// Attempting a placement which forms words missing from the dictionary.
    #[display("word not in dictionary: {}", words.iter().join(", "))]
    UnknownWords {
        /// Every formed word missing from the dictionary.
        words: BTreeSet<String>,
    },
    /// Attempting to exchange no [tiles](Tile).
    #[display("no tiles exchanged")]
    EmptyExchange,
    /// Attempting to exchange [tiles](Tile) which the rack does not hold.
    #[display("tiles not in rack: {}", missing.iter().join(", "))]
    TilesNotInRack {
        /// The offered [tiles](Tile) left uncovered by the rack.
        missing: Vec<Tile>,
    },
}

/// The outcome of a legal [move](Move).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Validation {
    /// The [tiles](Tile) as they will land on the board. Letters the rack covers
    /// with blanks are placed as assigned blanks.
    placements: Placements,
    /// The points earned.
    score: usize,
    /// Every formed [word](Word).
    words: Vec<Word>,
}

impl Validation {
    /// The [tiles](Tile) as they will land on the board, empty unless [tiles](Tile)
    /// are placed.
    #[inline]
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// The points earned, including the [bingo bonus](BINGO_BONUS).
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Every formed [word](Word).
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The text of every formed [word](Word).
    pub fn word_texts(&self) -> Vec<String> {
        self.words.iter().map(Word::text).collect()
    }

    /// The placements, score and words.
    #[inline]
    pub fn into_parts(self) -> (Placements, usize, Vec<Word>) {
        (self.placements, self.score, self.words)
    }
}

/// Decides whether a [move](Move) is legal and how many points it earns.
///
/// The engine never changes the [board](Board) or rack it is given. Placements are
/// tested on a [snapshot](Board::snapshot), so the caller applies a legal move
/// afterwards or not at all.
#[derive(Debug, Clone)]
pub struct RuleEngine<D> {
    dictionary: D,
}

impl<D: Dictionary> RuleEngine<D> {
    /// An engine which accepts the words of `dictionary`.
    pub fn new(dictionary: D) -> RuleEngine<D> {
        RuleEngine { dictionary }
    }

    /// The words the engine accepts.
    #[inline]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Checks `candidate` against `board` and the current player's `rack`.
    ///
    /// A [pass](Move::Pass) is always legal and earns nothing. An [exchange](Move::Exchange)
    /// is legal when the rack holds every offered [tile](Tile); whether the bag can
    /// cover it is left to [TileBag::exchange](crate::TileBag::exchange).
    ///
    /// # Placement Rules
    ///
    /// Checked in order, reporting the first violation:
    /// 1. Some [tile](Tile) is placed.
    /// 2. Every [position](Position) is on the board and empty.
    /// 3. Every placed blank carries a letter.
    /// 4. The rack holds the [tiles](Tile). Placed blanks use rack blanks, and letters
    /// the rack lacks are covered by its remaining blanks.
    /// 5. The [positions](Position) share a row or a column.
    /// 6. Every square between the first and last placed [tile](Tile) is filled, by
    /// a placed [tile](Tile) or one already on the board.
    /// 7. A first move covers the center square. Any other move touches a [tile](Tile)
    /// already on the board.
    /// 8. Some word of at least two letters is formed, and the dictionary contains
    /// every formed word.
    ///
    /// # Points Calculation
    ///
    /// Each formed [word](Word) scores its [letters](score_word), with premiums only
    /// under newly placed [tiles](Tile). A [tile](Tile) in two formed words counts in
    /// both. Placing [RACK_SIZE] [tiles](Tile) adds the [BINGO_BONUS].
    ///
    /// # Errors
    ///
    /// The [InvalidMove] naming the violated rule.
    #[instrument(level = "debug", skip(self, candidate, board, rack))]
    pub fn validate(
        &self,
        candidate: &Move,
        board: &Board,
        rack: &[Tile],
        is_first_move: bool,
    ) -> Result<Validation, InvalidMove> {
        let result = match candidate {
            Move::PlaceTiles(placements) => {
                self.validate_placements(placements, board, rack, is_first_move)
            }
            Move::Pass => Ok(Validation::default()),
            Move::Exchange(tiles) => check_exchange(tiles, rack).map(|()| Validation::default()),
        };

        match &result {
            Ok(validation) => debug!(
                score = validation.score,
                words = ?validation.word_texts(),
                "accepted move"
            ),
            Err(reason) => debug!(%reason, "rejected move"),
        }
        result
    }

    fn validate_placements(
        &self,
        placements: &Placements,
        board: &Board,
        rack: &[Tile],
        is_first_move: bool,
    ) -> Result<Validation, InvalidMove> {
        if placements.is_empty() {
            return Err(InvalidMove::EmptyPlacement);
        }

        for &position in placements.keys() {
            if !position.is_in_bounds() {
                return Err(InvalidMove::OutOfBounds { position });
            }
            if board.is_occupied(position) {
                return Err(InvalidMove::Occupied { position });
            }
        }

        let placements = resolve_blanks(placements, rack)?;

        let Some(axis) = line_axis(placements.keys().copied()) else {
            return Err(InvalidMove::NotInLine);
        };

        let (min, max) = find_bounds(placements.keys().copied())
            .unwrap_or_else(|| unreachable!("placements should not be empty"));
        let start = min.along(axis);
        let gaps: BTreeSet<(Position, Position)> = (start..=max.along(axis))
            .filter(|&value| {
                let position = min.step(axis, value - start);
                !placements.contains_key(&position) && board.is_empty(position)
            })
            .peekable()
            .batching(batch_continuous_range)
            .map(|range| {
                (
                    min.step(axis, range.start() - start),
                    min.step(axis, range.end() - start),
                )
            })
            .collect();
        if !gaps.is_empty() {
            return Err(InvalidMove::Gaps { gaps });
        }

        if is_first_move {
            if !placements.contains_key(&Position::CENTER) {
                return Err(InvalidMove::CenterNotCovered);
            }
        } else if !placements
            .keys()
            .any(|&position| board.touches_tile(position))
        {
            return Err(InvalidMove::NotConnected);
        }

        let mut snapshot = board.snapshot();
        for (&position, &tile) in &placements {
            snapshot.place(position, tile).unwrap_or_else(|error| {
                unreachable!("checked placement at {} should succeed: {}", position, error)
            });
        }

        let words = extract_words(&snapshot, &placements);
        if words.is_empty() {
            return Err(InvalidMove::NoWordFormed);
        }

        let unknown_words: BTreeSet<String> = words
            .iter()
            .map(Word::text)
            .filter(|text| !self.dictionary.contains(text))
            .collect();
        if !unknown_words.is_empty() {
            return Err(InvalidMove::UnknownWords {
                words: unknown_words,
            });
        }

        let bingo_bonus = if placements.len() == RACK_SIZE {
            BINGO_BONUS
        } else {
            0
        };
        let score = words
            .iter()
            .map(|word| score_word(board, &placements, word))
            .sum::<usize>()
            + bingo_bonus;

        Ok(Validation {
            placements,
            score,
            words,
        })
    }
}

/// Matches each placed [tile](Tile) with a [tile](Tile) of `rack`.
///
/// Placed blanks must carry a letter and take rack blanks first. A placed letter the
/// rack lacks takes one of the remaining rack blanks and becomes a blank assigned
/// that letter.
///
/// # Errors
///
/// * [InvalidMove::UnassignedBlank] Some placed blank has no letter.
/// * [InvalidMove::InsufficientTiles] The rack cannot cover every placed [tile](Tile).
///
/// # Returns
///
/// The placements as they will land on the board.
fn resolve_blanks(placements: &Placements, rack: &[Tile]) -> Result<Placements, InvalidMove> {
    if let Some((&position, _)) = placements
        .iter()
        .find(|(_, tile)| **tile == Tile::blank())
    {
        return Err(InvalidMove::UnassignedBlank { position });
    }

    let mut remaining: Rack = rack.iter().copied().collect();
    let mut missing = Vec::new();

    let (blanks, letters): (Vec<_>, Vec<_>) = placements
        .iter()
        .map(|(&position, &tile)| (position, tile))
        .partition(|(_, tile)| tile.is_blank());

    for &(_, tile) in &blanks {
        if take_tile(&mut remaining, tile).is_none() {
            missing.push(Tile::blank());
        }
    }

    let mut resolved = Placements::new();
    for (position, tile) in letters {
        if take_tile(&mut remaining, tile).is_some() {
            resolved.insert(position, tile);
        } else if take_tile(&mut remaining, Tile::blank()).is_some() {
            resolved.insert(position, Tile::Blank(tile.display_letter()));
        } else {
            missing.push(tile);
        }
    }

    if !missing.is_empty() {
        return Err(InvalidMove::InsufficientTiles { missing });
    }

    resolved.extend(blanks);
    Ok(resolved)
}

/// # Errors
///
/// * [InvalidMove::EmptyExchange] Attempting to exchange no [tiles](Tile).
/// * [InvalidMove::TilesNotInRack] Attempting to exchange [tiles](Tile) not in `rack`.
fn check_exchange(tiles: &Exchanges, rack: &[Tile]) -> Result<(), InvalidMove> {
    if tiles.is_empty() {
        return Err(InvalidMove::EmptyExchange);
    }

    let mut remaining: Rack = rack.iter().copied().collect();
    let missing = tiles
        .iter()
        .filter(|&&tile| take_tile(&mut remaining, tile).is_none())
        .copied()
        .collect_vec();
    if !missing.is_empty() {
        return Err(InvalidMove::TilesNotInRack { missing });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{place_all, rack_from, spell, test_dictionary, Axis, Letter, WordList, BOARD_SIZE};
    use map_macro::btree_set;

    fn engine() -> RuleEngine<WordList> {
        RuleEngine::new(test_dictionary())
    }

    /// A board holding `CAT` across the center, as after the opening move.
    fn cat_board() -> Board {
        let mut board = Board::standard();
        place_all(&mut board, &spell("G8", Axis::Horizontal, "CAT"));
        board
    }

    fn test_validate(
        board: &Board,
        placements: Placements,
        rack: &str,
        is_first_move: bool,
        expected_score: usize,
        expected_words: &[&str],
    ) -> Validation {
        let validation = engine()
            .validate(
                &Move::PlaceTiles(placements),
                board,
                &rack_from(rack),
                is_first_move,
            )
            .expect("validate should return Ok");

        let actual_words: BTreeSet<String> = validation.word_texts().into_iter().collect();
        let expected_words: BTreeSet<String> =
            expected_words.iter().map(|word| word.to_string()).collect();
        assert_eq!(expected_words, actual_words);
        assert_eq!(expected_score, validation.score());
        validation
    }

    fn test_validate_error(
        board: &Board,
        placements: Placements,
        rack: &str,
        is_first_move: bool,
        expected_error: InvalidMove,
    ) {
        let actual_error = engine()
            .validate(
                &Move::PlaceTiles(placements),
                board,
                &rack_from(rack),
                is_first_move,
            )
            .expect_err("validate should return Err");

        assert_eq!(expected_error, actual_error);
    }

    fn position(notation: &str) -> Position {
        notation.parse().expect("notation should parse")
    }

    #[test]
    fn cat_through_center() {
        test_validate(
            &Board::standard(),
            spell("G8", Axis::Horizontal, "CAT"),
            "CATERSD",
            true,
            10,
            &["CAT"],
        );
    }

    #[test]
    fn bingo() {
        // READING letters sum to 9, doubled by the center square
        let validation = test_validate(
            &Board::standard(),
            spell("E8", Axis::Horizontal, "READING"),
            "GNIDAER",
            true,
            18 + BINGO_BONUS,
            &["READING"],
        );

        assert_eq!(68, validation.score());
    }

    #[test]
    fn five_tiles_no_bingo() {
        test_validate(
            &Board::standard(),
            spell("G8", Axis::Horizontal, "QUEST"),
            "QUESTRX",
            true,
            (10 + 1 + 1 + 1 + 1) * 2,
            &["QUEST"],
        );
    }

    #[test]
    fn empty_placement() {
        test_validate_error(
            &Board::standard(),
            Placements::new(),
            "CAT",
            true,
            InvalidMove::EmptyPlacement,
        );
    }

    #[test]
    fn out_of_bounds_fails_fast() {
        let placements = Placements::from([
            (Position::new(7, -1), Tile::letter(Letter::C)),
            (Position::new(7, 0), Tile::letter(Letter::A)),
            (Position::new(7, BOARD_SIZE as isize), Tile::letter(Letter::T)),
        ]);

        test_validate_error(
            &Board::standard(),
            placements,
            "CAT",
            true,
            InvalidMove::OutOfBounds {
                position: Position::new(7, -1),
            },
        );
    }

    #[test]
    fn occupied() {
        test_validate_error(
            &cat_board(),
            spell("H8", Axis::Vertical, "AT"),
            "AT",
            false,
            InvalidMove::Occupied {
                position: Position::CENTER,
            },
        );
    }

    #[test]
    fn unassigned_blank() {
        test_validate_error(
            &Board::standard(),
            spell("G8", Axis::Horizontal, "C?T"),
            "C?T",
            true,
            InvalidMove::UnassignedBlank {
                position: Position::CENTER,
            },
        );
    }

    #[test]
    fn insufficient_tiles() {
        test_validate_error(
            &Board::standard(),
            spell("G8", Axis::Horizontal, "CATS"),
            "CAXY",
            true,
            InvalidMove::InsufficientTiles {
                missing: vec![Tile::letter(Letter::T), Tile::letter(Letter::S)],
            },
        );
    }

    #[test]
    fn placed_blank_needs_rack_blank() {
        test_validate_error(
            &Board::standard(),
            spell("G8", Axis::Horizontal, "CaT"),
            "CAT",
            true,
            InvalidMove::InsufficientTiles {
                missing: vec![Tile::blank()],
            },
        );
    }

    #[test]
    fn rack_blank_covers_missing_letter() {
        let validation = test_validate(
            &Board::standard(),
            spell("G8", Axis::Horizontal, "CAT"),
            "C?T",
            true,
            (3 + 0 + 1) * 2,
            &["CAT"],
        );

        assert_eq!(
            Some(&Tile::Blank(Some(Letter::A))),
            validation.placements().get(&Position::CENTER)
        );
        assert_eq!(
            Some(&Tile::letter(Letter::C)),
            validation.placements().get(&position("G8"))
        );
    }

    #[test]
    fn placed_blank_uses_rack_blank_first() {
        // the blank placed for A leaves no blank to cover the missing T
        test_validate_error(
            &Board::standard(),
            spell("G8", Axis::Horizontal, "CaT"),
            "C?X",
            true,
            InvalidMove::InsufficientTiles {
                missing: vec![Tile::letter(Letter::T)],
            },
        );
    }

    #[test]
    fn not_in_line() {
        let placements = spell("H9", Axis::Horizontal, "TO")
            .into_iter()
            .chain(spell("C3", Axis::Horizontal, "A"))
            .collect();

        test_validate_error(&cat_board(), placements, "TOA", false, InvalidMove::NotInLine);
    }

    #[test]
    fn diagonal_not_in_line() {
        let placements = Placements::from([
            (position("G8"), Tile::letter(Letter::A)),
            (position("H9"), Tile::letter(Letter::T)),
        ]);

        test_validate_error(
            &Board::standard(),
            placements,
            "AT",
            true,
            InvalidMove::NotInLine,
        );
    }

    #[test]
    fn gaps() {
        let placements = spell("D8", Axis::Horizontal, "C")
            .into_iter()
            .chain(spell("H8", Axis::Horizontal, "A"))
            .chain(spell("K8", Axis::Horizontal, "T"))
            .collect();

        test_validate_error(
            &Board::standard(),
            placements,
            "CAT",
            true,
            InvalidMove::Gaps {
                gaps: btree_set! {
                    (position("E8"), position("G8")),
                    (position("I8"), position("J8")),
                },
            },
        );
    }

    #[test]
    fn existing_tiles_fill_gaps() {
        // C and S around the existing AT of CAT forms CATS through the board
        let mut board = Board::standard();
        place_all(&mut board, &spell("H8", Axis::Horizontal, "AT"));
        let placements = spell("G8", Axis::Horizontal, "C")
            .into_iter()
            .chain(spell("J8", Axis::Horizontal, "S"))
            .collect();

        test_validate(&board, placements, "CS", false, 3 + 1 + 1 + 1, &["CATS"]);
    }

    #[test]
    fn first_move_must_cover_center() {
        test_validate_error(
            &Board::standard(),
            spell("A1", Axis::Horizontal, "CAT"),
            "CAT",
            true,
            InvalidMove::CenterNotCovered,
        );
        test_validate_error(
            &Board::standard(),
            spell("G8", Axis::Horizontal, "C"),
            "C",
            true,
            InvalidMove::CenterNotCovered,
        );
    }

    #[test]
    fn first_move_single_tile_forms_no_word() {
        test_validate_error(
            &Board::standard(),
            spell("H8", Axis::Horizontal, "A"),
            "A",
            true,
            InvalidMove::NoWordFormed,
        );
    }

    #[test]
    fn not_connected() {
        test_validate_error(
            &cat_board(),
            spell("A1", Axis::Horizontal, "AT"),
            "AT",
            false,
            InvalidMove::NotConnected,
        );
    }

    #[test]
    fn unknown_words_cites_every_word() {
        // XQ across with cross words AX and TQ
        test_validate_error(
            &cat_board(),
            spell("H9", Axis::Horizontal, "XQ"),
            "XQ",
            false,
            InvalidMove::UnknownWords {
                words: btree_set! { String::from("XQ"), String::from("TQ") },
            },
        );
    }

    #[test]
    fn cross_words_scored() {
        // TO under AT of CAT forms TO across, AT and TO down, with O on the
        // double letter square I9
        test_validate(
            &cat_board(),
            spell("H9", Axis::Horizontal, "TO"),
            "TO",
            false,
            (1 + 2) + (1 + 1) + (1 + 2),
            &["TO", "AT"],
        );
    }

    #[test]
    fn single_tile_scores_both_words() {
        let mut board = cat_board();
        place_all(&mut board, &spell("J7", Axis::Vertical, "A"));
        // E at J8 forms CATE across and AE down, J8 is a plain square
        test_validate(
            &board,
            spell("J8", Axis::Horizontal, "E"),
            "E",
            false,
            (3 + 1 + 1 + 1) + (1 + 1),
            &["CATE", "AE"],
        );
    }

    #[test]
    fn validate_leaves_board_unchanged() {
        let board = cat_board();
        let before = board.clone();

        engine()
            .validate(
                &Move::PlaceTiles(spell("H9", Axis::Horizontal, "TO")),
                &board,
                &rack_from("TO"),
                false,
            )
            .expect("validate should return Ok");

        assert_eq!(before, board);
    }

    #[test]
    fn pass_scores_nothing() {
        let validation = engine()
            .validate(&Move::Pass, &cat_board(), &rack_from(""), false)
            .expect("validate should return Ok");

        assert_eq!(0, validation.score());
        assert!(validation.words().is_empty());
        assert!(validation.placements().is_empty());
    }

    #[test]
    fn exchange_tiles_in_rack() {
        let validation = engine()
            .validate(
                &Move::Exchange(vec![Tile::letter(Letter::Q), Tile::blank()]),
                &Board::standard(),
                &rack_from("AQ?E"),
                true,
            )
            .expect("validate should return Ok");

        assert_eq!(0, validation.score());
    }

    #[test]
    fn exchange_tiles_not_in_rack() {
        let actual_error = engine()
            .validate(
                &Move::Exchange(vec![
                    Tile::letter(Letter::Q),
                    Tile::letter(Letter::Q),
                    Tile::blank(),
                ]),
                &Board::standard(),
                &rack_from("AQE"),
                true,
            )
            .expect_err("validate should return Err");

        assert_eq!(
            InvalidMove::TilesNotInRack {
                missing: vec![Tile::letter(Letter::Q), Tile::blank()],
            },
            actual_error
        );
    }

    #[test]
    fn empty_exchange() {
        let actual_error = engine()
            .validate(
                &Move::Exchange(Vec::new()),
                &Board::standard(),
                &rack_from("AQE"),
                true,
            )
            .expect_err("validate should return Err");

        assert_eq!(InvalidMove::EmptyExchange, actual_error);
    }

    #[test]
    fn reasons_are_readable() {
        assert_eq!(
            "word not in dictionary: TQ, XQ",
            InvalidMove::UnknownWords {
                words: btree_set! { String::from("XQ"), String::from("TQ") },
            }
            .to_string()
        );
        assert_eq!(
            "gap in placement at E8..G8",
            InvalidMove::Gaps {
                gaps: btree_set! { (position("E8"), position("G8")) },
            }
            .to_string()
        );
        assert_eq!("first move must cover H8", InvalidMove::CenterNotCovered.to_string());
        assert_eq!(
            "insufficient tiles: missing T, ?",
            InvalidMove::InsufficientTiles {
                missing: vec![Tile::letter(Letter::T), Tile::blank()],
            }
            .to_string()
        );
    }
}
