use crate::{standard_tiles, Letter, Tile};
use derive_more::{Display, Error};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use tap::Tap;
use tracing::debug;

/// Describes the reason why [`TileBag::exchange`] could not be executed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum ExchangeError {
    /// Attempting to exchange more [tiles](Tile) than remain in the bag.
    #[display("cannot exchange {requested} tiles when the bag holds {available}")]
    NotEnoughTiles {
        /// The number of [tiles](Tile) offered.
        requested: usize,
        /// The number of [tiles](Tile) in the bag.
        available: usize,
    },
}

/// The [tiles](Tile) which haven't been drawn yet.
///
/// Draws take [tiles](Tile) from the end of the bag. Every [tile](Tile) entering the bag
/// is swapped with a uniformly random position, so a bag created [shuffled](TileBag::shuffled)
/// stays uniformly shuffled.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    /// A bag which draws `tiles` from last to first. Useful when the draw order matters.
    #[inline]
    pub fn new(tiles: Vec<Tile>) -> TileBag {
        TileBag { tiles }
    }

    /// A bag of `tiles` in a random order.
    pub fn shuffled(tiles: Vec<Tile>) -> TileBag {
        TileBag {
            tiles: tiles.tap_mut(|tiles| tiles.shuffle(&mut rand::thread_rng())),
        }
    }

    /// A shuffled bag of the [standard tiles](standard_tiles).
    pub fn standard() -> TileBag {
        TileBag::shuffled(standard_tiles())
    }

    /// The number of [tiles](Tile) in the bag.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether every [tile](Tile) has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The [tiles](Tile) in the bag in draw order reversed.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The number of [tiles](Tile) printed with `letter` in the bag.
    pub fn letter_count(&self, letter: Letter) -> usize {
        self.tiles
            .iter()
            .filter(|&&tile| tile == Tile::Letter(letter))
            .count()
    }

    /// The number of blank [tiles](Tile) in the bag.
    pub fn blank_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_blank()).count()
    }

    /// # Returns
    ///
    /// The number of each kind of [tile](Tile) in the bag, letters in alphabetical order
    /// then blanks. Kinds with no [tiles](Tile) left are omitted.
    pub fn summary(&self) -> BTreeMap<Tile, usize> {
        self.tiles.iter().copied().counts().into_iter().collect()
    }

    /// Removes up to `n` [tiles](Tile). Fewer than `n` [tiles](Tile) are returned when
    /// the bag runs out, so callers must check the returned length.
    pub fn draw(&mut self, n: usize) -> Vec<Tile> {
        self.tiles
            .drain(self.tiles.len().saturating_sub(n)..)
            .collect()
    }

    /// Draws enough [tiles](Tile) to grow a rack holding `current` [tiles](Tile)
    /// to `target` [tiles](Tile). Draws nothing when `current` is at least `target`.
    #[inline]
    pub fn fill_to(&mut self, current: usize, target: usize) -> Vec<Tile> {
        self.draw(target.saturating_sub(current))
    }

    /// Draws one replacement for each of `tiles` before returning `tiles` to the bag.
    ///
    /// # Errors
    ///
    /// * [ExchangeError::NotEnoughTiles] Attempting to exchange more [tiles](Tile) than
    /// remain in the bag. `tiles` are handed back and the bag is unchanged.
    ///
    /// # Returns
    ///
    /// The replacement [tiles](Tile).
    pub fn exchange(&mut self, tiles: Vec<Tile>) -> Result<Vec<Tile>, (Vec<Tile>, ExchangeError)> {
        let requested = tiles.len();
        let available = self.tiles.len();
        if requested > available {
            return Err((
                tiles,
                ExchangeError::NotEnoughTiles {
                    requested,
                    available,
                },
            ));
        }

        // drain before returning tiles so that tiles do not come straight back
        let received = self.draw(requested);
        self.scatter(tiles);

        debug!(requested, remaining = self.tiles.len(), "exchanged tiles");
        Ok(received)
    }

    /// Returns `tiles` to the bag, each swapped with a random position at or below its own,
    /// in place and without an O(n log n) shuffle.
    fn scatter(&mut self, tiles: Vec<Tile>) {
        let start = self.tiles.len();
        self.tiles.extend(tiles);
        let end = self.tiles.len();
        if start == end {
            return;
        }

        let mut rng = rand::thread_rng();
        for index in start..end {
            let random_index = rng.gen_range(0..=index);
            self.tiles.swap(index, random_index);
        }
    }
}
