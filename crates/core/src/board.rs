//! Board module - owns the cards, deals the pairs, lays out the grid
//!
//! The board is a `grid_size x grid_size` grid stored row-major in a flat
//! `Vec<Card>`. Index `i` sits at row `i / grid_size`, column `i % grid_size`.
//! Pair identities are dealt twice each and shuffled with the injected RNG, so
//! the same seed always produces the same board.

use crate::card::{Card, Rect};
use crate::error::ConfigurationError;
use crate::rng::SimpleRng;
use crate::types::{CARD_MARGIN, CARD_SIZE, HUD_OFFSET_Y, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Card geometry and the viewport the grid is centered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    pub card_w: u16,
    pub card_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    pub viewport_w: u16,
    pub viewport_h: u16,
    /// Extra downward shift applied after centering (room for the HUD).
    pub offset_y: u16,
}

impl Layout {
    /// The 800x600 pixel layout with 120px cards and 10px gaps.
    pub const fn nominal() -> Self {
        Self {
            card_w: CARD_SIZE,
            card_h: CARD_SIZE,
            gap_x: CARD_MARGIN,
            gap_y: CARD_MARGIN,
            viewport_w: WINDOW_WIDTH,
            viewport_h: WINDOW_HEIGHT,
            offset_y: HUD_OFFSET_Y,
        }
    }

    pub fn with_viewport(mut self, width: u16, height: u16) -> Self {
        self.viewport_w = width;
        self.viewport_h = height;
        self
    }

    /// Total width and height of an `n x n` grid.
    pub fn grid_extent(&self, n: u8) -> (u16, u16) {
        let n = n as u16;
        let w = n
            .saturating_mul(self.card_w.saturating_add(self.gap_x))
            .saturating_sub(self.gap_x);
        let h = n
            .saturating_mul(self.card_h.saturating_add(self.gap_y))
            .saturating_sub(self.gap_y);
        (w, h)
    }

    /// Rect of the card at `(row, col)` in an `n x n` grid.
    pub fn card_rect(&self, n: u8, row: u8, col: u8) -> Rect {
        let (grid_w, grid_h) = self.grid_extent(n);
        let start_x = self.viewport_w.saturating_sub(grid_w) / 2;
        let start_y = (self.viewport_h.saturating_sub(grid_h) / 2).saturating_add(self.offset_y);
        Rect {
            x: start_x.saturating_add((col as u16).saturating_mul(self.card_w.saturating_add(self.gap_x))),
            y: start_y.saturating_add((row as u16).saturating_mul(self.card_h.saturating_add(self.gap_y))),
            w: self.card_w,
            h: self.card_h,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::nominal()
    }
}

/// The dealt grid of cards
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid_size: u8,
    total_pairs: usize,
    layout: Layout,
    cards: Vec<Card>,
}

impl Board {
    /// Check that a `grid_size x grid_size` board can be dealt from the palette.
    ///
    /// Returns the number of pairs on success.
    pub fn validate(grid_size: u8, palette_size: usize) -> Result<usize, ConfigurationError> {
        if grid_size == 0 {
            return Err(ConfigurationError::EmptyGrid);
        }
        let cells = grid_size as usize * grid_size as usize;
        if cells % 2 != 0 {
            return Err(ConfigurationError::OddCardCount { grid_size });
        }
        // Pair ids are u8.
        let palette_size = palette_size.min(u8::MAX as usize + 1);
        let pairs = cells / 2;
        if pairs > palette_size {
            return Err(ConfigurationError::NotEnoughColors {
                pairs,
                palette_size,
            });
        }
        Ok(pairs)
    }

    /// Deal a new shuffled board.
    pub fn generate(
        grid_size: u8,
        palette_size: usize,
        layout: Layout,
        rng: &mut SimpleRng,
    ) -> Result<Self, ConfigurationError> {
        let total_pairs = Self::validate(grid_size, palette_size)?;

        let mut pair_ids: Vec<u8> = (0..total_pairs as u16)
            .flat_map(|id| [id as u8, id as u8])
            .collect();
        rng.shuffle(&mut pair_ids);

        Ok(Self::deal(grid_size, total_pairs, pair_ids, layout))
    }

    /// Build a board from an explicit deal (row-major pair ids).
    ///
    /// Useful for replays and fixed scenarios; the deal must still contain
    /// each pair id exactly twice.
    pub fn from_pair_ids(
        grid_size: u8,
        pair_ids: &[u8],
        layout: Layout,
    ) -> Result<Self, ConfigurationError> {
        let total_pairs = Self::validate(grid_size, u8::MAX as usize + 1)?;
        let mut counts = vec![0u8; total_pairs];
        let balanced = pair_ids.len() == total_pairs * 2
            && pair_ids.iter().all(|&id| match counts.get_mut(id as usize) {
                Some(slot) => {
                    *slot += 1;
                    *slot <= 2
                }
                None => false,
            });
        if !balanced {
            return Err(ConfigurationError::UnbalancedPairs { pairs: total_pairs });
        }

        Ok(Self::deal(grid_size, total_pairs, pair_ids.to_vec(), layout))
    }

    fn deal(grid_size: u8, total_pairs: usize, pair_ids: Vec<u8>, layout: Layout) -> Self {
        let cards = pair_ids
            .into_iter()
            .enumerate()
            .map(|(i, pair_id)| {
                let row = (i / grid_size as usize) as u8;
                let col = (i % grid_size as usize) as u8;
                let mut card = Card::new(row, col, pair_id);
                card.rect = layout.card_rect(grid_size, row, col);
                card
            })
            .collect();

        Self {
            grid_size,
            total_pairs,
            layout,
            cards,
        }
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Index of the card under a point, if any.
    pub fn card_at(&self, x: u16, y: u16) -> Option<usize> {
        self.cards.iter().position(|c| c.rect.contains(x, y))
    }

    /// Recompute every card rect for a new layout. Card state is untouched.
    pub fn relayout(&mut self, layout: Layout) {
        self.layout = layout;
        let n = self.grid_size;
        for card in &mut self.cards {
            card.rect = layout.card_rect(n, card.row, card.col);
        }
    }

    /// How many cards carry each pair id (index = pair id).
    pub fn pair_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.total_pairs];
        for card in &self.cards {
            if let Some(slot) = counts.get_mut(card.pair_id() as usize) {
                *slot += 1;
            }
        }
        counts
    }

    /// True once every card has been matched
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(seed: u32) -> Board {
        Board::generate(4, 8, Layout::nominal(), &mut SimpleRng::new(seed)).unwrap()
    }

    #[test]
    fn test_generate_has_two_of_each_pair() {
        let b = board(1);
        assert_eq!(b.len(), 16);
        assert_eq!(b.total_pairs(), 8);
        assert_eq!(b.pair_counts(), vec![2; 8]);
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a: Vec<u8> = board(7).cards().iter().map(Card::pair_id).collect();
        let b: Vec<u8> = board(7).cards().iter().map(Card::pair_id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cards_are_row_major() {
        let b = board(3);
        for (i, card) in b.cards().iter().enumerate() {
            assert_eq!(card.row() as usize, i / 4);
            assert_eq!(card.col() as usize, i % 4);
        }
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        assert_eq!(Board::validate(0, 8), Err(ConfigurationError::EmptyGrid));
        assert_eq!(
            Board::validate(3, 8),
            Err(ConfigurationError::OddCardCount { grid_size: 3 })
        );
        assert_eq!(
            Board::validate(6, 8),
            Err(ConfigurationError::NotEnoughColors {
                pairs: 18,
                palette_size: 8
            })
        );
        assert_eq!(Board::validate(2, 8), Ok(2));
        assert_eq!(Board::validate(4, 8), Ok(8));
    }

    #[test]
    fn test_nominal_layout_is_centered_below_hud() {
        let layout = Layout::nominal();
        assert_eq!(layout.grid_extent(4), (510, 510));
        assert_eq!(layout.card_rect(4, 0, 0), Rect::new(145, 85, 120, 120));
        assert_eq!(layout.card_rect(4, 1, 1), Rect::new(275, 215, 120, 120));
    }

    #[test]
    fn test_card_at_hits_and_misses() {
        let b = board(1);
        assert_eq!(b.card_at(145, 85), Some(0));
        assert_eq!(b.card_at(280, 220), Some(5));
        // Gap between column 0 and 1.
        assert_eq!(b.card_at(268, 100), None);
        assert_eq!(b.card_at(0, 0), None);
    }

    #[test]
    fn test_from_pair_ids_checks_balance() {
        let deal = [3, 3, 0, 1, 0, 1, 2, 2, 4, 5, 4, 5, 6, 7, 6, 7];
        let b = Board::from_pair_ids(4, &deal, Layout::nominal()).unwrap();
        assert_eq!(b.card(0).unwrap().pair_id(), 3);
        assert_eq!(b.card(1).unwrap().pair_id(), 3);

        let mut lopsided = deal;
        lopsided[2] = 3;
        assert_eq!(
            Board::from_pair_ids(4, &lopsided, Layout::nominal()),
            Err(ConfigurationError::UnbalancedPairs { pairs: 8 })
        );
        assert!(Board::from_pair_ids(4, &deal[..8], Layout::nominal()).is_err());
    }

    #[test]
    fn test_relayout_keeps_pairs() {
        let mut b = board(11);
        let before: Vec<u8> = b.cards().iter().map(Card::pair_id).collect();
        let small = Layout {
            card_w: 8,
            card_h: 4,
            gap_x: 2,
            gap_y: 1,
            viewport_w: 80,
            viewport_h: 24,
            offset_y: 0,
        };
        b.relayout(small);
        let after: Vec<u8> = b.cards().iter().map(Card::pair_id).collect();
        assert_eq!(before, after);
        // grid = 4*10-2 = 38 wide, 4*5-1 = 19 tall
        assert_eq!(b.card(0).unwrap().rect(), Rect::new(21, 2, 8, 4));
    }
}
