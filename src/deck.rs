use crate::cards::Card;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

const FULL: u64 = (1 << 52) - 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("card {0} is not in the deck")]
    Missing(Card),
    #[error("card {0} is already in the deck")]
    AlreadyPresent(Card),
}

/// The cards not yet assigned to a player or the board.
///
/// Stored as a 52-bit membership mask keyed by [`Card::index`], so removing and
/// re-inserting cards restores exactly the prior state in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deck {
    mask: u64,
}

impl Deck {
    /// ```
    /// use holdem_equity::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.remaining(), 52);
    /// ```
    pub const fn standard() -> Self {
        Self { mask: FULL }
    }

    /// Number of cards still in the deck.
    pub const fn remaining(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub const fn contains(&self, card: Card) -> bool {
        self.mask & (1u64 << card.index()) != 0
    }

    /// Take a card out of the deck. Fails if it was already dealt.
    pub fn remove(&mut self, card: Card) -> Result<(), DeckError> {
        if !self.contains(card) {
            return Err(DeckError::Missing(card));
        }
        self.mask &= !(1u64 << card.index());
        Ok(())
    }

    /// Put a previously removed card back.
    pub fn insert(&mut self, card: Card) -> Result<(), DeckError> {
        if self.contains(card) {
            return Err(DeckError::AlreadyPresent(card));
        }
        self.mask |= 1u64 << card.index();
        Ok(())
    }

    /// Remove every card in `cards`, stopping at the first one not present.
    pub fn remove_all<'a, I>(&mut self, cards: I) -> Result<(), DeckError>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        for &card in cards {
            self.remove(card)?;
        }
        Ok(())
    }

    /// Remaining cards in suit-major, value-ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        let mask = self.mask;
        (0u8..52).filter(move |&i| mask & (1u64 << i) != 0).filter_map(Card::from_index)
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }

    /// Remaining cards in a reproducible random order.
    pub fn shuffled_seeded(&self, seed: u64) -> Vec<Card> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = self.to_vec();
        cards.shuffle(&mut rng);
        cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
