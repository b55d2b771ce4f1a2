pub(crate) mod combinations;
pub(crate) mod hand_analysis;
pub(crate) mod rank_counts;
pub(crate) mod straight_info;
pub mod tiebreak;

use crate::cards::{Card, Rank};
use combinations::Combinations;
use hand_analysis::HandAnalysis;
use std::fmt;

pub use tiebreak::{break_tie, eliminate, TieBreakError, Winner};

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("not enough cards to evaluate: {0} (need at least 5)")]
    NotEnoughCards(usize),
    #[error("too many cards to evaluate: {0} (at most 7)")]
    TooManyCards(usize),
}

/// A player's strongest 5-card hand.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct BestHand {
    pub category: Category,
    pub kicker: Rank,
    pub(crate) analysis: HandAnalysis,
}

impl BestHand {
    fn new(analysis: HandAnalysis) -> Self {
        let category = analysis.category();
        Self { category, kicker: analysis.kicker(category), analysis }
    }

    /// The chosen five cards, in the order they were drawn from the input.
    pub fn cards(&self) -> [Card; 5] {
        self.analysis.cards
    }

    /// Ranks of the chosen five cards, highest first.
    pub fn ranks(&self) -> [Rank; 5] {
        self.analysis.ranks
    }
}

/// Classify exactly five cards.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::evaluator::{classify, Category};
///
/// let c = parse_cards("TH JH QH KH AH").unwrap();
/// assert_eq!(classify(&[c[0], c[1], c[2], c[3], c[4]]), Category::RoyalFlush);
/// ```
pub fn classify(cards: &[Card; 5]) -> Category {
    HandAnalysis::new(cards).category()
}

/// Tie-break scalar for choosing between two same-category subsets of one
/// player's cards: the highest rank outside the category's matched group.
pub fn kicker(cards: &[Card; 5], category: Category) -> Rank {
    HandAnalysis::new(cards).kicker(category)
}

/// Select the best 5-card subset of 5 to 7 cards.
///
/// Subsets are visited in lexicographic index order. A later subset replaces
/// the running best only with a strictly higher category, or the same
/// category and a strictly higher kicker.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::evaluator::{best_hand, Category};
///
/// let cards = parse_cards("AS AH AD KD 2C 7H 9S").unwrap();
/// let best = best_hand(&cards).unwrap();
/// assert_eq!(best.category, Category::ThreeOfAKind);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<BestHand, EvalError> {
    match cards.len() {
        n if n < 5 => return Err(EvalError::NotEnoughCards(n)),
        n if n > 7 => return Err(EvalError::TooManyCards(n)),
        _ => {}
    }

    let mut best: Option<BestHand> = None;
    for [i, j, k, l, m] in Combinations::<5>::new(cards.len()) {
        let five = [cards[i], cards[j], cards[k], cards[l], cards[m]];
        let candidate = BestHand::new(HandAnalysis::new(&five));
        let better = match &best {
            None => true,
            Some(b) => {
                candidate.category > b.category
                    || (candidate.category == b.category && candidate.kicker > b.kicker)
            }
        };
        if better {
            best = Some(candidate);
        }
    }

    // At least one subset exists once the length check has passed.
    best.ok_or(EvalError::NotEnoughCards(cards.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        let c = parse_cards(s).unwrap();
        [c[0], c[1], c[2], c[3], c[4]]
    }

    #[test]
    fn card_count_limits() {
        let cards = parse_cards("AS KS QS JS").unwrap();
        assert_eq!(best_hand(&cards).unwrap_err(), EvalError::NotEnoughCards(4));
        let cards = parse_cards("AS KS QS JS TS 9S 8S 7S").unwrap();
        assert_eq!(best_hand(&cards).unwrap_err(), EvalError::TooManyCards(8));
    }

    #[test]
    fn classify_every_category() {
        assert_eq!(classify(&five("AS KS QS JS TS")), Category::RoyalFlush);
        assert_eq!(classify(&five("9S KS QS JS TS")), Category::StraightFlush);
        assert_eq!(classify(&five("KC KD KH KS 2S")), Category::FourOfAKind);
        assert_eq!(classify(&five("TC TD TH 2S 2H")), Category::FullHouse);
        assert_eq!(classify(&five("AH 9H 7H 3H 2H")), Category::Flush);
        assert_eq!(classify(&five("AC 2D 3H 4S 5C")), Category::Straight);
        assert_eq!(classify(&five("QC QD QH 9S 2C")), Category::ThreeOfAKind);
        assert_eq!(classify(&five("JC JD 9C 9H 2S")), Category::TwoPair);
        assert_eq!(classify(&five("AH AD TS 9C 2D")), Category::OnePair);
        assert_eq!(classify(&five("AH KD 7S 5C 2D")), Category::HighCard);
    }

    #[test]
    fn kicker_per_category() {
        assert_eq!(kicker(&five("KC KD KH KS 2S"), Category::FourOfAKind), Rank::Two);
        assert_eq!(kicker(&five("JC JD 9C 9H 2S"), Category::TwoPair), Rank::Two);
        assert_eq!(kicker(&five("AH AD TS 9C 2D"), Category::OnePair), Rank::Ten);
        assert_eq!(kicker(&five("AH KD 7S 5C 2D"), Category::HighCard), Rank::Ace);
    }

    #[test]
    fn best_of_seven_finds_the_flush() {
        let cards = parse_cards("AH KH 2H 7H 9H 9C 9D").unwrap();
        let best = best_hand(&cards).unwrap();
        assert_eq!(best.category, Category::Flush);
        assert_eq!(best.kicker, Rank::Ace);
    }

    #[test]
    fn best_of_six_prefers_higher_kicker() {
        let cards = parse_cards("8S 8H 2D 3C 4S KD").unwrap();
        let best = best_hand(&cards).unwrap();
        assert_eq!(best.category, Category::OnePair);
        assert_eq!(best.kicker, Rank::King);
        assert!(best.cards().contains(&"KD".parse().unwrap()));
    }

    #[test]
    fn wheel_outranks_six_high_straight_within_one_hand() {
        let cards = parse_cards("AS 2H 3D 4C 5S 6D 9C").unwrap();
        let best = best_hand(&cards).unwrap();
        assert_eq!(best.category, Category::Straight);
        assert_eq!(best.kicker, Rank::Ace);
        assert_eq!(best.ranks(), [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
    }

    #[test]
    fn best_of_five_is_the_input() {
        let cards = five("JC JD 9C 9H 2S");
        let best = best_hand(&cards).unwrap();
        assert_eq!(best.cards(), cards);
        assert_eq!(best.ranks(), [Rank::Jack, Rank::Jack, Rank::Nine, Rank::Nine, Rank::Two]);
    }

    #[test]
    fn category_order() {
        assert!(Category::RoyalFlush > Category::StraightFlush);
        assert!(Category::OnePair > Category::HighCard);
        assert_eq!(Category::RoyalFlush.ordinal(), 9);
        assert_eq!(Category::FullHouse.to_string(), "full house");
    }
}
