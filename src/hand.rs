use crate::cards::{parse_cards, Card, CardParseError};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a player cannot hold {0} twice")]
    DuplicateHoleCards(Card),
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("{0} appears twice on the board")]
    DuplicateBoardCards(Card),
    #[error("a player holds exactly two cards, got {0}")]
    HoleCount(usize),
    #[error(transparent)]
    Card(#[from] CardParseError),
}

/// One player's private pair, kept in the order it was dealt.
///
/// ```
/// use holdem_equity::hand::HoleCards;
///
/// let hole: HoleCards = "As 13s".parse().unwrap();
/// assert_eq!(hole.to_string(), "AS KS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards([Card; 2]);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards(a));
        }
        Ok(Self([a, b]))
    }

    pub fn as_array(&self) -> [Card; 2] {
        self.0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
}

impl TryFrom<&[Card]> for HoleCards {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match *cards {
            [a, b] => Self::try_new(a, b),
            _ => Err(HandError::HoleCount(cards.len())),
        }
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(parse_cards(s)?.as_slice())
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}

/// Community cards revealed so far (flop, turn, river).
///
/// ```
/// use holdem_equity::cards::{Card, Rank, Suit};
/// use holdem_equity::hand::Board;
///
/// let board = Board::try_new(vec![
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Clubs),
/// ]).unwrap();
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        for (i, c) in cards.iter().enumerate() {
            if cards[..i].contains(c) {
                return Err(HandError::DuplicateBoardCards(*c));
            }
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// The full five-card board formed by appending `completion` to the known
    /// cards, or `None` if the lengths do not add up to five.
    ///
    /// Returns a fresh array; `self` is never modified.
    pub fn complete_with(&self, completion: &[Card]) -> Option<[Card; 5]> {
        if self.cards.len() + completion.len() != 5 {
            return None;
        }
        let mut it = self.cards.iter().chain(completion).copied();
        Some([it.next()?, it.next()?, it.next()?, it.next()?, it.next()?])
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_new(parse_cards(s)?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    #[test]
    fn hole_cards_must_be_two_distinct_cards() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let k = Card::new(Rank::King, Suit::Spades);
        assert_eq!(HoleCards::try_new(a, a), Err(HandError::DuplicateHoleCards(a)));
        assert_eq!(HoleCards::try_from(&[a][..]), Err(HandError::HoleCount(1)));
        assert_eq!(HoleCards::try_from(&[a, k, a][..]), Err(HandError::HoleCount(3)));

        let hole = HoleCards::try_from(&[a, k][..]).unwrap();
        assert!(hole.contains(k));
        assert!(!hole.contains(Card::new(Rank::Ace, Suit::Hearts)));
    }

    #[test]
    fn board_try_new_checks_limits_and_dupes() {
        let cards = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Clubs),
        ];
        assert!(matches!(Board::try_new(cards), Err(HandError::TooManyBoardCards(6))));

        let cards = vec![Card::new(Rank::Two, Suit::Clubs), Card::new(Rank::Two, Suit::Clubs)];
        assert_eq!(
            Board::try_new(cards),
            Err(HandError::DuplicateBoardCards(Card::new(Rank::Two, Suit::Clubs)))
        );
    }

    #[test]
    fn complete_with_leaves_board_untouched() {
        let board: Board = "AD KD 2C".parse().unwrap();
        let before = board.clone();
        let turn = Card::new(Rank::Seven, Suit::Hearts);
        let river = Card::new(Rank::Nine, Suit::Spades);

        let five = board.complete_with(&[turn, river]).unwrap();
        assert_eq!(&five[..3], board.as_slice());
        assert_eq!(five[3], turn);
        assert_eq!(five[4], river);
        assert_eq!(board, before);

        assert_eq!(board.complete_with(&[turn]), None);
    }

    #[test]
    fn parsing_interfaces_work() {
        let hole: HoleCards = "As Kd".parse().unwrap();
        assert_eq!(
            hole.as_array(),
            [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Diamonds)]
        );

        let board: Board = "2c, 3c 4c".parse().unwrap();
        assert_eq!(board.len(), 3);
        assert_eq!(board.to_string(), "2C 3C 4C");

        assert!(matches!("As Zz".parse::<HoleCards>(), Err(HandError::Card(_))));
    }
}
