use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::evaluator::combinations::{choose, Combinations};
use crate::evaluator::{best_hand, break_tie, EvalError, TieBreakError, Winner};
use crate::hand::{Board, HoleCards};
use core::cmp::Ordering;
use std::fmt;

/// Which shared cards are still to come.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    /// Three cards known; turn and river unknown.
    Flop,
    /// Four cards known; river unknown.
    Turn,
}

impl Street {
    pub const fn from_board_len(n: usize) -> Option<Street> {
        match n {
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            _ => None,
        }
    }

    pub const fn known_cards(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
        }
    }

    pub const fn unknown_cards(self) -> usize {
        5 - self.known_cards()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("invalid number of community cards: {0} (only 3 or 4 are supported)")]
    CommunityCount(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("no winner could be found: {0}")]
    Showdown(#[from] TieBreakError),
    #[error("tallied {counted} outcomes for {expected} completions")]
    CountMismatch { counted: u64, expected: u64 },
    #[error("no cards left to complete the board")]
    NoCompletions,
}

/// Everything the enumerator needs: both players' hole cards, the known
/// community cards and the deck they were dealt from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityRequest {
    player_one: HoleCards,
    player_two: HoleCards,
    board: Board,
    deck: Deck,
    street: Street,
}

impl EquityRequest {
    /// Build a request against a fresh 52-card deck, removing every assigned
    /// card from it. A card assigned twice is reported as missing from the deck.
    ///
    /// ```
    /// use holdem_equity::equity::{EquityRequest, Street};
    ///
    /// let req = EquityRequest::new(
    ///     "AS AH".parse().unwrap(),
    ///     "KS KH".parse().unwrap(),
    ///     "AD KD 2C 7H".parse().unwrap(),
    /// ).unwrap();
    /// assert_eq!(req.street(), Street::Turn);
    /// assert_eq!(req.deck().remaining(), 44);
    /// ```
    pub fn new(
        player_one: HoleCards,
        player_two: HoleCards,
        board: Board,
    ) -> Result<Self, EquityError> {
        let street = street_of(&board)?;
        let mut deck = Deck::standard();
        let (one, two) = (player_one.as_array(), player_two.as_array());
        deck.remove_all(one.iter().chain(&two).chain(board.as_slice()))?;
        Ok(Self { player_one, player_two, board, deck, street })
    }

    /// Build a request against an already-reduced deck. The assigned cards
    /// must be distinct from each other and none may still be in `deck`.
    pub fn with_deck(
        player_one: HoleCards,
        player_two: HoleCards,
        board: Board,
        deck: Deck,
    ) -> Result<Self, EquityError> {
        let street = street_of(&board)?;
        let (one, two) = (player_one.as_array(), player_two.as_array());
        let assigned = || one.iter().chain(&two).chain(board.as_slice());
        Deck::standard().remove_all(assigned())?;
        for &card in assigned() {
            if deck.contains(card) {
                return Err(DeckError::AlreadyPresent(card).into());
            }
        }
        Ok(Self { player_one, player_two, board, deck, street })
    }

    pub fn player_one(&self) -> &HoleCards {
        &self.player_one
    }

    pub fn player_two(&self) -> &HoleCards {
        &self.player_two
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn street(&self) -> Street {
        self.street
    }

    /// Number of boards the enumeration will visit.
    pub fn completions(&self) -> usize {
        choose(self.deck.remaining(), self.street.unknown_cards())
    }

    /// Every full five-card board reachable from this request. Each is a fresh
    /// array, so the request itself is never modified.
    fn runouts(&self) -> Result<Vec<[Card; 5]>, EquityError> {
        let cards = self.deck.to_vec();
        let complete = |extra: &[Card]| {
            self.board.complete_with(extra).ok_or(EquityError::CommunityCount(self.board.len()))
        };
        match self.street {
            Street::Turn => cards.iter().map(|&river| complete(&[river])).collect(),
            Street::Flop => Combinations::<2>::new(cards.len())
                .map(|[i, j]| complete(&[cards[i], cards[j]]))
                .collect(),
        }
    }
}

fn street_of(board: &Board) -> Result<Street, EquityError> {
    Street::from_board_len(board.len()).ok_or(EquityError::CommunityCount(board.len()))
}

/// Integer outcome tallies over all completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EquityCounts {
    pub player_one: u64,
    pub ties: u64,
    pub player_two: u64,
}

impl EquityCounts {
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::PlayerOne => self.player_one += 1,
            Winner::PlayerTwo => self.player_two += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            player_one: self.player_one + other.player_one,
            ties: self.ties + other.ties,
            player_two: self.player_two + other.player_two,
        }
    }

    pub fn total(&self) -> u64 {
        self.player_one + self.ties + self.player_two
    }

    /// Normalize into probabilities.
    pub fn equity(&self) -> Result<Equity, EquityError> {
        let total = self.total();
        if total == 0 {
            return Err(EquityError::NoCompletions);
        }
        let t = total as f64;
        Ok(Equity {
            player_one: self.player_one as f64 / t,
            tie: self.ties as f64 / t,
            player_two: self.player_two as f64 / t,
        })
    }
}

/// Probability that player one wins, the players tie, or player two wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equity {
    pub player_one: f64,
    pub tie: f64,
    pub player_two: f64,
}

impl Equity {
    pub fn sum(&self) -> f64 {
        self.player_one + self.tie + self.player_two
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.player_one, self.tie, self.player_two)
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        writeln!(f, "Probability of Player 1 winning: {:.*}%", p, self.player_one * 100.0)?;
        writeln!(f, "Probability of Tie: {:.*}%", p, self.tie * 100.0)?;
        write!(f, "Probability of Player 2 winning: {:.*}%", p, self.player_two * 100.0)
    }
}

/// Decide one completed board.
pub fn showdown(
    player_one: &HoleCards,
    player_two: &HoleCards,
    board: &[Card; 5],
) -> Result<Winner, EquityError> {
    let seven = |h: &HoleCards| {
        let [a, b] = h.as_array();
        [a, b, board[0], board[1], board[2], board[3], board[4]]
    };
    let one = best_hand(&seven(player_one))?;
    let two = best_hand(&seven(player_two))?;
    match one.category.cmp(&two.category) {
        Ordering::Equal => Ok(break_tie(&one, &two)?),
        ord => Ok(Winner::from(ord)),
    }
}

/// Enumerate every completion and tally the outcomes.
///
/// Fails as a whole on the first inconsistent showdown; no partial tally is
/// returned.
pub fn count_outcomes(request: &EquityRequest) -> Result<EquityCounts, EquityError> {
    let runouts = request.runouts()?;
    log::debug!(
        "{:?}: enumerating {} completions from {} remaining cards",
        request.street,
        runouts.len(),
        request.deck.remaining()
    );

    let counts = tally(&request.player_one, &request.player_two, &runouts)?;

    let expected = request.completions() as u64;
    if counts.total() != expected {
        return Err(EquityError::CountMismatch { counted: counts.total(), expected });
    }
    log::debug!("tally: {counts:?}");
    Ok(counts)
}

/// Exact heads-up equity for `request`.
///
/// ```
/// use holdem_equity::equity::{calculate, EquityRequest};
///
/// let req = EquityRequest::new(
///     "AS AH".parse().unwrap(),
///     "KS KH".parse().unwrap(),
///     "AD KD 2C 7H".parse().unwrap(),
/// ).unwrap();
/// let eq = calculate(&req).unwrap();
/// assert!(eq.player_one > 0.9);
/// assert!((eq.sum() - 1.0).abs() < 1e-9);
/// ```
pub fn calculate(request: &EquityRequest) -> Result<Equity, EquityError> {
    count_outcomes(request)?.equity()
}

#[cfg(not(feature = "parallel"))]
fn tally(
    player_one: &HoleCards,
    player_two: &HoleCards,
    runouts: &[[Card; 5]],
) -> Result<EquityCounts, EquityError> {
    runouts.iter().try_fold(
        EquityCounts::default(),
        |mut acc, board| -> Result<EquityCounts, EquityError> {
            acc.record(showdown(player_one, player_two, board)?);
            Ok(acc)
        },
    )
}

/// Per-thread partial tallies, summed once every worker is done.
#[cfg(feature = "parallel")]
fn tally(
    player_one: &HoleCards,
    player_two: &HoleCards,
    runouts: &[[Card; 5]],
) -> Result<EquityCounts, EquityError> {
    use rayon::prelude::*;

    runouts
        .par_iter()
        .map(|board| showdown(player_one, player_two, board))
        .try_fold(
            EquityCounts::default,
            |mut acc: EquityCounts,
             winner: Result<Winner, EquityError>|
             -> Result<EquityCounts, EquityError> {
                acc.record(winner?);
                Ok(acc)
            },
        )
        .try_reduce(EquityCounts::default, |a, b| Ok(a.merge(b)))
}
