use super::{BestHand, Category};
use crate::cards::Rank;
use core::cmp::Ordering;

/// Outcome of a heads-up showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    PlayerOne,
    PlayerTwo,
    Tie,
}

impl From<Ordering> for Winner {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Winner::PlayerOne,
            Ordering::Less => Winner::PlayerTwo,
            Ordering::Equal => Winner::Tie,
        }
    }
}

/// Raised when a hand's recorded category disagrees with its cards.
/// Any occurrence is a classifier defect.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TieBreakError {
    #[error("cannot break a tie between {0:?} and {1:?}")]
    CategoryMismatch(Category, Category),
    #[error("{category:?} hand has no {group}")]
    MissingGroup { category: Category, group: &'static str },
}

/// Decide between two best hands of the same category.
///
/// Grouped categories compare their group ranks first; everything else, and
/// any group comparison that ends level, falls through to [`eliminate`].
pub fn break_tie(one: &BestHand, two: &BestHand) -> Result<Winner, TieBreakError> {
    if one.category != two.category {
        return Err(TieBreakError::CategoryMismatch(one.category, two.category));
    }
    let category = one.category;
    let (a, b) = (&one.analysis.counts, &two.analysis.counts);
    let generic = || eliminate(&one.analysis.ranks, &two.analysis.ranks);
    let group = |rank: Option<Rank>, group: &'static str| {
        rank.ok_or(TieBreakError::MissingGroup { category, group })
    };

    let winner = match category {
        Category::HighCard
        | Category::Straight
        | Category::Flush
        | Category::StraightFlush
        | Category::RoyalFlush => generic(),
        Category::FourOfAKind => {
            decide(group(a.quad(), "quad")?, group(b.quad(), "quad")?).unwrap_or_else(generic)
        }
        Category::ThreeOfAKind => {
            decide(group(a.trips(), "trips")?, group(b.trips(), "trips")?).unwrap_or_else(generic)
        }
        Category::FullHouse => {
            let trips = decide(group(a.trips(), "trips")?, group(b.trips(), "trips")?);
            match trips {
                Some(w) => w,
                None => Winner::from(
                    group(a.high_pair(), "pair")?.cmp(&group(b.high_pair(), "pair")?),
                ),
            }
        }
        Category::TwoPair => {
            let high = decide(group(a.high_pair(), "pair")?, group(b.high_pair(), "pair")?);
            match high {
                Some(w) => w,
                None => {
                    let low_a = group(a.low_pair(), "second pair")?;
                    let low_b = group(b.low_pair(), "second pair")?;
                    decide(low_a, low_b).unwrap_or_else(generic)
                }
            }
        }
        Category::OnePair => {
            let pair = decide(group(a.high_pair(), "pair")?, group(b.high_pair(), "pair")?);
            pair.unwrap_or_else(generic)
        }
    };
    log::trace!("{category:?} tie broken: {winner:?}");
    Ok(winner)
}

/// `Some(winner)` when the ranks differ, `None` when they are level.
fn decide(one: Rank, two: Rank) -> Option<Winner> {
    match one.cmp(&two) {
        Ordering::Equal => None,
        ord => Some(Winner::from(ord)),
    }
}

/// Generic value-elimination loop.
///
/// Both slices must be sorted highest first. Each pass compares the highest
/// remaining rank of each hand and, when they match, drops it from both.
/// Returns [`Winner::Tie`] only if the two rank multisets are identical.
pub fn eliminate(one: &[Rank], two: &[Rank]) -> Winner {
    let (mut one, mut two) = (one, two);
    loop {
        match (one.split_first(), two.split_first()) {
            (Some((x, rest_one)), Some((y, rest_two))) => match x.cmp(y) {
                Ordering::Equal => {
                    one = rest_one;
                    two = rest_two;
                }
                ord => return Winner::from(ord),
            },
            (Some(_), None) => return Winner::PlayerOne,
            (None, Some(_)) => return Winner::PlayerTwo,
            (None, None) => return Winner::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::best_hand;
    use Rank::*;

    fn best(s: &str) -> BestHand {
        best_hand(&parse_cards(s).unwrap()).unwrap()
    }

    fn duel(one: &str, two: &str) -> Winner {
        break_tie(&best(one), &best(two)).unwrap()
    }

    #[test]
    fn elimination_walks_down_to_last_card() {
        let a9532 = [Ace, King, Nine, Five, Three];
        let a9522 = [Ace, King, Nine, Five, Two];
        assert_eq!(eliminate(&a9532, &a9522), Winner::PlayerOne);
        assert_eq!(eliminate(&a9522, &a9522), Winner::Tie);
        let k_high = [King, Queen, Nine, Five, Two];
        assert_eq!(eliminate(&k_high, &[Ace, Four, Three, Two, Two]), Winner::PlayerTwo);
    }

    #[test]
    fn high_card_and_flush_use_elimination() {
        assert_eq!(duel("AS KH 9D 5C 3S", "AD KC 9H 5S 2D"), Winner::PlayerOne);
        assert_eq!(duel("KH 9H 7H 4H 2H", "KS 9S 7S 4S 3S"), Winner::PlayerTwo);
    }

    #[test]
    fn straights_compare_by_highest_value() {
        assert_eq!(duel("9S 8H 7D 6C 5S", "8D 7C 6H 5D 4S"), Winner::PlayerOne);
        assert_eq!(duel("9S 8H 7D 6C 5S", "9D 8C 7H 6D 5H"), Winner::Tie);
    }

    #[test]
    fn wheel_counts_its_ace_high() {
        assert_eq!(duel("AS 2H 3D 4C 5S", "6D 5C 4H 3S 2D"), Winner::PlayerOne);
        assert_eq!(duel("AD 2D 3D 4D 5D", "6C 5C 4C 3C 2C"), Winner::PlayerOne);
    }

    #[test]
    fn quads_and_trips_compare_group_first() {
        assert_eq!(duel("3S 3H 3D 3C 2S", "2H 2D 2C 2S AS"), Winner::PlayerOne);
        assert_eq!(duel("9S 9H 9D 2C 3S", "TS TH TD AC KS"), Winner::PlayerTwo);
    }

    #[test]
    fn shared_trips_fall_back_to_kickers() {
        assert_eq!(duel("9S 9H 9D AC 3S", "9S 9H 9D KC QS"), Winner::PlayerOne);
    }

    #[test]
    fn full_house_trips_then_pair() {
        assert_eq!(duel("KS KH KD 2C 2S", "QS QH QD AC AS"), Winner::PlayerOne);
        assert_eq!(duel("KS KH KD 2C 2S", "KS KH KD 3C 3S"), Winner::PlayerTwo);
        assert_eq!(duel("KS KH KD 3D 3H", "KS KH KD 3C 3S"), Winner::Tie);
    }

    #[test]
    fn two_pair_high_low_then_kicker() {
        assert_eq!(duel("AS AH 2D 2C 3S", "KS KH QD QC JS"), Winner::PlayerOne);
        assert_eq!(duel("AS AH 4D 4C 3S", "AD AC 5D 5C 2S"), Winner::PlayerTwo);
        assert_eq!(duel("AS AH 5D 5C 3S", "AD AC 5H 5S 2S"), Winner::PlayerOne);
        assert_eq!(duel("AS AH 5D 5C 3S", "AD AC 5H 5S 3H"), Winner::Tie);
    }

    #[test]
    fn one_pair_then_kickers() {
        assert_eq!(duel("8S 8H AD 4C 3S", "7S 7H AC KC QS"), Winner::PlayerOne);
        assert_eq!(duel("8S 8H AD 4C 2S", "8D 8C AC 4D 3S"), Winner::PlayerTwo);
    }

    #[test]
    fn mismatched_categories_are_rejected() {
        let err = break_tie(&best("8S 8H AD 4C 2S"), &best("AS KH 9D 5C 3S")).unwrap_err();
        assert_eq!(err, TieBreakError::CategoryMismatch(Category::OnePair, Category::HighCard));
    }

    #[test]
    fn winner_from_ordering() {
        assert_eq!(Winner::from(Ordering::Greater), Winner::PlayerOne);
        assert_eq!(Winner::from(Ordering::Less), Winner::PlayerTwo);
        assert_eq!(Winner::from(Ordering::Equal), Winner::Tie);
    }
}
