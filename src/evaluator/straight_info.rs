use super::rank_counts::RankCounts;
use crate::cards::Rank;

const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];
const ROYAL: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Straight and royal-value facts about a 5-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Ten through Ace are all present. Tested on its own, not via the
    /// straight check.
    pub has_royal_values: bool,
}

impl StraightInfo {
    /// A straight is either exactly A-2-3-4-5, or five distinct ranks spanning
    /// exactly four steps from lowest to highest.
    pub fn detect(counts: &RankCounts) -> Self {
        let distinct = counts.distinct() == 5;
        let is_wheel = distinct && counts.contains_all(&WHEEL);
        let is_run = distinct
            && match (counts.max(), counts.min()) {
                (Some(hi), Some(lo)) => hi.value() - lo.value() == 4,
                _ => false,
            };
        StraightInfo {
            is_straight: is_wheel || is_run,
            has_royal_values: counts.contains_all(&ROYAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    fn detect(ranks: [Rank; 5]) -> StraightInfo {
        StraightInfo::detect(&RankCounts::from_ranks(&ranks))
    }

    #[test]
    fn regular_straight() {
        let info = detect([King, Queen, Jack, Ten, Nine]);
        assert!(info.is_straight);
        assert!(!info.has_royal_values);
    }

    #[test]
    fn broadway_is_straight_and_royal() {
        let info = detect([Ace, King, Queen, Jack, Ten]);
        assert!(info.is_straight);
        assert!(info.has_royal_values);
    }

    #[test]
    fn wheel() {
        assert!(detect([Ace, Two, Three, Four, Five]).is_straight);
    }

    #[test]
    fn gap_is_not_straight() {
        assert!(!detect([Three, Four, Five, Six, Eight]).is_straight);
        assert!(!detect([Ace, King, Queen, Jack, Nine]).is_straight);
    }

    #[test]
    fn pair_is_not_straight() {
        assert!(!detect([Ace, Ace, King, Queen, Jack]).is_straight);
    }

    #[test]
    fn unsorted_input() {
        assert!(detect([Nine, King, Ten, Jack, Queen]).is_straight);
    }
}
