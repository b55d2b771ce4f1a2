use crate::cards::Rank;

/// How many cards of each rank a hand holds, indexed by `value - 2`.
///
/// Example: AAAKQ counts Ace=3, King=1, Queen=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankCounts {
    counts: [u8; 13],
}

impl RankCounts {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 13];
        for r in ranks {
            counts[slot(*r)] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[slot(rank)]
    }

    /// Ranks held exactly `n` times, highest first.
    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL.into_iter().rev().filter(move |r| self.count(*r) == n)
    }

    /// Number of distinct ranks present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    pub fn pair_count(&self) -> usize {
        self.with_count(2).count()
    }

    pub fn high_pair(&self) -> Option<Rank> {
        self.with_count(2).next()
    }

    pub fn low_pair(&self) -> Option<Rank> {
        self.with_count(2).nth(1)
    }

    pub fn max(&self) -> Option<Rank> {
        Rank::ALL.into_iter().rev().find(|r| self.count(*r) > 0)
    }

    pub fn min(&self) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| self.count(*r) > 0)
    }

    /// Highest rank present that is not in `excluded`.
    pub fn highest_excluding(&self, excluded: &[Rank]) -> Option<Rank> {
        Rank::ALL.into_iter().rev().find(|r| self.count(*r) > 0 && !excluded.contains(r))
    }

    /// True if every rank in `ranks` is present at least once.
    pub fn contains_all(&self, ranks: &[Rank]) -> bool {
        ranks.iter().all(|r| self.count(*r) > 0)
    }
}

#[inline]
fn slot(rank: Rank) -> usize {
    (rank.value() - 2) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn quad() {
        let counts = RankCounts::from_ranks(&[Ace, Ace, Ace, Ace, King]);
        assert_eq!(counts.quad(), Some(Ace));
        assert_eq!(counts.trips(), None);
        assert_eq!(counts.pair_count(), 0);
        assert_eq!(counts.highest_excluding(&[Ace]), Some(King));
    }

    #[test]
    fn full_house() {
        let counts = RankCounts::from_ranks(&[Ace, King, Ace, King, Ace]);
        assert_eq!(counts.trips(), Some(Ace));
        assert_eq!(counts.high_pair(), Some(King));
        assert_eq!(counts.low_pair(), None);
        assert_eq!(counts.pair_count(), 1);
    }

    #[test]
    fn two_pair_orders_high_then_low() {
        let counts = RankCounts::from_ranks(&[Nine, Jack, Two, Jack, Nine]);
        assert_eq!(counts.pair_count(), 2);
        assert_eq!(counts.high_pair(), Some(Jack));
        assert_eq!(counts.low_pair(), Some(Nine));
        assert_eq!(counts.highest_excluding(&[Jack, Nine]), Some(Two));
    }

    #[test]
    fn high_card_extremes() {
        let counts = RankCounts::from_ranks(&[Seven, Ace, Two, Ten, Five]);
        assert_eq!(counts.distinct(), 5);
        assert_eq!(counts.max(), Some(Ace));
        assert_eq!(counts.min(), Some(Two));
        assert!(counts.contains_all(&[Two, Five]));
        assert!(!counts.contains_all(&[Two, Three]));
    }

    #[test]
    fn empty_counts() {
        let counts = RankCounts::default();
        assert_eq!(counts.max(), None);
        assert_eq!(counts.distinct(), 0);
        assert_eq!(counts.highest_excluding(&[]), None);
    }
}
