use super::rank_counts::RankCounts;
use super::straight_info::StraightInfo;
use super::Category;
use crate::cards::{Card, Rank};

/// Pre-computed facts about a 5-card hand.
/// Built once per subset and shared by classification, kicker extraction and
/// tie-breaking.
#[derive(Debug, Clone, Copy)]
pub struct HandAnalysis {
    pub cards: [Card; 5],
    /// Ranks sorted highest first.
    pub ranks: [Rank; 5],
    pub counts: RankCounts,
    /// All five cards share one suit.
    pub is_flush: bool,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ranks = cards.map(Card::rank);
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let counts = RankCounts::from_ranks(&ranks);
        let suit = cards[0].suit();
        let is_flush = cards.iter().all(|c| c.suit() == suit);
        let straight_info = StraightInfo::detect(&counts);

        Self { cards: *cards, ranks, counts, is_flush, straight_info }
    }

    /// First matching category, strongest first.
    pub fn category(&self) -> Category {
        let flush = self.is_flush;
        let straight = self.straight_info.is_straight;

        if flush && self.straight_info.has_royal_values {
            return Category::RoyalFlush;
        }
        if flush && straight {
            return Category::StraightFlush;
        }
        if flush {
            return Category::Flush;
        }
        if self.counts.quad().is_some() {
            return Category::FourOfAKind;
        }
        if straight {
            return Category::Straight;
        }

        let pairs = self.counts.pair_count();
        if self.counts.trips().is_some() {
            return if pairs == 1 { Category::FullHouse } else { Category::ThreeOfAKind };
        }
        match pairs {
            2 => Category::TwoPair,
            1 => Category::OnePair,
            _ => Category::HighCard,
        }
    }

    /// Highest rank left once the category's matched group is set aside.
    ///
    /// Only meaningful when comparing two subsets of the same player's cards
    /// that share `category`.
    pub fn kicker(&self, category: Category) -> Rank {
        let c = &self.counts;
        let group = match category {
            Category::FourOfAKind => [c.quad(), None],
            Category::ThreeOfAKind => [c.trips(), None],
            Category::TwoPair | Category::OnePair => [c.high_pair(), c.low_pair()],
            _ => [None, None],
        };
        let mut excluded = [Rank::Two; 2];
        let mut n = 0;
        for r in group.into_iter().flatten() {
            excluded[n] = r;
            n += 1;
        }
        c.highest_excluding(&excluded[..n]).unwrap_or(self.ranks[0])
    }
}
