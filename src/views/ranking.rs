use crate::config::probability_tiers::*;
use crate::config::{RECENT_EVENTS, TOP_N};
use crate::types::{Company, Event};

/// Which probability score a ranking is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityKey {
    Target,
    Buyer,
}

impl ProbabilityKey {
    pub fn of(self, company: &Company) -> u8 {
        match self {
            ProbabilityKey::Target => company.deal_prob_target,
            ProbabilityKey::Buyer => company.deal_prob_buyer,
        }
    }
}

/// The `n` companies with the highest score under `key`. Ties keep collection order.
pub fn top_n(companies: &[Company], key: ProbabilityKey, n: usize) -> Vec<&Company> {
    let mut ranked: Vec<&Company> = companies.iter().collect();
    ranked.sort_by(|a, b| key.of(b).cmp(&key.of(a)));
    ranked.truncate(n);
    ranked
}

pub fn top_targets(companies: &[Company]) -> Vec<&Company> {
    top_n(companies, ProbabilityKey::Target, TOP_N)
}

pub fn top_buyers(companies: &[Company]) -> Vec<&Company> {
    top_n(companies, ProbabilityKey::Buyer, TOP_N)
}

/// The first events in collection order. Event dates are display strings, so no re-sort.
pub fn recent_events(events: &[Event]) -> &[Event] {
    &events[..events.len().min(RECENT_EVENTS)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityTier {
    High,
    Medium,
    Low,
}

pub fn tier(key: ProbabilityKey, probability: u8) -> ProbabilityTier {
    let (high, medium) = match key {
        ProbabilityKey::Target => (TARGET_HIGH, TARGET_MEDIUM),
        ProbabilityKey::Buyer => (BUYER_HIGH, BUYER_MEDIUM),
    };
    if probability > high {
        ProbabilityTier::High
    } else if probability > medium {
        ProbabilityTier::Medium
    } else {
        ProbabilityTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn top_targets_are_ordered_and_dominate_the_rest() {
        let ds = Dataset::seed();
        let top = top_targets(&ds.companies);
        assert_eq!(top.len(), 5);
        let ids: Vec<u32> = top.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 1, 6, 2, 5]);

        for pair in top.windows(2) {
            assert!(pair[0].deal_prob_target >= pair[1].deal_prob_target);
        }
        let min_kept = top.last().unwrap().deal_prob_target;
        for c in ds.companies.iter().filter(|c| !ids.contains(&c.id)) {
            assert!(c.deal_prob_target <= min_kept);
        }
    }

    #[test]
    fn top_buyers_rank_by_buyer_probability() {
        let ds = Dataset::seed();
        let ids: Vec<u32> = top_buyers(&ds.companies).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 5, 2, 6, 1]);
    }

    #[test]
    fn ties_keep_collection_order() {
        let mut companies = Dataset::seed().companies;
        for c in &mut companies {
            c.deal_prob_target = 50;
        }
        companies[3].deal_prob_target = 90;
        let ids: Vec<u32> = top_n(&companies, ProbabilityKey::Target, 4)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn top_n_handles_short_collections() {
        let companies = Dataset::seed().companies;
        assert_eq!(top_n(&companies[..2], ProbabilityKey::Buyer, 5).len(), 2);
        assert!(top_n(&[], ProbabilityKey::Buyer, 5).is_empty());
    }

    #[test]
    fn recent_events_take_first_six_unsorted() {
        let mut events = Dataset::seed().events;
        let mut extra = events[0].clone();
        extra.id = 99;
        events.push(extra);
        let recent = recent_events(&events);
        assert_eq!(recent.len(), 6);
        assert_eq!(recent[0].id, 1);
        assert_eq!(recent[5].id, 6);
        assert!(recent_events(&events[..2]).len() == 2);
    }

    #[test]
    fn tiers_use_strict_thresholds() {
        assert_eq!(tier(ProbabilityKey::Target, 71), ProbabilityTier::High);
        assert_eq!(tier(ProbabilityKey::Target, 70), ProbabilityTier::Medium);
        assert_eq!(tier(ProbabilityKey::Target, 50), ProbabilityTier::Low);
        assert_eq!(tier(ProbabilityKey::Buyer, 61), ProbabilityTier::High);
        assert_eq!(tier(ProbabilityKey::Buyer, 41), ProbabilityTier::Medium);
        assert_eq!(tier(ProbabilityKey::Buyer, 40), ProbabilityTier::Low);
    }
}
