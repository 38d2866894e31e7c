use crate::config::candidate_scores::*;
use crate::config::{CANDIDATE_MIN_BUYER_PROB, TOP_N};
use crate::types::Company;

/// A potential acquirer of a target with its synthetic fit and synergy scores.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateBuyer<'a> {
    pub company: &'a Company,
    pub fit_score: u32,
    /// Millions.
    pub synergies: u32,
}

/// Up to five acquirers for `target`: every other company with a buyer
/// probability above the threshold, ranked by fit score.
pub fn candidate_buyers<'a>(companies: &'a [Company], target: &Company) -> Vec<CandidateBuyer<'a>> {
    let mut candidates: Vec<CandidateBuyer<'a>> = companies
        .iter()
        .filter(|c| c.id != target.id && c.deal_prob_buyer > CANDIDATE_MIN_BUYER_PROB)
        .map(|c| {
            let (fit_score, synergies) = pair_scores(c.id, target.id);
            CandidateBuyer {
                company: c,
                fit_score,
                synergies,
            }
        })
        .collect();
    candidates.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
    candidates.truncate(TOP_N);
    candidates
}

/// `(fit_score, synergies)` for a buyer/target pair. Stable for a given pair,
/// fit in 60..=89 and synergies in 20..=69.
pub fn pair_scores(buyer_id: u32, target_id: u32) -> (u32, u32) {
    let h = splitmix64((u64::from(buyer_id) << 32) | u64::from(target_id));
    let fit = FIT_MIN + (h % u64::from(FIT_SPAN)) as u32;
    let synergies = SYNERGIES_MIN + ((h >> 32) % u64::from(SYNERGIES_SPAN)) as u32;
    (fit, synergies)
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
