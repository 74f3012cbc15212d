// Ranking projection: ideas ordered by descending score.
// Stable on ties, never mutates the store's insertion order.

use std::cmp::Reverse;

use serde::Serialize;

use crate::ideas::VideoIdea;
use crate::weights::WeightConfig;
use super::{classify, score, Score, ScoreTier, UrgencyBadge};

/// One row of the ranked view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedIdea<'a> {
    /// 1-based rank
    pub position: usize,
    pub score: Score,
    pub tier: ScoreTier,
    pub urgency: UrgencyBadge,
    pub idea: &'a VideoIdea,
}

pub fn rank<'a>(ideas: &'a [VideoIdea], weights: &WeightConfig) -> Vec<RankedIdea<'a>> {
    let mut scored: Vec<(Score, &VideoIdea)> =
        ideas.iter().map(|idea| (score(idea, weights), idea)).collect();

    // sort_by_key is stable
    scored.sort_by_key(|(s, _)| Reverse(*s));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (score, idea))| RankedIdea {
            position: i + 1,
            score,
            tier: score.tier(),
            urgency: classify(idea),
            idea,
        })
        .collect()
}
