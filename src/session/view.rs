// Ranked view of a session, rebuilt on every read

use serde::Serialize;

use crate::constants::TARGET_TOTAL_WEIGHT;
use crate::ideas::VideoIdea;
use crate::scoring::{rank, RankedIdea};
use crate::weights::WeightConfig;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingView<'a> {
    pub entries: Vec<RankedIdea<'a>>,
    pub idea_count: usize,
    pub total_weight: u32,
    pub balanced: bool,
}

impl<'a> RankingView<'a> {
    pub fn build(ideas: &'a [VideoIdea], weights: &WeightConfig) -> Self {
        let total_weight = weights.total_weight();
        Self {
            entries: rank(ideas, weights),
            idea_count: ideas.len(),
            total_weight,
            balanced: total_weight == TARGET_TOTAL_WEIGHT,
        }
    }

    /// Advisory shown when weights do not total 100
    pub fn weight_advisory(&self) -> Option<String> {
        if self.balanced {
            None
        } else {
            Some(format!(
                "Weights total {}%, not {}%. Scores are not on a percentage scale.",
                self.total_weight, TARGET_TOTAL_WEIGHT
            ))
        }
    }
}
