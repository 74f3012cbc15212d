// Content Ranker - Scoring Engine
// Weighted multi-factor score per idea, ranking and urgency badges.
// Everything here is pure and recomputed on every read.

pub mod ranker;
pub mod urgency;


use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::{HIGH_SCORE_THRESHOLD_TENTHS, MEDIUM_SCORE_THRESHOLD_TENTHS, SCORE_DIVISOR};
use crate::factors::Factor;
use crate::ideas::VideoIdea;
use crate::weights::WeightConfig;

pub use ranker::{rank, RankedIdea};
pub use urgency::{classify, Urgency, UrgencyBadge};

/// Weighted score held as an exact count of tenths.
/// Serializes as a one-decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score {
    tenths: u32,
}

impl Score {
    pub fn from_tenths(tenths: u32) -> Self {
        Self { tenths }
    }

    pub fn tenths(self) -> u32 {
        self.tenths
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.tenths) / f64::from(SCORE_DIVISOR)
    }

    /// >= 70.0 high, >= 50.0 medium, otherwise low
    pub fn tier(self) -> ScoreTier {
        if self.tenths >= HIGH_SCORE_THRESHOLD_TENTHS {
            ScoreTier::High
        } else if self.tenths >= MEDIUM_SCORE_THRESHOLD_TENTHS {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

/// Score band shown next to each ranked idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::High => "High",
            ScoreTier::Medium => "Medium",
            ScoreTier::Low => "Low",
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / SCORE_DIVISOR, self.tenths % SCORE_DIVISOR)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// One factor's share of an idea's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorContribution {
    pub factor: Factor,
    pub rating: u8,
    pub weight: u8,
    pub contribution: Score,
}

/// Full score with per-factor contributions in catalogue order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub total: Score,
    pub contributions: Vec<FactorContribution>,
}

impl ScoreBreakdown {
    /// Factor contributing the most, first in catalogue order on ties
    pub fn strongest(&self) -> Option<&FactorContribution> {
        self.contributions.iter().reduce(|best, c| {
            match c.contribution.cmp(&best.contribution) {
                Ordering::Greater => c,
                _ => best,
            }
        })
    }
}

/// score = sum over factors of rating * weight / 10
///
/// rating * weight is already in tenths, so the one-decimal result is exact.
pub fn score(idea: &VideoIdea, weights: &WeightConfig) -> Score {
    let tenths = Factor::ALL
        .iter()
        .map(|f| u32::from(idea.rating(*f)) * u32::from(weights.get(*f)))
        .sum();
    Score::from_tenths(tenths)
}

pub fn breakdown(idea: &VideoIdea, weights: &WeightConfig) -> ScoreBreakdown {
    let contributions: Vec<FactorContribution> = Factor::ALL
        .iter()
        .map(|f| {
            let rating = idea.rating(*f);
            let weight = weights.get(*f);
            FactorContribution {
                factor: *f,
                rating,
                weight,
                contribution: Score::from_tenths(u32::from(rating) * u32::from(weight)),
            }
        })
        .collect();

    let total = Score::from_tenths(contributions.iter().map(|c| c.contribution.tenths()).sum());

    ScoreBreakdown { total, contributions }
}
