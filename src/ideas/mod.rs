// Content Ranker - Video Ideas
// Fixed-shape idea records and the in-memory store that owns them

pub mod store;


use std::fmt;

use serde::Serialize;

use crate::constants::{DEFAULT_RATING, RATING_MAX, RATING_MIN};
use crate::factors::Factor;

pub use store::IdeaStore;

/// Opaque idea identifier (UTC milliseconds at creation, bumped to stay monotonic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct IdeaId(pub u64);

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The eight factor ratings of one idea, each in 1..=10
///
/// Only built through the clamping constructors, never deserialized:
///
/// ```compile_fail
/// let _: content_ranker_lib::ideas::Ratings = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub strategic_alignment: u8,
    pub engagement_potential: u8,
    pub trending_topic_score: u8,
    pub debate_controversy: u8,
    pub resource_efficiency: u8,
    pub viral_potential: u8,
    pub brand_fit: u8,
    pub competitive_gap: u8,
}

impl Default for Ratings {
    fn default() -> Self {
        Self::uniform(DEFAULT_RATING)
    }
}

impl Ratings {
    /// Every factor set to the same (clamped) value
    pub fn uniform(value: u8) -> Self {
        let mut ratings = Self {
            strategic_alignment: 0,
            engagement_potential: 0,
            trending_topic_score: 0,
            debate_controversy: 0,
            resource_efficiency: 0,
            viral_potential: 0,
            brand_fit: 0,
            competitive_gap: 0,
        };
        for factor in Factor::ALL {
            ratings.set(factor, i64::from(value));
        }
        ratings
    }

    /// Build from values in catalogue order, clamping each
    pub fn from_values(values: [i64; 8]) -> Self {
        let mut ratings = Self::default();
        for (factor, value) in Factor::ALL.into_iter().zip(values) {
            ratings.set(factor, value);
        }
        ratings
    }

    pub fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::StrategicAlignment => self.strategic_alignment,
            Factor::EngagementPotential => self.engagement_potential,
            Factor::TrendingTopicScore => self.trending_topic_score,
            Factor::DebateControversy => self.debate_controversy,
            Factor::ResourceEfficiency => self.resource_efficiency,
            Factor::ViralPotential => self.viral_potential,
            Factor::BrandFit => self.brand_fit,
            Factor::CompetitiveGap => self.competitive_gap,
        }
    }

    /// Set one rating, clamped to 1..=10. Returns the stored value.
    pub fn set(&mut self, factor: Factor, value: i64) -> u8 {
        let clamped = clamp_rating(value);
        let slot = match factor {
            Factor::StrategicAlignment => &mut self.strategic_alignment,
            Factor::EngagementPotential => &mut self.engagement_potential,
            Factor::TrendingTopicScore => &mut self.trending_topic_score,
            Factor::DebateControversy => &mut self.debate_controversy,
            Factor::ResourceEfficiency => &mut self.resource_efficiency,
            Factor::ViralPotential => &mut self.viral_potential,
            Factor::BrandFit => &mut self.brand_fit,
            Factor::CompetitiveGap => &mut self.competitive_gap,
        };
        *slot = clamped;
        clamped
    }

    /// Values in catalogue order
    pub fn values(&self) -> [u8; 8] {
        Factor::ALL.map(|factor| self.get(factor))
    }
}

/// Clamp arbitrary numeric input into the rating range
pub fn clamp_rating(value: i64) -> u8 {
    let clamped = value.clamp(i64::from(RATING_MIN), i64::from(RATING_MAX));
    if clamped != value {
        log::warn!("Rating {} out of range, clamped to {}", value, clamped);
    }
    u8::try_from(clamped).unwrap_or(RATING_MIN)
}

/// One candidate video idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoIdea {
    pub id: IdeaId,
    pub title: String,
    #[serde(flatten)]
    pub ratings: Ratings,
}

impl VideoIdea {
    pub fn new(id: IdeaId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ratings: Ratings::default(),
        }
    }

    pub fn with_ratings(mut self, ratings: Ratings) -> Self {
        self.ratings = ratings;
        self
    }

    pub fn rating(&self, factor: Factor) -> u8 {
        self.ratings.get(factor)
    }
}

/// A single-field edit to an idea. Closed over the title and the eight factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaUpdate {
    Title(String),
    Rating(Factor, i64),
}
