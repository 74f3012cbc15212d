// Content Ranker - Factor Weights
// Per-factor integer weights (0-50) and the fixed strategy presets.
// A total of 100 is suggested, never enforced.

pub mod presets;

use serde::Serialize;

use crate::constants::{TARGET_TOTAL_WEIGHT, WEIGHT_MAX, WEIGHT_MIN};
use crate::factors::Factor;

pub use presets::Preset;

/// Per-factor weights, each in 0..=50
///
/// Serialize-only so every weight passes through `set_weight`'s clamp:
///
/// ```compile_fail
/// let _: content_ranker_lib::weights::WeightConfig = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightConfig {
    pub strategic_alignment: u8,
    pub engagement_potential: u8,
    pub trending_topic_score: u8,
    pub debate_controversy: u8,
    pub resource_efficiency: u8,
    pub viral_potential: u8,
    pub brand_fit: u8,
    pub competitive_gap: u8,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Preset::Balanced.weights()
    }
}

impl WeightConfig {
    /// Build from values in catalogue order, clamping each
    pub fn from_values(values: [i64; 8]) -> Self {
        let mut weights = Self::zero();
        for (factor, value) in Factor::ALL.into_iter().zip(values) {
            weights.set_weight(factor, value);
        }
        weights
    }

    pub fn zero() -> Self {
        Self {
            strategic_alignment: 0,
            engagement_potential: 0,
            trending_topic_score: 0,
            debate_controversy: 0,
            resource_efficiency: 0,
            viral_potential: 0,
            brand_fit: 0,
            competitive_gap: 0,
        }
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

    /// Replace one factor's weight, clamped to 0..=50. Returns the stored value.
    pub fn set_weight(&mut self, factor: Factor, value: i64) -> u8 {
        let clamped = value.clamp(i64::from(WEIGHT_MIN), i64::from(WEIGHT_MAX));
        if clamped != value {
            log::warn!("Weight {} for {} out of range, clamped to {}", value, factor, clamped);
        }
        let stored = u8::try_from(clamped).unwrap_or(WEIGHT_MIN);

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
        *slot = stored;
        stored
    }

    /// Wholesale replacement with a preset
    pub fn apply_preset(&mut self, preset: Preset) {
        log::info!("Applying preset '{}'", preset.label());
        *self = preset.weights();
    }

    /// Sum of all eight weights (advisory only)
    pub fn total_weight(&self) -> u32 {
        Factor::ALL.iter().map(|f| u32::from(self.get(*f))).sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.total_weight() == TARGET_TOTAL_WEIGHT
    }

    /// Values in catalogue order
    pub fn values(&self) -> [u8; 8] {
        Factor::ALL.map(|factor| self.get(factor))
    }
}
