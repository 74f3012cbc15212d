// Fixed strategy presets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RankerError;
use super::WeightConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Viral/Trending Focus
    Trend,
    /// Brand-First Strategy
    #[serde(rename = "brand", alias = "brandfirst", alias = "brand_first")]
    BrandFirst,
    /// Balanced Approach
    Balanced,
}

impl Default for Preset {
    fn default() -> Self {
        Preset::Balanced
    }
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Trend, Preset::BrandFirst, Preset::Balanced];

    /// Short name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Preset::Trend => "trend",
            Preset::BrandFirst => "brand",
            Preset::Balanced => "balanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Trend => "Viral/Trending Focus",
            Preset::BrandFirst => "Brand-First Strategy",
            Preset::Balanced => "Balanced Approach",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Preset::Trend => "🔥",
            Preset::BrandFirst => "🎯",
            Preset::Balanced => "⚖️",
        }
    }

    /// The preset's full weight set
    pub fn weights(self) -> WeightConfig {
        match self {
            Preset::Trend => WeightConfig {
                strategic_alignment: 10,
                engagement_potential: 25,
                trending_topic_score: 25,
                debate_controversy: 20,
                resource_efficiency: 5,
                viral_potential: 10,
                brand_fit: 3,
                competitive_gap: 2,
            },
            Preset::BrandFirst => WeightConfig {
                strategic_alignment: 25,
                engagement_potential: 15,
                trending_topic_score: 10,
                debate_controversy: 5,
                resource_efficiency: 15,
                viral_potential: 10,
                brand_fit: 15,
                competitive_gap: 5,
            },
            Preset::Balanced => WeightConfig {
                strategic_alignment: 15,
                engagement_potential: 20,
                trending_topic_score: 20,
                debate_controversy: 15,
                resource_efficiency: 10,
                viral_potential: 10,
                brand_fit: 8,
                competitive_gap: 2,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = RankerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trend" | "trending" | "viral" => Ok(Preset::Trend),
            "brand" | "brand-first" | "brand_first" | "brandfirst" => Ok(Preset::BrandFirst),
            "balanced" | "balance" => Ok(Preset::Balanced),
            _ => Err(RankerError::UnknownPreset(s.to_string())),
        }
    }
}
