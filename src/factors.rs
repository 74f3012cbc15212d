// Content Ranker - Factor Catalogue
// The eight fixed rating criteria. Catalogue order drives both rendering and scoring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RankerError;

/// One of the eight fixed rating criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    StrategicAlignment,
    EngagementPotential,
    TrendingTopicScore,
    DebateControversy,
    ResourceEfficiency,
    ViralPotential,
    BrandFit,
    CompetitiveGap,
}

/// Static description of a factor, used by the presentation layer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FactorDefinition {
    pub factor: Factor,
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// All factors in catalogue order
pub static FACTORS: [FactorDefinition; 8] = [
    FactorDefinition {
        factor: Factor::StrategicAlignment,
        key: "strategicAlignment",
        label: "Strategic Alignment",
        description: "Supports business goals and KPIs",
        icon: "🎯",
    },
    FactorDefinition {
        factor: Factor::EngagementPotential,
        key: "engagementPotential",
        label: "Engagement Potential",
        description: "Drives comments, shares, saves, interactions",
        icon: "💬",
    },
    FactorDefinition {
        factor: Factor::TrendingTopicScore,
        key: "trendingTopicScore",
        label: "Hot/Trending Topic",
        description: "Riding current trends, viral topics, cultural moments",
        icon: "🔥",
    },
    FactorDefinition {
        factor: Factor::DebateControversy,
        key: "debateControversy",
        label: "Debate/Discussion Value",
        description: "Sparks conversation, polarizing opinions, hot takes",
        icon: "⚡",
    },
    FactorDefinition {
        factor: Factor::ResourceEfficiency,
        key: "resourceEfficiency",
        label: "Resource Efficiency",
        description: "Easy to produce, quick turnaround, low cost",
        icon: "⚙️",
    },
    FactorDefinition {
        factor: Factor::ViralPotential,
        key: "viralPotential",
        label: "Viral/Share Potential",
        description: "Likelihood of being shared beyond followers",
        icon: "🚀",
    },
    FactorDefinition {
        factor: Factor::BrandFit,
        key: "brandFit",
        label: "Brand Safety & Fit",
        description: "On-brand, safe, aligns with values",
        icon: "🛡️",
    },
    FactorDefinition {
        factor: Factor::CompetitiveGap,
        key: "competitiveGap",
        label: "Competitive Advantage",
        description: "Unique angle competitors haven't covered",
        icon: "💎",
    },
];

impl Factor {
    /// Every factor, in catalogue order
    pub const ALL: [Factor; 8] = [
        Factor::StrategicAlignment,
        Factor::EngagementPotential,
        Factor::TrendingTopicScore,
        Factor::DebateControversy,
        Factor::ResourceEfficiency,
        Factor::ViralPotential,
        Factor::BrandFit,
        Factor::CompetitiveGap,
    ];

    /// Position in the catalogue
    pub fn index(self) -> usize {
        match self {
            Factor::StrategicAlignment => 0,
            Factor::EngagementPotential => 1,
            Factor::TrendingTopicScore => 2,
            Factor::DebateControversy => 3,
            Factor::ResourceEfficiency => 4,
            Factor::ViralPotential => 5,
            Factor::BrandFit => 6,
            Factor::CompetitiveGap => 7,
        }
    }

    pub fn definition(self) -> &'static FactorDefinition {
        &FACTORS[self.index()]
    }

    pub fn key(self) -> &'static str {
        self.definition().key
    }

    pub fn label(self) -> &'static str {
        self.definition().label
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Factor {
    type Err = RankerError;

    /// Accepts the camelCase key or its snake_case form, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        Factor::ALL
            .into_iter()
            .find(|factor| factor.key().to_lowercase() == wanted)
            .ok_or_else(|| RankerError::UnknownFactor(s.to_string()))
    }
}
