// Urgency badge from the trending-topic rating alone

use serde::Serialize;

use crate::constants::{
    LABEL_EVERGREEN, LABEL_TIMELY, LABEL_URGENT, TIMELY_TREND_THRESHOLD, URGENT_TREND_THRESHOLD,
};
use crate::factors::Factor;
use crate::ideas::VideoIdea;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Urgent,
    Timely,
    Evergreen,
}

impl Urgency {
    /// >= 8 urgent, 6..8 timely, below 6 evergreen
    pub fn from_trend(trend: u8) -> Self {
        if trend >= URGENT_TREND_THRESHOLD {
            Urgency::Urgent
        } else if trend >= TIMELY_TREND_THRESHOLD {
            Urgency::Timely
        } else {
            Urgency::Evergreen
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Urgent => LABEL_URGENT,
            Urgency::Timely => LABEL_TIMELY,
            Urgency::Evergreen => LABEL_EVERGREEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrgencyBadge {
    pub label: &'static str,
    pub tier: Urgency,
}

pub fn classify(idea: &VideoIdea) -> UrgencyBadge {
    let tier = Urgency::from_trend(idea.rating(Factor::TrendingTopicScore));
    UrgencyBadge { label: tier.label(), tier }
}
