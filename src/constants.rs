// Content Ranker Constants
// Ranges, defaults and thresholds shared by the store, weights and scorer.

// Factor ratings (inclusive)
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;
pub const DEFAULT_RATING: u8 = 5;

// Factor weights (inclusive). The UI suggests a total of 100 but never enforces it.
pub const WEIGHT_MIN: u8 = 0;
pub const WEIGHT_MAX: u8 = 50;
pub const TARGET_TOTAL_WEIGHT: u32 = 100;

// Score = sum(rating * weight) / SCORE_DIVISOR
pub const SCORE_DIVISOR: u32 = 10;

// Score bands, in tenths (70.0 and 50.0)
pub const HIGH_SCORE_THRESHOLD_TENTHS: u32 = 700;
pub const MEDIUM_SCORE_THRESHOLD_TENTHS: u32 = 500;

// Urgency thresholds on the trending-topic rating
pub const URGENT_TREND_THRESHOLD: u8 = 8;
pub const TIMELY_TREND_THRESHOLD: u8 = 6;

// Urgency labels
pub const LABEL_URGENT: &str = "URGENT - Act Now!";
pub const LABEL_TIMELY: &str = "Timely";
pub const LABEL_EVERGREEN: &str = "Evergreen";

// New ideas are titled "Video Idea {n}"
pub const DEFAULT_TITLE_PREFIX: &str = "Video Idea";

// Sample idea seeded into a fresh session
pub const SAMPLE_TITLE: &str = "Sample Video 1";
pub const SAMPLE_RATINGS: [u8; 8] = [7, 8, 6, 7, 9, 7, 8, 5];

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Interactive session
pub const SESSION_PROMPT: &str = "ranker> ";
