// Content Ranker - Session State
// The single owned application state: one idea store and one weight config.
// Derived views are rebuilt from scratch on every call to view().

pub mod view;

use crate::constants::{SAMPLE_RATINGS, SAMPLE_TITLE};
use crate::factors::Factor;
use crate::ideas::{IdeaId, IdeaStore, IdeaUpdate, Ratings, VideoIdea};
use crate::settings::Settings;
use crate::weights::{Preset, WeightConfig};

pub use view::RankingView;

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: IdeaStore,
    weights: WeightConfig,
}

impl Session {
    /// Empty store with Balanced weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting state described by settings: preset weights plus the optional sample idea
    pub fn from_settings(settings: &Settings) -> Self {
        let mut session = Self::new();
        session.weights = settings.starting_preset.weights();
        if settings.seed_sample {
            let sample = Ratings::from_values(SAMPLE_RATINGS.map(i64::from));
            session.store.insert(SAMPLE_TITLE.to_string(), sample);
        }
        log::debug!(
            "Session started with preset '{}' and {} idea(s)",
            settings.starting_preset,
            session.store.len()
        );
        session
    }

    // ----- Record store -----

    pub fn add(&mut self) -> IdeaId {
        self.store.add()
    }

    pub fn add_titled(&mut self, title: impl Into<String>) -> IdeaId {
        self.store.add_titled(title)
    }

    pub fn remove(&mut self, id: IdeaId) -> bool {
        self.store.remove(id)
    }

    pub fn update(&mut self, id: IdeaId, update: IdeaUpdate) -> bool {
        self.store.update(id, update)
    }

    pub fn idea(&self, id: IdeaId) -> Option<&VideoIdea> {
        self.store.get(id)
    }

    /// Ideas in insertion order (the editing list)
    pub fn ideas(&self) -> &[VideoIdea] {
        self.store.ideas()
    }

    // ----- Weights -----

    pub fn set_weight(&mut self, factor: Factor, value: i64) -> u8 {
        let stored = self.weights.set_weight(factor, value);
        if !self.weights.is_balanced() {
            log::debug!("Weights now total {}", self.weights.total_weight());
        }
        stored
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        self.weights.apply_preset(preset);
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn total_weight(&self) -> u32 {
        self.weights.total_weight()
    }

    // ----- Derived -----

    /// Fresh ranking of the current state
    pub fn view(&self) -> RankingView<'_> {
        RankingView::build(self.store.ideas(), &self.weights)
    }
}
