// Ordered in-memory idea store
// Insertion order is canonical; ranking never reorders it.

use chrono::Utc;

use crate::constants::DEFAULT_TITLE_PREFIX;
use super::{IdeaId, IdeaUpdate, Ratings, VideoIdea};

#[derive(Debug, Default, Clone)]
pub struct IdeaStore {
    ideas: Vec<VideoIdea>,
    last_id: u64,
}

impl IdeaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an idea with default ratings and the title "Video Idea {n}"
    pub fn add(&mut self) -> IdeaId {
        let title = format!("{} {}", DEFAULT_TITLE_PREFIX, self.ideas.len() + 1);
        self.add_titled(title)
    }

    /// Append an idea with default ratings and the given title
    pub fn add_titled(&mut self, title: impl Into<String>) -> IdeaId {
        self.insert(title.into(), Ratings::default())
    }

    /// Append an idea with explicit ratings (used for the seeded sample)
    pub fn insert(&mut self, title: String, ratings: Ratings) -> IdeaId {
        let id = self.next_id();
        log::debug!("Adding idea {} '{}'", id, title);
        self.ideas.push(VideoIdea::new(id, title).with_ratings(ratings));
        id
    }

    /// Remove by id. Missing ids are ignored; returns whether anything was removed.
    pub fn remove(&mut self, id: IdeaId) -> bool {
        let before = self.ideas.len();
        self.ideas.retain(|idea| idea.id != id);
        let removed = self.ideas.len() != before;
        if removed {
            log::debug!("Removed idea {}", id);
        } else {
            log::debug!("Remove ignored, no idea {}", id);
        }
        removed
    }

    /// Apply one field edit. Missing ids are ignored; returns whether an idea was found.
    pub fn update(&mut self, id: IdeaId, update: IdeaUpdate) -> bool {
        let Some(idea) = self.ideas.iter_mut().find(|idea| idea.id == id) else {
            log::debug!("Update ignored, no idea {}", id);
            return false;
        };

        match update {
            IdeaUpdate::Title(title) => idea.title = title,
            IdeaUpdate::Rating(factor, value) => {
                let stored = idea.ratings.set(factor, value);
                log::debug!("Idea {} {} = {}", id, factor, stored);
            }
        }
        true
    }

    pub fn get(&self, id: IdeaId) -> Option<&VideoIdea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    /// Ideas in insertion order
    pub fn ideas(&self) -> &[VideoIdea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    // Wall-clock millis, bumped past the last issued id so rapid adds stay unique
    fn next_id(&mut self) -> IdeaId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        IdeaId(id)
    }
}
