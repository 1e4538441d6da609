//! Immutable view of the complete application state

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use super::types::{Screen, Track};

/// A transient error shown on top of the current screen
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorBanner {
    pub message: String,
    pub raised_at: Instant,
}

/// Everything the view needs to draw one frame.
///
/// A new value is published for every mutation; nothing inside is shared
/// mutably, the catalog entries are reference counted.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub tracks: Arc<[Arc<Track>]>,
    pub search_query: String,
    pub search_results: Vec<Arc<Track>>,
    pub favorites: HashSet<String>,
    pub current: Option<Arc<Track>>,
    pub is_playing: bool,
    pub screen: Screen,
    pub error: Option<ErrorBanner>,
}

impl Snapshot {
    pub fn new(tracks: Arc<[Arc<Track>]>) -> Self {
        Self {
            search_results: tracks.to_vec(),
            tracks,
            search_query: String::new(),
            favorites: HashSet::new(),
            current: None,
            is_playing: false,
            screen: Screen::default(),
            error: None,
        }
    }

    pub fn is_favorite(&self, track_id: &str) -> bool {
        self.favorites.contains(track_id)
    }

    /// Favorite tracks, in catalog order.
    pub fn favorite_tracks(&self) -> Vec<Arc<Track>> {
        self.tracks
            .iter()
            .filter(|t| self.favorites.contains(&t.id))
            .cloned()
            .collect()
    }

    /// The list the active screen shows.
    pub fn visible_tracks(&self) -> Vec<Arc<Track>> {
        match self.screen {
            Screen::Library => self.tracks.to_vec(),
            Screen::Search => self.search_results.clone(),
            Screen::Favorites => self.favorite_tracks(),
        }
    }

    pub fn is_current(&self, track_id: &str) -> bool {
        self.current.as_ref().is_some_and(|t| t.id == track_id)
    }
}
