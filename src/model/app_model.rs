//! Main application model with state management

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

use super::catalog::catalog;
use super::snapshot::{ErrorBanner, Snapshot};
use super::types::{Screen, Track};

/// State store. Owns the latest snapshot and publishes a fresh one on every
/// mutation; subscribers see whole snapshots, never single fields.
pub struct AppModel {
    catalog: Arc<[Arc<Track>]>,
    tx: watch::Sender<Snapshot>,
}

impl AppModel {
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }

    pub fn with_catalog(tracks: Arc<[Arc<Track>]>) -> Self {
        let (tx, _rx) = watch::channel(Snapshot::new(tracks.clone()));
        Self { catalog: tracks, tx }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    fn publish(&self, next: Snapshot) {
        // send_replace works with zero receivers, send would not
        self.tx.send_replace(next);
    }

    // ========================================================================
    // Intents
    // ========================================================================

    pub fn set_screen(&self, screen: Screen) {
        let mut next = self.snapshot();
        next.screen = screen;
        tracing::debug!(screen = screen.label(), "Screen changed");
        self.publish(next);
    }

    pub fn toggle_favorite(&self, track: &Track) {
        let mut next = self.snapshot();
        let now_favorite = if next.favorites.remove(&track.id) {
            false
        } else {
            next.favorites.insert(track.id.clone());
            true
        };
        tracing::debug!(track_id = %track.id, favorite = now_favorite, "Favorite toggled");
        self.publish(next);
    }

    pub fn update_search(&self, query: &str) {
        let trimmed = query.trim();
        let results: Vec<Arc<Track>> = if trimmed.is_empty() {
            self.catalog.to_vec()
        } else {
            let needle = trimmed.to_lowercase();
            self.catalog
                .iter()
                .filter(|t| t.matches(&needle))
                .cloned()
                .collect()
        };

        tracing::trace!(query = %trimmed, results = results.len(), "Search updated");

        let mut next = self.snapshot();
        next.search_query = query.to_string();
        next.search_results = results;
        self.publish(next);
    }

    pub fn play(&self, track: Arc<Track>) {
        let mut next = self.snapshot();
        tracing::debug!(track_id = %track.id, title = %track.title, "Play");
        next.current = Some(track);
        next.is_playing = true;
        self.publish(next);
    }

    pub fn pause(&self) {
        let mut next = self.snapshot();
        next.is_playing = false;
        tracing::debug!("Pause");
        self.publish(next);
    }

    // ========================================================================
    // Error banner
    // ========================================================================

    pub fn set_error(&self, message: String) {
        let mut next = self.snapshot();
        next.error = Some(ErrorBanner {
            message,
            raised_at: Instant::now(),
        });
        self.publish(next);
    }

    pub fn clear_error(&self) {
        let mut next = self.snapshot();
        if next.error.take().is_some() {
            self.publish(next);
        }
    }

    pub fn has_error(&self) -> bool {
        self.tx.borrow().error.is_some()
    }

    pub fn auto_clear_old_errors(&self, timeout: Duration) {
        let expired = self
            .tx
            .borrow()
            .error
            .as_ref()
            .is_some_and(|e| e.raised_at.elapsed() > timeout);
        if expired {
            self.clear_error();
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(model: &AppModel, id: &str) -> Arc<Track> {
        model
            .snapshot()
            .tracks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .unwrap()
    }

    fn result_ids(model: &AppModel) -> Vec<String> {
        model
            .snapshot()
            .search_results
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }

    #[test]
    fn initial_state() {
        let model = AppModel::new();
        let snap = model.snapshot();
        assert_eq!(snap.screen, Screen::Library);
        assert_eq!(snap.search_results.len(), snap.tracks.len());
        assert!(snap.favorites.is_empty());
        assert!(snap.current.is_none());
        assert!(!snap.is_playing);
    }

    #[test]
    fn search_matches_mood_case_insensitively() {
        let model = AppModel::new();
        model.update_search("focus");
        assert_eq!(result_ids(&model), vec!["2"]);
        assert_eq!(model.snapshot().search_results[0].title, "Night Frequency");

        model.update_search("xyz");
        assert!(model.snapshot().search_results.is_empty());
    }

    #[test]
    fn search_matches_title_and_artist() {
        let model = AppModel::new();
        model.update_search("VELVET");
        assert_eq!(result_ids(&model), vec!["3"]);
        model.update_search("the standard");
        assert_eq!(result_ids(&model), vec!["5"]);
    }

    #[test]
    fn search_preserves_catalog_order() {
        let model = AppModel::new();
        // "i" hits several titles/artists/moods
        model.update_search("i");
        let ids = result_ids(&model);
        let mut sorted = ids.clone();
        sorted.sort();
        assert!(ids.len() > 1);
        assert_eq!(ids, sorted);
    }

    #[test]
    fn search_is_trim_idempotent() {
        let model = AppModel::new();
        for query in ["  focus ", "\tkai", "  ", "", " xyz", "Lo-fi "] {
            model.update_search(query);
            let raw = result_ids(&model);
            model.update_search(query.trim());
            assert_eq!(raw, result_ids(&model), "query {:?}", query);
        }
    }

    #[test]
    fn blank_search_yields_full_catalog() {
        let model = AppModel::new();
        let all: Vec<String> = model.snapshot().tracks.iter().map(|t| t.id.clone()).collect();
        for query in ["", " ", "   \t\n"] {
            model.update_search("focus");
            model.update_search(query);
            assert_eq!(result_ids(&model), all);
        }
    }

    #[test]
    fn toggle_favorite_is_an_involution() {
        let model = AppModel::new();
        let three = track(&model, "3");

        model.toggle_favorite(&three);
        let snap = model.snapshot();
        assert!(snap.is_favorite("3"));
        assert_eq!(snap.favorites.len(), 1);
        let favs = snap.favorite_tracks();
        assert_eq!(favs.len(), 1);
        assert_eq!(favs[0].id, "3");

        model.toggle_favorite(&three);
        assert!(model.snapshot().favorites.is_empty());
        assert!(model.snapshot().favorite_tracks().is_empty());
    }

    #[test]
    fn favorite_tracks_follow_catalog_order() {
        let model = AppModel::new();
        model.toggle_favorite(&track(&model, "4"));
        model.toggle_favorite(&track(&model, "1"));
        let ids: Vec<String> = model
            .snapshot()
            .favorite_tracks()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn play_sets_current_from_any_state() {
        let model = AppModel::new();
        let one = track(&model, "1");
        let two = track(&model, "2");

        model.play(one.clone());
        let snap = model.snapshot();
        assert!(snap.is_playing);
        assert_eq!(snap.current.as_deref(), Some(one.as_ref()));

        model.play(two.clone());
        let snap = model.snapshot();
        assert!(snap.is_playing);
        assert_eq!(snap.current.as_deref(), Some(two.as_ref()));

        model.pause();
        model.play(one.clone());
        assert!(model.snapshot().is_playing);
        assert!(model.snapshot().is_current("1"));
    }

    #[test]
    fn pause_keeps_current_track() {
        let model = AppModel::new();
        model.pause();
        assert!(model.snapshot().current.is_none());

        let four = track(&model, "4");
        model.play(four);
        model.pause();
        let snap = model.snapshot();
        assert!(!snap.is_playing);
        assert!(snap.is_current("4"));
    }

    #[test]
    fn set_screen_changes_only_screen() {
        let model = AppModel::new();
        let before = model.snapshot();
        model.set_screen(Screen::Favorites);
        let after = model.snapshot();
        assert_eq!(after.screen, Screen::Favorites);
        assert_eq!(after.favorites, before.favorites);
        assert_eq!(after.search_results, before.search_results);
    }

    #[test]
    fn subscribers_see_every_mutation() {
        let model = AppModel::new();
        let mut rx = model.subscribe();
        assert!(!rx.has_changed().unwrap());

        model.set_screen(Screen::Search);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().screen, Screen::Search);

        model.update_search("chill");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().search_results.len(), 1);
    }

    #[test]
    fn errors_expire_after_timeout() {
        let model = AppModel::new();
        model.set_error("boom".to_string());
        model.auto_clear_old_errors(Duration::from_secs(60));
        assert!(model.has_error());
        std::thread::sleep(Duration::from_millis(5));
        model.auto_clear_old_errors(Duration::ZERO);
        assert!(!model.has_error());
    }
}
