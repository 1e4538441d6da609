//! Screen switching, list cursor and search editing

use std::sync::Arc;

use crate::model::{Screen, Track};

use super::{AppController, Intent};

impl AppController {
    pub(crate) fn set_screen(&mut self, screen: Screen) {
        if self.model.snapshot().screen != screen {
            self.ui.selected = 0;
        }
        if screen != Screen::Search {
            self.ui.search_focused = false;
        }
        self.model.set_screen(screen);
    }

    pub(crate) fn toggle_favorite(&mut self, track: &Track) {
        self.model.toggle_favorite(track);
        // Unfavoriting on the Favorites screen shrinks the list under the cursor
        self.clamp_selection();
    }

    pub(crate) fn update_search(&mut self, query: &str) {
        self.model.update_search(query);
        self.ui.selected = 0;
    }

    pub(crate) fn focus_search(&mut self) {
        self.set_screen(Screen::Search);
        self.ui.search_focused = true;
    }

    pub(crate) fn unfocus_search(&mut self) {
        self.ui.search_focused = false;
    }

    pub(crate) fn append_to_search(&mut self, c: char) {
        let mut query = self.model.snapshot().search_query;
        query.push(c);
        self.dispatch(Intent::UpdateSearch(query));
    }

    pub(crate) fn backspace_search(&mut self) {
        let mut query = self.model.snapshot().search_query;
        if query.pop().is_some() {
            self.dispatch(Intent::UpdateSearch(query));
        }
    }

    pub(crate) fn move_selection_up(&mut self) {
        self.ui.selected = self.ui.selected.saturating_sub(1);
    }

    pub(crate) fn move_selection_down(&mut self) {
        let len = self.model.snapshot().visible_tracks().len();
        if self.ui.selected < len.saturating_sub(1) {
            self.ui.selected += 1;
        }
    }

    pub(crate) fn selected_track(&self) -> Option<Arc<Track>> {
        self.model
            .snapshot()
            .visible_tracks()
            .get(self.ui.selected)
            .cloned()
    }

    fn clamp_selection(&mut self) {
        let len = self.model.snapshot().visible_tracks().len();
        self.ui.selected = self.ui.selected.min(len.saturating_sub(1));
    }
}
