//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Screen;
use super::{AppController, Intent};

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C / Ctrl+Q always quit, even while typing
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.dispatch(Intent::Quit);
            return;
        }

        // Handle error message first (blocks all other interactions)
        if self.model.has_error() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.model.clear_error();
            }
            return;
        }

        // Handle help popup
        if self.ui.show_help_popup {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?')
            ) {
                self.ui.show_help_popup = false;
            }
            return;
        }

        // Handle search input while the field has focus
        if self.ui.search_focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.unfocus_search(),
                KeyCode::Backspace => self.backspace_search(),
                KeyCode::Up => self.move_selection_up(),
                KeyCode::Down => self.move_selection_down(),
                KeyCode::Tab => {
                    let next = self.model.snapshot().screen.next();
                    self.dispatch(Intent::SetScreen(next));
                }
                KeyCode::BackTab => {
                    let prev = self.model.snapshot().screen.prev();
                    self.dispatch(Intent::SetScreen(prev));
                }
                // Shifted letters are text; Ctrl/Alt chords are not
                KeyCode::Char(c)
                    if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.append_to_search(c)
                }
                _ => {}
            }
            return;
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.dispatch(Intent::Quit);
            }
            KeyCode::Char('1') => self.dispatch(Intent::SetScreen(Screen::Library)),
            KeyCode::Char('2') => self.dispatch(Intent::SetScreen(Screen::Search)),
            KeyCode::Char('3') => self.dispatch(Intent::SetScreen(Screen::Favorites)),
            KeyCode::Tab => {
                let screen = self.model.snapshot().screen;
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.dispatch(Intent::SetScreen(screen.prev()));
                } else {
                    self.dispatch(Intent::SetScreen(screen.next()));
                }
            }
            KeyCode::BackTab => {
                let screen = self.model.snapshot().screen;
                self.dispatch(Intent::SetScreen(screen.prev()));
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
            // Play the selected row
            KeyCode::Enter => {
                if let Some(track) = self.selected_track() {
                    self.dispatch(Intent::Play(track));
                }
            }
            // Like / unlike the selected row
            KeyCode::Char('f') | KeyCode::Char('F') => {
                if let Some(track) = self.selected_track() {
                    self.dispatch(Intent::ToggleFavorite(track));
                }
            }
            // Now-playing strip
            KeyCode::Char(' ') => self.dispatch(Intent::TogglePlayback),
            // Focus search
            KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Char('S') => self.focus_search(),
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                self.ui.show_help_popup = true;
            }
            _ => {}
        }
    }
}
