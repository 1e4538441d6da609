//! Core type definitions for the application

/// A single playable entry of the catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub mood: String,
    pub url: String,
}

impl Track {
    pub fn new(id: &str, title: &str, artist: &str, mood: &str, url: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            mood: mood.to_string(),
            url: url.to_string(),
        }
    }

    /// Case-insensitive substring match against title, artist or mood.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.artist.to_lowercase().contains(needle)
            || self.mood.to_lowercase().contains(needle)
    }
}

/// Which top-level screen is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Library,
    Search,
    Favorites,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Library, Screen::Search, Screen::Favorites];

    pub fn next(self) -> Self {
        match self {
            Screen::Library => Screen::Search,
            Screen::Search => Screen::Favorites,
            Screen::Favorites => Screen::Library,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Library => Screen::Favorites,
            Screen::Search => Screen::Library,
            Screen::Favorites => Screen::Search,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Library => "Library",
            Screen::Search => "Search",
            Screen::Favorites => "Favorites",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Library => 0,
            Screen::Search => 1,
            Screen::Favorites => 2,
        }
    }
}

/// Ephemeral UI state owned by the controller, never part of a snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Cursor into the list the active screen shows
    pub selected: usize,
    /// Whether key presses edit the search field
    pub search_focused: bool,
    pub show_help_popup: bool,
}
