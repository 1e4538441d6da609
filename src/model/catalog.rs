//! The compiled-in track catalog

use std::sync::Arc;

use super::types::Track;

const BASE_URL: &str = "https://www.soundhelix.com/examples/mp3";

/// Builds the fixed catalog, in display order.
pub fn catalog() -> Arc<[Arc<Track>]> {
    let entries = [
        ("1", "Sunrise Drive", "Nova Lane", "Chill"),
        ("2", "Night Frequency", "Atlas Echo", "Focus"),
        ("3", "Velvet Sky", "Kai River", "Lo-fi"),
        ("4", "City Pulse", "Mina Sol", "Workout"),
        ("5", "Afterglow", "The Standard", "Evening"),
    ];

    entries
        .iter()
        .map(|(id, title, artist, mood)| {
            let url = format!("{}/SoundHelix-Song-{}.mp3", BASE_URL, id);
            Arc::new(Track::new(id, title, artist, mood, &url))
        })
        .collect()
}
