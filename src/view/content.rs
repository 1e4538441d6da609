//! Main content area rendering (the three screens and their track lists)

use std::sync::Arc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{Screen, Snapshot, Track, UiState};
use super::layout::render_search_input;
use super::utils::{render_scrollable_list, truncate_string};

pub const NO_TRACKS_TEXT: &str = "No tracks found.";
pub const NO_FAVORITES_TEXT: &str = "No favorites yet. Tap the heart icon on any song.";

pub fn render_main_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot, ui_state: &UiState) {
    match snapshot.screen {
        Screen::Library => {
            render_track_list(
                frame,
                area,
                " Discover ",
                &snapshot.tracks,
                snapshot,
                ui_state,
                NO_TRACKS_TEXT,
            );
        }
        Screen::Search => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Search input
                    Constraint::Min(0),    // Results
                ])
                .split(area);

            render_search_input(frame, chunks[0], &snapshot.search_query, ui_state);
            render_track_list(
                frame,
                chunks[1],
                " Search results ",
                &snapshot.search_results,
                snapshot,
                ui_state,
                NO_TRACKS_TEXT,
            );
        }
        Screen::Favorites => {
            let favorites = snapshot.favorite_tracks();
            render_track_list(
                frame,
                area,
                " Favorites ",
                &favorites,
                snapshot,
                ui_state,
                NO_FAVORITES_TEXT,
            );
        }
    }
}

fn render_track_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    tracks: &[Arc<Track>],
    snapshot: &Snapshot,
    ui_state: &UiState,
    empty_text: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .padding(Padding::horizontal(1));

    if tracks.is_empty() {
        let empty = Paragraph::new(empty_text.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // borders + horizontal padding
    let content_width = area.width.saturating_sub(4) as usize;
    let selected = ui_state.selected.min(tracks.len() - 1);

    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            render_track_row(
                track,
                i == selected,
                snapshot.is_favorite(&track.id),
                snapshot.is_current(&track.id),
                content_width,
            )
        })
        .collect();

    render_scrollable_list(frame, area, items, selected, block);
}

fn render_track_row(
    track: &Track,
    is_selected: bool,
    is_favorite: bool,
    is_current: bool,
    content_width: usize,
) -> ListItem<'static> {
    let style = if is_selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if is_current {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let playing_indicator = if is_current { "▶" } else { " " };
    let heart = if is_favorite { "♥" } else { "♡" };
    let heart_style = if is_favorite {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // "▶ ♥ " prefix is four columns wide
    let title = truncate_string(&track.title, content_width.saturating_sub(4));
    let subtitle = truncate_string(
        &format!("{} • {}", track.artist, track.mood),
        content_width.saturating_sub(4),
    );

    let text = Text::from(vec![
        Line::from(vec![
            Span::styled(format!("{} ", playing_indicator), style),
            Span::styled(format!("{} ", heart), heart_style),
            Span::styled(title, style),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(subtitle, Style::default().fg(Color::Gray)),
        ]),
    ]);

    ListItem::new(text)
}
