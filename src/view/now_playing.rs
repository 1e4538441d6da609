//! Now-playing strip

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::Track;

/// Rows the strip occupies when visible
pub const NOW_PLAYING_HEIGHT: u16 = 4;

pub fn render_now_playing(frame: &mut Frame, area: Rect, track: &Track, is_playing: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Now Playing ")
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Track info
            Constraint::Length(18), // Play/pause affordance
        ])
        .split(inner);

    let info = Paragraph::new(vec![
        Line::from(Span::styled(
            track.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(track.artist.clone(), Style::default().fg(Color::Gray))),
    ]);
    frame.render_widget(info, chunks[0]);

    let (label, style) = if is_playing {
        ("[Space] ❚❚ Pause", Style::default().fg(Color::Yellow))
    } else {
        ("[Space] ▶ Play", Style::default().fg(Color::Green))
    };
    let button = Paragraph::new(Line::from(Span::styled(label, style.add_modifier(Modifier::BOLD))))
        .alignment(Alignment::Right);
    frame.render_widget(button, chunks[1]);
}
