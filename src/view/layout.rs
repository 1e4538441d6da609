//! Layout rendering (navigation bar, search field)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
    Frame,
};

use crate::model::{Screen, UiState};

pub const SEARCH_PLACEHOLDER: &str = "Search by title, artist, or mood";

pub fn render_nav_bar(frame: &mut Frame, area: Rect, active: Screen) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .map(|screen| Line::from(format!(" {} {} ", screen.index() + 1, screen.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Standard Music (h for help) "),
        );

    frame.render_widget(tabs, area);
}

pub fn render_search_input(frame: &mut Frame, area: Rect, query: &str, ui_state: &UiState) {
    let border_style = if ui_state.search_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let (text, text_style) = if query.is_empty() {
        (SEARCH_PLACEHOLDER.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (query.to_string(), Style::default().fg(Color::White))
    };

    let title = if ui_state.search_focused {
        " Search (Esc to finish) "
    } else {
        " Search (/ to type) "
    };

    let search = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(search, area);

    if ui_state.search_focused {
        // border + padding on the left, then the typed text
        let cursor_x = area.x + 2 + query.chars().count() as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        frame.set_cursor_position((cursor_x.min(max_x), area.y + 1));
    }
}
