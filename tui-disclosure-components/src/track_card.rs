//! Card displaying a music track

use std::time::Duration;

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_disclosure_core::{Component, EventKind};

/// Props for TrackCard component
pub struct TrackCardProps<'a, A> {
    pub title: &'a str,
    pub artist: &'a str,
    pub album: Option<&'a str>,
    pub duration: Option<Duration>,
    /// Highlights the border and accepts Enter
    pub is_selected: bool,
    /// Emitted on Enter while selected or on click
    pub on_open: Option<A>,
}

/// Format a duration as `m:ss`, or `h:mm:ss` from one hour up
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Rounded card with title, artist line and optional duration
#[derive(Default)]
pub struct TrackCard {
    area: Rect,
}

impl TrackCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows needed to draw a card with or without an album line
    pub fn height(has_album: bool) -> u16 {
        if has_album {
            5
        } else {
            4
        }
    }
}

impl<A> Component<A> for TrackCard {
    type Props<'a> = TrackCardProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let Some(action) = props.on_open else {
            return None;
        };
        if event.is_left_press_in(self.area) {
            return Some(action);
        }
        match event.key_press() {
            Some(key) if props.is_selected && key.code == KeyCode::Enter => Some(action),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = area;

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if props.is_selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        if let Some(duration) = props.duration {
            let label = format!(" {} ", format_duration(duration));
            block = block.title(Line::from(label).right_aligned());
        }

        let mut lines = vec![
            Line::from(Span::styled(
                props.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(props.artist)),
        ];
        if let Some(album) = props.album {
            lines.push(Line::from(Span::styled(
                album,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
