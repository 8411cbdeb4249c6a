//! Labeled multi-line text area with a live character count

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_disclosure_core::{Component, EventKind};

/// Props for CountedTextArea component
pub struct CountedTextAreaProps<'a, A> {
    /// Label shown on the top border
    pub label: &'a str,
    /// Current value; lines are separated by `\n`
    pub value: &'a str,
    /// Placeholder text when empty
    pub placeholder: &'a str,
    /// Maximum number of characters, `None` for unlimited
    pub max_chars: Option<usize>,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Callback when value changes
    pub on_change: fn(String) -> A,
}

/// Number of characters in `value`, as shown by the counter
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// Counter text: "12/280" with a maximum, "12" without
pub fn format_count(count: usize, max_chars: Option<usize>) -> String {
    match max_chars {
        Some(max) => format!("{count}/{max}"),
        None => count.to_string(),
    }
}

/// A multi-line text area that shows how many characters it holds
///
/// Typing past `max_chars` is rejected. Enter inserts a newline (which
/// counts as a character). Home/End move within the current line.
#[derive(Default)]
pub struct CountedTextArea {
    /// Cursor position (byte index)
    cursor: usize,
}

impl CountedTextArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position as a byte index into the value
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn move_cursor_left(&mut self, value: &str) {
        if let Some((i, _)) = value[..self.cursor].char_indices().next_back() {
            self.cursor = i;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn line_start(&self, value: &str) -> usize {
        value[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, value: &str) -> usize {
        value[self.cursor..]
            .find('\n')
            .map_or(value.len(), |i| self.cursor + i)
    }

    fn insert_char(&mut self, value: &str, c: char, max_chars: Option<usize>) -> Option<String> {
        if max_chars.is_some_and(|max| char_count(value) >= max) {
            return None;
        }
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        Some(new_value)
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        let (start, _) = value[..self.cursor].char_indices().next_back()?;
        let new_value = format!("{}{}", &value[..start], &value[self.cursor..]);
        self.cursor = start;
        Some(new_value)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        Some(format!(
            "{}{}",
            &value[..self.cursor],
            &value[self.cursor + c.len_utf8()..]
        ))
    }

    /// Line and column (in characters) of the cursor
    fn cursor_line_col(&self, value: &str) -> (usize, usize) {
        let before = &value[..self.cursor];
        let line = before.matches('\n').count();
        let col = char_count(&before[self.line_start(value)..]);
        (line, col)
    }
}

impl<A> Component<A> for CountedTextArea {
    type Props<'a> = CountedTextAreaProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }
        self.clamp_cursor(props.value);

        let Some(key) = event.key_press() else {
            return None;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Ctrl+U: clear
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        let value = props.value;
        let changed = match key.code {
            KeyCode::Char(c) => self.insert_char(value, c, props.max_chars),
            KeyCode::Enter => self.insert_char(value, '\n', props.max_chars),
            KeyCode::Backspace => self.delete_char_before(value),
            KeyCode::Delete => self.delete_char_at(value),
            KeyCode::Left => {
                self.move_cursor_left(value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(value);
                None
            }
            KeyCode::Home => {
                self.cursor = self.line_start(value);
                None
            }
            KeyCode::End => {
                self.cursor = self.line_end(value);
                None
            }
            _ => None,
        };
        changed.map(props.on_change)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let count = char_count(props.value);
        let at_limit = props.max_chars.is_some_and(|max| count >= max);
        let counter_style = if at_limit {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            })
            .title(format!(" {} ", props.label))
            .title_bottom(
                Line::styled(format!(" {} ", format_count(count, props.max_chars)), counter_style)
                    .right_aligned(),
            );
        let inner = block.inner(area);

        let paragraph = if props.value.is_empty() {
            Paragraph::new(props.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(props.value)
        };
        frame.render_widget(paragraph.block(block), area);

        if props.is_focused {
            let (line, col) = self.cursor_line_col(props.value);
            let x = inner.x.saturating_add(col as u16);
            let y = inner.y.saturating_add(line as u16);
            if x < inner.right() && y < inner.bottom() {
                frame.set_cursor_position((x, y));
            }
        }
    }
}
