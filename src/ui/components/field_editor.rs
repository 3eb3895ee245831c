//! Key handling and rendering of a [`DraftEditor`], shared by the creation
//! forms and the in-place edit buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::constants::{DATE_HINT, LOADING_TEXT, NO_TOPICS_TEXT, SELECT_TOPIC_TEXT};
use crate::entities::TopicLookup;
use crate::form::{DraftEditor, DraftFields, FieldKind};
use crate::ui::components::dialogs::common::input_spans;

/// What a key press meant to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Handled,
    Submit,
    Cancel,
    Ignored,
}

pub fn handle_editor_key<D: DraftFields>(
    editor: &mut DraftEditor<D>,
    topics: &TopicLookup,
    key: KeyEvent,
) -> EditorKey {
    let on_topic = editor.focused_field().kind == FieldKind::TopicSelect;
    match key.code {
        KeyCode::Esc => EditorKey::Cancel,
        KeyCode::Enter => EditorKey::Submit,
        KeyCode::Tab | KeyCode::Down => {
            editor.focus_next();
            EditorKey::Handled
        }
        KeyCode::BackTab | KeyCode::Up => {
            editor.focus_prev();
            EditorKey::Handled
        }
        KeyCode::Left if on_topic => {
            editor.cycle_topic(topics, false);
            EditorKey::Handled
        }
        KeyCode::Right | KeyCode::Char(' ') if on_topic => {
            editor.cycle_topic(topics, true);
            EditorKey::Handled
        }
        KeyCode::Left => {
            editor.move_left();
            EditorKey::Handled
        }
        KeyCode::Right => {
            editor.move_right();
            EditorKey::Handled
        }
        KeyCode::Home => {
            editor.move_home();
            EditorKey::Handled
        }
        KeyCode::End => {
            editor.cursor_to_end();
            EditorKey::Handled
        }
        KeyCode::Backspace => {
            editor.backspace();
            EditorKey::Handled
        }
        KeyCode::Delete => {
            editor.delete();
            EditorKey::Handled
        }
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            editor.insert_char(c);
            EditorKey::Handled
        }
        _ => EditorKey::Ignored,
    }
}

fn topic_value(value: &str, topics: &TopicLookup) -> String {
    if !topics.is_loaded() {
        return LOADING_TEXT.to_string();
    }
    if topics.topics().is_empty() {
        return NO_TOPICS_TEXT.to_string();
    }
    match value.parse::<i64>().unwrap_or(0) {
        0 => SELECT_TOPIC_TEXT.to_string(),
        id => topics.label_for(id),
    }
}

/// One label line and one value line per field.
pub fn editor_lines<D: DraftFields>(editor: &DraftEditor<D>, topics: &TopicLookup) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, field) in D::fields().iter().enumerate() {
        let focused = index == editor.focus();
        let marker = if field.required { " *" } else { "" };
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(format!("{}{}", field.label, marker), label_style)));

        let value = editor.draft().value(field.key);
        let mut spans = vec![Span::raw("  ")];
        match field.kind {
            FieldKind::TopicSelect => {
                let text = topic_value(&value, topics);
                if focused {
                    spans.push(Span::styled(format!("◀ {} ▶", text), Style::default().fg(Color::White)));
                } else {
                    spans.push(Span::raw(text));
                }
            }
            _ if focused => spans.extend(input_spans(&value, editor.cursor())),
            FieldKind::Date if value.is_empty() => {
                spans.push(Span::styled(DATE_HINT, Style::default().fg(Color::DarkGray)));
            }
            _ => spans.push(Span::raw(value)),
        }
        lines.push(Line::from(spans));
    }
    lines
}

pub fn render_editor<D: DraftFields>(f: &mut Frame, area: Rect, editor: &DraftEditor<D>, topics: &TopicLookup) {
    let paragraph = Paragraph::new(editor_lines(editor, topics)).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
