use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Splits an input value around a character cursor, drawing the cursor as a block
pub fn input_spans(value: &str, cursor: usize) -> Vec<Span<'static>> {
    let cursor_char = "█";
    let split = value.char_indices().nth(cursor).map(|(i, _)| i).unwrap_or(value.len());
    let (before, after) = value.split_at(split);
    let mut after_chars = after.chars();
    let under_cursor = after_chars.next();

    let mut spans = vec![Span::raw(before.to_string())];
    match under_cursor {
        Some(c) => spans.push(Span::styled(
            c.to_string(),
            Style::default().add_modifier(Modifier::REVERSED),
        )),
        None => spans.push(Span::raw(cursor_char)),
    }
    spans.push(Span::raw(after_chars.as_str().to_string()));
    spans
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (index, (key, color, desc)) in instructions.iter().enumerate() {
        if index > 0 {
            instruction_text.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
        }
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across workflows
pub mod shortcuts {
    use super::*;

    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_TOPIC: InstructionShortcut = ("←/→", Color::Cyan, " Topic");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_OPEN: InstructionShortcut = ("Enter", Color::Green, " Open");
    pub const JK_MOVE: InstructionShortcut = ("j/k", Color::Cyan, " Move");
    pub const E_EDIT: InstructionShortcut = ("e", Color::Yellow, " Edit");
    pub const D_DELETE: InstructionShortcut = ("d", Color::Red, " Delete");
    pub const G_LOGS: InstructionShortcut = ("G", Color::Magenta, " Logs");
    pub const Q_QUIT: InstructionShortcut = ("q", Color::Red, " Quit");
    pub const CTRL_L_LIST: InstructionShortcut = ("Ctrl+L", Color::Cyan, " List");
    pub const CTRL_L_EDITOR: InstructionShortcut = ("Ctrl+L", Color::Cyan, " Back to edit");
    pub const CTRL_X_DISMISS: InstructionShortcut = ("Ctrl+X", Color::Gray, " Dismiss");
}
