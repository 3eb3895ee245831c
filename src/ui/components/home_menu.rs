use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::constants::{APP_SUBTITLE, APP_TITLE, HOME_MENU_ENTRIES};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{create_instructions_paragraph, shortcuts, InstructionShortcut};
use crate::ui::core::{Action, Component, WorkflowKind};

/// Landing screen listing the six workflows
pub struct HomeMenuComponent {
    list_state: ListState,
    icons: IconService,
}

impl HomeMenuComponent {
    pub fn new(icons: &IconService) -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
            icons: icons.clone(),
        }
    }

    pub fn selected(&self) -> WorkflowKind {
        let index = self.list_state.selected().unwrap_or(0);
        WorkflowKind::ALL[index.min(WorkflowKind::ALL.len() - 1)]
    }

    fn move_selection(&mut self, forward: bool) {
        let len = WorkflowKind::ALL.len();
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
    }
}

impl Component for HomeMenuComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Enter => Action::OpenWorkflow(self.selected()),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.list_state.select(Some(index));
                Action::OpenWorkflow(WorkflowKind::ALL[index])
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).split(rect);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let selected = self.list_state.selected();
        let items: Vec<ListItem> = WorkflowKind::ALL
            .iter()
            .zip(HOME_MENU_ENTRIES.iter())
            .enumerate()
            .map(|(index, (kind, (title, description)))| {
                let marker = if Some(index) == selected { self.icons.selected() } else { " " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", marker)),
                        Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::DarkGray)),
                        Span::raw(format!("{} ", self.icons.resource(kind.resource()))),
                        Span::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("      {}", description),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        f.render_stateful_widget(List::new(items), chunks[1], &mut self.list_state);
        f.render_widget(create_instructions_paragraph(&self.key_hints()), chunks[2]);
    }

    fn key_hints(&self) -> Vec<InstructionShortcut> {
        vec![
            shortcuts::JK_MOVE,
            shortcuts::ENTER_OPEN,
            shortcuts::G_LOGS,
            shortcuts::Q_QUIT,
        ]
    }
}
