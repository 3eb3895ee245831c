use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::backend::BackendError;
use crate::constants::{EMPTY_COLLECTION_TEXT, ERROR_OPERATION_IN_PROGRESS, LOADING_TEXT};
use crate::entities::{Collection, Entity, EntityDraft, Resource, Topic};
use crate::form::{DraftFields, FormError};
use crate::icons::IconService;
use crate::manager::{CollectionManager, ManagerState, PendingState};
use crate::notification::NotificationKind;
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_instructions_paragraph, shortcuts, InstructionShortcut,
};
use crate::ui::components::dialogs::system_dialogs::render_delete_confirmation_dialog;
use crate::ui::components::field_editor::{handle_editor_key, render_editor, EditorKey};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

/// Management workflow seen from the shell, independent of the record type
pub trait CollectionWorkflow: Component {
    fn needs_topics(&self) -> bool;
    fn on_loaded(&mut self, result: Result<Collection, BackendError>);
    fn on_topics_loaded(&mut self, result: Result<Vec<Topic>, BackendError>);
    /// Returns `true` when the cached row was patched.
    fn on_updated(&mut self, id: i64, draft: EntityDraft, result: Result<Option<Entity>, BackendError>) -> bool;
    /// Returns `true` when the row left the list.
    fn on_deleted(&mut self, id: i64, result: Result<(), BackendError>) -> bool;
}

/// List view with in-place editing and confirmed deletion for one record type
pub struct CollectionComponent<R: Resource> {
    manager: CollectionManager<R>,
    list_state: ListState,
    // Keys drive the list instead of the open edit buffer
    list_focus: bool,
    icons: IconService,
}

impl<R: Resource> CollectionComponent<R> {
    pub fn new(icons: &IconService) -> Self {
        Self {
            manager: CollectionManager::new(),
            list_state: ListState::default(),
            list_focus: false,
            icons: icons.clone(),
        }
    }

    pub fn manager(&self) -> &CollectionManager<R> {
        &self.manager
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Whether keys go to the list while an edit buffer is open.
    pub fn is_list_focused(&self) -> bool {
        self.list_focus && self.manager.edit_session().is_some()
    }

    fn selected_id(&self) -> Option<i64> {
        let index = self.list_state.selected()?;
        self.manager.items().get(index).map(Resource::id)
    }

    fn clamp_selection(&mut self) {
        let len = self.manager.items().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    fn next_item(&mut self) {
        let len = self.manager.items().len();
        if len == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1) % len);
        self.list_state.select(Some(next));
    }

    fn previous_item(&mut self) {
        let len = self.manager.items().len();
        if len == 0 {
            return;
        }
        let previous = self.list_state.selected().map_or(0, |i| (i + len - 1) % len);
        self.list_state.select(Some(previous));
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => match self.manager.confirm_delete() {
                Some(id) => Action::SubmitDelete { kind: R::KIND, id },
                None => Action::None,
            },
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.manager.decline_delete();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        // Locked while its save is in flight
        let Some((editor, topics)) = self.manager.edit_with_topics() else {
            return Action::None;
        };
        match handle_editor_key(editor, topics, key) {
            EditorKey::Cancel => {
                self.manager.cancel_edit();
                Action::None
            }
            EditorKey::Submit => match self.manager.submit_edit() {
                Ok((id, draft)) => Action::SubmitUpdate {
                    id,
                    draft: R::wrap_draft(draft),
                },
                Err(FormError::Busy) => Action::Notify {
                    kind: NotificationKind::Error,
                    message: ERROR_OPERATION_IN_PROGRESS.to_string(),
                },
                Err(e) => Action::Notify {
                    kind: NotificationKind::Error,
                    message: e.to_string(),
                },
            },
            EditorKey::Handled | EditorKey::Ignored => Action::None,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseWorkflow,
            KeyCode::Char('j') | KeyCode::Down => {
                self.next_item();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous_item();
                Action::None
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    if self.manager.begin_edit(id) {
                        self.list_focus = false;
                    } else {
                        log::debug!("Edit refused for {} {}", R::KIND.singular(), id);
                    }
                }
                Action::None
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    if !self.manager.request_delete(id) {
                        log::debug!("Delete refused for {} {}", R::KIND.singular(), id);
                    }
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn row(&self, item: &R, selected: bool) -> ListItem<'static> {
        let editing = self.manager.edit_session().is_some_and(|s| s.id == item.id());
        let marker = if selected { self.icons.selected() } else { " " };
        let mut headline = vec![
            Span::raw(format!("{} ", marker)),
            Span::styled(item.title().to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ];
        match self.manager.pending(item.id()) {
            Some(PendingState::Saving) => headline.push(Span::styled(
                format!("  {} saving", self.icons.pending()),
                Style::default().fg(Color::Yellow),
            )),
            Some(PendingState::Deleting) => headline.push(Span::styled(
                format!("  {} deleting", self.icons.pending()),
                Style::default().fg(Color::Red),
            )),
            None if editing => headline.push(Span::styled(
                format!("  {} editing", self.icons.editing()),
                Style::default().fg(Color::Cyan),
            )),
            None => {}
        }

        let mut lines = vec![Line::from(headline)];
        for (label, value) in item.detail_lines(self.manager.topics()) {
            lines.push(Line::from(vec![
                Span::styled(format!("    {}: ", label), Style::default().fg(Color::DarkGray)),
                Span::styled(value, Style::default().fg(Color::Gray)),
            ]));
        }
        ListItem::new(lines)
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        if self.manager.state() == ManagerState::Loading {
            f.render_widget(Paragraph::new(LOADING_TEXT).style(Style::default().fg(Color::Yellow)), area);
            return;
        }
        if self.manager.items().is_empty() {
            f.render_widget(Paragraph::new(EMPTY_COLLECTION_TEXT).style(Style::default().fg(Color::Gray)), area);
            return;
        }

        let selected = self.list_state.selected();
        let rows: Vec<ListItem> = self
            .manager
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| self.row(item, Some(index) == selected))
            .collect();
        f.render_stateful_widget(List::new(rows), area, &mut self.list_state);
    }
}

impl<R: Resource> Component for CollectionComponent<R> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.manager.confirming_delete().is_some() {
            return self.handle_confirm_key(key);
        }
        match self.manager.state() {
            ManagerState::Loading => match key.code {
                KeyCode::Esc => Action::CloseWorkflow,
                _ => Action::None,
            },
            ManagerState::EditingOne(_) if is_focus_toggle(key) => {
                self.list_focus = !self.list_focus;
                Action::None
            }
            ManagerState::EditingOne(_) if self.list_focus => self.handle_list_key(key),
            ManagerState::EditingOne(_) => self.handle_edit_key(key),
            ManagerState::Ready => self.handle_list_key(key),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect(90, 90, rect);
        f.render_widget(Clear, area);

        let title = format!(
            " {} {} ({}) ",
            self.icons.resource(R::KIND),
            capitalize(R::KIND.plural()),
            self.manager.items().len()
        );
        let block = create_dialog_block(&title, Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let editor_height = match self.manager.edit_session() {
            Some(_) => (R::Draft::fields().len() as u16) * 2 + 2,
            None => 0,
        };
        let chunks = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(editor_height),
            Constraint::Length(1),
        ])
        .split(inner);

        self.render_list(f, chunks[0]);

        if let Some(session) = self.manager.edit_session() {
            let edit_block = Block::default()
                .borders(Borders::TOP)
                .title(format!(" Editing #{} ", session.id))
                .style(Style::default().fg(if self.list_focus { Color::DarkGray } else { Color::Cyan }));
            let edit_area = edit_block.inner(chunks[1]);
            f.render_widget(edit_block, chunks[1]);
            render_editor(f, edit_area, &session.editor, self.manager.topics());
        }

        f.render_widget(create_instructions_paragraph(&self.key_hints()), chunks[2]);

        if let Some(id) = self.manager.confirming_delete() {
            let title = self.manager.item(id).map(|item| item.title().to_string()).unwrap_or_default();
            render_delete_confirmation_dialog(f, rect, &self.icons, R::KIND.singular(), &title);
        }
    }

    fn key_hints(&self) -> Vec<InstructionShortcut> {
        match self.manager.state() {
            ManagerState::EditingOne(_) if self.list_focus => vec![
                shortcuts::JK_MOVE,
                shortcuts::E_EDIT,
                shortcuts::D_DELETE,
                shortcuts::CTRL_L_EDITOR,
                shortcuts::ESC_CLOSE,
            ],
            ManagerState::EditingOne(_) => {
                let mut hints = vec![shortcuts::TAB_NEXT];
                if self.manager.needs_topics() {
                    hints.push(shortcuts::ARROWS_TOPIC);
                }
                hints.extend([shortcuts::ENTER_SAVE, shortcuts::CTRL_L_LIST, shortcuts::ESC_CANCEL]);
                hints
            }
            _ => vec![
                shortcuts::JK_MOVE,
                shortcuts::E_EDIT,
                shortcuts::D_DELETE,
                shortcuts::ESC_CLOSE,
            ],
        }
    }
}

impl<R: Resource> CollectionWorkflow for CollectionComponent<R> {
    fn needs_topics(&self) -> bool {
        self.manager.needs_topics()
    }

    fn on_loaded(&mut self, result: Result<Collection, BackendError>) {
        let result = result.map(|collection| R::unwrap_collection(collection).unwrap_or_default());
        self.manager.finish_load(result);
        self.clamp_selection();
    }

    fn on_topics_loaded(&mut self, result: Result<Vec<Topic>, BackendError>) {
        self.manager.finish_topics_load(result);
    }

    fn on_updated(&mut self, id: i64, draft: EntityDraft, result: Result<Option<Entity>, BackendError>) -> bool {
        let Some(draft) = R::unwrap_draft(draft) else {
            return false;
        };
        let result = result.map(|canonical| canonical.and_then(R::from_entity));
        self.manager.finish_save(id, &draft, result)
    }

    fn on_deleted(&mut self, id: i64, result: Result<(), BackendError>) -> bool {
        let removed = self.manager.finish_delete(id, result);
        self.clamp_selection();
        removed
    }
}

fn is_focus_toggle(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
