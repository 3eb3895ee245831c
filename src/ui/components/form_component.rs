use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::backend::BackendError;
use crate::constants::{ERROR_OPERATION_IN_PROGRESS, LOADING_TEXT};
use crate::entities::{Resource, Topic};
use crate::form::{DraftFields, EntityForm, FormError};
use crate::icons::IconService;
use crate::notification::NotificationKind;
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_instructions_paragraph, shortcuts, InstructionShortcut,
};
use crate::ui::components::field_editor::{handle_editor_key, render_editor, EditorKey};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

/// Creation workflow seen from the shell, independent of the record type
pub trait FormWorkflow: Component {
    fn needs_topics(&self) -> bool;
    fn on_topics_loaded(&mut self, result: Result<Vec<Topic>, BackendError>);
    fn on_created(&mut self, succeeded: bool);
    fn is_submitting(&self) -> bool;
}

/// Modal creation form for one record type
pub struct FormComponent<R: Resource> {
    form: EntityForm<R>,
    title: String,
}

impl<R: Resource> FormComponent<R> {
    pub fn new(icons: &IconService) -> Self {
        Self {
            form: EntityForm::new(),
            title: format!(" {} New {} ", icons.resource(R::KIND), R::KIND.singular()),
        }
    }

    pub fn form(&self) -> &EntityForm<R> {
        &self.form
    }

    fn submit(&mut self) -> Action {
        match self.form.submit() {
            Ok(draft) => Action::SubmitCreate(R::wrap_draft(draft)),
            Err(FormError::Busy) => Action::Notify {
                kind: NotificationKind::Error,
                message: ERROR_OPERATION_IN_PROGRESS.to_string(),
            },
            Err(e) => Action::Notify {
                kind: NotificationKind::Error,
                message: e.to_string(),
            },
        }
    }
}

impl<R: Resource> Component for FormComponent<R> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let (editor, topics) = self.form.editor_and_topics_mut();
        match handle_editor_key(editor, topics, key) {
            EditorKey::Cancel => Action::CloseWorkflow,
            EditorKey::Submit => self.submit(),
            EditorKey::Handled | EditorKey::Ignored => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let field_count = R::Draft::fields().len() as u16;
        let height = (field_count * 2 + 6).min(rect.height);
        let area = LayoutManager::centered_rect_lines(70, height, rect);
        f.render_widget(Clear, area);

        let block = create_dialog_block(&self.title, Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)]).split(inner);
        render_editor(f, chunks[0], self.form.editor(), self.form.topics());

        if self.form.is_submitting() {
            let status = Paragraph::new(LOADING_TEXT).style(Style::default().fg(Color::Yellow));
            f.render_widget(status, chunks[1]);
        }
        f.render_widget(create_instructions_paragraph(&self.key_hints()), chunks[2]);
    }

    fn key_hints(&self) -> Vec<InstructionShortcut> {
        let mut hints = vec![shortcuts::TAB_NEXT];
        if self.form.needs_topics() {
            hints.push(shortcuts::ARROWS_TOPIC);
        }
        hints.push(shortcuts::ENTER_SUBMIT);
        hints.push(shortcuts::ESC_CANCEL);
        hints
    }
}

impl<R: Resource> FormWorkflow for FormComponent<R> {
    fn needs_topics(&self) -> bool {
        self.form.needs_topics()
    }

    fn on_topics_loaded(&mut self, result: Result<Vec<Topic>, BackendError>) {
        match result {
            Ok(topics) => self.form.topics_mut().load(topics),
            Err(_) => self.form.topics_mut().mark_failed(),
        }
    }

    fn on_created(&mut self, succeeded: bool) {
        self.form.finish_create(succeeded);
    }

    fn is_submitting(&self) -> bool {
        self.form.is_submitting()
    }
}
