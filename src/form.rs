//! Draft editing and record creation forms.
//!
//! A [`DraftEditor`] holds one draft plus the focused field and cursor; it is
//! shared by the creation form ([`EntityForm`]) and the in-place edit buffer
//! of the collection manager. Validation only checks that required fields
//! are present.

use thiserror::Error;

use crate::entities::{Resource, TopicLookup};

/// How a field is entered and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line of free text.
    Text,
    /// Longer free text, rendered with more room.
    Multiline,
    /// Calendar date typed as `YYYY-MM-DD`. The format is a hint only.
    Date,
    /// Topic reference picked from the loaded topic collection.
    TopicSelect,
}

/// Static description of one draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
        }
    }
}

/// Field access for draft types, keyed by wire name.
///
/// Topic references are exchanged as their decimal id; `"0"` means no topic.
pub trait DraftFields: Default + Clone {
    fn fields() -> &'static [FieldSpec];
    fn value(&self, key: &str) -> String;
    fn set_value(&mut self, key: &str, value: String);

    /// Whether any field picks from the topic collection.
    fn needs_topics() -> bool {
        Self::fields().iter().any(|f| f.kind == FieldKind::TopicSelect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("a submission is already in progress")]
    Busy,
}

/// Check that every required field of `draft` is filled in.
pub fn validate<D: DraftFields>(draft: &D) -> Result<(), FormError> {
    for field in D::fields().iter().filter(|f| f.required) {
        let value = draft.value(field.key);
        let missing = match field.kind {
            FieldKind::TopicSelect => value.parse::<i64>().unwrap_or(0) == 0,
            _ => value.is_empty(),
        };
        if missing {
            return Err(FormError::MissingField(field.label));
        }
    }
    Ok(())
}

/// A draft under edit, with the focused field and a character cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftEditor<D: DraftFields> {
    draft: D,
    focus: usize,
    cursor: usize,
}

impl<D: DraftFields> Default for DraftEditor<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: DraftFields> DraftEditor<D> {
    pub fn new(draft: D) -> Self {
        let mut editor = Self {
            draft,
            focus: 0,
            cursor: 0,
        };
        editor.cursor_to_end();
        editor
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Replace the draft with empty values and focus the first field.
    pub fn reset(&mut self) {
        *self = Self::new(D::default());
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focused_field(&self) -> &'static FieldSpec {
        &D::fields()[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % D::fields().len();
        self.cursor_to_end();
    }

    pub fn focus_prev(&mut self) {
        let count = D::fields().len();
        self.focus = (self.focus + count - 1) % count;
        self.cursor_to_end();
    }

    fn focused_value(&self) -> String {
        self.draft.value(self.focused_field().key)
    }

    fn is_text_field(&self) -> bool {
        self.focused_field().kind != FieldKind::TopicSelect
    }

    fn byte_pos(value: &str, char_index: usize) -> usize {
        value.chars().take(char_index).map(char::len_utf8).sum()
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.is_text_field() {
            return;
        }
        let key = self.focused_field().key;
        let mut value = self.focused_value();
        let pos = Self::byte_pos(&value, self.cursor);
        value.insert(pos, c);
        self.draft.set_value(key, value);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if !self.is_text_field() || self.cursor == 0 {
            return;
        }
        let key = self.focused_field().key;
        let mut value = self.focused_value();
        let pos = Self::byte_pos(&value, self.cursor - 1);
        value.remove(pos);
        self.draft.set_value(key, value);
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if !self.is_text_field() {
            return;
        }
        let key = self.focused_field().key;
        let mut value = self.focused_value();
        if self.cursor < value.chars().count() {
            let pos = Self::byte_pos(&value, self.cursor);
            value.remove(pos);
            self.draft.set_value(key, value);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.focused_value().chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = if self.is_text_field() {
            self.focused_value().chars().count()
        } else {
            0
        };
    }

    /// Step the focused topic selector through the loaded topics.
    ///
    /// Does nothing when the focused field is not a topic selector or when
    /// no topics are loaded.
    pub fn cycle_topic(&mut self, topics: &TopicLookup, forward: bool) {
        let field = self.focused_field();
        if field.kind != FieldKind::TopicSelect {
            return;
        }
        let current = self.draft.value(field.key).parse::<i64>().unwrap_or(0);
        if let Some(next) = topics.step(current, forward) {
            self.draft.set_value(field.key, next.to_string());
        }
    }
}

/// Creation form for one resource type.
#[derive(Debug)]
pub struct EntityForm<R: Resource> {
    editor: DraftEditor<R::Draft>,
    topics: TopicLookup,
    submitting: bool,
}

impl<R: Resource> Default for EntityForm<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> EntityForm<R> {
    pub fn new() -> Self {
        Self {
            editor: DraftEditor::default(),
            topics: TopicLookup::new(),
            submitting: false,
        }
    }

    /// Whether this form has a topic selector to populate before use.
    pub fn needs_topics(&self) -> bool {
        R::Draft::needs_topics()
    }

    pub fn editor(&self) -> &DraftEditor<R::Draft> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut DraftEditor<R::Draft> {
        &mut self.editor
    }

    pub fn topics(&self) -> &TopicLookup {
        &self.topics
    }

    /// The editor together with the topics its selector cycles through.
    pub fn editor_and_topics_mut(&mut self) -> (&mut DraftEditor<R::Draft>, &TopicLookup) {
        (&mut self.editor, &self.topics)
    }

    pub fn topics_mut(&mut self) -> &mut TopicLookup {
        &mut self.topics
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate the draft and hand out a copy for the create call.
    pub fn submit(&mut self) -> Result<R::Draft, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }
        validate(self.editor.draft())?;
        self.submitting = true;
        Ok(self.editor.draft().clone())
    }

    /// Settle a submission. A successful create clears the draft; a failed
    /// one keeps it for another attempt.
    pub fn finish_create(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.editor.reset();
        }
    }
}
