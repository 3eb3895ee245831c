//! List state for one resource type: cached collection, single edit session
//! and per-item pending operations.
//!
//! The manager performs no I/O. Callers issue the network request for the
//! values it hands out (`submit_edit`, `confirm_delete`) and feed the outcome
//! back through the matching `finish_*` method.

use std::collections::HashMap;

use crate::backend::BackendError;
use crate::entities::{Resource, Topic, TopicLookup};
use crate::form::{validate, DraftEditor, DraftFields, FormError};

/// Coarse state of the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    Loading,
    Ready,
    EditingOne(i64),
}

/// Operation in flight for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingState {
    Saving,
    Deleting,
}

/// The single open edit buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<R: Resource> {
    pub id: i64,
    pub editor: DraftEditor<R::Draft>,
}

#[derive(Debug)]
pub struct CollectionManager<R: Resource> {
    loaded: bool,
    items: Vec<R>,
    editing: Option<EditSession<R>>,
    pending: HashMap<i64, PendingState>,
    confirming_delete: Option<i64>,
    topics: TopicLookup,
}

impl<R: Resource> Default for CollectionManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> CollectionManager<R> {
    pub fn new() -> Self {
        Self {
            loaded: false,
            items: Vec::new(),
            editing: None,
            pending: HashMap::new(),
            confirming_delete: None,
            topics: TopicLookup::new(),
        }
    }

    pub fn state(&self) -> ManagerState {
        if !self.loaded {
            ManagerState::Loading
        } else if let Some(session) = &self.editing {
            ManagerState::EditingOne(session.id)
        } else {
            ManagerState::Ready
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn item(&self, id: i64) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Settle the initial fetch. A failed fetch leaves an empty list.
    pub fn finish_load(&mut self, result: Result<Vec<R>, BackendError>) {
        self.items = result.unwrap_or_default();
        self.loaded = true;
    }

    /// Whether list rows reference topics by id.
    pub fn needs_topics(&self) -> bool {
        R::Draft::needs_topics()
    }

    pub fn topics(&self) -> &TopicLookup {
        &self.topics
    }

    pub fn finish_topics_load(&mut self, result: Result<Vec<Topic>, BackendError>) {
        match result {
            Ok(topics) => self.topics.load(topics),
            Err(_) => self.topics.mark_failed(),
        }
    }

    /// Open the edit buffer for `id`, seeded from the cached values.
    ///
    /// Any other open buffer is discarded. Returns `false` when the item is
    /// unknown or has an operation in flight.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        if self.pending.contains_key(&id) {
            return false;
        }
        let Some(item) = self.item(id) else {
            return false;
        };
        let editor = DraftEditor::new(item.to_draft());
        self.editing = Some(EditSession { id, editor });
        true
    }

    pub fn edit_session(&self) -> Option<&EditSession<R>> {
        self.editing.as_ref()
    }

    /// The open buffer, unless its item is being saved.
    pub fn edit_buffer_mut(&mut self) -> Option<&mut DraftEditor<R::Draft>> {
        let pending = &self.pending;
        self.editing
            .as_mut()
            .filter(|session| !pending.contains_key(&session.id))
            .map(|session| &mut session.editor)
    }

    /// The open buffer together with the topics its selector cycles through.
    ///
    /// Locked like [`Self::edit_buffer_mut`] while the save is in flight.
    pub fn edit_with_topics(&mut self) -> Option<(&mut DraftEditor<R::Draft>, &TopicLookup)> {
        let topics = &self.topics;
        let pending = &self.pending;
        self.editing
            .as_mut()
            .filter(|session| !pending.contains_key(&session.id))
            .map(|session| (&mut session.editor, topics))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validate the open buffer and mark its item as saving.
    pub fn submit_edit(&mut self) -> Result<(i64, R::Draft), FormError> {
        let Some(session) = &self.editing else {
            return Err(FormError::Busy);
        };
        if self.pending.contains_key(&session.id) {
            return Err(FormError::Busy);
        }
        validate(session.editor.draft())?;
        let id = session.id;
        let draft = session.editor.draft().clone();
        self.pending.insert(id, PendingState::Saving);
        Ok((id, draft))
    }

    /// Settle an update. Returns `true` when the cached item was patched.
    ///
    /// On failure the edit buffer stays open with its contents.
    pub fn finish_save(
        &mut self,
        id: i64,
        draft: &R::Draft,
        result: Result<Option<R>, BackendError>,
    ) -> bool {
        if self.pending.get(&id) == Some(&PendingState::Saving) {
            self.pending.remove(&id);
        }
        let canonical = match result {
            Ok(canonical) => canonical,
            Err(_) => return false,
        };

        let mut patched = false;
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
            match canonical {
                Some(record) if record.id() == id => *item = record,
                _ => item.apply_draft(draft),
            }
            patched = true;
        }
        if self.editing.as_ref().is_some_and(|session| session.id == id) {
            self.editing = None;
        }
        patched
    }

    /// Ask for confirmation before deleting `id`.
    ///
    /// Refused while that item is being edited or has an operation in flight.
    pub fn request_delete(&mut self, id: i64) -> bool {
        if self.pending.contains_key(&id) || self.item(id).is_none() {
            return false;
        }
        if self.editing.as_ref().is_some_and(|session| session.id == id) {
            return false;
        }
        self.confirming_delete = Some(id);
        true
    }

    pub fn confirming_delete(&self) -> Option<i64> {
        self.confirming_delete
    }

    pub fn decline_delete(&mut self) {
        self.confirming_delete = None;
    }

    /// Close the prompt and mark the item as deleting.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        let id = self.confirming_delete.take()?;
        self.pending.insert(id, PendingState::Deleting);
        Some(id)
    }

    /// Settle a delete. Returns `true` when the item left the list.
    pub fn finish_delete(&mut self, id: i64, result: Result<(), BackendError>) -> bool {
        if self.pending.get(&id) == Some(&PendingState::Deleting) {
            self.pending.remove(&id);
        }
        if result.is_err() {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.editing.as_ref().is_some_and(|session| session.id == id) {
            self.editing = None;
        }
        self.items.len() != before
    }

    pub fn pending(&self, id: i64) -> Option<PendingState> {
        self.pending.get(&id).copied()
    }

    pub fn is_pending(&self, id: i64) -> bool {
        self.pending.contains_key(&id)
    }
}
