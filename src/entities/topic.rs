use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Collection, Entity, EntityDraft, Resource, ResourceKind};
use crate::backend::{Clients, ResourceClient};
use crate::form::{DraftFields, FieldKind, FieldSpec};

/// A named category grouping modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(alias = "idtopic")]
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Editable topic fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDraft {
    pub name: String,
    pub description: String,
}

const TOPIC_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("description", "Description", FieldKind::Multiline),
];

impl DraftFields for TopicDraft {
    fn fields() -> &'static [FieldSpec] {
        TOPIC_FIELDS
    }

    fn value(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name = value,
            "description" => self.description = value,
            _ => {}
        }
    }
}

impl Resource for Topic {
    type Draft = TopicDraft;

    const KIND: ResourceKind = ResourceKind::Topic;

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn detail_lines(&self, _topics: &TopicLookup) -> Vec<(&'static str, String)> {
        vec![("Description", self.description.clone())]
    }

    fn to_draft(&self) -> TopicDraft {
        TopicDraft {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn apply_draft(&mut self, draft: &TopicDraft) {
        self.name = draft.name.clone();
        self.description = draft.description.clone();
    }

    fn client(clients: &Clients) -> Arc<dyn ResourceClient<Self>> {
        clients.topics.clone()
    }

    fn into_entity(self) -> Entity {
        Entity::Topic(self)
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::Topic(topic) => Some(topic),
            _ => None,
        }
    }

    fn wrap_draft(draft: TopicDraft) -> EntityDraft {
        EntityDraft::Topic(draft)
    }

    fn unwrap_draft(draft: EntityDraft) -> Option<TopicDraft> {
        match draft {
            EntityDraft::Topic(draft) => Some(draft),
            _ => None,
        }
    }

    fn wrap_collection(records: Vec<Self>) -> Collection {
        Collection::Topics(records)
    }

    fn unwrap_collection(collection: Collection) -> Option<Vec<Self>> {
        match collection {
            Collection::Topics(records) => Some(records),
            _ => None,
        }
    }
}

/// Read-only topic cache used to label modules and fill topic selectors.
///
/// Loaded once when a workflow opens and never refreshed afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicLookup {
    topics: Vec<Topic>,
    loaded: bool,
}

impl TopicLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the fetched topics, in server order.
    pub fn load(&mut self, topics: Vec<Topic>) {
        self.topics = topics;
        self.loaded = true;
    }

    /// Settle a failed fetch: the lookup becomes usable but empty.
    pub fn mark_failed(&mut self) {
        self.topics.clear();
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn name_for(&self, id: i64) -> Option<&str> {
        self.topics.iter().find(|t| t.id == id).map(|t| t.name.as_str())
    }

    /// Topic name, or a placeholder naming the id when the topic is unknown.
    pub fn label_for(&self, id: i64) -> String {
        match self.name_for(id) {
            Some(name) => name.to_string(),
            None => format!("Topic {}", id),
        }
    }

    /// The topic id after (or before) `current` in server order.
    ///
    /// An unknown `current` (including `0`, no selection) steps to the first
    /// topic going forward and the last one going backward.
    pub fn step(&self, current: i64, forward: bool) -> Option<i64> {
        if self.topics.is_empty() {
            return None;
        }
        let count = self.topics.len();
        let next_index = match self.topics.iter().position(|t| t.id == current) {
            Some(index) if forward => (index + 1) % count,
            Some(index) => (index + count - 1) % count,
            None if forward => 0,
            None => count - 1,
        };
        Some(self.topics[next_index].id)
    }
}
