use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Collection, Entity, EntityDraft, Resource, ResourceKind, TopicLookup};
use crate::backend::{Clients, ResourceClient};
use crate::form::{DraftFields, FieldKind, FieldSpec};

/// An educational unit with a date-bounded availability window, linked to
/// exactly one topic.
///
/// Dates travel as `YYYY-MM-DD` strings and are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    #[serde(alias = "idmodule")]
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date_create: String,
    pub date_delete: String,
    pub image_path: String,
    pub topic_idtopic: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDraft {
    pub title: String,
    pub content: String,
    pub date_create: String,
    pub date_delete: String,
    pub image_path: String,
    /// `0` until a topic is picked.
    pub topic_idtopic: i64,
}

const MODULE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", "Title", FieldKind::Text),
    FieldSpec::required("content", "Content", FieldKind::Multiline),
    FieldSpec::required("date_create", "Creation date", FieldKind::Date),
    FieldSpec::required("date_delete", "Deletion date", FieldKind::Date),
    FieldSpec::required("image_path", "Image path", FieldKind::Text),
    FieldSpec::required("topic_idtopic", "Topic", FieldKind::TopicSelect),
];

impl DraftFields for ModuleDraft {
    fn fields() -> &'static [FieldSpec] {
        MODULE_FIELDS
    }

    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "content" => self.content.clone(),
            "date_create" => self.date_create.clone(),
            "date_delete" => self.date_delete.clone(),
            "image_path" => self.image_path.clone(),
            "topic_idtopic" => self.topic_idtopic.to_string(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "content" => self.content = value,
            "date_create" => self.date_create = value,
            "date_delete" => self.date_delete = value,
            "image_path" => self.image_path = value,
            "topic_idtopic" => self.topic_idtopic = value.parse().unwrap_or(0),
            _ => {}
        }
    }
}

impl Resource for Module {
    type Draft = ModuleDraft;

    const KIND: ResourceKind = ResourceKind::Module;

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn detail_lines(&self, topics: &TopicLookup) -> Vec<(&'static str, String)> {
        vec![
            ("Content", self.content.clone()),
            ("Created", self.date_create.clone()),
            ("Removed", self.date_delete.clone()),
            ("Image", self.image_path.clone()),
            ("Topic", topics.label_for(self.topic_idtopic)),
        ]
    }

    fn to_draft(&self) -> ModuleDraft {
        ModuleDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            date_create: self.date_create.clone(),
            date_delete: self.date_delete.clone(),
            image_path: self.image_path.clone(),
            topic_idtopic: self.topic_idtopic,
        }
    }

    fn apply_draft(&mut self, draft: &ModuleDraft) {
        self.title = draft.title.clone();
        self.content = draft.content.clone();
        self.date_create = draft.date_create.clone();
        self.date_delete = draft.date_delete.clone();
        self.image_path = draft.image_path.clone();
        self.topic_idtopic = draft.topic_idtopic;
    }

    fn client(clients: &Clients) -> Arc<dyn ResourceClient<Self>> {
        clients.modules.clone()
    }

    fn into_entity(self) -> Entity {
        Entity::Module(self)
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::Module(module) => Some(module),
            _ => None,
        }
    }

    fn wrap_draft(draft: ModuleDraft) -> EntityDraft {
        EntityDraft::Module(draft)
    }

    fn unwrap_draft(draft: EntityDraft) -> Option<ModuleDraft> {
        match draft {
            EntityDraft::Module(draft) => Some(draft),
            _ => None,
        }
    }

    fn wrap_collection(records: Vec<Self>) -> Collection {
        Collection::Modules(records)
    }

    fn unwrap_collection(collection: Collection) -> Option<Vec<Self>> {
        match collection {
            Collection::Modules(records) => Some(records),
            _ => None,
        }
    }
}
