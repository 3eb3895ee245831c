use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Collection, Entity, EntityDraft, Resource, ResourceKind, TopicLookup};
use crate::backend::{Clients, ResourceClient};
use crate::form::{DraftFields, FieldKind, FieldSpec};

/// A standalone announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(alias = "idnews")]
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Free-form path or URL of the illustration.
    pub image_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    pub image_path: String,
}

const NEWS_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", "Title", FieldKind::Text),
    FieldSpec::required("content", "Content", FieldKind::Multiline),
    FieldSpec::required("image_path", "Image path", FieldKind::Text),
];

impl DraftFields for NewsDraft {
    fn fields() -> &'static [FieldSpec] {
        NEWS_FIELDS
    }

    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "content" => self.content.clone(),
            "image_path" => self.image_path.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "content" => self.content = value,
            "image_path" => self.image_path = value,
            _ => {}
        }
    }
}

impl Resource for NewsItem {
    type Draft = NewsDraft;

    const KIND: ResourceKind = ResourceKind::News;

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn detail_lines(&self, _topics: &TopicLookup) -> Vec<(&'static str, String)> {
        vec![
            ("Content", self.content.clone()),
            ("Image", self.image_path.clone()),
        ]
    }

    fn to_draft(&self) -> NewsDraft {
        NewsDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            image_path: self.image_path.clone(),
        }
    }

    fn apply_draft(&mut self, draft: &NewsDraft) {
        self.title = draft.title.clone();
        self.content = draft.content.clone();
        self.image_path = draft.image_path.clone();
    }

    fn client(clients: &Clients) -> Arc<dyn ResourceClient<Self>> {
        clients.news.clone()
    }

    fn into_entity(self) -> Entity {
        Entity::News(self)
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::News(item) => Some(item),
            _ => None,
        }
    }

    fn wrap_draft(draft: NewsDraft) -> EntityDraft {
        EntityDraft::News(draft)
    }

    fn unwrap_draft(draft: EntityDraft) -> Option<NewsDraft> {
        match draft {
            EntityDraft::News(draft) => Some(draft),
            _ => None,
        }
    }

    fn wrap_collection(records: Vec<Self>) -> Collection {
        Collection::News(records)
    }

    fn unwrap_collection(collection: Collection) -> Option<Vec<Self>> {
        match collection {
            Collection::News(records) => Some(records),
            _ => None,
        }
    }
}
