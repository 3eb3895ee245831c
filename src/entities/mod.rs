//! Record types managed through the content API.
//!
//! Each record kind (topic, news item, module) comes with a draft type that
//! holds its editable fields. Drafts double as create and update payloads.
//! The [`Resource`] trait ties a record to its draft, its REST path and the
//! type-erased wrappers ([`Entity`], [`EntityDraft`], [`Collection`]) that
//! carry results through the UI action channel.

pub mod module;
pub mod news;
pub mod topic;

use std::fmt::Debug;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::{Clients, ResourceClient};
use crate::constants;
use crate::form::DraftFields;

pub use module::{Module, ModuleDraft};
pub use news::{NewsDraft, NewsItem};
pub use topic::{Topic, TopicDraft, TopicLookup};

/// The three kinds of records the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Topic,
    News,
    Module,
}

/// Operations that produce a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl ResourceKind {
    /// Collection path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Topic => "topics",
            ResourceKind::News => "news",
            ResourceKind::Module => "modules",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::Topic => "topic",
            ResourceKind::News => "news item",
            ResourceKind::Module => "module",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Topic => "topics",
            ResourceKind::News => "news",
            ResourceKind::Module => "modules",
        }
    }

    /// Message shown after a successful mutation. Loads succeed silently.
    pub fn success_message(self, operation: Operation) -> Option<&'static str> {
        let message = match (self, operation) {
            (ResourceKind::Topic, Operation::Create) => constants::SUCCESS_TOPIC_CREATED,
            (ResourceKind::Topic, Operation::Update) => constants::SUCCESS_TOPIC_UPDATED,
            (ResourceKind::Topic, Operation::Delete) => constants::SUCCESS_TOPIC_DELETED,
            (ResourceKind::News, Operation::Create) => constants::SUCCESS_NEWS_CREATED,
            (ResourceKind::News, Operation::Update) => constants::SUCCESS_NEWS_UPDATED,
            (ResourceKind::News, Operation::Delete) => constants::SUCCESS_NEWS_DELETED,
            (ResourceKind::Module, Operation::Create) => constants::SUCCESS_MODULE_CREATED,
            (ResourceKind::Module, Operation::Update) => constants::SUCCESS_MODULE_UPDATED,
            (ResourceKind::Module, Operation::Delete) => constants::SUCCESS_MODULE_DELETED,
            (_, Operation::Load) => return None,
        };
        Some(message)
    }

    /// Generic message shown when an operation fails, whatever the cause.
    pub fn error_message(self, operation: Operation) -> &'static str {
        match (self, operation) {
            (ResourceKind::Topic, Operation::Load) => constants::ERROR_TOPICS_LOAD_FAILED,
            (ResourceKind::Topic, Operation::Create) => constants::ERROR_TOPIC_CREATE_FAILED,
            (ResourceKind::Topic, Operation::Update) => constants::ERROR_TOPIC_UPDATE_FAILED,
            (ResourceKind::Topic, Operation::Delete) => constants::ERROR_TOPIC_DELETE_FAILED,
            (ResourceKind::News, Operation::Load) => constants::ERROR_NEWS_LOAD_FAILED,
            (ResourceKind::News, Operation::Create) => constants::ERROR_NEWS_CREATE_FAILED,
            (ResourceKind::News, Operation::Update) => constants::ERROR_NEWS_UPDATE_FAILED,
            (ResourceKind::News, Operation::Delete) => constants::ERROR_NEWS_DELETE_FAILED,
            (ResourceKind::Module, Operation::Load) => constants::ERROR_MODULES_LOAD_FAILED,
            (ResourceKind::Module, Operation::Create) => constants::ERROR_MODULE_CREATE_FAILED,
            (ResourceKind::Module, Operation::Update) => constants::ERROR_MODULE_UPDATE_FAILED,
            (ResourceKind::Module, Operation::Delete) => constants::ERROR_MODULE_DELETE_FAILED,
        }
    }
}

/// A record type served by the content API.
pub trait Resource: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Editable fields, used both to create and to update a record.
    type Draft: DraftFields + Debug + PartialEq + Serialize + Send + Sync + 'static;

    const KIND: ResourceKind;

    fn id(&self) -> i64;

    /// Headline shown in list rows.
    fn title(&self) -> &str;

    /// Secondary lines shown under the headline, as `(label, value)` pairs.
    fn detail_lines(&self, topics: &TopicLookup) -> Vec<(&'static str, String)>;

    /// Seed an edit buffer from the cached values.
    fn to_draft(&self) -> Self::Draft;

    /// Overwrite the editable fields with submitted values.
    fn apply_draft(&mut self, draft: &Self::Draft);

    fn client(clients: &Clients) -> Arc<dyn ResourceClient<Self>>;

    fn into_entity(self) -> Entity;
    fn from_entity(entity: Entity) -> Option<Self>;
    fn wrap_draft(draft: Self::Draft) -> EntityDraft;
    fn unwrap_draft(draft: EntityDraft) -> Option<Self::Draft>;
    fn wrap_collection(records: Vec<Self>) -> Collection;
    fn unwrap_collection(collection: Collection) -> Option<Vec<Self>>;
}

/// A single record of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Topic(Topic),
    News(NewsItem),
    Module(Module),
}

/// A draft of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityDraft {
    Topic(TopicDraft),
    News(NewsDraft),
    Module(ModuleDraft),
}

impl EntityDraft {
    pub fn kind(&self) -> ResourceKind {
        match self {
            EntityDraft::Topic(_) => ResourceKind::Topic,
            EntityDraft::News(_) => ResourceKind::News,
            EntityDraft::Module(_) => ResourceKind::Module,
        }
    }
}

/// A fetched collection of any kind, in server order.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Topics(Vec<Topic>),
    News(Vec<NewsItem>),
    Modules(Vec<Module>),
}

impl Collection {
    pub fn len(&self) -> usize {
        match self {
            Collection::Topics(items) => items.len(),
            Collection::News(items) => items.len(),
            Collection::Modules(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
