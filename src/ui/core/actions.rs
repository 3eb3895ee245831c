use crate::backend::BackendError;
use crate::entities::{Collection, Entity, EntityDraft, ResourceKind, Topic};
use crate::notification::NotificationKind;

/// The six modal workflows reachable from the home menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    CreateTopic,
    CreateNews,
    CreateModule,
    ManageTopics,
    ManageNews,
    ManageModules,
}

impl WorkflowKind {
    /// Home menu order
    pub const ALL: [WorkflowKind; 6] = [
        WorkflowKind::CreateTopic,
        WorkflowKind::CreateNews,
        WorkflowKind::CreateModule,
        WorkflowKind::ManageTopics,
        WorkflowKind::ManageNews,
        WorkflowKind::ManageModules,
    ];

    pub fn resource(self) -> ResourceKind {
        match self {
            WorkflowKind::CreateTopic | WorkflowKind::ManageTopics => ResourceKind::Topic,
            WorkflowKind::CreateNews | WorkflowKind::ManageNews => ResourceKind::News,
            WorkflowKind::CreateModule | WorkflowKind::ManageModules => ResourceKind::Module,
        }
    }

    pub fn is_create(self) -> bool {
        matches!(
            self,
            WorkflowKind::CreateTopic | WorkflowKind::CreateNews | WorkflowKind::CreateModule
        )
    }

    pub fn title(self) -> &'static str {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        crate::constants::HOME_MENU_ENTRIES[index].0
    }
}

/// Numbered lifetime of one opened workflow
pub type SessionId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    OpenWorkflow(WorkflowKind),
    CloseWorkflow,
    ShowLogs(bool),

    // Requests raised by workflows
    SubmitCreate(EntityDraft),
    SubmitUpdate {
        id: i64,
        draft: EntityDraft,
    },
    SubmitDelete {
        kind: ResourceKind,
        id: i64,
    },

    // Notifications
    Notify {
        kind: NotificationKind,
        message: String,
    },
    DismissNotification,

    // Background results
    CollectionLoaded {
        session: SessionId,
        kind: ResourceKind,
        result: Result<Collection, BackendError>,
    },
    TopicsLoaded {
        session: SessionId,
        result: Result<Vec<Topic>, BackendError>,
    },
    Created {
        session: SessionId,
        kind: ResourceKind,
        result: Result<Option<Entity>, BackendError>,
    },
    Updated {
        session: SessionId,
        id: i64,
        draft: EntityDraft,
        result: Result<Option<Entity>, BackendError>,
    },
    Deleted {
        session: SessionId,
        kind: ResourceKind,
        id: i64,
        result: Result<(), BackendError>,
    },

    // App control
    Quit,
    None,
}

impl Action {
    /// Session a background result belongs to, if any
    pub fn session(&self) -> Option<SessionId> {
        match self {
            Action::CollectionLoaded { session, .. }
            | Action::TopicsLoaded { session, .. }
            | Action::Created { session, .. }
            | Action::Updated { session, .. }
            | Action::Deleted { session, .. } => Some(*session),
            _ => None,
        }
    }
}
