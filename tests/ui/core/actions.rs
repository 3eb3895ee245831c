use campusdesk::backend::BackendError;
use campusdesk::constants::HOME_MENU_ENTRIES;
use campusdesk::entities::ResourceKind;
use campusdesk::ui::core::actions::{Action, WorkflowKind};

#[test]
fn test_workflow_kinds_follow_menu_order() {
    for (kind, (title, _)) in WorkflowKind::ALL.iter().zip(HOME_MENU_ENTRIES.iter()) {
        assert_eq!(kind.title(), *title);
    }
    assert_eq!(WorkflowKind::CreateModule.title(), "Create module");
}

#[test]
fn test_workflow_kind_resources() {
    assert_eq!(WorkflowKind::CreateNews.resource(), ResourceKind::News);
    assert_eq!(WorkflowKind::ManageModules.resource(), ResourceKind::Module);
    assert!(WorkflowKind::CreateTopic.is_create());
    assert!(!WorkflowKind::ManageTopics.is_create());
}

#[test]
fn test_action_session() {
    let loaded = Action::Deleted {
        session: 4,
        kind: ResourceKind::Topic,
        id: 1,
        result: Err(BackendError::NotFound("topics/1".to_string())),
    };
    assert_eq!(loaded.session(), Some(4));
    assert_eq!(Action::OpenWorkflow(WorkflowKind::CreateTopic).session(), None);
    assert_eq!(Action::None.session(), None);
}
