use campusdesk::backend::BackendError;
use campusdesk::entities::{Collection, EntityDraft, Module, ResourceKind, Topic, TopicDraft};
use campusdesk::icons::IconService;
use campusdesk::manager::{ManagerState, PendingState};
use campusdesk::ui::components::{CollectionComponent, CollectionWorkflow};
use campusdesk::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use crate::common::{module, topic};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn loaded_topics() -> CollectionComponent<Topic> {
    let mut list = CollectionComponent::new(&IconService::default());
    list.on_loaded(Ok(Collection::Topics(vec![topic(1, "Algorithms"), topic(2, "Databases")])));
    list
}

fn screen(component: &mut impl Component) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| component.render(f, f.area())).unwrap();
    terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn test_loading_only_accepts_escape() {
    let mut list: CollectionComponent<Topic> = CollectionComponent::new(&IconService::default());
    assert_eq!(list.manager().state(), ManagerState::Loading);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('e'))), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Esc)), Action::CloseWorkflow);
    assert!(screen(&mut list).contains("Loading..."));
}

#[test]
fn test_navigation_and_edit() {
    let mut list = loaded_topics();
    assert_eq!(list.selected_index(), Some(0));

    list.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(list.selected_index(), Some(1));
    list.handle_key_events(key(KeyCode::Char('e')));
    assert_eq!(list.manager().state(), ManagerState::EditingOne(2));

    list.handle_key_events(key(KeyCode::Char('!')));
    let action = list.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::SubmitUpdate {
            id: 2,
            draft: EntityDraft::Topic(TopicDraft {
                name: "Databases!".to_string(),
                description: "About Databases".to_string(),
            }),
        }
    );
    assert_eq!(list.manager().pending(2), Some(PendingState::Saving));
    assert!(screen(&mut list).contains("saving"));
}

#[test]
fn test_escape_cancels_edit_then_closes() {
    let mut list = loaded_topics();
    list.handle_key_events(key(KeyCode::Enter));
    assert_eq!(list.manager().state(), ManagerState::EditingOne(1));

    assert_eq!(list.handle_key_events(key(KeyCode::Esc)), Action::None);
    assert_eq!(list.manager().state(), ManagerState::Ready);
    assert_eq!(list.handle_key_events(key(KeyCode::Esc)), Action::CloseWorkflow);
}

#[test]
fn test_delete_confirmation() {
    let mut list = loaded_topics();
    list.handle_key_events(key(KeyCode::Char('d')));
    assert_eq!(list.manager().confirming_delete(), Some(1));
    assert!(screen(&mut list).contains("Algorithms"));

    // Other keys are swallowed by the prompt
    assert_eq!(list.handle_key_events(key(KeyCode::Char('j'))), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('n'))), Action::None);
    assert_eq!(list.manager().confirming_delete(), None);

    list.handle_key_events(key(KeyCode::Char('d')));
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('y'))),
        Action::SubmitDelete {
            kind: ResourceKind::Topic,
            id: 1,
        }
    );

    assert!(list.on_deleted(1, Ok(())));
    assert_eq!(list.manager().items().len(), 1);
    assert_eq!(list.selected_index(), Some(0));
}

#[test]
fn test_failed_update_keeps_editing() {
    let mut list = loaded_topics();
    list.handle_key_events(key(KeyCode::Char('e')));
    list.handle_key_events(key(KeyCode::Char('!')));
    let Action::SubmitUpdate { id, draft } = list.handle_key_events(key(KeyCode::Enter)) else {
        panic!("expected an update");
    };

    let patched = list.on_updated(id, draft, Err(BackendError::Network("timeout".to_string())));
    assert!(!patched);
    assert_eq!(list.manager().state(), ManagerState::EditingOne(1));
    assert_eq!(list.manager().item(1).unwrap().name, "Algorithms");
}

#[test]
fn test_empty_collection() {
    let mut list: CollectionComponent<Topic> = CollectionComponent::new(&IconService::default());
    list.on_loaded(Ok(Collection::Topics(Vec::new())));
    assert_eq!(list.selected_index(), None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None);
    assert!(screen(&mut list).contains("Nothing here yet."));
}

#[test]
fn test_module_rows_label_topics() {
    let mut list: CollectionComponent<Module> = CollectionComponent::new(&IconService::default());
    assert!(list.needs_topics());
    list.on_loaded(Ok(Collection::Modules(vec![module(1, "Week 1", 3)])));
    list.on_topics_loaded(Ok(vec![topic(3, "Algorithms")]));

    let text = screen(&mut list);
    assert!(text.contains("Week 1"));
    assert!(text.contains("Topic: Algorithms"));
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_list_focus_while_editing() {
    let mut list = loaded_topics();
    list.handle_key_events(key(KeyCode::Char('e')));
    list.handle_key_events(key(KeyCode::Char('!')));
    assert!(!list.is_list_focused());

    list.handle_key_events(ctrl('l'));
    assert!(list.is_list_focused());
    assert!(screen(&mut list).contains("Back to edit"));

    // Navigation no longer reaches the buffer
    list.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(list.selected_index(), Some(1));
    assert_eq!(list.manager().edit_session().unwrap().editor.draft().name, "Algorithms!");

    list.handle_key_events(ctrl('l'));
    assert!(!list.is_list_focused());
    list.handle_key_events(key(KeyCode::Char('?')));
    assert_eq!(list.manager().edit_session().unwrap().editor.draft().name, "Algorithms!?");
}

#[test]
fn test_edit_other_item_discards_buffer() {
    let mut list = loaded_topics();
    list.handle_key_events(key(KeyCode::Char('e')));
    list.handle_key_events(key(KeyCode::Char('!')));
    list.handle_key_events(ctrl('l'));
    list.handle_key_events(key(KeyCode::Char('j')));
    list.handle_key_events(key(KeyCode::Char('e')));

    assert_eq!(list.manager().state(), ManagerState::EditingOne(2));
    assert!(!list.is_list_focused());
    assert_eq!(list.manager().edit_session().unwrap().editor.draft().name, "Databases");
    assert_eq!(list.manager().item(1).unwrap().name, "Algorithms");
}

#[test]
fn test_typing_ignored_while_saving() {
    let mut list = loaded_topics();
    list.handle_key_events(key(KeyCode::Char('e')));
    list.handle_key_events(key(KeyCode::Char('!')));
    let Action::SubmitUpdate { id, draft } = list.handle_key_events(key(KeyCode::Enter)) else {
        panic!("expected an update");
    };

    assert_eq!(list.handle_key_events(key(KeyCode::Char('x'))), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(list.manager().edit_session().unwrap().editor.draft().name, "Algorithms!");

    assert!(list.on_updated(id, draft, Ok(None)));
    assert_eq!(list.manager().state(), ManagerState::Ready);
    assert_eq!(list.manager().item(1).unwrap().name, "Algorithms!");
}
