use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use campusdesk::config::Config;
use campusdesk::constants::{
    ERROR_TOPICS_LOAD_FAILED, ERROR_TOPIC_UPDATE_FAILED, SUCCESS_MODULE_CREATED, SUCCESS_TOPIC_CREATED,
    SUCCESS_TOPIC_DELETED, SUCCESS_TOPIC_UPDATED,
};
use campusdesk::logger::Logger;
use campusdesk::manager::ManagerState;
use campusdesk::notification::NotificationKind;
use campusdesk::ui::core::{Component, WorkflowKind};
use campusdesk::ui::{AppComponent, Workflow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use crate::common::{module, news_item, topic, Fixture};

fn fixture() -> Fixture {
    Fixture::new(
        vec![topic(1, "Algorithms"), topic(2, "Databases")],
        vec![news_item(1, "Open day")],
        vec![module(1, "Week 1", 1)],
    )
}

fn app_with(fixture: &Fixture) -> AppComponent {
    AppComponent::new(fixture.clients(), &Config::default(), Logger::new())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_key(key(code));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Apply the next `count` background results
async fn settle(app: &mut AppComponent, count: usize) {
    for _ in 0..count {
        let action = tokio::time::timeout(Duration::from_secs(5), app.next_background_action())
            .await
            .expect("background result")
            .expect("channel open");
        app.dispatch(action);
    }
}

fn notification(app: &AppComponent) -> Option<(NotificationKind, String)> {
    app.notifications()
        .visible()
        .map(|n| (n.kind, n.message.clone()))
}

fn screen(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
}

#[tokio::test]
async fn test_starts_on_home_screen() {
    let fixture = fixture();
    let mut app = app_with(&fixture);
    assert!(app.workflow().is_closed());
    assert!(!app.should_quit());
    assert!(screen(&mut app).contains("Manage modules"));
}

#[tokio::test]
async fn test_quit_from_home() {
    let fixture = fixture();
    let mut app = app_with(&fixture);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = app_with(&fixture);
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_create_topic_end_to_end() {
    let fixture = Fixture::new(Vec::new(), Vec::new(), Vec::new());
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.workflow().kind(), Some(WorkflowKind::CreateTopic));

    type_text(&mut app, "Algorithms");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Sorting and searching");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert!(app.workflow().is_closed());
    assert_eq!(
        notification(&app),
        Some((NotificationKind::Success, SUCCESS_TOPIC_CREATED.to_string()))
    );
    let records = fixture.topics.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Algorithms");

    // The new topic shows up in the manage workflow
    press(&mut app, KeyCode::Char('4'));
    settle(&mut app, 1).await;
    assert!(screen(&mut app).contains("Algorithms"));
}

#[tokio::test]
async fn test_create_without_echoed_record_still_succeeds() {
    let fixture = Fixture::new(Vec::new(), Vec::new(), Vec::new());
    fixture.topics.silent.store(true, Ordering::SeqCst);
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('1'));
    type_text(&mut app, "A");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "B");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert!(app.workflow().is_closed());
    assert_eq!(notification(&app).map(|(kind, _)| kind), Some(NotificationKind::Success));
}

#[tokio::test]
async fn test_invalid_form_is_not_sent() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        notification(&app),
        Some((NotificationKind::Error, "Title is required".to_string()))
    );
    assert_eq!(fixture.news.creates.load(Ordering::SeqCst), 0);
    assert_eq!(app.workflow().kind(), Some(WorkflowKind::CreateNews));
}

#[tokio::test]
async fn test_failed_create_keeps_form_values() {
    let fixture = fixture();
    fixture.topics.fail_create.store(true, Ordering::SeqCst);
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('1'));
    type_text(&mut app, "Networks");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "TCP/IP");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert_eq!(notification(&app).map(|(kind, _)| kind), Some(NotificationKind::Error));
    let Workflow::CreateTopic(form) = app.workflow() else {
        panic!("form should stay open");
    };
    assert!(!form.form().is_submitting());
    assert_eq!(form.form().editor().draft().name, "Networks");
}

#[tokio::test]
async fn test_create_module_with_topic_selector() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('3'));
    settle(&mut app, 1).await;

    for value in ["Week 2", "Recursion", "2024-02-01", "2024-07-01", "/img/w2.png"] {
        type_text(&mut app, value);
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert_eq!(
        notification(&app),
        Some((NotificationKind::Success, SUCCESS_MODULE_CREATED.to_string()))
    );
    let created = fixture.modules.records().pop().unwrap();
    assert_eq!(created.title, "Week 2");
    assert_eq!(created.date_create, "2024-02-01");
    assert_eq!(created.topic_idtopic, 2);
}

#[tokio::test]
async fn test_module_list_resolves_topic_names() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('6'));
    settle(&mut app, 2).await;

    let Workflow::ManageModules(list) = app.workflow() else {
        panic!("expected the module manager");
    };
    assert_eq!(list.manager().items().len(), 1);
    assert_eq!(list.manager().topics().label_for(1), "Algorithms");

    let text = screen(&mut app);
    assert!(text.contains("Week 1"));
    assert!(text.contains("Topic: Algorithms"));
}

#[tokio::test]
async fn test_failed_load_notifies_and_shows_empty_list() {
    let fixture = fixture();
    fixture.topics.fail_list.store(true, Ordering::SeqCst);
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('4'));
    settle(&mut app, 1).await;

    assert_eq!(
        notification(&app),
        Some((NotificationKind::Error, ERROR_TOPICS_LOAD_FAILED.to_string()))
    );
    let Workflow::ManageTopics(list) = app.workflow() else {
        panic!("expected the topic manager");
    };
    assert_eq!(list.manager().state(), ManagerState::Ready);
    assert!(list.manager().items().is_empty());
}

#[tokio::test]
async fn test_update_topic() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('4'));
    settle(&mut app, 1).await;
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " II");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert_eq!(
        notification(&app),
        Some((NotificationKind::Success, SUCCESS_TOPIC_UPDATED.to_string()))
    );
    assert_eq!(fixture.topics.records()[0].name, "Algorithms II");
    let Workflow::ManageTopics(list) = app.workflow() else {
        panic!("expected the topic manager");
    };
    assert_eq!(list.manager().state(), ManagerState::Ready);
    assert_eq!(list.manager().item(1).unwrap().name, "Algorithms II");
}

#[tokio::test]
async fn test_failed_update_preserves_edit_buffer() {
    let fixture = fixture();
    fixture.topics.fail_update.store(true, Ordering::SeqCst);
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('4'));
    settle(&mut app, 1).await;
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "!");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert_eq!(
        notification(&app),
        Some((NotificationKind::Error, ERROR_TOPIC_UPDATE_FAILED.to_string()))
    );
    let Workflow::ManageTopics(list) = app.workflow() else {
        panic!("expected the topic manager");
    };
    assert_eq!(list.manager().state(), ManagerState::EditingOne(1));
    assert_eq!(list.manager().edit_session().unwrap().editor.draft().name, "Algorithms!");
    assert_eq!(list.manager().item(1).unwrap().name, "Algorithms");
    assert!(!list.manager().is_pending(1));
}

#[tokio::test]
async fn test_declined_delete_makes_no_call() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('4'));
    settle(&mut app, 1).await;
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));

    assert_eq!(fixture.topics.deletes.load(Ordering::SeqCst), 0);
    let Workflow::ManageTopics(list) = app.workflow() else {
        panic!("expected the topic manager");
    };
    assert_eq!(list.manager().items().len(), 2);
}

#[tokio::test]
async fn test_confirmed_delete_removes_row() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('4'));
    settle(&mut app, 1).await;
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app, 1).await;

    assert_eq!(
        notification(&app),
        Some((NotificationKind::Success, SUCCESS_TOPIC_DELETED.to_string()))
    );
    assert_eq!(fixture.topics.records().len(), 1);
    let Workflow::ManageTopics(list) = app.workflow() else {
        panic!("expected the topic manager");
    };
    assert!(list.manager().item(2).is_none());
}

#[tokio::test]
async fn test_delete_other_row_while_editing() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('4'));
    settle(&mut app, 1).await;
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " II");
    app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app, 1).await;

    assert_eq!(
        notification(&app),
        Some((NotificationKind::Success, SUCCESS_TOPIC_DELETED.to_string()))
    );
    assert_eq!(fixture.topics.deletes.load(Ordering::SeqCst), 1);
    let Workflow::ManageTopics(list) = app.workflow() else {
        panic!("expected the topic manager");
    };
    assert!(list.manager().item(2).is_none());
    assert_eq!(list.manager().state(), ManagerState::EditingOne(1));
    assert_eq!(list.manager().edit_session().unwrap().editor.draft().name, "Algorithms II");
}

#[tokio::test]
async fn test_results_from_closed_workflow_are_dropped() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Esc);
    assert!(app.workflow().is_closed());
    settle(&mut app, 1).await;

    assert!(app.workflow().is_closed());
    assert_eq!(notification(&app), None);
}

#[tokio::test]
async fn test_stale_mutation_still_notifies() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('4'));
    settle(&mut app, 1).await;
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    let stale_session = app.session();

    // Leave and come back before the delete lands
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('5'));
    assert!(app.session() > stale_session);
    settle(&mut app, 2).await;

    assert_eq!(
        notification(&app),
        Some((NotificationKind::Success, SUCCESS_TOPIC_DELETED.to_string()))
    );
    assert_eq!(app.workflow().kind(), Some(WorkflowKind::ManageNews));
}

#[tokio::test]
async fn test_notification_auto_hides_and_can_be_dismissed() {
    let fixture = fixture();
    fixture.topics.fail_delete.store(true, Ordering::SeqCst);
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('4'));
    settle(&mut app, 1).await;
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app, 1).await;
    assert_eq!(notification(&app).map(|(kind, _)| kind), Some(NotificationKind::Error));
    assert!(screen(&mut app).contains("Failed to delete topic"));

    assert!(app.tick(Instant::now() + Duration::from_secs(5)));
    assert_eq!(notification(&app), None);

    // Ctrl+X dismisses from inside a workflow
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app, 1).await;
    assert!(notification(&app).is_some());
    app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
    assert_eq!(notification(&app), None);
}

#[tokio::test]
async fn test_logs_overlay() {
    let fixture = fixture();
    let mut app = app_with(&fixture);

    press(&mut app, KeyCode::Char('G'));
    assert!(app.is_showing_logs());
    assert!(screen(&mut app).contains("Logs"));

    // Keys go to the overlay, not the home menu
    press(&mut app, KeyCode::Char('1'));
    assert!(app.workflow().is_closed());

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.is_showing_logs());
    assert!(!app.should_quit());
}
