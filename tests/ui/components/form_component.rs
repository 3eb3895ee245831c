use campusdesk::entities::{EntityDraft, Module, Topic, TopicDraft};
use campusdesk::icons::IconService;
use campusdesk::notification::NotificationKind;
use campusdesk::ui::components::{FormComponent, FormWorkflow};
use campusdesk::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::common::topic;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(component: &mut impl Component, text: &str) {
    for c in text.chars() {
        component.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_escape_closes_form() {
    let mut form: FormComponent<Topic> = FormComponent::new(&IconService::default());
    assert_eq!(form.handle_key_events(key(KeyCode::Esc)), Action::CloseWorkflow);
}

#[test]
fn test_missing_field_is_reported() {
    let mut form: FormComponent<Topic> = FormComponent::new(&IconService::default());
    type_text(&mut form, "Algorithms");

    let action = form.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::Notify {
            kind: NotificationKind::Error,
            message: "Description is required".to_string(),
        }
    );
    assert!(!form.is_submitting());
}

#[test]
fn test_submit_and_double_submit() {
    let mut form: FormComponent<Topic> = FormComponent::new(&IconService::default());
    type_text(&mut form, "Algorithms");
    form.handle_key_events(key(KeyCode::Tab));
    type_text(&mut form, "Sorting");

    let action = form.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::SubmitCreate(EntityDraft::Topic(TopicDraft {
            name: "Algorithms".to_string(),
            description: "Sorting".to_string(),
        }))
    );
    assert!(form.is_submitting());
    assert!(matches!(
        form.handle_key_events(key(KeyCode::Enter)),
        Action::Notify {
            kind: NotificationKind::Error,
            ..
        }
    ));

    form.on_created(true);
    assert!(!form.is_submitting());
    assert_eq!(form.form().editor().draft(), &TopicDraft::default());
}

#[test]
fn test_module_form_picks_topic() {
    let mut form: FormComponent<Module> = FormComponent::new(&IconService::default());
    assert!(form.needs_topics());
    form.on_topics_loaded(Ok(vec![topic(3, "Algorithms"), topic(5, "Databases")]));

    for _ in 0..5 {
        form.handle_key_events(key(KeyCode::Tab));
    }
    assert_eq!(form.form().editor().focused_field().key, "topic_idtopic");

    form.handle_key_events(key(KeyCode::Right));
    form.handle_key_events(key(KeyCode::Right));
    assert_eq!(form.form().editor().draft().topic_idtopic, 5);
    form.handle_key_events(key(KeyCode::Left));
    assert_eq!(form.form().editor().draft().topic_idtopic, 3);
}
