use campusdesk::icons::IconService;
use campusdesk::ui::components::HomeMenuComponent;
use campusdesk::ui::core::{Action, Component, WorkflowKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_enter_opens_selected_workflow() {
    let mut home = HomeMenuComponent::new(&IconService::default());
    assert_eq!(home.selected(), WorkflowKind::CreateTopic);

    assert_eq!(home.handle_key_events(key(KeyCode::Char('j'))), Action::None);
    assert_eq!(
        home.handle_key_events(key(KeyCode::Enter)),
        Action::OpenWorkflow(WorkflowKind::CreateNews)
    );
}

#[test]
fn test_selection_wraps() {
    let mut home = HomeMenuComponent::new(&IconService::default());
    home.handle_key_events(key(KeyCode::Up));
    assert_eq!(home.selected(), WorkflowKind::ManageModules);
    home.handle_key_events(key(KeyCode::Down));
    assert_eq!(home.selected(), WorkflowKind::CreateTopic);
}

#[test]
fn test_digit_opens_directly() {
    let mut home = HomeMenuComponent::new(&IconService::default());
    assert_eq!(
        home.handle_key_events(key(KeyCode::Char('6'))),
        Action::OpenWorkflow(WorkflowKind::ManageModules)
    );
    assert_eq!(home.selected(), WorkflowKind::ManageModules);
    assert_eq!(home.handle_key_events(key(KeyCode::Char('7'))), Action::None);
    assert_eq!(home.handle_key_events(key(KeyCode::Char('q'))), Action::None);
}

#[test]
fn test_renders_all_entries() {
    let mut home = HomeMenuComponent::new(&IconService::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| home.render(f, f.area())).unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("CampusDesk"));
    for title in ["Create topic", "Create news item", "Create module", "Manage topics", "Manage news", "Manage modules"] {
        assert!(text.contains(title), "missing menu entry {title}");
    }
}
