use campusdesk::ui::core::event_handler::{EventHandler, EventType};
use std::time::Duration;

#[test]
fn test_default_tick_rate() {
    assert_eq!(EventHandler::new().tick_rate(), Duration::from_millis(100));
    assert_eq!(EventHandler::default().tick_rate(), Duration::from_millis(100));
}

#[test]
fn test_custom_tick_rate() {
    let handler = EventHandler::with_tick_rate(Duration::from_millis(250));
    assert_eq!(handler.tick_rate(), Duration::from_millis(250));
}

#[test]
fn test_event_type_is_cloneable() {
    let event = EventType::Resize(80, 24);
    assert!(matches!(event.clone(), EventType::Resize(80, 24)));
}
