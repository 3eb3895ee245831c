use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::icons::IconService;
use crate::notification::{Notification, NotificationKind};

/// Render a notification in the top-right corner of `area`.
pub fn render_notification(f: &mut Frame, area: Rect, icons: &IconService, notification: &Notification) {
    let (icon, color, title) = match notification.kind {
        NotificationKind::Success => (icons.success(), Color::Green, " Success "),
        NotificationKind::Error => (icons.error(), Color::Red, " Error "),
    };

    let width = (notification.message.chars().count() as u16 + 8)
        .clamp(24, 60)
        .min(area.width);
    let height = 3u16.min(area.height);
    let toast_area = Rect::new(area.x + area.width.saturating_sub(width), area.y, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .style(Style::default().fg(color));
    let paragraph = Paragraph::new(format!("{} {}", icon, notification.message))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, toast_area);
    f.render_widget(paragraph, toast_area);
}
