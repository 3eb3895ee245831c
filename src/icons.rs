//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

use crate::entities::ResourceKind;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Per-resource icons used in menu entries and list titles
#[derive(Debug, Clone)]
pub struct ResourceIcons {
    pub topic: &'static str,
    pub news: &'static str,
    pub module: &'static str,
}

/// Notification and row status icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub success: &'static str,
    pub error: &'static str,
    pub pending: &'static str,
    pub editing: &'static str,
    pub selected: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub resources: ResourceIcons,
    pub status: StatusIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                resources: ResourceIcons {
                    topic: "📚",
                    news: "📰",
                    module: "🧩",
                },
                status: StatusIcons {
                    success: "✅",
                    error: "❌",
                    pending: "⏳",
                    editing: "✏️",
                    selected: "👉",
                },
            },
            IconTheme::Unicode => IconSet {
                resources: ResourceIcons {
                    topic: "◆",
                    news: "▤",
                    module: "▦",
                },
                status: StatusIcons {
                    success: "✓",
                    error: "✗",
                    pending: "⟳",
                    editing: "✎",
                    selected: "▶",
                },
            },
            IconTheme::Ascii => IconSet {
                resources: ResourceIcons {
                    topic: "#",
                    news: "*",
                    module: "=",
                },
                status: StatusIcons {
                    success: "+",
                    error: "X",
                    pending: "...",
                    editing: "~",
                    selected: ">",
                },
            },
        }
    }

    #[must_use]
    pub fn resource(&self, kind: ResourceKind) -> &'static str {
        let icons = self.icons().resources;
        match kind {
            ResourceKind::Topic => icons.topic,
            ResourceKind::News => icons.news,
            ResourceKind::Module => icons.module,
        }
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().status.success
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().status.error
    }

    #[must_use]
    pub fn pending(&self) -> &'static str {
        self.icons().status.pending
    }

    #[must_use]
    pub fn editing(&self) -> &'static str {
        self.icons().status.editing
    }

    #[must_use]
    pub fn selected(&self) -> &'static str {
        self.icons().status.selected
    }
}
