//! Constants used throughout the application
//!
//! This module centralizes user-facing messages, UI text and other constant
//! values to keep them consistent across workflows.

// Application header
pub const APP_TITLE: &str = "CampusDesk";
pub const APP_SUBTITLE: &str = "Academic content administration";

// Success Messages
pub const SUCCESS_TOPIC_CREATED: &str = "Topic created";
pub const SUCCESS_TOPIC_UPDATED: &str = "Topic updated";
pub const SUCCESS_TOPIC_DELETED: &str = "Topic deleted";
pub const SUCCESS_NEWS_CREATED: &str = "News item created";
pub const SUCCESS_NEWS_UPDATED: &str = "News item updated";
pub const SUCCESS_NEWS_DELETED: &str = "News item deleted";
pub const SUCCESS_MODULE_CREATED: &str = "Module created";
pub const SUCCESS_MODULE_UPDATED: &str = "Module updated";
pub const SUCCESS_MODULE_DELETED: &str = "Module deleted";

// Error Messages
pub const ERROR_TOPICS_LOAD_FAILED: &str = "Failed to load topics";
pub const ERROR_TOPIC_CREATE_FAILED: &str = "Failed to create topic";
pub const ERROR_TOPIC_UPDATE_FAILED: &str = "Failed to update topic";
pub const ERROR_TOPIC_DELETE_FAILED: &str = "Failed to delete topic";
pub const ERROR_NEWS_LOAD_FAILED: &str = "Failed to load news";
pub const ERROR_NEWS_CREATE_FAILED: &str = "Failed to create news item";
pub const ERROR_NEWS_UPDATE_FAILED: &str = "Failed to update news item";
pub const ERROR_NEWS_DELETE_FAILED: &str = "Failed to delete news item";
pub const ERROR_MODULES_LOAD_FAILED: &str = "Failed to load modules";
pub const ERROR_MODULE_CREATE_FAILED: &str = "Failed to create module";
pub const ERROR_MODULE_UPDATE_FAILED: &str = "Failed to update module";
pub const ERROR_MODULE_DELETE_FAILED: &str = "Failed to delete module";
pub const ERROR_OPERATION_IN_PROGRESS: &str = "An operation is already in progress";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_COLLECTION_TEXT: &str = "Nothing here yet.";
pub const NO_TOPICS_TEXT: &str = "No topics available";
pub const SELECT_TOPIC_TEXT: &str = "Select a topic";
pub const DATE_HINT: &str = "YYYY-MM-DD";

/// Home menu entries, in workflow order: `(title, description)`.
pub const HOME_MENU_ENTRIES: [(&str, &str); 6] = [
    (
        "Create topic",
        "Create and organise academic topics to structure university content",
    ),
    (
        "Create news item",
        "Publish news and important announcements for the university community",
    ),
    (
        "Create module",
        "Build complete educational modules with media and availability dates",
    ),
    ("Manage topics", "View, edit and delete existing academic topics"),
    ("Manage news", "Review and update every published news item"),
    ("Manage modules", "Edit and remove the educational modules of the system"),
];

/// Auto-hide delay for notifications, in seconds.
pub const NOTIFICATION_TIMEOUT_SECS: u64 = 5;

/// Number of log lines kept in memory for the logs dialog.
pub const LOG_BUFFER_CAPACITY: usize = 500;

/// Default API root of the content backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV_VAR: &str = "CAMPUSDESK_API_URL";
