//! CampusDesk - a terminal administration client for university content
//!
//! Topics, news items and course modules live behind a REST API. This
//! library provides the typed records, the HTTP client, the in-memory
//! collection manager that tracks edit and pending state, and the terminal
//! interface built on Ratatui.
//!
//! # Modules
//!
//! * [`backend`] - REST clients for the three resource collections
//! * [`config`] - Application configuration management
//! * [`entities`] - Record and draft types
//! * [`form`] - Field validation and edit buffers
//! * [`manager`] - Loaded collection with edit, save and delete state
//! * [`ui`] - Terminal user interface components

/// REST clients for topics, news and modules
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Record types and their drafts
pub mod entities;

/// Draft validation and cursor-aware edit buffers
pub mod form;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory buffer behind the logs dialog
pub mod logger;

/// Collection state for the manage workflows
pub mod manager;

/// Transient success and error notifications
pub mod notification;

/// Terminal user interface components and rendering
pub mod ui;

pub use entities::{Module, NewsItem, Topic};
