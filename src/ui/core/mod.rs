//! Core UI functionality for the CampusDesk application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event polling, the action vocabulary, the component abstraction and
//! background task management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard and resize event polling
//! - [`task_manager`] - Background task management and async operation handling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe user intents and background results
//! 3. **Events** are processed through the [`EventHandler`] system
//! 4. **Tasks** run network calls via the [`TaskManager`] and report back as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, SessionId, WorkflowKind};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
