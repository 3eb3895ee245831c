//! Terminal user interface
//!
//! A home menu opens one modal workflow at a time: three creation forms and
//! three collection managers. Network calls run in the background and report
//! back through actions tagged with the session of the workflow that issued them.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::{AppComponent, Workflow};
pub use layout::LayoutManager;
pub use renderer::run_app;
