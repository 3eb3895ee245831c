//! Reusable UI components

// Component architecture
pub mod collection_component;
pub mod dialogs;
pub mod field_editor;
pub mod form_component;
pub mod home_menu;
pub mod notification_toast;

// Component exports
pub use collection_component::{CollectionComponent, CollectionWorkflow};
pub use form_component::{FormComponent, FormWorkflow};
pub use home_menu::HomeMenuComponent;
