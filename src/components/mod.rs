//! UI Components
//!
//! Reusable Leptos components.

mod badges;
mod delete_confirm_button;
mod layout;
mod modal;
mod notice;
mod project_form;
mod task_form;

pub use badges::{priority_color, project_status_class, task_status_class, StatCard};
pub use delete_confirm_button::DeleteConfirmButton;
pub use layout::Layout;
pub use modal::{FormMode, Modal};
pub use notice::NoticeBanner;
pub use project_form::ProjectForm;
pub use task_form::TaskForm;
