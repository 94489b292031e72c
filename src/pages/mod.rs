//! Views
//!
//! One component per route.

mod dashboard;
mod login;
mod projects;
mod register;
mod tasks;
mod team;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use projects::ProjectsPage;
pub use register::RegisterPage;
pub use tasks::TasksPage;
pub use team::TeamPage;
