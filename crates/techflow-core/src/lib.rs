//! TechFlow Core
//!
//! Target-independent layer of the TechFlow client:
//! - models: entities as delivered by the backend
//! - stats / filters: pure aggregation over fetched snapshots
//! - forms: editable drafts and their validation
//! - api: REST client over a pluggable transport
//! - session: token persistence and authentication state

pub mod api;
pub mod config;
pub mod dates;
pub mod error;
pub mod filters;
pub mod forms;
pub mod models;
pub mod session;
pub mod stats;

pub use api::{ApiClient, Transport};
pub use config::AppConfig;
pub use error::{ApiError, ApiResult, DataAnomaly, FormError};
pub use models::{
    AuthResponse, Entity, Project, ProjectStatus, Task, TaskPriority, TaskStatus, TeamMember, User,
};
pub use session::{MemoryTokenStore, SessionState, TokenStore};
