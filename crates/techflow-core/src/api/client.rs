//! API Client
//!
//! Typed wrappers for every endpoint the client consumes. The bearer token is
//! read from the token store each time a request is built, and every
//! unauthorized response goes through a single handler.

use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::transport::{HttpRequest, Method, Transport};
use crate::error::{ApiError, ApiResult};
use crate::forms::{ProjectPayload, TaskPayload};
use crate::models::{AuthResponse, MemberList, Project, ProjectList, Task, TaskList, TeamMember};
use crate::session::TokenStore;

/// Characters left as-is in an identifier path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

// ========================
// Client
// ========================

pub struct ApiClient<T, S> {
    transport: T,
    tokens: S,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(transport: T, tokens: S) -> Self {
        Self {
            transport,
            tokens,
            on_unauthorized: None,
        }
    }

    /// Install the handler run on every 401/403 outside the auth endpoints
    pub fn on_unauthorized(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(handler));
        self
    }

    async fn request(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
        intercept_unauthorized: bool,
    ) -> ApiResult<String> {
        debug!(?method, %path, "api request");
        let request = HttpRequest {
            method,
            path,
            bearer: self.tokens.load(),
            body,
        };
        let response = self.transport.send(request).await?;
        if (200..300).contains(&response.status) {
            return Ok(response.body);
        }

        let err = ApiError::from_status(response.status, &response.body);
        if err.is_unauthorized() && intercept_unauthorized {
            warn!(status = response.status, "request rejected, ending session");
            if let Some(handler) = &self.on_unauthorized {
                handler();
            }
        }
        Err(err)
    }

    async fn get<R: DeserializeOwned>(&self, path: String) -> ApiResult<R> {
        let body = self.request(Method::Get, path, None, true).await?;
        decode(&body)
    }

    async fn send_json<B: Serialize>(&self, method: Method, path: String, payload: &B) -> ApiResult<String> {
        self.request(method, path, Some(encode(payload)?), true).await
    }

    // ========================
    // Auth
    // ========================

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = encode(&LoginRequest { email, password })?;
        let response = self.request(Method::Post, "/auth/login".to_string(), Some(body), false).await?;
        decode(&response)
    }

    pub async fn register(&self, request: &RegisterRequest<'_>) -> ApiResult<()> {
        let body = encode(request)?;
        self.request(Method::Post, "/auth/register".to_string(), Some(body), false).await?;
        Ok(())
    }

    // ========================
    // Projects
    // ========================

    pub async fn list_projects(&self, limit: u32) -> ApiResult<Vec<Project>> {
        let list: ProjectList = self.get(format!("/projects?limit={}", limit)).await?;
        Ok(list.projects)
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> ApiResult<()> {
        self.send_json(Method::Post, "/projects".to_string(), payload).await?;
        Ok(())
    }

    pub async fn update_project(&self, id: &str, payload: &ProjectPayload) -> ApiResult<()> {
        self.send_json(Method::Put, entity_path("projects", id), payload).await?;
        Ok(())
    }

    pub async fn delete_project(&self, id: &str) -> ApiResult<()> {
        self.request(Method::Delete, entity_path("projects", id), None, true).await?;
        Ok(())
    }

    // ========================
    // Tasks
    // ========================

    pub async fn list_tasks(&self, limit: u32) -> ApiResult<Vec<Task>> {
        let list: TaskList = self.get(format!("/tasks?limit={}", limit)).await?;
        Ok(list.tasks)
    }

    pub async fn create_task(&self, payload: &TaskPayload) -> ApiResult<()> {
        self.send_json(Method::Post, "/tasks".to_string(), payload).await?;
        Ok(())
    }

    pub async fn update_task(&self, id: &str, payload: &TaskPayload) -> ApiResult<()> {
        self.send_json(Method::Put, entity_path("tasks", id), payload).await?;
        Ok(())
    }

    pub async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.request(Method::Delete, entity_path("tasks", id), None, true).await?;
        Ok(())
    }

    /// Tasks and projects fetched concurrently; fails as a whole if either fails
    pub async fn list_tasks_and_projects(&self, limit: u32) -> ApiResult<(Vec<Task>, Vec<Project>)> {
        futures::try_join!(self.list_tasks(limit), self.list_projects(limit))
    }

    // ========================
    // Team
    // ========================

    pub async fn list_team_members(&self) -> ApiResult<Vec<TeamMember>> {
        let list: MemberList = self.get("/team/members".to_string()).await?;
        Ok(list.members)
    }
}

fn entity_path(collection: &str, id: &str) -> String {
    format!("/{}/{}", collection, utf8_percent_encode(id, PATH_SEGMENT))
}

fn encode<B: Serialize>(payload: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(body: &str) -> ApiResult<R> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;
    use crate::api::transport::HttpResponse;
    use crate::models::{ProjectStatus, TaskPriority, TaskStatus};
    use crate::session::MemoryTokenStore;

    /// Answers by path prefix and records every request
    #[derive(Default)]
    struct FakeTransport {
        routes: Vec<(&'static str, u16, &'static str)>,
        sent: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        fn route(mut self, prefix: &'static str, status: u16, body: &'static str) -> Self {
            self.routes.push((prefix, status, body));
            self
        }
    }

    #[async_trait(?Send)]
    impl<'a> Transport for &'a FakeTransport {
        async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
            let answer = self
                .routes
                .iter()
                .find(|(prefix, _, _)| request.path.starts_with(prefix))
                .map(|(_, status, body)| HttpResponse { status: *status, body: body.to_string() });
            self.sent.borrow_mut().push(request);
            answer.ok_or_else(|| ApiError::Network("connection refused".to_string()))
        }
    }

    const TASKS: &str = r#"{"tasks":[{"id":"t1","title":"Plan","description":"","projectId":"p1","priority":"HIGH","status":"TODO","dueDate":"2025-01-01"}]}"#;
    const PROJECTS: &str = r#"{"projects":[{"id":"p1","name":"Alpha","description":"","status":"ACTIVE"}]}"#;

    #[tokio::test]
    async fn test_bearer_token_attached_when_stored() {
        let transport = FakeTransport::default().route("/tasks", 200, TASKS);
        let client = ApiClient::new(&transport, MemoryTokenStore::with_token("secret"));

        let tasks = client.list_tasks(100).await.unwrap();
        assert_eq!(tasks[0].priority, TaskPriority::High);

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].path, "/tasks?limit=100");
        assert_eq!(sent[0].bearer.as_deref(), Some("secret"));
        assert_eq!(sent[0].method, Method::Get);
    }

    #[tokio::test]
    async fn test_token_read_at_request_time() {
        let transport = FakeTransport::default().route("/team/members", 200, r#"{"members":[]}"#);
        let tokens = MemoryTokenStore::default();
        let client = ApiClient::new(&transport, tokens.clone());

        client.list_team_members().await.unwrap();
        tokens.save("fresh");
        client.list_team_members().await.unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].bearer, None);
        assert_eq!(sent[1].bearer.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_unauthorized_runs_handler() {
        let transport = FakeTransport::default().route("/projects", 401, "");
        let expired = std::rc::Rc::new(Cell::new(0));
        let counter = expired.clone();
        let client = ApiClient::new(&transport, MemoryTokenStore::with_token("old"))
            .on_unauthorized(move || counter.set(counter.get() + 1));

        let err = client.list_projects(50).await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(expired.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_login_does_not_run_handler() {
        let transport = FakeTransport::default().route("/auth/login", 401, r#"{"message":"bad credentials"}"#);
        let expired = std::rc::Rc::new(Cell::new(false));
        let flag = expired.clone();
        let client = ApiClient::new(&transport, MemoryTokenStore::default()).on_unauthorized(move || flag.set(true));

        assert_eq!(client.login("a@b.c", "nope").await.unwrap_err(), ApiError::Unauthorized);
        assert!(!expired.get());
    }

    #[tokio::test]
    async fn test_login_body_and_response() {
        let transport = FakeTransport::default().route(
            "/auth/login",
            200,
            r#"{"token":"tok","user":{"id":"u1","email":"a@b.c","name":"Ana"}}"#,
        );
        let client = ApiClient::new(&transport, MemoryTokenStore::default());

        let auth = client.login("a@b.c", "pw").await.unwrap();
        assert_eq!(auth.token, "tok");
        assert_eq!(auth.user.name, "Ana");
        let body = transport.sent.borrow()[0].body.clone().unwrap();
        assert_eq!(body["email"], "a@b.c");
        assert_eq!(body["password"], "pw");
    }

    #[tokio::test]
    async fn test_delete_maps_not_found_and_encodes_id() {
        let transport = FakeTransport::default().route("/tasks/", 404, "");
        let client = ApiClient::new(&transport, MemoryTokenStore::default());

        assert_eq!(client.delete_task("a/b c").await.unwrap_err(), ApiError::NotFound);
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].path, "/tasks/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_update_project_sends_payload() {
        let transport = FakeTransport::default().route("/projects/p1", 200, "{}");
        let client = ApiClient::new(&transport, MemoryTokenStore::default());
        let payload = ProjectPayload {
            name: "Alpha".to_string(),
            description: "".to_string(),
            status: ProjectStatus::OnHold,
        };

        client.update_project("p1", &payload).await.unwrap();
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].body.as_ref().unwrap()["status"], "ON_HOLD");
    }

    #[tokio::test]
    async fn test_validation_error_carries_message() {
        let transport = FakeTransport::default().route("/tasks", 422, r#"{"message":"dueDate must be a date"}"#);
        let client = ApiClient::new(&transport, MemoryTokenStore::default());
        let payload = TaskPayload {
            title: "x".to_string(),
            description: String::new(),
            project_id: "p1".to_string(),
            priority: TaskPriority::Low,
            status: TaskStatus::Todo,
            due_date: "2025-01-01".to_string(),
        };

        let err = client.create_task(&payload).await.unwrap_err();
        assert_eq!(err, ApiError::Validation("dueDate must be a date".to_string()));
    }

    #[tokio::test]
    async fn test_joined_fetch_succeeds() {
        let transport = FakeTransport::default().route("/tasks", 200, TASKS).route("/projects", 200, PROJECTS);
        let client = ApiClient::new(&transport, MemoryTokenStore::default());

        let (tasks, projects) = client.list_tasks_and_projects(100).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(projects[0].name, "Alpha");
    }

    #[tokio::test]
    async fn test_joined_fetch_fails_as_a_whole() {
        let transport = FakeTransport::default().route("/tasks", 200, TASKS).route("/projects", 500, "");
        let client = ApiClient::new(&transport, MemoryTokenStore::default());

        let err = client.list_tasks_and_projects(100).await.unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_network_and_decode_errors() {
        let transport = FakeTransport::default().route("/team/members", 200, "<html>");
        let client = ApiClient::new(&transport, MemoryTokenStore::default());

        assert!(matches!(client.list_team_members().await, Err(ApiError::Decode(_))));
        assert!(matches!(client.list_tasks(10).await, Err(ApiError::Network(_))));
    }
}
