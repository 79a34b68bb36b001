//! HTTP API Implementation
//!
//! `reqwest`-backed clients for the task and account endpoints. Every task
//! record is validated into a `Task` here, so malformed responses stop at
//! this boundary as `ClientError::Server`.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{routes, ApiConfig, AuthApi, Credentials, GoogleIdentity, RegisterRequest, SessionContext, TaskApi};
use crate::domain::{Task, TaskId, TaskPayload, TaskRecord};
use crate::error::{ClientError, ClientResult};

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

#[derive(Deserialize)]
struct TokenBody {
    token: Option<String>,
}

/// Prefer the server's `{message}` over the raw body
fn server_message(body: &str) -> String {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|m| m.message)
        .unwrap_or_else(|| body.to_string())
}

/// Pass 2xx through, turn anything else into a classified error
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_status(status.as_u16(), server_message(&body)))
}

/// Require one exact success status (login wants 200, register 201)
async fn expect_status(response: Response, expected: StatusCode) -> ClientResult<Response> {
    let response = check(response).await?;
    if response.status() != expected {
        return Err(ClientError::Server(format!(
            "unexpected status {} (wanted {})",
            response.status(),
            expected
        )));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

async fn decode_task(response: Response) -> ClientResult<Task> {
    let record: TaskRecord = decode(response).await?;
    Task::try_from(record)
}

async fn decode_token(response: Response) -> ClientResult<SessionContext> {
    let body: TokenBody = decode(response).await?;
    body.token
        .filter(|t| !t.is_empty())
        .map(SessionContext::new)
        .ok_or_else(|| ClientError::Server("login response has no token".to_string()))
}

/// Task client bound to one session
#[derive(Clone)]
pub struct HttpTaskApi {
    client: Client,
    config: ApiConfig,
    session: SessionContext,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig, session: SessionContext) -> Self {
        Self::with_client(Client::new(), config, session)
    }

    pub fn with_client(client: Client, config: ApiConfig, session: SessionContext) -> Self {
        Self { client, config, session }
    }

    fn authorization(&self) -> ClientResult<HeaderValue> {
        HeaderValue::from_str(&self.session.bearer())
            .map_err(|_| ClientError::auth("session token is not a valid header value"))
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> ClientResult<Vec<Task>> {
        let url = self.config.url(routes::TASKS);
        tracing::debug!(%url, "listing tasks");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.authorization()?)
            .send()
            .await?;
        let records: Vec<TaskRecord> = decode(check(response).await?).await?;
        records.into_iter().map(Task::try_from).collect()
    }

    async fn create(&self, task: &TaskPayload) -> ClientResult<Task> {
        let url = self.config.url(routes::TASKS);
        tracing::debug!(%url, title = %task.title, "creating task");

        let body = TaskPayload {
            id: None,
            created_at: None,
            ..task.clone()
        };
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.authorization()?)
            .json(&body)
            .send()
            .await?;
        decode_task(check(response).await?).await
    }

    async fn update(&self, id: &TaskId, task: &TaskPayload) -> ClientResult<Task> {
        let url = self.config.url(&routes::task(id));
        tracing::debug!(%url, status = %task.status, "updating task");

        let response = self
            .client
            .put(&url)
            .header(AUTHORIZATION, self.authorization()?)
            .json(task)
            .send()
            .await?;
        decode_task(check(response).await?).await
    }

    async fn delete(&self, id: &TaskId) -> ClientResult<()> {
        let url = self.config.url(&routes::task(id));
        tracing::debug!(%url, "deleting task");

        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, self.authorization()?)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

/// Account client; no credential attached
#[derive(Clone)]
pub struct HttpAuthApi {
    client: Client,
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Task client for a session obtained from this account client
    pub fn task_api(&self, session: SessionContext) -> HttpTaskApi {
        HttpTaskApi::with_client(self.client.clone(), self.config.clone(), session)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &RegisterRequest) -> ClientResult<String> {
        let url = self.config.url(routes::REGISTER);
        tracing::debug!(%url, email = %request.email, "registering account");

        let response = self.client.post(&url).json(request).send().await?;
        let body: MessageBody = decode(expect_status(response, StatusCode::CREATED).await?).await?;
        Ok(body.message.unwrap_or_else(|| "Registration successful".to_string()))
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<SessionContext> {
        let url = self.config.url(routes::LOGIN);
        tracing::debug!(%url, email = %credentials.email, "logging in");

        let response = self.client.post(&url).json(credentials).send().await?;
        decode_token(expect_status(response, StatusCode::OK).await?).await
    }

    async fn google_login(&self, identity: &GoogleIdentity) -> ClientResult<SessionContext> {
        let url = self.config.url(routes::GOOGLE);
        tracing::debug!(%url, email = %identity.email, "logging in with google identity");

        // The provider uid doubles as the account password
        let body = RegisterRequest {
            name: identity.name.clone(),
            email: identity.email.clone(),
            password: identity.uid.clone(),
        };
        let response = self.client.post(&url).json(&body).send().await?;
        decode_token(expect_status(response, StatusCode::OK).await?).await
    }
}
