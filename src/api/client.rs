//! reqwest-backed [`ApiGateway`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::ApiGateway;
use super::model::*;
use crate::config::ConsoleConfig;
use crate::error::ApiError;
use crate::session::SessionContext;

/// Longest backend error body echoed back to the user.
const MAX_ERROR_MESSAGE_LENGTH: usize = 300;

/// HTTP client for the backend REST API.
///
/// Attaches the session's bearer token to every request and clears it when
/// the backend answers 401.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
    session: Arc<SessionContext>,
}

impl HttpGateway {
    pub fn new(base_url: Url, session: Arc<SessionContext>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    pub fn from_config(config: &ConsoleConfig, session: Arc<SessionContext>) -> Self {
        Self::new(config.api_base_url.clone(), session)
    }

    /// Append `path` to the base URL, keeping any base path prefix.
    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let mut builder = self.client.request(method, self.url(path)?);
        if let Some(bearer) = self.session.bearer().await {
            builder = builder.header(AUTHORIZATION, bearer);
        }
        Ok(builder)
    }

    async fn send(&self, path: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!(path, error = %e, "Request failed before a response arrived");
            ApiError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        debug!(path, %status, "Backend responded");

        if status == StatusCode::UNAUTHORIZED {
            self.session.clear_credentials().await;
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            warn!(path, %status, %message, "Backend rejected request");
            return Err(ApiError::Status {
                path: path.to_string(),
                status,
                message,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ListParams>,
    ) -> Result<T, ApiError> {
        let mut builder = self.request(Method::GET, path).await?;
        if let Some(params) = params {
            builder = builder.query(params);
        }
        let response = self.send(path, builder).await?;
        Self::decode(path, response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path).await?.json(body);
        let response = self.send(path, builder).await?;
        Self::decode(path, response).await
    }

    /// Send a request whose response body is ignored.
    async fn send_unit<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let mut builder = self.request(method, path).await?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(path, builder).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_unit::<()>(Method::DELETE, path, None).await
    }
}

/// Pull a readable message out of a backend error body.
///
/// Understands `{"detail": "..."}` and `{"message": "..."}`; anything else is
/// returned verbatim, truncated.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message", "error"] {
            match value.get(key) {
                Some(serde_json::Value::String(s)) => return s.clone(),
                Some(other) if !other.is_null() => return other.to_string(),
                _ => {}
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_ERROR_MESSAGE_LENGTH {
        let cut: String = trimmed.chars().take(MAX_ERROR_MESSAGE_LENGTH).collect();
        format!("{cut}…")
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl ApiGateway for HttpGateway {
    async fn register_company(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationReceipt, ApiError> {
        self.send_json(Method::POST, "/register", payload).await
    }

    async fn update_account_settings(&self, settings: &AccountSettings) -> Result<(), ApiError> {
        self.send_unit(Method::PUT, "/account/settings", Some(settings))
            .await
    }

    async fn list_agents(&self, params: &ListParams) -> Result<AgentPage, ApiError> {
        self.get_json("/agents", Some(params)).await
    }

    async fn get_agent(&self, id: ResourceId) -> Result<Agent, ApiError> {
        self.get_json(&format!("/agents/{id}"), None).await
    }

    async fn create_agent(&self, draft: &AgentDraft) -> Result<Agent, ApiError> {
        self.send_json(Method::POST, "/agents", draft).await
    }

    async fn update_agent(&self, id: ResourceId, draft: &AgentDraft) -> Result<Agent, ApiError> {
        self.send_json(Method::PUT, &format!("/agents/{id}"), draft)
            .await
    }

    async fn delete_agent(&self, id: ResourceId) -> Result<(), ApiError> {
        self.delete(&format!("/agents/{id}")).await
    }

    async fn list_tools(&self, params: &ListParams) -> Result<Vec<Tool>, ApiError> {
        self.get_json("/tools", Some(params)).await
    }

    async fn get_tool(&self, id: ResourceId) -> Result<Tool, ApiError> {
        self.get_json(&format!("/tools/{id}"), None).await
    }

    async fn create_tool(&self, draft: &ToolDraft) -> Result<Tool, ApiError> {
        self.send_json(Method::POST, "/tools", draft).await
    }

    async fn update_tool(&self, id: ResourceId, draft: &ToolDraft) -> Result<Tool, ApiError> {
        self.send_json(Method::PUT, &format!("/tools/{id}"), draft)
            .await
    }

    async fn delete_tool(&self, id: ResourceId) -> Result<(), ApiError> {
        self.delete(&format!("/tools/{id}")).await
    }

    async fn list_calls(&self, params: &ListParams) -> Result<CallPage, ApiError> {
        self.get_json("/calls", Some(params)).await
    }

    async fn get_call(&self, id: ResourceId) -> Result<Call, ApiError> {
        self.get_json(&format!("/calls/{id}"), None).await
    }

    async fn create_call(&self, request: &CallRequest) -> Result<Call, ApiError> {
        self.send_json(Method::POST, "/calls", request).await
    }

    async fn initiate_call(&self, request: &CallRequest) -> Result<serde_json::Value, ApiError> {
        self.send_json(Method::POST, "/calls/initiate", request)
            .await
    }

    async fn end_call(&self, id: ResourceId) -> Result<(), ApiError> {
        self.send_unit::<()>(Method::POST, &format!("/calls/{id}/end"), None)
            .await
    }

    async fn list_knowledge_bases(
        &self,
        params: &ListParams,
    ) -> Result<KnowledgeBasePage, ApiError> {
        self.get_json("/knowledge-bases", Some(params)).await
    }

    async fn get_knowledge_base(&self, id: ResourceId) -> Result<KnowledgeBase, ApiError> {
        self.get_json(&format!("/knowledge-bases/{id}"), None).await
    }

    async fn create_knowledge_base(
        &self,
        draft: &KnowledgeBaseDraft,
    ) -> Result<KnowledgeBase, ApiError> {
        self.send_json(Method::POST, "/knowledge-bases", draft)
            .await
    }

    async fn update_knowledge_base(
        &self,
        id: ResourceId,
        draft: &KnowledgeBaseDraft,
    ) -> Result<KnowledgeBase, ApiError> {
        self.send_json(Method::PUT, &format!("/knowledge-bases/{id}"), draft)
            .await
    }

    async fn delete_knowledge_base(&self, id: ResourceId) -> Result<(), ApiError> {
        self.delete(&format!("/knowledge-bases/{id}")).await
    }

    async fn list_phone_numbers(&self, params: &ListParams) -> Result<Vec<PhoneNumber>, ApiError> {
        self.get_json("/phone-numbers", Some(params)).await
    }

    async fn get_phone_number(&self, id: ResourceId) -> Result<PhoneNumber, ApiError> {
        self.get_json(&format!("/phone-numbers/{id}"), None).await
    }

    async fn create_phone_number(
        &self,
        draft: &PhoneNumberDraft,
    ) -> Result<PhoneNumber, ApiError> {
        self.send_json(Method::POST, "/phone-numbers", draft).await
    }

    async fn update_phone_number(
        &self,
        id: ResourceId,
        draft: &PhoneNumberDraft,
    ) -> Result<PhoneNumber, ApiError> {
        self.send_json(Method::PUT, &format!("/phone-numbers/{id}"), draft)
            .await
    }

    async fn delete_phone_number(&self, id: ResourceId) -> Result<(), ApiError> {
        self.delete(&format!("/phone-numbers/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Theme;

    fn gateway(base: &str) -> HttpGateway {
        HttpGateway::new(
            Url::parse(base).unwrap(),
            Arc::new(SessionContext::in_memory(Theme::Light)),
        )
    }

    #[test]
    fn url_keeps_base_path() {
        let gw = gateway("http://localhost:8000/api/v1");
        assert_eq!(
            gw.url("/agents/4").unwrap().as_str(),
            "http://localhost:8000/api/v1/agents/4"
        );

        let gw = gateway("http://localhost:8000/api/v1/");
        assert_eq!(
            gw.url("/calls/initiate").unwrap().as_str(),
            "http://localhost:8000/api/v1/calls/initiate"
        );
    }

    #[test]
    fn error_message_prefers_detail() {
        assert_eq!(error_message(r#"{"detail": "Email already registered"}"#), "Email already registered");
        assert_eq!(error_message(r#"{"message": "bad plan"}"#), "bad plan");
        assert_eq!(error_message("  upstream timeout \n"), "upstream timeout");
    }

    #[test]
    fn error_message_stringifies_structured_detail() {
        let msg = error_message(r#"{"detail": [{"loc": ["body", "name"], "msg": "field required"}]}"#);
        assert!(msg.contains("field required"));
    }

    #[test]
    fn error_message_truncates_long_bodies() {
        let body = "x".repeat(MAX_ERROR_MESSAGE_LENGTH * 2);
        let msg = error_message(&body);
        assert_eq!(msg.chars().count(), MAX_ERROR_MESSAGE_LENGTH + 1);
        assert!(msg.ends_with('…'));
    }
}
