//! Backend REST API access.
//!
//! [`ApiGateway`] is the seam every caller goes through; [`HttpGateway`] is
//! the reqwest-backed implementation. Each operation is one request and one
//! response: no caching, no retries.

pub mod client;
pub mod model;

pub use client::HttpGateway;
pub use model::*;

use async_trait::async_trait;

use crate::error::ApiError;

/// Typed operations exposed by the backend.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    // ── Registration & account ──────────────────────────────────────

    /// `POST /register`.
    async fn register_company(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationReceipt, ApiError>;

    /// `PUT /account/settings`.
    async fn update_account_settings(&self, settings: &AccountSettings) -> Result<(), ApiError>;

    // ── Agents ──────────────────────────────────────────────────────

    async fn list_agents(&self, params: &ListParams) -> Result<AgentPage, ApiError>;

    async fn get_agent(&self, id: ResourceId) -> Result<Agent, ApiError>;

    async fn create_agent(&self, draft: &AgentDraft) -> Result<Agent, ApiError>;

    async fn update_agent(&self, id: ResourceId, draft: &AgentDraft) -> Result<Agent, ApiError>;

    async fn delete_agent(&self, id: ResourceId) -> Result<(), ApiError>;

    // ── Tools ───────────────────────────────────────────────────────

    async fn list_tools(&self, params: &ListParams) -> Result<Vec<Tool>, ApiError>;

    async fn get_tool(&self, id: ResourceId) -> Result<Tool, ApiError>;

    async fn create_tool(&self, draft: &ToolDraft) -> Result<Tool, ApiError>;

    async fn update_tool(&self, id: ResourceId, draft: &ToolDraft) -> Result<Tool, ApiError>;

    async fn delete_tool(&self, id: ResourceId) -> Result<(), ApiError>;

    // ── Calls ───────────────────────────────────────────────────────

    async fn list_calls(&self, params: &ListParams) -> Result<CallPage, ApiError>;

    async fn get_call(&self, id: ResourceId) -> Result<Call, ApiError>;

    /// `POST /calls`: record a call.
    async fn create_call(&self, request: &CallRequest) -> Result<Call, ApiError>;

    /// `POST /calls/initiate`: ask the backend to place an outbound call.
    /// The response shape is backend-defined.
    async fn initiate_call(&self, request: &CallRequest) -> Result<serde_json::Value, ApiError>;

    /// `POST /calls/:id/end`.
    async fn end_call(&self, id: ResourceId) -> Result<(), ApiError>;

    // ── Knowledge bases ─────────────────────────────────────────────

    async fn list_knowledge_bases(
        &self,
        params: &ListParams,
    ) -> Result<KnowledgeBasePage, ApiError>;

    async fn get_knowledge_base(&self, id: ResourceId) -> Result<KnowledgeBase, ApiError>;

    async fn create_knowledge_base(
        &self,
        draft: &KnowledgeBaseDraft,
    ) -> Result<KnowledgeBase, ApiError>;

    async fn update_knowledge_base(
        &self,
        id: ResourceId,
        draft: &KnowledgeBaseDraft,
    ) -> Result<KnowledgeBase, ApiError>;

    async fn delete_knowledge_base(&self, id: ResourceId) -> Result<(), ApiError>;

    // ── Phone numbers ───────────────────────────────────────────────

    async fn list_phone_numbers(&self, params: &ListParams) -> Result<Vec<PhoneNumber>, ApiError>;

    async fn get_phone_number(&self, id: ResourceId) -> Result<PhoneNumber, ApiError>;

    async fn create_phone_number(&self, draft: &PhoneNumberDraft)
    -> Result<PhoneNumber, ApiError>;

    async fn update_phone_number(
        &self,
        id: ResourceId,
        draft: &PhoneNumberDraft,
    ) -> Result<PhoneNumber, ApiError>;

    async fn delete_phone_number(&self, id: ResourceId) -> Result<(), ApiError>;
}
