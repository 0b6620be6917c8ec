//! Wire types for the backend REST API.
//!
//! Field names follow the backend's JSON: snake_case for resources,
//! camelCase for the registration payload.

use serde::{Deserialize, Serialize};

/// Server-assigned numeric id.
pub type ResourceId = i64;

// ── Agents ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub voice_id: String,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub max_tokens: u32,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Partial agent for create/update; unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl AgentDraft {
    /// Defaults used by the console's "create agent" form.
    pub fn console_defaults() -> Self {
        Self {
            name: None,
            description: None,
            instructions: None,
            voice_id: None,
            temperature: Some(5.0),
            max_tokens: Some(1000),
            model: Some("gpt-4".to_string()),
            is_active: Some(true),
        }
    }

    /// Draft that only flips the active flag.
    pub fn activation(active: bool) -> Self {
        Self {
            is_active: Some(active),
            ..Default::default()
        }
    }
}

// ── Tools ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tool_type: String,
    #[serde(default)]
    pub configuration: serde_json::Value,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// ── Calls ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: ResourceId,
    pub agent_id: ResourceId,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub caller_number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub recording_url: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Body for `POST /calls` and `POST /calls/initiate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub agent_id: ResourceId,
    pub phone_number: String,
    pub caller_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

// ── Knowledge bases ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kb_type: String,
    #[serde(default)]
    pub configuration: serde_json::Value,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// ── Phone numbers ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: ResourceId,
    pub phone_number: String,
    #[serde(default)]
    pub agent_id: Option<ResourceId>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumberDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// ── Listing ─────────────────────────────────────────────────────────

/// Pagination and filter query parameters. Unset values are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_only: Option<bool>,
    /// Tools only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_type: Option<String>,
    /// Knowledge bases only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb_type: Option<String>,
    /// Calls and phone numbers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<ResourceId>,
    /// Calls only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<String>,
}

impl ListParams {
    pub fn page(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = Some(true);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentPage {
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallPage {
    #[serde(default)]
    pub calls: Vec<Call>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KnowledgeBasePage {
    #[serde(default)]
    pub knowledge_bases: Vec<KnowledgeBase>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

// ── Registration & account ──────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetails {
    pub name: String,
    pub industry: String,
    pub size: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country: String,
}

/// Admin user details. The confirmation password never leaves the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountPlan {
    pub plan: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Template choice made during registration, handed on to onboarding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateChoice {
    pub selected: bool,
    #[serde(default)]
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub company: CompanyDetails,
    pub admin: AdminDetails,
    pub account: AccountPlan,
    pub template: TemplateChoice,
}

/// Response of `POST /register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    pub company_id: ResourceId,
    pub user_id: ResourceId,
    pub token: String,
}

/// Body of `PUT /account/settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub language: String,
    pub timezone: String,
    pub notifications: bool,
}
