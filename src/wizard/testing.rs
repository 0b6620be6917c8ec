//! Scripted in-memory gateway for wizard unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::*;
use crate::error::ApiError;

/// Returns queued results for the wizard-facing operations and records what
/// it was sent. Every other operation answers 501.
#[derive(Default)]
pub struct StubGateway {
    pub registration_results: Mutex<VecDeque<Result<RegistrationReceipt, ApiError>>>,
    pub agent_results: Mutex<VecDeque<Result<Agent, ApiError>>>,
    pub settings_results: Mutex<VecDeque<Result<(), ApiError>>>,
    pub registrations: Mutex<Vec<RegistrationPayload>>,
    pub created_agents: Mutex<Vec<AgentDraft>>,
    pub settings: Mutex<Vec<AccountSettings>>,
}

impl StubGateway {
    pub fn queue_registration(&self, result: Result<RegistrationReceipt, ApiError>) {
        self.registration_results.lock().unwrap().push_back(result);
    }

    pub fn queue_agent(&self, result: Result<Agent, ApiError>) {
        self.agent_results.lock().unwrap().push_back(result);
    }

    pub fn queue_settings(&self, result: Result<(), ApiError>) {
        self.settings_results.lock().unwrap().push_back(result);
    }
}

pub fn agent(id: ResourceId, name: &str) -> Agent {
    Agent {
        id,
        name: name.to_string(),
        description: String::new(),
        instructions: String::new(),
        voice_id: "alloy".to_string(),
        temperature: 7.0,
        max_tokens: 150,
        model: "gpt-4".to_string(),
        is_active: true,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

pub fn server_error(path: &str) -> ApiError {
    ApiError::Status {
        path: path.to_string(),
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "internal error".to_string(),
    }
}

fn unsupported<T>(path: &str) -> Result<T, ApiError> {
    Err(ApiError::Status {
        path: path.to_string(),
        status: StatusCode::NOT_IMPLEMENTED,
        message: "not scripted".to_string(),
    })
}

fn next<T>(queue: &Mutex<VecDeque<Result<T, ApiError>>>, path: &str) -> Result<T, ApiError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| unsupported(path))
}

#[async_trait]
impl ApiGateway for StubGateway {
    async fn register_company(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationReceipt, ApiError> {
        self.registrations.lock().unwrap().push(payload.clone());
        next(&self.registration_results, "/register")
    }

    async fn update_account_settings(&self, settings: &AccountSettings) -> Result<(), ApiError> {
        self.settings.lock().unwrap().push(settings.clone());
        next(&self.settings_results, "/account/settings")
    }

    async fn list_agents(&self, _: &ListParams) -> Result<AgentPage, ApiError> {
        unsupported("/agents")
    }

    async fn get_agent(&self, _: ResourceId) -> Result<Agent, ApiError> {
        unsupported("/agents/:id")
    }

    async fn create_agent(&self, draft: &AgentDraft) -> Result<Agent, ApiError> {
        self.created_agents.lock().unwrap().push(draft.clone());
        next(&self.agent_results, "/agents")
    }

    async fn update_agent(&self, _: ResourceId, _: &AgentDraft) -> Result<Agent, ApiError> {
        unsupported("/agents/:id")
    }

    async fn delete_agent(&self, _: ResourceId) -> Result<(), ApiError> {
        unsupported("/agents/:id")
    }

    async fn list_tools(&self, _: &ListParams) -> Result<Vec<Tool>, ApiError> {
        unsupported("/tools")
    }

    async fn get_tool(&self, _: ResourceId) -> Result<Tool, ApiError> {
        unsupported("/tools/:id")
    }

    async fn create_tool(&self, _: &ToolDraft) -> Result<Tool, ApiError> {
        unsupported("/tools")
    }

    async fn update_tool(&self, _: ResourceId, _: &ToolDraft) -> Result<Tool, ApiError> {
        unsupported("/tools/:id")
    }

    async fn delete_tool(&self, _: ResourceId) -> Result<(), ApiError> {
        unsupported("/tools/:id")
    }

    async fn list_calls(&self, _: &ListParams) -> Result<CallPage, ApiError> {
        unsupported("/calls")
    }

    async fn get_call(&self, _: ResourceId) -> Result<Call, ApiError> {
        unsupported("/calls/:id")
    }

    async fn create_call(&self, _: &CallRequest) -> Result<Call, ApiError> {
        unsupported("/calls")
    }

    async fn initiate_call(&self, _: &CallRequest) -> Result<serde_json::Value, ApiError> {
        unsupported("/calls/initiate")
    }

    async fn end_call(&self, _: ResourceId) -> Result<(), ApiError> {
        unsupported("/calls/:id/end")
    }

    async fn list_knowledge_bases(&self, _: &ListParams) -> Result<KnowledgeBasePage, ApiError> {
        unsupported("/knowledge-bases")
    }

    async fn get_knowledge_base(&self, _: ResourceId) -> Result<KnowledgeBase, ApiError> {
        unsupported("/knowledge-bases/:id")
    }

    async fn create_knowledge_base(
        &self,
        _: &KnowledgeBaseDraft,
    ) -> Result<KnowledgeBase, ApiError> {
        unsupported("/knowledge-bases")
    }

    async fn update_knowledge_base(
        &self,
        _: ResourceId,
        _: &KnowledgeBaseDraft,
    ) -> Result<KnowledgeBase, ApiError> {
        unsupported("/knowledge-bases/:id")
    }

    async fn delete_knowledge_base(&self, _: ResourceId) -> Result<(), ApiError> {
        unsupported("/knowledge-bases/:id")
    }

    async fn list_phone_numbers(&self, _: &ListParams) -> Result<Vec<PhoneNumber>, ApiError> {
        unsupported("/phone-numbers")
    }

    async fn get_phone_number(&self, _: ResourceId) -> Result<PhoneNumber, ApiError> {
        unsupported("/phone-numbers/:id")
    }

    async fn create_phone_number(&self, _: &PhoneNumberDraft) -> Result<PhoneNumber, ApiError> {
        unsupported("/phone-numbers")
    }

    async fn update_phone_number(
        &self,
        _: ResourceId,
        _: &PhoneNumberDraft,
    ) -> Result<PhoneNumber, ApiError> {
        unsupported("/phone-numbers/:id")
    }

    async fn delete_phone_number(&self, _: ResourceId) -> Result<(), ApiError> {
        unsupported("/phone-numbers/:id")
    }
}
