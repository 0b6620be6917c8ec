//! First-run onboarding wizard: set up the first agent and account settings.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use super::controller::{WizardController, WizardFlow};
use super::registration::OnboardingHandoff;
use super::state::{Section, WizardState};
use super::steps::OnboardingStep;
use crate::api::{AccountSettings, Agent, AgentDraft, ApiGateway, TemplateChoice};
use crate::catalog::{DEFAULT_INDUSTRY, TemplateCatalog, TemplatePreset};
use crate::error::ApiError;

pub const DEFAULT_VOICE: &str = "alloy";
pub const DEFAULT_TEMPERATURE: f64 = 7.0;
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEZONE: &str = "Africa/Lagos";

/// Everything onboarding sends, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingPayload {
    pub agent: AgentDraft,
    pub settings: AccountSettings,
}

pub struct OnboardingFlow {
    gateway: Arc<dyn ApiGateway>,
    seed: Option<TemplateChoice>,
}

impl OnboardingFlow {
    /// Onboarding that follows a registration, seeded from its handoff.
    pub fn new(gateway: Arc<dyn ApiGateway>, handoff: Option<OnboardingHandoff>) -> Self {
        Self {
            gateway,
            seed: handoff.map(|h| h.template),
        }
    }

    /// Standalone onboarding seeded from an explicit template choice.
    pub fn with_template(gateway: Arc<dyn ApiGateway>, template: TemplateChoice) -> Self {
        Self {
            gateway,
            seed: Some(template),
        }
    }
}

#[async_trait]
impl WizardFlow for OnboardingFlow {
    type Step = OnboardingStep;
    type Payload = OnboardingPayload;
    type Output = Agent;

    fn name(&self) -> &'static str {
        "onboarding"
    }

    fn steps(&self) -> &'static [OnboardingStep] {
        &OnboardingStep::ALL
    }

    fn initial_state(&self) -> WizardState {
        let mut state = WizardState::new()
            .with(
                Section::Agent,
                json!({
                    "name": "",
                    "description": "",
                    "voice_id": DEFAULT_VOICE,
                    "temperature": DEFAULT_TEMPERATURE,
                    "instructions": "",
                }),
            )
            .with(
                Section::Settings,
                json!({
                    "language": DEFAULT_LANGUAGE,
                    "timezone": DEFAULT_TIMEZONE,
                    "notifications": true,
                }),
            )
            .with(Section::Template, json!({"selected": false, "templateId": ""}));

        let Some(template) = &self.seed else {
            return state;
        };

        if !template.industry.is_empty() {
            state = state.with(Section::Template, json!({"industry": template.industry}));
        }
        if !template.selected {
            return state;
        }

        let template_id = template.template_id.clone().unwrap_or_default();
        state = state.with(
            Section::Template,
            json!({"selected": true, "templateId": template_id}),
        );
        if let Some(preset) = TemplateCatalog::builtin().by_id(&template_id) {
            debug!(template = preset.id, "Prefilling agent from handed-off template");
            state = state.with(Section::Agent, preset_fields(preset));
        }
        state
    }

    fn payload(&self, state: &WizardState) -> OnboardingPayload {
        let agent = |key: &str| state.text(Section::Agent, key).to_string();

        OnboardingPayload {
            agent: AgentDraft {
                name: Some(agent("name")),
                description: Some(agent("description")),
                instructions: Some(agent("instructions")),
                voice_id: Some(agent("voice_id")),
                temperature: Some(
                    state
                        .number(Section::Agent, "temperature")
                        .unwrap_or(DEFAULT_TEMPERATURE),
                ),
                is_active: Some(true),
                ..Default::default()
            },
            settings: AccountSettings {
                language: state.text(Section::Settings, "language").to_string(),
                timezone: state.text(Section::Settings, "timezone").to_string(),
                notifications: state.flag(Section::Settings, "notifications"),
            },
        }
    }

    /// Create the agent, then save account settings. A retry after a failed
    /// settings update creates the agent again.
    async fn deliver(&self, payload: &OnboardingPayload) -> Result<Agent, ApiError> {
        let agent = self.gateway.create_agent(&payload.agent).await?;
        info!(agent_id = agent.id, name = %agent.name, "Agent created");

        self.gateway
            .update_account_settings(&payload.settings)
            .await?;
        info!(
            language = %payload.settings.language,
            timezone = %payload.settings.timezone,
            "Account settings saved"
        );
        Ok(agent)
    }
}

fn preset_fields(preset: &TemplatePreset) -> serde_json::Value {
    json!({
        "name": preset.name,
        "description": preset.description,
        "instructions": preset.instructions,
    })
}

impl WizardController<OnboardingFlow> {
    /// Industry whose templates the agent step offers.
    pub fn agent_industry(&self) -> &str {
        let industry = self.state().text(Section::Template, "industry");
        if industry.is_empty() {
            DEFAULT_INDUSTRY
        } else {
            industry
        }
    }

    pub fn available_templates(&self) -> &'static [TemplatePreset] {
        let catalog = TemplateCatalog::builtin();
        catalog.by_industry(self.agent_industry())
    }

    /// Replace name, description and instructions with the preset's.
    pub fn select_template(&mut self, preset: &TemplatePreset) {
        self.update(Section::Agent, preset_fields(preset));
        self.update(
            Section::Template,
            json!({"selected": true, "templateId": preset.id}),
        );
    }

    /// Select a preset by id. Returns `false` for unknown ids.
    pub fn select_template_by_id(&mut self, template_id: &str) -> bool {
        match TemplateCatalog::builtin().by_id(template_id) {
            Some(preset) => {
                self.select_template(preset);
                true
            }
            None => false,
        }
    }

    /// Start from a blank agent instead of a preset.
    pub fn use_custom_agent(&mut self) {
        self.update(
            Section::Agent,
            json!({"name": "", "description": "", "instructions": ""}),
        );
        self.update(
            Section::Template,
            json!({"selected": false, "templateId": ""}),
        );
    }

    pub fn select_voice(&mut self, voice_id: &str) {
        self.update(Section::Agent, json!({"voice_id": voice_id}));
    }
}
