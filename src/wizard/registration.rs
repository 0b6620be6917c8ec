//! Company registration wizard.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::controller::{WizardController, WizardFlow};
use super::state::{Section, WizardState};
use super::steps::RegistrationStep;
use crate::api::{
    AccountPlan, AdminDetails, ApiGateway, CompanyDetails, RegistrationPayload, ResourceId,
    TemplateChoice,
};
use crate::error::ApiError;
use crate::session::SessionContext;

/// What a finished registration produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    pub company_id: ResourceId,
    pub user_id: ResourceId,
    /// The template choice as submitted.
    pub template: TemplateChoice,
}

impl RegistrationOutcome {
    /// One-shot value that seeds the onboarding wizard.
    pub fn handoff(&self) -> OnboardingHandoff {
        OnboardingHandoff {
            company_id: self.company_id,
            template: self.template.clone(),
        }
    }
}

/// Carries the registration template choice into onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingHandoff {
    pub company_id: ResourceId,
    pub template: TemplateChoice,
}

/// Registration wizard: company, admin, template, plan, review.
///
/// On success the issued token is stored in the session, so every later
/// gateway call is authenticated.
pub struct RegistrationFlow {
    gateway: Arc<dyn ApiGateway>,
    session: Arc<SessionContext>,
}

impl RegistrationFlow {
    pub fn new(gateway: Arc<dyn ApiGateway>, session: Arc<SessionContext>) -> Self {
        Self { gateway, session }
    }
}

#[async_trait]
impl WizardFlow for RegistrationFlow {
    type Step = RegistrationStep;
    type Payload = RegistrationPayload;
    type Output = RegistrationOutcome;

    fn name(&self) -> &'static str {
        "registration"
    }

    fn steps(&self) -> &'static [RegistrationStep] {
        &RegistrationStep::ALL
    }

    fn initial_state(&self) -> WizardState {
        WizardState::new()
            .with(
                Section::Company,
                json!({
                    "name": "",
                    "industry": "",
                    "size": "",
                    "website": "",
                    "phone": "",
                    "address": "",
                    "country": "",
                }),
            )
            .with(
                Section::Admin,
                json!({
                    "firstName": "",
                    "lastName": "",
                    "email": "",
                    "phone": "",
                    "role": "",
                    "password": "",
                    "confirmPassword": "",
                }),
            )
            .with(Section::Account, json!({"plan": "", "features": []}))
            .with(
                Section::Template,
                json!({"selected": false, "industry": "", "templateId": ""}),
            )
    }

    fn payload(&self, state: &WizardState) -> RegistrationPayload {
        let company = |key: &str| state.text(Section::Company, key).to_string();
        let admin = |key: &str| state.text(Section::Admin, key).to_string();

        RegistrationPayload {
            company: CompanyDetails {
                name: company("name"),
                industry: company("industry"),
                size: company("size"),
                website: company("website"),
                phone: company("phone"),
                address: company("address"),
                country: company("country"),
            },
            admin: AdminDetails {
                first_name: admin("firstName"),
                last_name: admin("lastName"),
                email: admin("email"),
                phone: admin("phone"),
                role: admin("role"),
                password: admin("password"),
            },
            account: AccountPlan {
                plan: state.text(Section::Account, "plan").to_string(),
                features: state.strings(Section::Account, "features"),
            },
            template: TemplateChoice {
                selected: state.flag(Section::Template, "selected"),
                industry: state.text(Section::Template, "industry").to_string(),
                template_id: state.optional_text(Section::Template, "templateId"),
            },
        }
    }

    async fn deliver(&self, payload: &RegistrationPayload) -> Result<RegistrationOutcome, ApiError> {
        let receipt = self.gateway.register_company(payload).await?;
        info!(
            company_id = receipt.company_id,
            user_id = receipt.user_id,
            "Company registered"
        );

        // The account exists server-side at this point; a local write failure
        // only costs the user a sign-in.
        if let Err(e) = self.session.sign_in(receipt.token).await {
            warn!("Failed to persist session after registration: {}", e);
        }

        Ok(RegistrationOutcome {
            company_id: receipt.company_id,
            user_id: receipt.user_id,
            template: payload.template.clone(),
        })
    }
}

impl WizardController<RegistrationFlow> {
    /// Pick the company industry; the template step follows it.
    pub fn select_industry(&mut self, industry: &str) {
        self.update(Section::Company, json!({"industry": industry}));
        self.update(Section::Template, json!({"industry": industry}));
    }

    pub fn select_template(&mut self, template_id: &str) {
        self.update(
            Section::Template,
            json!({"selected": true, "templateId": template_id}),
        );
    }

    /// Pick a plan. The feature list is left for the backend to fill.
    pub fn select_plan(&mut self, plan_id: &str) {
        self.update(Section::Account, json!({"plan": plan_id}));
    }
}
