//! Step validators: pure predicates over [`WizardState`].
//!
//! Validators never do I/O and never fail: an incomplete step is simply
//! `false`, with [`missing_fields`] explaining why.

use tracing::debug;

use super::state::{Section, WizardState};
use super::steps::{OnboardingStep, RegistrationStep, StepKind};

/// Minimum admin password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Whether `step` is complete given `state`.
pub fn validate(step: StepKind, state: &WizardState) -> bool {
    let missing = missing_fields(step, state);
    debug!(%step, valid = missing.is_empty(), ?missing, "Step validated");
    missing.is_empty()
}

/// Human-readable list of what still blocks `step`. Empty when valid.
pub fn missing_fields(step: StepKind, state: &WizardState) -> Vec<&'static str> {
    match step {
        StepKind::Registration(step) => registration(step, state),
        StepKind::Onboarding(step) => onboarding(step, state),
    }
}

fn registration(step: RegistrationStep, state: &WizardState) -> Vec<&'static str> {
    let mut missing = Vec::new();
    match step {
        RegistrationStep::CompanyInfo => {
            require(&mut missing, state, Section::Company, "name", "company name");
            require(&mut missing, state, Section::Company, "industry", "industry");
            require(&mut missing, state, Section::Company, "size", "company size");
        }
        RegistrationStep::AdminDetails => {
            require(&mut missing, state, Section::Admin, "firstName", "first name");
            require(&mut missing, state, Section::Admin, "lastName", "last name");
            require(&mut missing, state, Section::Admin, "email", "email");

            let password = state.text(Section::Admin, "password");
            let confirmation = state.text(Section::Admin, "confirmPassword");
            if password.chars().count() < MIN_PASSWORD_LENGTH {
                missing.push("password of at least 8 characters");
            }
            if password != confirmation {
                missing.push("matching password confirmation");
            }
        }
        RegistrationStep::PlanSelection => {
            require(&mut missing, state, Section::Account, "plan", "plan");
        }
        // Template choice is optional; review is read-only.
        RegistrationStep::IndustryTemplate | RegistrationStep::Review => {}
    }
    missing
}

fn onboarding(step: OnboardingStep, state: &WizardState) -> Vec<&'static str> {
    let mut missing = Vec::new();
    match step {
        OnboardingStep::AgentSetup => {
            require(&mut missing, state, Section::Agent, "name", "agent name");
            require(&mut missing, state, Section::Agent, "description", "agent description");
        }
        OnboardingStep::Welcome
        | OnboardingStep::VoiceSettings
        | OnboardingStep::TestCall
        | OnboardingStep::Complete => {}
    }
    missing
}

fn require(
    missing: &mut Vec<&'static str>,
    state: &WizardState,
    section: Section,
    key: &str,
    label: &'static str,
) {
    if !state.has_text(section, key) {
        missing.push(label);
    }
}
