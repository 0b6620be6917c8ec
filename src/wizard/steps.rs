//! Fixed step sequences of each wizard.
//!
//! Steps form a closed set, so rendering and validation dispatch with a
//! `match` over [`StepKind`].

use serde::{Deserialize, Serialize};

/// Registration wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    CompanyInfo,
    AdminDetails,
    IndustryTemplate,
    PlanSelection,
    Review,
}

impl RegistrationStep {
    pub const ALL: [RegistrationStep; 5] = [
        Self::CompanyInfo,
        Self::AdminDetails,
        Self::IndustryTemplate,
        Self::PlanSelection,
        Self::Review,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::CompanyInfo => "Company Info",
            Self::AdminDetails => "Admin Details",
            Self::IndustryTemplate => "Industry & Template",
            Self::PlanSelection => "Plan Selection",
            Self::Review => "Review & Create",
        }
    }
}

impl std::fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Onboarding wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    AgentSetup,
    VoiceSettings,
    TestCall,
    Complete,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        Self::Welcome,
        Self::AgentSetup,
        Self::VoiceSettings,
        Self::TestCall,
        Self::Complete,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::AgentSetup => "Agent Setup",
            Self::VoiceSettings => "Voice & Settings",
            Self::TestCall => "Test Call",
            Self::Complete => "Complete",
        }
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Every step of every wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "wizard", content = "step", rename_all = "snake_case")]
pub enum StepKind {
    Registration(RegistrationStep),
    Onboarding(OnboardingStep),
}

impl StepKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Registration(step) => step.title(),
            Self::Onboarding(step) => step.title(),
        }
    }
}

impl From<RegistrationStep> for StepKind {
    fn from(step: RegistrationStep) -> Self {
        Self::Registration(step)
    }
}

impl From<OnboardingStep> for StepKind {
    fn from(step: OnboardingStep) -> Self {
        Self::Onboarding(step)
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_wizards_have_five_steps() {
        assert_eq!(RegistrationStep::ALL.len(), 5);
        assert_eq!(OnboardingStep::ALL.len(), 5);
        assert_eq!(RegistrationStep::ALL[0], RegistrationStep::CompanyInfo);
        assert_eq!(OnboardingStep::ALL[4], OnboardingStep::Complete);
    }

    #[test]
    fn step_kind_serializes_tagged() {
        let kind = StepKind::from(RegistrationStep::PlanSelection);
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, serde_json::json!({"wizard": "registration", "step": "plan_selection"}));
        assert_eq!(kind.to_string(), "Plan Selection");
    }
}
