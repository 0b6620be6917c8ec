//! Multi-step wizards.
//!
//! A [`WizardController`] owns one wizard's step pointer and form data.
//! The concrete wizards plug in through [`WizardFlow`]:
//!
//! - [`RegistrationFlow`]: company, admin, template, plan, review. Success
//!   signs the session in and yields an [`OnboardingHandoff`].
//! - [`OnboardingFlow`]: welcome, agent setup, voice and settings, test
//!   call, complete. Success yields the created agent.

pub mod controller;
pub mod onboarding;
pub mod registration;
pub mod state;
pub mod steps;
pub mod validators;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{WizardController, WizardFlow, WizardPhase};
pub use onboarding::{OnboardingFlow, OnboardingPayload};
pub use registration::{OnboardingHandoff, RegistrationFlow, RegistrationOutcome};
pub use state::{Fields, Section, WizardState};
pub use steps::{OnboardingStep, RegistrationStep, StepKind};
