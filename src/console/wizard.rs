//! Interactive wizard screens.
//!
//! Each step is rendered by a `match` over its step enum; the navigation
//! loop is shared between wizards.

use serde_json::json;
use super::{Console, Nav, Prompter, render};
use crate::api::Agent;
use crate::catalog::{
    COMPANY_SIZES, INDUSTRIES, LANGUAGES, PLANS, TIMEZONES, TemplateCatalog, VOICES,
    industry_display_name,
};
use crate::error::{ApiError, ConsoleError, SubmitError};
use crate::wizard::{
    OnboardingFlow, OnboardingStep, RegistrationFlow, RegistrationOutcome, RegistrationStep,
    Section, WizardController, WizardFlow,
};

/// Fills one step of a wizard from the console.
trait StepForm: WizardFlow + Sized {
    fn fill<P: Prompter>(
        console: &mut Console<P>,
        controller: &mut WizardController<Self>,
        step: Self::Step,
    ) -> Result<(), ConsoleError>;
}

/// User-facing text for a failed submission.
pub fn describe_submit_error(error: &SubmitError) -> String {
    match error {
        SubmitError::Api(ApiError::Unauthorized) => {
            "Your session has expired. Please sign in again.".to_string()
        }
        SubmitError::Incomplete { step } => format!("Step '{step}' still needs attention."),
        other => other.to_string(),
    }
}

async fn drive<F, P>(
    console: &mut Console<P>,
    controller: &mut WizardController<F>,
) -> Result<Option<F::Output>, ConsoleError>
where
    F: StepForm,
    P: Prompter,
{
    loop {
        if let Some(output) = controller.output() {
            return Ok(Some(output.clone()));
        }

        let step = controller.current_step_kind();
        println!(
            "\n── Step {}/{}: {} ──",
            controller.current_step(),
            controller.step_count(),
            step
        );
        F::fill(console, controller, step)?;

        if let Some(error) = controller.last_error() {
            println!("  ! Last submission failed: {error}");
        }
        let missing = controller.missing_fields();
        if !missing.is_empty() {
            println!("  Still needed: {}", missing.join(", "));
        }

        match console.nav(controller.is_first_step(), controller.is_final_step())? {
            Nav::Next => {
                if !controller.advance() {
                    println!("  Complete this step before moving on.");
                }
            }
            Nav::Back => {
                controller.retreat();
            }
            Nav::Submit => {
                println!("  Submitting…");
                if let Err(e) = controller.submit().await {
                    println!("  ! {}", describe_submit_error(&e));
                }
            }
            Nav::Edit => {}
            Nav::Quit => return Ok(None),
        }
    }
}

/// Run the registration wizard. `None` when the user quit.
pub async fn run_registration<P: Prompter>(
    console: &mut Console<P>,
    controller: &mut WizardController<RegistrationFlow>,
) -> Result<Option<RegistrationOutcome>, ConsoleError> {
    drive(console, controller).await
}

/// Run the onboarding wizard. Returns the created agent, `None` when the
/// user quit.
pub async fn run_onboarding<P: Prompter>(
    console: &mut Console<P>,
    controller: &mut WizardController<OnboardingFlow>,
) -> Result<Option<Agent>, ConsoleError> {
    drive(console, controller).await
}

impl StepForm for RegistrationFlow {
    fn fill<P: Prompter>(
        console: &mut Console<P>,
        c: &mut WizardController<Self>,
        step: RegistrationStep,
    ) -> Result<(), ConsoleError> {
        match step {
            RegistrationStep::CompanyInfo => {
                let name = console.ask("Company name", c.state().text(Section::Company, "name"))?;
                c.update(Section::Company, json!({"name": name}));

                let industries: Vec<_> = INDUSTRIES
                    .iter()
                    .map(|i| (i.id, format!("{} - {}", i.name, i.description)))
                    .collect();
                let current = c.state().text(Section::Company, "industry").to_string();
                let industry = console.choose("Industry", &industries, &current)?;
                c.select_industry(&industry);

                let sizes: Vec<_> = COMPANY_SIZES
                    .iter()
                    .map(|s| (s.id, format!("{} ({})", s.name, s.description)))
                    .collect();
                let current = c.state().text(Section::Company, "size").to_string();
                let size = console.choose("Company size", &sizes, &current)?;
                c.update(Section::Company, json!({"size": size}));

                for (key, label) in [
                    ("website", "Website"),
                    ("phone", "Phone"),
                    ("address", "Address"),
                    ("country", "Country"),
                ] {
                    let value = console.ask(label, c.state().text(Section::Company, key))?;
                    c.update(Section::Company, json!({ key: value }));
                }
            }
            RegistrationStep::AdminDetails => {
                for (key, label) in [
                    ("firstName", "First name"),
                    ("lastName", "Last name"),
                    ("email", "Email"),
                    ("phone", "Phone"),
                    ("role", "Role"),
                ] {
                    let value = console.ask(label, c.state().text(Section::Admin, key))?;
                    c.update(Section::Admin, json!({ key: value }));
                }
                let password =
                    console.ask_secret("Password", c.state().text(Section::Admin, "password"))?;
                let confirmation = console.ask_secret(
                    "Confirm password",
                    c.state().text(Section::Admin, "confirmPassword"),
                )?;
                c.update(
                    Section::Admin,
                    json!({"password": password, "confirmPassword": confirmation}),
                );
            }
            RegistrationStep::IndustryTemplate => {
                let industry = c.state().text(Section::Template, "industry").to_string();
                let presets = TemplateCatalog::builtin().by_industry(&industry);
                if presets.is_empty() {
                    println!("  No templates for this industry; you can set up an agent later.");
                    return Ok(());
                }
                println!("  Templates for {}:", industry_display_name(&industry));
                let mut options: Vec<_> = presets
                    .iter()
                    .map(|p| (p.id, format!("{} - {}", p.name, p.description)))
                    .collect();
                options.push(("none", "Skip, I'll configure my own agent".to_string()));

                let current = if c.state().flag(Section::Template, "selected") {
                    c.state().text(Section::Template, "templateId").to_string()
                } else {
                    "none".to_string()
                };
                match console.choose("Template", &options, &current)?.as_str() {
                    "none" => c.update(
                        Section::Template,
                        json!({"selected": false, "templateId": ""}),
                    ),
                    id => c.select_template(id),
                }
            }
            RegistrationStep::PlanSelection => {
                let plans: Vec<_> = PLANS
                    .iter()
                    .map(|p| {
                        let popular = if p.popular { "  [most popular]" } else { "" };
                        (
                            p.id,
                            format!("{} {}{} - {}{popular}", p.name, p.price, p.period, p.description),
                        )
                    })
                    .collect();
                let current = c.state().text(Section::Account, "plan").to_string();
                let plan = console.choose("Plan", &plans, &current)?;
                c.select_plan(&plan);
            }
            RegistrationStep::Review => {
                let s = c.state();
                println!(
                    "  Company:  {} ({}, {})",
                    s.text(Section::Company, "name"),
                    industry_display_name(s.text(Section::Company, "industry")),
                    s.text(Section::Company, "size")
                );
                println!(
                    "  Admin:    {} {} <{}>",
                    s.text(Section::Admin, "firstName"),
                    s.text(Section::Admin, "lastName"),
                    s.text(Section::Admin, "email")
                );
                let template = if s.flag(Section::Template, "selected") {
                    s.text(Section::Template, "templateId")
                } else {
                    "none"
                };
                println!("  Template: {template}");
                println!("  Plan:     {}", s.text(Section::Account, "plan"));
            }
        }
        Ok(())
    }
}

impl StepForm for OnboardingFlow {
    fn fill<P: Prompter>(
        console: &mut Console<P>,
        c: &mut WizardController<Self>,
        step: OnboardingStep,
    ) -> Result<(), ConsoleError> {
        match step {
            OnboardingStep::Welcome => {
                println!("  Welcome! In a few steps you'll have your first AI voice agent ready.");
                println!("  We'll set up the agent, pick its voice, and save your preferences.");
            }
            OnboardingStep::AgentSetup => {
                println!(
                    "  Templates for {}:",
                    industry_display_name(c.agent_industry())
                );
                let mut options = vec![("keep", "Keep the current details".to_string())];
                options.extend(
                    c.available_templates()
                        .iter()
                        .map(|p| (p.id, format!("{} - {}", p.name, p.description))),
                );
                options.push(("custom", "Custom agent".to_string()));

                match console.choose("Start from", &options, "keep")?.as_str() {
                    "keep" => {}
                    "custom" => c.use_custom_agent(),
                    id => {
                        c.select_template_by_id(id);
                    }
                }

                for (key, label) in [
                    ("name", "Agent name"),
                    ("description", "Description"),
                    ("instructions", "Instructions"),
                ] {
                    let current = c.state().text(Section::Agent, key);
                    let shown = render::truncate(current, 60);
                    let value = console.ask(label, &shown)?;
                    if value != shown {
                        c.update(Section::Agent, json!({ key: value }));
                    }
                }
            }
            OnboardingStep::VoiceSettings => {
                let voices: Vec<_> = VOICES
                    .iter()
                    .map(|v| (v.id, format!("{} - {}", v.name, v.description)))
                    .collect();
                let current = c.state().text(Section::Agent, "voice_id").to_string();
                let voice = console.choose("Voice", &voices, &current)?;
                c.select_voice(&voice);

                let current = c.state().number(Section::Agent, "temperature").unwrap_or(7.0);
                let answer = console.ask("Creativity (0-10)", &current.to_string())?;
                match answer.parse::<f64>() {
                    Ok(value) if (0.0..=10.0).contains(&value) => {
                        c.update(Section::Agent, json!({"temperature": value}));
                    }
                    _ => println!("  Keeping creativity at {current}."),
                }

                let languages: Vec<_> = LANGUAGES.iter().map(|l| (l.code, l.name.to_string())).collect();
                let current = c.state().text(Section::Settings, "language").to_string();
                let language = console.choose("Language", &languages, &current)?;

                let zones: Vec<_> = TIMEZONES.iter().map(|t| (t.value, t.label.to_string())).collect();
                let current = c.state().text(Section::Settings, "timezone").to_string();
                let timezone = console.choose("Timezone", &zones, &current)?;

                let current = c.state().flag(Section::Settings, "notifications");
                let notifications = console.confirm("Email notifications", current)?;
                c.update(
                    Section::Settings,
                    json!({
                        "language": language,
                        "timezone": timezone,
                        "notifications": notifications,
                    }),
                );
            }
            OnboardingStep::TestCall => {
                println!(
                    "  Your agent \"{}\" will answer with the {} voice.",
                    c.state().text(Section::Agent, "name"),
                    c.state().text(Section::Agent, "voice_id")
                );
                println!("  Once setup is complete, place a test call with `voiceflow calls initiate`.");
            }
            OnboardingStep::Complete => {
                println!("  All set. Submit to create your agent and save your settings.");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::RegistrationReceipt;
    use crate::console::ScriptedPrompter;
    use crate::session::{SessionContext, Theme};
    use crate::wizard::testing::StubGateway;

    #[tokio::test]
    async fn scripted_registration_reaches_submitted() {
        let gateway = Arc::new(StubGateway::default());
        gateway.queue_registration(Ok(RegistrationReceipt {
            company_id: 3,
            user_id: 9,
            token: "tok".to_string(),
        }));
        let session = Arc::new(SessionContext::in_memory(Theme::Light));
        let mut controller =
            WizardController::new(RegistrationFlow::new(gateway.clone(), session.clone()));

        let script = concat!(
            // company: name, industry, size, website, phone, address, country, nav
            "Acme\n1\nsmall\n\n\n\n\nn\n",
            // admin: first, last, email, phone, role, password, confirm, nav
            "Ada\nObi\nada@acme.io\n\n\nlongenough1\nlongenough1\nn\n",
            // template, nav
            "2\nn\n",
            // plan, nav
            "professional\nn\n",
            // review, submit
            "s\n",
        );
        let mut console = Console::new(ScriptedPrompter::new(script));
        let outcome = run_registration(&mut console, &mut controller)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(outcome.company_id, 3);
        assert_eq!(outcome.template.template_id.as_deref(), Some("re-rental-agent"));
        assert!(session.is_signed_in().await);
        let sent = gateway.registrations.lock().unwrap();
        assert_eq!(sent[0].company.industry, "real-estate");
        assert_eq!(sent[0].account.plan, "professional");
    }

    #[tokio::test]
    async fn blocked_step_stays_put_until_filled() {
        let gateway = Arc::new(StubGateway::default());
        let mut controller = WizardController::new(OnboardingFlow::new(gateway, None));

        let script = concat!(
            "n\n",             // welcome
            "custom\n\n\n\nn\n", // agent setup left empty, next refused
            "\nFront desk\nGreets callers\n\nq\n",
        );
        let mut console = Console::new(ScriptedPrompter::new(script));
        let result = run_onboarding(&mut console, &mut controller).await.unwrap();

        assert!(result.is_none());
        assert_eq!(controller.current_step_kind(), OnboardingStep::AgentSetup);
        assert!(controller.can_proceed());
    }

    #[tokio::test]
    async fn closed_input_aborts() {
        let gateway = Arc::new(StubGateway::default());
        let mut controller = WizardController::new(OnboardingFlow::new(gateway, None));
        let mut console = Console::new(ScriptedPrompter::new("n\n"));
        assert!(matches!(
            run_onboarding(&mut console, &mut controller).await,
            Err(ConsoleError::Closed)
        ));
    }

    #[test]
    fn unauthorized_submit_asks_to_sign_in() {
        let text = describe_submit_error(&SubmitError::Api(ApiError::Unauthorized));
        assert!(text.contains("sign in again"));
    }
}
