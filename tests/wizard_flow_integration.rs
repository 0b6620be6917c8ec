//! End-to-end wizard runs against the mock backend.

mod common;

use std::sync::Arc;

use serde_json::json;
use tokio::time::timeout;

use common::{ISSUED_TOKEN, TEST_TIMEOUT, start_backend};
use voiceflow::api::{ApiGateway, HttpGateway};
use voiceflow::error::{ApiError, SubmitError};
use voiceflow::session::{SessionContext, Theme};
use voiceflow::wizard::{
    OnboardingFlow, OnboardingStep, RegistrationFlow, RegistrationStep, Section, WizardController,
    WizardPhase,
};

fn fill_registration(c: &mut WizardController<RegistrationFlow>, company: &str) {
    c.update(Section::Company, json!({"name": company, "size": "medium"}));
    c.select_industry("hotels-&-hospitality");
    assert!(c.advance());

    c.update(
        Section::Admin,
        json!({
            "firstName": "Chidi",
            "lastName": "Eze",
            "email": "chidi@example.com",
            "password": "longenough1",
            "confirmPassword": "longenough1",
        }),
    );
    assert!(c.advance());

    c.select_template("hotel-concierge");
    assert!(c.advance());

    c.select_plan("starter");
    assert!(c.advance());
    assert_eq!(c.current_step_kind(), RegistrationStep::Review);
}

#[tokio::test]
async fn register_then_onboard() {
    timeout(TEST_TIMEOUT, async {
        let (base, backend) = start_backend().await;
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");
        let session = Arc::new(SessionContext::load(&session_path, Theme::Dark).await.unwrap());
        let gateway: Arc<dyn ApiGateway> = Arc::new(HttpGateway::new(
            reqwest::Url::parse(&base).unwrap(),
            Arc::clone(&session),
        ));

        // ── Registration ───────────────────────────────────────────────
        let mut registration = WizardController::new(RegistrationFlow::new(
            Arc::clone(&gateway),
            Arc::clone(&session),
        ));
        fill_registration(&mut registration, "Lagoon Suites");
        let outcome = registration.submit().await.unwrap();
        assert_eq!(outcome.company_id, 7);
        assert_eq!(outcome.user_id, 11);

        let sent = backend.requests_to("POST", "/register");
        assert_eq!(sent.len(), 1);
        let body = &sent[0].body;
        assert_eq!(body["company"]["industry"], "hotels-&-hospitality");
        assert_eq!(body["admin"]["firstName"], "Chidi");
        assert!(body["admin"].get("confirmPassword").is_none());
        assert_eq!(body["account"]["plan"], "starter");
        assert_eq!(body["template"]["templateId"], "hotel-concierge");
        assert!(sent[0].authorization.is_none());

        // The issued token survives a reload.
        let reloaded = SessionContext::load(&session_path, Theme::Light).await.unwrap();
        assert_eq!(
            reloaded.bearer().await.as_deref(),
            Some(format!("Bearer {ISSUED_TOKEN}").as_str())
        );
        assert_eq!(reloaded.theme().await, Theme::Dark);

        // ── Onboarding ─────────────────────────────────────────────────
        let mut onboarding = WizardController::new(OnboardingFlow::new(
            Arc::clone(&gateway),
            Some(outcome.handoff()),
        ));
        assert_eq!(onboarding.agent_industry(), "hotels-&-hospitality");
        assert_eq!(
            onboarding.state().text(Section::Agent, "name"),
            "Hotel Concierge"
        );
        onboarding.select_voice("onyx");
        onboarding.update(Section::Settings, json!({"timezone": "Europe/London"}));
        while onboarding.advance() {}
        assert_eq!(onboarding.current_step_kind(), OnboardingStep::Complete);

        let agent = onboarding.submit().await.unwrap();
        assert_eq!(agent.id, 42);
        assert_eq!(agent.name, "Hotel Concierge");

        let created = backend.requests_to("POST", "/agents");
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].body["voice_id"], "onyx");
        assert_eq!(created[0].body["is_active"], true);
        assert_eq!(
            created[0].authorization.as_deref(),
            Some(format!("Bearer {ISSUED_TOKEN}").as_str())
        );

        let settings = backend.requests_to("PUT", "/account/settings");
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].body["timezone"], "Europe/London");
        assert_eq!(settings[0].body["language"], "en-US");

        // Agent creation happens before the settings update.
        let order: Vec<_> = backend
            .requests()
            .into_iter()
            .map(|r| r.path)
            .filter(|p| p == "/agents" || p == "/account/settings")
            .collect();
        assert_eq!(order, vec!["/agents", "/account/settings"]);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn rejected_registration_keeps_form_and_shows_detail() {
    timeout(TEST_TIMEOUT, async {
        let (base, _backend) = start_backend().await;
        let session = Arc::new(SessionContext::in_memory(Theme::Light));
        let gateway: Arc<dyn ApiGateway> = Arc::new(HttpGateway::new(
            reqwest::Url::parse(&base).unwrap(),
            Arc::clone(&session),
        ));

        let mut c = WizardController::new(RegistrationFlow::new(gateway, Arc::clone(&session)));
        fill_registration(&mut c, "Taken Inc");
        let before = c.state().clone();

        let err = c.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Api(ApiError::Status { .. })));
        assert_eq!(c.phase(), &WizardPhase::Step(5));
        assert_eq!(c.state(), &before);
        assert!(c.last_error().unwrap().contains("Company already exists"));
        assert!(!session.is_signed_in().await);

        // Fix the name and try again from the same step.
        c.update(Section::Company, json!({"name": "Lagoon Suites"}));
        let outcome = c.submit().await.unwrap();
        assert_eq!(outcome.company_id, 7);
        assert!(c.last_error().is_none());
        assert!(session.is_signed_in().await);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn onboarding_retry_after_backend_failure() {
    timeout(TEST_TIMEOUT, async {
        let (base, backend) = start_backend().await;
        let session = Arc::new(SessionContext::in_memory(Theme::Light));
        session.sign_in("existing").await.unwrap();
        let gateway: Arc<dyn ApiGateway> = Arc::new(HttpGateway::new(
            reqwest::Url::parse(&base).unwrap(),
            Arc::clone(&session),
        ));
        backend.fail_next_agent_creates(1);

        let mut c = WizardController::new(OnboardingFlow::new(gateway, None));
        assert!(c.advance());
        c.use_custom_agent();
        c.update(
            Section::Agent,
            json!({"name": "Front desk", "description": "Answers the main line"}),
        );
        while c.advance() {}

        let err = c.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Api(ApiError::Status { .. })));
        assert_eq!(c.current_step_kind(), OnboardingStep::Complete);
        assert!(c.last_error().unwrap().contains("Agent service unavailable"));
        assert!(backend.requests_to("PUT", "/account/settings").is_empty());

        let agent = c.submit().await.unwrap();
        assert_eq!(agent.name, "Front desk");
        let creates = backend.requests_to("POST", "/agents");
        assert_eq!(creates.len(), 2);
        assert_eq!(creates[0].body, creates[1].body);
        assert_eq!(backend.requests_to("PUT", "/account/settings").len(), 1);
    })
    .await
    .expect("test timed out");
}
