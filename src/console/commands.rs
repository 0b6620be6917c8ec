//! Command-line surface of the `voiceflow` binary.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use super::wizard::{run_onboarding, run_registration};
use super::{Console, render};
use crate::api::{AgentDraft, ApiGateway, CallRequest, ListParams, ResourceId, TemplateChoice};
use crate::catalog::{TemplateCatalog, industry_display_name};
use crate::config::ConsoleConfig;
use crate::error::{ApiError, ConsoleError};
use crate::session::{SessionContext, Theme};
use crate::wizard::{OnboardingFlow, RegistrationFlow, WizardController};

/// VoiceFlow console - set up and manage AI voice agents
#[derive(Parser, Debug)]
#[command(name = "voiceflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a company, then set up its first agent
    Register,

    /// Set up an agent and account settings
    Onboard {
        /// Industry whose templates are offered
        #[arg(long)]
        industry: Option<String>,

        /// Template to start from
        #[arg(long)]
        template: Option<String>,
    },

    /// Browse agent templates
    Templates {
        /// Only show templates for this industry
        #[arg(long)]
        industry: Option<String>,

        #[command(subcommand)]
        action: Option<TemplateAction>,
    },

    /// Manage agents
    Agents {
        #[command(subcommand)]
        action: AgentAction,
    },

    /// Manage calls
    Calls {
        #[command(subcommand)]
        action: CallAction,
    },

    /// Manage tools
    Tools {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Manage knowledge bases
    KnowledgeBases {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Manage phone numbers
    PhoneNumbers {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Show or change the colour theme
    Theme {
        mode: Option<ThemeMode>,
    },

    /// Sign out and forget the stored token
    Logout,
}

#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// Show one template in full
    Show { id: String },
    /// Create an agent straight from a template
    Create { id: String },
}

#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    #[arg(long, default_value_t = 0)]
    pub skip: u32,

    #[arg(long, default_value_t = 20)]
    pub limit: u32,

    /// Only list active entries
    #[arg(long)]
    pub active_only: bool,
}

impl PageArgs {
    fn params(&self) -> ListParams {
        let params = ListParams::page(self.skip, self.limit);
        if self.active_only {
            params.active_only()
        } else {
            params
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct AgentFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub instructions: Option<String>,
    #[arg(long)]
    pub voice: Option<String>,
    #[arg(long)]
    pub temperature: Option<f64>,
    #[arg(long)]
    pub max_tokens: Option<u32>,
    #[arg(long)]
    pub model: Option<String>,
}

impl AgentFields {
    /// Overlay the fields that were given onto `base`.
    fn apply(self, base: AgentDraft) -> AgentDraft {
        AgentDraft {
            name: self.name.or(base.name),
            description: self.description.or(base.description),
            instructions: self.instructions.or(base.instructions),
            voice_id: self.voice.or(base.voice_id),
            temperature: self.temperature.or(base.temperature),
            max_tokens: self.max_tokens.or(base.max_tokens),
            model: self.model.or(base.model),
            is_active: base.is_active,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum AgentAction {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Show { id: ResourceId },
    Create {
        #[command(flatten)]
        fields: AgentFields,
    },
    Update {
        id: ResourceId,
        #[command(flatten)]
        fields: AgentFields,
    },
    Delete { id: ResourceId },
    Activate { id: ResourceId },
    Deactivate { id: ResourceId },
}

#[derive(Subcommand, Debug)]
pub enum CallAction {
    List {
        #[arg(long)]
        agent_id: Option<ResourceId>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    Show { id: ResourceId },
    /// Ask the backend to place an outbound call
    Initiate {
        #[arg(long)]
        agent_id: ResourceId,
        /// Number to call
        #[arg(long)]
        to: String,
        /// Number the call comes from
        #[arg(long)]
        from: String,
    },
    End { id: ResourceId },
}

#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Show { id: ResourceId },
    Delete { id: ResourceId },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    Toggle,
}

/// Shared handles every command runs against.
pub struct App {
    pub config: ConsoleConfig,
    pub session: Arc<SessionContext>,
    pub gateway: Arc<dyn ApiGateway>,
}

impl App {
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Register => self.register().await,
            Command::Onboard { industry, template } => self.onboard(industry, template).await,
            Command::Templates { industry, action } => self.templates(industry, action).await,
            Command::Agents { action } => self.agents(action).await,
            Command::Calls { action } => self.calls(action).await,
            Command::Tools { action } => self.tools(action).await,
            Command::KnowledgeBases { action } => self.knowledge_bases(action).await,
            Command::PhoneNumbers { action } => self.phone_numbers(action).await,
            Command::Theme { mode } => self.theme(mode).await,
            Command::Logout => {
                self.session.sign_out().await.context("Failed to sign out")?;
                println!("Signed out.");
                Ok(())
            }
        }
    }

    fn banner(&self) {
        eprintln!("VoiceFlow console v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("   Backend: {}", self.config.api_base_url);
        eprintln!("   Press Enter to keep a value, q to quit.\n");
    }

    async fn register(&self) -> Result<()> {
        self.banner();
        let mut console = Console::terminal();
        let flow = RegistrationFlow::new(self.gateway.clone(), self.session.clone());
        let mut registration = WizardController::new(flow);

        let Some(outcome) = interactive(run_registration(&mut console, &mut registration).await)?
        else {
            println!("Registration cancelled.");
            return Ok(());
        };
        println!(
            "\nCompany #{} registered. Let's set up your first agent.",
            outcome.company_id
        );

        let flow = OnboardingFlow::new(self.gateway.clone(), Some(outcome.handoff()));
        let mut onboarding = WizardController::new(flow);
        report_onboarding(interactive(run_onboarding(&mut console, &mut onboarding).await)?);
        Ok(())
    }

    async fn onboard(&self, industry: Option<String>, template: Option<String>) -> Result<()> {
        let catalog = TemplateCatalog::builtin();
        let preset = match &template {
            Some(id) => Some(
                catalog
                    .by_id(id)
                    .with_context(|| format!("Unknown template '{id}'"))?,
            ),
            None => None,
        };
        let seed = TemplateChoice {
            selected: preset.is_some(),
            industry: industry
                .or_else(|| preset.map(|p| p.industry.to_string()))
                .unwrap_or_default(),
            template_id: template,
        };

        if !self.session.is_signed_in().await {
            anyhow::bail!("Not signed in. Run `voiceflow register` first");
        }
        self.banner();
        let flow = OnboardingFlow::with_template(self.gateway.clone(), seed);
        let mut controller = WizardController::new(flow);
        let mut console = Console::terminal();
        report_onboarding(interactive(run_onboarding(&mut console, &mut controller).await)?);
        Ok(())
    }

    async fn templates(&self, industry: Option<String>, action: Option<TemplateAction>) -> Result<()> {
        let catalog = TemplateCatalog::builtin();
        match action {
            None => {
                let presets = match &industry {
                    Some(industry) => catalog.by_industry(industry),
                    None => catalog.all(),
                };
                if presets.is_empty() {
                    println!("No templates found.");
                }
                for preset in presets {
                    println!("{}", render::template_row(preset));
                }
                if industry.is_none() {
                    let industries: Vec<_> = catalog.industries().map(industry_display_name).collect();
                    println!("\nIndustries: {}", industries.join(", "));
                }
            }
            Some(TemplateAction::Show { id }) => {
                let preset = catalog
                    .by_id(&id)
                    .with_context(|| format!("Unknown template '{id}'"))?;
                print!("{}", render::template_detail(preset));
            }
            Some(TemplateAction::Create { id }) => {
                let preset = catalog
                    .by_id(&id)
                    .with_context(|| format!("Unknown template '{id}'"))?;
                let agent = api(self.gateway.create_agent(&preset.to_agent_draft()).await)?;
                println!("Created agent #{} from template {}.", agent.id, preset.id);
            }
        }
        Ok(())
    }

    async fn agents(&self, action: AgentAction) -> Result<()> {
        match action {
            AgentAction::List { page } => {
                let agents = api(self.gateway.list_agents(&page.params()).await)?;
                print!("{}", render::agent_page(&agents));
            }
            AgentAction::Show { id } => {
                let agent = api(self.gateway.get_agent(id).await)?;
                print!("{}", render::agent_detail(&agent));
            }
            AgentAction::Create { fields } => {
                if fields.name.is_none() {
                    anyhow::bail!("--name is required to create an agent");
                }
                let draft = fields.apply(AgentDraft::console_defaults());
                let agent = api(self.gateway.create_agent(&draft).await)?;
                println!("Created agent #{}.", agent.id);
            }
            AgentAction::Update { id, fields } => {
                let agent = api(self.gateway.update_agent(id, &fields.apply(AgentDraft::default())).await)?;
                println!("Updated agent #{}.", agent.id);
            }
            AgentAction::Delete { id } => {
                api(self.gateway.delete_agent(id).await)?;
                println!("Deleted agent #{id}.");
            }
            AgentAction::Activate { id } => {
                let agent = api(self.gateway.update_agent(id, &AgentDraft::activation(true)).await)?;
                println!("Agent #{} is now active.", agent.id);
            }
            AgentAction::Deactivate { id } => {
                let agent = api(self.gateway.update_agent(id, &AgentDraft::activation(false)).await)?;
                println!("Agent #{} is now inactive.", agent.id);
            }
        }
        Ok(())
    }

    async fn calls(&self, action: CallAction) -> Result<()> {
        match action {
            CallAction::List {
                agent_id,
                status,
                skip,
                limit,
            } => {
                let params = ListParams {
                    agent_id,
                    status_filter: status,
                    ..ListParams::page(skip, limit)
                };
                let calls = api(self.gateway.list_calls(&params).await)?;
                print!("{}", render::call_page(&calls));
            }
            CallAction::Show { id } => {
                let call = api(self.gateway.get_call(id).await)?;
                println!("{}", render::call_row(&call));
                if let Some(url) = &call.recording_url {
                    println!("Recording: {url}");
                }
            }
            CallAction::Initiate { agent_id, to, from } => {
                let request = CallRequest {
                    agent_id,
                    phone_number: to,
                    caller_number: from,
                    metadata: None,
                };
                let response = api(self.gateway.initiate_call(&request).await)?;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            CallAction::End { id } => {
                api(self.gateway.end_call(id).await)?;
                println!("Ended call #{id}.");
            }
        }
        Ok(())
    }

    async fn tools(&self, action: ResourceAction) -> Result<()> {
        match action {
            ResourceAction::List { page } => {
                for tool in api(self.gateway.list_tools(&page.params()).await)? {
                    println!("{}", render::tool_row(&tool));
                }
            }
            ResourceAction::Show { id } => {
                let tool = api(self.gateway.get_tool(id).await)?;
                println!("{}", render::tool_row(&tool));
                println!("{}", tool.description);
            }
            ResourceAction::Delete { id } => {
                api(self.gateway.delete_tool(id).await)?;
                println!("Deleted tool #{id}.");
            }
        }
        Ok(())
    }

    async fn knowledge_bases(&self, action: ResourceAction) -> Result<()> {
        match action {
            ResourceAction::List { page } => {
                let page = api(self.gateway.list_knowledge_bases(&page.params()).await)?;
                print!("{}", render::knowledge_base_page(&page));
            }
            ResourceAction::Show { id } => {
                let kb = api(self.gateway.get_knowledge_base(id).await)?;
                println!("{}", render::knowledge_base_row(&kb));
                println!("{}", kb.description);
            }
            ResourceAction::Delete { id } => {
                api(self.gateway.delete_knowledge_base(id).await)?;
                println!("Deleted knowledge base #{id}.");
            }
        }
        Ok(())
    }

    async fn phone_numbers(&self, action: ResourceAction) -> Result<()> {
        match action {
            ResourceAction::List { page } => {
                for number in api(self.gateway.list_phone_numbers(&page.params()).await)? {
                    println!("{}", render::phone_number_row(&number));
                }
            }
            ResourceAction::Show { id } => {
                let number = api(self.gateway.get_phone_number(id).await)?;
                println!("{}", render::phone_number_row(&number));
            }
            ResourceAction::Delete { id } => {
                api(self.gateway.delete_phone_number(id).await)?;
                println!("Deleted phone number #{id}.");
            }
        }
        Ok(())
    }

    async fn theme(&self, mode: Option<ThemeMode>) -> Result<()> {
        let theme = match mode {
            None => self.session.theme().await,
            Some(ThemeMode::Toggle) => self.session.toggle_theme().await?,
            Some(ThemeMode::Light) => {
                self.session.set_theme(Theme::Light).await?;
                Theme::Light
            }
            Some(ThemeMode::Dark) => {
                self.session.set_theme(Theme::Dark).await?;
                Theme::Dark
            }
        };
        println!("Theme: {theme}");
        Ok(())
    }
}

/// Attach a sign-in hint to rejected credentials.
fn api<T>(result: std::result::Result<T, ApiError>) -> Result<T> {
    result.map_err(|e| {
        if e.is_unauthorized() {
            anyhow::Error::new(e).context("Your session has expired. Please sign in again")
        } else {
            e.into()
        }
    })
}

/// Closed input ends a wizard quietly, like quitting it.
fn interactive<T>(result: std::result::Result<Option<T>, ConsoleError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(ConsoleError::Closed) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn report_onboarding(agent: Option<crate::api::Agent>) {
    match agent {
        Some(agent) => println!(
            "\nWelcome aboard! Agent #{} \"{}\" is ready to take calls.",
            agent.id, agent.name
        ),
        None => println!("Onboarding paused. Run `voiceflow onboard` to finish later."),
    }
}
