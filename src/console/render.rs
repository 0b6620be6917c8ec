//! Plain-text listings for backend resources.

use crate::api::{
    Agent, AgentPage, Call, CallPage, KnowledgeBase, KnowledgeBasePage, PhoneNumber, Tool,
};
use crate::catalog::{TemplatePreset, industry_display_name};

fn status(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

/// Cut `text` to `max` characters, marking the cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub fn agent_row(agent: &Agent) -> String {
    format!(
        "{:>5}  {:<28} {:<8} {:<8} {}",
        agent.id,
        truncate(&agent.name, 28),
        agent.voice_id,
        status(agent.is_active),
        truncate(&agent.description, 40)
    )
}

pub fn agent_page(page: &AgentPage) -> String {
    let mut out = format!("{} agent(s), page {}\n", page.total, page.page);
    for agent in &page.agents {
        out.push_str(&agent_row(agent));
        out.push('\n');
    }
    out
}

pub fn agent_detail(agent: &Agent) -> String {
    format!(
        "Agent #{id}: {name} ({status})\n\
         Description: {description}\n\
         Voice: {voice}  Temperature: {temperature}  Max tokens: {max_tokens}  Model: {model}\n\
         Instructions:\n{instructions}\n",
        id = agent.id,
        name = agent.name,
        status = status(agent.is_active),
        description = agent.description,
        voice = agent.voice_id,
        temperature = agent.temperature,
        max_tokens = agent.max_tokens,
        model = agent.model,
        instructions = agent.instructions,
    )
}

pub fn call_row(call: &Call) -> String {
    format!(
        "{:>5}  agent {:<5} {:<16} -> {:<16} {:<12} {:>6.0}s",
        call.id, call.agent_id, call.caller_number, call.phone_number, call.status, call.duration
    )
}

pub fn call_page(page: &CallPage) -> String {
    let mut out = format!("{} call(s), page {}\n", page.total, page.page);
    for call in &page.calls {
        out.push_str(&call_row(call));
        out.push('\n');
    }
    out
}

pub fn tool_row(tool: &Tool) -> String {
    format!(
        "{:>5}  {:<28} {:<12} {}",
        tool.id,
        truncate(&tool.name, 28),
        tool.tool_type,
        status(tool.is_active)
    )
}

pub fn knowledge_base_row(kb: &KnowledgeBase) -> String {
    format!(
        "{:>5}  {:<28} {:<12} {}",
        kb.id,
        truncate(&kb.name, 28),
        kb.kb_type,
        status(kb.is_active)
    )
}

pub fn knowledge_base_page(page: &KnowledgeBasePage) -> String {
    let mut out = format!("{} knowledge base(s), page {}\n", page.total, page.page);
    for kb in &page.knowledge_bases {
        out.push_str(&knowledge_base_row(kb));
        out.push('\n');
    }
    out
}

pub fn phone_number_row(number: &PhoneNumber) -> String {
    let agent = number
        .agent_id
        .map(|id| format!("agent {id}"))
        .unwrap_or_else(|| "unassigned".to_string());
    format!(
        "{:>5}  {:<18} {:<12} {}",
        number.id,
        number.phone_number,
        agent,
        status(number.is_active)
    )
}

pub fn template_row(preset: &TemplatePreset) -> String {
    format!(
        "{:<28} {:<30} voice {:<8} {}",
        preset.id,
        preset.name,
        preset.voice_id,
        industry_display_name(preset.industry)
    )
}

pub fn template_detail(preset: &TemplatePreset) -> String {
    let mut out = format!(
        "{} ({})\n{}\nFeatures: {}\nUse cases: {}\n",
        preset.name,
        preset.id,
        preset.description,
        preset.features.join(", "),
        preset.use_cases.join(", ")
    );
    for sample in preset.sample_interactions {
        out.push_str(&format!("  \"{sample}\"\n"));
    }
    out
}
