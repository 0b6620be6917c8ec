//! Agent template catalog: static industry presets and reference option lists.
//!
//! The catalog is built once from the static tables in [`presets`] and never
//! written to afterwards. Lookups for unknown keys return an empty slice or
//! `None`, never an error.

pub mod options;
pub mod presets;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::api::AgentDraft;

pub use options::{
    COMPANY_SIZES, CompanySize, INDUSTRIES, Industry, LANGUAGES, Language, PLANS, Plan, TIMEZONES,
    Timezone, VOICES, Voice,
};

/// Industry the onboarding agent step falls back to when none was handed off.
pub const DEFAULT_INDUSTRY: &str = "real-estate";

/// An immutable, canned agent configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub voice_id: &'static str,
    pub temperature: f64,
    pub max_tokens: u32,
    pub model: &'static str,
    pub industry: &'static str,
    pub features: &'static [&'static str],
    pub use_cases: &'static [&'static str],
    pub sample_interactions: &'static [&'static str],
}

impl TemplatePreset {
    /// Draft for creating an agent straight from this preset.
    pub fn to_agent_draft(&self) -> AgentDraft {
        AgentDraft {
            name: Some(self.name.to_string()),
            description: Some(self.description.to_string()),
            instructions: Some(self.instructions.to_string()),
            voice_id: Some(self.voice_id.to_string()),
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
            model: Some(self.model.to_string()),
            is_active: Some(true),
        }
    }
}

/// Read-only lookup over the preset table.
#[derive(Debug)]
pub struct TemplateCatalog {
    presets: &'static [TemplatePreset],
    by_industry: BTreeMap<&'static str, Vec<TemplatePreset>>,
}

impl TemplateCatalog {
    /// Build a catalog over an arbitrary preset table.
    pub fn new(presets: &'static [TemplatePreset]) -> Self {
        let mut by_industry: BTreeMap<&'static str, Vec<TemplatePreset>> = BTreeMap::new();
        for preset in presets {
            by_industry
                .entry(preset.industry)
                .or_default()
                .push(preset.clone());
        }
        Self {
            presets,
            by_industry,
        }
    }

    /// The process-wide catalog over the built-in presets.
    pub fn builtin() -> &'static TemplateCatalog {
        static CATALOG: OnceLock<TemplateCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| TemplateCatalog::new(presets::BUILTIN_PRESETS))
    }

    /// Every preset, in definition order.
    pub fn all(&self) -> &'static [TemplatePreset] {
        self.presets
    }

    /// Presets for one industry; empty for unknown industries.
    pub fn by_industry(&self, industry: &str) -> &[TemplatePreset] {
        self.by_industry
            .get(industry)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn by_id(&self, template_id: &str) -> Option<&'static TemplatePreset> {
        self.presets.iter().find(|p| p.id == template_id)
    }

    /// Industry ids that have at least one preset.
    pub fn industries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_industry.keys().copied()
    }
}

/// Human-readable label for an industry id.
///
/// Known industries use their catalog name; anything else is derived from
/// the slug (`hotels-&-hospitality` → `Hotels & Hospitality`).
pub fn industry_display_name(industry: &str) -> String {
    if let Some(known) = INDUSTRIES.iter().find(|i| i.id == industry) {
        return known.name.to_string();
    }
    industry
        .replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
