//! Reference option lists shown by the wizard steps.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Industry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompanySize {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A subscription plan offered at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    /// Display price; `"Custom"` for negotiated plans.
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Voice {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timezone {
    pub value: &'static str,
    pub label: &'static str,
}

pub static INDUSTRIES: &[Industry] = &[
    Industry {
        id: "real-estate",
        name: "Real Estate",
        description: "Property management, sales, and rentals",
    },
    Industry {
        id: "hotels-&-hospitality",
        name: "Hotels & Hospitality",
        description: "Hotels, resorts, and hospitality services",
    },
    Industry {
        id: "banking-&-finance",
        name: "Banking & Finance",
        description: "Banks, credit unions, and financial services",
    },
    Industry {
        id: "insurance",
        name: "Insurance",
        description: "Insurance companies and brokers",
    },
    Industry {
        id: "healthcare",
        name: "Healthcare",
        description: "Hospitals, clinics, and medical services",
    },
];

pub static COMPANY_SIZES: &[CompanySize] = &[
    CompanySize {
        id: "startup",
        name: "Startup (1-10 employees)",
        description: "Perfect for new businesses getting started",
    },
    CompanySize {
        id: "small",
        name: "Small Business (11-50 employees)",
        description: "Ideal for growing companies",
    },
    CompanySize {
        id: "medium",
        name: "Medium Business (51-200 employees)",
        description: "Great for established companies",
    },
    CompanySize {
        id: "large",
        name: "Large Enterprise (200+ employees)",
        description: "Perfect for enterprise-level operations",
    },
];

pub static PLANS: &[Plan] = &[
    Plan {
        id: "starter",
        name: "Starter",
        price: "$99",
        period: "month",
        description: "Perfect for small businesses getting started",
        features: &[
            "Up to 5 AI agents",
            "1,000 calls per month",
            "Basic analytics",
            "Email support",
            "Standard templates",
        ],
        popular: false,
    },
    Plan {
        id: "professional",
        name: "Professional",
        price: "$299",
        period: "month",
        description: "Ideal for growing businesses",
        features: &[
            "Up to 20 AI agents",
            "10,000 calls per month",
            "Advanced analytics",
            "Priority support",
            "Custom templates",
            "API access",
        ],
        popular: true,
    },
    Plan {
        id: "enterprise",
        name: "Enterprise",
        price: "Custom",
        period: "month",
        description: "For large organizations with custom needs",
        features: &[
            "Unlimited AI agents",
            "Unlimited calls",
            "Custom analytics",
            "Dedicated support",
            "Custom integrations",
            "SLA guarantee",
            "On-premise options",
        ],
        popular: false,
    },
];

pub static VOICES: &[Voice] = &[
    Voice { id: "alloy", name: "Alloy", description: "Professional and clear" },
    Voice { id: "echo", name: "Echo", description: "Warm and friendly" },
    Voice { id: "fable", name: "Fable", description: "Calm and soothing" },
    Voice { id: "onyx", name: "Onyx", description: "Deep and authoritative" },
    Voice { id: "nova", name: "Nova", description: "Bright and energetic" },
    Voice { id: "shimmer", name: "Shimmer", description: "Smooth and engaging" },
];

pub static LANGUAGES: &[Language] = &[
    Language { code: "en-US", name: "English (US)" },
    Language { code: "en-GB", name: "English (UK)" },
    Language { code: "fr-FR", name: "French" },
    Language { code: "de-DE", name: "German" },
    Language { code: "es-ES", name: "Spanish" },
    Language { code: "it-IT", name: "Italian" },
    Language { code: "pt-BR", name: "Portuguese (Brazil)" },
    Language { code: "ja-JP", name: "Japanese" },
    Language { code: "ko-KR", name: "Korean" },
    Language { code: "zh-CN", name: "Chinese (Simplified)" },
];

pub static TIMEZONES: &[Timezone] = &[
    Timezone { value: "UTC", label: "UTC (Coordinated Universal Time)" },
    Timezone { value: "Africa/Lagos", label: "West Africa Time (WAT)" },
    Timezone { value: "America/New_York", label: "Eastern Time (ET)" },
    Timezone { value: "America/Chicago", label: "Central Time (CT)" },
    Timezone { value: "America/Denver", label: "Mountain Time (MT)" },
    Timezone { value: "America/Los_Angeles", label: "Pacific Time (PT)" },
    Timezone { value: "Europe/London", label: "Greenwich Mean Time (GMT)" },
    Timezone { value: "Europe/Paris", label: "Central European Time (CET)" },
    Timezone { value: "Asia/Tokyo", label: "Japan Standard Time (JST)" },
    Timezone { value: "Asia/Shanghai", label: "China Standard Time (CST)" },
];

/// Look up a plan by id.
pub fn plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == id)
}
