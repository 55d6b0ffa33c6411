use serde::Deserialize;

/// Prompt catalog settings.
#[derive(Debug, Clone)]
pub struct PromptsSection {
    /// When false the server exposes tools and resources only.
    pub enabled: bool,
}

impl Default for PromptsSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawPromptsSection {
    pub enabled: Option<bool>,
}

pub fn parse_prompts_section(raw: Option<RawPromptsSection>) -> PromptsSection {
    let prompts_raw = raw.unwrap_or_default();
    PromptsSection {
        enabled: prompts_raw.enabled.unwrap_or(true),
    }
}
