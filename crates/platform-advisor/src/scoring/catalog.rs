use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier for one of the four platforms under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformId {
    GoogleGemini,
    MicrosoftCopilot,
    AnthropicClaude,
    OpenaiChatgpt,
}

impl PlatformId {
    /// Catalog order. Ranking ties resolve in this order.
    pub const ALL: [PlatformId; 4] = [
        PlatformId::GoogleGemini,
        PlatformId::MicrosoftCopilot,
        PlatformId::AnthropicClaude,
        PlatformId::OpenaiChatgpt,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PlatformId::GoogleGemini => "google_gemini",
            PlatformId::MicrosoftCopilot => "microsoft_copilot",
            PlatformId::AnthropicClaude => "anthropic_claude",
            PlatformId::OpenaiChatgpt => "openai_chatgpt",
        }
    }

    pub const fn display_name(self) -> &'static str {
        self.entry().display_name
    }

    pub const fn entry(self) -> &'static PlatformEntry {
        match self {
            PlatformId::GoogleGemini => &CATALOG[0],
            PlatformId::MicrosoftCopilot => &CATALOG[1],
            PlatformId::AnthropicClaude => &CATALOG[2],
            PlatformId::OpenaiChatgpt => &CATALOG[3],
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform id '{0}'")]
pub struct UnknownPlatform(pub String);

impl FromStr for PlatformId {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PlatformId::ALL
            .into_iter()
            .find(|id| id.as_str() == value.trim())
            .ok_or_else(|| UnknownPlatform(value.to_string()))
    }
}

/// Static catalog entry describing how a platform is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformEntry {
    pub id: PlatformId,
    pub display_name: &'static str,
    pub color: &'static str,
    pub best_for: &'static [&'static str],
}

pub const CATALOG: [PlatformEntry; 4] = [
    PlatformEntry {
        id: PlatformId::GoogleGemini,
        display_name: "Google Gemini",
        color: "#4285F4",
        best_for: &[
            "Google Workspace organizations",
            "Multimodal research and analysis",
            "Cost-conscious rollouts",
        ],
    },
    PlatformEntry {
        id: PlatformId::MicrosoftCopilot,
        display_name: "Microsoft Copilot",
        color: "#0078D4",
        best_for: &[
            "Microsoft 365 organizations",
            "Regulated enterprises needing broad certifications",
            "Office document workflows",
        ],
    },
    PlatformEntry {
        id: PlatformId::AnthropicClaude,
        display_name: "Anthropic Claude",
        color: "#D97757",
        best_for: &[
            "Long-document analysis",
            "Software engineering teams",
            "Safety-sensitive use cases",
        ],
    },
    PlatformEntry {
        id: PlatformId::OpenaiChatgpt,
        display_name: "OpenAI ChatGPT",
        color: "#10A37F",
        best_for: &[
            "General-purpose productivity",
            "Custom GPT automation",
            "Broad third-party ecosystem",
        ],
    },
];
