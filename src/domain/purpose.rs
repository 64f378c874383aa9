use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the rewritten text is going to be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    #[default]
    EmailToClient,
    SocialMediaPost,
    BlogArticle,
    FormalReport,
    CasualMessage,
    MarketingCopy,
    TechnicalDocumentation,
    CreativeStory,
}

impl Purpose {
    pub const ALL: [Purpose; 8] = [
        Purpose::EmailToClient,
        Purpose::SocialMediaPost,
        Purpose::BlogArticle,
        Purpose::FormalReport,
        Purpose::CasualMessage,
        Purpose::MarketingCopy,
        Purpose::TechnicalDocumentation,
        Purpose::CreativeStory,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Purpose::EmailToClient => "email_to_client",
            Purpose::SocialMediaPost => "social_media_post",
            Purpose::BlogArticle => "blog_article",
            Purpose::FormalReport => "formal_report",
            Purpose::CasualMessage => "casual_message",
            Purpose::MarketingCopy => "marketing_copy",
            Purpose::TechnicalDocumentation => "technical_documentation",
            Purpose::CreativeStory => "creative_story",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Purpose::EmailToClient => "Email to Client",
            Purpose::SocialMediaPost => "Social Media Post",
            Purpose::BlogArticle => "Blog Article",
            Purpose::FormalReport => "Formal Report",
            Purpose::CasualMessage => "Casual Message",
            Purpose::MarketingCopy => "Marketing Copy",
            Purpose::TechnicalDocumentation => "Technical Documentation",
            Purpose::CreativeStory => "Creative Story",
        }
    }
}

impl FromStr for Purpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Purpose::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid purpose: {}", s))
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
