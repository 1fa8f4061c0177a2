use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::AccountType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationType {
    Visitor,
    Member,
}

impl ApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Visitor => "visitor",
            ApplicationType::Member => "member",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationType::Visitor => "Visitor",
            ApplicationType::Member => "Clan Member",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "visitor" | "visit" => Some(ApplicationType::Visitor),
            "member" | "clan member" => Some(ApplicationType::Member),
            _ => None,
        }
    }
}

/// The platform user that submitted an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub id: u64,
    pub tag: String,
}

/// A submitted application, as the intake form hands it over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub applicant: Applicant,
    pub player_name: String,
    pub account_type: AccountType,
    pub application_type: ApplicationType,
    pub fire_cape: String,
    pub infernal_cape: String,
    pub alts_raw: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Application {
    pub fn new(
        applicant: Applicant,
        player_name: &str,
        account_type: AccountType,
        application_type: ApplicationType,
    ) -> Self {
        Self {
            applicant,
            player_name: player_name.trim().to_string(),
            account_type,
            application_type,
            fire_cape: String::new(),
            infernal_cape: String::new(),
            alts_raw: None,
            submitted_at: Utc::now(),
        }
    }

    pub fn with_capes(mut self, fire_cape: &str, infernal_cape: &str) -> Self {
        self.fire_cape = fire_cape.trim().to_string();
        self.infernal_cape = infernal_cape.trim().to_string();
        self
    }

    /// Keep whatever was typed; only an untouched alts box counts as no alts.
    pub fn with_alts(mut self, alts_raw: &str) -> Self {
        self.alts_raw = if alts_raw.is_empty() {
            None
        } else {
            Some(alts_raw.to_string())
        };
        self
    }

    pub fn alts_text(&self) -> &str {
        self.alts_raw.as_deref().unwrap_or("")
    }
}
