use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use std::path::Path;

use crate::hiscores::HiscoreClientConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub hiscores: HiscoreSettings,
    pub points: PointsSettings,
    pub review: ReviewSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiscoreSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsSettings {
    pub table_path: String,
}

/// Where applications are routed and how review output is laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSettings {
    pub staff_channel_id: Option<u64>,
    pub member_role_id: Option<u64>,
    pub visitor_role_id: Option<u64>,
    pub nickname_limit: usize,
    pub top_contributors: usize,
    pub page_budget: usize,
    pub debug_chunk_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let client = HiscoreClientConfig::default();

        Self {
            app: AppSettings {
                name: "Clan Recruiter".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            hiscores: HiscoreSettings {
                base_url: client.base_url,
                timeout_seconds: client.timeout_seconds,
                user_agent: client.user_agent,
            },
            points: PointsSettings {
                table_path: "data/boss_points.json".to_string(),
            },
            review: ReviewSettings {
                staff_channel_id: None,
                member_role_id: None,
                visitor_role_id: None,
                nickname_limit: 32,
                top_contributors: 8,
                page_budget: 3500, // embed description margin
                debug_chunk_size: 1900, // message limit minus code fence
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CLAN_BOT").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("CLAN_BOT").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Load from an explicit file, or from the layered defaults when none is given.
    ///
    /// Unparsable files or env overrides are errors, never a silent fallback to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::new(),
        }
    }

    pub fn hiscore_client_config(&self) -> HiscoreClientConfig {
        HiscoreClientConfig {
            base_url: self.hiscores.base_url.clone(),
            timeout_seconds: self.hiscores.timeout_seconds,
            user_agent: self.hiscores.user_agent.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let base_url = &self.hiscores.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(format!("Hiscores base URL must be http(s), got {}", base_url));
        }

        if self.hiscores.timeout_seconds == 0 {
            return Err("Hiscores timeout must be at least one second".to_string());
        }

        if self.review.nickname_limit == 0 {
            return Err("Nickname limit must be positive".to_string());
        }

        if self.review.page_budget == 0 || self.review.debug_chunk_size == 0 {
            return Err("Page budget and debug chunk size must be positive".to_string());
        }

        Ok(())
    }
}
