use async_trait::async_trait;

use crate::hiscores::HiscoreRows;
use crate::models::{AccountType, Result};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HiscoreSource: Send + Sync {
    /// Fetch the raw `index_lite` rows for a player.
    ///
    /// A player missing from the leaderboard yields an empty row set; any other
    /// unsuccessful outcome is an error.
    async fn fetch_rows(&self, player: &str, account_type: AccountType) -> Result<HiscoreRows>;
}

/// Configuration for hiscore clients
#[derive(Debug, Clone)]
pub struct HiscoreClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HiscoreClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://secure.runescape.com".to_string(),
            timeout_seconds: 20,
            user_agent: concat!("clan-recruiter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
