use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{
    hiscores::{parse_rows, HiscoreClientConfig, HiscoreRows, HiscoreSource},
    models::{AccountType, ClanBotError, Result},
};

/// Old School hiscores client speaking the `index_lite.ws` CSV endpoint.
pub struct HiscoresClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl HiscoresClient {
    pub fn new(config: HiscoreClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                ClanBotError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Leaderboard root for an account type, e.g. `.../m=hiscore_oldschool_ironman`.
    pub fn module_url(&self, account_type: AccountType) -> String {
        match account_type.hiscore_suffix() {
            Some(suffix) => format!("{}/m=hiscore_oldschool_{}", self.base_url, suffix),
            None => format!("{}/m=hiscore_oldschool", self.base_url),
        }
    }

    pub fn lookup_url(&self, player: &str, account_type: AccountType) -> String {
        format!("{}/index_lite.ws?player={}", self.module_url(account_type), player)
    }
}

#[async_trait]
impl HiscoreSource for HiscoresClient {
    async fn fetch_rows(&self, player: &str, account_type: AccountType) -> Result<HiscoreRows> {
        let url = self.lookup_url(player, account_type);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClanBotError::fetch_failed(player, None, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            info!("{} is not on the {} hiscores", player, account_type);
            return Ok(Vec::new());
        }

        if !status.is_success() {
            warn!("Hiscores returned {} for {} ({})", status, player, account_type);
            return Err(ClanBotError::fetch_failed(
                player,
                Some(status.as_u16()),
                format!("unexpected status {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClanBotError::fetch_failed(player, Some(status.as_u16()), e.to_string()))?;

        let rows = parse_rows(&body);
        debug!("Parsed {} hiscore rows for {}", rows.len(), player);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HiscoresClient {
        HiscoresClient::new(HiscoreClientConfig {
            base_url: "https://secure.runescape.com/".to_string(),
            ..HiscoreClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_normal_accounts_have_no_suffix() {
        assert_eq!(
            client().lookup_url("Zezima", AccountType::Normal),
            "https://secure.runescape.com/m=hiscore_oldschool/index_lite.ws?player=Zezima"
        );
    }

    #[test]
    fn test_other_accounts_append_canonical_key() {
        let c = client();
        assert_eq!(
            c.module_url(AccountType::HardcoreIronman),
            "https://secure.runescape.com/m=hiscore_oldschool_hardcore_ironman"
        );
        assert_eq!(
            c.lookup_url("Lynx Titan", AccountType::GroupIronman),
            concat!(
                "https://secure.runescape.com/m=hiscore_oldschool_group_ironman",
                "/index_lite.ws?player=Lynx Titan"
            )
        );
    }
}
