use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClanBotError {
    #[error("Invalid account type: {0}")]
    InvalidAccountType(String),

    #[error("Player {player} not found on {account_type} hiscores")]
    PlayerNotFound { player: String, account_type: String },

    #[error("Hiscores fetch failed for {player}: {message}")]
    FetchFailed {
        player: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Points table error: {0}")]
    PointsTable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ClanBotError {
    pub fn fetch_failed(player: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        ClanBotError::FetchFailed {
            player: player.to_string(),
            status,
            message: message.into(),
        }
    }

    /// True for outcomes a caller may reasonably retry.
    pub fn is_transient(&self) -> bool {
        match self {
            ClanBotError::FetchFailed { status: None, .. } => true,
            ClanBotError::FetchFailed { status: Some(code), .. } => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClanBotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ClanBotError::fetch_failed("Zezima", None, "timed out").is_transient());
        assert!(ClanBotError::fetch_failed("Zezima", Some(503), "unavailable").is_transient());
        assert!(!ClanBotError::fetch_failed("Zezima", Some(403), "forbidden").is_transient());
        assert!(!ClanBotError::InvalidAccountType("pure".to_string()).is_transient());
    }
}
