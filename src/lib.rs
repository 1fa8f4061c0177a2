pub mod config;
pub mod hiscores;
pub mod models;
pub mod review;
pub mod scoring;
pub mod utils;

pub use config::Settings;
pub use hiscores::{HiscoreSource, HiscoresClient};
pub use models::{AccountType, ClanBotError, KillCounts, PointsReport, Result, ScoreEntry};
pub use scoring::{PointsCalculator, PointsTable};
