use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::{AccountType, ClanBotError, Result};

/// Kill counts per category, kept in extraction order.
///
/// A category with no paired hiscore row is absent rather than zero; `get` callers
/// should treat `None` as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KillCounts {
    entries: Vec<(String, u64)>,
}

impl KillCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a count, replacing an earlier entry for the same category in place.
    pub fn insert(&mut self, category: impl Into<String>, count: u64) {
        let category = category.into();
        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((category, count)),
        }
    }

    pub fn get(&self, category: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for KillCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = KillCounts::new();
        for (category, count) in iter {
            counts.insert(category, count);
        }
        counts
    }
}

/// One line of a score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub category: String,
    pub count: u64,
    pub points: f64,
}

impl ScoreEntry {
    pub fn summary_line(&self) -> String {
        format!("- {}: {} KC → {:.2} pts", self.category, self.count, self.points)
    }
}

/// Result of running one player through the points pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsReport {
    pub player: String,
    pub account_type: AccountType,
    /// False when the hiscores had no entry for the player.
    pub found: bool,
    pub kill_counts: KillCounts,
    pub total: f64,
    pub breakdown: Vec<ScoreEntry>,
    pub rank: String,
    pub calculated_at: DateTime<Utc>,
}

impl PointsReport {
    pub fn top_contributors(&self, limit: usize) -> &[ScoreEntry] {
        &self.breakdown[..self.breakdown.len().min(limit)]
    }

    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total)
    }

    /// Turn an empty lookup into [`ClanBotError::PlayerNotFound`] for callers that need data.
    pub fn ensure_found(self) -> Result<Self> {
        if self.found {
            Ok(self)
        } else {
            Err(ClanBotError::PlayerNotFound {
                player: self.player,
                account_type: self.account_type.to_string(),
            })
        }
    }
}
