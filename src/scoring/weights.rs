use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::hiscores::categories::is_known_boss;
use crate::models::{ClanBotError, Result};

/// Clan points awarded per kill, keyed by boss name.
///
/// Loaded once at startup and shared read-only; bosses missing from the table are
/// worth nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsTable {
    weights: HashMap<String, f64>,
}

impl PointsTable {
    pub fn new(weights: HashMap<String, f64>) -> Result<Self> {
        let table = Self { weights };
        table.validate()?;
        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let weights: HashMap<String, f64> = serde_json::from_str(json)?;
        Self::new(weights)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClanBotError::PointsTable(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let table = Self::from_json(&contents)?;
        info!("Loaded {} boss weights from {}", table.len(), path.display());

        for name in table.unknown_categories() {
            warn!("Points table entry {:?} does not match any hiscores boss", name);
        }

        Ok(table)
    }

    pub fn weight(&self, category: &str) -> Option<f64> {
        self.weights.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Entries that can never score because no hiscores row is named after them.
    pub fn unknown_categories(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .weights
            .keys()
            .map(String::as_str)
            .filter(|name| !is_known_boss(name))
            .collect();
        unknown.sort_unstable();
        unknown
    }

    pub fn validate(&self) -> Result<()> {
        // Check that all weights are usable multipliers
        if let Some((name, weight)) = self
            .weights
            .iter()
            .find(|(_, weight)| !weight.is_finite() || **weight < 0.0)
        {
            return Err(ClanBotError::PointsTable(format!(
                "Weight for {} must be a non-negative number, got {}",
                name, weight
            )));
        }

        Ok(())
    }
}

impl FromIterator<(String, f64)> for PointsTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
