use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClanRank {
    Zenyte,
    Onyx,
    Dragon,
    Rune,
    Adamant,
    Mithril,
    Gold,
    Steel,
    Iron,
    Bronze,
}

/// Minimum points per rank, highest first. The last entry catches everything else.
pub const RANK_THRESHOLDS: [(f64, ClanRank); 10] = [
    (500_000.0, ClanRank::Zenyte),
    (250_000.0, ClanRank::Onyx),
    (100_000.0, ClanRank::Dragon),
    (50_000.0, ClanRank::Rune),
    (25_000.0, ClanRank::Adamant),
    (10_000.0, ClanRank::Mithril),
    (5_000.0, ClanRank::Gold),
    (2_500.0, ClanRank::Steel),
    (1_000.0, ClanRank::Iron),
    (0.0, ClanRank::Bronze),
];

impl ClanRank {
    pub fn from_points(points: f64) -> Self {
        RANK_THRESHOLDS
            .iter()
            .find(|(threshold, _)| points >= *threshold)
            .map(|(_, rank)| *rank)
            .unwrap_or(ClanRank::Bronze)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClanRank::Zenyte => "Zenyte",
            ClanRank::Onyx => "Onyx",
            ClanRank::Dragon => "Dragon",
            ClanRank::Rune => "Rune",
            ClanRank::Adamant => "Adamant",
            ClanRank::Mithril => "Mithril",
            ClanRank::Gold => "Gold",
            ClanRank::Steel => "Steel",
            ClanRank::Iron => "Iron",
            ClanRank::Bronze => "Bronze",
        }
    }

    pub fn threshold(&self) -> f64 {
        RANK_THRESHOLDS
            .iter()
            .find(|(_, rank)| rank == self)
            .map(|(threshold, _)| *threshold)
            .unwrap_or(0.0)
    }
}

impl fmt::Display for ClanRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn rank_name(points: f64) -> &'static str {
    ClanRank::from_points(points).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_descend_to_zero() {
        assert!(RANK_THRESHOLDS.windows(2).all(|w| w[0].0 > w[1].0));
        assert_eq!(RANK_THRESHOLDS.last().map(|(t, _)| *t), Some(0.0));
    }

    #[test]
    fn test_bronze_below_first_threshold() {
        for points in [0.0, 1.0, 500.5, 998.99, 999.0] {
            assert_eq!(rank_name(points), "Bronze");
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(rank_name(1_000.0), "Iron");
        assert_eq!(rank_name(2_499.99), "Iron");
        assert_eq!(rank_name(2_500.0), "Steel");
        assert_eq!(rank_name(99_999.0), "Rune");
        assert_eq!(rank_name(100_000.0), "Dragon");
        assert_eq!(rank_name(500_000.0), "Zenyte");
        assert_eq!(rank_name(10_000_000.0), "Zenyte");
    }

    #[test]
    fn test_negative_and_nan_fall_through_to_bronze() {
        assert_eq!(ClanRank::from_points(-5.0), ClanRank::Bronze);
        assert_eq!(ClanRank::from_points(f64::NAN), ClanRank::Bronze);
    }

    #[test]
    fn test_every_rank_reaches_its_own_threshold() {
        for (threshold, rank) in RANK_THRESHOLDS {
            assert_eq!(rank.threshold(), threshold);
            assert_eq!(ClanRank::from_points(threshold), rank);
        }
    }
}
