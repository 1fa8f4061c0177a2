use crate::{
    hiscores::{extract_kill_counts, tail_rows, HiscoreSource, TailRow},
    models::{AccountType, ClanBotError, KillCounts, PointsReport, Result},
    scoring::{compute_points, rank_name, PointsTable},
};
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Runs players through fetch → extract → score → rank.
///
/// Holds no mutable state; one calculator can serve any number of concurrent lookups.
#[derive(Clone)]
pub struct PointsCalculator {
    source: Arc<dyn HiscoreSource>,
    points_table: Arc<PointsTable>,
}

impl PointsCalculator {
    pub fn new(source: Arc<dyn HiscoreSource>, points_table: Arc<PointsTable>) -> Self {
        Self {
            source,
            points_table,
        }
    }

    /// Resolve a raw account type string, rejecting it before any network call.
    pub fn resolve_account_type(raw: &str) -> Result<AccountType> {
        AccountType::normalize(raw)
            .ok_or_else(|| ClanBotError::InvalidAccountType(raw.trim().to_string()))
    }

    pub async fn lookup(&self, player: &str, account_type_raw: &str) -> Result<PointsReport> {
        let account_type = Self::resolve_account_type(account_type_raw)?;
        self.lookup_account(player, account_type).await
    }

    pub async fn lookup_account(
        &self,
        player: &str,
        account_type: AccountType,
    ) -> Result<PointsReport> {
        info!("Looking up {} on {} hiscores", player, account_type);

        let rows = self.source.fetch_rows(player, account_type).await?;
        let found = !rows.is_empty();
        let kill_counts = if found {
            extract_kill_counts(&rows)
        } else {
            KillCounts::new()
        };

        let (total, breakdown) = compute_points(&kill_counts, &self.points_table);
        let rank = rank_name(total).to_string();

        info!(
            "{} ({}): {:.2} points across {} bosses, rank {}",
            player,
            account_type,
            total,
            breakdown.len(),
            rank
        );

        Ok(PointsReport {
            player: player.to_string(),
            account_type,
            found,
            kill_counts,
            total,
            breakdown,
            rank,
            calculated_at: Utc::now(),
        })
    }

    /// Like [`lookup`](Self::lookup), but gives up once `deadline` elapses.
    ///
    /// The in-flight request is dropped on expiry.
    pub async fn lookup_within(
        &self,
        player: &str,
        account_type_raw: &str,
        deadline: Duration,
    ) -> Result<PointsReport> {
        match tokio::time::timeout(deadline, self.lookup(player, account_type_raw)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Lookup for {} exceeded {:?}", player, deadline);
                Err(ClanBotError::fetch_failed(
                    player,
                    None,
                    format!("lookup exceeded {:?}", deadline),
                ))
            }
        }
    }

    /// Look up several players concurrently. Each lookup succeeds or fails on its own.
    pub async fn lookup_many(
        &self,
        players: &[String],
        account_type: AccountType,
    ) -> Vec<Result<PointsReport>> {
        info!("Looking up {} players", players.len());

        let lookups = players
            .iter()
            .map(|player| self.lookup_account(player, account_type));

        join_all(lookups).await
    }

    /// Raw tail rows for checking the boss alignment.
    pub async fn debug_tail(
        &self,
        player: &str,
        account_type: AccountType,
    ) -> Result<Vec<TailRow>> {
        let rows = self.source.fetch_rows(player, account_type).await?;
        Ok(tail_rows(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hiscores::{HiscoreRows, MockHiscoreSource, BOSS_ORDER};
    use mockall::predicate::eq;

    fn full_record(kc: impl Fn(&str) -> i64) -> HiscoreRows {
        let mut rows: HiscoreRows = (0..24).map(|_| vec![1, 99, 13_034_431]).collect();
        rows.extend(BOSS_ORDER.iter().map(|name| vec![1000, kc(*name)]));
        rows
    }

    fn weights() -> Arc<PointsTable> {
        let json = r#"{"Zulrah": 0.75, "Vorkath": 1.0, "TzKal-Zuk": 50.0}"#;
        Arc::new(PointsTable::from_json(json).unwrap())
    }

    fn calculator(source: MockHiscoreSource) -> PointsCalculator {
        PointsCalculator::new(Arc::new(source), weights())
    }

    #[tokio::test]
    async fn test_invalid_account_type_never_fetches() {
        let mut source = MockHiscoreSource::new();
        source.expect_fetch_rows().times(0);

        let err = calculator(source).lookup("Zezima", "pure").await.unwrap_err();
        assert!(matches!(err, ClanBotError::InvalidAccountType(ref raw) if raw == "pure"));
    }

    #[tokio::test]
    async fn test_lookup_scores_and_ranks() {
        let mut source = MockHiscoreSource::new();
        source
            .expect_fetch_rows()
            .with(eq("Zezima"), eq(AccountType::HardcoreIronman))
            .times(1)
            .returning(|_, _| {
                Ok(full_record(|name| match name {
                    "Zulrah" => 1000,
                    "Vorkath" => 300,
                    "TzKal-Zuk" => 4,
                    "Obor" => 50,
                    _ => -1,
                }))
            });

        let report = calculator(source).lookup("Zezima", " HCIM ").await.unwrap();

        assert!(report.found);
        assert_eq!(report.account_type, AccountType::HardcoreIronman);
        assert_eq!(report.kill_counts.len(), BOSS_ORDER.len());
        assert_eq!(report.kill_counts.get("Obor"), Some(50));
        assert_eq!(report.total, 750.0 + 300.0 + 200.0);
        assert_eq!(report.rank, "Iron");
        assert_eq!(report.breakdown[0].category, "Zulrah");
        assert_eq!(report.formatted_total(), "1250.00");
    }

    #[tokio::test]
    async fn test_not_found_degrades_to_zero() {
        let mut source = MockHiscoreSource::new();
        source.expect_fetch_rows().returning(|_, _| Ok(Vec::new()));

        let report = calculator(source).lookup("Nobody", "normal").await.unwrap();

        assert!(!report.found);
        assert!(report.kill_counts.is_empty());
        assert_eq!(report.total, 0.0);
        assert!(report.breakdown.is_empty());
        assert_eq!(report.rank, "Bronze");
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let mut source = MockHiscoreSource::new();
        source.expect_fetch_rows().returning(|player, _| {
            Err(ClanBotError::fetch_failed(player, Some(500), "unexpected status"))
        });

        let err = calculator(source).lookup("Zezima", "normal").await.unwrap_err();
        assert!(matches!(err, ClanBotError::FetchFailed { status: Some(500), .. }));
    }

    #[tokio::test]
    async fn test_lookup_many_keeps_results_independent() {
        let mut source = MockHiscoreSource::new();
        source.expect_fetch_rows().times(3).returning(|player, _| match player {
            "Broken" => Err(ClanBotError::fetch_failed(player, None, "connection reset")),
            "Missing" => Ok(Vec::new()),
            _ => Ok(full_record(|name| if name == "Vorkath" { 10 } else { 0 })),
        });

        let players = vec!["Zezima".to_string(), "Broken".to_string(), "Missing".to_string()];
        let results = calculator(source).lookup_many(&players, AccountType::Normal).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().total, 10.0);
        assert!(results[1].is_err());
        assert!(!results[2].as_ref().unwrap().found);
    }

    #[tokio::test]
    async fn test_debug_tail_aligns_with_boss_order() {
        let mut source = MockHiscoreSource::new();
        source.expect_fetch_rows().returning(|_, _| Ok(full_record(|_| 1)));

        let tail = calculator(source).debug_tail("Zezima", AccountType::Normal).await.unwrap();
        assert_eq!(tail.len(), BOSS_ORDER.len());
        assert_eq!(tail.last().map(|row| row.name), Some("Zulrah"));
    }

    struct SlowSource;

    #[async_trait::async_trait]
    impl HiscoreSource for SlowSource {
        async fn fetch_rows(
            &self,
            _player: &str,
            _account_type: AccountType,
        ) -> Result<HiscoreRows> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_lookup_within_times_out() {
        let calc = PointsCalculator::new(Arc::new(SlowSource), weights());
        let err = calc
            .lookup_within("Zezima", "normal", Duration::from_millis(20))
            .await
            .unwrap_err();
        assert!(matches!(err, ClanBotError::FetchFailed { status: None, .. }));
    }
}
