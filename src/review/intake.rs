use tracing::{info, warn};

use crate::{
    config::ReviewSettings,
    models::{Application, PointsReport, Result},
    review::ReviewSummary,
    scoring::PointsCalculator,
    utils::build_nickname,
};

/// Where the review summary is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    StaffChannel(u64),
    /// No staff channel configured; the applicant gets a copy instead.
    ApplicantCopy,
}

/// Everything the platform shim needs to act on a submitted application.
#[derive(Debug, Clone)]
pub struct Submission {
    pub report: PointsReport,
    pub summary: ReviewSummary,
    pub nickname: String,
    pub routing: Routing,
}

impl Submission {
    /// Acknowledgement shown to the applicant once delivery was attempted.
    pub fn acknowledgement(&self, delivered: bool) -> &'static str {
        match (self.routing, delivered) {
            (Routing::StaffChannel(_), true) => {
                "✅ Application submitted! Staff and you have been notified."
            }
            (Routing::StaffChannel(_), false) => {
                "❌ Application saved, but staff notification failed."
            }
            (Routing::ApplicantCopy, true) => {
                "✅ Application submitted! (Staff channel not set; sent you a DM copy.)"
            }
            (Routing::ApplicantCopy, false) => {
                "✅ Application submitted! (Staff channel not set and DM failed.)"
            }
        }
    }
}

/// Score an application and prepare its review summary and nickname.
///
/// A player missing from the hiscores still produces a submission; a failed lookup does not.
pub async fn submit_application(
    calculator: &PointsCalculator,
    application: &Application,
    settings: &ReviewSettings,
) -> Result<Submission> {
    info!(
        "Application from {} ({}) for {} as {}",
        application.applicant.tag,
        application.applicant.id,
        application.player_name,
        application.application_type.as_str()
    );

    let report = calculator
        .lookup_account(&application.player_name, application.account_type)
        .await?;

    if !report.found {
        warn!("{} has no {} hiscores entry", application.player_name, application.account_type);
    }

    let summary = ReviewSummary::for_application(application, &report, settings.top_contributors);
    let nickname = build_nickname(
        &application.player_name,
        application.alts_text(),
        settings.nickname_limit,
    );
    let routing = match settings.staff_channel_id {
        Some(channel_id) => Routing::StaffChannel(channel_id),
        None => Routing::ApplicantCopy,
    };

    Ok(Submission {
        report,
        summary,
        nickname,
        routing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::hiscores::{MockHiscoreSource, BOSS_ORDER};
    use crate::models::{AccountType, Applicant, ApplicationType, ClanBotError};
    use crate::scoring::PointsTable;
    use std::sync::Arc;

    fn calculator(source: MockHiscoreSource) -> PointsCalculator {
        let table = PointsTable::from_json(r#"{"TzKal-Zuk": 50.0, "Zulrah": 1.0}"#).unwrap();
        PointsCalculator::new(Arc::new(source), Arc::new(table))
    }

    fn application() -> Application {
        Application::new(
            Applicant { id: 42, tag: "zezima".to_string() },
            "Zezima",
            AccountType::Ultimate,
            ApplicationType::Visitor,
        )
        .with_capes("Yes", "Yes")
        .with_alts("Alt1, VeryLongAlternateAccountNameHere")
    }

    #[tokio::test]
    async fn test_submission_with_staff_channel() {
        let mut source = MockHiscoreSource::new();
        source.expect_fetch_rows().returning(|_, _| {
            Ok(BOSS_ORDER
                .iter()
                .map(|name| match *name {
                    "TzKal-Zuk" => vec![10, 2],
                    "Zulrah" => vec![10, 1000],
                    _ => vec![-1, -1],
                })
                .collect())
        });

        let mut settings = Settings::default().review;
        settings.staff_channel_id = Some(555);

        let submission = submit_application(&calculator(source), &application(), &settings)
            .await
            .unwrap();

        assert_eq!(submission.routing, Routing::StaffChannel(555));
        assert_eq!(submission.nickname, "Zezima | Alt1");
        assert_eq!(submission.report.total, 1100.0);
        assert_eq!(submission.summary.field("Recommended Rank"), Some("Iron"));
        assert_eq!(
            submission.summary.field("Alts"),
            Some("Alt1, VeryLongAlternateAccountNameHere")
        );
        assert_eq!(
            submission.acknowledgement(true),
            "✅ Application submitted! Staff and you have been notified."
        );
    }

    #[tokio::test]
    async fn test_unknown_player_still_submits() {
        let mut source = MockHiscoreSource::new();
        source.expect_fetch_rows().returning(|_, _| Ok(Vec::new()));

        let settings = Settings::default().review;
        let submission = submit_application(&calculator(source), &application(), &settings)
            .await
            .unwrap();

        assert_eq!(submission.routing, Routing::ApplicantCopy);
        assert_eq!(submission.summary.field("Recommended Rank"), Some("Bronze"));
        assert_eq!(
            submission.summary.field("Hiscores Lookup"),
            Some("User not found on selected hiscores.")
        );
        assert!(submission.acknowledgement(false).contains("DM failed"));
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_submission() {
        let mut source = MockHiscoreSource::new();
        source.expect_fetch_rows().returning(|player, _| {
            Err(ClanBotError::fetch_failed(player, Some(502), "bad gateway"))
        });

        let settings = Settings::default().review;
        let result = submit_application(&calculator(source), &application(), &settings).await;
        assert!(matches!(result, Err(ClanBotError::FetchFailed { .. })));
    }
}
