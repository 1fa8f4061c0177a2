use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Application, PointsReport};
use crate::utils::parse_alts;

/// Longest value a single summary field may carry.
pub const FIELD_VALUE_LIMIT: usize = 1024;

const EMPTY_VALUE: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Platform-neutral review card for one application.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSummary {
    pub title: String,
    pub fields: Vec<SummaryField>,
    pub footer: String,
    pub timestamp: DateTime<Utc>,
}

impl ReviewSummary {
    pub fn for_application(
        application: &Application,
        report: &PointsReport,
        top_contributors: usize,
    ) -> Self {
        let mut summary = Self {
            title: "New Clan Application".to_string(),
            fields: Vec::new(),
            footer: format!("From {} ({})", application.applicant.tag, application.applicant.id),
            timestamp: application.submitted_at,
        };

        summary.push("OSRS Name", &application.player_name, true);
        summary.push("Account Type", &application.account_type.title_case(), true);
        summary.push("Application Type", application.application_type.label(), true);
        summary.push("Recommended Rank", &report.rank, true);
        summary.push("Fire Cape", &application.fire_cape, true);
        summary.push("Infernal Cape", &application.infernal_cape, true);

        if let Some(alts_raw) = application.alts_raw.as_deref() {
            summary.push("Alts", &parse_alts(alts_raw).join(", "), false);
        }

        if report.found {
            summary.push("Total Points", &report.formatted_total(), false);
            let top: Vec<String> = report
                .top_contributors(top_contributors)
                .iter()
                .map(|entry| entry.summary_line())
                .collect();
            if !top.is_empty() {
                summary.push("Top Contributors", &top.join("\n"), false);
            }
        } else {
            summary.push("Hiscores Lookup", "User not found on selected hiscores.", false);
        }

        summary
    }

    fn push(&mut self, name: &str, value: &str, inline: bool) {
        let value = truncate_chars(value.trim(), FIELD_VALUE_LIMIT);
        self.fields.push(SummaryField {
            name: name.to_string(),
            value: if value.is_empty() { EMPTY_VALUE.to_string() } else { value },
            inline,
        });
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.title);
        for field in &self.fields {
            if field.value.contains('\n') {
                out.push_str(&format!("{}:\n{}\n", field.name, field.value));
            } else {
                out.push_str(&format!("{}: {}\n", field.name, field.value));
            }
        }
        let stamp = self.timestamp.format("%Y-%m-%d %H:%M UTC");
        out.push_str(&format!("{} • {}", self.footer, stamp));
        out
    }
}

pub(crate) fn truncate_chars(value: &str, limit: usize) -> String {
    value.chars().take(limit).collect()
}
