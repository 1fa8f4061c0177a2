//! Reviewer- and applicant-facing output built from pipeline results.
//!
//! Nothing here talks to a chat platform; callers render these values however their
//! platform wants.

pub mod decision;
pub mod intake;
pub mod pages;
pub mod summary;

pub use decision::{finalize_decision, Decision, DecisionOutcome, Reviewer, RoleGrant};
pub use intake::{submit_application, Routing, Submission};
pub use pages::{
    chunk_text, paginate_lines, points_pages, points_response, PointsPage, PointsResponse,
};
pub use summary::{ReviewSummary, SummaryField};

use crate::models::{AccountType, ClanBotError};

pub const NO_ELIGIBLE_KILLS: &str = "No eligible boss killcounts detected for points.";

/// Message shown to the requester when a request fails.
pub fn failure_message(error: &ClanBotError) -> String {
    match error {
        ClanBotError::InvalidAccountType(_) => format!(
            "Unknown account type. Try: {}",
            AccountType::valid_options_hint()
        ),
        ClanBotError::PlayerNotFound { player, account_type } => {
            format!("Couldn't find hiscores for '{}' on {}.", player, account_type)
        }
        ClanBotError::FetchFailed { .. } => {
            "Sorry, the hiscores lookup failed. Please try again in a few minutes.".to_string()
        }
        _ => "❌ Something went wrong. Please try again later.".to_string(),
    }
}
