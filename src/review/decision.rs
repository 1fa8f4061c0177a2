use serde::{Deserialize, Serialize};

use crate::config::ReviewSettings;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    AcceptMember,
    AcceptVisitor,
    Decline,
}

/// Role handed out on acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGrant {
    Member,
    Visitor,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::AcceptMember => "Accepted as Clan Member ✅",
            Decision::AcceptVisitor => "Accepted as Visitor ✅",
            Decision::Decline => "Declined ❌",
        }
    }

    pub fn role(&self) -> Option<RoleGrant> {
        match self {
            Decision::AcceptMember => Some(RoleGrant::Member),
            Decision::AcceptVisitor => Some(RoleGrant::Visitor),
            Decision::Decline => None,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "accept_member" | "member" => Some(Decision::AcceptMember),
            "accept_visitor" | "visitor" => Some(Decision::AcceptVisitor),
            "decline" | "reject" => Some(Decision::Decline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Reviewer {
    pub id: u64,
    pub tag: String,
}

/// What the platform shim has to apply once a reviewer clicks a decision.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionOutcome {
    pub decision: Decision,
    pub footer: String,
    pub applicant_notice: String,
    pub role_id: Option<u64>,
}

pub fn finalize_decision(
    decision: Decision,
    existing_footer: &str,
    reviewer: &Reviewer,
    applicant_name: &str,
    settings: &ReviewSettings,
) -> DecisionOutcome {
    let decided_by = format!(
        "Decision: {} by {} ({})",
        decision.label(),
        reviewer.tag,
        reviewer.id
    );
    let existing_footer = existing_footer.trim();
    let footer = if existing_footer.is_empty() {
        decided_by
    } else {
        format!("{} • {}", existing_footer, decided_by)
    };

    let role_id = match decision.role() {
        Some(RoleGrant::Member) => settings.member_role_id,
        Some(RoleGrant::Visitor) => settings.visitor_role_id,
        None => None,
    };

    DecisionOutcome {
        decision,
        footer,
        applicant_notice: format!(
            "Your application for {} has been reviewed.\nResult: {}",
            applicant_name,
            decision.label()
        ),
        role_id,
    }
}
