use crate::models::{PointsReport, Result};
use crate::review::{failure_message, NO_ELIGIBLE_KILLS};

/// One page of a points breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsPage {
    pub title: String,
    pub lines: Vec<String>,
    /// Only the first page carries the total.
    pub total: Option<String>,
}

impl PointsPage {
    pub fn render(&self) -> String {
        let mut out = format!("{}\n{}", self.title, self.lines.join("\n"));
        if let Some(total) = &self.total {
            out.push_str(&format!("\nTotal Points: {}", total));
        }
        out
    }
}

/// Group lines into pages of at most `budget` characters, counting one separator per line.
///
/// A single line longer than the budget gets a page to itself.
pub fn paginate_lines(lines: &[String], budget: usize) -> Vec<Vec<String>> {
    let mut pages = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_len = 0;

    for line in lines {
        let add_len = line.chars().count() + 1;
        if current_len + add_len > budget && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push(line.clone());
        current_len += add_len;
    }

    if !current.is_empty() {
        pages.push(current);
    }

    pages
}

/// What a points lookup shows the requester.
#[derive(Debug, Clone, PartialEq)]
pub enum PointsResponse {
    Breakdown { pages: Vec<PointsPage>, rank: String },
    /// Found on the hiscores but nothing scored.
    NoEligibleKills,
    Failed(String),
}

impl PointsResponse {
    pub fn render(&self) -> String {
        match self {
            PointsResponse::Breakdown { pages, rank } => {
                let mut parts: Vec<String> = pages.iter().map(|page| page.render()).collect();
                parts.push(format!("Recommended Rank: {}", rank));
                parts.join("\n\n")
            }
            PointsResponse::NoEligibleKills => NO_ELIGIBLE_KILLS.to_string(),
            PointsResponse::Failed(message) => message.clone(),
        }
    }
}

/// Decide between the not-found, no-eligible-kills and paged outcomes of a lookup.
pub fn points_response(result: Result<PointsReport>, budget: usize) -> PointsResponse {
    match result.and_then(|report| report.ensure_found()) {
        Ok(report) if report.total == 0.0 => PointsResponse::NoEligibleKills,
        Ok(report) => PointsResponse::Breakdown {
            pages: points_pages(&report, budget),
            rank: report.rank,
        },
        Err(e) => PointsResponse::Failed(failure_message(&e)),
    }
}

/// Split text into chunks of at most `size` characters.
pub fn chunk_text(text: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(size.max(1)).map(|chunk| chunk.iter().collect()).collect()
}

/// Breakdown pages for a lookup, titled `{player} — {account type} hiscores`.
pub fn points_pages(report: &PointsReport, budget: usize) -> Vec<PointsPage> {
    let lines: Vec<String> = report.breakdown.iter().map(|entry| entry.summary_line()).collect();
    let pages = paginate_lines(&lines, budget);
    let page_count = pages.len();

    pages
        .into_iter()
        .enumerate()
        .map(|(index, lines)| {
            let mut title = format!("{} — {} hiscores", report.player, report.account_type);
            if page_count > 1 {
                title.push_str(&format!(" (part {}/{})", index + 1, page_count));
            }
            PointsPage {
                title,
                lines,
                total: (index == 0).then(|| report.formatted_total()),
            }
        })
        .collect()
}
