use tracing::debug;

/// Field value the hiscores use for "unranked / no data".
pub const NO_DATA: i64 = -1;

/// Positional hiscore record: one row per tracked metric, `[rank, count, extra...]`.
pub type HiscoreRows = Vec<Vec<i64>>;

/// Parse an `index_lite` body.
///
/// Rows that contain a non-integer field are kept with every field replaced by
/// [`NO_DATA`], so later rows stay aligned with their categories.
pub fn parse_rows(body: &str) -> HiscoreRows {
    body.lines().enumerate().map(|(index, line)| parse_row(index, line)).collect()
}

fn parse_row(index: usize, line: &str) -> Vec<i64> {
    if line.is_empty() {
        return Vec::new();
    }

    let fields: Vec<&str> = line.split(',').collect();
    let parsed: Option<Vec<i64>> = fields
        .iter()
        .map(|field| field.trim().parse::<i64>().ok())
        .collect();

    match parsed {
        Some(row) => row,
        None => {
            debug!("Malformed hiscore row {}: {:?}", index, line);
            vec![NO_DATA; fields.len()]
        }
    }
}
