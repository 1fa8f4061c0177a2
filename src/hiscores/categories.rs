//! Positional mapping between the tail of an `index_lite` record and named bosses.
//!
//! The hiscores expose no names, only row order. If the upstream layout gains or loses
//! a row the whole tail shifts, so `test_tail_layout_is_pinned` must be updated together
//! with [`BOSS_ORDER`].

use crate::hiscores::{HiscoreRows, NO_DATA};
use crate::models::KillCounts;

/// Bosses in the order they appear at the end of an `index_lite` record.
pub const BOSS_ORDER: [&str; 67] = [
    "Abyssal Sire",
    "Alchemical Hydra",
    "Amoxliatl",
    "Araxxor",
    "Artio",
    "Barrows Chests",
    "Bryophyta",
    "Callisto",
    "Calvar'ion",
    "Cerberus",
    "Chambers Of Xeric",
    "Chambers Of Xeric (CM)",
    "Chaos Elemental",
    "Chaos Fanatic",
    "Commander Zilyana",
    "Corporeal Beast",
    "Crazy Archaeologist",
    "Dagannoth Prime",
    "Dagannoth Rex",
    "Dagannoth Supreme",
    "Deranged Archaeologist",
    "Doom of Mokhaiotl",
    "Duke Sucellus",
    "General Graardor",
    "Giant Mole",
    "Grotesque Guardians",
    "Hespori",
    "Kalphite Queen",
    "King Black Dragon",
    "Kraken",
    "Kree'Arra",
    "K'ril Tsutsaroth",
    "Lunar Chests",
    "Mimic",
    "Nex",
    "Nightmare",
    "Phosani's Nightmare",
    "Obor",
    "Phantom Muspah",
    "Sarachnis",
    "Scorpia",
    "Scurrius",
    "Skotizo",
    "Sol Heredit",
    "Spindel",
    "Tempoross",
    "The Gauntlet",
    "The Corrupted Gauntlet",
    "The Hueycoatl",
    "The Leviathan",
    "The Royal Titans",
    "The Whisperer",
    "Theatre Of Blood",
    "Theatre Of Blood (HM)",
    "Thermonuclear Smoke Devil",
    "Tombs of Amascut",
    "Tombs of Amascut (Expert Mode)",
    "TzKal-Zuk",
    "TzTok-Jad",
    "Vardorvis",
    "Venenatis",
    "Vet'ion",
    "Vorkath",
    "Wintertodt",
    "Yama",
    "Zalcano",
    "Zulrah",
];

pub fn is_known_boss(name: &str) -> bool {
    BOSS_ORDER.contains(&name)
}

/// The trailing rows that line up with [`BOSS_ORDER`].
///
/// A record shorter than the boss list yields all of its rows.
pub fn boss_tail(rows: &HiscoreRows) -> &[Vec<i64>] {
    let start = rows.len().saturating_sub(BOSS_ORDER.len());
    &rows[start..]
}

/// Bosses paired with [`boss_tail`], aligned from the end of both sequences.
fn paired_bosses(tail_len: usize) -> &'static [&'static str] {
    &BOSS_ORDER[BOSS_ORDER.len() - tail_len.min(BOSS_ORDER.len())..]
}

/// Map the record's trailing rows onto boss names, position for position.
///
/// The last row always pairs with the last boss. The count is field 1 of each row when
/// present and non-negative, otherwise 0. Bosses without a paired row (leading entries
/// of the list when the record is short) are left out of the result.
pub fn extract_kill_counts(rows: &HiscoreRows) -> KillCounts {
    let tail = boss_tail(rows);
    paired_bosses(tail.len())
        .iter()
        .zip(tail)
        .map(|(name, row)| {
            let count = match row.get(1) {
                Some(&value) if value >= 0 => value as u64,
                _ => 0,
            };
            (*name, count)
        })
        .collect()
}

/// One line of the raw tail dump used to check the alignment by eye.
#[derive(Debug, Clone, PartialEq)]
pub struct TailRow {
    pub index: usize,
    pub name: &'static str,
    pub rank: i64,
    pub score: i64,
    pub xp: i64,
}

impl TailRow {
    pub fn render(&self) -> String {
        format!(
            "{:02} | {:<28} | rank={:<6} score/kc={:<8} xp={:<8}",
            self.index, self.name, self.rank, self.score, self.xp
        )
    }
}

pub fn tail_rows(rows: &HiscoreRows) -> Vec<TailRow> {
    let tail = boss_tail(rows);
    paired_bosses(tail.len())
        .iter()
        .copied()
        .zip(tail)
        .enumerate()
        .map(|(index, (name, row))| TailRow {
            index,
            name,
            rank: row.first().copied().unwrap_or(NO_DATA),
            score: row.get(1).copied().unwrap_or(NO_DATA),
            xp: row.get(2).copied().unwrap_or(NO_DATA),
        })
        .collect()
}
