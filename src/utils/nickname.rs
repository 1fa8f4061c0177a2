use std::collections::HashSet;

/// Platform cap on display name length, in characters.
pub const DEFAULT_NICKNAME_LIMIT: usize = 32;

const ALT_DELIMITERS: [char; 4] = [',', '|', '\n', ';'];
const NICKNAME_SEPARATOR: &str = " | ";

/// Split free text into alternate account names.
///
/// Any of `,` `|` `;` or a newline separates names. Pieces are trimmed, empty ones
/// dropped, and later case-insensitive duplicates discarded, keeping the casing that
/// was seen first.
pub fn parse_alts(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    raw.split(&ALT_DELIMITERS[..])
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .filter(|alt| seen.insert(alt.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Compose `main | alt1 | alt2 ...` within `limit` characters.
///
/// Alts are appended in order until the first one that does not fit; nothing after it
/// is tried.
pub fn build_nickname(main: &str, alts_raw: &str, limit: usize) -> String {
    let mut nickname = main.to_string();

    for alt in parse_alts(alts_raw) {
        let candidate = format!("{}{}{}", nickname, NICKNAME_SEPARATOR, alt);
        if candidate.chars().count() > limit {
            break;
        }
        nickname = candidate;
    }

    nickname
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alts_dedups_case_insensitively() {
        assert_eq!(parse_alts("A, a, B"), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_alts_accepts_every_delimiter() {
        assert_eq!(
            parse_alts("Iron Bob|Uim Bob;  Gim Bob \nHc Bob,,"),
            vec!["Iron Bob", "Uim Bob", "Gim Bob", "Hc Bob"]
        );
    }

    #[test]
    fn test_parse_alts_empty_input() {
        assert!(parse_alts("").is_empty());
        assert!(parse_alts(" , | ; \n").is_empty());
    }

    #[test]
    fn test_build_nickname_stops_at_first_overflow() {
        let nickname = build_nickname("Zezima", "Alt1, VeryLongAlternateAccountNameHere", 32);
        assert_eq!(nickname, "Zezima | Alt1");
    }

    #[test]
    fn test_build_nickname_does_not_skip_ahead() {
        // "Tiny" would fit after the long alt is rejected, but packing stops there.
        let nickname = build_nickname("Zezima", "Alt1, VeryLongAlternateAccountNameHere, Tiny", 32);
        assert_eq!(nickname, "Zezima | Alt1");
    }

    #[test]
    fn test_build_nickname_exact_limit() {
        // 6 + 3 + 4 = 13 characters
        assert_eq!(build_nickname("Zezima", "Alt1", 13), "Zezima | Alt1");
        assert_eq!(build_nickname("Zezima", "Alt1", 12), "Zezima");
    }

    #[test]
    fn test_build_nickname_without_alts() {
        assert_eq!(build_nickname("Zezima", "", DEFAULT_NICKNAME_LIMIT), "Zezima");
    }

    #[test]
    fn test_build_nickname_counts_characters_not_bytes() {
        assert_eq!(build_nickname("Zézima", "Ålt", 12), "Zézima | Ålt");
    }
}
