use serde::{Deserialize, Serialize};
use std::fmt;

/// Hiscore leaderboard a player is ranked on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Normal,
    Ironman,
    HardcoreIronman,
    Ultimate,
    GroupIronman,
    UnrankedGroupIronman,
}

/// Free-form spellings accepted from users, many-to-one onto canonical keys.
const ACCOUNT_TYPE_ALIASES: &[(&str, AccountType)] = &[
    ("main", AccountType::Normal),
    ("normal", AccountType::Normal),
    ("std", AccountType::Normal),
    ("iron", AccountType::Ironman),
    ("ironman", AccountType::Ironman),
    ("im", AccountType::Ironman),
    ("hardcore", AccountType::HardcoreIronman),
    ("hardcore ironman", AccountType::HardcoreIronman),
    ("hcim", AccountType::HardcoreIronman),
    ("hc", AccountType::HardcoreIronman),
    ("ultimate", AccountType::Ultimate),
    ("ultimate ironman", AccountType::Ultimate),
    ("uim", AccountType::Ultimate),
    ("ui", AccountType::Ultimate),
    ("group", AccountType::GroupIronman),
    ("gim", AccountType::GroupIronman),
    ("unranked group", AccountType::UnrankedGroupIronman),
    ("ugim", AccountType::UnrankedGroupIronman),
    ("ugi", AccountType::UnrankedGroupIronman),
];

impl AccountType {
    pub const ALL: [AccountType; 6] = [
        AccountType::Normal,
        AccountType::Ironman,
        AccountType::HardcoreIronman,
        AccountType::Ultimate,
        AccountType::GroupIronman,
        AccountType::UnrankedGroupIronman,
    ];

    /// Canonical key, also used as the hiscores path suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Normal => "normal",
            AccountType::Ironman => "ironman",
            AccountType::HardcoreIronman => "hardcore_ironman",
            AccountType::Ultimate => "ultimate",
            AccountType::GroupIronman => "group_ironman",
            AccountType::UnrankedGroupIronman => "unranked_group_ironman",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Normal => "Normal",
            AccountType::Ironman => "Ironman",
            AccountType::HardcoreIronman => "Hardcore Ironman",
            AccountType::Ultimate => "Ultimate Ironman",
            AccountType::GroupIronman => "Group Ironman",
            AccountType::UnrankedGroupIronman => "Unranked Group Ironman",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AccountType::Normal => "Standard account",
            AccountType::Ironman => "Ironman hiscores",
            AccountType::HardcoreIronman => "HCIM hiscores",
            AccountType::Ultimate => "UIM hiscores",
            AccountType::GroupIronman => "GIM hiscores",
            AccountType::UnrankedGroupIronman => "UGIM hiscores",
        }
    }

    /// Path suffix appended to the hiscores module. Normal accounts have none.
    pub fn hiscore_suffix(&self) -> Option<&'static str> {
        match self {
            AccountType::Normal => None,
            other => Some(other.as_str()),
        }
    }

    /// Canonical key rendered for humans, e.g. `hardcore_ironman` -> `Hardcore Ironman`.
    pub fn title_case(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == key)
    }

    /// Resolve user input to an account type.
    ///
    /// Input is trimmed and lower-cased, then looked up in the alias table. Anything not
    /// aliased is accepted only if it already is a canonical key. Empty input yields `None`.
    pub fn normalize(raw: &str) -> Option<Self> {
        let key = raw.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        ACCOUNT_TYPE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, account_type)| *account_type)
            .or_else(|| Self::from_key(&key))
    }

    /// Comma separated short names offered back to users who typed something invalid.
    pub fn valid_options_hint() -> &'static str {
        "normal, ironman, hcim, uim, gim, ugim"
    }
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Normal
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_resolves_regardless_of_case_and_whitespace() {
        for (alias, expected) in ACCOUNT_TYPE_ALIASES {
            assert_eq!(AccountType::normalize(alias), Some(*expected));
            assert_eq!(AccountType::normalize(&alias.to_uppercase()), Some(*expected));
            assert_eq!(AccountType::normalize(&format!("  {}\t", alias)), Some(*expected));
        }
    }

    #[test]
    fn test_canonical_keys_resolve_to_themselves() {
        for account_type in AccountType::ALL {
            assert_eq!(AccountType::normalize(account_type.as_str()), Some(account_type));
        }
    }

    #[test]
    fn test_unknown_and_empty_input_rejected() {
        assert_eq!(AccountType::normalize(""), None);
        assert_eq!(AccountType::normalize("   "), None);
        assert_eq!(AccountType::normalize("pure"), None);
        assert_eq!(AccountType::normalize("hardcore-ironman"), None);
        assert_eq!(AccountType::normalize("skiller"), None);
    }

    #[test]
    fn test_hiscore_suffix() {
        assert_eq!(AccountType::Normal.hiscore_suffix(), None);
        assert_eq!(AccountType::HardcoreIronman.hiscore_suffix(), Some("hardcore_ironman"));
        assert_eq!(
            AccountType::UnrankedGroupIronman.hiscore_suffix(),
            Some("unranked_group_ironman")
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(AccountType::Normal.title_case(), "Normal");
        assert_eq!(AccountType::HardcoreIronman.title_case(), "Hardcore Ironman");
        assert_eq!(AccountType::UnrankedGroupIronman.title_case(), "Unranked Group Ironman");
    }
}
