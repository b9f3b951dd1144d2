//! Verse and juz identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::timeline::TimelineError;

/// A juz number, 1 through 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct JuzNumber(u8);

impl JuzNumber {
    pub fn new(n: u8) -> Result<Self, TimelineError> {
        if (1..=30).contains(&n) {
            Ok(Self(n))
        } else {
            Err(TimelineError::InvalidJuz(n))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for JuzNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for JuzNumber {
    type Error = TimelineError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<JuzNumber> for u8 {
    fn from(juz: JuzNumber) -> u8 {
        juz.0
    }
}

impl FromStr for JuzNumber {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .parse()
            .map_err(|_| TimelineError::InvalidJuzInput(s.to_string()))?;
        Self::new(n)
    }
}

/// A verse identifier of the form `<chapter>:<verse>`, e.g. `2:255`.
///
/// Serialized as its string form, matching the `verseKey` field the timeline
/// builder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerseKey {
    pub chapter: u16,
    pub verse: u16,
}

impl VerseKey {
    pub fn new(chapter: u16, verse: u16) -> Result<Self, TimelineError> {
        if chapter == 0 || verse == 0 {
            return Err(TimelineError::InvalidVerseKey(format!(
                "{chapter}:{verse}"
            )));
        }
        Ok(Self { chapter, verse })
    }

    /// Filesystem-safe form with the separator replaced by an underscore:
    /// `2:255` becomes `2_255`.
    pub fn safe_key(&self) -> String {
        format!("{}_{}", self.chapter, self.verse)
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseKey {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimelineError::InvalidVerseKey(s.to_string());

        let mut parts = s.split(':');
        let chapter = parts.next().ok_or_else(invalid)?;
        let verse = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        let chapter: u16 = chapter.parse().map_err(|_| invalid())?;
        let verse: u16 = verse.parse().map_err(|_| invalid())?;
        Self::new(chapter, verse).map_err(|_| invalid())
    }
}

impl TryFrom<String> for VerseKey {
    type Error = TimelineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<VerseKey> for String {
    fn from(key: VerseKey) -> String {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_and_display() {
        let key: VerseKey = "2:255".parse().unwrap();
        assert_eq!(key.chapter, 2);
        assert_eq!(key.verse, 255);
        assert_eq!(key.to_string(), "2:255");
    }

    #[test]
    fn test_safe_key_replaces_separator() {
        let key: VerseKey = "2:255".parse().unwrap();
        assert_eq!(key.safe_key(), "2_255");
    }

    #[test]
    fn test_rejects_malformed_keys() {
        for bad in ["", "1", "1:", ":1", "1:2:3", "a:1", "1:b", "0:1", "1:0"] {
            assert!(bad.parse::<VerseKey>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_serde_string_form() {
        let key: VerseKey = serde_json::from_str("\"1:7\"").unwrap();
        assert_eq!(key, VerseKey::new(1, 7).unwrap());
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"1:7\"");
    }

    #[test]
    fn test_juz_range() {
        assert!(JuzNumber::new(0).is_err());
        assert!(JuzNumber::new(31).is_err());
        assert_eq!(JuzNumber::new(30).unwrap().get(), 30);
        assert_eq!("3".parse::<JuzNumber>().unwrap(), JuzNumber::new(3).unwrap());
        assert!("".parse::<JuzNumber>().is_err());
    }

    #[test]
    fn test_juz_parse_error_names_the_input() {
        let err = "abc".parse::<JuzNumber>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid juz number: \"abc\" (expected 1-30)"
        );

        // Out-of-range but numeric input keeps the numeric error.
        let err = "31".parse::<JuzNumber>().unwrap_err();
        assert!(matches!(err, TimelineError::InvalidJuz(31)));
    }

    proptest! {
        #[test]
        fn prop_display_parse_roundtrip(chapter in 1u16..=114, verse in 1u16..=286) {
            let key = VerseKey::new(chapter, verse).unwrap();
            let parsed: VerseKey = key.to_string().parse().unwrap();
            prop_assert_eq!(parsed, key);
        }
    }
}
