//! Timeline and segment records.
//!
//! A timeline file (`timelines/juz_<n>.json`) is produced by the timeline
//! builder and consumed read-only here. The builder attaches more per-segment
//! data than the render loop needs (verse text, translations, audio paths);
//! only the fields the orchestrator uses are modeled, the rest are ignored
//! on deserialization.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::verse::VerseKey;

/// Errors from loading or interpreting timeline data.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("Timeline file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid verse key: {0:?}")]
    InvalidVerseKey(String),

    #[error("Invalid juz number: {0} (expected 1-30)")]
    InvalidJuz(u8),

    #[error("Invalid juz number: {0:?} (expected 1-30)")]
    InvalidJuzInput(String),

    #[error("Failed to read timeline: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse timeline: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One unit of render work: a single ayah of the juz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Verse identifier, `<chapter>:<verse>`.
    pub verse_key: VerseKey,

    /// Ayah ordinal within its chapter.
    #[serde(default)]
    pub ayah_number: Option<u32>,

    /// Start offset within the assembled juz video, in seconds.
    #[serde(default)]
    pub start_sec: Option<f64>,

    /// Segment duration, in seconds.
    #[serde(default)]
    pub duration_sec: Option<f64>,
}

/// Ordered list of segments for one juz. Order is significant: segments
/// render in timeline order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default)]
    pub juz_number: Option<u8>,

    pub segments: Vec<Segment>,

    #[serde(default)]
    pub total_duration_sec: Option<f64>,
}

impl Timeline {
    /// Load a timeline from disk.
    pub fn load(path: &Path) -> Result<Self, TimelineError> {
        if !path.is_file() {
            return Err(TimelineError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builder_output() {
        // Shape emitted by the timeline builder, extra fields included.
        let json = r#"{
            "juzNumber": 1,
            "segments": [
                {
                    "verseKey": "1:1",
                    "ayahNumber": 1,
                    "arabic": { "uthmani": "...", "simple": "..." },
                    "translations": [],
                    "audioRelPath": "Alafasy/mp3/001001.mp3",
                    "startSec": 0,
                    "durationSec": 4.2
                },
                { "verseKey": "1:2" }
            ],
            "totalDurationSec": 4.2
        }"#;

        let timeline: Timeline = serde_json::from_str(json).unwrap();
        assert_eq!(timeline.juz_number, Some(1));
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.segments[0].verse_key.to_string(), "1:1");
        assert_eq!(timeline.segments[0].duration_sec, Some(4.2));
        assert_eq!(timeline.segments[1].verse_key.to_string(), "1:2");
        assert!(timeline.segments[1].ayah_number.is_none());
    }

    #[test]
    fn test_segments_field_is_required() {
        let result: Result<Timeline, _> = serde_json::from_str(r#"{ "juzNumber": 1 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Timeline::load(&dir.path().join("juz_1.json")).unwrap_err();
        assert!(matches!(err, TimelineError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("juz_1.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Timeline::load(&path).unwrap_err();
        assert!(matches!(err, TimelineError::Parse(_)));
    }
}
