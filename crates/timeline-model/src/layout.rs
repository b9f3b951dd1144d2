//! On-disk path conventions.
//!
//! All paths the orchestrator touches derive from two roots, passed in
//! explicitly rather than read from ambient state:
//!
//! - `timelines/juz_<n>.json`: timeline input
//! - `out/juz_<n>/ayah_<chapter>_<verse>.mp4`: per-ayah render output
//! - `out/juz_<n>.mp4`: assembled juz video
//!
//! The existence of a per-ayah output file is the completion marker for that
//! segment; nothing reads its content.

use std::path::PathBuf;

use crate::verse::{JuzNumber, VerseKey};

/// Directory roots and the path derivations built on them.
#[derive(Debug, Clone)]
pub struct Layout {
    pub timelines_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            timelines_dir: PathBuf::from("timelines"),
            out_dir: PathBuf::from("out"),
        }
    }
}

impl Layout {
    pub fn new(timelines_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            timelines_dir: timelines_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Timeline input file for a juz.
    pub fn timeline_path(&self, juz: JuzNumber) -> PathBuf {
        self.timelines_dir.join(format!("juz_{juz}.json"))
    }

    /// Directory holding the per-ayah outputs of a juz.
    pub fn output_dir(&self, juz: JuzNumber) -> PathBuf {
        self.out_dir.join(format!("juz_{juz}"))
    }

    /// Expected output file for one segment.
    pub fn output_path(&self, juz: JuzNumber, verse_key: &VerseKey) -> PathBuf {
        self.output_dir(juz)
            .join(format!("ayah_{}.mp4", verse_key.safe_key()))
    }

    /// Assembled whole-juz video.
    pub fn concat_output_path(&self, juz: JuzNumber) -> PathBuf {
        self.out_dir.join(format!("juz_{juz}.mp4"))
    }
}
