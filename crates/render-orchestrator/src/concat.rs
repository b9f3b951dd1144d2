//! Lossless assembly of rendered ayahs into one juz video.
//!
//! Uses ffmpeg's concat demuxer with stream copy. Every per-ayah output must
//! already exist; the first missing file aborts with an error naming it.

use std::path::PathBuf;
use std::process::Command;

use juzcast_common::{JuzcastError, JuzcastResult};
use juzcast_timeline_model::{JuzNumber, Layout};

use crate::load_timeline;
use crate::renderer::command_exists;

/// Concatenate all rendered ayahs of a juz into `out/juz_<n>.mp4`.
pub fn concat_juz(juz: JuzNumber, layout: &Layout) -> JuzcastResult<PathBuf> {
    let timeline = load_timeline(juz, layout)?;
    if timeline.is_empty() {
        return Err(JuzcastError::timeline(format!(
            "timeline for juz {juz} has no segments"
        )));
    }

    let mut files = Vec::with_capacity(timeline.len());
    for segment in &timeline.segments {
        let path = layout.output_path(juz, &segment.verse_key);
        if !path.is_file() {
            return Err(JuzcastError::FileNotFound { path });
        }
        // The concat demuxer wants absolute paths.
        files.push(std::fs::canonicalize(&path)?);
    }

    if !command_exists("ffmpeg") {
        return Err(JuzcastError::RendererUnavailable {
            name: "ffmpeg".to_string(),
        });
    }

    let out_file = layout.concat_output_path(juz);
    let list_path = std::env::temp_dir().join(format!(
        "juzcast-juz-{juz}-concat-{}.txt",
        std::process::id()
    ));
    std::fs::write(&list_path, concat_list(&files))?;

    tracing::info!(
        count = files.len(),
        out = %out_file.display(),
        "Concatenating ayahs (lossless)"
    );
    let status = Command::new("ffmpeg")
        .args(["-y", "-f", "concat", "-safe", "0", "-i"])
        .arg(&list_path)
        .args(["-c", "copy"])
        .arg(&out_file)
        .status();
    let _ = std::fs::remove_file(&list_path);

    let status = status?;
    if status.success() {
        Ok(out_file)
    } else {
        Err(JuzcastError::ConcatFailed {
            code: status.code(),
        })
    }
}

/// Build the concat-demuxer list file content. Single quotes in paths are
/// escaped the way the demuxer expects (`'\''`).
fn concat_list(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|f| {
            let escaped = f.display().to_string().replace('\'', "'\\''");
            format!("file '{escaped}'")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
