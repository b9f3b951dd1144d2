//! The per-ayah resume loop and juz inspection.
//!
//! The loop is idempotent across runs: a segment whose output file exists is
//! skipped without re-validation, everything else renders in timeline order.
//! Any failure abandons the rest of the run; segments without an output file
//! are simply retried next time.

use juzcast_common::{CancelToken, JuzcastError, JuzcastResult};
use juzcast_timeline_model::{JuzNumber, Layout, Timeline, VerseKey};

use crate::load_timeline;
use crate::renderer::Renderer;

/// Counters for one pass over a timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub rendered: u64,
    pub skipped: u64,
}

/// Render every pending segment of a juz, in timeline order.
///
/// This is the main entry point for a resumable run.
pub async fn render_juz(
    juz: JuzNumber,
    layout: &Layout,
    renderer: &dyn Renderer,
    cancel: &CancelToken,
) -> JuzcastResult<RunReport> {
    let timeline = load_timeline(juz, layout)?;
    tracing::info!(
        juz = juz.get(),
        segments = timeline.len(),
        renderer = renderer.name(),
        "Starting run"
    );

    let started = std::time::Instant::now();
    let report = run_timeline(juz, &timeline, layout, renderer, cancel)?;
    tracing::info!(
        rendered = report.rendered,
        skipped = report.skipped,
        elapsed_secs = started.elapsed().as_secs_f64(),
        "Run finished"
    );
    Ok(report)
}

/// One ordered pass over an already-loaded timeline.
pub fn run_timeline(
    juz: JuzNumber,
    timeline: &Timeline,
    layout: &Layout,
    renderer: &dyn Renderer,
    cancel: &CancelToken,
) -> JuzcastResult<RunReport> {
    let mut report = RunReport::default();

    for segment in &timeline.segments {
        if cancel.is_cancelled() {
            return Err(JuzcastError::Cancelled);
        }

        let output_path = layout.output_path(juz, &segment.verse_key);
        if output_path.is_file() {
            // Existence is the completion signal; content is never checked.
            tracing::debug!(verse_key = %segment.verse_key, "Output exists, skipping");
            report.skipped += 1;
            continue;
        }

        tracing::info!(verse_key = %segment.verse_key, "Rendering ayah");
        if let Err(err) = renderer.render_unit(juz, &segment.verse_key, cancel) {
            // The renderer may have left a partial file behind; remove it so
            // the segment is retried, not skipped, on the next run. The path
            // may legitimately not exist yet.
            let _ = std::fs::remove_file(&output_path);
            match &err {
                JuzcastError::Cancelled => {
                    tracing::warn!(verse_key = %segment.verse_key, "Run interrupted")
                }
                other => tracing::error!(verse_key = %segment.verse_key, error = %other, "Render failed"),
            }
            return Err(err);
        }
        report.rendered += 1;
    }

    Ok(report)
}

/// Delegate a whole juz to the batch render command.
pub async fn delegate_batch(
    juz: JuzNumber,
    renderer: &dyn Renderer,
) -> JuzcastResult<()> {
    tracing::info!(juz = juz.get(), renderer = renderer.name(), "Delegating batch render");
    renderer.render_batch(juz)
}

/// Completion state of a juz, derived purely from output-file existence.
#[derive(Debug, Clone)]
pub struct JuzStatus {
    pub total: usize,
    pub done: Vec<VerseKey>,
    pub pending: Vec<VerseKey>,
}

/// Inspect a juz without rendering anything.
pub fn inspect_juz(juz: JuzNumber, layout: &Layout) -> JuzcastResult<JuzStatus> {
    let timeline = load_timeline(juz, layout)?;

    let mut done = Vec::new();
    let mut pending = Vec::new();
    for segment in &timeline.segments {
        if layout.output_path(juz, &segment.verse_key).is_file() {
            done.push(segment.verse_key);
        } else {
            pending.push(segment.verse_key);
        }
    }

    Ok(JuzStatus {
        total: timeline.len(),
        done,
        pending,
    })
}
