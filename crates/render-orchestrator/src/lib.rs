//! Juzcast Render Orchestrator
//!
//! Sequencing and dispatch around an external renderer:
//! - **Renderer seam:** the [`Renderer`] trait with unit and batch
//!   operations, and the subprocess-backed [`CommandRenderer`]
//! - **Resume loop:** one ordered pass over a juz timeline, skipping
//!   segments whose output file already exists
//! - **Concat:** lossless assembly of rendered ayahs into one juz video
//!
//! Everything here is strictly sequential: one child process at a time,
//! stdio attached to the controlling terminal.

pub mod concat;
pub mod renderer;
pub mod resume;

pub use concat::*;
pub use renderer::*;
pub use resume::*;

use juzcast_common::{JuzcastError, JuzcastResult};
use juzcast_timeline_model::{JuzNumber, Layout, Timeline, TimelineError};

/// Load the timeline for a juz from its conventional path.
pub fn load_timeline(juz: JuzNumber, layout: &Layout) -> JuzcastResult<Timeline> {
    Timeline::load(&layout.timeline_path(juz)).map_err(|err| match err {
        TimelineError::NotFound(path) => JuzcastError::FileNotFound { path },
        other => JuzcastError::timeline(other.to_string()),
    })
}
