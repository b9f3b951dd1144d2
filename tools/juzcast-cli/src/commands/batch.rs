//! Delegate a whole juz to the batch render command.

use juzcast_common::{CancelToken, JuzcastError, JuzcastResult};
use juzcast_render_orchestrator::{delegate_batch, Renderer};
use juzcast_timeline_model::JuzNumber;

pub async fn run(
    juz: JuzNumber,
    renderer: &dyn Renderer,
    cancel: &CancelToken,
) -> JuzcastResult<()> {
    match delegate_batch(juz, renderer).await {
        Ok(()) => Ok(()),
        // Ctrl-C reaches the terminal-attached child too; report the whole
        // run as interrupted rather than as a child failure.
        Err(_) if cancel.is_cancelled() => Err(JuzcastError::Cancelled),
        Err(err) => Err(err),
    }
}
