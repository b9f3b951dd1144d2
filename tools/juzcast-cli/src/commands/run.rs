//! Render every pending ayah of a juz.

use juzcast_common::{CancelToken, JuzcastResult};
use juzcast_render_orchestrator::{render_juz, Renderer};
use juzcast_timeline_model::{JuzNumber, Layout};

pub async fn run(
    juz: JuzNumber,
    layout: &Layout,
    renderer: &dyn Renderer,
    cancel: &CancelToken,
) -> JuzcastResult<()> {
    let report = render_juz(juz, layout, renderer, cancel).await?;
    println!(
        "Done. Rendered: {} Skipped: {}",
        report.rendered, report.skipped
    );
    Ok(())
}
