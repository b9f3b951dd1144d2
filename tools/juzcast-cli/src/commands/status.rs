//! Show which ayahs of a juz are done and which are pending.

use juzcast_render_orchestrator::inspect_juz;
use juzcast_timeline_model::{JuzNumber, Layout};

pub fn run(juz: JuzNumber, layout: &Layout) -> anyhow::Result<()> {
    let status = inspect_juz(juz, layout)
        .map_err(|e| anyhow::anyhow!("Failed to inspect juz {juz}: {e}"))?;

    println!("Juz {juz}: {} segments", status.total);
    println!("  Done: {}", status.done.len());
    println!("  Pending: {}", status.pending.len());

    if !status.pending.is_empty() {
        println!();
        println!("Pending ayahs:");
        for key in &status.pending {
            println!("  {key}");
        }
    }

    Ok(())
}
