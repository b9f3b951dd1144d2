//! Stitch rendered ayahs into one juz video.

use juzcast_common::JuzcastResult;
use juzcast_render_orchestrator::concat_juz;
use juzcast_timeline_model::{JuzNumber, Layout};

pub fn run(juz: JuzNumber, layout: &Layout) -> JuzcastResult<()> {
    let out_file = concat_juz(juz, layout)?;
    println!("Done: {}", out_file.display());
    Ok(())
}
