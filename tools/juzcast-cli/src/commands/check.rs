//! Check render tool availability.

use juzcast_render_orchestrator::{command_exists, CommandRenderer};

pub fn run(renderer: &CommandRenderer) -> anyhow::Result<()> {
    println!("Juzcast System Check");
    println!("{}", "=".repeat(50));

    let checks = [
        ("Unit render command", renderer.unit_program().to_string()),
        ("Batch render command", renderer.batch_program().to_string()),
        ("Concat tool", "ffmpeg".to_string()),
    ];

    let mut all_ok = true;
    for (label, program) in &checks {
        if command_exists(program) {
            println!("[OK] {label}: {program}");
        } else {
            println!("[MISSING] {label}: {program}");
            all_ok = false;
        }
    }

    println!();
    if all_ok {
        println!("All render tools are available. Juzcast is ready.");
    } else {
        println!("Some render tools are missing. See above.");
    }

    Ok(())
}
