//! Juzcast CLI — Resumable batch rendering of per-ayah Quran videos.
//!
//! Usage:
//!   juzcast run <JUZ>       Render every pending ayah of a juz
//!   juzcast batch <JUZ>     Delegate a whole juz to the batch render command
//!   juzcast concat <JUZ>    Stitch rendered ayahs into one juz video
//!   juzcast status <JUZ>    Show done/pending ayahs
//!   juzcast check           Check render tool availability

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use juzcast_common::{CancelToken, JuzcastError};
use juzcast_render_orchestrator::CommandRenderer;
use juzcast_timeline_model::{JuzNumber, Layout};

mod commands;

#[derive(Parser)]
#[command(
    name = "juzcast",
    about = "Resumable batch rendering of per-ayah Quran videos",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write juzcast's own logs to a file instead of the terminal
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Directory holding timeline files (timelines/juz_<n>.json)
    #[arg(long, global = true, default_value = "timelines")]
    timelines_dir: PathBuf,

    /// Directory holding render outputs (out/juz_<n>/)
    #[arg(long, global = true, default_value = "out")]
    out_dir: PathBuf,

    /// Command rendering one ayah; the juz and verse key are appended
    #[arg(long, global = true, default_value = CommandRenderer::DEFAULT_UNIT_CMD)]
    unit_cmd: String,

    /// Command rendering a whole juz; the juz is appended
    #[arg(long, global = true, default_value = CommandRenderer::DEFAULT_BATCH_CMD)]
    batch_cmd: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every pending ayah of a juz, skipping completed ones
    Run {
        /// Juz number (1-30)
        juz: JuzNumber,
    },

    /// Delegate a whole juz to the batch render command
    Batch {
        /// Juz number (1-30)
        juz: JuzNumber,
    },

    /// Losslessly stitch rendered ayahs into one juz video
    Concat {
        /// Juz number (1-30)
        juz: JuzNumber,
    },

    /// Show which ayahs of a juz are done and which are pending
    Status {
        /// Juz number (1-30)
        juz: JuzNumber,
    },

    /// Check that render commands and ffmpeg are available
    Check,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    juzcast_common::logging::init_logging(&juzcast_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: cli.log_file.clone(),
    });

    // Ctrl-C sets the cancel token; the loop stops between segments and any
    // in-flight render is killed rather than left to the terminal's signal
    // propagation.
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    std::process::exit(dispatch(cli, cancel).await);
}

async fn dispatch(cli: Cli, cancel: CancelToken) -> i32 {
    let layout = Layout::new(cli.timelines_dir, cli.out_dir);
    let renderer = match CommandRenderer::from_command_lines(&cli.unit_cmd, &cli.batch_cmd) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("Error: {err}");
            return err.exit_code();
        }
    };

    let result = match cli.command {
        Commands::Run { juz } => commands::run::run(juz, &layout, &renderer, &cancel).await,
        Commands::Batch { juz } => commands::batch::run(juz, &renderer, &cancel).await,
        Commands::Concat { juz } => commands::concat::run(juz, &layout),
        Commands::Status { juz } => commands::status::run(juz, &layout).map_err(JuzcastError::from),
        Commands::Check => commands::check::run(&renderer).map_err(JuzcastError::from),
    };

    match result {
        Ok(()) => 0,
        Err(JuzcastError::Cancelled) => {
            println!();
            println!("Interrupted. Re-run to skip completed ayahs.");
            JuzcastError::Cancelled.exit_code()
        }
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_run_with_juz() {
        let cli = Cli::try_parse_from(["juzcast", "run", "2"]).unwrap();
        match cli.command {
            Commands::Run { juz } => assert_eq!(juz.get(), 2),
            _ => panic!("expected run command"),
        }
        assert_eq!(cli.unit_cmd, CommandRenderer::DEFAULT_UNIT_CMD);
        assert_eq!(cli.batch_cmd, CommandRenderer::DEFAULT_BATCH_CMD);
        assert_eq!(cli.timelines_dir, PathBuf::from("timelines"));
        assert_eq!(cli.out_dir, PathBuf::from("out"));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_log_file_flag() {
        let cli =
            Cli::try_parse_from(["juzcast", "run", "1", "--log-file", "render.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("render.log")));
    }

    #[test]
    fn test_rejects_out_of_range_juz() {
        assert!(Cli::try_parse_from(["juzcast", "run", "0"]).is_err());
        assert!(Cli::try_parse_from(["juzcast", "run", "31"]).is_err());
        assert!(Cli::try_parse_from(["juzcast", "batch", "juz"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "juzcast",
            "--timelines-dir",
            "/data/timelines",
            "--unit-cmd",
            "render-ayah",
            "status",
            "30",
        ])
        .unwrap();
        assert_eq!(cli.timelines_dir, PathBuf::from("/data/timelines"));
        assert_eq!(cli.unit_cmd, "render-ayah");
        match cli.command {
            Commands::Status { juz } => assert_eq!(juz.get(), 30),
            _ => panic!("expected status command"),
        }
    }
}
