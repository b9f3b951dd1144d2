//! The renderer seam.
//!
//! The orchestration loop depends only on the [`Renderer`] trait, so the
//! external command can be substituted with an in-process renderer or a test
//! double. The production implementation shells out to configured command
//! lines with the child's stdio inherited, so renderer progress streams to
//! the controlling terminal.

use std::io::ErrorKind;
use std::process::Command;
use std::time::Duration;

use juzcast_common::{CancelToken, JuzcastError, JuzcastResult};
use juzcast_timeline_model::{JuzNumber, VerseKey};

/// How often a running unit render is checked against the cancel token.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Render capability consumed by the orchestration loop.
pub trait Renderer: Send {
    /// Render one ayah. Blocks until the render finishes, fails, or the
    /// token is cancelled.
    fn render_unit(
        &self,
        juz: JuzNumber,
        verse_key: &VerseKey,
        cancel: &CancelToken,
    ) -> JuzcastResult<()>;

    /// Render a whole juz in one invocation.
    fn render_batch(&self, juz: JuzNumber) -> JuzcastResult<()>;

    /// Check whether this renderer can run on the system.
    fn is_available(&self) -> bool;

    /// Renderer name for logs and the system check.
    fn name(&self) -> &str;
}

/// A parsed command line: program plus leading arguments.
///
/// Render commands are configured as plain strings (`npm run render:ayah --`)
/// and split on whitespace; the juz/verse arguments are appended at
/// invocation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn parse(line: &str) -> JuzcastResult<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| JuzcastError::config("render command is empty"))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    fn command(&self) -> Command {
        // Stdio defaults to inherit, which is exactly what we want: the
        // renderer's own progress output stays visible live.
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Subprocess-backed renderer.
pub struct CommandRenderer {
    unit: CommandSpec,
    batch: CommandSpec,
}

impl CommandRenderer {
    pub const DEFAULT_UNIT_CMD: &'static str = "npm run render:ayah --";
    pub const DEFAULT_BATCH_CMD: &'static str = "npm run render:juz --";

    pub fn new(unit: CommandSpec, batch: CommandSpec) -> Self {
        Self { unit, batch }
    }

    pub fn from_command_lines(unit: &str, batch: &str) -> JuzcastResult<Self> {
        Ok(Self::new(CommandSpec::parse(unit)?, CommandSpec::parse(batch)?))
    }

    pub fn unit_program(&self) -> &str {
        &self.unit.program
    }

    pub fn batch_program(&self) -> &str {
        &self.batch.program
    }
}

impl Renderer for CommandRenderer {
    fn render_unit(
        &self,
        juz: JuzNumber,
        verse_key: &VerseKey,
        cancel: &CancelToken,
    ) -> JuzcastResult<()> {
        let mut child = self
            .unit
            .command()
            .arg(juz.to_string())
            .arg(verse_key.to_string())
            .spawn()
            .map_err(|err| spawn_error(err, &self.unit.program))?;

        // Poll instead of a blocking wait so cancellation takes effect even
        // when the terminal-propagated signal never reaches the child.
        loop {
            if cancel.is_cancelled() {
                child.kill().ok();
                child.wait().ok();
                return Err(JuzcastError::Cancelled);
            }
            match child.try_wait()? {
                Some(status) => {
                    // A render that finished cleanly counts even if Ctrl-C
                    // arrived in the meantime; the loop stops before the
                    // next segment.
                    if status.success() {
                        return Ok(());
                    }
                    if cancel.is_cancelled() {
                        return Err(JuzcastError::Cancelled);
                    }
                    return Err(JuzcastError::UnitRenderFailed {
                        verse_key: verse_key.to_string(),
                        code: status.code(),
                    });
                }
                None => std::thread::sleep(CANCEL_POLL_INTERVAL),
            }
        }
    }

    fn render_batch(&self, juz: JuzNumber) -> JuzcastResult<()> {
        let status = self
            .batch
            .command()
            .arg(juz.to_string())
            .status()
            .map_err(|err| spawn_error(err, &self.batch.program))?;

        if status.success() {
            Ok(())
        } else {
            Err(JuzcastError::BatchRenderFailed {
                code: status.code(),
            })
        }
    }

    fn is_available(&self) -> bool {
        command_exists(&self.unit.program) && command_exists(&self.batch.program)
    }

    fn name(&self) -> &str {
        "command"
    }
}

fn spawn_error(err: std::io::Error, program: &str) -> JuzcastError {
    if err.kind() == ErrorKind::NotFound {
        JuzcastError::RendererUnavailable {
            name: program.to_string(),
        }
    } else {
        err.into()
    }
}

/// Check whether a binary resolves on `PATH`.
pub fn command_exists(binary: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {binary} >/dev/null 2>&1"))
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
