//! `xrandr` subprocess backend
//!
//! Every call blocks until the tool exits. The GUI thread drives these calls
//! directly, so each one is a single short-lived process.

use crate::display::{DisplayBackend, Monitor, OutputAdjustment, parse_active_monitors};
use crate::error::{NightLightError, Result, StringError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, trace};

/// Default program name, resolved through `PATH`
pub const DEFAULT_XRANDR: &str = "xrandr";

/// Display backend that shells out to `xrandr`
#[derive(Debug, Clone)]
pub struct XrandrBackend {
    program: PathBuf,
}

impl XrandrBackend {
    /// Create a backend that runs the given program instead of `xrandr` from `PATH`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program this backend invokes
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run<I, S>(&self, args: I) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let program = self.program.display().to_string();
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| NightLightError::CommandSpawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(NightLightError::CommandFailed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

impl Default for XrandrBackend {
    fn default() -> Self {
        Self::new(DEFAULT_XRANDR)
    }
}

impl DisplayBackend for XrandrBackend {
    fn list_monitors(&self) -> Result<Vec<Monitor>> {
        let output = self.run(["--listactivemonitors"])?;
        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| NightLightError::MonitorEnumeration(Box::new(e)))?;
        trace!("xrandr --listactivemonitors:\n{}", stdout);

        let monitors = parse_active_monitors(&stdout);
        if monitors.is_empty() && !stdout.trim_start().starts_with("Monitors:") {
            return Err(NightLightError::MonitorEnumeration(StringError::new(
                "unrecognized --listactivemonitors output",
            )));
        }

        debug!("xrandr reported {} active monitor(s)", monitors.len());
        Ok(monitors)
    }

    fn apply(&self, adjustment: &OutputAdjustment) -> Result<()> {
        let args = adjustment.to_args();
        debug!("Running {} {}", self.program.display(), args.join(" "));
        self.run(&args)?;
        Ok(())
    }
}
