//! Image rendering through the Graphviz `dot` executable.
//!
//! The crate never draws anything itself. The DOT text produced by
//! [`DotExporter`](super::dot::DotExporter) is piped to `dot`, which writes
//! the image file.

use super::{export, ExportData, ExportFormat};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

/// Errors raised while handing a graph to Graphviz.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The renderer executable could not be found.
    #[error(
        "Graphviz executable '{}' not found; install Graphviz to export images",
        .program.display()
    )]
    NotFound { program: PathBuf },

    /// Spawning or talking to the renderer failed.
    #[error("Failed to run Graphviz: {0}")]
    Io(#[from] io::Error),

    /// The renderer exited unsuccessfully.
    #[error("Graphviz exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Hands DOT text to an external Graphviz executable.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: PathBuf,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphvizRenderer {
    /// Default output file stem.
    pub const DEFAULT_STEM: &'static str = "grafo";
    /// Default image format.
    pub const DEFAULT_FORMAT: &'static str = "png";

    /// Uses `dot` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("dot")
    }

    /// Uses a specific renderer executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path of the image written for `stem` and `format`, e.g. `grafo.png`.
    pub fn output_path(stem: &Path, format: &str) -> PathBuf {
        let mut path = OsString::from(stem.as_os_str());
        path.push(".");
        path.push(format);
        PathBuf::from(path)
    }

    /// Renders the graph to `<stem>.<format>`.
    ///
    /// # Returns
    ///
    /// The path of the written image.
    pub fn render(
        &self,
        data: &ExportData,
        stem: &Path,
        format: &str,
    ) -> Result<PathBuf, RenderError> {
        let output = Self::output_path(stem, format);

        let mut dot = Vec::new();
        export(ExportFormat::Dot, data, &mut dot)?;

        debug!(program = %self.program.display(), output = %output.display(), "spawning renderer");
        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format))
            .arg("-o")
            .arg(&output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => RenderError::NotFound {
                    program: self.program.clone(),
                },
                _ => RenderError::Io(e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A renderer that exits early closes the pipe; its status tells why.
            if let Err(e) = stdin.write_all(&dot) {
                if e.kind() != io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let result = child.wait_with_output()?;
        if !result.status.success() {
            return Err(RenderError::Failed {
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        info!(output = %output.display(), "image written");
        Ok(output)
    }
}
