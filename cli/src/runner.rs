//! Replays an edit script against an [`EditorSession`].

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use ss_common::{CaptureError, CaptureSource, ImageRef, StickerRef, StudioConfig};
use ss_export::{ExportConfig, ExportError, ExportJob, ExportReceipt, Exporter};
use ss_session::{EditorSession, ImageSource};
use tracing::{debug, warn};

use crate::script::{Command, ScriptLine};

/// Resolves script paths into image references.
///
/// A missing path means the user dismissed the picker.
pub struct PathPicker<'a> {
    path: Option<&'a Path>,
    camera_allowed: bool,
}

impl<'a> PathPicker<'a> {
    pub fn new(path: Option<&'a Path>, camera_allowed: bool) -> Self {
        Self {
            path,
            camera_allowed,
        }
    }
}

impl ImageSource for PathPicker<'_> {
    fn acquire(&mut self, origin: CaptureSource) -> Result<ImageRef, CaptureError> {
        if origin == CaptureSource::Camera && !self.camera_allowed {
            return Err(CaptureError::PermissionDenied { origin });
        }
        let path = self.path.ok_or(CaptureError::Cancelled)?;
        let canonical = path
            .canonicalize()
            .map_err(|e| CaptureError::Unavailable(format!("{}: {e}", path.display())))?;
        if !canonical.is_file() {
            return Err(CaptureError::Unavailable(format!(
                "{}: not a file",
                path.display()
            )));
        }
        Ok(ImageRef::new(format!("file://{}", canonical.display())))
    }
}

/// Counters reported once a script has finished.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub commands: usize,
    pub notices: usize,
    pub exports: Vec<PathBuf>,
}

pub struct Runner<W: Write> {
    session: EditorSession,
    config: StudioConfig,
    exporter: Arc<dyn Exporter>,
    out: W,
    camera_allowed: bool,
    export_dir: PathBuf,
}

impl<W: Write> Runner<W> {
    pub fn new(config: StudioConfig, exporter: Arc<dyn Exporter>, out: W) -> Self {
        Self {
            session: EditorSession::new(&config),
            config,
            exporter,
            out,
            camera_allowed: true,
            export_dir: PathBuf::from("."),
        }
    }

    /// Simulate a denied camera permission.
    #[must_use]
    pub fn with_camera_allowed(mut self, allowed: bool) -> Self {
        self.camera_allowed = allowed;
        self
    }

    /// Directory for `export` without an explicit path.
    #[must_use]
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self, script: &[ScriptLine]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for line in script {
            self.step(line, &mut summary)
                .with_context(|| format!("line {}: {}", line.line, line.command))?;
            summary.commands += 1;
        }
        debug!(
            commands = summary.commands,
            notices = summary.notices,
            "Script finished"
        );
        Ok(summary)
    }

    fn step(&mut self, line: &ScriptLine, summary: &mut RunSummary) -> Result<()> {
        debug!(line = line.line, command = %line.command, "Running command");
        let notice = match &line.command {
            Command::Pick { path } => self.import(path.as_deref(), CaptureSource::Library),
            Command::Camera { path } => self.import(path.as_deref(), CaptureSource::Camera),
            Command::Placeholder => {
                self.session.use_placeholder();
                None
            }
            Command::Sticker { id } => self
                .session
                .place_sticker(StickerRef::new(id.clone()))
                .err()
                .map(|e| e.to_string()),
            Command::Filter { kind } => self
                .session
                .apply_filter(*kind)
                .err()
                .map(|e| e.to_string()),
            Command::Undo => {
                self.session.undo();
                None
            }
            Command::Redo => {
                self.session.redo();
                None
            }
            Command::Reset => {
                self.session.reset();
                None
            }
            Command::Status => {
                self.print_status()?;
                return Ok(());
            }
            Command::Export { path } => match self.export(path.as_deref()) {
                Ok(receipt) => {
                    writeln!(
                        self.out,
                        "exported {} ({} bytes)",
                        receipt.path.display(),
                        receipt.bytes
                    )?;
                    summary.exports.push(receipt.path);
                    None
                }
                Err(e) => {
                    warn!(error = %e, "Export failed");
                    Some(e.to_string())
                }
            },
        };

        if let Some(message) = notice {
            summary.notices += 1;
            writeln!(self.out, "notice: {message}")?;
        }
        self.print_state(line)
    }

    fn import(&mut self, path: Option<&Path>, origin: CaptureSource) -> Option<String> {
        let mut picker = PathPicker::new(path, self.camera_allowed);
        self.session
            .import_image(&mut picker, origin)
            .err()
            .map(|e| e.to_string())
    }

    fn export(&self, path: Option<&Path>) -> Result<ExportReceipt, ExportError> {
        let mut config = ExportConfig::from_settings(&self.config.export, &self.export_dir);
        if let Some(path) = path {
            config = config.with_output_path(path);
        }
        // The job gets its own copy; the history is never handed out.
        let state = self.session.current().clone();
        ExportJob::start(state, config, Arc::clone(&self.exporter))?.wait()
    }

    fn print_state(&mut self, line: &ScriptLine) -> Result<()> {
        writeln!(
            self.out,
            "[{}] {}: {} undo={} redo={}",
            line.line,
            line.command,
            self.session.current(),
            self.session.can_undo(),
            self.session.can_redo()
        )?;
        Ok(())
    }

    fn print_status(&mut self) -> Result<()> {
        let history = self.session.history();
        writeln!(self.out, "mode: {:?}", self.session.mode())?;
        writeln!(self.out, "state: {}", history.current())?;
        writeln!(
            self.out,
            "history: {} entries, {} undo, {} redo",
            history.len(),
            history.undo_count(),
            history.redo_count()
        )?;
        if let Some(label) = history.undo_label() {
            writeln!(self.out, "undo: {label}")?;
        }
        if let Some(label) = history.redo_label() {
            writeln!(self.out, "redo: {label}")?;
        }
        Ok(())
    }
}
