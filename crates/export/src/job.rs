//! Background export job.
//!
//! Export may block on file I/O, so it runs off the editing thread:
//!
//! ```text
//! ExportJob::start(state, config, exporter)
//!   |
//!   +-- validate config
//!   +-- spawn "export-job" thread
//!   |     +-- Started
//!   |     +-- cancelled? -> Cancelled
//!   |     +-- exporter.export(state) -> Completed | Failed
//!   |
//!   +-- returns ExportHandle (progress channel + cancel flag)
//! ```
//!
//! The job owns a clone of the session state, so nothing it does can touch
//! the history.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crossbeam::channel::{self, Receiver, Sender};
use ss_session::SessionState;
use tracing::{info, warn};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::exporter::{ExportReceipt, Exporter};

/// Progress update from an export job.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportProgress {
    Started,
    Completed {
        receipt: ExportReceipt,
        duration_secs: f64,
    },
    Failed {
        error: String,
    },
    Cancelled,
}

impl ExportProgress {
    /// Check if the export has finished (success, failure, or cancellation).
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::Started)
    }
}

/// Handle for cancelling and awaiting a running export.
#[derive(Debug)]
pub struct ExportHandle {
    progress_rx: Receiver<ExportProgress>,
    cancel_flag: Arc<AtomicBool>,
}

impl ExportHandle {
    /// Request cancellation.
    ///
    /// Honored only until the worker starts writing; after that the export
    /// runs to completion and `wait` returns its receipt.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
        info!("Export cancellation requested");
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_flag.load(Ordering::SeqCst)
    }

    /// Block until the job finishes and return its outcome.
    pub fn wait(self) -> Result<ExportReceipt, ExportError> {
        for progress in self.progress_rx.iter() {
            match progress {
                ExportProgress::Started => {}
                ExportProgress::Completed { receipt, .. } => return Ok(receipt),
                ExportProgress::Failed { error } => return Err(ExportError::Failed(error)),
                ExportProgress::Cancelled => return Err(ExportError::Cancelled),
            }
        }
        Err(ExportError::Failed(
            "export worker exited without a result".to_string(),
        ))
    }
}

/// Spawns export work on a dedicated thread.
pub struct ExportJob;

impl ExportJob {
    /// Validate `config` and start exporting `state` in the background.
    pub fn start(
        state: SessionState,
        config: ExportConfig,
        exporter: Arc<dyn Exporter>,
    ) -> Result<ExportHandle, ExportError> {
        config.validate()?;

        let (progress_tx, progress_rx) = channel::unbounded::<ExportProgress>();
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let cancel_clone = Arc::clone(&cancel_flag);

        info!(
            output = %config.output_path.display(),
            format = ?config.format,
            width = config.width,
            height = config.height,
            "Starting export"
        );

        std::thread::Builder::new()
            .name("export-job".to_string())
            .spawn(move || {
                Self::run(
                    &state,
                    &config,
                    exporter.as_ref(),
                    &progress_tx,
                    &cancel_clone,
                );
            })
            .map_err(|e| ExportError::SpawnFailed(e.to_string()))?;

        Ok(ExportHandle {
            progress_rx,
            cancel_flag,
        })
    }

    fn run(
        state: &SessionState,
        config: &ExportConfig,
        exporter: &dyn Exporter,
        progress_tx: &Sender<ExportProgress>,
        cancel_flag: &AtomicBool,
    ) {
        let start_time = Instant::now();
        let _ = progress_tx.send(ExportProgress::Started);

        if cancel_flag.load(Ordering::SeqCst) {
            let _ = progress_tx.send(ExportProgress::Cancelled);
            info!("Export cancelled before write");
            return;
        }

        match exporter.export(state, config) {
            Ok(receipt) => {
                let duration_secs = start_time.elapsed().as_secs_f64();
                info!(
                    path = %receipt.path.display(),
                    bytes = receipt.bytes,
                    duration_secs,
                    "Export completed"
                );
                let _ = progress_tx.send(ExportProgress::Completed {
                    receipt,
                    duration_secs,
                });
            }
            Err(e) => {
                warn!(error = %e, "Export failed");
                let _ = progress_tx.send(ExportProgress::Failed {
                    error: e.to_string(),
                });
            }
        }
    }
}
