//! `ss-export`: Export collaborator for the StickerSmash editor.
//!
//! Export is the terminal, side-effecting step: it consumes a copy of the
//! current `SessionState` and produces a flattened artifact. Nothing here can
//! reach back into the editing history.
//!
//! - **Config**: `ExportConfig` (output path, size, quality, format)
//! - **Manifest**: `FlattenManifest`, the serializable flatten recipe
//! - **Exporter**: the `Exporter` trait and the atomic `ManifestExporter`
//! - **Job**: `ExportJob` / `ExportHandle` for background export with cancellation
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ss_common::ImageRef;
//! use ss_export::{ExportConfig, ExportJob, ManifestExporter};
//! use ss_session::SessionState;
//!
//! let state = SessionState::empty().with_image(ImageRef::from("file:///cat.jpg"));
//! let handle = ExportJob::start(
//!     state,
//!     ExportConfig::default(),
//!     Arc::new(ManifestExporter::default()),
//! )
//! .unwrap();
//! let receipt = handle.wait().unwrap();
//! println!("wrote {}", receipt.path.display());
//! ```

pub mod config;
pub mod error;
pub mod exporter;
pub mod job;
pub mod manifest;

// Re-export primary API at crate root
pub use config::{ExportConfig, ExportFormat};
pub use error::ExportError;
pub use exporter::{ExportReceipt, Exporter, ManifestExporter};
pub use job::{ExportHandle, ExportJob, ExportProgress};
pub use manifest::{FlattenManifest, MANIFEST_VERSION};
