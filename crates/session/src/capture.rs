//! Image-capture seam.
//!
//! Platform pickers and cameras live behind [`ImageSource`]. The editor only
//! sees an opaque [`ImageRef`] or a [`CaptureError`].

use ss_common::{CaptureError, CaptureSource, ImageRef};

/// Supplies an image from the photo library or the camera.
pub trait ImageSource {
    /// Ask the user for an image. May block on a platform picker.
    fn acquire(&mut self, origin: CaptureSource) -> Result<ImageRef, CaptureError>;
}

impl<F> ImageSource for F
where
    F: FnMut(CaptureSource) -> Result<ImageRef, CaptureError>,
{
    fn acquire(&mut self, origin: CaptureSource) -> Result<ImageRef, CaptureError> {
        self(origin)
    }
}
