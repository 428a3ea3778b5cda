//! Frame acquisition boundary.
//!
//! The kiosk does not drive the camera hardware itself.  A [`FrameSource`]
//! hands over the current frame as encoded image bytes; the shipped
//! [`SnapshotFileSource`] reads a JPEG that a capture helper (e.g.
//! `ffmpeg -f v4l2 … -update 1 frame.jpg`) keeps overwriting.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// CameraError
// ---------------------------------------------------------------------------

/// Errors raised by a frame source.
#[derive(Debug, Clone, Error)]
pub enum CameraError {
    /// The device (or its snapshot) cannot be opened.
    #[error("camera unavailable: {0}")]
    Unavailable(String),

    /// A capture was requested while the source is closed.
    #[error("camera is not open")]
    NotOpen,

    /// Reading the current frame failed.
    #[error("frame capture failed: {0}")]
    Capture(String),

    /// The source produced zero bytes.
    #[error("captured frame is empty")]
    EmptyFrame,
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// One encoded camera image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Encoded image bytes (JPEG or PNG).
    pub data: Vec<u8>,
}

impl Frame {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// ---------------------------------------------------------------------------
// FrameSource trait
// ---------------------------------------------------------------------------

/// Camera device abstraction shared between the lifecycle controller and
/// the sampling tasks.
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// Acquire the device.  Failure means the camera session cannot start.
    fn open(&self) -> Result<(), CameraError>;

    /// Release the device.  Closing a closed source is a no-op.
    fn close(&self);

    /// Grab the current frame.
    async fn capture(&self) -> Result<Frame, CameraError>;
}

// Compile-time assertion: Box<dyn FrameSource> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn FrameSource>) {}
};

// ---------------------------------------------------------------------------
// SnapshotFileSource
// ---------------------------------------------------------------------------

/// Reads the latest frame from a snapshot file on every capture.
#[derive(Debug)]
pub struct SnapshotFileSource {
    path: PathBuf,
    open: AtomicBool,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            open: AtomicBool::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FrameSource for SnapshotFileSource {
    fn open(&self) -> Result<(), CameraError> {
        if !self.path.is_file() {
            return Err(CameraError::Unavailable(format!(
                "no snapshot at {}",
                self.path.display()
            )));
        }
        self.open.store(true, Ordering::SeqCst);
        log::info!("camera: reading frames from {}", self.path.display());
        Ok(())
    }

    fn close(&self) {
        if self.open.swap(false, Ordering::SeqCst) {
            log::info!("camera: released {}", self.path.display());
        }
    }

    async fn capture(&self) -> Result<Frame, CameraError> {
        if !self.open.load(Ordering::SeqCst) {
            return Err(CameraError::NotOpen);
        }

        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CameraError::Capture(format!("{}: {e}", self.path.display())))?;

        if data.is_empty() {
            return Err(CameraError::EmptyFrame);
        }

        Ok(Frame::new(data))
    }
}

// ---------------------------------------------------------------------------
// Test double
// ---------------------------------------------------------------------------

/// In-memory frame source for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFrameSource {
    pub fail_open: bool,
    pub opened: std::sync::atomic::AtomicUsize,
    pub closed: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockFrameSource {
    pub fn unavailable() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[async_trait]
impl FrameSource for MockFrameSource {
    fn open(&self) -> Result<(), CameraError> {
        if self.fail_open {
            return Err(CameraError::Unavailable("mock device missing".into()));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn close(&self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }

    async fn capture(&self) -> Result<Frame, CameraError> {
        Ok(Frame::new(vec![0xFF, 0xD8, 0xFF]))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_fails_without_snapshot() {
        let dir = tempdir().unwrap();
        let source = SnapshotFileSource::new(dir.path().join("missing.jpg"));
        assert!(matches!(source.open(), Err(CameraError::Unavailable(_))));
    }

    #[tokio::test]
    async fn capture_requires_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.jpg");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let source = SnapshotFileSource::new(&path);
        assert!(matches!(source.capture().await, Err(CameraError::NotOpen)));

        source.open().unwrap();
        assert_eq!(source.capture().await.unwrap().data, vec![1, 2, 3]);

        source.close();
        assert!(matches!(source.capture().await, Err(CameraError::NotOpen)));
    }

    #[tokio::test]
    async fn capture_sees_latest_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.jpg");
        std::fs::write(&path, [1u8]).unwrap();

        let source = SnapshotFileSource::new(&path);
        source.open().unwrap();
        std::fs::write(&path, [9u8, 9]).unwrap();
        assert_eq!(source.capture().await.unwrap().data, vec![9, 9]);
    }

    #[tokio::test]
    async fn empty_snapshot_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.jpg");
        std::fs::write(&path, b"").unwrap();

        let source = SnapshotFileSource::new(&path);
        source.open().unwrap();
        assert!(matches!(source.capture().await, Err(CameraError::EmptyFrame)));
    }

    #[test]
    fn close_is_idempotent() {
        let source = SnapshotFileSource::new("/nonexistent/frame.jpg");
        source.close();
        source.close();
    }
}
