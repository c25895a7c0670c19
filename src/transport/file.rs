//! # File Channel
//!
//! Writes the job to `<content_root>/PrinterOutput/ticket-ultimo.bin`.
//! Only the most recent ticket is kept; every delivery replaces the file.
//! Concurrent deliveries race on the same path and the last writer wins.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::{TicketError, TicketResult};

/// Directory created under the content root.
pub const OUTPUT_DIR: &str = "PrinterOutput";

/// Name of the last-ticket artifact.
pub const ARTIFACT_NAME: &str = "ticket-ultimo.bin";

/// Delivery to the local filesystem.
#[derive(Debug, Clone)]
pub struct FileChannel {
    output_dir: PathBuf,
}

impl FileChannel {
    pub fn new(content_root: impl AsRef<Path>) -> Self {
        Self {
            output_dir: content_root.as_ref().join(OUTPUT_DIR),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of the artifact this channel writes.
    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir.join(ARTIFACT_NAME)
    }

    /// Write `data` to the artifact, creating the output directory first
    /// when it does not exist.
    #[instrument(skip(self, data), fields(path = %self.artifact_path().display(), data_len = data.len()))]
    pub async fn deliver(&self, data: &[u8]) -> TicketResult<()> {
        let exists = tokio::fs::try_exists(&self.output_dir)
            .await
            .map_err(|e| TicketError::io(&self.output_dir, e))?;
        if !exists {
            tokio::fs::create_dir_all(&self.output_dir)
                .await
                .map_err(|e| TicketError::io(&self.output_dir, e))?;
            info!(dir = %self.output_dir.display(), "Created printer output directory");
        }

        let path = self.artifact_path();
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| TicketError::io(&path, e))?;

        info!(bytes = data.len(), "Ticket written to file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_directory_and_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let channel = FileChannel::new(root.path());
        assert!(!channel.output_dir().exists());

        channel.deliver(b"first ticket").await.unwrap();
        assert_eq!(std::fs::read(channel.artifact_path()).unwrap(), b"first ticket");

        channel.deliver(b"2nd").await.unwrap();
        assert_eq!(std::fs::read(channel.artifact_path()).unwrap(), b"2nd");
    }

    #[tokio::test]
    async fn test_unwritable_root_is_io_failure() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let err = FileChannel::new(&blocker).deliver(b"data").await.unwrap_err();
        assert!(matches!(err, TicketError::IoFailure { .. }));
    }
}
