//! Per-run scratch directory with guaranteed teardown.

use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

use crate::error::Result;

/// Shared root for all runs' scratch space.
pub fn scratch_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("newsreel")
}

/// A uniquely-named temporary directory for one generation run.
///
/// The uuid component keeps concurrent runs from colliding under the shared
/// root. The directory is removed on `Drop`, so every exit path (success,
/// error, timeout) tears it down.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub async fn create() -> Result<Self> {
        let path = scratch_root().join(Uuid::new_v4().to_string());
        tokio::fs::create_dir_all(&path).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn narration_path(&self) -> PathBuf {
        self.path.join("narration.mp3")
    }

    pub fn padded_narration_path(&self) -> PathBuf {
        self.path.join("narration_padded.mp3")
    }

    pub fn video_path(&self) -> PathBuf {
        self.path.join("briefing.mp4")
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "failed to clean scratch dir");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scratch_dirs_are_unique_and_removed_on_drop() {
        let a = ScratchDir::create().await.unwrap();
        let b = ScratchDir::create().await.unwrap();
        assert_ne!(a.path(), b.path());
        assert!(a.path().is_dir());

        let path = a.path().to_path_buf();
        std::fs::write(a.narration_path(), b"audio").unwrap();
        drop(a);
        assert!(!path.exists());
        drop(b);
    }

    #[tokio::test]
    async fn artifact_paths_live_inside_the_dir() {
        let scratch = ScratchDir::create().await.unwrap();
        assert!(scratch.narration_path().starts_with(scratch.path()));
        assert!(scratch.padded_narration_path().starts_with(scratch.path()));
        assert!(scratch.video_path().starts_with(scratch.path()));
    }
}
