//! Narration synthesis via the gtts-cli binary.

use std::path::Path;

use tokio::process::Command;
use tracing::info;

use crate::error::{NewsreelError, Result};

/// Synthesize `script` into an MP3 at `out_path` in the given language.
pub async fn synthesize(script: &str, lang: &str, out_path: &Path) -> Result<()> {
    let output = Command::new("gtts-cli")
        .arg(script)
        .arg("-l")
        .arg(lang)
        .arg("-o")
        .arg(out_path)
        .output()
        .await
        .map_err(|e| NewsreelError::Synthesis {
            reason: format!("failed to run gtts-cli: {e}"),
        })?;

    if !output.status.success() {
        return Err(NewsreelError::Synthesis {
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    info!(path = %out_path.display(), "narration synthesized");
    Ok(())
}
