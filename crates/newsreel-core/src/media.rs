//! ffmpeg/ffprobe invocations: duration probing, silence padding, and the
//! final encode of the slide deck over the narration track.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{info, warn};

use crate::{
    error::{NewsreelError, Result},
    filtergraph::{CANVAS_HEIGHT, CANVAS_WIDTH, FRAME_RATE, Theme},
};

/// Verify an external binary is runnable before the pipeline depends on it.
pub async fn ensure_tool(name: &str) -> Result<()> {
    let runnable = Command::new(name)
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false);

    if runnable {
        Ok(())
    } else {
        Err(NewsreelError::AssetMissing {
            path: PathBuf::from(name),
        })
    }
}

/// Probe an audio file's duration in seconds. Missing or unparseable
/// metadata reads as 0.0; the duration adjuster pads from there.
pub async fn probe_duration(path: &Path) -> Result<f64> {
    let output = Command::new("ffprobe")
        .arg("-v")
        .arg("error")
        .arg("-show_entries")
        .arg("format=duration")
        .arg("-of")
        .arg("default=noprint_wrappers=1:nokey=1")
        .arg(path)
        .output()
        .await?;

    if !output.status.success() {
        return Err(NewsreelError::Encode {
            reason: format!(
                "ffprobe failed for {}: {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr)
            ),
        });
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let duration = text.trim().parse::<f64>().unwrap_or(0.0);
    if duration <= 0.0 {
        warn!(path = %path.display(), "probe returned no duration, treating as 0");
    }
    Ok(duration.max(0.0))
}

/// Append silence to `input` and hard-trim the result to exactly
/// `target_seconds`, writing to `output`.
pub async fn pad_audio(input: &Path, output: &Path, target_seconds: f64) -> Result<()> {
    let result = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(input)
        .arg("-af")
        .arg("apad")
        .arg("-t")
        .arg(target_seconds.to_string())
        .arg(output)
        .output()
        .await?;

    if !result.status.success() {
        return Err(NewsreelError::Encode {
            reason: format!(
                "audio padding failed: {}",
                String::from_utf8_lossy(&result.stderr)
            ),
        });
    }

    info!(seconds = target_seconds, "narration padded to target duration");
    Ok(())
}

/// Encode the final MP4: a solid-color lavfi source carries the filtergraph,
/// the narration track is mapped in as-is, output capped to exactly
/// `target_seconds` at 1280x720/30fps H.264 + AAC.
///
/// `kill_on_drop` reaps the encoder if the run's wall-clock budget cancels
/// the future mid-encode.
pub async fn encode_video(
    audio: &Path,
    filtergraph: &str,
    theme: &Theme,
    target_seconds: f64,
    out_path: &Path,
) -> Result<()> {
    let source = format!(
        "color=c={}:s={}x{}:d={}:r={}",
        theme.background, CANVAS_WIDTH, CANVAS_HEIGHT, target_seconds, FRAME_RATE
    );

    let result = Command::new("ffmpeg")
        .arg("-y")
        .arg("-f")
        .arg("lavfi")
        .arg("-i")
        .arg(&source)
        .arg("-i")
        .arg(audio)
        .arg("-vf")
        .arg(filtergraph)
        .arg("-map")
        .arg("0:v")
        .arg("-map")
        .arg("1:a")
        .arg("-c:v")
        .arg("libx264")
        .arg("-c:a")
        .arg("aac")
        .arg("-pix_fmt")
        .arg("yuv420p")
        .arg("-r")
        .arg(FRAME_RATE.to_string())
        .arg("-t")
        .arg(target_seconds.to_string())
        .arg(out_path)
        .kill_on_drop(true)
        .output()
        .await?;

    if !result.status.success() {
        return Err(NewsreelError::Encode {
            reason: format!(
                "ffmpeg exited with {}: {}",
                result.status,
                String::from_utf8_lossy(&result.stderr)
            ),
        });
    }

    info!(path = %out_path.display(), seconds = target_seconds, "video encoded");
    Ok(())
}
