//! Publishing: resumable upload of a finished briefing to YouTube.

use serde_json::json;
use tracing::info;

use crate::error::{NewsreelError, Result};

const UPLOAD_URL: &str =
    "https://www.googleapis.com/upload/youtube/v3/videos?uploadType=resumable&part=snippet,status";

/// Upload the video bytes with the given metadata using an OAuth access
/// token. Returns the published watch URL.
pub async fn upload_video(
    video: &[u8],
    title: &str,
    description: &str,
    access_token: &str,
) -> Result<String> {
    let http = reqwest::Client::new();

    // Session initiation carries the metadata; the Location header is the
    // upload destination for the bytes.
    let session = http
        .post(UPLOAD_URL)
        .bearer_auth(access_token)
        .json(&json!({
            "snippet": { "title": title, "description": description, "categoryId": "25" },
            "status": { "privacyStatus": "public" },
        }))
        .send()
        .await?;

    if !session.status().is_success() {
        return Err(NewsreelError::Upload {
            reason: format!("session init returned {}", session.status()),
        });
    }

    let destination = session
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| NewsreelError::Upload {
            reason: "upload session missing Location header".to_string(),
        })?;

    let response = http
        .put(&destination)
        .bearer_auth(access_token)
        .header(reqwest::header::CONTENT_TYPE, "video/mp4")
        .body(video.to_vec())
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(NewsreelError::Upload {
            reason: format!("upload returned {}", response.status()),
        });
    }

    let body: serde_json::Value = response.json().await?;
    let video_id = body["id"].as_str().ok_or_else(|| NewsreelError::Upload {
        reason: "upload response missing video id".to_string(),
    })?;

    let url = format!("https://www.youtube.com/watch?v={video_id}");
    info!(%url, "video published");
    Ok(url)
}
