//! The generation pipeline: fetch → script → narration → duration → segments
//! → render graph → encode, run sequentially under one wall-clock budget with
//! a scratch directory that is torn down on every exit path.

use std::time::Duration;

use tracing::info;

use crate::{
    duration::{self, MIN_VIDEO_SECONDS},
    error::{NewsreelError, Result},
    filtergraph::{self, FontSet, Theme},
    media, news, scratch, script, segments, tts,
    types::{GenerationRequest, GenerationResult},
};

/// Hard wall-clock budget for one run. A run past this is failed and its
/// encoder process reaped.
pub const RUN_BUDGET_SECONDS: u64 = 480;

/// Narration language. Multi-language narration is out of scope.
pub const NARRATION_LANG: &str = "en";

/// Run one full generation under the wall-clock budget.
pub async fn generate(
    request: &GenerationRequest,
    client: &news::NewsClient,
    fonts: &FontSet,
) -> Result<GenerationResult> {
    match tokio::time::timeout(
        Duration::from_secs(RUN_BUDGET_SECONDS),
        run(request, client, fonts),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(NewsreelError::Timeout {
            seconds: RUN_BUDGET_SECONDS,
        }),
    }
}

async fn run(
    request: &GenerationRequest,
    client: &news::NewsClient,
    fonts: &FontSet,
) -> Result<GenerationResult> {
    media::ensure_tool("ffmpeg").await?;
    media::ensure_tool("ffprobe").await?;

    let items = client.fetch(&request.category).await?;
    let script_text = script::build_script(&items);
    info!(chars = script_text.len(), "narration script assembled");

    // Dropping this guard removes the directory, including when the timeout
    // cancels the run mid-stage.
    let scratch = scratch::ScratchDir::create().await?;

    let narration = scratch.narration_path();
    tts::synthesize(&script_text, NARRATION_LANG, &narration).await?;

    let measured = media::probe_duration(&narration).await?;
    let plan = duration::adjust(measured, MIN_VIDEO_SECONDS);
    info!(
        measured,
        target = plan.target_seconds,
        padding = plan.padding_seconds,
        "duration planned"
    );

    let audio = if plan.needs_padding() {
        let padded = scratch.padded_narration_path();
        media::pad_audio(&narration, &padded, plan.target_seconds).await?;
        padded
    } else {
        narration
    };

    let seconds_per_slide = request.clamped_seconds_per_slide();
    let slide_segments = segments::plan(items.len(), seconds_per_slide, plan.target_seconds)?;

    let title = script::video_title(&request.category);
    let theme = Theme::default();
    let ops = filtergraph::build_render_graph(&slide_segments, &items, &title, fonts, &theme)?;
    let graph = filtergraph::filtergraph_string(&ops);

    let video_path = scratch.video_path();
    media::encode_video(&audio, &graph, &theme, plan.target_seconds, &video_path).await?;

    let video = tokio::fs::read(&video_path).await?;
    info!(bytes = video.len(), slides = slide_segments.len(), "generation complete");

    Ok(GenerationResult {
        video,
        mime_type: "video/mp4".to_string(),
        title,
        description: script::video_description(&items),
        script: script_text,
        duration_seconds: plan.target_seconds,
        slide_count: slide_segments.len(),
        seconds_per_slide,
        news_items: items,
    })
}
