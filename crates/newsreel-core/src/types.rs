use serde::{Deserialize, Serialize};

/// One fetched headline. Read-only through the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(
        default,
        rename = "readMoreUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_more_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A time-bounded slide bound to one news item by index.
///
/// Segments are contiguous and non-overlapping; the final segment is clipped
/// to the total duration. Many segments may reference the same item when
/// slides outnumber items.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub item_index: usize,
    pub start: f64,
    pub end: f64,
    pub index: usize,
}

/// The artifact bundle returned for one generation run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    #[serde(skip)]
    pub video: Vec<u8>,
    pub mime_type: String,
    pub title: String,
    pub description: String,
    pub script: String,
    pub duration_seconds: f64,
    pub slide_count: usize,
    pub seconds_per_slide: f64,
    pub news_items: Vec<NewsItem>,
}

pub const DEFAULT_CATEGORY: &str = "national";
pub const DEFAULT_SECONDS_PER_SLIDE: f64 = 30.0;
pub const MIN_SECONDS_PER_SLIDE: f64 = 10.0;
pub const MAX_SECONDS_PER_SLIDE: f64 = 45.0;

/// Parameters for one generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_seconds_per_slide")]
    pub seconds_per_slide: f64,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_seconds_per_slide() -> f64 {
    DEFAULT_SECONDS_PER_SLIDE
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            category: default_category(),
            seconds_per_slide: DEFAULT_SECONDS_PER_SLIDE,
        }
    }
}

impl GenerationRequest {
    /// Seconds-per-slide clamped to the supported range. Clamping happens
    /// here, at the request boundary; the planner itself rejects
    /// out-of-range values.
    pub fn clamped_seconds_per_slide(&self) -> f64 {
        self.seconds_per_slide
            .clamp(MIN_SECONDS_PER_SLIDE, MAX_SECONDS_PER_SLIDE)
    }
}
