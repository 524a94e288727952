//! Newsreel Core Library
//!
//! Assembles a narrated news-briefing video from a headline feed: fetch
//! items, synthesize narration, plan timed slide segments, build an ffmpeg
//! filtergraph of the deck, and encode one MP4.

pub mod duration;
pub mod error;
pub mod filtergraph;
pub mod media;
pub mod news;
pub mod pipeline;
pub mod scratch;
pub mod script;
pub mod segments;
pub mod text;
pub mod tts;
pub mod types;
pub mod upload;

// Re-export commonly used items at crate root
pub use duration::{DurationPlan, MIN_VIDEO_SECONDS, adjust};
pub use error::{NewsreelError, Result};
pub use filtergraph::{FontSet, Theme, build_render_graph, filtergraph_string};
pub use news::NewsClient;
pub use pipeline::generate;
pub use types::{GenerationRequest, GenerationResult, NewsItem, Segment};
pub use upload::upload_video;
