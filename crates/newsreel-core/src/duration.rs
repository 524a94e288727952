//! Narration duration adjustment: pad short narrations with silence up to a
//! minimum video length, never truncating speech.

/// Minimum total video length in seconds. Publishing platforms gate
/// monetization and recommendation on clips shorter than this.
pub const MIN_VIDEO_SECONDS: f64 = 240.0;

/// How the narration track must be adjusted to reach the target duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationPlan {
    /// Final video duration in whole seconds.
    pub target_seconds: f64,
    /// Silence to append; 0.0 means the track is used unmodified.
    pub padding_seconds: f64,
}

impl DurationPlan {
    pub fn needs_padding(&self) -> bool {
        self.padding_seconds > 0.0
    }
}

/// Compute the target duration and required silence padding for a measured
/// narration length. The target is the larger of `minimum_seconds` and the
/// narration rounded up to a whole second, so speech is never cut. Gaps
/// under one second are rounding noise and get no padding.
pub fn adjust(measured_seconds: f64, minimum_seconds: f64) -> DurationPlan {
    let measured = measured_seconds.max(0.0);
    let target_seconds = minimum_seconds.max(measured.ceil());

    let padding_seconds = if measured < target_seconds - 1.0 {
        (target_seconds - measured).ceil()
    } else {
        0.0
    };

    DurationPlan {
        target_seconds,
        padding_seconds,
    }
}
