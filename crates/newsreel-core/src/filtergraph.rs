//! Declarative ffmpeg filtergraph construction for the slide deck.
//!
//! The graph is an ordered list of drawbox/drawtext operations: a static base
//! layer (background, card, panel, title) followed by per-segment overlay
//! groups gated on their time window with `enable='between(t,start,end)'`.
//! Later operations draw on top of earlier ones.
//!
//! Everything interpolated into the graph comes from either user-sourced news
//! text or filesystem font paths, both of which contain characters that are
//! meaningful to ffmpeg's filter mini-language. Each syntactic class gets its
//! own escaping function so arbitrary text cannot break out of a `text='…'`
//! token and inject additional directives.

use std::path::{Path, PathBuf};

use crate::{
    error::{NewsreelError, Result},
    text,
    types::{NewsItem, Segment},
};

pub const CANVAS_WIDTH: u32 = 1280;
pub const CANVAS_HEIGHT: u32 = 720;
pub const FRAME_RATE: u32 = 30;

const CARD_INSET: u32 = 40;
const PANEL_X_INSET: u32 = 80;
const PANEL_Y_TOP: u32 = 140;
const PANEL_Y_MARGIN_TOTAL: u32 = 260;

const TITLE_Y: u32 = 70;
const TITLE_FONT_SIZE: u32 = 44;

const LABEL_X: u32 = 120;
const LABEL_Y: u32 = 180;
const LABEL_FONT_SIZE: u32 = 26;

const HEADLINE_WRAP: usize = 30;
const HEADLINE_MAX_LINES: usize = 3;
const HEADLINE_Y: u32 = 240;
const HEADLINE_LINE_STEP: u32 = 52;
const HEADLINE_FONT_SIZE: u32 = 40;

const SUMMARY_WRAP: usize = 60;
const SUMMARY_MAX_LINES: usize = 5;
const SUMMARY_Y: u32 = 400;
const SUMMARY_LINE_STEP: u32 = 34;
const SUMMARY_FONT_SIZE: u32 = 24;

/// Slide deck color scheme, as ffmpeg color expressions.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: String,
    pub card: String,
    pub panel: String,
    pub title_color: String,
    pub accent: String,
    pub headline_color: String,
    pub summary_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "0x0D1B2A".to_string(),
            card: "0x1B263B".to_string(),
            panel: "0x24324A@0.55".to_string(),
            title_color: "0xE0E1DD".to_string(),
            accent: "0xF4A025".to_string(),
            headline_color: "0xE0E1DD".to_string(),
            summary_color: "0xA8B2C1".to_string(),
        }
    }
}

/// Font files used by the deck. Both must exist before any graph is built;
/// a missing font is a configuration error, not something to retry.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub bold: PathBuf,
    pub regular: PathBuf,
}

const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
];

const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
];

impl FontSet {
    /// Build a font set from explicit paths, verifying both exist.
    pub fn new(bold: impl Into<PathBuf>, regular: impl Into<PathBuf>) -> Result<Self> {
        let bold = bold.into();
        let regular = regular.into();
        for path in [&bold, &regular] {
            if !path.exists() {
                return Err(NewsreelError::AssetMissing { path: path.clone() });
            }
        }
        Ok(Self { bold, regular })
    }

    /// Probe well-known install locations for a usable bold/regular pair.
    pub fn resolve() -> Result<Self> {
        let bold = Self::first_existing(BOLD_CANDIDATES)?;
        let regular = Self::first_existing(REGULAR_CANDIDATES)?;
        Ok(Self { bold, regular })
    }

    fn first_existing(candidates: &[&str]) -> Result<PathBuf> {
        candidates
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
            .ok_or_else(|| NewsreelError::AssetMissing {
                path: PathBuf::from(candidates[0]),
            })
    }
}

/// Escape a text token for interpolation inside `drawtext=text='…'`.
///
/// Backslash, quote, colon, percent and brackets are all meaningful to the
/// filter parser; newlines would terminate the directive. Commas and
/// semicolons separate filters at the graph level, so they are escaped too.
pub fn escape_drawtext_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            // Close the quoted token, emit an escaped quote, reopen it.
            '\'' => out.push_str("'\\''"),
            ':' => out.push_str("\\:"),
            '%' => out.push_str("\\%"),
            '[' => out.push_str("\\["),
            ']' => out.push_str("\\]"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' | '\r' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Escape a font file path for interpolation into `fontfile='…'`.
/// Path separators are normalized to forward slashes; quotes and colons
/// (Windows drive letters) are escaped.
pub fn escape_font_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .replace('\'', "'\\''")
        .replace(':', "\\:")
}

fn drawtext(
    font: &Path,
    text: &str,
    x: &str,
    y: u32,
    size: u32,
    color: &str,
    enable: Option<(f64, f64)>,
) -> String {
    let mut op = format!(
        "drawtext=fontfile='{}':text='{}':x={}:y={}:fontsize={}:fontcolor={}",
        escape_font_path(font),
        escape_drawtext_text(text),
        x,
        y,
        size,
        color,
    );
    if let Some((start, end)) = enable {
        op.push_str(&format!(":enable='between(t,{start},{end})'"));
    }
    op
}

fn drawbox(x: u32, y: u32, w: u32, h: u32, color: &str) -> String {
    format!("drawbox=x={x}:y={y}:w={w}:h={h}:color={color}:t=fill")
}

/// Build the ordered drawing operations for the whole deck.
pub fn build_render_graph(
    segments: &[Segment],
    items: &[NewsItem],
    title: &str,
    fonts: &FontSet,
    theme: &Theme,
) -> Result<Vec<String>> {
    if segments.is_empty() {
        return Err(NewsreelError::InvalidInput(
            "cannot build a render graph without segments".to_string(),
        ));
    }

    let mut ops = Vec::new();

    // Base layer, always visible.
    ops.push(drawbox(0, 0, CANVAS_WIDTH, CANVAS_HEIGHT, &theme.background));
    ops.push(drawbox(
        CARD_INSET,
        CARD_INSET,
        CANVAS_WIDTH - 2 * CARD_INSET,
        CANVAS_HEIGHT - 2 * CARD_INSET,
        &theme.card,
    ));
    ops.push(drawbox(
        PANEL_X_INSET,
        PANEL_Y_TOP,
        CANVAS_WIDTH - 2 * PANEL_X_INSET,
        CANVAS_HEIGHT - PANEL_Y_MARGIN_TOTAL,
        &theme.panel,
    ));
    ops.push(drawtext(
        &fonts.bold,
        title,
        "(w-text_w)/2",
        TITLE_Y,
        TITLE_FONT_SIZE,
        &theme.title_color,
        None,
    ));

    // Per-segment overlays, gated on the segment's time window.
    for segment in segments {
        let item = items
            .get(segment.item_index)
            .ok_or_else(|| {
                NewsreelError::InvalidInput(format!(
                    "segment {} references missing item {}",
                    segment.index, segment.item_index
                ))
            })?;
        let window = Some((segment.start, segment.end));

        ops.push(drawtext(
            &fonts.bold,
            &format!("UPDATE {}", segment.index + 1),
            &LABEL_X.to_string(),
            LABEL_Y,
            LABEL_FONT_SIZE,
            &theme.accent,
            window,
        ));

        let headline = text::wrap(&text::sanitize(&item.title), HEADLINE_WRAP);
        for (i, line) in headline.iter().take(HEADLINE_MAX_LINES).enumerate() {
            ops.push(drawtext(
                &fonts.bold,
                line,
                &LABEL_X.to_string(),
                HEADLINE_Y + i as u32 * HEADLINE_LINE_STEP,
                HEADLINE_FONT_SIZE,
                &theme.headline_color,
                window,
            ));
        }

        let summary = text::wrap(&text::sanitize(&item.content), SUMMARY_WRAP);
        for (i, line) in summary.iter().take(SUMMARY_MAX_LINES).enumerate() {
            ops.push(drawtext(
                &fonts.regular,
                line,
                &LABEL_X.to_string(),
                SUMMARY_Y + i as u32 * SUMMARY_LINE_STEP,
                SUMMARY_FONT_SIZE,
                &theme.summary_color,
                window,
            ));
        }
    }

    Ok(ops)
}

/// Join the ordered operations into the string ffmpeg takes as `-vf`.
pub fn filtergraph_string(ops: &[String]) -> String {
    ops.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments;

    fn item(title: &str, content: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            content: content.to_string(),
            author: None,
            read_more_url: None,
            date: None,
        }
    }

    fn test_fonts() -> FontSet {
        // Paths are only interpolated, not opened, while building the graph.
        FontSet {
            bold: PathBuf::from("/fonts/Deck-Bold.ttf"),
            regular: PathBuf::from("/fonts/Deck-Regular.ttf"),
        }
    }

    #[test]
    fn escaping_neutralizes_directive_characters() {
        let escaped = escape_drawtext_text("a'b:c%d[e]f\\g,h;i\nj");
        assert!(!escaped.contains('\n'));
        // No unescaped occurrence of any meta character survives.
        assert_eq!(escaped, "a'\\''b\\:c\\%d\\[e\\]f\\\\g\\,h\\;i j");
    }

    #[test]
    fn plain_text_passes_through_unchanged() {
        assert_eq!(escape_drawtext_text("Hello World 42"), "Hello World 42");
    }

    #[test]
    fn font_paths_are_normalized_and_quoted() {
        assert_eq!(
            escape_font_path(Path::new("C:\\Fonts\\It's.ttf")),
            "C\\:/Fonts/It'\\''s.ttf"
        );
    }

    #[test]
    fn hostile_headline_cannot_inject_a_directive() {
        let items = vec![item(
            "break':x=0,drawtext=text='pwn",
            "summary with 100% of [everything]: fine",
        )];
        let segs = segments::plan(1, 30.0, 240.0).unwrap();
        let ops =
            build_render_graph(&segs, &items, "Briefing", &test_fonts(), &Theme::default())
                .unwrap();
        let graph = filtergraph_string(&ops);
        // The quote from the headline must not close the text token.
        assert!(!graph.contains("text='break':"));
        assert!(graph.contains("'\\''"));
    }

    #[test]
    fn base_layer_comes_first_in_order() {
        let items = vec![item("Title", "Content")];
        let segs = segments::plan(1, 30.0, 240.0).unwrap();
        let ops =
            build_render_graph(&segs, &items, "Daily Briefing", &test_fonts(), &Theme::default())
                .unwrap();
        assert!(ops[0].starts_with("drawbox=x=0:y=0:w=1280:h=720"));
        assert!(ops[1].starts_with("drawbox=x=40:y=40:w=1200:h=640"));
        assert!(ops[2].starts_with("drawbox=x=80:y=140:w=1120:h=460"));
        assert!(ops[3].contains("Daily Briefing"));
        assert!(!ops[3].contains("enable="), "title is never time-gated");
    }

    #[test]
    fn segment_overlays_carry_their_time_window() {
        let items = vec![item("One", "First story"), item("Two", "Second story")];
        let segs = segments::plan(2, 30.0, 240.0).unwrap();
        let ops = build_render_graph(&segs, &items, "T", &test_fonts(), &Theme::default())
            .unwrap();
        let graph = filtergraph_string(&ops);
        assert!(graph.contains("text='UPDATE 1':x=120:y=180"));
        assert!(graph.contains("enable='between(t,0,30)'"));
        assert!(graph.contains("text='UPDATE 8'"));
        assert!(graph.contains("enable='between(t,210,240)'"));
    }

    #[test]
    fn headline_and_summary_lines_are_capped() {
        let long = "word ".repeat(200);
        let items = vec![item(&long, &long)];
        let segs = segments::plan(1, 30.0, 240.0).unwrap();
        let ops = build_render_graph(&segs, &items, "T", &test_fonts(), &Theme::default())
            .unwrap();
        // Per segment: 1 label + 3 headline lines + 5 summary lines.
        let per_segment = 1 + HEADLINE_MAX_LINES + SUMMARY_MAX_LINES;
        assert_eq!(ops.len(), 4 + segs.len() * per_segment);
    }

    #[test]
    fn empty_segments_are_rejected() {
        let err = build_render_graph(&[], &[], "T", &test_fonts(), &Theme::default());
        assert!(err.is_err());
    }

    #[test]
    fn missing_font_is_a_configuration_error() {
        let err = FontSet::new("/definitely/not/here.ttf", "/also/not/here.ttf");
        assert!(matches!(err, Err(NewsreelError::AssetMissing { .. })));
    }
}
