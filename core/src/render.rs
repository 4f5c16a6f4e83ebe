//! Rendering of verdicts and errors into a display-ready view model.
//!
//! The view is plain data; the frontend maps it to markup and the CLI
//! prints [`ResultView::plain_text`].

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisOutcome};
use crate::mode::Mode;
use crate::result::{AnalysisResult, ImageVerdict, VideoVerdict};

/// Color category of the result region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Prompts and progress messages
    Neutral,
    /// Analysis judged the content safe
    Safe,
    /// Analysis judged the content unsafe
    Unsafe,
    /// Analysis could not run
    Warning,
}

impl Tone {
    /// CSS color for the result region.
    pub fn css_color(&self) -> &'static str {
        match self {
            Tone::Neutral => "rgb(107, 114, 128)",
            Tone::Safe => "green",
            Tone::Unsafe => "red",
            Tone::Warning => "orange",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "result-neutral",
            Tone::Safe => "result-safe",
            Tone::Unsafe => "result-unsafe",
            Tone::Warning => "result-warning",
        }
    }
}

/// A `label: value` line of a rendered result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewRow {
    pub label: String,
    pub value: String,
    /// Value is emphasized (bold)
    pub strong: bool,
}

impl ViewRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self { label: label.to_string(), value: value.into(), strong: false }
    }

    fn strong(label: &str, value: impl Into<String>) -> Self {
        Self { label: label.to_string(), value: value.into(), strong: true }
    }
}

/// Content of the result region.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultView {
    pub heading: Option<String>,
    pub rows: Vec<ViewRow>,
    /// Free-form message, used for prompts and errors
    pub message: Option<String>,
    pub tone: Tone,
}

impl ResultView {
    pub fn message(text: impl Into<String>, tone: Tone) -> Self {
        Self { heading: None, rows: Vec::new(), message: Some(text.into()), tone }
    }

    /// Neutral prompt for a freshly selected mode.
    pub fn prompt(mode: Mode) -> Self {
        Self::message(mode.prompt(), Tone::Neutral)
    }

    /// Text rendering, one line per element.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(heading) = &self.heading {
            lines.push(heading.clone());
        }
        for row in &self.rows {
            lines.push(format!("{}: {}", row.label, row.value));
        }
        if let Some(message) = &self.message {
            lines.push(message.clone());
        }
        lines.join("\n")
    }
}

/// Render a successful analysis.
pub fn render_result(result: &AnalysisResult) -> ResultView {
    match result {
        AnalysisResult::Image(verdict) => render_image(verdict),
        AnalysisResult::Video(verdict) => render_video(verdict),
    }
}

fn render_image(verdict: &ImageVerdict) -> ResultView {
    ResultView {
        heading: Some("Image Analysis Result".to_string()),
        rows: vec![
            ViewRow::strong("Prediction", verdict.label.clone()),
            ViewRow::new("Confidence", format!("{:.2}%", verdict.confidence)),
        ],
        message: None,
        tone: if verdict.is_safe() { Tone::Safe } else { Tone::Unsafe },
    }
}

fn render_video(verdict: &VideoVerdict) -> ResultView {
    let human = if verdict.is_nsfw() {
        "Not Safe For Work!"
    } else {
        "Safe For Work!"
    };

    ResultView {
        heading: Some("Video Analysis Result".to_string()),
        rows: vec![
            ViewRow::new("Frames Analyzed", verdict.total_frames_analyzed.to_string()),
            ViewRow::new("NSFW Frames", verdict.nsfw_frames.to_string()),
            ViewRow::new("NSFW Ratio", format!("{}%", verdict.nsfw_ratio)),
            ViewRow::strong("Verdict", human),
        ],
        message: None,
        tone: if verdict.is_strict_sfw() { Tone::Safe } else { Tone::Unsafe },
    }
}

/// Render a failed submission. All error kinds share the warning tone.
pub fn render_error(error: &AnalysisError) -> ResultView {
    ResultView::message(format!("Error: {}", error), Tone::Warning)
}

/// Render whichever way a submission ended.
pub fn render_outcome(outcome: &AnalysisOutcome<AnalysisResult>) -> ResultView {
    match outcome {
        Ok(result) => render_result(result),
        Err(error) => render_error(error),
    }
}
