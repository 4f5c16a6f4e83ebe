//! Upload session state.
//!
//! One [`UploadSession`] backs one upload surface. Handlers mutate it and
//! act on what it returns: an object URL to revoke, a [`Submission`] to
//! send. Every submission carries a generation number, and only the
//! latest generation may write its outcome back, so a superseded response
//! can never overwrite newer state.

use crate::error::AnalysisOutcome;
use crate::mode::Mode;
use crate::render::{render_outcome, ResultView};
use crate::result::AnalysisResult;

/// A file chosen through the picker, with its local preview URL.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub file_name: String,
    /// Object URL (browser) or path (CLI) used to preview the file
    pub preview_url: String,
}

/// Currently previewed file.
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    pub file_name: String,
    pub url: String,
    /// Surface the preview is shown on
    pub mode: Mode,
}

/// Work to perform after a selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub generation: u64,
    pub mode: Mode,
    /// Preview URL replaced by this selection; release it
    pub superseded_url: Option<String>,
}

/// State of the result region.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultDisplay {
    Hidden,
    Shown(ResultView),
}

#[derive(Clone, Debug)]
pub struct UploadSession {
    mode: Mode,
    preview: Option<Preview>,
    generation: u64,
    analyzing: bool,
    display: ResultDisplay,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            preview: None,
            generation: 0,
            analyzing: false,
            display: ResultDisplay::Shown(ResultView::prompt(Mode::default())),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// File picker `accept` filter for the current mode.
    pub fn accept(&self) -> &'static str {
        self.mode.accept()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn image_visible(&self) -> bool {
        matches!(&self.preview, Some(p) if p.mode == Mode::Image)
    }

    pub fn video_visible(&self) -> bool {
        matches!(&self.preview, Some(p) if p.mode == Mode::Video)
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn display(&self) -> &ResultDisplay {
        &self.display
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switch mode.
    ///
    /// Clears both previews and shows the mode prompt. Any in-flight
    /// submission is invalidated. Returns the released preview URL.
    pub fn toggle(&mut self, mode: Mode) -> Option<String> {
        log::debug!("Switching upload mode to {}", mode);
        self.mode = mode;
        self.generation += 1;
        self.analyzing = false;
        self.display = ResultDisplay::Shown(ResultView::prompt(mode));
        self.preview.take().map(|p| p.url)
    }

    /// Register a file selection. `None` (picker dismissed) is a no-op.
    pub fn select(&mut self, selection: Option<Selection>) -> Option<Submission> {
        let selection = selection?;

        self.generation += 1;
        let superseded_url = self
            .preview
            .replace(Preview {
                file_name: selection.file_name,
                url: selection.preview_url,
                mode: self.mode,
            })
            .map(|p| p.url);
        self.analyzing = true;
        self.display = ResultDisplay::Hidden;

        Some(Submission {
            generation: self.generation,
            mode: self.mode,
            superseded_url,
        })
    }

    /// Record how a submission ended.
    ///
    /// Returns `false` and leaves state untouched when `generation` has
    /// been superseded.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: AnalysisOutcome<AnalysisResult>,
    ) -> bool {
        if generation != self.generation {
            log::debug!(
                "Discarding stale response (generation {}, current {})",
                generation,
                self.generation
            );
            return false;
        }

        if let Err(err) = &outcome {
            log::warn!("Analysis failed ({:?}): {}", err.kind(), err);
        }

        self.analyzing = false;
        self.display = ResultDisplay::Shown(render_outcome(&outcome));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::render::Tone;
    use crate::result::{ImageVerdict, VideoVerdict};

    fn pick(name: &str) -> Option<Selection> {
        Some(Selection {
            file_name: name.to_string(),
            preview_url: format!("blob:{}", name),
        })
    }

    fn shown(session: &UploadSession) -> &ResultView {
        match session.display() {
            ResultDisplay::Shown(view) => view,
            ResultDisplay::Hidden => panic!("result region hidden"),
        }
    }

    #[test]
    fn test_initial_state() {
        let session = UploadSession::new();
        assert_eq!(session.mode(), Mode::Image);
        assert_eq!(session.accept(), "image/*");
        assert!(!session.image_visible());
        assert!(!session.video_visible());
        assert_eq!(shown(&session).plain_text(), "Upload an image for analysis.");
    }

    #[test]
    fn test_toggle_sets_filter_and_prompt() {
        let mut session = UploadSession::new();
        for mode in [Mode::Video, Mode::Image, Mode::Video, Mode::Video] {
            session.toggle(mode);
            assert_eq!(session.mode(), mode);
            assert_eq!(session.accept(), mode.accept());
            assert_eq!(shown(&session).plain_text(), mode.prompt());
            assert_eq!(shown(&session).tone, Tone::Neutral);
        }
    }

    #[test]
    fn test_toggle_releases_preview() {
        let mut session = UploadSession::new();
        session.select(pick("a.png"));
        assert_eq!(session.toggle(Mode::Video), Some("blob:a.png".to_string()));
        assert!(!session.image_visible());
        assert!(!session.video_visible());
        assert_eq!(session.toggle(Mode::Image), None);
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let mut session = UploadSession::new();
        let before = session.generation();
        assert!(session.select(None).is_none());
        assert_eq!(session.generation(), before);
        assert!(!session.is_analyzing());
        assert!(matches!(session.display(), ResultDisplay::Shown(_)));
    }

    #[test]
    fn test_selection_shows_exactly_one_preview() {
        let mut session = UploadSession::new();
        session.select(pick("a.png"));
        assert!(session.image_visible() && !session.video_visible());
        assert!(session.is_analyzing());
        assert_eq!(session.display(), &ResultDisplay::Hidden);

        session.toggle(Mode::Video);
        session.select(pick("b.mp4"));
        assert!(session.video_visible() && !session.image_visible());
        assert_eq!(session.preview().map(|p| p.file_name.as_str()), Some("b.mp4"));
    }

    #[test]
    fn test_reselection_supersedes_url() {
        let mut session = UploadSession::new();
        let first = session.select(pick("a.png")).unwrap();
        assert_eq!(first.superseded_url, None);
        let second = session.select(pick("b.png")).unwrap();
        assert_eq!(second.superseded_url, Some("blob:a.png".to_string()));
        assert!(second.generation > first.generation);
    }

    #[test]
    fn test_complete_renders_and_clears_indicator() {
        let mut session = UploadSession::new();
        let sub = session.select(pick("a.png")).unwrap();
        let result = AnalysisResult::Image(ImageVerdict {
            label: "normal".into(),
            confidence: 99.0,
        });
        assert!(session.complete(sub.generation, Ok(result)));
        assert!(!session.is_analyzing());
        assert_eq!(shown(&session).tone, Tone::Safe);
    }

    #[test]
    fn test_error_clears_indicator() {
        let mut session = UploadSession::new();
        let sub = session.select(pick("a.png")).unwrap();
        assert!(session.complete(
            sub.generation,
            Err(AnalysisError::Transport("offline".into()))
        ));
        assert!(!session.is_analyzing());
        let view = shown(&session);
        assert!(view.plain_text().contains("Server not responding"));
        assert_eq!(view.tone, Tone::Warning);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = UploadSession::new();
        let old = session.select(pick("a.png")).unwrap();
        let new = session.select(pick("b.png")).unwrap();

        let late = AnalysisResult::Image(ImageVerdict {
            label: "nsfw".into(),
            confidence: 80.0,
        });
        assert!(!session.complete(old.generation, Ok(late)));
        assert!(session.is_analyzing());
        assert_eq!(session.display(), &ResultDisplay::Hidden);

        let fresh = AnalysisResult::Video(VideoVerdict {
            total_frames_analyzed: 5,
            nsfw_frames: 0,
            nsfw_ratio: 0.0,
            verdict: "SFW".into(),
        });
        assert!(session.complete(new.generation, Ok(fresh)));
        assert!(!session.is_analyzing());
    }

    #[test]
    fn test_toggle_invalidates_in_flight() {
        let mut session = UploadSession::new();
        let sub = session.select(pick("a.png")).unwrap();
        session.toggle(Mode::Video);
        assert!(!session.complete(sub.generation, Err(AnalysisError::Timeout { seconds: 60 })));
        assert_eq!(shown(&session).plain_text(), "Upload a video for analysis.");
    }
}
