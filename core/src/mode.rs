//! Upload mode: which media category the client accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Media category the client is configured to accept and analyze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Image,
    Video,
}

const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

const VIDEO_EXTENSIONS: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
];

impl Mode {
    /// File picker `accept` filter.
    pub fn accept(&self) -> &'static str {
        match self {
            Mode::Image => "image/*",
            Mode::Video => "video/*",
        }
    }

    /// Neutral prompt shown in the result region after switching to this mode.
    pub fn prompt(&self) -> &'static str {
        match self {
            Mode::Image => "Upload an image for analysis.",
            Mode::Video => "Upload a video for analysis.",
        }
    }

    /// Human label for toggle controls.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Image => "Image",
            Mode::Video => "Video",
        }
    }

    /// Mode inferred from a file extension.
    pub fn from_path(path: &Path) -> Option<Mode> {
        let ext = extension(path)?;
        if IMAGE_EXTENSIONS.iter().any(|(e, _)| *e == ext) {
            Some(Mode::Image)
        } else if VIDEO_EXTENSIONS.iter().any(|(e, _)| *e == ext) {
            Some(Mode::Video)
        } else {
            None
        }
    }

    /// MIME type to declare for a multipart part holding `path`.
    pub fn mime_for_path(path: &Path) -> &'static str {
        extension(path)
            .and_then(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .chain(VIDEO_EXTENSIONS)
                    .find(|(e, _)| *e == ext)
                    .map(|(_, mime)| *mime)
            })
            .unwrap_or("application/octet-stream")
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Image => write!(f, "image"),
            Mode::Video => write!(f, "video"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(Mode::Image),
            "video" => Ok(Mode::Video),
            other => Err(format!("unknown mode '{}', expected 'image' or 'video'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_image() {
        assert_eq!(Mode::default(), Mode::Image);
        assert_eq!(Mode::default().accept(), "image/*");
    }

    #[test]
    fn test_accept_and_prompt_follow_mode() {
        assert_eq!(Mode::Video.accept(), "video/*");
        assert_eq!(Mode::Video.prompt(), "Upload a video for analysis.");
        assert_eq!(Mode::Image.prompt(), "Upload an image for analysis.");
        assert_eq!(Mode::Image.label(), "Image");
        assert_eq!(Mode::Video.label(), "Video");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Mode::from_path(Path::new("holiday.JPG")), Some(Mode::Image));
        assert_eq!(Mode::from_path(Path::new("clips/a.webm")), Some(Mode::Video));
        assert_eq!(Mode::from_path(Path::new("notes.txt")), None);
        assert_eq!(Mode::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(Mode::mime_for_path(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(Mode::mime_for_path(Path::new("a.mov")), "video/quicktime");
        assert_eq!(Mode::mime_for_path(Path::new("a.bin")), "application/octet-stream");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("VIDEO".parse::<Mode>(), Ok(Mode::Video));
        assert_eq!(Mode::Image.to_string(), "image");
        assert!("audio".parse::<Mode>().is_err());
    }
}
