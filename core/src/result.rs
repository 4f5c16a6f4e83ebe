//! Typed analysis verdicts returned by the analysis service.
//!
//! The service answers `POST /analyze` with one of:
//!
//! ```json
//! { "type": "image", "label": "normal", "confidence": 97.31 }
//! { "type": "video", "total_frames_analyzed": 120, "nsfw_frames": 3, "nsfw_ratio": 2.5, "verdict": "SFW" }
//! { "error": "model unavailable" }
//! ```
//!
//! Image-only deployments omit `type` and send just `label` and
//! `confidence`; [`decode_payload`] accepts that shape as an image result.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AnalysisError;
use crate::mode::Mode;

/// Classification of a single image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageVerdict {
    /// Model label, e.g. `normal` or `nsfw`
    pub label: String,
    /// Confidence percentage (0-100)
    pub confidence: f64,
}

impl ImageVerdict {
    /// Label normalizes to `normal` or `sfw`.
    pub fn is_safe(&self) -> bool {
        let label = self.label.to_lowercase();
        label == "normal" || label == "sfw"
    }
}

/// Frame statistics for a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoVerdict {
    pub total_frames_analyzed: u64,
    pub nsfw_frames: u64,
    /// Percentage of analyzed frames classified NSFW
    pub nsfw_ratio: f64,
    /// `SFW` or `NSFW`
    pub verdict: String,
}

impl VideoVerdict {
    /// Verdict equals `nsfw`, ignoring case.
    pub fn is_nsfw(&self) -> bool {
        self.verdict.eq_ignore_ascii_case("nsfw")
    }

    /// Verdict is exactly `SFW`.
    pub fn is_strict_sfw(&self) -> bool {
        self.verdict == "SFW"
    }
}

/// Successful analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisResult {
    Image(ImageVerdict),
    Video(VideoVerdict),
}

impl AnalysisResult {
    pub fn mode(&self) -> Mode {
        match self {
            AnalysisResult::Image(_) => Mode::Image,
            AnalysisResult::Video(_) => Mode::Video,
        }
    }
}

/// Decode a success-status response body.
///
/// An `error` field takes precedence over `type`. Shapes carrying neither a
/// known `type`, an `error`, nor the untyped image fields are rejected as
/// [`AnalysisError::Malformed`].
pub fn decode_payload(body: &str) -> Result<AnalysisResult, AnalysisError> {
    let value: Value = serde_json::from_str(body)?;
    let object = value
        .as_object()
        .ok_or_else(|| AnalysisError::Malformed("expected a JSON object".to_string()))?;

    if let Some(message) = error_field(object) {
        return Err(AnalysisError::Application(message));
    }

    let tag = match object.get("type") {
        Some(Value::String(tag)) => Some(tag.clone()),
        Some(_) => {
            return Err(AnalysisError::Malformed(
                "result type is not a string".to_string(),
            ))
        }
        None if object.contains_key("label") && object.contains_key("confidence") => {
            log::debug!("Decoding untyped payload as image result");
            Some("image".to_string())
        }
        None => None,
    };

    match tag.as_deref() {
        Some("image") => Ok(AnalysisResult::Image(serde_json::from_value(value)?)),
        Some("video") => Ok(AnalysisResult::Video(serde_json::from_value(value)?)),
        Some(other) => Err(AnalysisError::Malformed(format!(
            "unknown result type '{}'",
            other
        ))),
        None => Err(AnalysisError::Malformed(
            "missing both 'type' and 'error'".to_string(),
        )),
    }
}

/// Non-empty `error` message carried by a payload.
///
/// Non-string error values are stringified rather than dropped.
pub(crate) fn error_field(object: &Map<String, Value>) -> Option<String> {
    match object.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_image() {
        let result = decode_payload(r#"{"type":"image","label":"Normal","confidence":87.456}"#).unwrap();
        match result {
            AnalysisResult::Image(ref v) => {
                assert_eq!(v.label, "Normal");
                assert!(v.is_safe());
            }
            _ => panic!("expected image result"),
        }
        assert_eq!(result.mode(), Mode::Image);
    }

    #[test]
    fn test_decode_video() {
        let json = r#"{
            "type": "video",
            "total_frames_analyzed": 120,
            "nsfw_frames": 30,
            "nsfw_ratio": 25.0,
            "verdict": "NSFW"
        }"#;
        let result = decode_payload(json).unwrap();
        let AnalysisResult::Video(v) = result else {
            panic!("expected video result");
        };
        assert_eq!(v.total_frames_analyzed, 120);
        assert_eq!(v.nsfw_frames, 30);
        assert!(v.is_nsfw());
        assert!(!v.is_strict_sfw());
    }

    #[test]
    fn test_error_field_wins() {
        let err = decode_payload(r#"{"error":"model unavailable"}"#).unwrap_err();
        assert_eq!(err, AnalysisError::Application("model unavailable".into()));

        let err = decode_payload(r#"{"type":"image","error":"bad image"}"#).unwrap_err();
        assert_eq!(err, AnalysisError::Application("bad image".into()));
    }

    #[test]
    fn test_untyped_image_payload() {
        let result = decode_payload(r#"{"label":"nsfw","confidence":99.1}"#).unwrap();
        assert_eq!(
            result,
            AnalysisResult::Image(ImageVerdict {
                label: "nsfw".into(),
                confidence: 99.1
            })
        );
    }

    #[test]
    fn test_malformed_shapes() {
        for body in [
            r#"{}"#,
            r#"{"type":"audio"}"#,
            r#"{"type":42}"#,
            r#"{"type":"image","label":"x"}"#,
            r#"{"type":"video","verdict":"SFW"}"#,
            r#"[1,2,3]"#,
            "<html>oops</html>",
        ] {
            let err = decode_payload(body).unwrap_err();
            assert!(
                matches!(err, AnalysisError::Malformed(_)),
                "{} decoded as {:?}",
                body,
                err
            );
        }
    }

    #[test]
    fn test_label_normalization() {
        for label in ["Normal", "normal", "SFW", "sfw"] {
            let v = ImageVerdict { label: label.into(), confidence: 50.0 };
            assert!(v.is_safe(), "{} should be safe", label);
        }
        for label in ["Violent", " normal ", "sfw\n"] {
            let v = ImageVerdict { label: label.into(), confidence: 50.0 };
            assert!(!v.is_safe(), "{:?} should not be safe", label);
        }
    }

    #[test]
    fn test_lowercase_sfw_is_not_strict() {
        let v = VideoVerdict {
            total_frames_analyzed: 10,
            nsfw_frames: 0,
            nsfw_ratio: 0.0,
            verdict: "sfw".into(),
        };
        assert!(!v.is_nsfw());
        assert!(!v.is_strict_sfw());
    }

    #[test]
    fn test_serialize_tagged() {
        let result = AnalysisResult::Image(ImageVerdict { label: "normal".into(), confidence: 12.5 });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["label"], "normal");
    }
}
