//! The generative-backend collaborator contract.
//!
//! Everything generative (vision analysis, text planning, audio-sync planning,
//! image synthesis) happens behind [`GenerativeBackend`]. Callers treat every
//! failure as "no result": prior state is retained and nothing crashes.

use base64::Engine as _;

use crate::foundation::{core::Language, error::StorydeckResult};

pub mod gemini;

pub use gemini::GeminiBackend;

/// Base64-encoded raster payload plus its mime type, the shape images travel
/// in on the wire and in data URLs.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload, no data-URL prefix.
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Parses a `data:<mime>;base64,<payload>` URL. Anything else is `None`.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let rest = url.strip_prefix("data:")?;
        let (mime, payload) = rest.split_once(";base64,")?;
        Some(Self::new(mime, payload))
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    pub fn decode_bytes(&self) -> StorydeckResult<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| {
                crate::foundation::error::StorydeckError::serde(format!(
                    "invalid base64 image payload: {e}"
                ))
            })
    }
}

/// The four audio fields returned by one sync call. Applied atomically or not
/// at all.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AudioSyncPlan {
    pub audio: String,
    pub sfx: String,
    pub bgm: String,
    pub dialog: String,
}

/// Context handed to [`GenerativeBackend::synthesize_audio`].
#[derive(Clone, Debug, Default)]
pub struct AudioSyncRequest {
    pub action: String,
    pub duration_secs: f64,
    pub language: Language,
    /// Existing BGM to refine rather than replace.
    pub existing_bgm: Option<String>,
    /// Existing dialogue to re-time within the duration.
    pub existing_dialog: Option<String>,
}

/// One panel-render request.
#[derive(Clone, Debug, Default)]
pub struct RenderImageRequest {
    /// Fully assembled prompt, overlay instructions included.
    pub prompt: String,
    pub aspect_ratio: crate::foundation::core::AspectRatio,
    /// Model id; overlay configs may override the session default.
    pub model: String,
}

/// Async collaborator performing all generative work.
///
/// Implementations must map transport/API errors into
/// [`crate::StorydeckError::Backend`]; "the model returned nothing usable" is
/// `Ok(None)` (or `Ok(String::new())` for the text calls), not an error.
pub trait GenerativeBackend {
    /// Describes a reference image in storyboard-prompt detail.
    fn analyze_image(
        &self,
        image: &InlineImage,
        system_prompt: &str,
        user_prompt: &str,
        language: Language,
    ) -> impl Future<Output = StorydeckResult<String>> + Send;

    /// Drafts `shot_count` storyboard shots from a visual description.
    fn plan_shots(
        &self,
        context: &str,
        shot_count: usize,
        language: Language,
    ) -> impl Future<Output = StorydeckResult<String>> + Send;

    /// Produces the four synchronized audio fields, or `None` when the
    /// structured response cannot be parsed.
    fn synthesize_audio(
        &self,
        request: &AudioSyncRequest,
    ) -> impl Future<Output = StorydeckResult<Option<AudioSyncPlan>>> + Send;

    /// Renders one storyboard panel, or `None` when the model returned no
    /// image part.
    fn render_image(
        &self,
        request: &RenderImageRequest,
    ) -> impl Future<Output = StorydeckResult<Option<InlineImage>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_roundtrip() {
        let img = InlineImage::from_bytes("image/png", b"abc");
        let url = img.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(InlineImage::from_data_url(&url), Some(img.clone()));
        assert_eq!(img.decode_bytes().unwrap(), b"abc");
    }

    #[test]
    fn from_data_url_rejects_non_base64_urls() {
        assert_eq!(InlineImage::from_data_url("https://example.com/x.png"), None);
        assert_eq!(InlineImage::from_data_url("data:text/plain,hello"), None);
    }

    #[test]
    fn decode_rejects_bad_payload() {
        let img = InlineImage::new("image/png", "!!!not-base64!!!");
        assert!(img.decode_bytes().is_err());
    }
}
