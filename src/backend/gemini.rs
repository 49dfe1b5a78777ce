//! Gemini `generateContent` REST client.
//!
//! One thin, typed wrapper per backend operation. Transport and API errors map
//! to [`StorydeckError::Backend`]; an empty or imageless model response is a
//! `None`/empty result for the caller to ignore.

use serde_json::json;

use crate::{
    backend::{AudioSyncPlan, AudioSyncRequest, InlineImage, RenderImageRequest},
    foundation::{
        core::Language,
        error::{StorydeckError, StorydeckResult},
    },
};

/// Vision analysis and audio-sync planning model.
pub const ANALYSIS_MODEL: &str = "gemini-3-flash-preview";
/// Shot-planning model.
pub const PLANNING_MODEL: &str = "gemini-3-pro-preview";
/// Default panel/typography render model.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct GeminiBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, serde::Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<serde_json::Value>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, serde::Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, serde::Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline(image: &InlineImage) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            }),
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's text parts.
    fn first_text(&self) -> String {
        let Some(content) = self.candidates.first().and_then(|c| c.content.as_ref()) else {
            return String::new();
        };
        content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect()
    }

    /// First inline image part of the first candidate, if any.
    fn first_image(&self) -> Option<InlineImage> {
        let content = self.candidates.first()?.content.as_ref()?;
        content.parts.iter().find_map(|p| {
            p.inline_data
                .as_ref()
                .map(|d| InlineImage::new(d.mime_type.clone(), d.data.clone()))
        })
    }
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Points the client at a different host (test servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> StorydeckResult<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| StorydeckError::backend(format!("request to {model} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorydeckError::backend(format!(
                "{model} returned {status}: {body}"
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| StorydeckError::backend(format!("{model} response decode: {e}")))
    }
}

impl super::GenerativeBackend for GeminiBackend {
    #[tracing::instrument(skip(self, image, system_prompt, user_prompt))]
    async fn analyze_image(
        &self,
        image: &InlineImage,
        system_prompt: &str,
        user_prompt: &str,
        language: Language,
    ) -> StorydeckResult<String> {
        let instruction = format!(
            "System Instruction: {system_prompt}\nUser Prompt: {user_prompt}\n\n\
             Please describe this image in extreme detail for a storyboard prompt, \
             including lighting, composition, and subjects. \
             IMPORTANT: Provide the response strictly in {}.",
            language.prompt_name()
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::inline(image), Part::text(instruction)],
            }],
            generation_config: None,
        };
        let response = self.generate(ANALYSIS_MODEL, &request).await?;
        Ok(response.first_text())
    }

    #[tracing::instrument(skip(self, context))]
    async fn plan_shots(
        &self,
        context: &str,
        shot_count: usize,
        language: Language,
    ) -> StorydeckResult<String> {
        let prompt = format!(
            "Based on this visual description: \"{context}\", generate {shot_count} distinct \
             storyboard shots.\nFor each shot, provide: Action, Camera Movement, and Atmosphere.\n\
             Format as a clear numbered list. Output the content strictly in {}.",
            language.prompt_name()
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: None,
        };
        let response = self.generate(PLANNING_MODEL, &request).await?;
        Ok(response.first_text())
    }

    #[tracing::instrument(skip(self, request))]
    async fn synthesize_audio(
        &self,
        request: &AudioSyncRequest,
    ) -> StorydeckResult<Option<AudioSyncPlan>> {
        let mut context = format!(
            "Action: {}\nDuration: {} seconds.",
            request.action, request.duration_secs
        );
        if let Some(bgm) = &request.existing_bgm {
            context.push_str(&format!("\nExisting BGM: {bgm}"));
        }
        if let Some(dialog) = &request.existing_dialog {
            context.push_str(&format!("\nExisting Dialogue: {dialog}"));
        }

        let prompt = format!(
            "Refine and synchronize all audio elements for a professional movie shot based on \
             the provided context.\n{context}\n\n\
             Based on the action, duration, and any existing music/dialogue context, suggest a \
             perfectly synchronized:\n\
             1. Ambient Sound (audio)\n\
             2. Special Effects (sfx)\n\
             3. Background Music (bgm) - If existing BGM is provided, refine it to better match \
             the action.\n\
             4. Dialogue or Voiceover (dialog) - If existing dialogue is provided, refine its \
             timing and wording to fit precisely within the {}s limit.\n\n\
             Output the result strictly in {}.",
            request.duration_secs,
            request.language.prompt_name()
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: Some(json!({
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "audio": { "type": "STRING", "description": "Ambient sound description" },
                        "sfx": { "type": "STRING", "description": "Specific sound effects" },
                        "bgm": { "type": "STRING", "description": "Background music mood" },
                        "dialog": { "type": "STRING", "description": "Dialogue or subtitle text" }
                    },
                    "required": ["audio", "sfx", "bgm", "dialog"]
                }
            })),
        };

        let response = self.generate(ANALYSIS_MODEL, &body).await?;
        match serde_json::from_str::<AudioSyncPlan>(&response.first_text()) {
            Ok(plan) => Ok(Some(plan)),
            Err(e) => {
                tracing::warn!(error = %e, "audio sync response was not valid structured JSON");
                Ok(None)
            }
        }
    }

    #[tracing::instrument(skip(self, request), fields(model = %request.model))]
    async fn render_image(
        &self,
        request: &RenderImageRequest,
    ) -> StorydeckResult<Option<InlineImage>> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(request.prompt.clone())],
            }],
            generation_config: Some(json!({
                "imageConfig": { "aspectRatio": request.aspect_ratio.as_str() }
            })),
        };
        let response = self.generate(&request.model, &body).await?;
        Ok(response.first_image())
    }
}
