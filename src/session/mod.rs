//! Orchestration over a [`GenerativeBackend`].
//!
//! The session owns all authoring state explicitly (visual context, shot
//! timeline, render configuration, generated images) and wires it to the
//! backend. Backend failures are logged at this boundary and degrade to
//! "prior state unchanged"; nothing here is fatal.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    backend::{
        AudioSyncRequest, GenerativeBackend, InlineImage, RenderImageRequest,
        gemini::DEFAULT_IMAGE_MODEL,
    },
    compose::{
        layout::PanelLayout,
        merge::{encode_png, export_filename, merge},
    },
    foundation::{
        core::{AspectRatio, Language, ShotId},
        error::{StorydeckError, StorydeckResult},
    },
    overlay::grid::GridSelection,
    timeline::{budget::ShotTimeline, field::CreativeField},
};

pub mod prompt;

/// Reference imagery and the analysis/planning text derived from it.
#[derive(Clone, Debug, Default)]
pub struct VisualContext {
    pub main_image: Option<InlineImage>,
    pub ref_image: Option<InlineImage>,
    pub system_role: CreativeField,
    pub user_prompt: CreativeField,
    /// Backend description of the main image.
    pub analyzed_prompt: String,
    /// Backend-drafted shot plan text.
    pub shot_plan: String,
}

/// Text-overlay configuration feeding the placement inference engine.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextOverlayConfig {
    pub enabled: bool,
    pub content: String,
    pub cells: GridSelection,
    pub font_size: u32,
    pub color: String,
    pub bg_color: String,
    pub style: CreativeField,
    /// Dedicated text-rendering model; overrides the session render model
    /// when the overlay is enabled.
    pub model: String,
    /// Last generated typography preview.
    #[serde(skip)]
    pub preview: Option<InlineImage>,
}

impl Default for TextOverlayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            content: String::new(),
            cells: GridSelection::new(),
            font_size: 24,
            color: "#ffffff".to_string(),
            bg_color: "none".to_string(),
            style: CreativeField::default(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
            preview: None,
        }
    }
}

impl TextOverlayConfig {
    /// Style wording for prompts: selected preset first, custom notes after.
    pub fn style_text(&self) -> String {
        [self.style.selected.as_str(), self.style.custom.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Image generation settings.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub model: String,
    pub style: String,
    pub aspect_ratio: AspectRatio,
    pub layout: PanelLayout,
    pub overlay: TextOverlayConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_IMAGE_MODEL.to_string(),
            style: "Cinematic Realism".to_string(),
            aspect_ratio: AspectRatio::default(),
            layout: PanelLayout::default(),
            overlay: TextOverlayConfig::default(),
        }
    }
}

/// One authoring session: state plus the backend that animates it.
#[derive(Debug)]
pub struct StoryboardSession<B> {
    backend: B,
    pub language: Language,
    /// Auto mode plans shots from the analysis; manual mode renders the
    /// authored timeline.
    pub auto_mode: bool,
    /// Shot count used by auto-mode planning and rendering.
    pub planned_shot_count: usize,
    pub visual: VisualContext,
    pub timeline: ShotTimeline,
    pub render: RenderConfig,
    /// Accumulated panel images, in generation order.
    pub images: Vec<InlineImage>,
}

impl<B: GenerativeBackend> StoryboardSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            language: Language::default(),
            auto_mode: true,
            planned_shot_count: 4,
            visual: VisualContext::default(),
            timeline: ShotTimeline::default(),
            render: RenderConfig::default(),
            images: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The model a panel render should use, honoring the overlay override.
    fn render_model(&self) -> String {
        let overlay = &self.render.overlay;
        if overlay.enabled && !overlay.model.is_empty() {
            overlay.model.clone()
        } else {
            self.render.model.clone()
        }
    }

    fn enabled_overlay(&self) -> Option<&TextOverlayConfig> {
        Some(&self.render.overlay).filter(|o| o.enabled)
    }

    /// Analyzes the main reference image into `visual.analyzed_prompt`.
    /// Returns whether state changed; missing image or a backend failure
    /// leaves everything untouched.
    #[tracing::instrument(skip(self))]
    pub async fn analyze_main_image(&mut self) -> bool {
        let Some(image) = self.visual.main_image.clone() else {
            tracing::debug!("analysis skipped: no main image uploaded");
            return false;
        };
        let system = self.visual.system_role.prompt_fragment();
        let user = self.visual.user_prompt.prompt_fragment();

        match self
            .backend
            .analyze_image(&image, &system, &user, self.language)
            .await
        {
            Ok(text) if !text.is_empty() => {
                self.visual.analyzed_prompt = text;
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::warn!(error = %e, "image analysis failed; keeping prior prompt");
                false
            }
        }
    }

    /// Auto mode: drafts `planned_shot_count` shots from the analyzed prompt.
    #[tracing::instrument(skip(self))]
    pub async fn plan_from_analysis(&mut self) -> bool {
        if self.visual.analyzed_prompt.is_empty() {
            tracing::debug!("planning skipped: nothing analyzed yet");
            return false;
        }
        let context = self.visual.analyzed_prompt.clone();
        self.apply_plan(&context, self.planned_shot_count).await
    }

    /// Manual mode: re-plans from the authored timeline, keeping the visual
    /// context when present.
    #[tracing::instrument(skip(self))]
    pub async fn plan_from_timeline(&mut self) -> bool {
        let visual = (!self.visual.analyzed_prompt.is_empty())
            .then_some(self.visual.analyzed_prompt.as_str());
        let context = prompt::manual_timeline_context(&self.timeline.shots, visual);
        let count = self.timeline.shots.len();
        self.apply_plan(&context, count).await
    }

    async fn apply_plan(&mut self, context: &str, count: usize) -> bool {
        match self.backend.plan_shots(context, count, self.language).await {
            Ok(text) if !text.is_empty() => {
                self.visual.shot_plan = text;
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::warn!(error = %e, "shot planning failed; keeping prior plan");
                false
            }
        }
    }

    /// Synchronizes the four audio fields of one shot. The returned plan is
    /// applied atomically (all four fields or none); an empty action, an
    /// unmatched id, a failure, or an unparseable response all leave the shot
    /// untouched. Other shots are never affected.
    #[tracing::instrument(skip(self))]
    pub async fn sync_audio(&mut self, id: ShotId) -> bool {
        let Some(shot) = self.timeline.shot(id) else {
            return false;
        };
        let action = shot.action.effective();
        if action.is_empty() {
            tracing::debug!(?id, "audio sync skipped: no action text");
            return false;
        }

        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        let request = AudioSyncRequest {
            action: action.to_string(),
            duration_secs: shot.duration,
            language: self.language,
            existing_bgm: non_empty(shot.bgm.effective()),
            existing_dialog: non_empty(shot.dialog.effective()),
        };

        let plan = match self.backend.synthesize_audio(&request).await {
            Ok(Some(plan)) => plan,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!(error = %e, ?id, "audio sync failed; shot unchanged");
                return false;
            }
        };

        let Some(shot) = self.timeline.shot_mut(id) else {
            // Removed while the call was in flight; drop the result.
            return false;
        };
        for (field, value) in [
            (&mut shot.audio, plan.audio),
            (&mut shot.sfx, plan.sfx),
            (&mut shot.bgm, plan.bgm),
            (&mut shot.dialog, plan.dialog),
        ] {
            field.selected = value;
            field.auto = true;
        }
        true
    }

    /// Renders the storyboard: one panel per shot, sequentially and in order,
    /// each awaited before the next. The image list is replaced wholesale;
    /// failed or empty renders are skipped. Returns how many panels landed.
    #[tracing::instrument(skip(self))]
    pub async fn render_storyboard(&mut self) -> usize {
        let count = if self.auto_mode {
            self.planned_shot_count
        } else {
            self.timeline.shots.len()
        };

        let mut images = Vec::with_capacity(count);
        for i in 0..count {
            let scene = if self.auto_mode {
                let context = if self.visual.shot_plan.is_empty() {
                    &self.visual.analyzed_prompt
                } else {
                    &self.visual.shot_plan
                };
                prompt::auto_shot_scene(i, context, &self.render.style)
            } else {
                prompt::manual_shot_scene(i, &self.visual.analyzed_prompt, &self.timeline.shots[i])
            };

            let request = RenderImageRequest {
                prompt: prompt::panel_prompt(
                    &self.render.style,
                    self.render.aspect_ratio,
                    &scene,
                    self.enabled_overlay(),
                ),
                aspect_ratio: self.render.aspect_ratio,
                model: self.render_model(),
            };

            match self.backend.render_image(&request).await {
                Ok(Some(image)) => images.push(image),
                Ok(None) => tracing::warn!(panel = i, "render returned no image; skipping panel"),
                Err(e) => tracing::warn!(error = %e, panel = i, "panel render failed; skipping"),
            }
        }

        self.images = images;
        self.images.len()
    }

    /// Renders a 1:1 typography preview of the overlay design, storing it in
    /// `render.overlay.preview`. A failure keeps the previous preview.
    #[tracing::instrument(skip(self))]
    pub async fn render_overlay_preview(&mut self) -> bool {
        let request = RenderImageRequest {
            prompt: prompt::panel_prompt(
                &self.render.style,
                AspectRatio::Square,
                &prompt::typography_preview_prompt(&self.render.overlay),
                self.enabled_overlay(),
            ),
            aspect_ratio: AspectRatio::Square,
            model: self.render_model(),
        };
        match self.backend.render_image(&request).await {
            Ok(Some(image)) => {
                self.render.overlay.preview = Some(image);
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "typography preview failed");
                false
            }
        }
    }

    /// Merges the generated panels with the configured layout. Errors when no
    /// panels exist; the compositor is never invoked on an empty list.
    pub fn merged_canvas(&self) -> StorydeckResult<image::RgbaImage> {
        if self.images.is_empty() {
            return Err(StorydeckError::validation(
                "nothing to export: no generated panels",
            ));
        }
        let mut decoded = Vec::with_capacity(self.images.len());
        for (i, inline) in self.images.iter().enumerate() {
            let bytes = inline.decode_bytes()?;
            let img = image::load_from_memory(&bytes)
                .with_context(|| format!("decode generated panel {i}"))?
                .to_rgba8();
            decoded.push(img);
        }
        merge(&decoded, self.render.layout)
    }

    /// Merges and writes the exported PNG into `dir`, returning its path
    /// (`storyboard_puzzle_<unix millis>.png`).
    #[tracing::instrument(skip(self))]
    pub fn export_merged(&self, dir: &Path) -> StorydeckResult<PathBuf> {
        let canvas = self.merged_canvas()?;
        let bytes = encode_png(&canvas)?;
        let path = dir.join(export_filename());
        std::fs::write(&path, bytes)
            .with_context(|| format!("write export '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "storyboard exported");
        Ok(path)
    }
}
