//! Prompt assembly for the generative backend.
//!
//! All wording that travels to the model lives here, in one place: panel
//! prompts, the overlay's text-rendering instruction block, and the manual
//! timeline serialization used for re-planning.

use crate::{
    foundation::core::{AspectRatio, format_secs},
    session::TextOverlayConfig,
    timeline::budget::Shot,
};

/// Full prompt for one rendered storyboard panel. When the overlay is enabled
/// with content, the inferred anchor and arrangement are embedded as the
/// downstream text-rendering instruction.
pub fn panel_prompt(
    style: &str,
    aspect_ratio: AspectRatio,
    scene: &str,
    overlay: Option<&TextOverlayConfig>,
) -> String {
    let mut prompt = format!(
        "A professional storyboard panel in {style} style. Ratio: {}. Scene Detail: {scene}.",
        aspect_ratio.as_str()
    );

    if let Some(overlay) = overlay.filter(|o| o.enabled && !o.content.is_empty()) {
        let position = overlay.cells.position_description();
        let orientation = overlay.cells.arrangement().orientation_prompt();
        prompt.push_str(&format!(
            " CRITICAL: Incorporate the text \"{}\" directly into the image.\n\
             The text MUST follow these specs:\n\
             - Style: {}\n\
             - Color: {}\n\
             - Font Size: {}pt (scale relative to frame)\n\
             - Background: {}\n\
             - Position: Overall centered at the {position} of the frame.\n\
             - Arrangement: The text characters MUST be arranged in a {orientation}.\n\
             Ensure the text is clearly legible, professionally typeset according to the \
             specified orientation, and artistically integrated as a subtitle or overlay.",
            overlay.content,
            overlay.style_text(),
            overlay.color,
            overlay.font_size,
            overlay.bg_color,
        ));
    }

    prompt
}

/// 1:1 typography preview prompt for the overlay design.
pub fn typography_preview_prompt(overlay: &TextOverlayConfig) -> String {
    format!(
        "Typography design preview. Focus on high-quality text rendering. \
         Text to display: \"{}\". Style aesthetic: {}",
        overlay.content,
        overlay.style_text()
    )
}

/// Scene text for one shot in auto mode: the plan (or raw analysis) plus the
/// configured art style.
pub fn auto_shot_scene(index: usize, plan_or_analysis: &str, style: &str) -> String {
    format!(
        "Action Shot {}. Source Context: {plan_or_analysis}. Art Style: {style}",
        index + 1
    )
}

/// Scene text for one manually authored shot.
pub fn manual_shot_scene(index: usize, visual_context: &str, shot: &Shot) -> String {
    let details = [
        shot.action.custom.as_str(),
        shot.action.selected.as_str(),
        shot.camera.selected.as_str(),
        shot.atmosphere.selected.as_str(),
    ]
    .iter()
    .filter(|s| !s.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ");
    format!(
        "Shot Panel {}. Context: {visual_context}. Details: {details}",
        index + 1
    )
}

/// Serializes the manual timeline for re-planning, one line per shot,
/// prefixed with the analyzed visual context when present.
pub fn manual_timeline_context(shots: &[Shot], visual_context: Option<&str>) -> String {
    let lines = shots
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "Shot {}: Duration {}s. Action: {}, Camera: {}, Atmosphere: {}",
                i + 1,
                format_secs(s.duration),
                s.action.effective(),
                s.camera.selected,
                s.atmosphere.selected
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    match visual_context.filter(|v| !v.is_empty()) {
        Some(visual) => {
            format!("Visual Context: {visual}\n\nManual Timeline Instructions:\n{lines}")
        }
        None => format!("Manual Storyboard Sequence:\n{lines}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::grid::GridSelection;

    fn overlay(content: &str, cells: &[usize]) -> TextOverlayConfig {
        TextOverlayConfig {
            enabled: true,
            content: content.to_string(),
            cells: GridSelection::from_cells(cells.iter().copied()),
            ..TextOverlayConfig::default()
        }
    }

    #[test]
    fn panel_prompt_without_overlay_is_plain() {
        let p = panel_prompt("Noir", AspectRatio::Wide, "a chase", None);
        assert!(p.starts_with("A professional storyboard panel in Noir style."));
        assert!(p.contains("Ratio: 16:9"));
        assert!(!p.contains("CRITICAL"));
    }

    #[test]
    fn panel_prompt_embeds_anchor_and_orientation() {
        let o = overlay("THE END", &[20, 21, 22]);
        let p = panel_prompt("Noir", AspectRatio::Square, "finale", Some(&o));
        assert!(p.contains("Incorporate the text \"THE END\""));
        assert!(p.contains("centered at the bottom left of the frame"));
        assert!(p.contains("strictly horizontal orientation (side-by-side)"));
    }

    #[test]
    fn disabled_or_empty_overlay_is_ignored() {
        let mut o = overlay("", &[0]);
        let p = panel_prompt("Noir", AspectRatio::Wide, "x", Some(&o));
        assert!(!p.contains("CRITICAL"));

        o.content = "hi".to_string();
        o.enabled = false;
        let p = panel_prompt("Noir", AspectRatio::Wide, "x", Some(&o));
        assert!(!p.contains("CRITICAL"));
    }

    #[test]
    fn manual_context_lists_each_shot() {
        use crate::timeline::budget::ShotTimeline;
        use crate::timeline::field::{CreativeField, FieldKind};

        let mut tl = ShotTimeline::new(20.0);
        let id = tl.add_shot().unwrap();
        tl.update_field(id, FieldKind::Action, CreativeField::preset("running"));

        let ctx = manual_timeline_context(&tl.shots, None);
        assert!(ctx.starts_with("Manual Storyboard Sequence:"));
        assert!(ctx.contains("Shot 1: Duration 03.00s. Action: running"));

        let with_visual = manual_timeline_context(&tl.shots, Some("a red door"));
        assert!(with_visual.starts_with("Visual Context: a red door"));
        assert!(with_visual.contains("Manual Timeline Instructions:"));
    }
}
