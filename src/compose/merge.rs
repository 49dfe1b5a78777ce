use std::io::Cursor;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use image::{RgbaImage, imageops};

use crate::{
    compose::layout::{PanelLayout, layout_plan},
    foundation::error::{StorydeckError, StorydeckResult},
};

/// Merges the source images into one canvas per the layout's geometry.
///
/// The first image's dimensions are canonical: every panel box is derived from
/// them, and a source whose native size differs is stretch-resized into its
/// box (the equivalent of drawing with an explicit destination size). An empty
/// source list is an error, never a blank canvas.
pub fn merge(images: &[RgbaImage], layout: PanelLayout) -> StorydeckResult<RgbaImage> {
    let first = images
        .first()
        .ok_or_else(|| StorydeckError::validation("merge requires at least one source image"))?;
    let (w, h) = first.dimensions();
    if w == 0 || h == 0 {
        return Err(StorydeckError::validation(
            "merge requires non-degenerate source dimensions",
        ));
    }

    let plan = layout_plan(layout, w, h, images.len());
    let mut canvas = RgbaImage::new(plan.width, plan.height);

    for (src, panel) in images.iter().zip(&plan.panels) {
        if src.dimensions() == (panel.width, panel.height) {
            imageops::replace(&mut canvas, src, i64::from(panel.x), i64::from(panel.y));
        } else {
            let scaled =
                imageops::resize(src, panel.width, panel.height, imageops::FilterType::Triangle);
            imageops::replace(&mut canvas, &scaled, i64::from(panel.x), i64::from(panel.y));
        }
    }

    Ok(canvas)
}

/// Encodes a merged canvas as PNG bytes.
pub fn encode_png(canvas: &RgbaImage) -> StorydeckResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(canvas.clone())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode merged canvas as png")?;
    Ok(buf)
}

/// Download/export filename: `storyboard_puzzle_<unix millis>.png`.
pub fn export_filename() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("storyboard_puzzle_{millis}.png")
}
