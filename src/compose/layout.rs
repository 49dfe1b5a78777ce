//! Panel layout geometry.
//!
//! Canvas size and per-panel placement are a pure function of the layout, the
//! canonical source dimensions (taken from the first image), and the source
//! count. No pixels are touched here.

/// Fixed panel arrangements for merging generated images into one picture.
///
/// A closed enumeration keyed by a stable identifier; display labels are
/// presentation-only lookups and never branched on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelLayout {
    Single,
    Grid2x2,
    Grid3x3,
    OnePlusTwo,
    /// "Cinematic Strip": panels stacked top-to-bottom, unbounded count.
    VerticalStrip,
    /// Panels side-by-side, unbounded count.
    #[default]
    HorizontalStrip,
}

impl PanelLayout {
    pub const ALL: [PanelLayout; 6] = [
        PanelLayout::Single,
        PanelLayout::Grid2x2,
        PanelLayout::Grid3x3,
        PanelLayout::OnePlusTwo,
        PanelLayout::VerticalStrip,
        PanelLayout::HorizontalStrip,
    ];

    /// Human-facing label.
    pub fn display_label(self) -> &'static str {
        match self {
            PanelLayout::Single => "Single Frame",
            PanelLayout::Grid2x2 => "Grid 2x2",
            PanelLayout::Grid3x3 => "Grid 3x3",
            PanelLayout::OnePlusTwo => "Feature 1+2",
            PanelLayout::VerticalStrip => "Cinematic Strip",
            PanelLayout::HorizontalStrip => "Storyboard Horizontal",
        }
    }

    /// Stable identifier used by serde and the CLI.
    pub fn id(self) -> &'static str {
        match self {
            PanelLayout::Single => "single",
            PanelLayout::Grid2x2 => "grid2x2",
            PanelLayout::Grid3x3 => "grid3x3",
            PanelLayout::OnePlusTwo => "one-plus-two",
            PanelLayout::VerticalStrip => "vertical-strip",
            PanelLayout::HorizontalStrip => "horizontal-strip",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.id() == id)
    }

    /// How many sources the layout can place, given how many exist. Bounded
    /// layouts ignore extras; strips take everything.
    pub fn capacity(self, available: usize) -> usize {
        match self {
            PanelLayout::Single => available.min(1),
            PanelLayout::Grid2x2 => available.min(4),
            PanelLayout::Grid3x3 => available.min(9),
            PanelLayout::OnePlusTwo => available.min(3),
            PanelLayout::VerticalStrip | PanelLayout::HorizontalStrip => available,
        }
    }
}

/// One panel's placement box on the merged canvas, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PanelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Canvas dimensions plus the placement box of every panel, in source order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasPlan {
    pub width: u32,
    pub height: u32,
    pub panels: Vec<PanelRect>,
}

/// Computes the merged-canvas geometry for `count` sources whose canonical
/// size is `w` x `h` (the first image's dimensions). Bounded layouts emit at
/// most their capacity; missing trailing panels simply leave cells blank.
pub fn layout_plan(layout: PanelLayout, w: u32, h: u32, count: usize) -> CanvasPlan {
    let placed = layout.capacity(count);
    match layout {
        PanelLayout::Single => CanvasPlan {
            width: w,
            height: h,
            panels: full_cells(w, h, 1, placed),
        },
        PanelLayout::Grid2x2 => CanvasPlan {
            width: w * 2,
            height: h * 2,
            panels: full_cells(w, h, 2, placed),
        },
        PanelLayout::Grid3x3 => CanvasPlan {
            width: w * 3,
            height: h * 3,
            panels: full_cells(w, h, 3, placed),
        },
        PanelLayout::OnePlusTwo => one_plus_two(w, h, placed),
        PanelLayout::VerticalStrip => CanvasPlan {
            width: w,
            height: h * placed.max(1) as u32,
            panels: (0..placed)
                .map(|i| PanelRect {
                    x: 0,
                    y: i as u32 * h,
                    width: w,
                    height: h,
                })
                .collect(),
        },
        PanelLayout::HorizontalStrip => CanvasPlan {
            width: w * placed.max(1) as u32,
            height: h,
            panels: (0..placed)
                .map(|i| PanelRect {
                    x: i as u32 * w,
                    y: 0,
                    width: w,
                    height: h,
                })
                .collect(),
        },
    }
}

/// Row-major full-size cells for the square grid layouts.
fn full_cells(w: u32, h: u32, cols: u32, placed: usize) -> Vec<PanelRect> {
    (0..placed)
        .map(|i| {
            let i = i as u32;
            PanelRect {
                x: (i % cols) * w,
                y: (i / cols) * h,
                width: w,
                height: h,
            }
        })
        .collect()
}

/// Feature panel filling ~1.33w on the left, two half-height panels stacked in
/// the remaining right column. The split is rounded so left + right == 2w and
/// top + bottom == h exactly.
fn one_plus_two(w: u32, h: u32, placed: usize) -> CanvasPlan {
    let canvas_w = w * 2;
    let left_w = (f64::from(w) * 1.33).round() as u32;
    let right_w = canvas_w - left_w;
    let top_h = h / 2;

    let mut panels = Vec::with_capacity(placed);
    if placed >= 1 {
        panels.push(PanelRect {
            x: 0,
            y: 0,
            width: left_w,
            height: h,
        });
    }
    if placed >= 2 {
        panels.push(PanelRect {
            x: left_w,
            y: 0,
            width: right_w,
            height: top_h,
        });
    }
    if placed >= 3 {
        panels.push(PanelRect {
            x: left_w,
            y: top_h,
            width: right_w,
            height: h - top_h,
        });
    }

    CanvasPlan {
        width: canvas_w,
        height: h,
        panels,
    }
}
