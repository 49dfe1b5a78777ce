//! Storydeck turns a reference image and natural-language direction into a
//! multi-shot visual storyboard, delegating all generative work to an
//! external backend.
//!
//! The self-contained core is three pieces:
//!
//! 1. **Timeline budget** ([`timeline`]): allocates a finite total duration
//!    across a dynamic shot list and keeps "remaining" consistent through
//!    add/remove/edit.
//! 2. **Overlay placement inference** ([`overlay`]): maps sparse cell
//!    selections on a 5x5 grid to a semantic anchor and arrangement used by
//!    the downstream text-rendering instruction.
//! 3. **Panel compositor** ([`compose`]): deterministically merges generated
//!    panels into one canvas under a fixed layout.
//!
//! Everything generative sits behind [`backend::GenerativeBackend`];
//! [`session::StoryboardSession`] wires user actions to the core and the
//! backend, degrading every backend failure to "prior state unchanged".
#![forbid(unsafe_code)]

pub mod backend;
pub mod compose;
pub mod foundation;
pub mod overlay;
pub mod presets;
pub mod session;
pub mod timeline;

pub use backend::{
    AudioSyncPlan, AudioSyncRequest, GeminiBackend, GenerativeBackend, InlineImage,
    RenderImageRequest,
};
pub use compose::layout::{CanvasPlan, PanelLayout, PanelRect, layout_plan};
pub use compose::merge::{encode_png, export_filename, merge};
pub use foundation::core::{AspectRatio, Language, ShotId, format_secs};
pub use foundation::error::{StorydeckError, StorydeckResult};
pub use overlay::grid::{Anchor, Arrangement, GRID_CELLS, GRID_SIDE, GridSelection};
pub use session::{RenderConfig, StoryboardSession, TextOverlayConfig, VisualContext};
pub use timeline::budget::{DEFAULT_SHOT_SECS, MIN_REMAINING_SECS, Shot, ShotTimeline};
pub use timeline::field::{CreativeField, FieldKind};
