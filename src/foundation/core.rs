/// Stable identity of a shot within one timeline.
///
/// Ids are allocated monotonically by [`crate::timeline::budget::ShotTimeline`]
/// and are never reused, so a stale id after a removal simply matches nothing.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ShotId(pub u64);

/// Output language requested from the generative backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// The wording injected into backend prompts ("strictly in English/Chinese").
    pub fn prompt_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Chinese",
        }
    }
}

/// Aspect ratio requested for rendered panels.
///
/// Free-form labels collapse to the three ratios the image model accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn from_label(label: &str) -> Self {
        if label.contains("16:9") {
            AspectRatio::Wide
        } else if label.contains("9:16") {
            AspectRatio::Tall
        } else {
            AspectRatio::Square
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::Square => "1:1",
        }
    }
}

/// Formats a duration in seconds as the zero-padded `MM.ss`-style readout used
/// everywhere durations are displayed (`3.0` -> `"03.00"`).
pub fn format_secs(secs: f64) -> String {
    format!("{secs:05.2}")
}
