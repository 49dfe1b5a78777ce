/// One creative-direction input: free text, a preset pick, and an
/// auto-enhancement toggle.
///
/// Resolution lives here and only here: custom text wins over the preset, and
/// the enhancement marker is prepended when `auto` is set. Call-sites never
/// re-implement this rule.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreativeField {
    pub custom: String,
    pub auto: bool,
    pub selected: String,
}

impl Default for CreativeField {
    fn default() -> Self {
        Self {
            custom: String::new(),
            auto: true,
            selected: String::new(),
        }
    }
}

pub const ENHANCEMENT_MARKER: &str = "[Semantic Enhancement Active]";

impl CreativeField {
    pub fn preset(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            ..Self::default()
        }
    }

    /// The effective value: custom text if non-empty, else the selected preset.
    pub fn effective(&self) -> &str {
        if self.custom.is_empty() {
            &self.selected
        } else {
            &self.custom
        }
    }

    pub fn is_empty(&self) -> bool {
        self.custom.is_empty() && self.selected.is_empty()
    }

    /// Prompt fragment: non-empty parts joined with `", "`, prefixed with the
    /// enhancement marker when `auto` is set.
    pub fn prompt_fragment(&self) -> String {
        let base = [self.custom.as_str(), self.selected.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        if self.auto {
            format!("{ENHANCEMENT_MARKER} {base}")
        } else {
            base
        }
    }
}

/// The seven per-shot creative attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Action,
    Camera,
    Atmosphere,
    Audio,
    Bgm,
    Sfx,
    Dialog,
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Action,
        FieldKind::Camera,
        FieldKind::Atmosphere,
        FieldKind::Audio,
        FieldKind::Bgm,
        FieldKind::Sfx,
        FieldKind::Dialog,
    ];
}
