use crate::{
    foundation::core::ShotId,
    timeline::field::{CreativeField, FieldKind},
};

/// Default duration handed to a freshly added shot, capped by the remaining
/// budget.
pub const DEFAULT_SHOT_SECS: f64 = 3.0;

/// A shot is refused when the remaining budget is at or below this floor.
pub const MIN_REMAINING_SECS: f64 = 2.0;

/// One narrative unit on the storyboard timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shot {
    pub id: ShotId,
    /// Seconds. Edits are unvalidated; the budget is soft (see [`ShotTimeline`]).
    pub duration: f64,
    pub action: CreativeField,
    pub camera: CreativeField,
    pub atmosphere: CreativeField,
    pub audio: CreativeField,
    pub bgm: CreativeField,
    pub sfx: CreativeField,
    pub dialog: CreativeField,
}

impl Shot {
    fn new(id: ShotId, duration: f64) -> Self {
        Self {
            id,
            duration,
            action: CreativeField::default(),
            camera: CreativeField::default(),
            atmosphere: CreativeField::default(),
            audio: CreativeField::default(),
            bgm: CreativeField::default(),
            sfx: CreativeField::default(),
            dialog: CreativeField::default(),
        }
    }

    pub fn field(&self, kind: FieldKind) -> &CreativeField {
        match kind {
            FieldKind::Action => &self.action,
            FieldKind::Camera => &self.camera,
            FieldKind::Atmosphere => &self.atmosphere,
            FieldKind::Audio => &self.audio,
            FieldKind::Bgm => &self.bgm,
            FieldKind::Sfx => &self.sfx,
            FieldKind::Dialog => &self.dialog,
        }
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> &mut CreativeField {
        match kind {
            FieldKind::Action => &mut self.action,
            FieldKind::Camera => &mut self.camera,
            FieldKind::Atmosphere => &mut self.atmosphere,
            FieldKind::Audio => &mut self.audio,
            FieldKind::Bgm => &mut self.bgm,
            FieldKind::Sfx => &mut self.sfx,
            FieldKind::Dialog => &mut self.dialog,
        }
    }
}

/// The shot-timeline budget manager.
///
/// Owns the ordered shot list and a soft duration cap. `remaining()` floors at
/// zero; the only hard gate in the system is the add-shot threshold. Duration
/// edits may push the allocated sum past `total_duration` on purpose: the cap
/// is a display/guard value, not an enforced invariant.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ShotTimeline {
    pub total_duration: f64,
    pub shots: Vec<Shot>,
    next_id: u64,
}

impl Default for ShotTimeline {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl ShotTimeline {
    pub fn new(total_duration: f64) -> Self {
        Self {
            total_duration,
            shots: Vec::new(),
            next_id: 0,
        }
    }

    /// Seconds already allocated across all shots.
    pub fn allocated(&self) -> f64 {
        self.shots.iter().map(|s| s.duration).sum()
    }

    /// Unallocated budget, floored at zero. Never negative even when edits
    /// have pushed the allocation past the cap.
    pub fn remaining(&self) -> f64 {
        (self.total_duration - self.allocated()).max(0.0)
    }

    /// Whether `add_shot` would currently be refused.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() <= MIN_REMAINING_SECS
    }

    /// Appends a new shot with `duration = min(3.0, remaining())` and default
    /// fields. Refuses (returns `None`) iff `remaining() <= 2.0`.
    pub fn add_shot(&mut self) -> Option<ShotId> {
        let remaining = self.remaining();
        if remaining <= MIN_REMAINING_SECS {
            return None;
        }
        let id = ShotId(self.next_id);
        self.next_id += 1;
        self.shots
            .push(Shot::new(id, DEFAULT_SHOT_SECS.min(remaining)));
        Some(id)
    }

    /// Deletes by identity. An unmatched id is a silent no-op; the relative
    /// order of the surviving shots is preserved.
    pub fn remove_shot(&mut self, id: ShotId) {
        self.shots.retain(|s| s.id != id);
    }

    pub fn shot(&self, id: ShotId) -> Option<&Shot> {
        self.shots.iter().find(|s| s.id == id)
    }

    pub fn shot_mut(&mut self, id: ShotId) -> Option<&mut Shot> {
        self.shots.iter_mut().find(|s| s.id == id)
    }

    /// Replaces one creative field on one shot. Unmatched ids are no-ops.
    pub fn update_field(&mut self, id: ShotId, kind: FieldKind, value: CreativeField) {
        if let Some(shot) = self.shot_mut(id) {
            *shot.field_mut(kind) = value;
        }
    }

    /// Sets a shot's duration without validation; the sum may exceed the cap.
    pub fn set_duration(&mut self, id: ShotId, secs: f64) {
        if let Some(shot) = self.shot_mut(id) {
            shot.duration = secs;
        }
    }

    /// Replaces the cap. Existing shots are never rescaled.
    pub fn set_total_duration(&mut self, secs: f64) {
        self.total_duration = secs;
    }
}
