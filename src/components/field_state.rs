use gpui::SharedString;

use crate::tokens::FIELD_METRICS;

use super::field_kind::{FieldKind, FieldShape};
use super::hint::HintText;

/// Host-supplied configuration of one render pass.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldConfig {
    pub kind: FieldKind,
    pub max_length: Option<usize>,
    pub label: Option<SharedString>,
    pub button_label: Option<SharedString>,
    pub disabled: bool,
    pub read_only: bool,
    pub dark: bool,
}

impl FieldConfig {
    pub fn shape(&self) -> FieldShape {
        self.kind.shape()
    }

    /// Positive length cap; `0` means uncapped.
    pub fn length_cap(&self) -> Option<usize> {
        self.max_length.filter(|max| *max > 0)
    }

    pub fn accepts_edits(&self) -> bool {
        !self.disabled && !self.read_only
    }

    /// Whether the action button slot is rendered at all.
    pub fn shows_button(&self) -> bool {
        self.shape().supports_slots()
            && self
                .button_label
                .as_ref()
                .is_some_and(|label| !label.is_empty())
    }

    /// A label that is present but blank hides the wrapper border.
    pub fn has_blank_label(&self) -> bool {
        self.label
            .as_ref()
            .is_some_and(|label| label.trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum FocusPhase {
    #[default]
    Idle,
    Active,
    Settled,
}

impl FocusPhase {
    pub fn on_focus(self) -> Self {
        Self::Active
    }

    pub fn on_blur(self, value: &str) -> Self {
        match self {
            Self::Active if value.is_empty() => Self::Idle,
            Self::Active => Self::Settled,
            Self::Idle | Self::Settled => self,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn is_settled(self) -> bool {
        matches!(self, Self::Settled)
    }

    pub fn label_floats(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub count: usize,
    pub phase: FocusPhase,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RejectReason {
    /// The field is disabled or read-only.
    Locked,
    TooLong { limit: usize, attempted: usize },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditOutcome {
    Accepted,
    Unchanged,
    Rejected(RejectReason),
}

impl EditOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `candidate` against `config` and commits it when allowed.
    ///
    /// Rejected edits leave the state untouched; the caller notifies the host
    /// only for `EditOutcome::Accepted`, after this returns.
    pub fn apply_edit(&mut self, config: &FieldConfig, candidate: &str) -> EditOutcome {
        let outcome = Self::check_edit(config, &self.value, candidate);
        if outcome.is_accepted() {
            self.value = candidate.to_string();
            self.count = candidate.chars().count();
        }
        outcome
    }

    pub fn check_edit(config: &FieldConfig, current: &str, candidate: &str) -> EditOutcome {
        if !config.accepts_edits() {
            return EditOutcome::Rejected(RejectReason::Locked);
        }
        let attempted = candidate.chars().count();
        if let Some(limit) = config.length_cap()
            && attempted > limit
        {
            return EditOutcome::Rejected(RejectReason::TooLong { limit, attempted });
        }
        if candidate == current {
            return EditOutcome::Unchanged;
        }
        EditOutcome::Accepted
    }

    pub fn focus(&mut self) {
        self.phase = self.phase.on_focus();
    }

    pub fn blur(&mut self) {
        self.phase = self.phase.on_blur(&self.value);
    }
}

/// The action button is disabled when the host disabled the field, an error
/// is shown, or the value is empty (with or without a success message).
pub fn is_button_disabled(config: &FieldConfig, hint: &HintText, value: &str) -> bool {
    config.disabled || hint.has_error() || (hint.has_success() && value.is_empty()) || value.is_empty()
}

/// Whether pressing Enter should invoke the button handler.
pub fn enter_triggers_button(config: &FieldConfig, hint: &HintText, value: &str) -> bool {
    config.shows_button() && !is_button_disabled(config, hint, value)
}

/// What pressing Enter in a single-line field does. The field always blurs;
/// `ClickThenBlur` runs the button handler first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnterOutcome {
    ClickThenBlur,
    Blur,
}

impl EnterOutcome {
    pub fn for_field(config: &FieldConfig, hint: &HintText, value: &str) -> Self {
        if enter_triggers_button(config, hint, value) {
            Self::ClickThenBlur
        } else {
            Self::Blur
        }
    }

    pub fn clicks_button(self) -> bool {
        matches!(self, Self::ClickThenBlur)
    }
}

/// The placeholder shows on an empty value, focused or not, unless it would
/// collide with a resting label.
pub fn placeholder_visible(config: &FieldConfig, phase: FocusPhase, value: &str) -> bool {
    value.is_empty() && (config.label.is_none() || phase.label_floats())
}

/// Resting and floated geometry of the label, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub offset_y: f32,
    pub scale: f32,
    pub padding_x: f32,
}

impl LabelPlacement {
    pub const RESTING: Self = Self {
        offset_y: 0.0,
        scale: 1.0,
        padding_x: 0.0,
    };

    pub fn for_state(phase: FocusPhase, shape: FieldShape) -> Self {
        if !phase.label_floats() {
            return Self::RESTING;
        }
        let offset_y = match shape {
            FieldShape::SingleLine => FIELD_METRICS.label_float_single,
            FieldShape::MultiLine => FIELD_METRICS.label_float_multi,
        };
        Self {
            offset_y: -offset_y,
            scale: FIELD_METRICS.label_float_scale,
            padding_x: FIELD_METRICS.label_float_padding,
        }
    }

    pub fn lerp(from: Self, to: Self, progress: f32) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * progress;
        Self {
            offset_y: mix(from.offset_y, to.offset_y),
            scale: mix(from.scale, to.scale),
            padding_x: mix(from.padding_x, to.padding_x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_length: Option<usize>) -> FieldConfig {
        FieldConfig {
            max_length,
            ..FieldConfig::default()
        }
    }

    #[test]
    fn accepted_edit_updates_value_and_count() {
        let mut state = FieldState::new();
        assert_eq!(state.apply_edit(&config(Some(10)), "héllo"), EditOutcome::Accepted);
        assert_eq!(state.value, "héllo");
        assert_eq!(state.count, 5);
    }

    #[test]
    fn zero_max_length_is_uncapped() {
        let mut state = FieldState::new();
        assert!(state.apply_edit(&config(Some(0)), "anything goes").is_accepted());
        assert_eq!(state.count, 13);
    }

    #[test]
    fn same_text_is_unchanged() {
        let mut state = FieldState::new();
        state.apply_edit(&config(None), "abc");
        assert_eq!(state.apply_edit(&config(None), "abc"), EditOutcome::Unchanged);
    }

    #[test]
    fn blank_label_is_detected() {
        let cfg = FieldConfig {
            label: Some("   ".into()),
            ..FieldConfig::default()
        };
        assert!(cfg.has_blank_label());
        assert!(!config(None).has_blank_label());
    }

    #[test]
    fn settled_blur_is_sticky() {
        assert_eq!(FocusPhase::Settled.on_blur(""), FocusPhase::Settled);
        assert_eq!(FocusPhase::Idle.on_blur("x"), FocusPhase::Idle);
        assert_eq!(FocusPhase::Settled.on_focus(), FocusPhase::Active);
    }

    #[test]
    fn placeholder_stays_visible_while_focused_and_empty() {
        let labelled = FieldConfig {
            label: Some("Name".into()),
            ..FieldConfig::default()
        };
        assert!(placeholder_visible(&labelled, FocusPhase::Active, ""));
        assert!(!placeholder_visible(&labelled, FocusPhase::Idle, ""));
        assert!(!placeholder_visible(&labelled, FocusPhase::Active, "a"));
        assert!(placeholder_visible(&config(None), FocusPhase::Idle, ""));
    }

    #[test]
    fn label_floats_higher_for_textarea() {
        let single = LabelPlacement::for_state(FocusPhase::Active, FieldShape::SingleLine);
        let multi = LabelPlacement::for_state(FocusPhase::Active, FieldShape::MultiLine);
        assert!(multi.offset_y < single.offset_y);
        assert_eq!(single.scale, 0.75);
        assert_eq!(
            LabelPlacement::for_state(FocusPhase::Idle, FieldShape::MultiLine),
            LabelPlacement::RESTING
        );
        let settled = LabelPlacement::for_state(FocusPhase::Settled, FieldShape::SingleLine);
        assert_eq!(settled, single);
    }

    #[test]
    fn label_lerp_clamps_progress() {
        let floated = LabelPlacement::for_state(FocusPhase::Active, FieldShape::SingleLine);
        let half = LabelPlacement::lerp(LabelPlacement::RESTING, floated, 0.5);
        assert_eq!(half.scale, 0.875);
        assert_eq!(
            LabelPlacement::lerp(LabelPlacement::RESTING, floated, 4.0),
            floated
        );
    }
}
