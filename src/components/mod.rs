pub mod button;
mod control;
mod edit_buffer;
pub mod field_kind;
pub mod field_state;
pub mod hint;
pub mod strength;
pub mod text_field;
pub mod text_field_actions;
mod transition;
mod utils;

#[cfg(test)]
mod test_component_smoke;
#[cfg(test)]
mod test_state_logic;

pub use button::Button;
pub use field_kind::{FieldKind, FieldShape};
pub use field_state::{
    EditOutcome, FieldConfig, FieldState, FocusPhase, LabelPlacement, RejectReason,
    enter_triggers_button, is_button_disabled,
};
pub use hint::{HintText, Status, StatusTone, word_count};
pub use strength::{
    LoadStatus, MeterGeometry, PasswordScorer, ScorerCache, ScorerError, ScorerHandle,
    StrengthScore, meter_color, meter_geometry,
};
#[cfg(feature = "strength-meter")]
pub use strength::ZxcvbnScorer;
pub use text_field::TextField;
