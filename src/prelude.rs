pub use crate::CalmProvider;
pub use crate::contracts::{ComponentThemeOverridable, Disableable, MotionAware, StatusReporting};
pub use crate::id::ComponentId;
pub use crate::motion::{Easing, MotionConfig, MotionLevel, MotionTransition};
pub use crate::style::{Corners, Radius, Size};
pub use crate::theme::{ColorScheme, ComponentPatch, Theme, ThemePatch};
pub use crate::widgets::{
    Button, FieldKind, FieldShape, HintText, StatusTone, StrengthScore, TextField,
};
