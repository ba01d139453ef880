use gpui::SharedString;

use crate::motion::MotionConfig;
use crate::theme::{ComponentPatch, LocalTheme};

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

pub trait MotionAware: Sized {
    fn motion(self, value: MotionConfig) -> Self;
}

/// Fields that report hint, error and success messages.
pub trait StatusReporting: Sized {
    fn hint(self, value: impl Into<SharedString>) -> Self;
    fn error(self, value: impl Into<SharedString>) -> Self;
    fn success(self, value: impl Into<SharedString>) -> Self;
}

pub trait ComponentThemeOverridable: Sized {
    fn local_theme_mut(&mut self) -> &mut LocalTheme;

    fn with_theme_patch(mut self, patch: ComponentPatch) -> Self {
        self.local_theme_mut().set_component_patch(Some(patch));
        self
    }

    fn theme(mut self, configure: impl FnOnce(ComponentPatch) -> ComponentPatch) -> Self {
        self.local_theme_mut().update_component_patch(configure);
        self
    }

    fn clear_theme_patch(mut self) -> Self {
        self.local_theme_mut().set_component_patch(None);
        self
    }
}

#[macro_export]
macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(self, value: bool) -> Self {
                <$type>::disabled(self, value)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_theme_overridable {
    ($type:ty) => {
        impl $crate::contracts::ComponentThemeOverridable for $type {
            fn local_theme_mut(&mut self) -> &mut $crate::theme::LocalTheme {
                &mut self.theme
            }
        }
    };
}
