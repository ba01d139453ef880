use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::tokens::{ColorScale, PaletteCatalog, PaletteKey};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColorValue {
    Palette { key: PaletteKey, shade: u8 },
    White,
    Black,
    Custom(String),
}

impl ColorValue {
    pub const fn palette(key: PaletteKey, shade: u8) -> Self {
        Self::Palette { key, shade }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextFieldTokens {
    pub bg: ColorValue,
    pub fg: ColorValue,
    pub fg_read_only: ColorValue,
    pub placeholder: ColorValue,
    pub border: ColorValue,
    pub border_hover: ColorValue,
    pub border_active: ColorValue,
    pub border_settled: ColorValue,
    pub border_error: ColorValue,
    pub border_success: ColorValue,
    pub label: ColorValue,
    pub label_active: ColorValue,
    pub label_settled: ColorValue,
    pub label_error: ColorValue,
    pub label_success: ColorValue,
    pub affix: ColorValue,
    pub suffix_active: ColorValue,
    pub helper: ColorValue,
    pub helper_error: ColorValue,
    pub helper_success: ColorValue,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ButtonTokens {
    pub filled_bg: ColorValue,
    pub filled_fg: ColorValue,
    pub disabled_bg: ColorValue,
    pub disabled_fg: ColorValue,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrengthMeterTokens {
    pub track: ColorValue,
    pub weak: ColorValue,
    pub fair: ColorValue,
    pub strong: ColorValue,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComponentTokens {
    pub text_field: TextFieldTokens,
    pub button: ButtonTokens,
    pub strength_meter: StrengthMeterTokens,
}

impl ComponentTokens {
    pub fn defaults_for(scheme: ColorScheme) -> Self {
        use PaletteKey::{Blue, Coral, Green, GreyDark, GreyLight, Red, Yellow};

        match scheme {
            ColorScheme::Light => Self {
                text_field: TextFieldTokens {
                    bg: ColorValue::palette(GreyLight, 1),
                    fg: ColorValue::palette(GreyLight, 7),
                    fg_read_only: ColorValue::palette(GreyLight, 6),
                    placeholder: ColorValue::palette(GreyLight, 5),
                    border: ColorValue::palette(GreyLight, 4),
                    border_hover: ColorValue::palette(GreyLight, 6),
                    border_active: ColorValue::palette(Blue, 5),
                    border_settled: ColorValue::palette(GreyLight, 4),
                    border_error: ColorValue::palette(Coral, 5),
                    border_success: ColorValue::palette(Green, 6),
                    label: ColorValue::palette(GreyLight, 6),
                    label_active: ColorValue::palette(Blue, 5),
                    label_settled: ColorValue::palette(GreyLight, 7),
                    label_error: ColorValue::palette(Coral, 5),
                    label_success: ColorValue::palette(Green, 6),
                    affix: ColorValue::palette(GreyLight, 6),
                    suffix_active: ColorValue::palette(GreyLight, 7),
                    helper: ColorValue::palette(GreyLight, 6),
                    helper_error: ColorValue::palette(Coral, 5),
                    helper_success: ColorValue::palette(Green, 6),
                },
                button: ButtonTokens {
                    filled_bg: ColorValue::palette(Blue, 5),
                    filled_fg: ColorValue::White,
                    disabled_bg: ColorValue::palette(GreyLight, 3),
                    disabled_fg: ColorValue::palette(GreyLight, 5),
                },
                strength_meter: StrengthMeterTokens {
                    track: ColorValue::palette(GreyLight, 3),
                    weak: ColorValue::palette(Red, 6),
                    fair: ColorValue::palette(Yellow, 6),
                    strong: ColorValue::palette(Green, 6),
                },
            },
            ColorScheme::Dark => Self {
                text_field: TextFieldTokens {
                    bg: ColorValue::palette(GreyDark, 7),
                    fg: ColorValue::palette(GreyDark, 1),
                    fg_read_only: ColorValue::palette(GreyDark, 2),
                    placeholder: ColorValue::palette(GreyDark, 3),
                    border: ColorValue::palette(GreyDark, 5),
                    border_hover: ColorValue::palette(GreyDark, 2),
                    border_active: ColorValue::palette(Blue, 5),
                    border_settled: ColorValue::palette(GreyDark, 5),
                    border_error: ColorValue::palette(Red, 4),
                    border_success: ColorValue::palette(Green, 4),
                    label: ColorValue::palette(GreyDark, 2),
                    label_active: ColorValue::palette(Blue, 5),
                    label_settled: ColorValue::palette(GreyDark, 1),
                    label_error: ColorValue::palette(Coral, 5),
                    label_success: ColorValue::palette(Green, 6),
                    affix: ColorValue::palette(GreyDark, 2),
                    suffix_active: ColorValue::palette(GreyDark, 1),
                    helper: ColorValue::palette(GreyDark, 2),
                    helper_error: ColorValue::palette(Coral, 5),
                    helper_success: ColorValue::palette(Green, 6),
                },
                button: ButtonTokens {
                    filled_bg: ColorValue::palette(Blue, 5),
                    filled_fg: ColorValue::White,
                    disabled_bg: ColorValue::palette(GreyDark, 5),
                    disabled_fg: ColorValue::palette(GreyDark, 3),
                },
                strength_meter: StrengthMeterTokens {
                    track: ColorValue::palette(GreyDark, 5),
                    weak: ColorValue::palette(Red, 4),
                    fair: ColorValue::palette(Yellow, 4),
                    strong: ColorValue::palette(Green, 4),
                },
            },
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Theme {
    pub white: &'static str,
    pub black: &'static str,
    pub radius_default: &'static str,
    pub color_scheme: ColorScheme,
    pub palette: BTreeMap<PaletteKey, ColorScale>,
    pub components: ComponentTokens,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            white: "#fff",
            black: "#000",
            radius_default: "0.25rem",
            color_scheme: ColorScheme::Light,
            palette: PaletteCatalog::store(),
            components: ComponentTokens::defaults_for(ColorScheme::Light),
        }
    }
}

impl Theme {
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self.components = ComponentTokens::defaults_for(scheme);
        self
    }

    pub fn resolve_color(&self, token: &ColorValue) -> String {
        match token {
            ColorValue::Palette { key, shade } => self
                .palette
                .get(key)
                .and_then(|scale| scale.get(*shade as usize))
                .unwrap_or(&self.black)
                .to_string(),
            ColorValue::White => self.white.to_string(),
            ColorValue::Black => self.black.to_string(),
            ColorValue::Custom(value) => value.clone(),
        }
    }

    pub fn resolve_hsla(&self, token: &ColorValue) -> gpui::Hsla {
        let raw = self.resolve_color(token);
        gpui::Rgba::try_from(raw.as_str())
            .map(Into::into)
            .unwrap_or_else(|_| gpui::black())
    }

    pub fn merged(&self, patch: &ThemePatch) -> Self {
        let mut next = self.clone();
        if let Some(color_scheme) = patch.color_scheme {
            next = next.with_color_scheme(color_scheme);
        }
        for (key, value) in &patch.palette_overrides {
            next.palette.insert(*key, *value);
        }
        next.components = patch.components.apply(next.components);
        next
    }
}

macro_rules! token_patch {
    ($patch:ident, $tokens:ident { $($field:ident),+ $(,)? }) => {
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        pub struct $patch {
            $(pub $field: Option<ColorValue>,)+
        }

        impl $patch {
            fn apply(&self, mut current: $tokens) -> $tokens {
                $(
                    if let Some(value) = &self.$field {
                        current.$field = value.clone();
                    }
                )+
                current
            }
        }
    };
}

token_patch!(TextFieldPatch, TextFieldTokens {
    bg,
    fg,
    fg_read_only,
    placeholder,
    border,
    border_hover,
    border_active,
    border_settled,
    border_error,
    border_success,
    label,
    label_active,
    label_settled,
    label_error,
    label_success,
    affix,
    suffix_active,
    helper,
    helper_error,
    helper_success,
});

token_patch!(ButtonPatch, ButtonTokens {
    filled_bg,
    filled_fg,
    disabled_bg,
    disabled_fg,
});

token_patch!(StrengthMeterPatch, StrengthMeterTokens {
    track,
    weak,
    fair,
    strong,
});

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ComponentPatch {
    pub text_field: TextFieldPatch,
    pub button: ButtonPatch,
    pub strength_meter: StrengthMeterPatch,
}

impl ComponentPatch {
    fn apply(&self, current: ComponentTokens) -> ComponentTokens {
        ComponentTokens {
            text_field: self.text_field.apply(current.text_field),
            button: self.button.apply(current.button),
            strength_meter: self.strength_meter.apply(current.strength_meter),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ThemePatch {
    pub color_scheme: Option<ColorScheme>,
    pub palette_overrides: BTreeMap<PaletteKey, ColorScale>,
    pub components: ComponentPatch,
}

/// Per-instance view of the provider theme.
///
/// A component keeps its own `ComponentPatch` and may force a color scheme
/// (the `dark` flag of a field); both are applied over the provider theme on
/// every render.
#[derive(Clone, Default)]
pub struct LocalTheme {
    resolved: Option<Arc<Theme>>,
    component_patch: Option<ComponentPatch>,
    scheme: Option<ColorScheme>,
}

impl LocalTheme {
    pub fn with_component_patch(mut self, patch: ComponentPatch) -> Self {
        self.component_patch = Some(patch);
        self
    }

    pub fn set_component_patch(&mut self, patch: Option<ComponentPatch>) {
        self.component_patch = patch;
        self.resolved = None;
    }

    pub fn update_component_patch(&mut self, configure: impl FnOnce(ComponentPatch) -> ComponentPatch) {
        let current = self.component_patch.take().unwrap_or_default();
        self.set_component_patch(Some(configure(current)));
    }

    pub fn set_scheme(&mut self, scheme: Option<ColorScheme>) {
        self.scheme = scheme;
        self.resolved = None;
    }

    pub fn sync_from_provider(&mut self, cx: &gpui::App) {
        let base = crate::provider::CalmProvider::theme(cx);
        self.resolve_over(base);
    }

    pub fn resolve_over(&mut self, base: Arc<Theme>) {
        let scheme_differs = self
            .scheme
            .is_some_and(|scheme| scheme != base.color_scheme);
        if !scheme_differs && self.component_patch.is_none() {
            self.resolved = Some(base);
            return;
        }

        let mut merged = base.as_ref().clone();
        if let Some(scheme) = self.scheme.filter(|_| scheme_differs) {
            merged = merged.with_color_scheme(scheme);
        }
        if let Some(component_patch) = &self.component_patch {
            merged.components = component_patch.apply(merged.components);
        }
        self.resolved = Some(Arc::new(merged));
    }

    fn fallback_theme() -> &'static Theme {
        static FALLBACK: OnceLock<Theme> = OnceLock::new();
        FALLBACK.get_or_init(Theme::default)
    }
}

impl std::ops::Deref for LocalTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        if let Some(resolved) = self.resolved.as_deref() {
            resolved
        } else {
            Self::fallback_theme()
        }
    }
}
