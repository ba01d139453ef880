use std::collections::BTreeMap;

pub const COLOR_STOPS: usize = 10;
pub type ColorScale = [&'static str; COLOR_STOPS];

/// Palette families used by the text field tokens.
///
/// `GreyLight` and `GreyDark` are the neutral ramps of the light and dark
/// surfaces; stop `n` corresponds to the `n00` weight of the design tokens
/// (`GreyLight` stop 4 is `greyLight400`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PaletteKey {
    GreyLight,
    GreyDark,
    Blue,
    Coral,
    Red,
    Yellow,
    Green,
}

impl PaletteKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GreyLight => "grey-light",
            Self::GreyDark => "grey-dark",
            Self::Blue => "blue",
            Self::Coral => "coral",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

pub const PALETTE_KEYS: [PaletteKey; 7] = [
    PaletteKey::GreyLight,
    PaletteKey::GreyDark,
    PaletteKey::Blue,
    PaletteKey::Coral,
    PaletteKey::Red,
    PaletteKey::Yellow,
    PaletteKey::Green,
];

pub struct PaletteCatalog;

impl PaletteCatalog {
    pub const fn scale(key: PaletteKey) -> ColorScale {
        match key {
            PaletteKey::GreyLight => [
                "#ffffff", "#f7f8fa", "#eef0f3", "#dfe2e7", "#c4c9d1", "#a3aab5", "#6e7683",
                "#3a404a", "#262b33", "#14171c",
            ],
            PaletteKey::GreyDark => [
                "#0b0d10", "#e3e6eb", "#a5acb8", "#737b88", "#4f5663", "#3a404b", "#2a2f38",
                "#1d2128", "#15181d", "#0e1014",
            ],
            PaletteKey::Blue => [
                "#eaf3ff", "#cfe3ff", "#a6ccff", "#75b0ff", "#4a93ff", "#2979ff", "#1f63db",
                "#184eb2", "#133d8c", "#0e2d69",
            ],
            PaletteKey::Coral => [
                "#fff1ee", "#ffdcd4", "#ffbcad", "#ff9a85", "#ff7b62", "#f4593d", "#d9452b",
                "#b3361f", "#8c2916", "#661d0f",
            ],
            PaletteKey::Red => [
                "#fff5f5", "#ffe3e3", "#ffc9c9", "#ffa8a8", "#ff8787", "#ff6b6b", "#fa5252",
                "#e03131", "#c92a2a", "#a51d1d",
            ],
            PaletteKey::Yellow => [
                "#fff9db", "#fff3bf", "#ffec99", "#ffe066", "#ffd43b", "#fcc419", "#f5b400",
                "#e09b00", "#c78400", "#a66b00",
            ],
            PaletteKey::Green => [
                "#ebfbee", "#d3f9d8", "#b2f2bb", "#8ce99a", "#69db7c", "#51cf66", "#2fb355",
                "#279845", "#1f7d38", "#18632c",
            ],
        }
    }

    pub fn store() -> BTreeMap<PaletteKey, ColorScale> {
        PALETTE_KEYS
            .into_iter()
            .map(|key| (key, Self::scale(key)))
            .collect()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedScale {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

impl NamedScale {
    pub const fn new(
        xs: &'static str,
        sm: &'static str,
        md: &'static str,
        lg: &'static str,
        xl: &'static str,
    ) -> Self {
        Self { xs, sm, md, lg, xl }
    }
}

pub const RADIUS: NamedScale = NamedScale::new("0.125rem", "0.25rem", "0.5rem", "1rem", "2rem");

pub const ROOT_FONT_SIZE: f32 = 16.0;

/// Converts a `rem` or `px` length token to pixels; unparseable input is `0`.
pub fn length_px(value: &str) -> f32 {
    let value = value.trim();
    if let Some(rem) = value.strip_suffix("rem") {
        return rem.trim().parse::<f32>().map(|rem| rem * ROOT_FONT_SIZE).unwrap_or(0.0);
    }
    value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim()
        .parse::<f32>()
        .unwrap_or(0.0)
}

/// Pixel metrics of the field at a 16px root font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldMetrics {
    pub input_height: f32,
    pub textarea_height: f32,
    pub inset_x: f32,
    pub textarea_inset_y: f32,
    pub label_inset_x: f32,
    pub label_float_single: f32,
    pub label_float_multi: f32,
    pub label_float_scale: f32,
    pub label_float_padding: f32,
    pub meter_height: f32,
    pub helper_gap: f32,
    pub font_size: f32,
    pub helper_font_size: f32,
    pub line_height: f32,
}

pub const FIELD_METRICS: FieldMetrics = FieldMetrics {
    input_height: 40.0,
    textarea_height: 96.0,
    inset_x: 16.0,
    textarea_inset_y: 16.0,
    label_inset_x: 16.0,
    label_float_single: 19.2,
    label_float_multi: 24.0,
    label_float_scale: 0.75,
    label_float_padding: 4.0,
    meter_height: 4.0,
    helper_gap: 2.0,
    font_size: 14.0,
    helper_font_size: 11.0,
    line_height: 20.0,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DurationScale {
    pub fast_ms: u16,
    pub normal_ms: u16,
    pub slow_ms: u16,
}

pub const MOTION_DURATIONS: DurationScale = DurationScale {
    fast_ms: 150,
    normal_ms: 250,
    slow_ms: 320,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_palette_key_has_a_full_scale() {
        let store = PaletteCatalog::store();
        assert_eq!(store.len(), PALETTE_KEYS.len());
        assert!(store.values().all(|scale| scale.len() == COLOR_STOPS));
    }

    #[test]
    fn palette_values_are_hex_colors() {
        for key in PALETTE_KEYS {
            for value in PaletteCatalog::scale(key) {
                assert!(value.starts_with('#'), "{} has {value}", key.as_str());
                assert_eq!(value.len(), 7);
            }
        }
    }

    #[test]
    fn floating_label_offsets_differ_per_shape() {
        assert!(FIELD_METRICS.label_float_multi > FIELD_METRICS.label_float_single);
        assert_eq!(FIELD_METRICS.label_float_scale, 0.75);
    }

    #[test]
    fn length_tokens_convert_to_pixels() {
        assert_eq!(length_px(RADIUS.sm), 4.0);
        assert_eq!(length_px("12px"), 12.0);
        assert_eq!(length_px("auto"), 0.0);
    }
}
