use gpui::{Hsla, Pixels, Styled, Window, px};

use crate::style::{Corners, Radius};
use crate::theme::{ColorValue, Theme};
use crate::tokens::{RADIUS, length_px};

pub fn resolve_hsla(theme: &Theme, token: &ColorValue) -> Hsla {
    theme.resolve_hsla(token)
}

pub fn radius_px(radius: Radius) -> Pixels {
    let value = match radius {
        Radius::Xs => RADIUS.xs,
        Radius::Sm => RADIUS.sm,
        Radius::Md => RADIUS.md,
        Radius::Lg => RADIUS.lg,
        Radius::Xl => RADIUS.xl,
        Radius::Pill => return px(9999.0),
    };
    px(length_px(value))
}

pub fn apply_radius<T: Styled>(div: T, radius: Radius) -> T {
    div.rounded(radius_px(radius))
}

/// Rounds only the corners set in `corners`; the rest stay square.
pub fn apply_corner_radius<T: Styled>(mut div: T, radius: Radius, corners: Corners) -> T {
    let value = radius_px(radius);
    if corners.top_left {
        div = div.rounded_tl(value);
    }
    if corners.top_right {
        div = div.rounded_tr(value);
    }
    if corners.bottom_right {
        div = div.rounded_br(value);
    }
    if corners.bottom_left {
        div = div.rounded_bl(value);
    }
    div
}

fn scale_factor(window: &Window) -> f32 {
    window.scale_factor().max(f32::EPSILON)
}

pub fn snap_px(window: &Window, logical_px: f32) -> Pixels {
    if !logical_px.is_finite() {
        return px(0.0);
    }
    let scale = scale_factor(window);
    px((logical_px * scale).round() / scale)
}

pub fn hairline_px(window: &Window) -> Pixels {
    px(1.0 / scale_factor(window))
}

pub fn quantized_stroke_px(window: &Window, logical_px: f32) -> Pixels {
    if !logical_px.is_finite() || logical_px <= 0.0 {
        return px(0.0);
    }
    let snapped = snap_px(window, logical_px);
    if f32::from(snapped) > 0.0 {
        snapped
    } else {
        hairline_px(window)
    }
}
