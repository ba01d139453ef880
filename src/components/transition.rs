use std::time::Duration;

use gpui::{Animation, AnimationElement, AnimationExt, ElementId, Styled};

use crate::motion::{Easing, MotionConfig, MotionTransition};

pub trait TransitionExt: Sized + AnimationExt + Styled + 'static {
    /// Runs `animator` from progress `0.0` to `1.0` over the effective
    /// duration of `transition`. With motion disabled the end state is
    /// applied right away.
    fn with_motion_progress(
        self,
        id: impl Into<ElementId>,
        motion: MotionConfig,
        transition: MotionTransition,
        animator: impl Fn(Self, f32) -> Self + 'static,
    ) -> AnimationElement<Self> {
        let duration_ms = motion.effective_ms(transition);
        if duration_ms == 0 {
            return self.with_animation(
                id,
                Animation::new(Duration::from_millis(1)),
                move |this, _| animator(this, 1.0),
            );
        }

        let animation =
            Animation::new(Duration::from_millis(duration_ms)).with_easing(easing_fn(transition.easing));
        self.with_animation(id, animation, animator)
    }
}

impl<E> TransitionExt for E where E: Sized + AnimationExt + Styled + 'static {}

fn easing_fn(easing: Easing) -> impl Fn(f32) -> f32 {
    move |delta| match easing {
        Easing::Linear => gpui::linear(delta),
        Easing::EaseIn => gpui::quadratic(delta),
        Easing::EaseOut => gpui::ease_out_quint()(delta),
        Easing::EaseInOut => gpui::ease_in_out(delta),
    }
}

/// Meter fill in percent at `progress` between two widths.
pub fn width_at(from_pct: f32, to_pct: f32, progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    from_pct + (to_pct - from_pct) * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_interpolates_in_both_directions() {
        assert_eq!(width_at(25.0, 75.0, 0.5), 50.0);
        assert_eq!(width_at(100.0, 0.0, 0.25), 75.0);
        assert_eq!(width_at(0.0, 50.0, 2.0), 50.0);
    }

    #[test]
    fn easing_curves_hit_both_ends() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            let ease = easing_fn(easing);
            assert!(ease(0.0).abs() < 1e-3, "{easing:?}");
            assert!((ease(1.0) - 1.0).abs() < 1e-3, "{easing:?}");
        }
    }
}
