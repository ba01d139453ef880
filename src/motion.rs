use crate::tokens::MOTION_DURATIONS;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MotionLevel {
    Full,
    Reduced,
    None,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MotionTransition {
    pub duration_ms: u16,
    pub easing: Easing,
}

impl Default for MotionTransition {
    fn default() -> Self {
        Self {
            duration_ms: MOTION_DURATIONS.normal_ms,
            easing: Easing::EaseInOut,
        }
    }
}

impl MotionTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration_ms(mut self, duration_ms: u16) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Motion of a text field: the label float and the strength meter fill.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MotionConfig {
    pub level: MotionLevel,
    pub label_float: MotionTransition,
    pub meter_fill: MotionTransition,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            level: MotionLevel::Full,
            label_float: MotionTransition::default(),
            meter_fill: MotionTransition::default(),
        }
    }
}

impl MotionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: MotionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn label_float(mut self, value: MotionTransition) -> Self {
        self.label_float = value;
        self
    }

    pub fn meter_fill(mut self, value: MotionTransition) -> Self {
        self.meter_fill = value;
        self
    }

    /// Effective duration of `transition` at this motion level.
    pub fn effective_ms(&self, transition: MotionTransition) -> u64 {
        match self.level {
            MotionLevel::Full => u64::from(transition.duration_ms),
            MotionLevel::Reduced => u64::from(transition.duration_ms.min(MOTION_DURATIONS.fast_ms)),
            MotionLevel::None => 0,
        }
    }
}
