#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Size {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Radius {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Pill,
}

/// Corners of a rectangle, used by attached controls that square off the
/// edge they share with their neighbour.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl Corners {
    pub const fn all() -> Self {
        Self {
            top_left: true,
            top_right: true,
            bottom_right: true,
            bottom_left: true,
        }
    }

    pub const fn right() -> Self {
        Self {
            top_left: false,
            top_right: true,
            bottom_right: true,
            bottom_left: false,
        }
    }
}
