/// Declared kind of a text field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Email,
    Password,
    Tel,
    Textarea,
}

/// The two presentations a field can take.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FieldShape {
    /// Input line with optional prefix, suffix and action button.
    SingleLine,
    /// Textarea; affix and button slots are not rendered.
    MultiLine,
}

impl FieldKind {
    pub const fn shape(self) -> FieldShape {
        match self {
            Self::Textarea => FieldShape::MultiLine,
            Self::Text | Self::Number | Self::Email | Self::Password | Self::Tel => {
                FieldShape::SingleLine
            }
        }
    }

    pub const fn is_password(self) -> bool {
        matches!(self, Self::Password)
    }

    pub const fn masks_value(self) -> bool {
        self.is_password()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Textarea => "textarea",
        }
    }
}

impl FieldShape {
    pub const fn supports_slots(self) -> bool {
        matches!(self, Self::SingleLine)
    }

    pub const fn accepts_newlines(self) -> bool {
        matches!(self, Self::MultiLine)
    }
}
