use gpui::SharedString;

/// Status messages of a field. Empty strings count as absent.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HintText {
    pub error: Option<SharedString>,
    pub success: Option<SharedString>,
    pub hint: Option<SharedString>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusTone {
    Success,
    Error,
    Hint,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Status {
    pub tone: StatusTone,
    pub text: SharedString,
}

impl HintText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(mut self, value: impl Into<SharedString>) -> Self {
        self.error = Some(value.into());
        self
    }

    pub fn success(mut self, value: impl Into<SharedString>) -> Self {
        self.success = Some(value.into());
        self
    }

    pub fn hint(mut self, value: impl Into<SharedString>) -> Self {
        self.hint = Some(value.into());
        self
    }

    pub fn error_text(&self) -> Option<&SharedString> {
        present(&self.error)
    }

    pub fn success_text(&self) -> Option<&SharedString> {
        present(&self.success)
    }

    pub fn hint_text(&self) -> Option<&SharedString> {
        present(&self.hint)
    }

    pub fn has_error(&self) -> bool {
        self.error_text().is_some()
    }

    pub fn has_success(&self) -> bool {
        self.success_text().is_some()
    }

    /// The single line to show: success, then error, then hint.
    pub fn status(&self) -> Option<Status> {
        let (tone, text) = if let Some(text) = self.success_text() {
            (StatusTone::Success, text)
        } else if let Some(text) = self.error_text() {
            (StatusTone::Error, text)
        } else {
            (StatusTone::Hint, self.hint_text()?)
        };
        Some(Status {
            tone,
            text: text.clone(),
        })
    }

    /// Tone of the field chrome (border, label, helper line); `None` is neutral.
    pub fn chrome_tone(&self) -> Option<StatusTone> {
        self.status()
            .map(|status| status.tone)
            .filter(|tone| *tone != StatusTone::Hint)
    }
}

fn present(value: &Option<SharedString>) -> Option<&SharedString> {
    value.as_ref().filter(|text| !text.is_empty())
}

/// `count/max` indicator text, shown only for a positive `max_length`.
pub fn word_count(count: usize, max_length: Option<usize>) -> Option<SharedString> {
    let max_length = max_length.filter(|max| *max > 0)?;
    Some(format!("{count}/{max_length}").into())
}
