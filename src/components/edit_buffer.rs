/// Text plus caret position, indexed in chars.
///
/// Editing operations do not mutate the buffer; they return an [`EditProposal`]
/// that the field controller validates before it is committed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EditBuffer {
    pub value: String,
    pub caret: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditProposal {
    pub text: String,
    pub caret: usize,
}

impl EditBuffer {
    pub fn new(value: impl Into<String>, caret: usize) -> Self {
        let value = value.into();
        let caret = caret.min(value.chars().count());
        Self { value, caret }
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.len();
    }

    pub fn insert(&self, text: &str) -> Option<EditProposal> {
        if text.is_empty() {
            return None;
        }
        Some(self.replace_chars(self.caret, self.caret, text))
    }

    pub fn delete_backward(&self) -> Option<EditProposal> {
        if self.caret == 0 {
            return None;
        }
        Some(self.replace_chars(self.caret - 1, self.caret, ""))
    }

    pub fn delete_forward(&self) -> Option<EditProposal> {
        if self.caret >= self.len() {
            return None;
        }
        Some(self.replace_chars(self.caret, self.caret + 1, ""))
    }

    /// Replaces the chars in `start..end` (clamped) with `insert`.
    pub fn replace_chars(&self, start: usize, end: usize, insert: &str) -> EditProposal {
        let len = self.len();
        let start = start.min(len);
        let end = end.min(len).max(start);
        let mut text = self.value.clone();
        text.replace_range(
            byte_index_at_char(&self.value, start)..byte_index_at_char(&self.value, end),
            insert,
        );
        EditProposal {
            text,
            caret: start + insert.chars().count(),
        }
    }
}

pub fn byte_index_at_char(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(value.len())
}

pub fn char_index_from_utf16(value: &str, utf16_index: usize) -> usize {
    let mut utf16_count = 0usize;
    let mut char_index = 0usize;
    for ch in value.chars() {
        if utf16_count >= utf16_index {
            break;
        }
        utf16_count += ch.len_utf16();
        char_index += 1;
    }
    char_index
}

pub fn utf16_from_char(value: &str, char_index: usize) -> usize {
    value
        .chars()
        .take(char_index)
        .map(char::len_utf16)
        .sum::<usize>()
}

/// Line and column of `char_index` in a `\n`-separated value.
pub fn line_col(value: &str, char_index: usize) -> (usize, usize) {
    let mut line = 0usize;
    let mut col = 0usize;
    for ch in value.chars().take(char_index) {
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Strips line breaks from text entering a single-line field.
pub fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}

/// Normalizes line breaks of text entering a multi-line field to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
