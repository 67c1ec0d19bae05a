/// The in-progress, not yet submitted line.
///
/// Editing only ever happens at the end of the line, so there is no cursor
/// position to track.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CurrentLine {
    text: String,
}

impl CurrentLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Remove the last character. Returns `false` on an empty line.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Hand over the line's text and leave the line empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
