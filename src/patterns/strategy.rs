//! Strategy: an editor whose output format is swapped at runtime.

/// Formatting strategy for published text.
pub trait TextFormatter: Send + Sync {
    fn format(&self, text: &str) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextFormatter;

impl TextFormatter for PlainTextFormatter {
    fn format(&self, text: &str) -> String {
        format!("Plain: {text}")
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownFormatter;

impl TextFormatter for MarkdownFormatter {
    fn format(&self, text: &str) -> String {
        format!("Markdown: **{text}**")
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlFormatter;

impl TextFormatter for HtmlFormatter {
    fn format(&self, text: &str) -> String {
        format!("HTML: <b>{text}</b>")
    }
}

/// Publishes text through whichever formatter is currently installed.
///
/// # Example
///
/// ```rust
/// use switchboard::patterns::strategy::{HtmlFormatter, PlainTextFormatter, TextEditor};
///
/// let mut editor = TextEditor::new(PlainTextFormatter);
/// assert_eq!(editor.publish_text("hi"), "Plain: hi");
///
/// editor.set_formatter(HtmlFormatter);
/// assert_eq!(editor.publish_text("hi"), "HTML: <b>hi</b>");
/// ```
pub struct TextEditor {
    formatter: Box<dyn TextFormatter>,
}

impl TextEditor {
    pub fn new(formatter: impl TextFormatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }

    pub fn set_formatter(&mut self, formatter: impl TextFormatter + 'static) {
        self.formatter = Box::new(formatter);
    }

    pub fn publish_text(&self, text: &str) -> String {
        self.formatter.format(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_formatter_wraps_text() {
        assert_eq!(PlainTextFormatter.format("x"), "Plain: x");
        assert_eq!(MarkdownFormatter.format("x"), "Markdown: **x**");
        assert_eq!(HtmlFormatter.format("x"), "HTML: <b>x</b>");
    }

    #[test]
    fn editor_uses_latest_formatter() {
        let message = "Hello, world!";
        let mut editor = TextEditor::new(PlainTextFormatter);
        assert_eq!(editor.publish_text(message), "Plain: Hello, world!");

        editor.set_formatter(MarkdownFormatter);
        assert_eq!(editor.publish_text(message), "Markdown: **Hello, world!**");
    }
}
