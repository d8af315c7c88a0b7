//! Terminal screen tree
//!
//! A `Screen` is a list of lines, a line a list of toned spans. Renderers
//! build the tree without touching the terminal, so their output can be
//! asserted on; `print` is the single side effect.

use colored::Colorize;

/// Visual tone of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Error,
    Muted,
}

/// A run of text with one tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

/// One terminal line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Span::plain(text)])
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self::new(vec![Span::new(text, tone)])
    }

    /// Concatenated span text without tones
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// A renderable block of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<Line>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.push(Line::plain(text));
    }

    pub fn push_toned(&mut self, text: impl Into<String>, tone: Tone) {
        self.push(Line::toned(text, tone));
    }

    pub fn blank(&mut self) {
        self.push(Line::default());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text rendition, one string per line. Tests assert on this.
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }

    /// Write the screen to stdout with colors applied
    pub fn print(&self) {
        for line in &self.lines {
            let mut rendered = String::new();
            for span in &line.spans {
                let colored = match span.tone {
                    Tone::Plain => span.text.normal(),
                    Tone::Heading => span.text.bold(),
                    Tone::Success => span.text.green(),
                    Tone::Warning => span.text.yellow(),
                    Tone::Error => span.text.red(),
                    Tone::Muted => span.text.dimmed(),
                };
                rendered.push_str(&colored.to_string());
            }
            println!("{}", rendered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        let mut screen = Screen::new();
        screen.push(Line::new(vec![
            Span::plain("widget "),
            Span::new("Healthy", Tone::Success),
        ]));
        screen.push_toned("gone", Tone::Error);

        assert_eq!(screen.to_plain_lines(), vec!["widget Healthy", "gone"]);
    }
}
