//! Screen buffer for one board page.
//!
//! A page is a list of styled lines under a title bar. It renders either as
//! plain text (once mode with `--plain`, and tests) or as an ANSI buffer that
//! is written to the terminal in a single call.

use super::colors::{
    accent_fg, ansi_code, error_fg, header_bg, highlight_fg, muted_fg, selected_fg, text_fg,
    title_bg, title_fg,
};
use crate::constants::ui::{BOARD_WIDTH, CONTENT_MARGIN};
use crate::error::AppError;
use std::io::Write;

/// Visual role of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Text,
    Accent,
    Highlight,
    Selected,
    Muted,
    Error,
}

impl Style {
    fn ansi_fg(self) -> u8 {
        match self {
            Style::Text => ansi_code(text_fg(), 231),
            Style::Accent => ansi_code(accent_fg(), 46),
            Style::Highlight => ansi_code(highlight_fg(), 51),
            Style::Selected => ansi_code(selected_fg(), 226),
            Style::Muted => ansi_code(muted_fg(), 244),
            Style::Error => ansi_code(error_fg(), 196),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One output line made of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::new(text, style)],
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::styled(text, Style::Text)
    }

    pub fn push(mut self, text: impl Into<String>, style: Style) -> Self {
        self.spans.push(Span::new(text, style));
        self
    }

    pub fn plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// A tab label in the title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPage {
    pub title: String,
    pub tabs: Vec<TabLabel>,
    pub subheader: String,
    pub lines: Vec<Line>,
    pub footer: Option<String>,
}

impl BoardPage {
    pub fn new(title: impl Into<String>, subheader: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tabs: Vec::new(),
            subheader: subheader.into(),
            lines: Vec::new(),
            footer: None,
        }
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Adds `text` as word-wrapped lines that fit the board width.
    pub fn add_wrapped(&mut self, text: &str, style: Style) {
        for chunk in wrap_text(text, BOARD_WIDTH) {
            self.lines.push(Line::styled(chunk, style));
        }
    }

    fn tab_bar_plain(&self) -> String {
        self.tabs
            .iter()
            .map(|tab| {
                if tab.active {
                    format!("[{}]", tab.label)
                } else {
                    format!(" {} ", tab.label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Uncoloured rendering, one `\n`-terminated line per row.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}  {}\n", self.title, self.subheader));
        if !self.tabs.is_empty() {
            out.push_str(&self.tab_bar_plain());
            out.push('\n');
        }
        out.push('\n');
        for line in &self.lines {
            out.push_str(line.plain().trim_end());
            out.push('\n');
        }
        if let Some(footer) = &self.footer {
            out.push('\n');
            out.push_str(footer);
            out.push('\n');
        }
        out
    }

    /// Builds the ANSI screen buffer.
    ///
    /// With `full_screen` the buffer starts by homing the cursor and clearing
    /// the screen, and lines end with `\r\n` so it can be written while the
    /// terminal is in raw mode.
    pub fn ansi_buffer(&self, full_screen: bool, controls: Option<&str>) -> String {
        let newline = if full_screen { "\r\n" } else { "\n" };
        let margin = " ".repeat(CONTENT_MARGIN);
        let mut buffer = String::with_capacity(64 * (self.lines.len() + 6));

        if full_screen {
            buffer.push_str("\x1b[H"); // Move to home position
            buffer.push_str("\x1b[0J"); // Clear from cursor down
        }

        let title_bg_code = ansi_code(title_bg(), 46);
        let title_fg_code = ansi_code(title_fg(), 21);
        let header_bg_code = ansi_code(header_bg(), 21);
        let subheader_width = BOARD_WIDTH.saturating_sub(self.title.chars().count() + 2);

        buffer.push_str(&format!(
            "\x1b[48;5;{title_bg_code}m\x1b[38;5;{title_fg_code}m {} \x1b[48;5;{header_bg_code}m\x1b[38;5;231m{:>subheader_width$}\x1b[0m{newline}",
            self.title,
            self.subheader.chars().take(subheader_width).collect::<String>(),
        ));

        if !self.tabs.is_empty() {
            buffer.push_str(&margin);
            for tab in &self.tabs {
                let style = if tab.active {
                    Style::Selected
                } else {
                    Style::Muted
                };
                buffer.push_str(&format!(
                    "\x1b[38;5;{}m {} \x1b[0m",
                    style.ansi_fg(),
                    tab.label
                ));
            }
            buffer.push_str(newline);
        }
        buffer.push_str(newline);

        for line in &self.lines {
            buffer.push_str(&margin);
            for span in &line.spans {
                buffer.push_str(&format!("\x1b[38;5;{}m{}", span.style.ansi_fg(), span.text));
            }
            buffer.push_str("\x1b[0m");
            buffer.push_str(newline);
        }

        let muted = Style::Muted.ansi_fg();
        if let Some(footer) = &self.footer {
            buffer.push_str(newline);
            buffer.push_str(&format!("{margin}\x1b[38;5;{muted}m{footer}\x1b[0m{newline}"));
        }
        if let Some(controls) = controls {
            buffer.push_str(&format!("{margin}\x1b[38;5;{muted}m{controls}\x1b[0m{newline}"));
        }

        buffer
    }

    /// Writes the page in one call. `ansi = false` writes [`render_plain`].
    ///
    /// [`render_plain`]: BoardPage::render_plain
    pub fn render_buffered<W: Write>(
        &self,
        out: &mut W,
        ansi: bool,
        full_screen: bool,
        controls: Option<&str>,
    ) -> Result<(), AppError> {
        let buffer = if ansi {
            self.ansi_buffer(full_screen, controls)
        } else {
            self.render_plain()
        };
        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Pads `text` with spaces or cuts it to exactly `width` characters.
pub fn pad_or_truncate(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        text.chars().take(width).collect()
    } else {
        format!("{text}{}", " ".repeat(width - count))
    }
}

/// Greedy word wrap on character counts. Words longer than `width` get a
/// line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
