//! Terminal styling for reports.
//!
//! Styling is pure string wrapping: [`Palette::paint`] brackets text with an
//! ANSI color code and a reset. Whether any codes are emitted at all is
//! decided once, by the [`Palette`] value handed to the reporting code, so
//! report tests can assert exact strings with a plain palette.

const RESET: &str = "\x1b[0m";

/// The colors the reporter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Red,
    Green,
    Magenta,
    Cyan,
}

impl Style {
    const fn code(self) -> &'static str {
        match self {
            Style::Red => "\x1b[31m",
            Style::Green => "\x1b[32m",
            Style::Magenta => "\x1b[35m",
            Style::Cyan => "\x1b[36m",
        }
    }
}

/// Decides whether decorative formatting is applied.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colors on iff stdout is a terminal.
    pub fn auto() -> Self {
        Palette {
            enabled: atty::is(atty::Stream::Stdout),
        }
    }

    pub const fn colored() -> Self {
        Palette { enabled: true }
    }

    pub const fn plain() -> Self {
        Palette { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `text` in the given color. With styling disabled this is a
    /// no-op and the text comes back unchanged.
    ///
    /// An embedded painted fragment ends in a reset; that reset is swapped
    /// for this call's color so the enclosing span resumes after the
    /// fragment instead of going plain.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let body = text.replace(RESET, style.code());
        format!("{}{}{}", style.code(), body, RESET)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_is_a_no_op() {
        let palette = Palette::plain();
        assert_eq!(palette.paint(Style::Red, "failed"), "failed");
    }

    #[test]
    fn colored_palette_brackets_the_text() {
        let palette = Palette::colored();
        assert_eq!(
            palette.paint(Style::Green, "Passed test"),
            "\x1b[32mPassed test\x1b[0m"
        );
    }

    #[test]
    fn nested_fragment_resumes_the_outer_color() {
        let palette = Palette::colored();
        let inner = palette.paint(Style::Cyan, "x");
        let outer = palette.paint(Style::Red, &format!("a {} b", inner));
        assert_eq!(outer, "\x1b[31ma \x1b[36mx\x1b[31m b\x1b[0m");
    }
}
