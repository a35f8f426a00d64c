//! Output configuration for terminal rendering.
use termcolor::ColorChoice;

/// Options used by [`PrettyExpr::pretty_print_with`](crate::expr::pretty::PrettyExpr::pretty_print_with).
///
/// The default detects the terminal width (falling back to [`RenderConfig::DEFAULT_WIDTH`]) and
/// lets `termcolor` decide whether colors are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Maximum line width handed to the layout engine.
    pub width: usize,
    pub color: ColorChoice,
}

impl RenderConfig {
    pub const DEFAULT_WIDTH: usize = 80;

    /// Uncolored output at a fixed width, suitable for logs and files.
    pub fn plain(width: usize) -> Self {
        Self {
            width,
            color: ColorChoice::Never,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: terminal_width(),
            color: ColorChoice::Auto,
        }
    }
}

/// Width of the attached terminal, or [`RenderConfig::DEFAULT_WIDTH`] if it cannot be determined.
pub fn terminal_width() -> usize {
    term_size::dimensions()
        .map(|(w, _)| w)
        .unwrap_or(RenderConfig::DEFAULT_WIDTH)
}
