//! Terminal rendering for the markdown produced by `simmer_core::display`.
//!
//! Rich output goes through termimad; plain output writes the markdown
//! unchanged.

use std::{
    fmt::Display,
    io::{self, Write},
};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::DarkGreen);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render a markdown view and flush, so countdown lines appear as they
    /// tick.
    pub fn render(&self, view: impl Display) -> Result<()> {
        let markdown = view.to_string();
        let mut out = io::stdout().lock();

        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    // Keep the hashes visible, termimad would strip them
                    writeln!(out, "\x1b[32m{line}\x1b[0m")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
