//! Terminal rendering for markdown reports
//!
//! Reports produced by `autopilot-core` are markdown. In rich mode they are
//! styled with termimad; headers keep their hash marks and blockquotes,
//! used for warnings such as truncated projections, are highlighted.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_STYLE: &str = "\x1b[34m";
const WARNING_STYLE: &str = "\x1b[33m";
const RESET_STYLE: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match line_kind(line) {
                LineKind::Header => println!("{HEADER_STYLE}{line}{RESET_STYLE}"),
                LineKind::Warning => println!("{WARNING_STYLE}{line}{RESET_STYLE}"),
                LineKind::Text => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    Header,
    Warning,
    Text,
}

fn line_kind(line: &str) -> LineKind {
    if line.starts_with('#') {
        LineKind::Header
    } else if line.starts_with('>') {
        LineKind::Warning
    } else {
        LineKind::Text
    }
}
