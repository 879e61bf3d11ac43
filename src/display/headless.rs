//! Off-screen rendering into a ratatui test buffer.

use super::Renderer;
use crate::error::Result;
use crate::plot::Axes;
use crate::ui::{self, Theme, View};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Renders every shown axes into a fixed-size buffer and keeps the frames.
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    width: u16,
    height: u16,
    theme: Theme,
    frames: Vec<Buffer>,
}

impl HeadlessRenderer {
    /// Create a renderer drawing `width` x `height` cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            theme: Theme::default(),
            frames: Vec::new(),
        }
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Frames drawn so far, oldest first.
    pub fn frames(&self) -> &[Buffer] {
        &self.frames
    }

    /// Most recent frame.
    pub fn last_frame(&self) -> Option<&Buffer> {
        self.frames.last()
    }

    /// Most recent frame as plain text.
    pub fn last_frame_text(&self) -> Option<String> {
        self.last_frame().map(buffer_to_text)
    }

    /// Draw `axes` once and return the frame.
    pub fn render(&self, axes: &Axes) -> Result<Buffer> {
        let mut terminal = Terminal::new(TestBackend::new(self.width, self.height))?;
        let view = View {
            theme: self.theme,
            ..View::of(axes)
        };
        terminal.draw(|f| ui::draw(f, axes, &view))?;
        Ok(terminal.backend().buffer().clone())
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new(100, 32)
    }
}

impl Renderer for HeadlessRenderer {
    fn show(&mut self, axes: &Axes) -> Result<()> {
        let frame = self.render(axes)?;
        tracing::debug!("Rendered headless frame {}x{}", self.width, self.height);
        self.frames.push(frame);
        Ok(())
    }
}

/// Symbols of `buffer`, one line per row, trailing spaces removed.
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    if width == 0 {
        return String::new();
    }
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
