//! Rendering backends.
//!
//! A [`Renderer`] turns a finished [`Axes`] into something visible. The
//! interactive [`TerminalRenderer`] takes over the terminal until the user
//! closes it; [`HeadlessRenderer`] draws into an in-memory buffer.

mod headless;
mod terminal;

use crate::error::Result;
use crate::plot::Axes;

pub use headless::{buffer_to_text, HeadlessRenderer};
pub use terminal::TerminalRenderer;

/// Displays plot targets.
pub trait Renderer {
    /// Display `axes`. Whether this blocks is up to the implementation.
    fn show(&mut self, axes: &Axes) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn show(&mut self, axes: &Axes) -> Result<()> {
        (**self).show(axes)
    }
}
