//! User interface rendering.
//!
//! Draws an [`Axes`](crate::plot::Axes) into a ratatui frame: flat axes as a
//! braille chart, 3D axes as a projected braille canvas.

mod chart;
mod colorbar;
mod formatters;
mod keymap_bar;
mod surface;
mod theme;

use crate::plot::{Axes, Camera, Projection};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::format_axis_label;
pub use theme::{Theme, ThemeColors};

/// Per-frame view settings that do not belong to the plotted data.
#[derive(Debug, Clone, Copy, Default)]
pub struct View {
    /// Camera for 3D axes.
    pub camera: Camera,
    /// Color theme.
    pub theme: Theme,
    /// Show the key map bar of the interactive viewer.
    pub interactive: bool,
}

impl View {
    /// View of `axes` with its own camera.
    pub fn of(axes: &Axes) -> Self {
        Self {
            camera: axes.camera(),
            ..Self::default()
        }
    }
}

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, axes: &Axes, view: &View) {
    let colors = ThemeColors::from_theme(&view.theme);

    let (plot_area, keymap_area) = if view.interactive {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(f.area());
        (chunks[0], Some(chunks[1]))
    } else {
        (f.area(), None)
    };

    match axes.projection() {
        Projection::Cartesian => chart::draw_chart(f, plot_area, axes, &colors),
        Projection::ThreeD => {
            surface::draw_surface_axes(f, plot_area, axes, view.camera, &colors)
        },
    }

    if let Some(area) = keymap_area {
        keymap_bar::draw_keymap(f, area, axes.projection(), view.theme, &colors);
    }
}
