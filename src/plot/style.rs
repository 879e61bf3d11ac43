//! Typed styling options for plotted series.

use ratatui::style::Color;
use ratatui::symbols::Marker;

use crate::util::Palette;

/// Default series colors, cycled in the order series are added.
pub const SERIES_COLORS: [Color; 6] = [
    Color::Rgb(31, 119, 180),
    Color::Rgb(255, 127, 14),
    Color::Rgb(44, 160, 44),
    Color::Rgb(214, 39, 40),
    Color::Rgb(148, 103, 189),
    Color::Rgb(140, 86, 75),
];

/// Color of the `index`-th series when none was requested.
pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Rendering options for a single series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleOptions {
    /// Series color. `None` takes the next color of [`SERIES_COLORS`] for
    /// lines and meshes, and height shading through `palette` for surfaces.
    pub color: Option<Color>,
    /// Stroke width in terminal dots: 1 draws braille dots, 2 half blocks,
    /// 3 or more full blocks. Default 1.
    pub line_width: u8,
    /// Draw every n-th grid row of a mesh. Default 1.
    pub rstride: usize,
    /// Draw every n-th grid column of a mesh. Default 1.
    pub cstride: usize,
    /// Opacity in `[0, 1]`, blended toward the background. Default 1.0.
    pub opacity: f64,
    /// Palette for height shading of surfaces without an explicit color.
    pub palette: Palette,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            color: None,
            line_width: 1,
            rstride: 1,
            cstride: 1,
            opacity: 1.0,
            palette: Palette::Viridis,
        }
    }
}

impl StyleOptions {
    /// Set the series color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the stroke width.
    pub fn with_line_width(mut self, width: u8) -> Self {
        self.line_width = width;
        self
    }

    /// Set both mesh strides.
    pub fn with_stride(mut self, rstride: usize, cstride: usize) -> Self {
        self.rstride = rstride;
        self.cstride = cstride;
        self
    }

    /// Set the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the height shading palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Terminal marker matching the stroke width.
    pub fn marker(&self) -> Marker {
        match self.line_width {
            0 | 1 => Marker::Braille,
            2 => Marker::HalfBlock,
            _ => Marker::Block,
        }
    }

    /// Row stride, never zero.
    pub fn row_step(&self) -> usize {
        self.rstride.max(1)
    }

    /// Column stride, never zero.
    pub fn col_step(&self) -> usize {
        self.cstride.max(1)
    }
}

/// Indices `0, step, 2 * step, ...` of a mesh axis of length `len`, always
/// ending at the last index so the mesh border is drawn.
pub fn stride_indices(len: usize, step: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut indices: Vec<usize> = (0..len).step_by(step.max(1)).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_indices_keep_border() {
        assert_eq!(stride_indices(5, 1), vec![0, 1, 2, 3, 4]);
        assert_eq!(stride_indices(5, 2), vec![0, 2, 4]);
        assert_eq!(stride_indices(6, 4), vec![0, 4, 5]);
        assert_eq!(stride_indices(3, 0), vec![0, 1, 2]);
        assert!(stride_indices(0, 3).is_empty());
    }

    #[test]
    fn test_marker_follows_line_width() {
        let style = StyleOptions::default();
        assert_eq!(style.marker(), Marker::Braille);
        assert_eq!(style.with_line_width(2).marker(), Marker::HalfBlock);
        assert_eq!(style.with_line_width(5).marker(), Marker::Block);
    }

    #[test]
    fn test_series_colors_cycle() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
        assert_ne!(series_color(0), series_color(1));
    }
}
