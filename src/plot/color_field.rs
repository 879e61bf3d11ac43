//! Per-cell colors derived from a second function's magnitude.

use ndarray::Array2;
use ratatui::style::Color;

use crate::util::Palette;

/// Magnitude of an auxiliary function, rescaled and mapped to colors.
#[derive(Debug, Clone)]
pub struct ColorField {
    /// `abs(values)`.
    pub magnitude: Array2<f64>,
    /// Magnitude rescaled to `[0, 1]`.
    pub normalized: Array2<f64>,
    /// Palette lookup of every normalized cell.
    pub colors: Array2<Color>,
    /// Smallest finite magnitude.
    pub min: f64,
    /// Largest finite magnitude.
    pub max: f64,
    /// Palette used for the lookup and the colorbar.
    pub palette: Palette,
}

impl ColorField {
    /// Build the field from raw function values.
    pub fn from_values(values: &Array2<f64>, palette: Palette) -> Self {
        let magnitude = values.mapv(f64::abs);
        let (normalized, min, max) = normalize(&magnitude);
        let colors = normalized.mapv(|t| palette.color(t));

        Self {
            magnitude,
            normalized,
            colors,
            min,
            max,
            palette,
        }
    }

    /// Whether every finite cell had the same magnitude.
    pub fn is_degenerate(&self) -> bool {
        self.max - self.min <= 0.0
    }

    /// Color used for every cell of a degenerate field.
    pub fn fallback_color(&self) -> Color {
        self.palette.color(0.0)
    }
}

/// Rescale `values` to `[0, 1]` by their finite min and max.
///
/// Returns the rescaled array with the min and max used. A constant field
/// (or one without finite values) maps every cell to `0.0`; non-finite cells
/// stay non-finite.
pub fn normalize(values: &Array2<f64>) -> (Array2<f64>, f64, f64) {
    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });

    if !min.is_finite() || !max.is_finite() {
        tracing::warn!("Color field has no finite values");
        return (values.mapv(|v| if v.is_finite() { 0.0 } else { v }), 0.0, 0.0);
    }

    let range = max - min;
    if range <= 0.0 {
        tracing::warn!("Color field is constant ({}), using fallback color", min);
        return (values.mapv(|v| if v.is_finite() { 0.0 } else { v }), min, max);
    }

    (values.mapv(|v| (v - min) / range), min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_normalize_known_range() {
        let (norm, min, max) = normalize(&array![[1.0, 2.0], [3.0, 5.0]]);
        assert_eq!(min, 1.0);
        assert_eq!(max, 5.0);
        assert_eq!(norm, array![[0.0, 0.25], [0.5, 1.0]]);
    }

    #[test]
    fn test_field_uses_absolute_value() {
        let field = ColorField::from_values(&array![[-4.0, 0.0], [2.0, -2.0]], Palette::Viridis);
        assert_eq!(field.min, 0.0);
        assert_eq!(field.max, 4.0);
        assert_eq!(field.colors[[0, 0]], Palette::Viridis.color(1.0));
        assert_eq!(field.colors[[0, 1]], Palette::Viridis.color(0.0));
        assert_eq!(field.colors[[1, 0]], Palette::Viridis.color(0.5));
        assert_eq!(field.colors[[1, 1]], field.colors[[1, 0]]);
    }

    #[test]
    fn test_constant_field_uses_fallback() {
        let field = ColorField::from_values(&Array2::from_elem((3, 3), -7.5), Palette::Viridis);
        assert!(field.is_degenerate());
        assert!(field.normalized.iter().all(|&t| t == 0.0));
        assert!(field.colors.iter().all(|&c| c == field.fallback_color()));
    }

    #[test]
    fn test_nan_cells_ignored_for_range() {
        let (norm, min, max) = normalize(&array![[f64::NAN, 1.0], [2.0, 3.0]]);
        assert_eq!((min, max), (1.0, 3.0));
        assert!(norm[[0, 0]].is_nan());
        assert_eq!(norm[[1, 1]], 1.0);
    }
}
