//! Color mapping functions for data visualization.

use std::str::FromStr;

use ratatui::style::Color;

use crate::error::PlotError;

/// Color palette mapping a normalized value to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    #[default]
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
}

const VIRIDIS: [(f64, f64, f64); 5] = [
    (68.0, 1.0, 84.0),
    (59.0, 82.0, 139.0),
    (33.0, 145.0, 140.0),
    (94.0, 201.0, 98.0),
    (253.0, 231.0, 37.0),
];

const PLASMA: [(f64, f64, f64); 5] = [
    (13.0, 8.0, 135.0),
    (126.0, 3.0, 168.0),
    (204.0, 71.0, 120.0),
    (248.0, 149.0, 64.0),
    (240.0, 249.0, 33.0),
];

impl Palette {
    /// Every palette, in the order they are listed to the user.
    pub const ALL: [Palette; 4] = [Self::Viridis, Self::Plasma, Self::Rainbow, Self::BlueRed];

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }

    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    ///
    /// Values outside the unit interval are clamped and NaN maps to 0.0.
    pub fn color(self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::Viridis => interpolate(&VIRIDIS, t),
            Self::Plasma => interpolate(&PLASMA, t),
            Self::Rainbow => rainbow_color(t),
            Self::BlueRed => bluered_color(t),
        }
    }
}

impl FromStr for Palette {
    type Err = PlotError;

    /// Match a palette name, ignoring case and punctuation (`blue-red`,
    /// `BlueRed` and `bluered` are the same palette).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = |name: &str| {
            name.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        };
        let wanted = key(s);
        Self::ALL
            .into_iter()
            .find(|p| key(p.name()) == wanted)
            .ok_or_else(|| PlotError::UnknownPalette(s.trim().to_string()))
    }
}

/// Piecewise linear interpolation between evenly spaced color stops.
fn interpolate(stops: &[(f64, f64, f64)], t: f64) -> Color {
    let segments = (stops.len() - 1) as f64;
    let pos = t * segments;
    let idx = (pos.floor() as usize).min(stops.len() - 2);
    let frac = pos - idx as f64;

    let (r0, g0, b0) = stops[idx];
    let (r1, g1, b1) = stops[idx + 1];
    let lerp = |a: f64, b: f64| (a + (b - a) * frac).round() as u8;

    Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Rainbow/Spectral colormap.
fn rainbow_color(t: f64) -> Color {
    // HSV to RGB conversion with H varying from 240° (blue) to 0° (red)
    let h = (1.0 - t) * 240.0;
    let c = 1.0;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else {
        (0.0, x, c)
    };

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Blue-White-Red diverging colormap.
fn bluered_color(t: f64) -> Color {
    if t < 0.5 {
        // Blue to white
        let t2 = t * 2.0;
        let v = (t2 * 255.0) as u8;
        Color::Rgb(v, v, 255)
    } else {
        // White to red
        let t2 = (t - 0.5) * 2.0;
        let v = ((1.0 - t2) * 255.0) as u8;
        Color::Rgb(255, v, v)
    }
}

/// Mix `color` over `background` with the given opacity.
///
/// Only RGB colors can be mixed; named terminal colors are returned as is.
pub fn blend(color: Color, background: Color, opacity: f64) -> Color {
    let alpha = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |c: u8, base: u8| (c as f64 * alpha + base as f64 * (1.0 - alpha)).round() as u8;
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        },
        _ => color,
    }
}

/// Scale the brightness of an RGB color.
pub fn shade(color: Color, intensity: f64) -> Color {
    let k = intensity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f64 * k).round() as u8,
            (g as f64 * k).round() as u8,
            (b as f64 * k).round() as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(Palette::Viridis.color(0.0), Color::Rgb(68, 1, 84));
        assert_eq!(Palette::Viridis.color(1.0), Color::Rgb(253, 231, 37));
        assert_eq!(Palette::Viridis.color(0.5), Color::Rgb(33, 145, 140));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        for palette in [Palette::Viridis, Palette::Plasma, Palette::Rainbow, Palette::BlueRed] {
            assert_eq!(palette.color(-3.0), palette.color(0.0));
            assert_eq!(palette.color(7.0), palette.color(1.0));
            assert_eq!(palette.color(f64::NAN), palette.color(0.0));
        }
    }

    #[test]
    fn test_palette_parsing() {
        for palette in Palette::ALL {
            assert_eq!(palette.name().parse::<Palette>().unwrap(), palette);
        }
        assert_eq!("blue-red".parse::<Palette>().unwrap(), Palette::BlueRed);
        assert_eq!(" PLASMA ".parse::<Palette>().unwrap(), Palette::Plasma);
        assert!(matches!(
            "jet".parse::<Palette>(),
            Err(PlotError::UnknownPalette(name)) if name == "jet"
        ));
    }

    #[test]
    fn test_blend() {
        let black = Color::Rgb(0, 0, 0);
        assert_eq!(blend(Color::Rgb(200, 100, 50), black, 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(blend(Color::Rgb(200, 100, 50), black, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(Color::Red, black, 0.5), Color::Red);
    }
}
