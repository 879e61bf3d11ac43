//! Plot dispatch.
//!
//! Samples functions through [`crate::grid`], turns the results into
//! [`Series`] on an explicit [`Axes`] target and hands the target to a
//! [`Renderer`] when asked to show it.

pub mod color_field;
pub mod projection;
pub mod style;

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};

use crate::display::Renderer;
use crate::error::{PlotError, Result};
use crate::grid::{build_grid_1d, build_grid_2d, Bounds, Function1D, Function2D};

pub use color_field::ColorField;
pub use projection::{Camera, Point3};
pub use style::StyleOptions;

/// Default number of samples per axis.
pub const DEFAULT_SAMPLES: usize = 100;

/// Kind of plot to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    /// Samples connected by a line.
    #[default]
    Line,
    /// Unconnected markers.
    Scatter,
    /// Mesh outline of a surface.
    Wireframe,
    /// Filled, shaded surface.
    Surface,
    /// Surface colored by a second function's magnitude.
    ColorMappedSurface,
}

impl PlotKind {
    /// Every kind, in display order.
    pub const ALL: [PlotKind; 5] = [
        PlotKind::Line,
        PlotKind::Scatter,
        PlotKind::Wireframe,
        PlotKind::Surface,
        PlotKind::ColorMappedSurface,
    ];

    /// Number of input variables this kind plots.
    pub fn dims(self) -> usize {
        match self {
            PlotKind::Line | PlotKind::Scatter => 1,
            PlotKind::Wireframe | PlotKind::Surface | PlotKind::ColorMappedSurface => 2,
        }
    }

    /// Get the name used when parsing.
    pub fn name(self) -> &'static str {
        match self {
            PlotKind::Line => "line",
            PlotKind::Scatter => "scatter",
            PlotKind::Wireframe => "wireframe",
            PlotKind::Surface => "surface",
            PlotKind::ColorMappedSurface => "color_mapped_surface",
        }
    }

    fn ensure_dims(self, dims: usize) -> Result<()> {
        if self.dims() == dims {
            Ok(())
        } else {
            Err(PlotError::unsupported_kind(self.name(), Some(dims)))
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlotKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        PlotKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| PlotError::unsupported_kind(s, None))
    }
}

/// Coordinate system of an [`Axes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Flat x/y axes for functions of one variable.
    Cartesian,
    /// Projected x/y/z axes for functions of two variables.
    ThreeD,
}

impl Projection {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Projection::Cartesian => "2D",
            Projection::ThreeD => "3D",
        }
    }
}

/// Sampled data of a series.
#[derive(Debug, Clone)]
pub enum SeriesData {
    /// Values of a function of one variable.
    Curve {
        /// Sample positions.
        x: Array1<f64>,
        /// Function values.
        y: Array1<f64>,
    },
    /// Values of a function of two variables on a grid.
    Surface {
        /// X coordinate of every cell.
        xs: Array2<f64>,
        /// Y coordinate of every cell.
        ys: Array2<f64>,
        /// Function values.
        zs: Array2<f64>,
    },
}

impl SeriesData {
    /// Number of sampled points.
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Curve { x, .. } => x.len(),
            SeriesData::Surface { zs, .. } => zs.len(),
        }
    }

    /// Whether no points were sampled.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One labeled drawing on an [`Axes`].
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// How the data is drawn.
    pub kind: PlotKind,
    /// Sampled data.
    pub data: SeriesData,
    /// Style, with the color resolved when the series was added.
    pub style: StyleOptions,
    /// Face colors of a color-mapped surface.
    pub color_field: Option<ColorField>,
}

/// Inclusive range of finite values, `None` when there are none.
fn finite_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

fn merge(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> Option<(f64, f64)> {
    match (a, b) {
        (Some((a0, a1)), Some((b0, b1))) => Some((a0.min(b0), a1.max(b1))),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Plot target holding every series drawn onto it.
#[derive(Debug, Clone)]
pub struct Axes {
    projection: Projection,
    title: Option<String>,
    camera: Camera,
    series: Vec<Series>,
}

impl Axes {
    /// Create empty axes for the given projection.
    pub fn new(projection: Projection) -> Self {
        Self {
            projection,
            title: None,
            camera: Camera::default(),
            series: Vec::new(),
        }
    }

    /// Create empty flat axes for functions of one variable.
    pub fn new_2d() -> Self {
        Self::new(Projection::Cartesian)
    }

    /// Create empty projected axes for functions of two variables.
    pub fn new_3d() -> Self {
        Self::new(Projection::ThreeD)
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Get the projection.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Get the title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the camera used for 3D projection.
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Replace the camera.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Series in drawing order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Whether nothing has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Fail unless the axes use `projection`.
    pub fn expect_projection(&self, projection: Projection) -> Result<()> {
        if self.projection == projection {
            Ok(())
        } else {
            Err(PlotError::ProjectionMismatch {
                expected: projection.name(),
                found: self.projection.name(),
            })
        }
    }

    /// Range of x values over all series.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.series.iter().fold(None, |acc, s| {
            merge(
                acc,
                match &s.data {
                    SeriesData::Curve { x, .. } => finite_range(x),
                    SeriesData::Surface { xs, .. } => finite_range(xs),
                },
            )
        })
    }

    /// Range of y values over all series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.series.iter().fold(None, |acc, s| {
            merge(
                acc,
                match &s.data {
                    SeriesData::Curve { y, .. } => finite_range(y),
                    SeriesData::Surface { ys, .. } => finite_range(ys),
                },
            )
        })
    }

    /// Range of z values over all surface series.
    pub fn z_range(&self) -> Option<(f64, f64)> {
        self.series.iter().fold(None, |acc, s| {
            merge(
                acc,
                match &s.data {
                    SeriesData::Curve { .. } => None,
                    SeriesData::Surface { zs, .. } => finite_range(zs),
                },
            )
        })
    }

    fn push(&mut self, mut series: Series) {
        let is_mesh_or_line = !matches!(
            series.kind,
            PlotKind::Surface | PlotKind::ColorMappedSurface
        );
        if series.style.color.is_none() && is_mesh_or_line {
            series.style.color = Some(style::series_color(self.series.len()));
        }
        tracing::debug!(
            "Added {} series '{}' with {} points",
            series.kind,
            series.label,
            series.data.len()
        );
        self.series.push(series);
    }
}

/// Options for [`Plotter::plot_1d`].
#[derive(Debug, Clone)]
pub struct Plot1dOptions {
    /// Number of samples.
    pub samples: usize,
    /// Sampled interval.
    pub bounds: Bounds,
    /// Series label, defaults to the function's name.
    pub name: Option<String>,
    /// Display the axes once the series is added.
    pub show: bool,
    /// [`PlotKind::Line`] or [`PlotKind::Scatter`].
    pub kind: PlotKind,
    /// Series style.
    pub style: StyleOptions,
}

impl Default for Plot1dOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            bounds: Bounds::default(),
            name: None,
            show: true,
            kind: PlotKind::Line,
            style: StyleOptions::default(),
        }
    }
}

/// Options for [`Plotter::plot_2d`].
#[derive(Debug, Clone)]
pub struct Plot2dOptions {
    /// Number of samples per axis.
    pub samples: usize,
    /// Sampled x interval.
    pub xbounds: Bounds,
    /// Sampled y interval.
    pub ybounds: Bounds,
    /// Series label, defaults to the function's name.
    pub name: Option<String>,
    /// Display the axes once the series is added.
    pub show: bool,
    /// [`PlotKind::Wireframe`] or [`PlotKind::Surface`].
    pub kind: PlotKind,
    /// Series style.
    pub style: StyleOptions,
}

impl Default for Plot2dOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            xbounds: Bounds::default(),
            ybounds: Bounds::default(),
            name: None,
            show: true,
            kind: PlotKind::Wireframe,
            style: StyleOptions::default(),
        }
    }
}

/// Options for [`Plotter::plot_2d_colored`].
#[derive(Debug, Clone)]
pub struct ColoredOptions {
    /// Number of samples per axis.
    pub samples: usize,
    /// Sampled x interval.
    pub xbounds: Bounds,
    /// Sampled y interval.
    pub ybounds: Bounds,
    /// Series label, defaults to the function's name.
    pub name: Option<String>,
    /// Display the axes once the series is added.
    pub show: bool,
    /// Series style; `palette` colors the magnitude field.
    pub style: StyleOptions,
}

impl Default for ColoredOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            xbounds: Bounds::default(),
            ybounds: Bounds::default(),
            name: None,
            show: true,
            style: StyleOptions::default(),
        }
    }
}

/// Entry point for plotting, owning the renderer that displays results.
#[derive(Debug)]
pub struct Plotter<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> Plotter<R> {
    /// Create a plotter displaying through `renderer`.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Get the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the renderer mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the plotter, returning its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Display `axes`, typically after composing several series with
    /// `show: false`.
    pub fn show(&mut self, axes: &Axes) -> Result<()> {
        tracing::info!(
            "Showing {} axes with {} series",
            axes.projection().name(),
            axes.series().len()
        );
        self.renderer.show(axes)
    }

    /// Plot a function of one variable on new axes.
    pub fn plot_1d(&mut self, func: &Function1D, opts: &Plot1dOptions) -> Result<Axes> {
        let mut axes = Axes::new_2d();
        self.plot_1d_on(&mut axes, func, opts)?;
        Ok(axes)
    }

    /// Plot a function of one variable onto existing axes.
    ///
    /// On error the axes are left untouched.
    pub fn plot_1d_on(
        &mut self,
        axes: &mut Axes,
        func: &Function1D,
        opts: &Plot1dOptions,
    ) -> Result<()> {
        opts.kind.ensure_dims(1)?;
        axes.expect_projection(Projection::Cartesian)?;

        let x = build_grid_1d(opts.bounds, opts.samples)?;
        let y = func.evaluate(&x)?;

        let series = Series {
            label: label_for(opts.name.as_deref(), func.name()),
            kind: opts.kind,
            data: SeriesData::Curve { x, y },
            style: opts.style,
            color_field: None,
        };
        self.finish(axes, series, opts.show)
    }

    /// Plot a function of two variables on new axes.
    pub fn plot_2d(&mut self, func: &Function2D, opts: &Plot2dOptions) -> Result<Axes> {
        let mut axes = Axes::new_3d();
        self.plot_2d_on(&mut axes, func, opts)?;
        Ok(axes)
    }

    /// Plot a function of two variables onto existing axes.
    ///
    /// On error the axes are left untouched.
    pub fn plot_2d_on(
        &mut self,
        axes: &mut Axes,
        func: &Function2D,
        opts: &Plot2dOptions,
    ) -> Result<()> {
        if opts.kind == PlotKind::ColorMappedSurface {
            // Needs a second function, see plot_2d_colored.
            return Err(PlotError::unsupported_kind(opts.kind.name(), Some(2)));
        }
        opts.kind.ensure_dims(2)?;
        axes.expect_projection(Projection::ThreeD)?;

        let grid = build_grid_2d(opts.xbounds, opts.ybounds, opts.samples)?;
        let zs = func.evaluate(&grid)?;

        let series = Series {
            label: label_for(opts.name.as_deref(), func.name()),
            kind: opts.kind,
            data: SeriesData::Surface {
                xs: grid.xs,
                ys: grid.ys,
                zs,
            },
            style: opts.style,
            color_field: None,
        };
        self.finish(axes, series, opts.show)
    }

    /// Plot a surface of `func` colored by the magnitude of `colorfunc` on
    /// new axes.
    pub fn plot_2d_colored(
        &mut self,
        func: &Function2D,
        colorfunc: &Function2D,
        opts: &ColoredOptions,
    ) -> Result<Axes> {
        let mut axes = Axes::new_3d();
        self.plot_2d_colored_on(&mut axes, func, colorfunc, opts)?;
        Ok(axes)
    }

    /// Plot a color-mapped surface onto existing axes.
    ///
    /// On error the axes are left untouched.
    pub fn plot_2d_colored_on(
        &mut self,
        axes: &mut Axes,
        func: &Function2D,
        colorfunc: &Function2D,
        opts: &ColoredOptions,
    ) -> Result<()> {
        axes.expect_projection(Projection::ThreeD)?;

        let grid = build_grid_2d(opts.xbounds, opts.ybounds, opts.samples)?;
        let zs = func.evaluate(&grid)?;
        let values = colorfunc.evaluate(&grid)?;
        let field = ColorField::from_values(&values, opts.style.palette);

        tracing::debug!(
            "Color field of '{}' spans [{}, {}]",
            colorfunc.name(),
            field.min,
            field.max
        );

        let series = Series {
            label: label_for(opts.name.as_deref(), func.name()),
            kind: PlotKind::ColorMappedSurface,
            data: SeriesData::Surface {
                xs: grid.xs,
                ys: grid.ys,
                zs,
            },
            style: opts.style,
            color_field: Some(field),
        };
        self.finish(axes, series, opts.show)
    }

    /// Add `series` and show the axes if asked. A failed show removes the
    /// series again.
    fn finish(&mut self, axes: &mut Axes, series: Series, show: bool) -> Result<()> {
        axes.push(series);
        if show {
            if let Err(e) = self.show(axes) {
                axes.series.pop();
                return Err(e);
            }
        }
        Ok(())
    }
}

fn label_for(name: Option<&str>, declared: &str) -> String {
    name.unwrap_or(declared).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("line".parse::<PlotKind>().unwrap(), PlotKind::Line);
        assert_eq!("Surface".parse::<PlotKind>().unwrap(), PlotKind::Surface);
        assert_eq!(
            "color-mapped-surface".parse::<PlotKind>().unwrap(),
            PlotKind::ColorMappedSurface
        );
        match "bogus".parse::<PlotKind>() {
            Err(PlotError::UnsupportedPlotKind { kind, .. }) => assert_eq!(kind, "bogus"),
            other => panic!("expected UnsupportedPlotKind, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in PlotKind::ALL {
            assert_eq!(kind.name().parse::<PlotKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_projection_mismatch() {
        let axes = Axes::new_2d();
        assert!(axes.expect_projection(Projection::Cartesian).is_ok());
        assert!(matches!(
            axes.expect_projection(Projection::ThreeD),
            Err(PlotError::ProjectionMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_axes_have_no_range() {
        let axes = Axes::new_3d();
        assert!(axes.x_range().is_none());
        assert!(axes.z_range().is_none());
    }
}
