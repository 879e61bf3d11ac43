//! Grid sampling.
//!
//! Builds evenly spaced coordinate grids over rectangular domains and
//! evaluates vectorized functions on them.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Zip};

use crate::error::{PlotError, Result};

/// Closed interval `[low, high]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower end, always sampled.
    pub low: f64,
    /// Upper end, always sampled.
    pub high: f64,
}

impl Bounds {
    /// Create bounds, rejecting non-finite or inverted pairs.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let bounds = Self { low, high };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that the bounds describe a non-empty finite interval.
    ///
    /// The fields are public, so bounds built with a struct literal are
    /// validated again before sampling.
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(PlotError::invalid_domain(format!(
                "bounds ({}, {}) must be finite",
                self.low, self.high
            )));
        }
        if self.low >= self.high {
            return Err(PlotError::invalid_domain(format!(
                "lower bound {} must be less than upper bound {}",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

impl FromStr for Bounds {
    type Err = PlotError;

    /// Parse `"low,high"` or `"low:high"`.
    fn from_str(s: &str) -> Result<Self> {
        let (low, high) = s
            .split_once(',')
            .or_else(|| s.split_once(':'))
            .ok_or_else(|| PlotError::invalid_domain(format!("expected LOW,HIGH but got '{}'", s)))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| PlotError::invalid_domain(format!("'{}': {}", part.trim(), e)))
        };

        Self::new(parse(low)?, parse(high)?)
    }
}

/// Evenly spaced samples over both axes of a rectangle.
///
/// `xs[[i, j]]` is the j-th x sample and `ys[[i, j]]` the i-th y sample, so
/// rows follow y and columns follow x.
#[derive(Debug, Clone)]
pub struct Grid2 {
    /// The x samples.
    pub x: Array1<f64>,
    /// The y samples.
    pub y: Array1<f64>,
    /// X coordinate of every grid cell.
    pub xs: Array2<f64>,
    /// Y coordinate of every grid cell.
    pub ys: Array2<f64>,
}

impl Grid2 {
    /// Shape of the coordinate matrices.
    pub fn shape(&self) -> (usize, usize) {
        self.xs.dim()
    }
}

/// Sample `n_samples` evenly spaced points over `bounds`, endpoints included.
pub fn build_grid_1d(bounds: Bounds, n_samples: usize) -> Result<Array1<f64>> {
    bounds.validate()?;
    if n_samples == 0 {
        return Err(PlotError::invalid_domain("sample count must be positive"));
    }
    if n_samples == 1 {
        return Ok(Array1::from_elem(1, bounds.low));
    }

    // high - low overflows near f64::MAX, so blend the ends. Both ends are exact.
    let last = n_samples - 1;
    let samples = Array1::from_shape_fn(n_samples, |i| match i {
        0 => bounds.low,
        i if i == last => bounds.high,
        i => {
            let t = i as f64 / last as f64;
            bounds.low * (1.0 - t) + bounds.high * t
        },
    });

    tracing::debug!("Built 1D grid over {} with {} samples", bounds, n_samples);
    Ok(samples)
}

/// Cartesian product of `n_samples` x samples and `n_samples` y samples.
pub fn build_grid_2d(xbounds: Bounds, ybounds: Bounds, n_samples: usize) -> Result<Grid2> {
    let x = build_grid_1d(xbounds, n_samples)?;
    let y = build_grid_1d(ybounds, n_samples)?;

    let xs = Array2::from_shape_fn((n_samples, n_samples), |(_, j)| x[j]);
    let ys = Array2::from_shape_fn((n_samples, n_samples), |(i, _)| y[i]);

    tracing::debug!(
        "Built 2D grid over {} x {} with {}x{} samples",
        xbounds,
        ybounds,
        n_samples,
        n_samples
    );
    Ok(Grid2 { x, y, xs, ys })
}

type Vectorized1 = dyn Fn(ArrayView1<'_, f64>) -> Array1<f64>;
type Vectorized2 = dyn Fn(ArrayView2<'_, f64>, ArrayView2<'_, f64>) -> Array2<f64>;

/// Named function of one variable, applied to a whole grid at once.
pub struct Function1D {
    name: String,
    func: Box<Vectorized1>,
}

impl Function1D {
    /// Wrap a vectorized function.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(ArrayView1<'_, f64>) -> Array1<f64> + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    /// Lift a scalar function to a vectorized one.
    pub fn elementwise<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        Self::new(name, move |xs| xs.mapv(|x| func(x)))
    }

    /// Declared name, used as the default series label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate on `grid`, checking that the output matches its shape.
    pub fn evaluate(&self, grid: &Array1<f64>) -> Result<Array1<f64>> {
        let out = (self.func)(grid.view());
        if out.shape() != grid.shape() {
            return Err(PlotError::shape_mismatch(grid.shape(), out.shape()));
        }
        Ok(out)
    }
}

impl fmt::Debug for Function1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function1D").field("name", &self.name).finish()
    }
}

/// Named function of two variables, applied to a whole grid at once.
pub struct Function2D {
    name: String,
    func: Box<Vectorized2>,
}

impl Function2D {
    /// Wrap a vectorized function taking the x and y coordinate matrices.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(ArrayView2<'_, f64>, ArrayView2<'_, f64>) -> Array2<f64> + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    /// Lift a scalar function of `(x, y)` to a vectorized one.
    pub fn elementwise<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + 'static,
    {
        Self::new(name, move |xs, ys| {
            Zip::from(xs).and(ys).map_collect(|&x, &y| func(x, y))
        })
    }

    /// Declared name, used as the default series label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate on `grid`, checking that the output matches its shape.
    pub fn evaluate(&self, grid: &Grid2) -> Result<Array2<f64>> {
        let out = (self.func)(grid.xs.view(), grid.ys.view());
        if out.shape() != grid.xs.shape() {
            return Err(PlotError::shape_mismatch(grid.xs.shape(), out.shape()));
        }
        Ok(out)
    }
}

impl fmt::Debug for Function2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function2D").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_spacing() {
        let grid = build_grid_1d(Bounds::new(0.0, 1.0).unwrap(), 5).unwrap();
        assert_eq!(grid.to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_huge_bounds_stay_finite() {
        let grid = build_grid_1d(Bounds::new(-1e308, 1e308).unwrap(), 5).unwrap();
        assert_eq!(grid[0], -1e308);
        assert_eq!(grid[2], 0.0);
        assert_eq!(grid[4], 1e308);
        assert!(grid.iter().all(|v| v.is_finite()));
        assert!(grid.as_slice().unwrap().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_single_sample_is_low_bound() {
        let grid = build_grid_1d(Bounds::new(2.0, 3.0).unwrap(), 1).unwrap();
        assert_eq!(grid.to_vec(), vec![2.0]);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let err = build_grid_1d(Bounds::default(), 0).unwrap_err();
        assert!(matches!(err, PlotError::InvalidDomain(_)));
    }

    #[test]
    fn test_struct_literal_bounds_are_validated() {
        let inverted = Bounds {
            low: 1.0,
            high: -1.0,
        };
        assert!(matches!(
            build_grid_1d(inverted, 10),
            Err(PlotError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_bounds_parsing() {
        assert_eq!(
            "-4,4".parse::<Bounds>().unwrap(),
            Bounds::new(-4.0, 4.0).unwrap()
        );
        assert_eq!(
            " 0.5 : 2 ".parse::<Bounds>().unwrap(),
            Bounds::new(0.5, 2.0).unwrap()
        );
        assert!("3,1".parse::<Bounds>().is_err());
        assert!("nope".parse::<Bounds>().is_err());
        assert!("a,b".parse::<Bounds>().is_err());
    }

    #[test]
    fn test_elementwise_matches_vectorized() {
        let grid = build_grid_2d(Bounds::default(), Bounds::default(), 4).unwrap();
        let scalar = Function2D::elementwise("prod", |x, y| x * y);
        let vector = Function2D::new("prod", |xs, ys| &xs * &ys);
        assert_eq!(
            scalar.evaluate(&grid).unwrap(),
            vector.evaluate(&grid).unwrap()
        );
    }

    #[test]
    fn test_wrong_output_shape() {
        let grid = build_grid_1d(Bounds::default(), 10).unwrap();
        let truncated = Function1D::new("head", |xs| xs.slice(ndarray::s![..3]).to_owned());
        match truncated.evaluate(&grid) {
            Err(PlotError::ShapeMismatch { expected, found }) => {
                assert_eq!(expected, vec![10]);
                assert_eq!(found, vec![3]);
            },
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }
}
