//! Example functions and their mixed partial derivatives.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::grid::{Bounds, Function1D, Function2D};

/// `sin(x * y)`.
pub fn sinxy() -> Function2D {
    Function2D::new("sin(xy)", |xs: ArrayView2<'_, f64>, ys: ArrayView2<'_, f64>| {
        (&xs * &ys).mapv(f64::sin)
    })
}

/// `∂²/∂x∂y sin(x * y) = cos(xy) - xy sin(xy)`.
pub fn d_dxy_sinxy() -> Function2D {
    Function2D::new("d2/dxdy sin(xy)", |xs, ys| {
        let xy = &xs * &ys;
        xy.mapv(|t| t.cos() - t * t.sin())
    })
}

/// `x²y + 2y³x`.
pub fn simple_poly() -> Function2D {
    Function2D::new("x^2 y + 2 y^3 x", |xs, ys| {
        &xs.mapv(|x| x * x) * &ys + &(&ys.mapv(|y| 2.0 * y.powi(3)) * &xs)
    })
}

/// `∂²/∂x∂y (x²y + 2y³x) = 2x + 6y²`.
pub fn simple_poly_d_dxy() -> Function2D {
    Function2D::new("d2/dxdy poly", |xs, ys| {
        xs.mapv(|x| 2.0 * x) + ys.mapv(|y| 6.0 * y * y)
    })
}

fn sq_diff(xs: &ArrayView2<'_, f64>, ys: &ArrayView2<'_, f64>, a: f64) -> Array2<f64> {
    a - &xs.mapv(|x| x * x) - &ys.mapv(|y| y * y)
}

/// `exp(-(4 - x² - y²)²)`, a ring of radius 2.
pub fn circle() -> Function2D {
    Function2D::new("ring", |xs, ys| {
        sq_diff(&xs, &ys, 4.0).mapv(|s| (-s * s).exp())
    })
}

/// Mixed partial derivative of [`circle`].
pub fn d_dxy_circle() -> Function2D {
    Function2D::new("d2/dxdy ring", |xs, ys| {
        let s = sq_diff(&xs, &ys, 4.0);
        let envelope = s.mapv(|s| (-s * s).exp() * (2.0 * s * s - 1.0));
        8.0 * &(&xs * &ys) * &envelope
    })
}

/// `exp(-(x - 4)²) + exp(-(x + 4)²)`, two bumps at ±4.
pub fn bumps() -> Function1D {
    Function1D::new("bumps", |xs: ArrayView1<'_, f64>| -> Array1<f64> {
        xs.mapv(|x| (-(x - 4.0).powi(2)).exp() + (-(x + 4.0).powi(2)).exp())
    })
}

/// A named demo the binary can plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// `sin(xy)`.
    SinXy,
    /// `sin(xy)` colored by its mixed derivative.
    SinXyMixed,
    /// The polynomial.
    Poly,
    /// The polynomial colored by its mixed derivative.
    PolyMixed,
    /// The ring.
    Circle,
    /// The ring colored by its mixed derivative.
    CircleMixed,
    /// Two bumps, one variable.
    Bumps,
}

impl Demo {
    /// Domain the demo is meant to be viewed on, used for both axes.
    pub fn default_bounds(self) -> Bounds {
        let (low, high) = match self {
            Demo::SinXy | Demo::SinXyMixed => (-4.0, 4.0),
            Demo::Poly | Demo::PolyMixed => (-1.0, 1.0),
            Demo::Circle | Demo::CircleMixed => (-3.0, 3.0),
            Demo::Bumps => (-6.0, 6.0),
        };
        Bounds { low, high }
    }

    /// Surface and optional color function of a two-variable demo.
    pub fn surface(self) -> Option<(Function2D, Option<Function2D>)> {
        match self {
            Demo::SinXy => Some((sinxy(), None)),
            Demo::SinXyMixed => Some((sinxy(), Some(d_dxy_sinxy()))),
            Demo::Poly => Some((simple_poly(), None)),
            Demo::PolyMixed => Some((simple_poly(), Some(simple_poly_d_dxy()))),
            Demo::Circle => Some((circle(), None)),
            Demo::CircleMixed => Some((circle(), Some(d_dxy_circle()))),
            Demo::Bumps => None,
        }
    }

    /// Curve of a one-variable demo.
    pub fn curve(self) -> Option<Function1D> {
        match self {
            Demo::Bumps => Some(bumps()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid_2d;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mixed_derivative_matches_finite_difference() {
        let h = 1e-4;
        let f = |x: f64, y: f64| (x * y).sin();
        let grid = build_grid_2d(Bounds::new(-2.0, 2.0).unwrap(), Bounds::new(-2.0, 2.0).unwrap(), 7).unwrap();
        let exact = d_dxy_sinxy().evaluate(&grid).unwrap();
        for ((i, j), &d) in exact.indexed_iter() {
            let (x, y) = (grid.xs[[i, j]], grid.ys[[i, j]]);
            let fd = (f(x + h, y + h) - f(x + h, y - h) - f(x - h, y + h) + f(x - h, y - h))
                / (4.0 * h * h);
            assert!((fd - d).abs() < 1e-4, "at ({}, {}): {} vs {}", x, y, fd, d);
        }
    }

    #[test]
    fn test_poly_values() {
        let grid = build_grid_2d(Bounds::new(1.0, 2.0).unwrap(), Bounds::new(3.0, 4.0).unwrap(), 2).unwrap();
        let z = simple_poly().evaluate(&grid).unwrap();
        // x = 1, y = 3: 1 * 3 + 2 * 27 * 1
        assert!(close(z[[0, 0]], 57.0));
        let d = simple_poly_d_dxy().evaluate(&grid).unwrap();
        // x = 2, y = 4: 4 + 96
        assert!(close(d[[1, 1]], 100.0));
    }

    #[test]
    fn test_ring_peaks_on_radius_two() {
        let grid = build_grid_2d(Bounds::new(0.0, 2.0).unwrap(), Bounds::new(-1.0, 0.0).unwrap(), 3).unwrap();
        let z = circle().evaluate(&grid).unwrap();
        // x = 2, y = 0 lies on the ring
        assert!(close(z[[2, 2]], 1.0));
    }

    #[test]
    fn test_every_demo_has_exactly_one_shape() {
        for demo in [
            Demo::SinXy,
            Demo::SinXyMixed,
            Demo::Poly,
            Demo::PolyMixed,
            Demo::Circle,
            Demo::CircleMixed,
            Demo::Bumps,
        ] {
            assert!(demo.surface().is_some() != demo.curve().is_some());
            assert!(demo.default_bounds().validate().is_ok());
        }
    }
}
