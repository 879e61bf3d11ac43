//! Grid sampling properties.

use derivview::grid::{build_grid_1d, build_grid_2d, Bounds, Function1D};
use derivview::PlotError;

const EPS: f64 = 1e-12;

#[test]
fn grid_1d_has_exact_endpoints_and_constant_spacing() {
    for &(low, high) in &[(-1.0, 1.0), (0.0, 0.3), (-4.0, 4.0), (1e-3, 7.5)] {
        for n in [2, 3, 10, 101] {
            let bounds = Bounds::new(low, high).unwrap();
            let grid = build_grid_1d(bounds, n).unwrap();

            assert_eq!(grid.len(), n);
            assert_eq!(grid[0], low);
            assert_eq!(grid[n - 1], high);

            let step = (high - low) / (n - 1) as f64;
            for w in grid.as_slice().unwrap().windows(2) {
                assert!((w[1] - w[0] - step).abs() < EPS * 10.0 * high.abs().max(1.0));
            }
        }
    }
}

#[test]
fn grid_2d_is_cartesian_product() {
    let xb = Bounds::new(-1.0, 1.0).unwrap();
    let yb = Bounds::new(10.0, 20.0).unwrap();
    let grid = build_grid_2d(xb, yb, 6).unwrap();
    let x = build_grid_1d(xb, 6).unwrap();
    let y = build_grid_1d(yb, 6).unwrap();

    assert_eq!(grid.shape(), (6, 6));
    for i in 0..6 {
        for j in 0..6 {
            assert_eq!(grid.xs[[i, j]], x[j]);
            assert_eq!(grid.ys[[i, j]], y[i]);
        }
    }
}

#[test]
fn grid_2d_honors_y_bounds_independently() {
    // The y axis must follow its own bounds, not the x bounds.
    let grid = build_grid_2d(
        Bounds::new(-1.0, 1.0).unwrap(),
        Bounds::new(2.0, 5.0).unwrap(),
        4,
    )
    .unwrap();

    let y_min = grid.ys.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = grid.ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!((y_min, y_max), (2.0, 5.0));

    let x_min = grid.xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = grid.xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!((x_min, x_max), (-1.0, 1.0));
}

#[test]
fn invalid_domains_are_rejected() {
    assert!(matches!(Bounds::new(1.0, 1.0), Err(PlotError::InvalidDomain(_))));
    assert!(matches!(Bounds::new(2.0, -2.0), Err(PlotError::InvalidDomain(_))));
    assert!(matches!(Bounds::new(f64::NAN, 1.0), Err(PlotError::InvalidDomain(_))));
    assert!(matches!(
        build_grid_2d(Bounds::default(), Bounds::default(), 0),
        Err(PlotError::InvalidDomain(_))
    ));
}

#[test]
fn function_is_called_once_on_the_whole_grid() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let square = Function1D::new("square", move |xs| {
        counter.set(counter.get() + 1);
        xs.mapv(|x| x * x)
    });

    let grid = build_grid_1d(Bounds::default(), 50).unwrap();
    let ys = square.evaluate(&grid).unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(ys.len(), 50);
    assert_eq!(ys[0], 1.0);
}
