//! derivview - terminal plots of functions of one or two variables.
//!
//! derivview samples a function over a rectangular domain and draws it as a
//! line or scatter chart (one variable) or as a wireframe or shaded surface
//! (two variables). A surface can be colored by the magnitude of a second
//! function, which makes it easy to compare a function with one of its
//! partial derivatives.
//!
//! # Features
//!
//! - Evenly spaced 1D and 2D sample grids
//! - Vectorized function evaluation with shape checks
//! - Braille line and scatter charts with a legend
//! - Projected wireframes and painter-sorted surfaces
//! - Viridis color mapping with a colorbar
//! - Interactive terminal viewer and a headless buffer renderer
//!
//! # Example
//!
//! ```no_run
//! use derivview::display::TerminalRenderer;
//! use derivview::grid::Function2D;
//! use derivview::plot::{Plot2dOptions, PlotKind, Plotter};
//!
//! let sinxy = Function2D::elementwise("sin(xy)", |x, y| (x * y).sin());
//! let mut plotter = Plotter::new(TerminalRenderer::new());
//! let opts = Plot2dOptions {
//!     kind: PlotKind::Surface,
//!     ..Default::default()
//! };
//! plotter.plot_2d(&sinxy, &opts)?;
//! # Ok::<(), derivview::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod demo;
pub mod display;
pub mod error;
pub mod grid;
pub mod plot;
pub mod ui;
pub mod util;

pub use error::{PlotError, Result};
