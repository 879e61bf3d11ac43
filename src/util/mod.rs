//! Utility functions.
//!
//! This module provides the color palettes shared by the plot model and the
//! terminal renderer.

pub mod colormaps;

pub use colormaps::{blend, shade, Palette};
