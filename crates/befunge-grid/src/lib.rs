//! Befunge playfield: converts source text into a toroidal character grid.

pub mod grid;

pub use grid::{wrap, Grid, PADDING};
