//! Benchmark timing plots.
//!
//! Two binaries share this library:
//! * `timeplot` draws mean time against problem size with error bars, one
//!   line per input file of `"N T"` rows;
//! * `timeplot-g3d` draws a triangulated time surface over a block grid, one
//!   surface per problem size, from `"I J N T"` rows.
//!
//! Both either open an interactive window or save a `.png` / `.svg` file.

pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod error;
pub mod render;
pub mod state;
pub mod ui;
