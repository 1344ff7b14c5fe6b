//! Penrose P3 tilings by Robinson-triangle subdivision.
//!
//! Start from a seed configuration (by default ten small triangles fanned
//! around the origin), subdivide each triangle at golden-ratio cut points a
//! given number of times, and collect the final triangles along with their
//! deduplicated vertices. Rendering to PDF or PNG goes through cairo.
//!
//! ```no_run
//! let tiling = penrose_rs::build(4, false)?;
//! println!("{} triangles, {} points", tiling.triangles.len(), tiling.points.len());
//! # Ok::<(), penrose_rs::errors::Error>(())
//! ```

#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;

pub mod errors;
pub mod geom;
pub mod listing;
pub mod render;
pub mod seeds;
pub mod tiling;

pub use crate::geom::{Point2d, PHI};
pub use crate::render::{OutputFormat, RenderSettings, Viewport};
pub use crate::tiling::{build, build_from, subdivide, Tiling, Triangle, TriangleKind};
