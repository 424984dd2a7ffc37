//! A sampled **Möbius strip** with numerical estimates of its surface area and
//! boundary length.
//!
//! The strip of centre radius `R` and width `w` is sampled once on an `n × n`
//! parameter grid. [`MobiusStrip::surface_area`] integrates the
//! finite-difference area density `‖r_u × r_v‖` with composite Simpson,
//! and [`MobiusStrip::edge_length`] sums the chords along the two boundary
//! rows.
//!
//! ```
//! use mobius::MobiusStrip;
//!
//! let strip = MobiusStrip::new(1.0, 0.4, 200)?;
//! let m = strip.measure();
//! assert!(m.surface_area > 2.5 && m.surface_area < 2.53);
//! assert!(m.edge_length > 12.6 && m.edge_length < 12.65);
//! # Ok::<(), mobius::errors::MobiusError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export of the sampled surface
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for sampling and for evaluating area and edge length concurrently

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod grid;
pub mod io;
pub mod numeric;
pub mod surface;
pub mod triangulated;
pub mod vertex;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::MobiusError;
pub use grid::Grid;
pub use surface::{Measurements, MobiusStrip, StripParameters};
pub use triangulated::Triangulated3D;
pub use vertex::Vertex;
