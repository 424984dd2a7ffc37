//! Numerical operators used by the surface evaluator: finite differences and
//! quadrature over sampled grids.

pub mod gradient;
pub mod quadrature;

pub use gradient::{gradient, gradient_along};
pub use quadrature::{simpson, simpson_along};
