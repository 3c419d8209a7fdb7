//! B-spline core algorithms: clamped knot vectors and De Boor evaluation.

pub mod deboor;
pub mod knot;

pub use deboor::{curve_point, hodograph};
pub use knot::{basis_functions, clamped_knots, find_span};
