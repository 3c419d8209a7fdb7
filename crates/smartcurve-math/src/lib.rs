pub mod aabb;
pub mod plane;
pub mod validate;
pub mod vec3;

pub use glam::{dvec3, DVec3};
pub use aabb::Aabb3;
pub use plane::{Axis, PlaneSelector};
pub use validate::{ensure_finite, point_total, validate_segments, MAX_POINT_COUNT};
pub use vec3::Vector3Like;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
