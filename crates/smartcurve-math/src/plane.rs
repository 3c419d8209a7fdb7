use serde::{Deserialize, Serialize};

/// A coordinate axis, used to orient sweeps and oscillations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of this axis in a `Point3`.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two remaining axes, in x, y, z order.
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// One of the three fixed coordinate planes a 2D shape is drawn in.
///
/// The shape's first 2D coordinate maps to the first axis of the plane name,
/// the second to the second axis. The remaining axis is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneSelector {
    #[default]
    Xy,
    Xz,
    Yz,
}

impl PlaneSelector {
    /// Component indices `(horizontal, vertical)` spanned by the plane.
    pub fn axes(self) -> (usize, usize) {
        match self {
            PlaneSelector::Xy => (0, 1),
            PlaneSelector::Xz => (0, 2),
            PlaneSelector::Yz => (1, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_axes_are_ordered_and_distinct() {
        for plane in [PlaneSelector::Xy, PlaneSelector::Xz, PlaneSelector::Yz] {
            let (a, b) = plane.axes();
            assert!(a < b && b < 3, "{plane:?} spans ({a}, {b})");
        }
    }

    #[test]
    fn test_axis_others() {
        assert_eq!(Axis::Y.others(), (Axis::X, Axis::Z));
        assert_eq!(Axis::Z.index(), 2);
    }

    #[test]
    fn test_lowercase_names() {
        let plane: PlaneSelector = serde_json::from_str("\"yz\"").unwrap();
        assert_eq!(plane, PlaneSelector::Yz);
        let axis: Axis = serde_json::from_str("\"z\"").unwrap();
        assert_eq!(axis, Axis::Z);
    }
}
