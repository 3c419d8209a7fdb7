//! Loose point input: `[x, y, z]` arrays or `{x, y, z}` objects.

use serde::{Deserialize, Deserializer, Serialize};

use crate::Point3;

/// A point as written by hand in a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vector3Like {
    Array([f64; 3]),
    Object { x: f64, y: f64, z: f64 },
}

impl From<Vector3Like> for Point3 {
    fn from(v: Vector3Like) -> Self {
        match v {
            Vector3Like::Array([x, y, z]) => Point3::new(x, y, z),
            Vector3Like::Object { x, y, z } => Point3::new(x, y, z),
        }
    }
}

impl From<Point3> for Vector3Like {
    fn from(p: Point3) -> Self {
        Vector3Like::Array(p.to_array())
    }
}

/// `deserialize_with` helper for `Option<Point3>` fields.
pub fn deserialize_point<'de, D>(deserializer: D) -> Result<Option<Point3>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vector3Like>::deserialize(deserializer)?.map(Point3::from))
}

/// `deserialize_with` helper for `Option<Vec<Point3>>` fields.
pub fn deserialize_points<'de, D>(deserializer: D) -> Result<Option<Vec<Point3>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Vector3Like>>::deserialize(deserializer)?
        .map(|pts| pts.into_iter().map(Point3::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_point")]
        at: Option<Point3>,
        #[serde(default, deserialize_with = "deserialize_points")]
        path: Option<Vec<Point3>>,
    }

    #[test]
    fn test_array_and_object_forms() {
        let h: Holder =
            serde_json::from_str(r#"{"at": {"x": 1, "y": 2, "z": 3}, "path": [[0,0,0], {"x":1,"y":0,"z":0}]}"#)
                .unwrap();
        assert_eq!(h.at, Some(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(h.path.unwrap(), vec![Point3::ZERO, Point3::X]);
    }

    #[test]
    fn test_missing_fields() {
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert!(h.at.is_none());
        assert!(h.path.is_none());
    }
}
