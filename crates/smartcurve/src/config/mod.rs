//! Curve request model: shared base fields plus one variant per archetype.
//!
//! Configurations are plain data. They (de)serialize as JSON objects tagged
//! by `"type"` with camelCase field names, e.g.
//!
//! ```json
//! { "type": "arc", "radius": 2, "startAngle": 0, "endAngle": 3.14, "plane": "xz" }
//! ```
//!
//! A `type` that is not one of the built-in archetypes lands in
//! [`CurveConfig::Custom`] with its remaining fields kept verbatim.

mod archetypes;

use std::borrow::Cow;

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use smartcurve_core::{CurveError, Result};
use smartcurve_math::validate_segments;

pub use archetypes::*;

/// Fields shared by every curve request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveBase {
    /// Resolution of the raw curve. Held as `f64` so that a fractional
    /// count is reported as an invalid segment count rather than a parse error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothness: Option<f64>,
}

impl CurveBase {
    /// Validated segment count, or `default` when none was given.
    pub fn segments_or(&self, default: usize) -> Result<usize> {
        match self.segments {
            Some(value) => validate_segments(value),
            None => Ok(default),
        }
    }

    /// Validate `segments` if present, for archetypes that do not sample by it.
    pub fn check_segments(&self) -> Result<()> {
        self.segments.map(validate_segments).transpose().map(|_| ())
    }

    pub fn is_closed(&self) -> bool {
        self.closed.unwrap_or(false)
    }

    /// Smoothing factor when smoothing is requested (present, non-zero, not NaN).
    pub fn smoothing(&self) -> Option<f64> {
        self.smoothness.filter(|s| *s != 0.0 && !s.is_nan())
    }
}

/// Configuration for a caller-defined archetype.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomConfig {
    pub type_id: String,
    pub base: CurveBase,
    /// Every field of the request other than `type`, as written.
    pub fields: Map<String, Value>,
}

impl CustomConfig {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Numeric field lookup.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }
}

/// A built-in archetype's field struct.
pub trait BuiltinConfig: DeserializeOwned + Clone {
    /// Type id the archetype is registered under by default.
    const TYPE_ID: &'static str;

    fn from_config(config: &CurveConfig) -> Option<&Self>;

    /// Borrow this archetype's fields from `config`, or parse them out of a
    /// custom request whose fields follow the same shape.
    fn extract(config: &CurveConfig) -> Result<Cow<'_, Self>> {
        if let Some(own) = Self::from_config(config) {
            return Ok(Cow::Borrowed(own));
        }
        match config {
            CurveConfig::Custom(custom) => {
                let parsed = serde_json::from_value(Value::Object(custom.fields.clone()))?;
                Ok(Cow::Owned(parsed))
            }
            other => Err(CurveError::shape(format!(
                "`{}` generator cannot read a `{}` configuration",
                Self::TYPE_ID,
                other.type_id()
            ))),
        }
    }
}

macro_rules! curve_configs {
    ($($variant:ident($config:ident) => $id:literal,)+) => {
        /// One curve request. Built-in archetypes carry typed fields; anything
        /// else is [`CurveConfig::Custom`].
        #[derive(Debug, Clone)]
        pub enum CurveConfig {
            $($variant($config),)+
            Custom(CustomConfig),
        }

        impl CurveConfig {
            /// Type ids of the built-in archetypes.
            pub const BUILTIN_TYPES: &'static [&'static str] = &[$($id),+];

            pub fn type_id(&self) -> &str {
                match self {
                    $(CurveConfig::$variant(_) => $id,)+
                    CurveConfig::Custom(c) => &c.type_id,
                }
            }

            pub fn base(&self) -> &CurveBase {
                match self {
                    $(CurveConfig::$variant(c) => &c.base,)+
                    CurveConfig::Custom(c) => &c.base,
                }
            }

            pub fn base_mut(&mut self) -> &mut CurveBase {
                match self {
                    $(CurveConfig::$variant(c) => &mut c.base,)+
                    CurveConfig::Custom(c) => &mut c.base,
                }
            }

            fn from_tagged(type_id: String, fields: Map<String, Value>) -> serde_json::Result<Self> {
                Ok(match type_id.as_str() {
                    $($id => CurveConfig::$variant(serde_json::from_value(Value::Object(fields))?),)+
                    _ => {
                        let base = serde_json::from_value(Value::Object(fields.clone()))?;
                        CurveConfig::Custom(CustomConfig { type_id, base, fields })
                    }
                })
            }

            fn untagged(&self) -> serde_json::Result<Value> {
                match self {
                    $(CurveConfig::$variant(c) => serde_json::to_value(c),)+
                    CurveConfig::Custom(c) => {
                        let mut value = serde_json::to_value(&c.base)?;
                        if let Value::Object(map) = &mut value {
                            for (key, field) in &c.fields {
                                map.insert(key.clone(), field.clone());
                            }
                        }
                        Ok(value)
                    }
                }
            }
        }

        $(
            impl BuiltinConfig for $config {
                const TYPE_ID: &'static str = $id;

                fn from_config(config: &CurveConfig) -> Option<&Self> {
                    match config {
                        CurveConfig::$variant(c) => Some(c),
                        _ => None,
                    }
                }
            }

            impl From<$config> for CurveConfig {
                fn from(config: $config) -> Self {
                    CurveConfig::$variant(config)
                }
            }
        )+
    };
}

curve_configs! {
    Linear(LinearConfig) => "linear",
    Sine(SineConfig) => "sine",
    Spiral(SpiralConfig) => "spiral",
    Superformula(SuperformulaConfig) => "superformula",
    Arc(ArcConfig) => "arc",
    Bezier(BezierConfig) => "bezier",
    Ellipse(EllipseConfig) => "ellipse",
    Polygon(PolygonConfig) => "polygon",
    Star(StarConfig) => "star",
    Helix(HelixConfig) => "helix",
    Parametric(ParametricConfig) => "parametric",
    Lissajous(LissajousConfig) => "lissajous",
    Polyline(PolylineConfig) => "polyline",
    Rectangle(RectangleConfig) => "rectangle",
    Cube(CubeConfig) => "cube",
    Cylinder(CylinderConfig) => "cylinder",
    Torus(TorusConfig) => "torus",
    Rose(RoseConfig) => "rose",
}

impl CurveConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<CustomConfig> for CurveConfig {
    fn from(config: CustomConfig) -> Self {
        CurveConfig::Custom(config)
    }
}

impl Serialize for CurveConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut value = self.untagged().map_err(S::Error::custom)?;
        match &mut value {
            Value::Object(map) => {
                map.insert("type".to_owned(), Value::String(self.type_id().to_owned()));
            }
            _ => return Err(S::Error::custom("curve configuration must be an object")),
        }
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CurveConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut fields = Map::deserialize(deserializer)?;
        let type_id = match fields.remove("type") {
            Some(Value::String(id)) => id,
            Some(other) => {
                return Err(D::Error::custom(format!("curve `type` must be a string, got {other}")))
            }
            None => return Err(D::Error::missing_field("type")),
        };
        CurveConfig::from_tagged(type_id, fields).map_err(D::Error::custom)
    }
}
