//! Field adapters for `#[serde(deserialize_with = "...")]`.
//!
//! These route schema-less fields of a larger serde type through the lexical
//! decoder: the field's JSON text is captured verbatim and classified from
//! its literals, so `1.0` stays `Float64` and `3000000000` stays `Int64`.
//!
//! ```
//! use json_joy_json_typed::{field, DynamicMap, DynamicValue};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Envelope {
//!     #[serde(rename = "orderWebSite")]
//!     order_web_site: String,
//!     #[serde(deserialize_with = "field::deserialize_map")]
//!     data: DynamicMap,
//! }
//!
//! let env: Envelope =
//!     serde_json::from_str(r#"{"orderWebSite":"x","data":{"total":153}}"#).unwrap();
//! assert_eq!(env.data["total"], DynamicValue::Int32(153));
//! ```
//!
//! The adapters need the raw JSON text, so they only work with
//! `serde_json` deserializers.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

use crate::{DynamicList, DynamicMap, DynamicValue};

/// Any JSON value.
pub fn deserialize_value<'de, D>(deserializer: D) -> Result<DynamicValue, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    crate::from_str(raw.get()).map_err(D::Error::custom)
}

/// A JSON object.
pub fn deserialize_map<'de, D>(deserializer: D) -> Result<DynamicMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    crate::decode_map(raw.get()).map_err(D::Error::custom)
}

/// A JSON array.
pub fn deserialize_list<'de, D>(deserializer: D) -> Result<DynamicList, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    crate::decode_list(raw.get()).map_err(D::Error::custom)
}
