//! # Request Properties
//!
//! Every API call carries a flat JSON object of parameters. Model methods
//! describe those parameters as named, possibly-missing values; this module
//! turns them into the [`PropertyMap`] that is handed to the client.
//!
//! ## Filtering Rules
//!
//! - [`Property::Absent`] entries are dropped entirely.
//! - Scalars (strings, numbers, booleans, chars) are sent as strings.
//! - Sequences and mappings are sent unchanged.
//!
//! ```rust
//! use novaposhta_models::props;
//! use serde_json::json;
//!
//! let page: Option<u32> = None;
//! let props = props! {
//!     "CityName" => "Kyiv",
//!     "Limit" => 20,
//!     "Page" => page,
//!     "Refs" => vec![1, 2, 3],
//! };
//!
//! assert_eq!(
//!     serde_json::Value::Object(props),
//!     json!({ "CityName": "Kyiv", "Limit": "20", "Refs": [1, 2, 3] })
//! );
//! ```

use serde_json::{Map, Number, Value};
use std::collections::{BTreeMap, HashMap};

/// Payload of a single API call, keyed by parameter name.
pub type PropertyMap = Map<String, Value>;

/// A named value before filtering.
///
/// `Absent` marks "not provided" and is distinct from a present empty value:
/// `Scalar(String::new())` and `Structured(json!([]))` are both kept.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// Not provided; the key is omitted from the payload.
    Absent,
    /// A scalar already converted to its textual form.
    Scalar(String),
    /// A sequence or mapping, passed through as-is.
    Structured(Value),
}

impl Property {
    /// Converts the property into its payload value, or `None` if absent.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Property::Absent => None,
            Property::Scalar(text) => Some(Value::String(text)),
            Property::Structured(value) => Some(value),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Property::Absent)
    }
}

/// Filters named properties into a payload.
///
/// Absent values are dropped, scalars are stringified and structured values
/// pass through unchanged. Later duplicates of a key overwrite earlier ones.
pub fn filter_properties<I, K>(properties: I) -> PropertyMap
where
    I: IntoIterator<Item = (K, Property)>,
    K: Into<String>,
{
    properties
        .into_iter()
        .filter_map(|(key, property)| property.into_value().map(|value| (key.into(), value)))
        .collect()
}

/// Builds a [`PropertyMap`] from `"Key" => value` pairs.
///
/// Each value goes through [`Property::from`], so anything convertible
/// (including `Option<T>`) can be listed directly.
#[macro_export]
macro_rules! props {
    () => {
        $crate::PropertyMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::filter_properties([
            $(($key, $crate::Property::from($value))),+
        ])
    };
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Property {
                fn from(value: $ty) -> Self {
                    Property::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_scalar!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, &str,
    &String,
);

impl From<String> for Property {
    fn from(value: String) -> Self {
        Property::Scalar(value)
    }
}

impl<T: Into<Property>> From<Option<T>> for Property {
    fn from(value: Option<T>) -> Self {
        value.map_or(Property::Absent, Into::into)
    }
}

impl From<Value> for Property {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Property::Absent,
            Value::String(text) => Property::Scalar(text),
            Value::Bool(flag) => Property::Scalar(flag.to_string()),
            Value::Number(number) => Property::Scalar(number_text(&number)),
            structured @ (Value::Array(_) | Value::Object(_)) => Property::Structured(structured),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Property {
    fn from(items: Vec<T>) -> Self {
        Property::Structured(Value::Array(items.into_iter().map(Into::into).collect()))
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Property {
    fn from(items: &[T]) -> Self {
        Property::Structured(Value::Array(items.iter().cloned().map(Into::into).collect()))
    }
}

impl From<PropertyMap> for Property {
    fn from(map: PropertyMap) -> Self {
        Property::Structured(Value::Object(map))
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Property {
    fn from(map: BTreeMap<String, T>) -> Self {
        Property::Structured(Value::Object(
            map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Property {
    fn from(map: HashMap<String, T>) -> Self {
        Property::Structured(Value::Object(
            map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }
}

// Same text as the native integer and float conversions above.
fn number_text(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        int.to_string()
    } else if let Some(uint) = number.as_u64() {
        uint.to_string()
    } else {
        number.as_f64().map_or_else(|| number.to_string(), |float| float.to_string())
    }
}
