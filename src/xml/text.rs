//! Text-level codecs for the WPML vocabulary.
//!
//! The format encodes booleans as the literal digits `0`/`1` and placemark
//! geometry as fixed-6-decimal `"{lng},{lat}"` text, longitude first. These
//! helpers are the single place those rules live; the serde models reference
//! them with `#[serde(with = ...)]` and the wire conversion calls the
//! coordinate functions directly.

/// Serde codec for a required boolean encoded as `0`/`1`.
pub mod bool_int {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(serde::de::Error::custom(format!(
                "expected 0 or 1, got {other}"
            ))),
        }
    }
}

/// Serde codec for an optional boolean encoded as `0`/`1`.
///
/// Pair with `#[serde(default, skip_serializing_if = "Option::is_none")]` so
/// an unset value produces no element at all.
pub mod bool_int_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<bool>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            // skip_serializing_if makes the None arm unreachable in practice
            None => serializer.serialize_none(),
            Some(v) => serializer.serialize_u8(u8::from(*v)),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            other => Err(serde::de::Error::custom(format!(
                "expected 0 or 1, got {other}"
            ))),
        }
    }
}

/// Formats placemark geometry as the contract text: six decimal places,
/// comma-separated, longitude first.
pub fn format_coordinates(longitude: f64, latitude: f64) -> String {
    format!("{longitude:.6},{latitude:.6}")
}

/// Parses `"{lng},{lat}"` coordinate text. Tolerates surrounding whitespace
/// in each component; rejects missing or non-numeric components.
pub fn parse_coordinates(text: &str) -> Result<(f64, f64), String> {
    let mut parts = text.split(',').map(str::trim);
    let mut next = |name: &str| {
        parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| format!("coordinates missing {name}"))?
            .parse::<f64>()
            .map_err(|e| format!("coordinates {name}: {e}"))
    };
    let longitude = next("longitude")?;
    let latitude = next("latitude")?;
    Ok((longitude, latitude))
}
