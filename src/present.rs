use serde::Serialize;
use std::fmt;

pub const UNAVAILABLE: &str = "unavailable";

/// A raw value arriving at the display boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Missing,
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
}

/// A value ready for display. Missing data is a state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Presented {
    Unavailable,
    Number(f64),
    Text(String),
}

impl Serialize for Presented {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Presented::Unavailable => serializer.serialize_str(UNAVAILABLE),
            Presented::Number(value) => serializer.serialize_f64(*value),
            Presented::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// Sanitizes a value for display.
///
/// `None` and NaN become [`Presented::Unavailable`]. Floats are rounded to two
/// decimals, half away from zero on `value * 100`, so `12.345` shows as
/// `12.35`. Integers are kept as numbers; bools and strings pass through.
pub fn present(value: impl Into<RawValue>) -> Presented {
    match value.into() {
        RawValue::Missing => Presented::Unavailable,
        RawValue::Float(value) if value.is_nan() => Presented::Unavailable,
        RawValue::Float(value) => Presented::Number(round2(value)),
        RawValue::Int(value) => Presented::Number(value as f64),
        RawValue::Bool(value) => Presented::Text(value.to_string()),
        RawValue::Text(value) => Presented::Text(value),
    }
}

fn round2(value: f64) -> f64 {
    if value.is_infinite() {
        return value;
    }
    (value * 100.0).round() / 100.0
}

impl fmt::Display for Presented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presented::Unavailable => f.write_str(UNAVAILABLE),
            Presented::Number(value) => write!(f, "{value:.2}"),
            Presented::Text(value) => f.write_str(value),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_nan_are_unavailable() {
        assert_eq!(present(f64::NAN), Presented::Unavailable);
        assert_eq!(present(None::<f64>), Presented::Unavailable);
        assert_eq!(present(None::<String>), Presented::Unavailable);
        assert_eq!(present(Some(f64::NAN)), Presented::Unavailable);
        assert_eq!(present(f64::NAN).to_string(), "unavailable");
    }

    #[test]
    fn floats_round_half_away_from_zero() {
        assert_eq!(present(12.345), Presented::Number(12.35));
        assert_eq!(present(-12.345), Presented::Number(-12.35));
        assert_eq!(present(72.3), Presented::Number(72.3));
        assert_eq!(present(0.004), Presented::Number(0.0));
        assert_eq!(present(12.345).to_string(), "12.35");
        assert_eq!(present(81.0).to_string(), "81.00");
    }

    #[test]
    fn integers_stay_numeric() {
        assert_eq!(present(60_i64), Presented::Number(60.0));
        assert_eq!(present(Some(7_i64)).to_string(), "7.00");
    }

    #[test]
    fn other_values_pass_through() {
        assert_eq!(present("Neutral"), Presented::Text("Neutral".to_string()));
        assert_eq!(
            present(Some("強気".to_string())).to_string(),
            "強気".to_string()
        );
        assert_eq!(present(true), Presented::Text("true".to_string()));
    }

    #[test]
    fn infinities_are_kept() {
        assert_eq!(present(f64::INFINITY), Presented::Number(f64::INFINITY));
    }

    #[test]
    fn serializes_unavailable_as_sentinel_string() {
        let rendered = serde_json::to_string(&vec![
            present(None::<f64>),
            present(1.005),
            present("x"),
        ])
        .expect("should serialize");
        assert!(rendered.starts_with("[\"unavailable\","));
        assert!(rendered.ends_with(",\"x\"]"));
    }
}
