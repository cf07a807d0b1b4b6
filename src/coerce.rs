use serde_json::Value;

/// A successfully coerced environment value.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Json(Value),
    /// An optional variable that was unset or empty. Kept in the value
    /// mapping so callers can tell "declared but unset" from "not declared".
    Absent,
}

impl EnvValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Coerces a raw string to the value type named by `base`.
///
/// Total: every failure comes back as a reason string rather than a panic,
/// so both entry points share one per-key loop without duplicating the
/// type-specific branches.
pub(crate) fn coerce(base: &str, raw: &str) -> Result<EnvValue, String> {
    if raw.is_empty() {
        return Err("value is empty or undefined".to_owned());
    }

    match base {
        "string" => Ok(EnvValue::Str(raw.to_owned())),
        // Only finite numbers count: Rust's float parser accepts literal
        // spellings of NaN and infinity, neither of which is a usable
        // configuration value (NaN is not even equal to itself).
        "number" => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(EnvValue::Number)
            .ok_or_else(|| format!("'{raw}' is not a valid number")),
        "boolean" => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(EnvValue::Bool(true)),
            "false" | "0" => Ok(EnvValue::Bool(false)),
            _ => Err(format!(
                "'{raw}' is not a valid boolean, expected one of 'true', 'false', '1', '0'"
            )),
        },
        "json" => serde_json::from_str(raw)
            .map(EnvValue::Json)
            .map_err(|_| format!("'{raw}' is not valid JSON")),
        _ => Err(format!("unknown type: {base}")),
    }
}
