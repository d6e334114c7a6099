use serde_json::Value;

use crate::error::DispatchError;

pub const SUCCESS_PREFIX: &str = "Meeting scheduled successfully! Meeting ID: ";
pub const ERROR_PREFIX: &str = "Error: ";

/// Text shown for a response whose body parsed as JSON.
pub fn render_result(success: bool, body: &Value) -> Result<String, DispatchError> {
    if success {
        let id = property(Some(body), "id")?;
        Ok(format!("{}{}", SUCCESS_PREFIX, display_value(id)))
    } else {
        let error = property(Some(body), "error")?;
        let message = property(error, "message")?;
        Ok(format!("{}{}", ERROR_PREFIX, display_value(message)))
    }
}

pub fn render_failure(error: &DispatchError) -> String {
    format!("{}{}", ERROR_PREFIX, error)
}

/// Property lookup with script semantics: `None` stands for `undefined`.
/// Reading through `undefined` or `null` fails; reading a missing key or a
/// key of a non-object yields `undefined`.
fn property<'a>(
    value: Option<&'a Value>,
    name: &'static str,
) -> Result<Option<&'a Value>, DispatchError> {
    match value {
        None => Err(DispatchError::NullishAccess {
            target: "undefined",
            property: name,
        }),
        Some(Value::Null) => Err(DispatchError::NullishAccess {
            target: "null",
            property: name,
        }),
        Some(Value::Object(map)) => Ok(map.get(name)),
        Some(_) => Ok(None),
    }
}

/// String conversion used when interpolating a value into display text.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                display_float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Exponent form outside `[1e-6, 1e21)`, e.g. `1e+21` and `1.5e-7`.
fn display_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    let abs = f.abs();
    if abs == 0.0 {
        "0".to_string()
    } else if abs >= 1e21 || abs < 1e-6 {
        let formatted = format!("{:e}", f);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        f.to_string()
    }
}
