//! CLI command implementations

pub mod color;
pub mod inspect;
pub mod range;

use anyhow::{Context, Result, bail};
use valkit_core::Value;

/// Parses a command-line argument as a JSON literal.
///
/// Anything that is not valid JSON is taken as a plain string, so bare words
/// like `red` or `abc` reach the checks as `str` values.
pub fn parse_value(arg: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(arg) {
        Ok(json) => Value::from(json),
        Err(_) => Value::Str(arg.to_string()),
    }
}

/// Parses a JSON argument strictly.
pub fn parse_json(arg: &str) -> Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(arg).with_context(|| format!("Invalid JSON: {arg}"))?;
    Ok(Value::from(json))
}

/// Parses a color argument.
///
/// Comma-separated input becomes a tuple of ints and floats; everything else
/// is passed through as a string (name or hex).
pub fn parse_color_spec(arg: &str) -> Result<Value> {
    if !arg.contains(',') {
        return Ok(Value::Str(arg.trim().to_string()));
    }
    let mut channels = Vec::new();
    for part in arg.split(',').map(str::trim) {
        if let Ok(i) = part.parse::<i64>() {
            channels.push(Value::Int(i));
        } else if let Ok(f) = part.parse::<f64>() {
            channels.push(Value::Float(f));
        } else {
            bail!("Invalid channel '{part}' in color '{arg}'");
        }
    }
    Ok(Value::Tuple(channels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("0.5"), Value::Float(0.5));
        assert_eq!(parse_value("255"), Value::Int(255));
        assert_eq!(parse_value("abc"), Value::Str("abc".into()));
        assert_eq!(parse_value("\"abc\""), Value::Str("abc".into()));
        assert_eq!(parse_value("[1]"), Value::List(vec![Value::Int(1)]));
    }

    #[test]
    fn test_parse_json() {
        assert!(parse_json("[1, 2").is_err());
        assert_eq!(parse_json("[]").unwrap(), Value::List(vec![]));
    }

    #[test]
    fn test_parse_color_spec() {
        assert_eq!(parse_color_spec(" red ").unwrap(), Value::Str("red".into()));
        assert_eq!(
            parse_color_spec("255, 0,0").unwrap(),
            Value::Tuple(vec![Value::Int(255), Value::Int(0), Value::Int(0)])
        );
        assert_eq!(
            parse_color_spec("1.0,0.5,0").unwrap(),
            Value::Tuple(vec![Value::Float(1.0), Value::Float(0.5), Value::Int(0)])
        );
        assert!(parse_color_spec("1,x,0").is_err());
    }
}
