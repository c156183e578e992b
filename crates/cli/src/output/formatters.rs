//! Output formatters

use anyhow::Result;
use serde::Serialize;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Plain text formatter
pub struct PlainFormatter;

impl PlainFormatter {
    /// Format a value as indented `key: value` lines
    pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let json = serde_json::to_value(value)?;
        Ok(Self::format_value(&json, 0))
    }

    fn format_value(value: &serde_json::Value, indent: usize) -> String {
        let indent_str = "  ".repeat(indent);
        match value {
            serde_json::Value::Null => "null".to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(arr) if arr.iter().all(Self::is_scalar) => {
                let items: Vec<String> = arr.iter().map(|v| Self::format_value(v, 0)).collect();
                format!("[{}]", items.join(", "))
            }
            serde_json::Value::Array(arr) => {
                let items: Vec<String> = arr
                    .iter()
                    .map(|v| {
                        format!(
                            "\n{}- {}",
                            indent_str,
                            Self::format_value(v, indent + 1).trim_start()
                        )
                    })
                    .collect();
                items.concat()
            }
            serde_json::Value::Object(obj) => {
                let items: Vec<String> = obj
                    .iter()
                    .map(|(k, v)| {
                        let rendered = Self::format_value(v, indent + 1);
                        if Self::is_scalar(v) || rendered.starts_with('[') {
                            format!("{}{}: {}", indent_str, k, rendered)
                        } else {
                            format!("{}{}:\n{}", indent_str, k, rendered.trim_start_matches('\n'))
                        }
                    })
                    .collect();
                items.join("\n")
            }
        }
    }

    fn is_scalar(value: &serde_json::Value) -> bool {
        !matches!(
            value,
            serde_json::Value::Array(_) | serde_json::Value::Object(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        final_score: u8,
        values: Vec<f64>,
    }

    fn data() -> TestData {
        TestData {
            name: "Alice".to_string(),
            final_score: 80,
            values: vec![80.0, 90.0],
        }
    }

    #[test]
    fn test_json_formatter() {
        let result = JsonFormatter::format(&data()).unwrap();
        assert!(result.contains("\"final_score\": 80"));
    }

    #[test]
    fn test_plain_formatter() {
        let result = PlainFormatter::format(&data()).unwrap();
        assert!(result.contains("name: Alice"));
        assert!(result.contains("final_score: 80"));
        assert!(result.contains("values: [80.0, 90.0]"));
    }
}
