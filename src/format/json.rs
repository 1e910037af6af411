use super::Formatter;
use crate::domain::{LogLevel, Props};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonConfig {
    /// Empty for compact single-line output; otherwise the per-level indent.
    #[serde(default)]
    pub indent: String,
}

/// Renders each event as one JSON object: `level`, `message`, then the
/// props in order. A repeated name keeps its first position and its last value.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    indent: String,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self {
            indent: config.indent,
        }
    }

    pub fn compact() -> Self {
        Self::new(JsonConfig::default())
    }

    pub fn pretty(indent: impl Into<String>) -> Self {
        Self::new(JsonConfig {
            indent: indent.into(),
        })
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    fn object(level: LogLevel, message: &str, props: &Props) -> Value {
        let mut object = Map::with_capacity(props.len() + 2);
        object.insert("level".to_string(), Value::from(level.as_str()));
        object.insert("message".to_string(), Value::from(message));
        for prop in props {
            object.insert(prop.name.clone(), Value::from(&prop.value));
        }
        Value::Object(object)
    }

    fn write(&self, value: &Value) -> Result<Vec<u8>, serde_json::Error> {
        if self.indent.is_empty() {
            return serde_json::to_vec(value);
        }
        let mut buffer = Vec::with_capacity(128);
        let mut serializer = Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(self.indent.as_bytes()),
        );
        value.serialize(&mut serializer)?;
        Ok(buffer)
    }
}

impl Formatter for JsonFormatter {
    fn render(&self, level: LogLevel, message: &str, props: &Props) -> Vec<u8> {
        let value = Self::object(level, message, props);
        // A `Value` with string keys always serializes; keep a record anyway.
        self.write(&value).unwrap_or_else(|e| {
            let fallback = serde_json::json!({
                "level": level.as_str(),
                "message": message,
                "format_error": e.to_string(),
            });
            fallback.to_string().into_bytes()
        })
    }
}
