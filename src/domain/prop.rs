use serde::Serialize;
use std::fmt;

/// Value carried by a [`Prop`].
///
/// A closed set of shapes; formatters coerce each one to their wire form
/// without inspecting types at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Str(s) => f.write_str(s),
            PropValue::Int(n) => write!(f, "{n}"),
            PropValue::UInt(n) => write!(f, "{n}"),
            PropValue::Float(n) => write!(f, "{n}"),
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::List(items) => write!(f, "[{}]", items.join(" ")),
        }
    }
}

impl From<&PropValue> for serde_json::Value {
    fn from(value: &PropValue) -> Self {
        match value {
            PropValue::Str(s) => serde_json::Value::from(s.as_str()),
            PropValue::Int(n) => serde_json::Value::from(*n),
            PropValue::UInt(n) => serde_json::Value::from(*n),
            // Non-finite floats become null.
            PropValue::Float(n) => serde_json::Value::from(*n),
            PropValue::Bool(b) => serde_json::Value::from(*b),
            PropValue::List(items) => serde_json::Value::from(items.clone()),
        }
    }
}

macro_rules! prop_value_from {
    ($variant:ident, $target:ty; $($source:ty),*) => {
        $(
            impl From<$source> for PropValue {
                fn from(value: $source) -> Self {
                    PropValue::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

prop_value_from!(Int, i64; i8, i16, i32, i64);
prop_value_from!(UInt, u64; u8, u16, u32, u64);
prop_value_from!(Float, f64; f32, f64);
prop_value_from!(Bool, bool; bool);
prop_value_from!(Str, String; String, &str, char);

impl From<usize> for PropValue {
    fn from(value: usize) -> Self {
        PropValue::UInt(value as u64)
    }
}

impl From<isize> for PropValue {
    fn from(value: isize) -> Self {
        PropValue::Int(value as i64)
    }
}

impl From<&String> for PropValue {
    fn from(value: &String) -> Self {
        PropValue::Str(value.clone())
    }
}

impl From<Vec<String>> for PropValue {
    fn from(value: Vec<String>) -> Self {
        PropValue::List(value)
    }
}

impl From<Vec<&str>> for PropValue {
    fn from(value: Vec<&str>) -> Self {
        PropValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PropValue {
    fn from(value: &[&str]) -> Self {
        PropValue::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropValue {
    fn from(value: [&str; N]) -> Self {
        PropValue::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

/// A named value attached to a log event.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub name: String,
    pub value: PropValue,
}

impl Prop {
    pub fn new(name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered, append-only set of properties for a single event.
///
/// Names need not be unique; insertion order is what formatters emit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    props: Vec<Prop>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prop> {
        self.props.iter()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.props.iter().find(|p| p.name == name).map(|p| &p.value)
    }
}

impl FromIterator<Prop> for Props {
    fn from_iter<I: IntoIterator<Item = Prop>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Prop>> for Props {
    fn from(props: Vec<Prop>) -> Self {
        Self { props }
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = &'a Prop;
    type IntoIter = std::slice::Iter<'a, Prop>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_preserve_insertion_order_and_duplicates() {
        let props: Props = vec![
            Prop::new("b", 1),
            Prop::new("a", "x"),
            Prop::new("b", 2),
        ]
        .into();

        let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
        assert_eq!(props.len(), 3);
        assert_eq!(props.get("b"), Some(&PropValue::Int(1)));
        assert_eq!(props.get("missing"), None);
    }

    #[test]
    fn test_conversions_pick_natural_variant() {
        assert_eq!(PropValue::from(100), PropValue::Int(100));
        assert_eq!(PropValue::from(7u32), PropValue::UInt(7));
        assert_eq!(PropValue::from(1.5), PropValue::Float(1.5));
        assert_eq!(PropValue::from(true), PropValue::Bool(true));
        assert_eq!(PropValue::from("hi"), PropValue::Str("hi".to_string()));
        assert_eq!(
            PropValue::from(vec!["hello", "world"]),
            PropValue::List(vec!["hello".to_string(), "world".to_string()])
        );
    }

    #[test]
    fn test_display_coercion() {
        assert_eq!(PropValue::from("hello world").to_string(), "hello world");
        assert_eq!(PropValue::from(-3).to_string(), "-3");
        assert_eq!(PropValue::from(2.5).to_string(), "2.5");
        assert_eq!(PropValue::from(false).to_string(), "false");
        assert_eq!(PropValue::from(["hello", "world"]).to_string(), "[hello world]");
    }

    #[test]
    fn test_json_conversion() {
        assert_eq!(serde_json::Value::from(&PropValue::from(100)), serde_json::json!(100));
        assert_eq!(
            serde_json::Value::from(&PropValue::from(vec!["a", "b"])),
            serde_json::json!(["a", "b"])
        );
        assert_eq!(
            serde_json::Value::from(&PropValue::Float(f64::NAN)),
            serde_json::Value::Null
        );
    }
}
