//! What a log call carries before it reaches the writer.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::num::FpCategory;
use std::str::FromStr;

/// Arguments of one log call.
///
/// `Lazy` defers message construction until the gate has been checked, so a
/// disabled level never pays for formatting.
pub enum Message<'a> {
    /// Passed through to the writer unchanged.
    Args(Vec<Value>),
    /// Invoked at most once, and only if the level is enabled.
    Lazy(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> Message<'a> {
    /// Wraps a supplier whose result becomes the sole message argument.
    pub fn lazy(supplier: impl FnOnce() -> String + 'a) -> Self {
        Self::Lazy(Box::new(supplier))
    }

    /// Runs the supplier (if any) and returns the arguments to dispatch.
    #[must_use]
    pub fn resolve(self) -> Vec<Value> {
        match self {
            Self::Args(args) => args,
            Self::Lazy(supplier) => vec![Value::String(supplier())],
        }
    }

    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Args(args) => f.debug_tuple("Args").field(args).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<&str> for Message<'_> {
    fn from(s: &str) -> Self {
        Self::Args(vec![Value::String(s.to_string())])
    }
}

impl From<String> for Message<'_> {
    fn from(s: String) -> Self {
        Self::Args(vec![Value::String(s)])
    }
}

impl From<&String> for Message<'_> {
    fn from(s: &String) -> Self {
        Self::Args(vec![Value::String(s.clone())])
    }
}

impl From<Value> for Message<'_> {
    fn from(value: Value) -> Self {
        Self::Args(vec![value])
    }
}

impl From<Vec<Value>> for Message<'_> {
    fn from(args: Vec<Value>) -> Self {
        Self::Args(args)
    }
}

/// Builds a multi-argument [`Message`](crate::Message) from anything `serde_json::json!` accepts.
///
/// ```
/// use streamlog::args;
///
/// let msg = args!["user", 42, ["a", "b"]];
/// assert!(!msg.is_lazy());
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        $crate::Message::Args(::std::vec![$($crate::__json!($arg)),*])
    };
}

/// Unit suffix of a metric line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Millis,
    Seconds,
    /// Plain count.
    Count,
    Decimal,
    Percent,
    PerMille,
}

impl Unit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Millis => "ms",
            Self::Seconds => "s",
            Self::Count => "n",
            Self::Decimal => "dec",
            Self::Percent => "cent",
            Self::PerMille => "mil",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ms" => Ok(Self::Millis),
            "s" => Ok(Self::Seconds),
            "n" => Ok(Self::Count),
            "dec" => Ok(Self::Decimal),
            "cent" => Ok(Self::Percent),
            "mil" => Ok(Self::PerMille),
            _ => Err(format!("unknown metric unit: '{s}'")),
        }
    }
}

/// A metric is named either by a plain string or by an ordered set of `key=value` tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricName {
    Name(String),
    Tags(Vec<(String, String)>),
}

impl MetricName {
    pub fn tags<K, V>(tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        Self::Tags(
            tags.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Tags render as `k=v` pairs joined by commas, in insertion order.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::Tags(tags) => tags
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for MetricName {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for MetricName {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Vec<(String, String)>> for MetricName {
    fn from(tags: Vec<(String, String)>) -> Self {
        Self::Tags(tags)
    }
}

impl<K: fmt::Display, V: fmt::Display, const N: usize> From<[(K, V); N]> for MetricName {
    fn from(tags: [(K, V); N]) -> Self {
        Self::tags(tags)
    }
}

impl<K: fmt::Display, V: fmt::Display> From<BTreeMap<K, V>> for MetricName {
    fn from(tags: BTreeMap<K, V>) -> Self {
        Self::tags(tags)
    }
}

impl From<serde_json::Map<String, Value>> for MetricName {
    fn from(tags: serde_json::Map<String, Value>) -> Self {
        Self::Tags(
            tags.into_iter()
                .map(|(k, v)| match v {
                    Value::String(s) => (k, s),
                    other => (k, other.to_string()),
                })
                .collect(),
        )
    }
}

/// Numeric part of a metric line.
///
/// Converts from every primitive integer and float; 64-bit integers round to
/// the nearest `f64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct MetricValue(f64);

impl MetricValue {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Zero and NaN carry no reading and are left off the line.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self.0.classify(), FpCategory::Zero | FpCategory::Nan)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.classify() {
            FpCategory::Nan => f.write_str("NaN"),
            FpCategory::Infinite if self.0.is_sign_negative() => f.write_str("-Infinity"),
            FpCategory::Infinite => f.write_str("Infinity"),
            _ => write!(f, "{}", self.0),
        }
    }
}

macro_rules! metric_value_from {
    ($($t:ty),*) => {$(
        impl From<$t> for MetricValue {
            fn from(value: $t) -> Self {
                Self(f64::from(value))
            }
        }
    )*};
}

metric_value_from!(f64, f32, i8, i16, i32, u8, u16, u32);

macro_rules! metric_value_from_wide {
    ($($t:ty),*) => {$(
        impl From<$t> for MetricValue {
            #[allow(clippy::cast_precision_loss)]
            fn from(value: $t) -> Self {
                Self(value as f64)
            }
        }
    )*};
}

metric_value_from_wide!(i64, u64, isize, usize);

/// Separates name, value, and unit on a metric line.
pub const METRIC_DELIMITER: &str = "|";

/// Joins `[name, value, unit]` with `|`, leaving out an empty name, a zero or NaN value, and a missing unit.
#[must_use]
pub fn metric_line(name: &MetricName, value: impl Into<MetricValue>, unit: Option<Unit>) -> String {
    let name = name.render();
    let value = value.into();
    let value = (!value.is_empty()).then(|| value.to_string());

    [
        (!name.is_empty()).then_some(name),
        value,
        unit.map(|u| u.as_str().to_string()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(METRIC_DELIMITER)
}
