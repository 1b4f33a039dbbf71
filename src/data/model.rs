use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// Value – a single dynamically-typed cell
// ---------------------------------------------------------------------------

/// A dynamically-typed value as it arrives from untyped sources
/// (JSON, delimited text, pixel buffers).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    Interval(Interval),
    /// Nested sequence kept opaque (e.g. an `[r, g, b, a]` pixel cell).
    Array(Vec<Value>),
}

impl Value {
    /// Whether the value is already numeric (classification, not coercion).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Interpret the value as an `f64` if it is already numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Interval(iv) => write!(f, "{iv}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(val: &JsonValue) -> Self {
        match val {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(v) = n.as_f64() {
                    Value::Float(v)
                } else {
                    Value::Str(n.to_string())
                }
            }
            JsonValue::String(s) => Value::Str(s.clone()),
            JsonValue::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            other => Value::Str(other.to_string()),
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(val: &Value) -> Self {
        match val {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Integer(i) => JsonValue::from(*i),
            // serde_json has no NaN/Infinity representation
            Value::Float(v) => serde_json::Number::from_f64(*v)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::Interval(iv) => serde_json::json!([iv.lower, iv.upper]),
            Value::Array(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
        }
    }
}

// ---------------------------------------------------------------------------
// Interval – a pair of numeric bounds
// ---------------------------------------------------------------------------

/// A value bounded below and above, supporting scalar scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Interval { lower, upper }
    }

    /// A new interval with both bounds multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Interval {
        Interval {
            lower: self.lower * factor,
            upper: self.upper * factor,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}

// ---------------------------------------------------------------------------
// List family – one shared shape, four element constraints
// ---------------------------------------------------------------------------

/// Generic ordered sequence of [`Value`]s with an optional name tag.
/// The name is carried through every transformation that preserves it,
/// always copied by value, never shared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    pub name: Option<String>,
    pub values: Vec<Value>,
}

impl List {
    pub fn new(values: Vec<Value>) -> Self {
        List { name: None, values }
    }

    pub fn with_name(name: impl Into<String>, values: Vec<Value>) -> Self {
        List {
            name: Some(name.into()),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sequence whose every element is a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberList {
    pub name: Option<String>,
    pub values: Vec<f64>,
}

impl NumberList {
    pub fn new(values: Vec<f64>) -> Self {
        NumberList { name: None, values }
    }

    pub fn with_name(name: impl Into<String>, values: Vec<f64>) -> Self {
        NumberList {
            name: Some(name.into()),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sequence whose every element is a string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringList {
    pub name: Option<String>,
    pub values: Vec<String>,
}

impl StringList {
    pub fn new(values: Vec<String>) -> Self {
        StringList { name: None, values }
    }

    pub fn with_name(name: impl Into<String>, values: Vec<String>) -> Self {
        StringList {
            name: Some(name.into()),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sequence whose every element is an [`Interval`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntervalList {
    pub name: Option<String>,
    pub values: Vec<Interval>,
}

impl IntervalList {
    pub fn new(values: Vec<Interval>) -> Self {
        IntervalList { name: None, values }
    }

    pub fn with_name(name: impl Into<String>, values: Vec<Interval>) -> Self {
        IntervalList {
            name: Some(name.into()),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// TypedList – discriminated union over the list variants
// ---------------------------------------------------------------------------

/// A list together with the narrowest element constraint its contents
/// are known to satisfy. Produced by the specialisation engine; generic
/// until proven otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedList {
    Generic(List),
    Numbers(NumberList),
    Strings(StringList),
    Intervals(IntervalList),
}

impl TypedList {
    pub fn name(&self) -> Option<&str> {
        match self {
            TypedList::Generic(l) => l.name.as_deref(),
            TypedList::Numbers(l) => l.name.as_deref(),
            TypedList::Strings(l) => l.name.as_deref(),
            TypedList::Intervals(l) => l.name.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TypedList::Generic(l) => l.len(),
            TypedList::Numbers(l) => l.len(),
            TypedList::Strings(l) => l.len(),
            TypedList::Intervals(l) => l.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short label for logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            TypedList::Generic(_) => "generic",
            TypedList::Numbers(_) => "numbers",
            TypedList::Strings(_) => "strings",
            TypedList::Intervals(_) => "intervals",
        }
    }

    /// The element at `row`, rebuilt as a dynamic [`Value`].
    pub fn value_at(&self, row: usize) -> Option<Value> {
        match self {
            TypedList::Generic(l) => l.values.get(row).cloned(),
            TypedList::Numbers(l) => l.values.get(row).map(|v| Value::Float(*v)),
            TypedList::Strings(l) => l.values.get(row).map(|s| Value::Str(s.clone())),
            TypedList::Intervals(l) => l.values.get(row).map(|iv| Value::Interval(*iv)),
        }
    }

    /// Widen back to a generic [`List`], keeping the name.
    pub fn into_generic(self) -> List {
        match self {
            TypedList::Generic(l) => l,
            TypedList::Numbers(l) => List {
                name: l.name,
                values: l.values.into_iter().map(Value::Float).collect(),
            },
            TypedList::Strings(l) => List {
                name: l.name,
                values: l.values.into_iter().map(Value::Str).collect(),
            },
            TypedList::Intervals(l) => List {
                name: l.name,
                values: l.values.into_iter().map(Value::Interval).collect(),
            },
        }
    }

    pub fn as_generic(&self) -> Option<&List> {
        match self {
            TypedList::Generic(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_numbers(&self) -> Option<&NumberList> {
        match self {
            TypedList::Numbers(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&StringList> {
        match self {
            TypedList::Strings(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_intervals(&self) -> Option<&IntervalList> {
        match self {
            TypedList::Intervals(l) => Some(l),
            _ => None,
        }
    }
}

impl From<List> for TypedList {
    fn from(l: List) -> Self {
        TypedList::Generic(l)
    }
}

impl From<NumberList> for TypedList {
    fn from(l: NumberList) -> Self {
        TypedList::Numbers(l)
    }
}

impl From<StringList> for TypedList {
    fn from(l: StringList) -> Self {
        TypedList::Strings(l)
    }
}

impl From<IntervalList> for TypedList {
    fn from(l: IntervalList) -> Self {
        TypedList::Intervals(l)
    }
}

// ---------------------------------------------------------------------------
// Table – an ordered sequence of named columns
// ---------------------------------------------------------------------------

/// Columns are [`TypedList`]s; element values never sit in a table
/// directly. All columns are assumed to share a row count, with column 0
/// authoritative where it matters (row extraction).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub name: Option<String>,
    pub columns: Vec<TypedList>,
}

impl Table {
    pub fn new(columns: Vec<TypedList>) -> Self {
        Table {
            name: None,
            columns,
        }
    }

    pub fn with_name(name: impl Into<String>, columns: Vec<TypedList>) -> Self {
        Table {
            name: Some(name.into()),
            columns,
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Row count as defined by the first column (0 for an empty table).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, TypedList::len)
    }

    pub fn column(&self, index: usize) -> Option<&TypedList> {
        self.columns.get(index)
    }
}
