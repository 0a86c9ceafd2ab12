//! Value types for attest snapshots.
//!
//! A `Value` is the runtime representation of one argument at the point of
//! validation. Attest supports scalar types (String, Int, Float, Bool),
//! container types (Seq, Map) and opaque capability objects (Object).

use std::fmt;
use std::sync::Arc;

/// An object that can report which named operations it supports.
///
/// This is the structural stand-in for a duck-typed "responds to" check:
/// the `with_capabilities` matcher asks the object directly rather than
/// reflecting over it.
pub trait Capable: Send + Sync {
    /// Returns true if this object supports the named operation.
    fn responds_to(&self, operation: &str) -> bool;
}

/// A stock [`Capable`] implementation backed by an explicit operation list.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    operations: Vec<String>,
}

impl Capabilities {
    /// Create a capability set from a list of operation names.
    pub fn new<I, S>(operations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operations: operations.into_iter().map(Into::into).collect(),
        }
    }
}

impl Capable for Capabilities {
    fn responds_to(&self, operation: &str) -> bool {
        self.operations.iter().any(|op| op == operation)
    }
}

/// The runtime type of a [`Value`].
///
/// Tags are what declarations are written in terms of: an exact-type
/// constraint is a single tag, a union constraint is a list of tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TypeTag {
    /// The null/missing value.
    Null,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// UTF-8 string.
    String,
    /// Ordered sequence of values.
    Seq,
    /// Key -> value mapping.
    Map,
    /// Opaque capability object.
    Object,
}

impl TypeTag {
    /// Returns the display name of this tag.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Null => "Null",
            TypeTag::Bool => "Bool",
            TypeTag::Int => "Int",
            TypeTag::Float => "Float",
            TypeTag::String => "String",
            TypeTag::Seq => "Seq",
            TypeTag::Map => "Map",
            TypeTag::Object => "Object",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value bound to an argument at the point of validation.
#[derive(Clone)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
    /// Insertion-ordered key -> value mapping.
    Map(Vec<(String, Value)>),
    /// Opaque object checked through its [`Capable`] implementation.
    Object(Arc<dyn Capable>),
}

impl Value {
    /// Wrap a [`Capable`] object as a value.
    pub fn object(capable: impl Capable + 'static) -> Self {
        Value::Object(Arc::new(capable))
    }

    /// Returns the runtime type tag of this value.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::String(_) => TypeTag::String,
            Value::Seq(_) => TypeTag::Seq,
            Value::Map(_) => TypeTag::Map,
            Value::Object(_) => TypeTag::Object,
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the elements if this is a Seq value.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is a Map value.
    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Get the capability object if this is an Object value.
    pub fn as_object(&self) -> Option<&Arc<dyn Capable>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key if this is a Map value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Object(_) => write!(f, "<object>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(fl) => f.debug_tuple("Float").field(fl).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Value::Object(_) => f.write_str("Object(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // Objects are opaque; equality is identity.
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(entries: Vec<(String, Value)>) -> Self {
        Value::Map(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Build a `Vec<Value>` suitable for `Value::Seq` from mixed literals.
#[macro_export]
macro_rules! seq {
    () => {
        Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        vec![$($crate::Value::from($item)),+]
    };
}

/// Build a `Value::Map` from `key => value` pairs, preserving insertion order.
#[macro_export]
macro_rules! map {
    () => {
        $crate::Value::Map(Vec::new())
    };
    ($($key:ident => $value:expr),+ $(,)?) => {
        $crate::Value::Map(vec![
            $((stringify!($key).to_string(), $crate::Value::from($value))),+
        ])
    };
}
