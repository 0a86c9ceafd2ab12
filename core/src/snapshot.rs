//! Argument snapshots.
//!
//! A snapshot is the explicit name -> value map a caller builds from its
//! bound parameters at the point of validation. There is no caller-scope
//! reflection: what the caller puts in the snapshot is all the engine sees,
//! so a snapshot must cover exactly the routine's parameters at call time.

use crate::Value;

/// The name -> value bindings for one call, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<(String, Value)>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a name to a value, appending in insertion order.
    ///
    /// Rebinding an existing name replaces its value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a bound value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Returns true if the name is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterate bound names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no names are bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a [`Snapshot`] from `name => value` pairs.
///
/// ```
/// use attest_core::{snapshot, Value};
///
/// let snap = snapshot! { title => "hello", count => 3 };
/// assert_eq!(snap.get("count"), Some(&Value::Int(3)));
/// ```
#[macro_export]
macro_rules! snapshot {
    () => {
        $crate::Snapshot::new()
    };
    ($($name:ident => $value:expr),+ $(,)?) => {{
        let mut snap = $crate::Snapshot::new();
        $(
            snap.insert(stringify!($name), $crate::Value::from($value));
        )+
        snap
    }};
}
