//! Common ID Types
//!
//! Type-safe wrappers for database-assigned (SERIAL) identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Keys are assigned by the database, so there is no constructor that
/// invents a fresh value; an `Id` always comes from a stored row or from
/// caller input.
///
/// Usage:
/// ```
/// use kernel::id::Id;
/// struct Order;
/// type OrderId = Id<Order>;
///
/// let id = OrderId::from_raw(42);
/// assert_eq!(id.value(), 42);
/// ```
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a raw key
    pub const fn from_raw(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the raw key (for binding into queries)
    pub const fn value(&self) -> i32 {
        self.value
    }
}

// Manual impls: derives would require `T: Clone`, `T: PartialEq`, ...
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Apple;
    struct Pear;

    #[test]
    fn test_id_type_safety() {
        let apple: Id<Apple> = Id::from_raw(7);
        let pear: Id<Pear> = Id::from_raw(7);

        // Same raw value, different types; only the raw values compare
        assert_eq!(apple.value(), pear.value());
    }

    #[test]
    fn test_id_display_and_debug() {
        let id: Id<Apple> = Id::from_raw(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{:?}", id), "Id(42)");
    }

    #[test]
    fn test_id_serde() {
        let id: Id<Apple> = Id::from_raw(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let back: Id<Apple> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
