//! Newtype wrappers for the identifiers of menu records.
//!
//! Categories, items and allergens are referenced by id across records. Keeping
//! them as distinct types prevents an item from being looked up with a category
//! id by accident. Ids arrive from the persistence layer either as strings or as
//! integers, so all of them deserialize from both.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::sync::Arc;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(id: impl Into<Arc<str>>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.into())
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n.to_string().into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(IdVisitor).map(Self::from)
            }
        }
    };
}

struct IdVisitor;

impl<'de> de::Visitor<'de> for IdVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or integer id")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }
}

record_id!(
    /// Identifier of a menu category.
    CategoryId
);

record_id!(
    /// Identifier of a single menu item.
    ItemId
);

record_id!(
    /// Identifier of an allergen in the restaurant's allergen catalog.
    AllergenId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id1 = CategoryId::new("starters");
        let id2 = CategoryId::from("starters");
        let id3 = CategoryId::from(String::from("starters"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "starters");
    }

    #[test]
    fn test_deserialize_from_string_and_integer() {
        let from_str: ItemId = serde_json::from_str("\"a-17\"").unwrap();
        let from_int: ItemId = serde_json::from_str("17").unwrap();

        assert_eq!(from_str.as_str(), "a-17");
        assert_eq!(from_int, ItemId::from(17u64));
    }

    #[test]
    fn test_hash_map_usage() {
        use std::collections::HashMap;

        let mut counts = HashMap::new();
        counts.insert(CategoryId::new("mains"), 3);
        counts.insert(CategoryId::new("desserts"), 2);

        assert_eq!(counts.get(&CategoryId::new("mains")), Some(&3));
    }
}
