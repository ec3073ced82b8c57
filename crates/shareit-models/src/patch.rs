//! Tri-state field for partial updates.
//!
//! `Option<T>` cannot tell an omitted field from an explicit `null`; a PATCH
//! body needs both. Fields of this type must be declared with
//! `#[serde(default, skip_serializing_if = "Patch::is_absent")]` so that an
//! omitted key deserializes to `Absent` and re-serializes to nothing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key not present in the body; keep the stored value.
    Absent,
    /// Key present with `null`.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Value to store: the patched one, or `current` when absent.
    ///
    /// Only meaningful for fields already checked not to be `Null`.
    pub fn or_keep(self, current: T) -> T {
        match self {
            Self::Value(v) => v,
            Self::Absent | Self::Null => current,
        }
    }

    /// Resolve a nullable field: absent keeps `current`, null clears it.
    pub fn apply_nullable(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Absent => current,
            Self::Null => None,
            Self::Value(v) => Some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|v| v.map_or(Self::Null, Self::Value))
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Body {
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        name: Patch<String>,
    }

    #[test]
    fn omitted_key_is_absent() {
        let body: Body = serde_json::from_value(json!({})).unwrap();
        assert!(body.name.is_absent());
    }

    #[test]
    fn explicit_null_is_null() {
        let body: Body = serde_json::from_value(json!({ "name": null })).unwrap();
        assert!(body.name.is_null());
    }

    #[test]
    fn null_survives_reserialization() {
        let body: Body = serde_json::from_value(json!({ "name": null })).unwrap();
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "name": null }));

        let body: Body = serde_json::from_value(json!({})).unwrap();
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({}));
    }

    #[test]
    fn apply_nullable_clears_on_null() {
        assert_eq!(Patch::<i64>::Null.apply_nullable(Some(3)), None);
        assert_eq!(Patch::<i64>::Absent.apply_nullable(Some(3)), Some(3));
        assert_eq!(Patch::Value(4).apply_nullable(Some(3)), Some(4));
    }
}
