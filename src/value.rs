//! The injected value-serialization capability.
//!
//! The store never interprets the values it persists. Callers supply a
//! [`SessionValueFactory`] that turns a typed value into a `(value_type,
//! value)` string pair and back; the `value_type` tag is what gets stored in
//! the `value_type` column and later selects the decoder.
//!
//! [`JsonSessionValueFactory`] is the batteries-included implementation: a
//! registry mapping each registered Rust type to a stable tag and a pair of
//! serde_json encode/decode functions.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SessionStoreError;

/// A type-erased session value as handed back by the store.
///
/// Downcast with [`Box::downcast`], or use
/// [`get_session_property_as`](crate::SessionStoreProvider::get_session_property_as)
/// for the typed convenience path.
pub type BoxedSessionValue = Box<dyn Any + Send + Sync>;

/// A value in its storable form: the decoder tag plus the encoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedValue {
    /// Stable string tag identifying the decoder for `value`.
    pub value_type: String,
    /// The encoded payload.
    pub value: String,
}

/// Converts typed values to their storable representation and back.
///
/// `deserialize` returns `None` for an unknown tag or an undecodable
/// payload; the store reports both as an absent value, never as an error.
pub trait SessionValueFactory: Send + Sync {
    /// Encodes `value`, producing the tag/payload pair to persist.
    ///
    /// Fails with [`SessionStoreError::UnsupportedValue`] when no encoder is
    /// registered for the value's concrete type.
    fn serialize(
        &self,
        value: &(dyn Any + Send + Sync),
    ) -> Result<SerializedValue, SessionStoreError>;

    /// Decodes a stored `(value_type, value)` pair, or `None` when the tag
    /// is unknown or the payload does not decode.
    fn deserialize(&self, value_type: &str, value: &str) -> Option<BoxedSessionValue>;
}

type EncodeFn = fn(&(dyn Any + Send + Sync)) -> Option<serde_json::Result<String>>;
type DecodeFn = fn(&str) -> Option<BoxedSessionValue>;

/// A [`SessionValueFactory`] backed by serde_json and an explicit type
/// registry.
///
/// Each registered type gets a caller-chosen tag; the tag must stay stable
/// across deployments since it is persisted alongside every value.
///
/// ```
/// use sso_sessions_seaorm_store::JsonSessionValueFactory;
///
/// let factory = JsonSessionValueFactory::new()
///     .register::<String>("string")
///     .register::<u64>("u64");
/// ```
#[derive(Debug, Default)]
pub struct JsonSessionValueFactory {
    encoders: HashMap<TypeId, (String, EncodeFn)>,
    decoders: HashMap<String, DecodeFn>,
}

impl JsonSessionValueFactory {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under `value_type`, installing its encode and decode
    /// functions. Registering a second type under the same tag replaces the
    /// previous decoder.
    pub fn register<T>(mut self, value_type: impl Into<String>) -> Self
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let value_type = value_type.into();
        self.encoders.insert(
            TypeId::of::<T>(),
            (value_type.clone(), |value| {
                value.downcast_ref::<T>().map(serde_json::to_string)
            }),
        );
        self.decoders.insert(value_type, |raw| {
            serde_json::from_str::<T>(raw)
                .ok()
                .map(|decoded| Box::new(decoded) as BoxedSessionValue)
        });
        self
    }
}

impl SessionValueFactory for JsonSessionValueFactory {
    fn serialize(
        &self,
        value: &(dyn Any + Send + Sync),
    ) -> Result<SerializedValue, SessionStoreError> {
        let (value_type, encode) = self
            .encoders
            .get(&value.type_id())
            .ok_or(SessionStoreError::UnsupportedValue)?;
        let encoded = encode(value)
            .ok_or(SessionStoreError::UnsupportedValue)?
            .map_err(|e| SessionStoreError::Encode(e.to_string()))?;
        Ok(SerializedValue {
            value_type: value_type.clone(),
            value: encoded,
        })
    }

    fn deserialize(&self, value_type: &str, value: &str) -> Option<BoxedSessionValue> {
        self.decoders.get(value_type).and_then(|decode| decode(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_registered_types() {
        let factory = JsonSessionValueFactory::new()
            .register::<String>("string")
            .register::<u64>("u64");

        let serialized = factory.serialize(&"dark".to_string()).unwrap();
        assert_eq!(serialized.value_type, "string");

        let decoded = factory
            .deserialize(&serialized.value_type, &serialized.value)
            .unwrap();
        assert_eq!(decoded.downcast_ref::<String>().unwrap(), "dark");
    }

    #[test]
    fn unregistered_type_is_rejected() {
        let factory = JsonSessionValueFactory::new().register::<String>("string");

        let err = factory.serialize(&42u64).unwrap_err();
        assert!(matches!(err, SessionStoreError::UnsupportedValue));
    }

    #[test]
    fn unknown_tag_and_bad_payload_decode_to_none() {
        let factory = JsonSessionValueFactory::new().register::<u64>("u64");

        assert!(factory.deserialize("no-such-tag", "1").is_none());
        assert!(factory.deserialize("u64", "not a number").is_none());
    }
}
