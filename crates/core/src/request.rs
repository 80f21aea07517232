//! The caller's sizing request.

use serde::{Deserialize, Serialize};

/// The id value meaning "not set".
pub const UNSET_ID: u32 = 0;

/// A reference to a catalog entry by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryRef {
    /// The referenced id; [`UNSET_ID`] when absent.
    #[serde(default)]
    pub id: u32,
}

impl EntryRef {
    /// Creates a reference to `id`.
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    /// Returns true if the reference carries the unset sentinel.
    pub fn is_unset(&self) -> bool {
        self.id == UNSET_ID
    }
}

/// A sizing request.
///
/// Wire shape: `{"dimension":{"id":N},"loadtype":{"id":M},"connections":K}`.
/// Missing references default to the unset sentinel so the validator can report them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigurationRequest {
    /// The requested resource tier.
    #[serde(default)]
    pub dimension: EntryRef,

    /// The requested access-pattern profile.
    #[serde(default, rename = "loadtype")]
    pub load_type: EntryRef,

    /// Expected number of client connections.
    #[serde(default)]
    pub connections: u32,
}

impl ConfigurationRequest {
    /// Creates a request from raw ids.
    pub fn new(dimension_id: u32, load_type_id: u32, connections: u32) -> Self {
        Self {
            dimension: EntryRef::new(dimension_id),
            load_type: EntryRef::new(load_type_id),
            connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let request = ConfigurationRequest::new(3, 2, 50);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"dimension":{"id":3},"loadtype":{"id":2},"connections":50}"#
        );
    }

    #[test]
    fn test_missing_fields_default_to_unset() {
        let request: ConfigurationRequest = serde_json::from_str(r#"{"connections":5}"#).unwrap();
        assert!(request.dimension.is_unset());
        assert!(request.load_type.is_unset());
        assert_eq!(request.connections, 5);

        let request: ConfigurationRequest =
            serde_json::from_str(r#"{"dimension":{},"loadtype":{"id":1}}"#).unwrap();
        assert!(request.dimension.is_unset());
        assert_eq!(request.load_type.id, 1);
        assert_eq!(request.connections, 0);
    }

    #[test]
    fn test_negative_connections_rejected() {
        let result = serde_json::from_str::<ConfigurationRequest>(
            r#"{"dimension":{"id":1},"loadtype":{"id":1},"connections":-1}"#,
        );
        assert!(result.is_err());
    }
}
