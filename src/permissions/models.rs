//! Wire models for guild roles.

use serde::{Deserialize, Serialize};

use super::role::RolePermissions;

/// A guild role as delivered by the platform gateway.
///
/// Role ids are opaque strings, unique within their guild. The bot never
/// creates or edits roles; it only observes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub permissions: RolePermissions,
    /// Display position within the guild's role list. Platform-defined
    /// ordering; carries no meaning for authorization.
    #[serde(default)]
    pub position: i32,
}

impl Role {
    /// Convenience constructor used heavily in tests.
    #[must_use]
    pub fn new(id: impl Into<String>, permissions: RolePermissions) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            permissions,
            position: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_deserializes_from_wire_json() {
        let json = r#"{"id":"1234","name":"Moderators","permissions":16,"position":2}"#;
        let role: Role = serde_json::from_str(json).unwrap();

        assert_eq!(role.id, "1234");
        assert_eq!(role.name, "Moderators");
        assert_eq!(role.permissions, RolePermissions::MANAGE_MESSAGES);
        assert_eq!(role.position, 2);
    }

    #[test]
    fn test_role_position_defaults_when_absent() {
        let json = r#"{"id":"1234","name":"Members","permissions":0}"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.position, 0);
        assert!(!role.permissions.is_privileged());
    }
}
