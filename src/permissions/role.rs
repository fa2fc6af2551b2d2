//! Role-level permissions using bitflags.
//!
//! Permissions are organized into categories:
//! - Content (bits 0-3): Message and media permissions
//! - Moderation (bits 4-7): Member and message moderation
//! - Management (bits 8-11): Guild administration permissions
//! - Administrator (bit 12): Implicit grant of everything

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Guild role permissions represented as a 64-bit bitfield.
    ///
    /// Crosses the gateway wire as a raw integer; unknown bits are
    /// truncated on decode to stay forward compatible.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RolePermissions: u64 {
        // === Content (bits 0-3) ===
        /// Permission to send text messages in channels
        const SEND_MESSAGES    = 1 << 0;
        /// Permission to embed links in messages
        const EMBED_LINKS      = 1 << 1;
        /// Permission to attach files to messages
        const ATTACH_FILES     = 1 << 2;
        /// Permission to add reactions to messages
        const ADD_REACTIONS    = 1 << 3;

        // === Moderation (bits 4-7) ===
        /// Permission to delete messages from other members
        const MANAGE_MESSAGES  = 1 << 4;
        /// Permission to kick members from the guild
        const KICK_MEMBERS     = 1 << 5;
        /// Permission to ban members from the guild
        const BAN_MEMBERS      = 1 << 6;
        /// Permission to timeout members (temporary mute)
        const TIMEOUT_MEMBERS  = 1 << 7;

        // === Management (bits 8-11) ===
        /// Permission to create, edit, and delete channels
        const MANAGE_CHANNELS  = 1 << 8;
        /// Permission to create, edit, and delete roles
        const MANAGE_ROLES     = 1 << 9;
        /// Permission to modify guild settings
        const MANAGE_GUILD     = 1 << 10;
        /// Permission to view the guild audit log
        const VIEW_AUDIT_LOG   = 1 << 11;

        // === Administrator (bit 12) ===
        /// Full administrative access to the guild
        const ADMINISTRATOR    = 1 << 12;
    }
}

impl RolePermissions {
    /// Flags that qualify a role as administrative for the bot.
    ///
    /// This is the single point of policy: widening or narrowing what the
    /// bot treats as an admin role means editing this constant only.
    pub const PRIVILEGED: Self = Self::MANAGE_MESSAGES.union(Self::ADMINISTRATOR);

    /// Create permissions from a raw wire value.
    ///
    /// Bits the bot does not know about are silently dropped so that newer
    /// platform versions can add permissions without breaking older bots.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self::from_bits_truncate(value)
    }

    /// Check if this permission set includes the specified permission(s).
    #[must_use]
    pub const fn has(self, permission: Self) -> bool {
        self.contains(permission)
    }

    /// Whether this bitset qualifies its role as administrative.
    ///
    /// Any single [`Self::PRIVILEGED`] flag is sufficient.
    #[must_use]
    pub const fn is_privileged(self) -> bool {
        self.intersects(Self::PRIVILEGED)
    }
}

impl Default for RolePermissions {
    fn default() -> Self {
        Self::empty()
    }
}

// Wire format is a plain integer, not bitflags' flag-name strings.
impl Serialize for RolePermissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for RolePermissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u64::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}
