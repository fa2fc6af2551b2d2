//! Gateway wire events.
//!
//! JSON, internally tagged on `type`, snake_case variant names.

use serde::{Deserialize, Serialize};

use crate::permissions::Role;

/// Events the server sends to the bot.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Sent once after authentication; identifies the bot's own user.
    Ready {
        /// The bot's user ID.
        user_id: String,
    },
    /// The bot joined a guild (or reconnected); carries the full role list.
    GuildJoined {
        /// Guild ID.
        guild_id: String,
        /// Guild display name.
        guild_name: String,
        /// Complete role snapshot with permission bitsets.
        roles: Vec<Role>,
    },
    /// A single role's definition changed.
    RoleUpdated {
        /// Guild ID.
        guild_id: String,
        /// The role with its updated permission bitset.
        role: Role,
    },
    /// A message was created in a channel the bot can see.
    MessageCreated {
        /// Message ID.
        message_id: String,
        /// Channel ID.
        channel_id: String,
        /// Guild the message was sent in.
        guild_id: String,
        /// Author user ID.
        user_id: String,
        /// Role ids the author holds in the guild.
        member_role_ids: Vec<String>,
        /// Message content.
        content: String,
    },
}

/// Events the bot sends to the server.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Send a message to a channel.
    MessageCreate {
        /// Channel ID to send to.
        channel_id: String,
        /// Message content.
        content: String,
    },
}
