//! Gateway event ingestion and command gating.
//!
//! All registry mutation and every authorization decision goes through
//! [`Dispatcher::handle`], so the registry's concurrency contract lives at
//! one boundary instead of being scattered across handler call sites.

use std::sync::OnceLock;

use tracing::{debug, error, warn};

use crate::gateway::{Gateway, ServerEvent};
use crate::registry::AdminRoleRegistry;

/// Routes gateway events into the registry and gates command execution.
pub struct Dispatcher<G: Gateway> {
    registry: AdminRoleRegistry,
    gateway: G,
    /// Our own user id, learned from the `ready` event. Messages we
    /// authored are ignored.
    self_user_id: OnceLock<String>,
}

impl<G: Gateway> Dispatcher<G> {
    /// Create a dispatcher with an empty registry.
    pub fn new(gateway: G) -> Self {
        Self {
            registry: AdminRoleRegistry::new(),
            gateway,
            self_user_id: OnceLock::new(),
        }
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &AdminRoleRegistry {
        &self.registry
    }

    /// Ingest one gateway event.
    ///
    /// Never fails: authorization denial is an expected outcome, and a
    /// failed response delivery is logged and dropped rather than retried.
    pub async fn handle(&self, event: ServerEvent) {
        match event {
            ServerEvent::Ready { user_id } => {
                debug!(user_id = %user_id, "Gateway ready");
                let _ = self.self_user_id.set(user_id);
            }
            ServerEvent::GuildJoined {
                guild_id, roles, ..
            } => {
                self.registry.initialize_guild(&guild_id, &roles);
            }
            ServerEvent::RoleUpdated { guild_id, role } => {
                debug!(guild_id = %guild_id, role_id = %role.id, "Detected role change");
                self.registry.apply_role_update(&guild_id, &role);
            }
            ServerEvent::MessageCreated {
                channel_id,
                guild_id,
                user_id,
                member_role_ids,
                ..
            } => {
                self.handle_command(&channel_id, &guild_id, &user_id, &member_role_ids)
                    .await;
            }
        }
    }

    /// Gate and execute an inbound command.
    ///
    /// The illustrative action echoes the caller's role ids back to the
    /// channel; the gate in front of it is what matters.
    async fn handle_command(
        &self,
        channel_id: &str,
        guild_id: &str,
        user_id: &str,
        member_role_ids: &[String],
    ) {
        if self.self_user_id.get().is_some_and(|own| own == user_id) {
            return;
        }

        if !self.registry.is_authorized(guild_id, member_role_ids) {
            warn!(
                guild_id = %guild_id,
                user_id = %user_id,
                "User not authorized to use the bot"
            );
            return;
        }

        let reply = member_role_ids.join(",");
        if let Err(e) = self.gateway.send_message(channel_id, &reply).await {
            error!("Unable to send message: {}", e);
        }
    }
}
