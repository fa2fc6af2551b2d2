//! Per-guild admin role tracking.
//!
//! Maps each guild to the set of role ids currently classified as
//! administrative, kept in sync with the platform through full role
//! snapshots (guild join) and single-role update events. Uses `DashMap`
//! so snapshot, update, and authorization paths can run concurrently;
//! each guild's set is mutated under its shard's write lock, so a
//! read-test-mutate sequence for one guild is atomic.
//!
//! The registry is memory-only. A guild that was never seen behaves as an
//! empty set; unknown guilds and roles are valid first sightings, not
//! errors.

use std::collections::HashSet;

use dashmap::DashMap;
use tracing::debug;

use crate::permissions::Role;

/// Thread-safe map of guild id to admin role ids.
#[derive(Debug, Default)]
pub struct AdminRoleRegistry {
    guilds: DashMap<String, HashSet<String>>,
}

impl AdminRoleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            guilds: DashMap::new(),
        }
    }

    /// Replace a guild's admin role set from a full role snapshot.
    ///
    /// Roles failing the privilege classifier are simply excluded.
    /// Idempotent: reseeding with the same snapshot yields the same set.
    pub fn initialize_guild(&self, guild_id: &str, roles: &[Role]) {
        let admins: HashSet<String> = roles
            .iter()
            .filter(|role| role.permissions.is_privileged())
            .map(|role| role.id.clone())
            .collect();

        debug!(
            guild_id = %guild_id,
            admin_roles = admins.len(),
            total_roles = roles.len(),
            "Seeded admin roles from guild snapshot"
        );

        self.guilds.insert(guild_id.to_owned(), admins);
    }

    /// Apply a single role definition change.
    ///
    /// A role that lost its qualifying permission is dropped from the set;
    /// a role that holds one is added if absent. Replaying the same event
    /// converges to the same membership. A guild not yet seen starts from
    /// an empty set.
    pub fn apply_role_update(&self, guild_id: &str, role: &Role) {
        let privileged = role.permissions.is_privileged();

        // Entry guard holds the shard write lock for the whole
        // read-test-mutate sequence.
        let mut admins = self.guilds.entry(guild_id.to_owned()).or_default();

        if privileged {
            if admins.insert(role.id.clone()) {
                debug!(
                    guild_id = %guild_id,
                    role_id = %role.id,
                    "Role gained admin privileges"
                );
            }
        } else if admins.remove(&role.id) {
            debug!(
                guild_id = %guild_id,
                role_id = %role.id,
                "Role lost admin privileges"
            );
        }
    }

    /// Whether a role is currently tracked as administrative.
    ///
    /// Unknown guilds and unknown roles both resolve to `false`.
    #[must_use]
    pub fn contains(&self, guild_id: &str, role_id: &str) -> bool {
        self.guilds
            .get(guild_id)
            .is_some_and(|admins| admins.contains(role_id))
    }

    /// Whether an actor holding the given role ids may invoke privileged
    /// commands in a guild.
    ///
    /// True iff at least one held role is in the guild's admin set.
    /// An actor with no roles, or a guild with no tracked admins, is
    /// denied without error.
    #[must_use]
    pub fn is_authorized(&self, guild_id: &str, actor_role_ids: &[String]) -> bool {
        self.guilds.get(guild_id).is_some_and(|admins| {
            actor_role_ids.iter().any(|role_id| admins.contains(role_id))
        })
    }

    /// Number of admin roles currently tracked for a guild.
    #[must_use]
    pub fn admin_role_count(&self, guild_id: &str) -> usize {
        self.guilds.get(guild_id).map_or(0, |admins| admins.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::RolePermissions;

    fn admin_role(id: &str) -> Role {
        Role::new(id, RolePermissions::ADMINISTRATOR)
    }

    fn plain_role(id: &str) -> Role {
        Role::new(id, RolePermissions::SEND_MESSAGES)
    }

    #[test]
    fn test_snapshot_keeps_only_privileged_roles() {
        let registry = AdminRoleRegistry::new();
        registry.initialize_guild(
            "g1",
            &[
                plain_role("r1"),
                admin_role("r2"),
                Role::new("r3", RolePermissions::MANAGE_MESSAGES),
            ],
        );

        assert!(!registry.contains("g1", "r1"));
        assert!(registry.contains("g1", "r2"));
        assert!(registry.contains("g1", "r3"));
        assert_eq!(registry.admin_role_count("g1"), 2);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let registry = AdminRoleRegistry::new();
        let roles = [plain_role("r1"), admin_role("r2")];

        registry.initialize_guild("g1", &roles);
        let first = registry.admin_role_count("g1");

        registry.initialize_guild("g1", &roles);
        assert_eq!(registry.admin_role_count("g1"), first);
        assert!(registry.contains("g1", "r2"));
        assert!(!registry.contains("g1", "r1"));
    }

    #[test]
    fn test_reseeding_replaces_previous_set() {
        let registry = AdminRoleRegistry::new();
        registry.initialize_guild("g1", &[admin_role("old")]);
        registry.initialize_guild("g1", &[admin_role("new")]);

        assert!(!registry.contains("g1", "old"));
        assert!(registry.contains("g1", "new"));
    }

    #[test]
    fn test_update_promotes_unseen_role() {
        let registry = AdminRoleRegistry::new();
        registry.initialize_guild("g1", &[plain_role("r1")]);

        registry.apply_role_update("g1", &admin_role("r1"));
        assert!(registry.contains("g1", "r1"));
    }

    #[test]
    fn test_update_revokes_demoted_role() {
        let registry = AdminRoleRegistry::new();
        registry.initialize_guild("g1", &[admin_role("r1")]);
        assert!(registry.contains("g1", "r1"));

        registry.apply_role_update("g1", &plain_role("r1"));
        assert!(!registry.contains("g1", "r1"));
    }

    #[test]
    fn test_update_replay_converges() {
        let registry = AdminRoleRegistry::new();

        for _ in 0..5 {
            registry.apply_role_update("g1", &admin_role("r1"));
        }
        assert!(registry.contains("g1", "r1"));
        assert_eq!(registry.admin_role_count("g1"), 1);

        for _ in 0..5 {
            registry.apply_role_update("g1", &plain_role("r1"));
        }
        assert!(!registry.contains("g1", "r1"));
        assert_eq!(registry.admin_role_count("g1"), 0);
    }

    #[test]
    fn test_update_for_unknown_guild_starts_empty() {
        let registry = AdminRoleRegistry::new();

        registry.apply_role_update("fresh-guild", &admin_role("r1"));
        assert!(registry.contains("fresh-guild", "r1"));

        // Non-privileged update for an unknown role in an unknown guild
        // is a no-op, not a fault.
        registry.apply_role_update("other-guild", &plain_role("r9"));
        assert!(!registry.contains("other-guild", "r9"));
    }

    #[test]
    fn test_contains_unknown_guild_and_role() {
        let registry = AdminRoleRegistry::new();
        assert!(!registry.contains("unknown-guild", "any-role"));

        registry.initialize_guild("g1", &[admin_role("r1")]);
        assert!(!registry.contains("g1", "never-seen"));
    }

    #[test]
    fn test_is_authorized_requires_one_admin_role() {
        let registry = AdminRoleRegistry::new();
        registry.initialize_guild(
            "g1",
            &[plain_role("r1"), Role::new("r2", RolePermissions::ADMINISTRATOR)],
        );

        assert!(!registry.is_authorized("g1", &["r1".to_owned()]));
        assert!(registry.is_authorized("g1", &["r1".to_owned(), "r2".to_owned()]));
    }

    #[test]
    fn test_is_authorized_unknown_guild_and_empty_roles() {
        let registry = AdminRoleRegistry::new();

        assert!(!registry.is_authorized("unknown-guild", &[]));
        assert!(!registry.is_authorized("unknown-guild", &["r1".to_owned()]));

        registry.initialize_guild("g1", &[admin_role("r1")]);
        assert!(!registry.is_authorized("g1", &[]));
    }

    #[test]
    fn test_concurrent_updates_do_not_lose_writes() {
        use std::sync::Arc;

        let registry = Arc::new(AdminRoleRegistry::new());
        let mut handles = Vec::new();

        for i in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                let role = admin_role(&format!("r{i}"));
                for _ in 0..100 {
                    registry.apply_role_update("g1", &role);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.admin_role_count("g1"), 8);
        for i in 0..8 {
            assert!(registry.contains("g1", &format!("r{i}")));
        }
    }
}
