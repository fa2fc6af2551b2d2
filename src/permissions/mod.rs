//! Role permission types and the privilege classifier.
//!
//! A role qualifies as administrative for the bot's command surface when its
//! permission bitset carries any of the [`RolePermissions::PRIVILEGED`] flags.

pub mod models;
pub mod role;

pub use models::Role;
pub use role::RolePermissions;
