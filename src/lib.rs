//! rolewarden
//!
//! Role-gated automation bot for self-hosted chat platforms. Tracks which
//! guild roles count as administrative for the bot's command surface, keeps
//! that tracking in sync with role changes from the platform gateway, and
//! refuses commands from members holding no admin role.

pub mod config;
pub mod db;
pub mod dispatcher;
pub mod gateway;
pub mod permissions;
pub mod registry;
