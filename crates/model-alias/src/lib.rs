//! Model alias resolution for a multi-provider gateway.
//!
//! Clients request models by alias; upstream providers expect canonical
//! names. A requested id may carry a thinking suffix (`(8192)`) and image
//! tokens (`-4k`, `-16x9`), which survive the rewrite.
//!
//! - [`table::AliasTable`] compiles per-channel `{name, alias}` entries.
//! - [`channel::alias_channel`] picks the channel for a provider/auth kind.
//! - [`manager::AliasManager`] publishes table snapshots and resolves against them.
//! - [`config_list::resolve_from_configured_models`] resolves against a plain list.

pub mod channel;
pub mod config;
pub mod config_list;
pub mod identifier;
pub mod image;
pub mod logging;
pub mod manager;
pub mod table;
pub mod thinking;

pub use channel::{Auth, AuthContext, alias_channel, channel_for};
pub use config_list::{ModelAliasEntry, resolve_from_configured_models};
pub use manager::AliasManager;
pub use table::{AliasEntry, AliasTable};
