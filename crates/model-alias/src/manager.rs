//! Process-wide holder of the active alias table.
//!
//! Reloads compile a complete table off to the side and publish it with a
//! single atomic store. Each resolution loads the published table once and
//! uses only that snapshot.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use arc_swap::ArcSwapOption;

use crate::channel::{AuthContext, channel_for};
use crate::config::load_config;
use crate::table::{AliasEntry, AliasTable};

#[derive(Debug)]
pub struct AliasManager {
    table: ArcSwapOption<AliasTable>,
}

impl Default for AliasManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasManager {
    /// A manager with no published table; everything resolves to "no rewrite".
    pub fn new() -> Self {
        Self {
            table: ArcSwapOption::empty(),
        }
    }

    /// Compile `aliases` and publish the result, replacing the active table.
    pub fn set_aliases(&self, aliases: &HashMap<String, Vec<AliasEntry>>) {
        self.publish(AliasTable::compile(aliases));
    }

    pub fn publish(&self, table: AliasTable) {
        tracing::info!(
            channels = table.channels().len(),
            aliases = table.len(),
            "publishing model alias table"
        );
        self.table.store(Some(Arc::new(table)));
    }

    /// The currently published table, if any.
    pub fn snapshot(&self) -> Option<Arc<AliasTable>> {
        self.table.load_full()
    }

    /// Load `path` and publish its aliases. On failure the active table is
    /// left untouched.
    pub fn reload_from_file(&self, path: &Path) -> anyhow::Result<()> {
        let cfg = load_config(path)
            .inspect_err(|e| {
                tracing::warn!(
                    "model alias reload from {} failed, keeping previous table: {:#}",
                    path.display(),
                    e
                )
            })
            .with_context(|| format!("reloading model aliases from {}", path.display()))?;
        self.set_aliases(&cfg.oauth_model_alias);
        Ok(())
    }

    /// Upstream model for `requested` on `channel`, or `None` for no rewrite.
    pub fn resolve_upstream_model(&self, channel: &str, requested: &str) -> Option<String> {
        let table = self.snapshot()?;
        table.resolve_upstream_model(channel, requested)
    }

    /// Upstream model for `requested` on the channel implied by `auth`.
    pub fn resolve_for_auth<A: AuthContext + ?Sized>(
        &self,
        auth: &A,
        requested: &str,
    ) -> Option<String> {
        let channel = channel_for(auth)?;
        self.resolve_upstream_model(channel, requested)
    }

    /// Like [`resolve_for_auth`](Self::resolve_for_auth), falling back to the
    /// requested model when there is no rewrite.
    pub fn apply_alias<A: AuthContext + ?Sized>(&self, auth: &A, requested: &str) -> String {
        match self.resolve_for_auth(auth, requested) {
            Some(upstream) => {
                tracing::debug!(
                    provider = auth.provider(),
                    "model alias: '{}' -> '{}'",
                    requested,
                    upstream
                );
                upstream
            }
            None => requested.to_string(),
        }
    }
}
