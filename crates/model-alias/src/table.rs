//! Compiled per-channel alias table: channel -> lowercase alias -> upstream name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config_list::ModelAliasEntry;
use crate::identifier::ParsedModel;

/// One admin-configured alias: `alias` is what clients send, `name` is what
/// the upstream provider expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AliasEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
}

impl AliasEntry {
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
        }
    }
}

impl ModelAliasEntry for AliasEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> &str {
        &self.alias
    }
}

/// Immutable reverse lookup built from one configuration generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    reverse: HashMap<String, HashMap<String, String>>,
}

impl AliasTable {
    /// Compile raw per-channel entries.
    ///
    /// Channel keys are trimmed and lowercased. Entries with a blank name or
    /// alias, or whose name equals the alias ignoring case, are dropped. The
    /// first entry for a given alias wins; channels left empty are omitted.
    pub fn compile(aliases: &HashMap<String, Vec<AliasEntry>>) -> Self {
        let mut reverse = HashMap::with_capacity(aliases.len());
        for (raw_channel, entries) in aliases {
            let channel = raw_channel.trim().to_lowercase();
            if channel.is_empty() || entries.is_empty() {
                continue;
            }
            let mut rev: HashMap<String, String> = HashMap::with_capacity(entries.len());
            for entry in entries {
                let name = entry.name.trim();
                let alias = entry.alias.trim();
                if name.is_empty() || alias.is_empty() || eq_fold(name, alias) {
                    tracing::trace!(channel = %channel, name, alias, "dropping alias entry");
                    continue;
                }
                rev.entry(alias.to_lowercase())
                    .or_insert_with(|| name.to_string());
            }
            if !rev.is_empty() {
                reverse.insert(channel, rev);
            }
        }
        Self { reverse }
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// Number of aliases across all channels.
    pub fn len(&self) -> usize {
        self.reverse.values().map(HashMap::len).sum()
    }

    /// Channels with at least one alias, sorted.
    pub fn channels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.reverse.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }

    /// Upstream name for `alias` in `channel`, ignoring case on both.
    pub fn lookup(&self, channel: &str, alias: &str) -> Option<&str> {
        lookup_alias(self.channel_map(channel)?, alias)
    }

    fn channel_map(&self, channel: &str) -> Option<&HashMap<String, String>> {
        self.reverse.get(&channel.trim().to_lowercase())
    }

    /// Resolve `requested` to the upstream model for `channel`.
    ///
    /// Returns `None` when nothing matches or when the match is the requested
    /// base itself. Thinking and image suffixes of the request are carried
    /// over to the upstream name.
    pub fn resolve_upstream_model(&self, channel: &str, requested: &str) -> Option<String> {
        if channel.is_empty() {
            return None;
        }
        let rev = self.channel_map(channel)?;
        let parsed = ParsedModel::parse(requested);
        let original = parsed
            .candidates()
            .into_iter()
            .find_map(|candidate| lookup_alias(rev, candidate))?;
        if eq_fold(original, &parsed.base) {
            return None;
        }
        parsed.preserve_suffix(original)
    }
}

fn lookup_alias<'a>(rev: &'a HashMap<String, String>, alias: &str) -> Option<&'a str> {
    let key = alias.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    rev.get(&key).map(String::as_str)
}

/// Case-insensitive equality under full Unicode lowercasing.
pub(crate) fn eq_fold(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
