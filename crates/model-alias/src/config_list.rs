//! Alias resolution over a plain list of configured models, used by
//! configuration surfaces that keep their own `{name, alias}` lists instead of
//! the compiled channel table.

use crate::identifier::ParsedModel;
use crate::table::eq_fold;

/// A configured model that may be requested by name or alias.
pub trait ModelAliasEntry {
    fn name(&self) -> &str;
    fn alias(&self) -> &str;
}

/// Resolve `requested` against `models`, scanned in order.
///
/// Each lookup candidate is tried against every entry, alias before name,
/// ignoring case. The matched entry's name is the upstream model; an entry
/// without a name resolves to the candidate itself. Suffixes are carried
/// over as for the alias table, without the identity check.
pub fn resolve_from_configured_models<E: ModelAliasEntry>(
    requested: &str,
    models: &[E],
) -> Option<String> {
    let requested = requested.trim();
    if requested.is_empty() || models.is_empty() {
        return None;
    }
    let parsed = ParsedModel::parse(requested);
    for candidate in parsed.candidates() {
        if candidate.is_empty() {
            continue;
        }
        for model in models {
            let name = model.name().trim();
            let alias = model.alias().trim();
            if !alias.is_empty() && eq_fold(alias, candidate) {
                let canonical = if name.is_empty() { candidate } else { name };
                return parsed.preserve_suffix(canonical);
            }
            if !name.is_empty() && eq_fold(name, candidate) {
                return parsed.preserve_suffix(name);
            }
        }
    }
    None
}
