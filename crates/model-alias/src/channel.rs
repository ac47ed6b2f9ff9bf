//! Alias channel selection from provider and auth kind.

use std::collections::HashMap;

/// Attribute carrying an explicit auth kind (e.g. `apikey`, `oauth`).
pub const AUTH_KIND_ATTRIBUTE: &str = "auth_kind";

/// Normalized auth kind for API-key accounts.
pub const API_KEY_AUTH_KIND: &str = "apikey";

/// What the alias layer needs to know about the credential serving a request.
pub trait AuthContext {
    fn provider(&self) -> &str;
    fn attribute(&self, key: &str) -> Option<&str>;
    fn is_api_key_account(&self) -> bool;
}

/// A plain auth record: provider name, free-form attributes and an optional
/// API key.
#[derive(Debug, Clone, Default)]
pub struct Auth {
    pub provider: String,
    pub attributes: HashMap<String, String>,
    pub api_key: Option<String>,
}

impl Auth {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

impl AuthContext for Auth {
    fn provider(&self) -> &str {
        &self.provider
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn is_api_key_account(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Auth kind of `auth`: the explicit attribute when set, else `apikey` for
/// API-key accounts, else empty.
pub fn auth_kind<A: AuthContext + ?Sized>(auth: &A) -> String {
    let explicit = auth
        .attribute(AUTH_KIND_ATTRIBUTE)
        .map(|kind| kind.trim().to_ascii_lowercase())
        .unwrap_or_default();
    if !explicit.is_empty() {
        return explicit;
    }
    if auth.is_api_key_account() {
        return API_KEY_AUTH_KIND.to_string();
    }
    String::new()
}

/// Alias channel for the credential behind a request.
pub fn channel_for<A: AuthContext + ?Sized>(auth: &A) -> Option<&'static str> {
    alias_channel(auth.provider(), &auth_kind(auth))
}

/// Alias channel for `provider` under `auth_kind`, or `None` when alias
/// resolution does not apply.
///
/// Plain `gemini` always uses its API-key configuration. `vertex`, `claude`
/// and `codex` alias only for non-API-key credentials.
pub fn alias_channel(provider: &str, auth_kind: &str) -> Option<&'static str> {
    let provider = provider.trim().to_ascii_lowercase();
    let api_key = auth_kind.trim().eq_ignore_ascii_case(API_KEY_AUTH_KIND);
    match provider.as_str() {
        "vertex" if !api_key => Some("vertex"),
        "claude" if !api_key => Some("claude"),
        "codex" if !api_key => Some("codex"),
        "gemini-cli" => Some("gemini-cli"),
        "aistudio" => Some("aistudio"),
        "antigravity" => Some("antigravity"),
        "qwen" => Some("qwen"),
        "iflow" => Some("iflow"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_table() {
        assert_eq!(alias_channel("claude", "apikey"), None);
        assert_eq!(alias_channel("claude", "oauth"), Some("claude"));
        assert_eq!(alias_channel("gemini", "oauth"), None);
        assert_eq!(alias_channel("gemini", ""), None);
        assert_eq!(alias_channel("qwen", "apikey"), Some("qwen"));
        assert_eq!(alias_channel("vertex", ""), Some("vertex"));
        assert_eq!(alias_channel("codex", "APIKEY"), None);
        assert_eq!(alias_channel(" Antigravity ", "oauth"), Some("antigravity"));
        assert_eq!(alias_channel("openai-compat", "oauth"), None);
    }

    #[test]
    fn explicit_attribute_wins() {
        let auth = Auth::new("claude")
            .with_attribute(AUTH_KIND_ATTRIBUTE, " OAuth ")
            .with_api_key("sk-1");
        assert_eq!(auth_kind(&auth), "oauth");
        assert_eq!(channel_for(&auth), Some("claude"));
    }

    #[test]
    fn api_key_account_inferred() {
        let auth = Auth::new("codex").with_api_key("sk-1");
        assert_eq!(auth_kind(&auth), "apikey");
        assert_eq!(channel_for(&auth), None);

        let oauth = Auth::new("codex");
        assert_eq!(auth_kind(&oauth), "");
        assert_eq!(channel_for(&oauth), Some("codex"));

        let blank = Auth::new("codex").with_api_key("  ");
        assert_eq!(channel_for(&blank), Some("codex"));
    }
}
