use std::collections::HashMap;

use model_alias::{AliasEntry, AliasManager, Auth, alias_channel};

fn manager(channel: &str, pairs: &[(&str, &str)]) -> AliasManager {
    let mut raw = HashMap::new();
    raw.insert(
        channel.to_string(),
        pairs
            .iter()
            .map(|(name, alias)| AliasEntry::new(*name, *alias))
            .collect::<Vec<_>>(),
    );
    let m = AliasManager::new();
    m.set_aliases(&raw);
    m
}

#[test]
fn alias_resolves_to_canonical() {
    let m = manager("claude", &[("claude-sonnet-4-5-20250929", "sonnet")]);
    assert_eq!(
        m.resolve_upstream_model("claude", "sonnet").as_deref(),
        Some("claude-sonnet-4-5-20250929")
    );
}

#[test]
fn thinking_suffix_carried_through() {
    let m = manager("gemini-cli", &[("gemini-2.5-pro", "g25p")]);
    assert_eq!(
        m.resolve_upstream_model("gemini-cli", "g25p(8192)").as_deref(),
        Some("gemini-2.5-pro(8192)")
    );
}

#[test]
fn configured_suffix_takes_priority() {
    let m = manager("codex", &[("gpt-5-codex(high)", "coder")]);
    assert_eq!(
        m.resolve_upstream_model("codex", "coder(8192)").as_deref(),
        Some("gpt-5-codex(high)")
    );
}

#[test]
fn image_suffix_carried_through() {
    let m = manager("antigravity", &[("gemini-3-pro-image", "nano-banana")]);
    assert_eq!(
        m.resolve_upstream_model("antigravity", "nano-banana-4k")
            .as_deref(),
        Some("gemini-3-pro-image-4k")
    );
    assert_eq!(
        m.resolve_upstream_model("antigravity", "nano-banana-4k(8192)")
            .as_deref(),
        Some("gemini-3-pro-image-4k(8192)")
    );
    assert_eq!(
        m.resolve_upstream_model("antigravity", "nano-banana-hd")
            .as_deref(),
        Some("gemini-3-pro-image-hd")
    );
}

#[test]
fn aspect_tokens_are_stripped_for_lookup_only() {
    let m = manager("antigravity", &[("gemini-3-pro-image", "nano-banana")]);
    // aspect tokens are dropped; only the resolution token is re-appended
    assert_eq!(
        m.resolve_upstream_model("antigravity", "nano-banana-2k-16x9")
            .as_deref(),
        Some("gemini-3-pro-image-2k")
    );
}

#[test]
fn identity_is_no_rewrite() {
    let m = manager("qwen", &[("Coder", "coder(fast)")]);
    assert_eq!(m.resolve_upstream_model("qwen", "coder(fast)"), None);
}

#[test]
fn unknown_alias_is_no_rewrite() {
    let m = manager("qwen", &[("qwen3-coder-plus", "coder")]);
    assert_eq!(m.resolve_upstream_model("qwen", "writer"), None);
    assert_eq!(m.resolve_upstream_model("iflow", "coder"), None);
    assert_eq!(m.resolve_upstream_model("qwen", ""), None);
}

#[test]
fn matching_ignores_case() {
    let m = manager("claude", &[("claude-3-opus-20240229", "claude-3-opus")]);
    assert_eq!(
        m.resolve_upstream_model("claude", "CLAUDE-3-OPUS").as_deref(),
        Some("claude-3-opus-20240229")
    );
}

#[test]
fn first_declared_duplicate_wins() {
    let m = manager("vertex", &[("n1", "a"), ("n2", "A")]);
    assert_eq!(m.resolve_upstream_model("vertex", "a").as_deref(), Some("n1"));
}

#[test]
fn channel_mapping() {
    assert_eq!(alias_channel("claude", "apikey"), None);
    assert_eq!(alias_channel("claude", "oauth"), Some("claude"));
    assert_eq!(alias_channel("gemini", "oauth"), None);
    assert_eq!(alias_channel("qwen", "apikey"), Some("qwen"));
}

#[test]
fn apply_alias_falls_back_to_request() {
    let m = manager("claude", &[("claude-opus-4-1-20250805", "opus")]);
    let oauth = Auth::new("claude").with_attribute("auth_kind", "oauth");
    let gemini = Auth::new("gemini");
    assert_eq!(m.apply_alias(&oauth, "opus-4k(1024)"), "claude-opus-4-1-20250805-4k(1024)");
    assert_eq!(m.apply_alias(&gemini, "opus"), "opus");
    assert_eq!(m.apply_alias(&oauth, "haiku"), "haiku");
}

#[test]
fn alias_containing_image_token_still_carries_it() {
    let m = manager("antigravity", &[("gemini-3-pro-image", "banana-4k")]);
    assert_eq!(
        m.resolve_upstream_model("antigravity", "banana-4k(8192)")
            .as_deref(),
        Some("gemini-3-pro-image-4k(8192)")
    );
}

#[test]
fn non_ascii_alias_matches_any_case() {
    let m = manager("claude", &[("claude-opus-4-1", "Опус")]);
    assert_eq!(
        m.resolve_upstream_model("claude", "опус").as_deref(),
        Some("claude-opus-4-1")
    );
}
