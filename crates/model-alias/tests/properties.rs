use std::collections::HashMap;

use model_alias::{AliasEntry, AliasTable, resolve_from_configured_models};
use proptest::prelude::*;

fn single(channel: &str, name: &str, alias: &str) -> AliasTable {
    let mut raw = HashMap::new();
    raw.insert(channel.to_string(), vec![AliasEntry::new(name, alias)]);
    AliasTable::compile(&raw)
}

proptest! {
    #[test]
    fn thinking_budget_round_trips(budget in 0u32..1_000_000) {
        let t = single("claude", "claude-sonnet-4-5", "sonnet");
        let got = t.resolve_upstream_model("claude", &format!("sonnet({budget})"));
        prop_assert_eq!(got, Some(format!("claude-sonnet-4-5({budget})")));
    }

    #[test]
    fn alias_case_never_matters(alias in "[a-z][a-z0-9]{2,12}", mask in proptest::collection::vec(any::<bool>(), 13)) {
        let requested: String = alias
            .chars()
            .zip(mask.iter().chain(std::iter::repeat(&false)))
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        let t = single("qwen", "qwen3-max-preview", &alias);
        prop_assert_eq!(
            t.resolve_upstream_model("qwen", &requested),
            Some("qwen3-max-preview".to_string())
        );
    }

    #[test]
    fn list_and_table_agree_on_alias_hits(budget in 1u32..65_536, four_k in any::<bool>()) {
        let token = if four_k { "-4k" } else { "-2k" };
        let requested = format!("banana{token}({budget})");
        let t = single("antigravity", "gemini-3-pro-image", "banana");
        let list = vec![AliasEntry::new("gemini-3-pro-image", "banana")];
        prop_assert_eq!(
            t.resolve_upstream_model("antigravity", &requested),
            resolve_from_configured_models(&requested, &list)
        );
    }
}
