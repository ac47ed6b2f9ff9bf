//! Thinking suffix: a trailing `(...)` block on a model id carrying an
//! opaque reasoning/effort annotation, e.g. `gemini-2.5-pro(8192)`.

/// Result of splitting a model id into its base name and thinking suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixResult {
    /// Model id with the trailing `(...)` block removed.
    pub model_name: String,
    pub has_suffix: bool,
    /// Interior text of the block, verbatim.
    pub raw_suffix: String,
}

impl SuffixResult {
    /// The suffix re-wrapped in parentheses, or `None` when absent or empty.
    pub fn parenthesized(&self) -> Option<String> {
        if self.has_suffix && !self.raw_suffix.is_empty() {
            Some(format!("({})", self.raw_suffix))
        } else {
            None
        }
    }
}

/// Split off a trailing `(...)` block.
///
/// The block opens at the last `(` in the id and must close at the very end.
pub fn parse_suffix(model: &str) -> SuffixResult {
    let no_suffix = || SuffixResult {
        model_name: model.to_string(),
        has_suffix: false,
        raw_suffix: String::new(),
    };
    let Some(inner) = model.strip_suffix(')') else {
        return no_suffix();
    };
    let Some(open) = inner.rfind('(') else {
        return no_suffix();
    };
    SuffixResult {
        model_name: inner[..open].to_string(),
        has_suffix: true,
        raw_suffix: inner[open + 1..].to_string(),
    }
}
