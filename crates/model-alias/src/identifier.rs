//! A requested model id split into base name, image token and thinking suffix.

use crate::image::{parse_image_model_suffixes, resolution_token};
use crate::thinking::{SuffixResult, parse_suffix};

/// Requested model id parsed once up front; flattened back to a string only
/// when producing the upstream id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedModel {
    /// The id as requested.
    pub requested: String,
    /// `requested` without its thinking suffix.
    pub base: String,
    /// `base` with every image token removed.
    pub base_no_image: String,
    /// Resolution token exactly as written in the request (e.g. `-4k`).
    pub image_token: Option<String>,
    pub thinking: SuffixResult,
}

impl ParsedModel {
    pub fn parse(requested: &str) -> Self {
        let thinking = parse_suffix(requested);
        let base = thinking.model_name.clone();
        let image = parse_image_model_suffixes(&base);
        let image_token = image
            .image_size
            .and_then(|_| resolution_token(&base))
            .map(str::to_string);
        Self {
            requested: requested.to_string(),
            base,
            base_no_image: image.base_model,
            image_token,
            thinking,
        }
    }

    /// Lookup keys in priority order: base without image tokens, base, then
    /// the raw request. Duplicates of the preceding key are skipped.
    pub fn candidates(&self) -> Vec<&str> {
        let mut out = vec![self.base_no_image.as_str()];
        if self.base_no_image != self.base {
            out.push(self.base.as_str());
        }
        if self.base != self.requested {
            out.push(self.requested.as_str());
        }
        out
    }

    /// Rebuild the upstream id around `canonical`.
    ///
    /// The image token is always re-appended. The request's thinking suffix
    /// follows it unless `canonical` carries its own suffix, which wins.
    pub fn preserve_suffix(&self, canonical: &str) -> Option<String> {
        let canonical = canonical.trim();
        if canonical.is_empty() {
            return None;
        }
        let mut result = canonical.to_string();
        if let Some(token) = self.image_token.as_deref() {
            result.push_str(token);
        }
        if parse_suffix(canonical).has_suffix {
            return Some(result);
        }
        if let Some(suffix) = self.thinking.parenthesized() {
            result.push_str(&suffix);
        }
        Some(result)
    }
}
