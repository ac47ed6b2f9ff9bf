//! Image model suffixes: resolution (`-2k`, `-4k`, `-hd`) and aspect ratio
//! (`-16x9`, `-16-9`, ...) tokens embedded in a model id.
//!
//! Tokens are matched as substrings anywhere in the id, ignoring ASCII case.
//! A base name that legitimately contains a token (say `-2k`) is therefore
//! misread as carrying an image suffix.

/// Requested output resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSize {
    TwoK,
    FourK,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

/// Requested output aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Ratio21x9,
    Ratio16x9,
    Ratio9x16,
    Ratio4x3,
    Ratio3x4,
    Ratio1x1,
}

impl AspectRatio {
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Ratio21x9 => "21:9",
            AspectRatio::Ratio16x9 => "16:9",
            AspectRatio::Ratio9x16 => "9:16",
            AspectRatio::Ratio4x3 => "4:3",
            AspectRatio::Ratio3x4 => "3:4",
            AspectRatio::Ratio1x1 => "1:1",
        }
    }
}

/// Image settings parsed out of a model id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// Model id with every recognized token removed.
    pub base_model: String,
    pub aspect_ratio: Option<AspectRatio>,
    pub image_size: Option<ImageSize>,
}

// Detection order matters: the first matching row wins.
const ASPECT_TOKENS: [(&str, &str, AspectRatio); 6] = [
    ("-21x9", "-21-9", AspectRatio::Ratio21x9),
    ("-16x9", "-16-9", AspectRatio::Ratio16x9),
    ("-9x16", "-9-16", AspectRatio::Ratio9x16),
    ("-4x3", "-4-3", AspectRatio::Ratio4x3),
    ("-3x4", "-3-4", AspectRatio::Ratio3x4),
    ("-1x1", "-1-1", AspectRatio::Ratio1x1),
];

// Removed one after another, each pass on the output of the previous one.
const STRIP_TOKENS: [&str; 15] = [
    "-4k", "-2k", "-hd", "-21x9", "-21-9", "-16x9", "-16-9", "-9x16", "-9-16", "-4x3", "-4-3",
    "-3x4", "-3-4", "-1x1", "-1-1",
];

// Order used to recover the literal resolution token for re-append.
const RESOLUTION_TOKENS: [&str; 3] = ["-4k", "-2k", "-hd"];

/// Parse resolution and aspect ratio tokens out of `model`.
///
/// e.g. `gemini-3-pro-image-preview-4k-16x9` -> base
/// `gemini-3-pro-image-preview`, `16:9`, `4K`.
pub fn parse_image_model_suffixes(model: &str) -> ImageConfig {
    let lower = model.to_ascii_lowercase();

    let aspect_ratio = ASPECT_TOKENS
        .iter()
        .find(|(x, dash, _)| lower.contains(x) || lower.contains(dash))
        .map(|(_, _, ratio)| *ratio);

    let image_size = if lower.contains("-4k") || lower.contains("-hd") {
        Some(ImageSize::FourK)
    } else if lower.contains("-2k") {
        Some(ImageSize::TwoK)
    } else {
        None
    };

    let base_model = STRIP_TOKENS
        .iter()
        .fold(model.to_string(), |acc, token| remove_all_ignore_case(&acc, token));

    ImageConfig {
        base_model,
        aspect_ratio,
        image_size,
    }
}

/// The resolution token exactly as written in `model`, testing `-4k`, `-2k`
/// and `-hd` in that order.
pub fn resolution_token(model: &str) -> Option<&str> {
    let lower = model.to_ascii_lowercase();
    RESOLUTION_TOKENS.iter().find_map(|token| {
        lower
            .find(token)
            .map(|idx| &model[idx..idx + token.len()])
    })
}

/// Whether `model_id` names an image generation model that gets resolution
/// variants in the catalog.
pub fn is_image_generation_model(model_id: &str) -> bool {
    let lower = model_id.to_ascii_lowercase();
    ["-image-preview", "-image-generation", "-pro-image", "imagen-"]
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Resolution variant ids advertised for an image model: `<id>-2k`, `<id>-4k`.
pub fn image_model_variants(model_id: &str) -> Vec<String> {
    ["-2k", "-4k"]
        .iter()
        .map(|res| format!("{model_id}{res}"))
        .collect()
}

// `needle` must be lowercase ASCII. ASCII lowercasing keeps byte offsets, so
// match positions in the lowered copy index the original directly.
fn remove_all_ignore_case(haystack: &str, needle: &str) -> String {
    let lower = haystack.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (idx, _) in lower.match_indices(needle) {
        out.push_str(&haystack[last..idx]);
        last = idx + needle.len();
    }
    out.push_str(&haystack[last..]);
    out
}
