// crates/job-search/src/domain/search/text.rs

use regex::{Captures, Regex};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HIDDEN_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<!--.*?-->").unwrap()
});

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z]{2,8});").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Texte riche (HTML de l'éditeur) -> texte brut indexable.
pub fn strip_markup(html: &str) -> String {
    let without_hidden = HIDDEN_BLOCK_REGEX.replace_all(html, " ");
    let without_tags = TAG_REGEX.replace_all(&without_hidden, " ");
    let decoded = ENTITY_REGEX.replace_all(&without_tags, |caps: &Captures| decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string()));

    collapse_whitespace(&decoded.nfc().collect::<String>())
}

/// Normalisation du mot-clé pour les requêtes phrase/fuzzy :
/// NFC, minuscules, ponctuation retirée, espaces compactés.
pub fn normalize_keyword(raw: &str) -> String {
    let cleaned: String = raw
        .nfc()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    collapse_whitespace(&cleaned)
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    let decoded = match entity {
        "nbsp" => ' ',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        numeric if numeric.starts_with("#x") || numeric.starts_with("#X") => {
            char::from_u32(u32::from_str_radix(&numeric[2..], 16).ok()?)?
        }
        numeric if numeric.starts_with('#') => char::from_u32(numeric[1..].parse().ok()?)?,
        _ => return None,
    };
    Some(decoded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_removes_tags_and_decodes_entities() {
        let html = "<p>Build <b>Rust</b>&nbsp;services &amp; APIs</p><ul><li>Tokio</li></ul>";
        assert_eq!(strip_markup(html), "Build Rust services & APIs Tokio");
    }

    #[test]
    fn test_strip_markup_drops_script_style_and_comments() {
        let html = "<style>.x{color:red}</style>Hello<script>alert('x')</script><!-- note --> world";
        assert_eq!(strip_markup(html), "Hello world");
    }

    #[test]
    fn test_strip_markup_keeps_unknown_entities_and_decodes_numeric_ones() {
        assert_eq!(strip_markup("a &foo; b &#233; &#x41;"), "a &foo; b é A");
    }

    #[test]
    fn test_normalize_keyword() {
        assert_eq!(normalize_keyword("  Senior   Rust-Developer!! "), "senior rust developer");
        assert_eq!(normalize_keyword("Kỹ sư Phần mềm"), "kỹ sư phần mềm");
        assert_eq!(normalize_keyword("?!"), "");
    }
}
