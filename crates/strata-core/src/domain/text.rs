//! Text normalisation for keyword matching.
//!
//! Every keyword-matching operation in the domain goes through [`normalize`]
//! first, so accented and unaccented spellings of the same word compare equal
//! ("botão" and "botao" are the same keyword). Normalisation is NFD
//! decomposition followed by combining-mark removal — plain
//! `to_lowercase` is not enough for Portuguese input.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Words too common to carry meaning, in both input languages.
///
/// Used by [`meaningful_words`] and by the naming concept extractor. Kept
/// deliberately small; over-aggressive stop-word lists eat real concepts.
pub static STOP_WORDS: &[&str] = &[
    // Portuguese
    "de", "da", "do", "das", "dos", "um", "uma", "uns", "umas", "com", "para",
    "por", "que", "em", "no", "na", "nos", "nas", "e", "ou", "o", "a", "os",
    "as", "ao", "aos", "se", "seu", "sua", "mais", "como", "muito", "deve",
    "ser", "ter", "tem", "esse", "essa", "este", "esta", "isso",
    // English
    "the", "an", "of", "with", "for", "and", "or", "in", "on", "at", "to",
    "is", "are", "be", "this", "that", "it", "its", "by", "from", "has",
    "have", "should", "must", "will", "can", "component",
];

/// Normalise free text for matching.
///
/// Lowercases, strips diacritics (NFD + combining-mark removal), replaces any
/// non-word character with a space, collapses whitespace runs, and trims.
/// Total function: never fails, empty input gives empty output.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    // NFD splits "ã" into "a" + U+0303; dropping the marks leaves "a".
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut spaced = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        if c.is_alphanumeric() || c == '_' {
            spaced.push(c);
        } else {
            spaced.push(' ');
        }
    }

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split an already-normalised string into tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// True if `word` carries no meaning on its own.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Extract the meaningful tokens of a normalised string: longer than three
/// characters and not a stop word. These extend the caller-supplied feature
/// list during classification and seed naming concepts.
pub fn meaningful_words(normalized: &str) -> Vec<String> {
    tokenize(normalized)
        .into_iter()
        .filter(|t| t.len() > 3 && !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Botão Grande  "), "botao grande");
    }

    #[test]
    fn strips_diacritics_via_nfd() {
        assert_eq!(normalize("confirmação"), "confirmacao");
        assert_eq!(normalize("usuário"), "usuario");
        assert_eq!(normalize("ação"), "acao");
    }

    #[test]
    fn punctuation_becomes_spaces() {
        assert_eq!(normalize("modal/dialog, com: form!"), "modal dialog com form");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a   b\t\nc"), "a b c");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  !!  "), "");
    }

    #[test]
    fn underscores_survive() {
        assert_eq!(normalize("use_case"), "use_case");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("Botão de Confirmação!");
        assert_eq!(normalize(&once), once);
    }

    // ── meaningful_words ─────────────────────────────────────────────────────

    #[test]
    fn short_tokens_are_dropped() {
        let words = meaningful_words("um botao azul");
        assert_eq!(words, vec!["botao".to_string(), "azul".to_string()]);
    }

    #[test]
    fn stop_words_are_dropped() {
        let words = meaningful_words("botao para formulario");
        assert_eq!(words, vec!["botao".to_string(), "formulario".to_string()]);
    }

    #[test]
    fn stop_words_longer_than_three_chars_are_still_dropped() {
        // "para" and "como" have four characters.
        assert!(!meaningful_words("para como").iter().any(|w| w == "para"));
    }
}
