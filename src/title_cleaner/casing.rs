// WHY: Word-level casing rules for the title pipeline
// Acronyms keep their capitals, "phd" always renders as "PhD", every other word is title-cased

use super::dictionaries::preserves_caps;
use super::Generation;

const PHD: &str = "PhD";

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase()
}

/// True when the word has at least one cased letter and no lowercase letters
pub fn is_all_upper(word: &str) -> bool {
    word.chars().any(is_cased) && !word.chars().any(char::is_lowercase)
}

/// Title-case a single word
///
/// A cased letter is uppercased when the previous character is not a cased
/// letter and lowercased otherwise: `engineer/manager` becomes
/// `Engineer/Manager`, `2nd` becomes `2Nd`, `master's` becomes `Master'S`.
pub fn title_case_word(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut prev_cased = false;

    for ch in word.chars() {
        if prev_cased {
            result.extend(ch.to_lowercase());
        } else {
            result.extend(ch.to_uppercase());
        }
        prev_cased = is_cased(ch);
    }

    result
}

/// Title-case a single word by alphanumeric runs
///
/// Digits and apostrophes continue a run, so `2nd` and `master's` keep their
/// lowercase tails. Letters after `/`, `-` or `&` still start a new run.
pub fn title_case_word_by_runs(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut in_run = false;

    for ch in word.chars() {
        if in_run {
            result.extend(ch.to_lowercase());
        } else {
            result.extend(ch.to_uppercase());
        }
        in_run = ch.is_alphanumeric() || matches!(ch, '\'' | '\u{2019}');
    }

    result
}

/// Apply casing to one whitespace-delimited word
pub fn case_word(generation: Generation, word: &str) -> String {
    if word.eq_ignore_ascii_case("phd") {
        return PHD.to_string();
    }
    if is_all_upper(word) || preserves_caps(generation, word) {
        return word.to_uppercase();
    }
    match generation {
        Generation::Baseline => title_case_word(word),
        Generation::Advanced => title_case_word_by_runs(word),
    }
}

/// Split on whitespace, case each word and rejoin with single spaces
pub fn case_words(generation: Generation, text: &str) -> String {
    text.split_whitespace()
        .map(|word| case_word(generation, word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_all_upper() {
        assert!(is_all_upper("CEO"));
        assert!(is_all_upper("R&D"));
        assert!(is_all_upper("QA/QC"));
        assert!(!is_all_upper("Ceo"));
        assert!(!is_all_upper("123"));
        assert!(!is_all_upper("--"));
    }

    #[test]
    fn test_title_case_word() {
        assert_eq!(title_case_word("manager"), "Manager");
        assert_eq!(title_case_word("mANAGER"), "Manager");
        assert_eq!(title_case_word("engineer/manager"), "Engineer/Manager");
        assert_eq!(title_case_word("vice-president"), "Vice-President");
        assert_eq!(title_case_word("professor,"), "Professor,");
        assert_eq!(title_case_word("(interim)"), "(Interim)");
        assert_eq!(title_case_word("2nd"), "2Nd");
        assert_eq!(title_case_word("master's"), "Master'S");
    }

    #[test]
    fn test_title_case_word_by_runs() {
        assert_eq!(title_case_word_by_runs("engineer/manager"), "Engineer/Manager");
        assert_eq!(title_case_word_by_runs("vice-president"), "Vice-President");
        assert_eq!(title_case_word_by_runs("2nd"), "2nd");
        assert_eq!(title_case_word_by_runs("master's"), "Master's");
        assert_eq!(title_case_word_by_runs("o\u{2019}neill"), "O\u{2019}neill");
    }

    #[test]
    fn test_case_word_special_cases() {
        for generation in [Generation::Baseline, Generation::Advanced] {
            assert_eq!(case_word(generation, "phd"), "PhD");
            assert_eq!(case_word(generation, "PHD"), "PhD");
            assert_eq!(case_word(generation, "it"), "IT");
            assert_eq!(case_word(generation, "Vp"), "VP");
            assert_eq!(case_word(generation, "CTO"), "CTO");
            assert_eq!(case_word(generation, "director"), "Director");
        }
    }

    #[test]
    fn test_case_word_generations_differ() {
        assert_eq!(case_word(Generation::Baseline, "hr"), "Hr");
        assert_eq!(case_word(Generation::Advanced, "hr"), "HR");
        assert_eq!(case_word(Generation::Baseline, "master's"), "Master'S");
        assert_eq!(case_word(Generation::Advanced, "master's"), "Master's");
    }

    #[test]
    fn test_case_words_collapses_whitespace() {
        assert_eq!(case_words(Generation::Advanced, "  head   of\tit "), "Head Of IT");
        assert_eq!(case_words(Generation::Baseline, ""), "");
    }
}
