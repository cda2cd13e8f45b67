// WHY: Each pipeline stage as a standalone function so stage order stays visible in one place
// Patterns are compiled once per process and shared read-only across threads

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters trimmed from both ends of a candidate title
pub const EDGE_PUNCTUATION: &[char] = &[
    '"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '`',
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '<', '>', '-',
];

static RE_LEADING_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[,\-–¨\s]+").expect("leading separator pattern"));

static RE_QUOTE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""{2,}"#).expect("quote run pattern"));

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern")
});

static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9()\s\-]{7,}$").expect("phone pattern"));

static RE_SEPARATORS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-_. ]+$").expect("separator-only pattern"));

// No bare `v` or `x`: "Grade v" stays as written
static RE_ROMAN_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\b[A-Za-z]+[ -])(i{1,3}|iv|vi{1,3}|ix)\b").expect("roman numeral pattern")
});

static RE_VERTICAL_BAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*").expect("vertical bar pattern"));

static RE_SLASH_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\b\w{4,}\b)\s*/\s*(\b\w{4,}\b)").expect("slash pattern"));

static RE_POST_DOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bPost Doc\b").expect("post doc pattern"));

// HTML5 names that also decode without a trailing semicolon
const LEGACY_ENTITY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren",
    "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34",
    "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

static RE_ENTITY_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*)(;?)").expect("entity pattern")
});

/// Add the missing semicolon to numeric and legacy named references
///
/// The longest legacy name prefixing the reference wins, so `&amperstand`
/// becomes `&amp;erstand`. Unknown names are left as written.
pub fn terminate_legacy_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    RE_ENTITY_REFERENCE.replace_all(text, |caps: &Captures| {
        let body = &caps[1];
        if !caps[2].is_empty() {
            return format!("&{body};");
        }
        if body.starts_with('#') {
            return format!("&{body};");
        }
        let legacy = LEGACY_ENTITY_NAMES
            .iter()
            .filter(|name| body.starts_with(**name))
            .max_by_key(|name| name.len());
        match legacy {
            Some(name) => format!("&{name};{}", &body[name.len()..]),
            None => format!("&{body}"),
        }
    })
}

/// Decode HTML entities, then trim surrounding whitespace
pub fn decode_and_trim(raw: &str) -> String {
    let terminated = terminate_legacy_entities(raw);
    html_escape::decode_html_entities(&terminated).trim().to_string()
}

/// Remove edge punctuation, quotes, brackets and whitespace from both ends
pub fn strip_edge_punctuation(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || EDGE_PUNCTUATION.contains(&c))
}

/// Earlier-generation strip: leading commas, hyphens, en dashes, diaereses and whitespace only
pub fn strip_leading_separators(text: &str) -> Cow<'_, str> {
    RE_LEADING_SEPARATORS.replace(text, "")
}

/// Remove one wrapping pair of double quotes, then one wrapping pair of parentheses
pub fn unwrap_enclosing(text: &str) -> &str {
    let unquoted = unwrap_pair(text, '"', '"');
    unwrap_pair(unquoted, '(', ')')
}

fn unwrap_pair(text: &str, open: char, close: char) -> &str {
    if text.chars().count() < 2 {
        return text;
    }
    text.strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .unwrap_or(text)
}

/// Earlier-generation rule: drop leading backticks
pub fn strip_leading_backticks(text: &str) -> &str {
    text.trim_start_matches('`')
}

/// Delete every run of two or more consecutive double quotes
pub fn remove_quote_runs(text: &str) -> Cow<'_, str> {
    RE_QUOTE_RUN.replace_all(text, "")
}

/// Canonically decompose and drop combining marks: "café" becomes "cafe"
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Delete embedded email addresses and re-trim
pub fn remove_emails(text: &str) -> String {
    RE_EMAIL.replace_all(text, "").trim().to_string()
}

/// Printable 7-bit text; whitespace inside the title is allowed
pub fn is_printable_ascii(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_graphic() || c.is_ascii_whitespace())
}

/// Phone numbers, bare numbers, separator-only strings and single characters
pub fn is_degenerate(text: &str) -> bool {
    let numeric = !text.is_empty() && text.chars().all(is_digit_char);
    RE_PHONE.is_match(text)
        || numeric
        || RE_SEPARATORS_ONLY.is_match(text)
        || text.chars().count() == 1
}

/// Uppercase a roman numeral that follows a word and a space or hyphen
pub fn uppercase_roman_numerals(text: &str) -> Cow<'_, str> {
    RE_ROMAN_SUFFIX.replace_all(text, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    })
}

/// Turn pipe-delimited lists into comma-separated ones
pub fn normalize_vertical_bars(text: &str) -> Cow<'_, str> {
    RE_VERTICAL_BAR.replace_all(text, ", ")
}

/// Space out a slash between two words of four or more word characters
pub fn space_slashes(text: &str) -> Cow<'_, str> {
    RE_SLASH_PAIR.replace_all(text, "${1} / ${2}")
}

fn is_decimal_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Decimal digits in any script, plus characters compatibility-equivalent to one
/// (superscript and circled digits). Fractions and CJK numerals are not digits.
pub fn is_digit_char(c: char) -> bool {
    if is_decimal_digit(c) {
        return true;
    }
    let mut decomposed = std::iter::once(c).nfkd();
    matches!(
        (decomposed.next(), decomposed.next()),
        (Some(single), None) if single != c && is_decimal_digit(single)
    )
}

/// Lowercase a capitalized "And" sitting strictly between two words
///
/// Runs after word casing, so only the exact token `And` is considered.
pub fn lowercase_conjunctions(text: &str) -> String {
    let tokens: Vec<&str> = text.split(' ').collect();
    let ends_in_word = |t: &str| t.chars().last().is_some_and(is_word_char);
    let starts_with_word = |t: &str| t.chars().next().is_some_and(is_word_char);

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let interior = *token == "And"
                && i > 0
                && i + 1 < tokens.len()
                && ends_in_word(tokens[i - 1])
                && starts_with_word(tokens[i + 1]);
            if interior { "and" } else { token }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Rewrite any casing of "post doc" as "Post Doc"
pub fn canonicalize_post_doc(text: &str) -> Cow<'_, str> {
    RE_POST_DOC.replace_all(text, "Post Doc")
}
